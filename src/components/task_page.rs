//! Task Page Component
//!
//! Authenticated view: creation form, filter tabs, the task list, and the
//! pending-count footer.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{FilterBar, NewTaskForm, TaskRow};
use crate::store::use_task_store;

#[component]
pub fn TaskPage() -> impl IntoView {
    let store = use_task_store();

    // Initial load for this session
    Effect::new(move |_| {
        spawn_local(async move {
            store.refresh().await;
        });
    });

    view! {
        <main class="task-page">
            <header class="task-header">
                <h1>"My Tasks"</h1>
                <button class="logout-btn" on:click=move |_| store.sign_out()>"Logout"</button>
            </header>

            <NewTaskForm/>
            <FilterBar/>

            <div class="task-list">
                {move || {
                    store
                        .visible()
                        .into_iter()
                        .map(|task| view! { <TaskRow task/> })
                        .collect_view()
                }}
                {move || {
                    store.visible().is_empty().then(|| {
                        view! {
                            <p class="empty-state">
                                {format!("No {} tasks found.", store.filter().label())}
                            </p>
                        }
                    })
                }}
            </div>

            <p class="task-count">
                {move || {
                    let n = store.pending_count();
                    format!("You have {} pending task{}.", n, if n == 1 { "" } else { "s" })
                }}
            </p>
        </main>
    }
}
