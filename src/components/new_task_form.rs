//! New Task Form Component
//!
//! Input for creating tasks. The buffer is cleared only when the server
//! confirms the creation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::use_task_store;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let store = use_task_store();

    let (title, set_title) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get();
        if text.trim().is_empty() {
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            if store.create(&text).await {
                set_title.set(String::new());
            }
            set_busy.set(false);
        });
    };

    view! {
        <form class="new-task-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Add a new task..."
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
                disabled=move || busy.get()
            />
            <button type="submit" disabled=move || busy.get()>"Add"</button>
        </form>
    }
}
