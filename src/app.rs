//! Taskbox Frontend App
//!
//! Root component: builds the session and task store, provides both via
//! context, and gates the task page behind authentication.

use leptos::prelude::*;

use crate::components::{AuthPage, TaskPage};
use crate::session::SessionContext;
use crate::store::TaskStore;

#[component]
pub fn App() -> impl IntoView {
    // Created once per app instance; login/logout are the only writers
    let session = SessionContext::load();
    let store = TaskStore::new(session);

    provide_context(session);
    provide_context(store);

    view! {
        <div class="app-layout">
            // Outside the gate so a forced-logout notice stays visible on
            // the login page instead of vanishing with the task view
            {move || {
                store
                    .notice()
                    .map(|msg| {
                        view! {
                            <div class="notice-banner">
                                <span>{msg}</span>
                                <button class="dismiss-btn" on:click=move |_| store.dismiss_notice()>
                                    "×"
                                </button>
                            </div>
                        }
                    })
            }}

            // Re-evaluated whenever the token changes, so any logout
            // (including a forced one) lands back on the login page
            <Show when=move || session.is_authenticated() fallback=|| view! { <AuthPage/> }>
                <TaskPage/>
            </Show>
        </div>
    }
}
