//! Task Row Component
//!
//! A single task: completion checkbox, inline edit, delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::Task;
use crate::store::use_task_store;

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let store = use_task_store();

    let id = task.id;
    let completed = task.completed;

    view! {
        <div class=if completed { "task-row completed" } else { "task-row" }>
            {move || {
                if store.editing(id) {
                    view! {
                        <div class="task-edit">
                            <input
                                type="text"
                                class="edit-input"
                                prop:value=move || store.edit_title()
                                on:input=move |ev| store.set_edit_title(event_target_value(&ev))
                                autofocus=true
                            />
                            <button
                                class="save-btn"
                                on:click=move |_| {
                                    spawn_local(async move {
                                        store.commit_edit(id).await;
                                    });
                                }
                            >
                                "Save"
                            </button>
                            <button class="cancel-btn" on:click=move |_| store.cancel_edit()>
                                "Cancel"
                            </button>
                        </div>
                    }
                        .into_any()
                } else {
                    let toggle_task = task.clone();
                    let edit_task = task.clone();
                    let title = task.title.clone();
                    view! {
                        <div class="task-main">
                            <input
                                type="checkbox"
                                checked=completed
                                on:change=move |_| {
                                    let task = toggle_task.clone();
                                    spawn_local(async move {
                                        store.toggle_complete(task).await;
                                    });
                                }
                            />
                            <span class="task-title">{title}</span>
                            <button class="edit-btn" on:click=move |_| store.begin_edit(&edit_task)>
                                "Edit"
                            </button>
                            <button
                                class="delete-btn"
                                on:click=move |_| {
                                    spawn_local(async move {
                                        store.remove(id).await;
                                    });
                                }
                            >
                                "×"
                            </button>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
