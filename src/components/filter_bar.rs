//! Filter Bar Component
//!
//! All/pending/completed tabs. Selecting a tab only changes what is shown,
//! never the tasks themselves.

use leptos::prelude::*;

use crate::models::Filter;
use crate::store::use_task_store;

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_task_store();

    view! {
        <div class="filter-bar">
            {Filter::ALL
                .iter()
                .map(|&filter| {
                    let is_active = move || store.filter() == filter;
                    view! {
                        <button
                            class=move || {
                                if is_active() { "filter-tab active" } else { "filter-tab" }
                            }
                            on:click=move |_| store.set_filter(filter)
                        >
                            {filter.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
