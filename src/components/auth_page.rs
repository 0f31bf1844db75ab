//! Auth Page Component
//!
//! Unauthenticated entry point: login by default, register on request.

use leptos::prelude::*;

use crate::components::{LoginForm, RegisterForm};

#[component]
pub fn AuthPage() -> impl IntoView {
    let (registering, set_registering) = signal(false);

    view! {
        <main class="auth-layout">
            {move || {
                if registering.get() {
                    view! { <RegisterForm on_login=move |_: ()| set_registering.set(false)/> }
                        .into_any()
                } else {
                    view! { <LoginForm on_register=move |_: ()| set_registering.set(true)/> }
                        .into_any()
                }
            }}
        </main>
    }
}
