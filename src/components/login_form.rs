//! Login Form Component
//!
//! Credential entry; failures from the API render inline, verbatim.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::session::use_session;

#[component]
pub fn LoginForm(#[prop(into)] on_register: Callback<()>) -> impl IntoView {
    let session = use_session();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get().trim().to_string();
        let password = password.get();
        if email.is_empty() || password.is_empty() {
            set_error.set(Some("Email and password are required.".to_string()));
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            match api::login(&email, &password).await {
                // The gate over is_authenticated swaps in the task page
                Ok(token) => session.login(token.access_token),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="auth-card">
            <h2>"Welcome Back"</h2>
            {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}
            <form class="auth-form" on:submit=on_submit>
                <label>
                    "Email"
                    <input
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=move || busy.get()>"Log In"</button>
            </form>
            <p class="auth-switch">
                "Don't have an account? "
                <button type="button" class="link-btn" on:click=move |_| on_register.run(())>
                    "Sign up"
                </button>
            </p>
        </div>
    }
}
