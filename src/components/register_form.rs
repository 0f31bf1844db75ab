//! Register Form Component
//!
//! Account creation with auto-login on success. Duplicate accounts and
//! validation failures come back as the server's `detail` message.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::session::use_session;

#[component]
pub fn RegisterForm(#[prop(into)] on_login: Callback<()>) -> impl IntoView {
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
            let result = async {
                api::register(&email, &password).await?;
                api::login(&email, &password).await
            }
            .await;
            match result {
                Ok(token) => session.login(token.access_token),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="auth-card">
            <h2>"Create Account"</h2>
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
                <button type="submit" disabled=move || busy.get()>"Sign Up"</button>
            </form>
            <p class="auth-switch">
                "Already have an account? "
                <button type="button" class="link-btn" on:click=move |_| on_login.run(())>
                    "Log in"
                </button>
            </p>
        </div>
    }
}
