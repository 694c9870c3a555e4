//! Login page: username + password form with message, error, and user panels.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use login::LoginState;

fn submit_label(busy: bool) -> &'static str {
    if busy { "Logging in..." } else { "Login" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let state = RwSignal::new(LoginState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.with_untracked(LoginState::is_busy) {
            return;
        }
        let username_value = username.get_untracked();
        let password_value = password.get_untracked();
        let begun = state.try_update(|s| s.begin(&username_value, &password_value));
        let Some(Ok(credentials)) = begun else {
            return;
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let service = crate::net::api::BrowserAuthService::default();
            let result = login::attempt(&service, &credentials).await;
            state.update(|s| s.finish(result));
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            state.update(LoginState::release);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-header">
                <h1>"User Login"</h1>
                <p class="login-card__subtitle">"Enter your credentials to access the system"</p>
            </div>
            <div class="login-card">
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label">
                        "Username (Email)"
                        <input
                            class="login-input"
                            type="text"
                            placeholder="admin@example.com"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            placeholder="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button
                        class="login-button"
                        type="submit"
                        disabled=move || state.with(LoginState::is_busy)
                    >
                        {move || submit_label(state.with(LoginState::is_busy))}
                    </button>
                </form>
            </div>
            <Show when=move || state.with(|s| s.message().is_some())>
                <div class="login-message login-message--success">
                    <p>{move || state.with(|s| s.message().unwrap_or_default().to_owned())}</p>
                </div>
            </Show>
            <Show when=move || state.with(|s| s.error().is_some())>
                <div class="login-message login-message--error">
                    <p>"Error:"</p>
                    <code>{move || state.with(|s| s.error().unwrap_or_default().to_owned())}</code>
                </div>
            </Show>
            {move || {
                state
                    .with(|s| s.user().cloned())
                    .map(|user| {
                        view! {
                            <div class="login-user">
                                <h2>"Login Successful!"</h2>
                                <dl>
                                    <dt>"ID:"</dt>
                                    <dd>{user.id.to_string()}</dd>
                                    <dt>"Name:"</dt>
                                    <dd>{user.name}</dd>
                                    <dt>"Email:"</dt>
                                    <dd>{user.email}</dd>
                                </dl>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
