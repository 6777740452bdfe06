//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use urbanease_domain::{validate_login, AccountType, ApiError};

use crate::api;
use crate::context::use_app;
use crate::dom;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let req = match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(req) => req,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        set_error.set(None);
        set_busy.set(true);

        spawn_local(async move {
            match api::login(&req).await {
                Ok(resp) => match AccountType::redirect_for(&resp.account_type) {
                    Ok(path) => {
                        log::info!("Login ok as {}", resp.account_type);
                        dom::go_to(path);
                    }
                    Err(msg) => set_error.set(Some(msg)),
                },
                Err(ApiError::Rejected(msg)) if !msg.is_empty() => set_error.set(Some(msg)),
                Err(ApiError::Unauthorized) | Err(ApiError::Rejected(_)) => {
                    set_error.set(Some("Invalid email or password".to_string()))
                }
                Err(err) => ctx.api_error(&err, "Server error. Please try again."),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="auth-container d-flex align-items-center justify-content-center min-vh-100">
            <div class="card auth-card shadow-sm" style="max-width: 420px; width: 100%;">
                <div class="card-body p-4">
                    <h3 class="text-center mb-4">"Login to UrbanEase"</h3>
                    {move || error.get().map(|msg| view! {
                        <div class="alert alert-danger py-2" role="alert">{msg}</div>
                    })}
                    <form on:submit=on_submit novalidate>
                        <div class="mb-3">
                            <label class="form-label" for="email">"Email"</label>
                            <input
                                id="email"
                                type="email"
                                class="form-control"
                                placeholder="you@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="mb-3">
                            <label class="form-label" for="password">"Password"</label>
                            <input
                                id="password"
                                type="password"
                                class="form-control"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                        </div>
                        <button type="submit" class="btn btn-primary w-100" disabled=move || busy.get()>
                            {move || if busy.get() { "Logging in..." } else { "Login" }}
                        </button>
                    </form>
                    <p class="text-center mt-3 mb-0">
                        "Don't have an account? " <a href="/signup">"Sign up"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
