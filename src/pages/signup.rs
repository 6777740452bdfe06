//! Signup Page
//!
//! Two steps: account details, then the 6-digit code sent by email.

use leptos::prelude::*;
use leptos::task::spawn_local;
use urbanease_domain::{validate_otp, validate_signup, SignupForm};

use crate::api;
use crate::context::use_app;
use crate::dom;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Step {
    Details,
    Otp,
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let ctx = use_app();
    let form = RwSignal::new(SignupForm {
        account_type: "customer".to_string(),
        ..Default::default()
    });
    let (otp, set_otp) = signal(String::new());
    let (step, set_step) = signal(Step::Details);
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    let on_details = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let req = match form.with_untracked(validate_signup) {
            Ok(req) => req,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        set_error.set(None);
        set_busy.set(true);
        spawn_local(async move {
            match api::signup(&req).await {
                Ok(_) => {
                    ctx.notify("OTP sent to your email. Please check and verify.");
                    set_step.set(Step::Otp);
                }
                Err(err) => set_error.set(Some(err.user_message("Signup failed. Please try again."))),
            }
            set_busy.set(false);
        });
    };

    let on_otp = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let code = match validate_otp(&otp.get_untracked()) {
            Ok(code) => code,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        set_error.set(None);
        set_busy.set(true);
        spawn_local(async move {
            match api::verify_otp(&code).await {
                Ok(_) => {
                    ctx.notify("Account created successfully!");
                    dom::go_to("/login");
                }
                Err(err) => set_error.set(Some(err.user_message("Invalid OTP. Please try again."))),
            }
            set_busy.set(false);
        });
    };

    // Binds one text field of the details form
    let field = move |label: &'static str, kind: &'static str, get: fn(&SignupForm) -> &String, set: fn(&mut SignupForm, String)| {
        view! {
            <div class="mb-3">
                <label class="form-label">{label}</label>
                <input
                    type=kind
                    class="form-control"
                    prop:value=move || form.with(|f| get(f).clone())
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </div>
        }
    };

    view! {
        <div class="auth-container d-flex align-items-center justify-content-center min-vh-100">
            <div class="card auth-card shadow-sm" style="max-width: 480px; width: 100%;">
                <div class="card-body p-4">
                    <h3 class="text-center mb-4">"Create your account"</h3>
                    {move || error.get().map(|msg| view! {
                        <div class="alert alert-danger py-2" role="alert">{msg}</div>
                    })}
                    <Show
                        when=move || step.get() == Step::Details
                        fallback=move || view! {
                            <form on:submit=on_otp novalidate>
                                <p class="text-muted">"Enter the 6-digit code we emailed you."</p>
                                <input
                                    type="text"
                                    inputmode="numeric"
                                    maxlength="6"
                                    class="form-control form-control-lg text-center mb-3 otp-input"
                                    prop:value=move || otp.get()
                                    on:input=move |ev| set_otp.set(event_target_value(&ev))
                                />
                                <button type="submit" class="btn btn-success w-100" disabled=move || busy.get()>
                                    "Verify OTP"
                                </button>
                            </form>
                        }
                    >
                        <form on:submit=on_details novalidate>
                            {field("Username", "text", |f| &f.username, |f, v| f.username = v)}
                            {field("Phone", "tel", |f| &f.phone, |f, v| f.phone = v)}
                            {field("Email", "email", |f| &f.email, |f, v| f.email = v)}
                            {field("Password", "password", |f| &f.password, |f, v| f.password = v)}
                            {field("Confirm Password", "password", |f| &f.confirm_password, |f, v| f.confirm_password = v)}
                            <div class="mb-3">
                                <label class="form-label">"I am a"</label>
                                <select
                                    class="form-select"
                                    prop:value=move || form.with(|f| f.account_type.clone())
                                    on:change=move |ev| form.update(|f| f.account_type = event_target_value(&ev))
                                >
                                    <option value="customer">"Customer"</option>
                                    <option value="provider">"Service Provider"</option>
                                </select>
                            </div>
                            <button type="submit" class="btn btn-primary w-100" disabled=move || busy.get()>
                                {move || if busy.get() { "Sending OTP..." } else { "Sign Up" }}
                            </button>
                        </form>
                    </Show>
                    <p class="text-center mt-3 mb-0">
                        "Already registered? " <a href="/login">"Login"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
