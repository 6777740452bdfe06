//! Profile Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use urbanease_domain::{validate_profile_update, UserProfile};

use crate::api;
use crate::components::Modal;
use crate::context::use_app;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_app();
    let show_edit = RwSignal::new(false);
    let draft = RwSignal::new(UserProfile::default());
    let (saving, set_saving) = signal(false);

    let current = move |pick: fn(&UserProfile) -> &String| {
        ctx.user.with(|u| u.as_ref().map(|u| pick(u).clone())).unwrap_or_default()
    };

    let open_edit = move |_| {
        draft.set(ctx.user.get_untracked().unwrap_or_default());
        show_edit.set(true);
    };

    let save = move |_| {
        if saving.get_untracked() {
            return;
        }
        let update = match draft.with_untracked(|d| validate_profile_update(&d.username, &d.email, &d.phone)) {
            Ok(update) => update,
            Err(e) => {
                ctx.error(e.to_string());
                return;
            }
        };
        set_saving.set(true);
        spawn_local(async move {
            match api::update_profile(&update).await {
                Ok(_) => {
                    ctx.user.set(Some(UserProfile {
                        username: update.username,
                        email: update.email,
                        phone: update.phone,
                    }));
                    show_edit.set(false);
                    ctx.notify("Profile updated successfully");
                }
                Err(err) => ctx.api_error(&err, "Failed to update profile."),
            }
            set_saving.set(false);
        });
    };

    let edit_field = move |label: &'static str, kind: &'static str, get: fn(&UserProfile) -> &String, set: fn(&mut UserProfile, String)| {
        view! {
            <div class="mb-3">
                <label class="form-label">{label}</label>
                <input
                    type=kind
                    class="form-control"
                    prop:value=move || draft.with(|d| get(d).clone())
                    on:input=move |ev| draft.update(|d| set(d, event_target_value(&ev)))
                />
            </div>
        }
    };

    view! {
        <div class="container py-5">
            <div class="card shadow-sm mx-auto" style="max-width: 560px;">
                <div class="card-body p-4">
                    <div class="d-flex justify-content-between align-items-center mb-4">
                        <h4 class="mb-0">"My Profile"</h4>
                        <button class="btn btn-outline-primary btn-sm" on:click=open_edit>
                            <i class="fas fa-edit me-1"></i>"Edit Profile"
                        </button>
                    </div>
                    <dl class="row mb-0">
                        <dt class="col-sm-4">"Username"</dt>
                        <dd class="col-sm-8">{move || current(|u| &u.username)}</dd>
                        <dt class="col-sm-4">"Email"</dt>
                        <dd class="col-sm-8">{move || current(|u| &u.email)}</dd>
                        <dt class="col-sm-4">"Phone"</dt>
                        <dd class="col-sm-8">{move || current(|u| &u.phone)}</dd>
                    </dl>
                </div>
            </div>
        </div>

        <Modal
            show=show_edit
            title="Edit Profile".to_string()
            footer=move || view! {
                <button class="btn btn-secondary" on:click=move |_| show_edit.set(false)>"Cancel"</button>
                <button class="btn btn-primary" disabled=move || saving.get() on:click=save>
                    {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                </button>
            }
        >
            {edit_field("Username", "text", |d| &d.username, |d, v| d.username = v)}
            {edit_field("Email", "email", |d| &d.email, |d, v| d.email = v)}
            {edit_field("Phone", "tel", |d| &d.phone, |d, v| d.phone = v)}
        </Modal>
    }
}
