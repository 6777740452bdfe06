//! Verification Form
//!
//! Business details, Aadhaar and an optional JPEG profile photo. A rejected
//! provider sees the form again with the previous answers filled in.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use urbanease_domain::{require_fields, validate_aadhaar, validate_profile_photo, ApiError, ProviderProfile, ValidationResult};
use web_sys::{File, FormData};

use crate::api;
use crate::context::use_app;
use crate::dom;

const SUBMITTED: &str = "Verification application submitted successfully! Your application is now under review.";

fn submit_error(err: &ApiError) -> String {
    match err {
        ApiError::Rejected(msg) if !msg.is_empty() => format!("Error: {}", msg),
        _ => "Failed to submit verification".to_string(),
    }
}

/// Field checks in the order the form shows them
fn check(business_name: &str, aadhaar: &str, photo: Option<(&str, u64)>) -> ValidationResult<()> {
    require_fields(&[("Business name", business_name), ("Aadhaar number", aadhaar)])?;
    validate_aadhaar(aadhaar)?;
    if let Some((mime, size)) = photo {
        validate_profile_photo(mime, size)?;
    }
    Ok(())
}

fn verification_form(business_name: &str, aadhaar: &str, license: &str, photo: Option<&File>) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(api::js_err)?;
    form.append_with_str("business_name", business_name).map_err(api::js_err)?;
    form.append_with_str("aadhaar_number", aadhaar).map_err(api::js_err)?;
    form.append_with_str("business_license", license).map_err(api::js_err)?;
    if let Some(file) = photo {
        form.append_with_blob_and_filename("profile_photo", file, &file.name())
            .map_err(api::js_err)?;
    }
    Ok(form)
}

#[component]
pub fn VerificationForm(
    #[prop(into)] prefill: Signal<Option<ProviderProfile>>,
    #[prop(into)] on_submitted: Callback<()>,
) -> impl IntoView {
    let ctx = use_app();
    let (business_name, set_business_name) = signal(String::new());
    let (aadhaar, set_aadhaar) = signal(String::new());
    let (license, set_license) = signal(String::new());
    let preview = dom::Preview::new();
    let (submitting, set_submitting) = signal(false);
    let photo_input = NodeRef::<html::Input>::new();

    Effect::new(move |_| {
        if let Some(profile) = prefill.get() {
            set_business_name.set(profile.business_name);
            set_aadhaar.set(profile.aadhaar_number);
            set_license.set(profile.business_license.unwrap_or_default());
            preview.set(profile.profile_image.map(|img| ctx.image(Some(&img))));
        }
    });

    let on_photo = move |_| {
        let Some(file) = dom::picked_file(&photo_input) else {
            preview.set(None);
            return;
        };
        if let Err(e) = validate_profile_photo(&file.type_(), file.size() as u64) {
            ctx.error(e.to_string());
            dom::clear_input(&photo_input);
            preview.set(None);
            return;
        }
        preview.show_file(&file);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let name = business_name.get_untracked().trim().to_string();
        let number = aadhaar.get_untracked().trim().to_string();
        let licence = license.get_untracked().trim().to_string();
        let photo = dom::picked_file(&photo_input);

        let meta = photo.as_ref().map(|f| (f.type_(), f.size() as u64));
        if let Err(e) = check(&name, &number, meta.as_ref().map(|(mime, size)| (mime.as_str(), *size))) {
            ctx.error(e.to_string());
            return;
        }
        let form = match verification_form(&name, &number, &licence, photo.as_ref()) {
            Ok(form) => form,
            Err(e) => {
                ctx.api_error(&e, "Failed to submit verification");
                return;
            }
        };

        set_submitting.set(true);
        spawn_local(async move {
            match api::apply_verification(form).await {
                Ok(ack) => {
                    ctx.notify(ack.message.unwrap_or_else(|| SUBMITTED.to_string()));
                    on_submitted.run(());
                }
                Err(e) => {
                    log::error!("Verification submit failed: {}", e);
                    ctx.error(submit_error(&e));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="card mb-4">
            <div class="card-header"><h5 class="mb-0">"Provider Verification"</h5></div>
            <div class="card-body">
                <form on:submit=on_submit>
                    <div class="text-center mb-3">
                        {move || match preview.get() {
                            Some(src) => view! {
                                <img src=src class="rounded-circle" width="120" height="120" style="object-fit: cover;" alt="Preview"/>
                            }.into_any(),
                            None => view! { <i class="fas fa-user-circle fa-5x text-muted"></i> }.into_any(),
                        }}
                    </div>
                    <div class="mb-3">
                        <label class="form-label">"Business Name"</label>
                        <input
                            type="text"
                            class="form-control"
                            required
                            prop:value=move || business_name.get()
                            on:input=move |ev| set_business_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="mb-3">
                        <label class="form-label">"Aadhaar Number"</label>
                        <input
                            type="text"
                            class="form-control"
                            maxlength="12"
                            inputmode="numeric"
                            placeholder="12-digit Aadhaar number"
                            required
                            prop:value=move || aadhaar.get()
                            on:input=move |ev| set_aadhaar.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="mb-3">
                        <label class="form-label">"Business Licence (optional)"</label>
                        <input
                            type="text"
                            class="form-control"
                            prop:value=move || license.get()
                            on:input=move |ev| set_license.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="mb-3">
                        <label class="form-label">"Profile Photo (JPEG, max 5MB)"</label>
                        <input
                            type="file"
                            class="form-control"
                            accept="image/jpeg"
                            node_ref=photo_input
                            on:change=on_photo
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Submitting..." } else { "Submit for Verification" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_order() {
        assert_eq!(check("", "123412341234", None).unwrap_err().to_string(), "Business name is required");
        assert_eq!(
            check("Asha Caterers", "1234", None).unwrap_err().to_string(),
            "Please enter a valid 12-digit Aadhaar number"
        );
        assert_eq!(
            check("Asha Caterers", "123412341234", Some(("image/png", 1024))).unwrap_err().to_string(),
            "Only JPEG images are allowed for profile photo"
        );
        assert!(check("Asha Caterers", "123412341234", Some(("image/jpeg", 1024))).is_ok());
        assert!(check("Asha Caterers", "123412341234", None).is_ok());
    }

    #[test]
    fn test_submit_error_text() {
        assert_eq!(submit_error(&ApiError::Rejected("Aadhaar already registered".into())), "Error: Aadhaar already registered");
        assert_eq!(submit_error(&ApiError::Status(500)), "Failed to submit verification");
    }
}
