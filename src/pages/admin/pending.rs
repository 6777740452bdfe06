//! Approval Queues
//!
//! One table per queue, a details modal and the approve/reject decision.
//! A decided row leaves the store right away and the queue count drops.

use leptos::prelude::*;
use leptos::task::spawn_local;
use urbanease_domain::paths::Review;
use urbanease_domain::{
    inr, or_dash, title_case, ApiError, Badge, HouseListing, ProviderDetail, ServiceListing, TiffinListing,
};

use crate::api;
use crate::components::{Carousel, EmptyRow, Modal, StatusBadge};
use crate::context::{use_app, AppContext};
use crate::pages::loadable::Latest;
use crate::store::{store_resolve, use_admin_store, AdminStateStoreFields, AdminStore};

/// Record shown in the review modal
#[derive(Clone, Debug, PartialEq)]
enum ReviewDetail {
    Provider(ProviderDetail),
    House(HouseListing),
    Tiffin(TiffinListing),
    Service(ServiceListing),
}

fn empty_message(review: Review) -> &'static str {
    match review {
        Review::Provider => "No pending provider verifications.",
        Review::House => "No pending house approvals.",
        Review::Tiffin => "No pending tiffin approvals.",
        Review::Service => "No pending service approvals.",
    }
}

fn headers(review: Review) -> &'static [&'static str] {
    match review {
        Review::Provider => &["ID", "Business Name", "Action"],
        Review::House => &["Title", "Provider", "Action"],
        Review::Tiffin => &["Provider", "Diet", "Action"],
        Review::Service => &["Category", "Title", "Provider", "Action"],
    }
}

fn title(review: Review) -> &'static str {
    match review {
        Review::Provider => "Provider Verification",
        Review::House => "House Approval",
        Review::Tiffin => "Tiffin Approval",
        Review::Service => "Service Approval",
    }
}

/// Toast text for a failed decision
fn decision_error(review: Review, approve: bool, err: &ApiError) -> String {
    let (verb, gerund) = if approve { ("approve", "approving") } else { ("reject", "rejecting") };
    match err {
        ApiError::Rejected(msg) => format!("Failed to {} {}: {}", verb, review.singular(), msg),
        _ => format!("An error occurred while {} the {}.", gerund, review.singular()),
    }
}

async fn fetch_detail(review: Review, id: i64) -> Result<ReviewDetail, ApiError> {
    Ok(match review {
        Review::Provider => ReviewDetail::Provider(api::provider_detail(id).await?),
        Review::House => ReviewDetail::House(api::house_detail(id).await?),
        Review::Tiffin => ReviewDetail::Tiffin(api::tiffin_detail(id).await?),
        Review::Service => ReviewDetail::Service(api::service_detail(id).await?),
    })
}

fn view_button(id: i64, on_view: Callback<i64>) -> impl IntoView {
    view! {
        <button class="btn btn-primary btn-sm" on:click=move |_| on_view.run(id)>"View"</button>
    }
}

/// Queue rows, or the empty-state row
fn queue_rows(store: AdminStore, review: Review, on_view: Callback<i64>) -> impl IntoView {
    let colspan = headers(review).len() as u32;
    move || {
        let rows = match review {
            Review::Provider => {
                let q = store.providers().read();
                q.rows().iter().map(|p| view! {
                    <tr>
                        <td>{p.id}</td>
                        <td><div class="fw-bold">{p.business_name.clone()}</div></td>
                        <td>{view_button(p.id, on_view)}</td>
                    </tr>
                }.into_any()).collect::<Vec<_>>()
            },
            Review::House => {
                let q = store.houses().read();
                q.rows().iter().map(|h| view! {
                    <tr>
                        <td><div class="fw-bold">{h.title.clone()}</div></td>
                        <td>{h.provider_business_name.clone()}</td>
                        <td>{view_button(h.id, on_view)}</td>
                    </tr>
                }.into_any()).collect::<Vec<_>>()
            },
            Review::Tiffin => {
                let q = store.tiffins().read();
                q.rows().iter().map(|t| view! {
                    <tr>
                        <td><div class="fw-bold">{t.provider_business_name.clone()}</div></td>
                        <td>{t.diet_type.label()}</td>
                        <td>{view_button(t.id, on_view)}</td>
                    </tr>
                }.into_any()).collect::<Vec<_>>()
            },
            Review::Service => {
                let q = store.services().read();
                q.rows().iter().map(|s| view! {
                    <tr>
                        <td>{s.service_category.label()}</td>
                        <td><div class="fw-bold">{s.service_title.clone()}</div></td>
                        <td>{s.provider_business_name.clone()}</td>
                        <td>{view_button(s.id, on_view)}</td>
                    </tr>
                }.into_any()).collect::<Vec<_>>()
            },
        };
        if rows.is_empty() {
            view! { <EmptyRow colspan=colspan message=empty_message(review)/> }.into_any()
        } else {
            rows.into_any()
        }
    }
}

fn field(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="col-md-6 mb-2">
            <div class="small text-muted">{label}</div>
            <div class="fw-semibold">{value}</div>
        </div>
    }
}

fn detail_view(ctx: AppContext, detail: ReviewDetail) -> AnyView {
    let placeholder = ctx.config.with_value(|c| c.placeholder_image.clone());
    match detail {
        ReviewDetail::Provider(p) => {
            let photo = p.profile_image.as_deref().map(|img| ctx.image(Some(img)));
            view! {
                <div class="text-center mb-3">
                    {match photo {
                        Some(src) => view! {
                            <img src=src class="rounded-circle" width="120" height="120" style="object-fit: cover;" alt="Provider"/>
                        }.into_any(),
                        None => view! { <i class="fas fa-user-circle fa-5x text-muted"></i> }.into_any(),
                    }}
                </div>
                <div class="row">
                    {field("Business Name", or_dash(Some(&p.business_name)))}
                    {field("Aadhaar Number", or_dash(Some(&p.aadhaar_number)))}
                    {field("Business Licence", p.business_license.clone().unwrap_or_else(|| "N/A".to_string()))}
                    {field("Email", or_dash(p.email.as_deref()))}
                    {field("Phone", or_dash(p.phone.as_deref()))}
                    {field("Applied On", or_dash(p.created_at.as_deref()))}
                </div>
            }
            .into_any()
        }
        ReviewDetail::House(h) => {
            let images: Vec<String> = h.images.iter().map(|img| ctx.image(Some(&img.image_path))).collect();
            view! {
                <Carousel images=images placeholder=placeholder/>
                <div class="row mt-3">
                    {field("Title", or_dash(Some(&h.title)))}
                    {field("Location", or_dash(Some(&h.location)))}
                    {field("Price", inr(h.price))}
                    {field("Type", or_dash(Some(&h.house_type)))}
                    {field("Listed On", or_dash(h.created_at.as_deref()))}
                    {field("Provider", or_dash(h.provider_business_name.as_deref()))}
                    {field("Business Licence", h.business_license.clone().unwrap_or_else(|| "N/A".to_string()))}
                    {field("Phone", or_dash(h.provider_phone.as_deref()))}
                    {field("Email", or_dash(h.provider_email.as_deref()))}
                </div>
                <p class="mb-0">{h.description.clone().unwrap_or_else(|| "N/A".to_string())}</p>
            }
            .into_any()
        }
        ReviewDetail::Tiffin(t) => {
            let delivery = if t.fast_delivery_available {
                Badge { class: "bg-primary", label: "Fast Delivery" }
            } else {
                Badge { class: "bg-secondary", label: "Standard" }
            };
            view! {
                <div class="row">
                    {field("Provider", or_dash(t.provider_business_name.as_deref()))}
                    {field("Email", or_dash(t.provider_email.as_deref()))}
                    {field("Phone", or_dash(t.provider_phone.as_deref()))}
                    {field("Business Licence", t.business_license.clone().unwrap_or_else(|| "N/A".to_string()))}
                    {field("Delivery Radius", t.delivery_radius.map(|r| format!("{} km", r)).unwrap_or_else(|| "N/A".to_string()))}
                    {field("Available Days", or_dash(t.available_days.as_deref()))}
                    {field("Diet", t.diet_type.label().to_string())}
                    {field("Listed On", or_dash(t.created_at.as_deref()))}
                </div>
                <StatusBadge badge=delivery/>
            }
            .into_any()
        }
        ReviewDetail::Service(s) => view! {
            <div class="row">
                {field("Category", s.service_category.label())}
                {field("Title", or_dash(Some(&s.service_title)))}
                {field("Base Price", inr(s.base_price))}
                {field("Service Radius", s.service_radius.map(|r| format!("{} km", r)).unwrap_or_else(|| "N/A".to_string()))}
                {field("Availability", or_dash(s.availability_days.as_deref()))}
                {field("Provider", or_dash(s.provider_business_name.as_deref()))}
                {field("Email", or_dash(s.provider_email.as_deref()))}
                {field("Phone", or_dash(s.provider_phone.as_deref()))}
                {field("Listed On", or_dash(s.created_at.as_deref()))}
            </div>
            <p class="mb-0">{s.description.clone().unwrap_or_else(|| "N/A".to_string())}</p>
        }
        .into_any(),
    }
}

#[component]
pub fn PendingSection(review: Review) -> impl IntoView {
    let ctx = use_app();
    let store = use_admin_store();
    let show = RwSignal::new(false);
    let (current, set_current) = signal::<Option<i64>>(None);
    let (detail, set_detail) = signal::<Option<ReviewDetail>>(None);
    let (deciding, set_deciding) = signal(false);

    let latest = Latest::new();

    let on_view = Callback::new(move |id: i64| {
        set_current.set(Some(id));
        let ticket = latest.begin();
        spawn_local(async move {
            let result = fetch_detail(review, id).await;
            if !latest.is_current(ticket) {
                log::debug!("Dropping stale {} #{} details", review.singular(), id);
                return;
            }
            match result {
                Ok(d) => {
                    set_detail.set(Some(d));
                    show.set(true);
                }
                Err(e) => {
                    log::error!("Error fetching {} details: {}", review.singular(), e);
                    ctx.error(format!("Error loading {} details. Please try again.", review.singular()));
                }
            }
        });
    });

    let decide = move |approve: bool| {
        if deciding.get_untracked() {
            return;
        }
        let Some(id) = current.get_untracked() else {
            return;
        };
        set_deciding.set(true);
        spawn_local(async move {
            match api::decide(review, id, approve).await {
                Ok(ack) => {
                    show.set(false);
                    store_resolve(&store, review, id);
                    set_current.set(None);
                    let done = if approve { "approved" } else { "rejected" };
                    ctx.notify(ack.message.unwrap_or_else(|| format!("{} {}", title_case(review.singular()), done)));
                }
                Err(e) => {
                    log::error!("Deciding {} #{} failed: {}", review.singular(), id, e);
                    ctx.error(decision_error(review, approve, &e));
                }
            }
            set_deciding.set(false);
        });
    };

    view! {
        <div class="card">
            <div class="card-header"><h5 class="mb-0">{format!("Pending {}", title_case(review.plural()))}</h5></div>
            <div class="table-responsive">
                <table class="table table-hover align-middle mb-0">
                    <thead class="table-light">
                        <tr>{headers(review).iter().map(|h| view! { <th>{*h}</th> }).collect_view()}</tr>
                    </thead>
                    <tbody>{queue_rows(store, review, on_view)}</tbody>
                </table>
            </div>
        </div>

        <Modal
            show=show
            title=title(review).to_string()
            size="modal-lg"
            footer=move || view! {
                <button class="btn btn-danger" disabled=move || deciding.get() on:click=move |_| decide(false)>
                    "Reject"
                </button>
                <button class="btn btn-success" disabled=move || deciding.get() on:click=move |_| decide(true)>
                    "Approve"
                </button>
            }
        >
            {move || detail.get().map(|d| detail_view(ctx, d))}
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_error_uses_server_message() {
        let err = ApiError::Rejected("Already approved".into());
        assert_eq!(decision_error(Review::Service, true, &err), "Failed to approve service: Already approved");
        assert_eq!(
            decision_error(Review::House, false, &ApiError::Network("offline".into())),
            "An error occurred while rejecting the house."
        );
    }

    #[test]
    fn test_headers_cover_the_action_column() {
        for review in Review::ALL {
            assert_eq!(headers(review).last(), Some(&"Action"));
        }
    }
}
