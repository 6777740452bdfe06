//! Provider Dashboard
//!
//! Everything behind the verification gate: the status banner, the
//! verification form, stats, listing grids with their add forms, the
//! kitchen manager and service bookings. A page load carrying
//! `?payment=success` submits the listing draft parked before payment.

mod add_listing;
mod bookings;
mod kitchen;
mod listings;
mod verification;

use leptos::prelude::*;
use leptos::task::spawn_local;
use urbanease_domain::{
    mask_aadhaar, or_dash, resume_after_payment, retry_pending, stranded_draft, strip_payment_param, ApiError,
    DashboardStats, DomainResult, ListingKind, ProviderGate, ProviderStatus, ResumeOutcome,
    UserProfile, VerificationStatus,
};

use crate::api;
use crate::components::{CountCard, Sidebar, SidebarItem, SidebarToggle, StatusBadge};
use crate::context::{use_app, AppContext};
use crate::dom;
use crate::draft_store::{HttpSubmitter, IndexedDbDraftStore};

use bookings::BookingsSection;
use kitchen::KitchenSection;
use listings::{HouseGrid, ServiceGrid, TiffinGrid};
use verification::VerificationForm;

const SECTIONS: &[SidebarItem] = &[
    SidebarItem::new("dashboard", "Dashboard", "fa-tachometer-alt"),
    SidebarItem::new("house-listings", "House Listings", "fa-home"),
    SidebarItem::new("tiffin-listings", "Tiffin Services", "fa-utensils"),
    SidebarItem::new("service-listings", "Home Services", "fa-tools"),
    SidebarItem::new("food-orders", "Food Orders", "fa-receipt"),
    SidebarItem::new("service-bookings", "Service Bookings", "fa-calendar-check"),
    SidebarItem::new("profile", "Profile", "fa-user"),
];

/// Reload counters shared by the dashboard sections
#[derive(Clone, Copy)]
pub(crate) struct Refresh {
    pub houses: RwSignal<u32>,
    pub tiffins: RwSignal<u32>,
    pub services: RwSignal<u32>,
    /// Stats cards and active counts
    pub counts: RwSignal<u32>,
}

impl Refresh {
    fn new() -> Self {
        Self {
            houses: RwSignal::new(0),
            tiffins: RwSignal::new(0),
            services: RwSignal::new(0),
            counts: RwSignal::new(0),
        }
    }

    pub fn listings(&self, kind: ListingKind) -> RwSignal<u32> {
        match kind {
            ListingKind::House => self.houses,
            ListingKind::Tiffin => self.tiffins,
            ListingKind::Service => self.services,
        }
    }
}

pub(crate) fn bump(counter: RwSignal<u32>) {
    counter.update(|n| *n = n.wrapping_add(1));
}

pub(crate) fn use_refresh() -> Refresh {
    use_context::<Refresh>().expect("Refresh should be provided")
}

/// Where to send the browser when the status call is refused
fn auth_redirect(err: &ApiError) -> Option<&'static str> {
    match err {
        ApiError::Unauthorized => Some("/login"),
        ApiError::Forbidden => Some("/"),
        _ => None,
    }
}

fn listing_section(kind: ListingKind) -> &'static str {
    match kind {
        ListingKind::House => "house-listings",
        ListingKind::Tiffin => "tiffin-listings",
        ListingKind::Service => "service-listings",
    }
}

/// Toast for a payment-return outcome: `(is_error, text)`
fn resume_message(outcome: &ResumeOutcome) -> Option<(bool, String)> {
    match outcome {
        ResumeOutcome::NotAPaymentReturn | ResumeOutcome::NoDraft => None,
        ResumeOutcome::Submitted(_) => Some((false, "Payment successful! Listing added.".to_string())),
        ResumeOutcome::Failed { error, .. } => Some((
            true,
            format!("Error adding listing: {}", error.user_message("Unknown error")),
        )),
    }
}

/// Apply a draft submission result to the dashboard
fn apply_resume(
    ctx: AppContext,
    refresh: Refresh,
    section: RwSignal<String>,
    retry_kind: RwSignal<Option<ListingKind>>,
    result: DomainResult<ResumeOutcome>,
) {
    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => {
            log::error!("Listing draft could not be processed: {}", e);
            ctx.error("Error submitting listing after payment.");
            return;
        }
    };
    match &outcome {
        ResumeOutcome::Submitted(kind) => {
            retry_kind.set(None);
            bump(refresh.listings(*kind));
            bump(refresh.counts);
            section.set(listing_section(*kind).to_string());
        }
        ResumeOutcome::Failed { kind, .. } => retry_kind.set(Some(*kind)),
        _ => {}
    }
    if let Some((is_error, text)) = resume_message(&outcome) {
        if is_error {
            ctx.error(text);
        } else {
            ctx.notify(text);
        }
    }
}

#[component]
pub fn ProviderDashboard() -> impl IntoView {
    let ctx = use_app();
    let refresh = Refresh::new();
    provide_context(refresh);

    let section = RwSignal::new("dashboard".to_string());
    let sidebar_open = RwSignal::new(false);
    let status = RwSignal::new(None::<ProviderStatus>);
    let stats = RwSignal::new(DashboardStats::default());
    let active_orders = RwSignal::new(0u32);
    let active_bookings = RwSignal::new(0u32);
    let retry_kind = RwSignal::new(None::<ListingKind>);
    let (retrying, set_retrying) = signal(false);

    let gate = Memo::new(move |_| {
        status.with(|s| s.as_ref().map(|s| s.gate()).unwrap_or_else(|| VerificationStatus::Unknown.gate()))
    });

    let load_status = move || {
        spawn_local(async move {
            match api::provider_status().await {
                Ok(loaded) => {
                    log::info!("Provider verification stage: {:?}", loaded.stage());
                    status.set(Some(loaded));
                }
                Err(e) => match auth_redirect(&e) {
                    Some(path) => dom::go_to(path),
                    None => ctx.api_error(&e, "Error loading verification status."),
                },
            }
        });
    };
    load_status();

    // Stats follow the counts counter, once the dashboard is unlocked
    Effect::new(move |_| {
        let _ = refresh.counts.get();
        if !gate.get().show_dashboard {
            return;
        }
        spawn_local(async move {
            match api::dashboard_stats().await {
                Ok(loaded) => stats.set(loaded),
                Err(e) => log::error!("Dashboard stats failed: {}", e),
            }
        });
        spawn_local(async move {
            match api::active_order_count().await {
                Ok(n) => active_orders.set(n),
                Err(e) => log::error!("Active order count failed: {}", e),
            }
        });
        spawn_local(async move {
            match api::active_booking_count().await {
                Ok(n) => active_bookings.set(n),
                Err(e) => log::error!("Active booking count failed: {}", e),
            }
        });
    });

    // Payment return
    let query = dom::query_string();
    if urbanease_domain::is_payment_success(&query) {
        dom::replace_query(&strip_payment_param(&query));
        spawn_local(async move {
            let result = resume_after_payment(&query, &IndexedDbDraftStore, &HttpSubmitter).await;
            apply_resume(ctx, refresh, section, retry_kind, result);
        });
    } else {
        // A draft paid for on an earlier visit that never got through
        spawn_local(async move {
            match stranded_draft(&IndexedDbDraftStore).await {
                Ok(kind) => retry_kind.set(kind),
                Err(e) => log::error!("Reading the listing draft failed: {}", e),
            }
        });
    }

    let retry = move |_| {
        if retrying.get_untracked() {
            return;
        }
        set_retrying.set(true);
        spawn_local(async move {
            let result = retry_pending(&IndexedDbDraftStore, &HttpSubmitter).await;
            if matches!(result, Ok(ResumeOutcome::NoDraft)) {
                retry_kind.set(None);
            }
            apply_resume(ctx, refresh, section, retry_kind, result);
            set_retrying.set(false);
        });
    };

    let can_add = Signal::derive(move || gate.get().can_add_listings);
    let visible = move |id: &'static str| move || gate.get().show_dashboard && section.get() == id;
    let card = move |title: &'static str, icon: &'static str, tone: &'static str, count: Signal<u32>, target: &'static str| {
        view! {
            <CountCard
                title=title
                icon=icon
                tone=tone
                count=count
                on_click=move |_| section.set(target.to_string())
            />
        }
    };

    view! {
        <div class="admin-layout d-flex">
            <Sidebar
                title="UrbanEase Provider"
                items=SECTIONS
                active=section
                open=sidebar_open
                locked=Signal::derive(move || gate.get().sidebar_locked)
            />
            <main class="flex-grow-1 p-4">
                <div class="d-flex align-items-center mb-4">
                    <SidebarToggle open=sidebar_open/>
                    <span class="navbar-brand ms-2">"Provider Dashboard"</span>
                </div>

                {move || gate.get().banner.map(|b| view! {
                    <div class=format!("alert {} d-flex align-items-center", b.class) role="alert">
                        <i class=format!("fas {} me-2", b.icon)></i>
                        <span>{b.message}</span>
                    </div>
                })}

                <Show when=move || retry_kind.get().is_some()>
                    <div class="alert alert-danger d-flex justify-content-between align-items-center">
                        <span>
                            {move || retry_kind.get().map(|k| format!("Your {} listing was paid for but could not be submitted.", k.noun().to_lowercase()))}
                        </span>
                        <button class="btn btn-sm btn-light" disabled=move || retrying.get() on:click=retry>
                            "Retry Submission"
                        </button>
                    </div>
                </Show>

                <Show when=move || gate.get().show_form>
                    <VerificationForm
                        prefill=Signal::derive(move || {
                            if gate.get().prefill_form {
                                status.with(|s| s.as_ref().and_then(|s| s.profile.clone()))
                            } else {
                                None
                            }
                        })
                        on_submitted=move |_| load_status()
                    />
                </Show>

                <Show when=visible("dashboard")>
                    <div class="row">
                        {card("House Listings", "fa-home", "primary", Signal::derive(move || stats.get().house_count), "house-listings")}
                        {card("Tiffin Services", "fa-utensils", "success", Signal::derive(move || stats.get().tiffin_count), "tiffin-listings")}
                        {card("Home Services", "fa-tools", "info", Signal::derive(move || stats.get().service_count), "service-listings")}
                        {card("Active Orders", "fa-receipt", "warning", active_orders.into(), "food-orders")}
                        {card("Active Bookings", "fa-calendar-check", "danger", active_bookings.into(), "service-bookings")}
                    </div>
                </Show>
                <Show when=visible("house-listings")>
                    <HouseGrid can_add=can_add/>
                </Show>
                <Show when=visible("tiffin-listings")>
                    <TiffinGrid can_add=can_add/>
                </Show>
                <Show when=visible("service-listings")>
                    <ServiceGrid can_add=can_add/>
                </Show>
                <Show when=visible("food-orders")>
                    <KitchenSection/>
                </Show>
                <Show when=visible("service-bookings")>
                    <BookingsSection/>
                </Show>
                <Show when=visible("profile")>
                    <ProfileCard status=status gate=gate.into()/>
                </Show>
            </main>
        </div>
    }
}

/// Account details next to the verified business profile
#[component]
fn ProfileCard(status: RwSignal<Option<ProviderStatus>>, gate: Signal<ProviderGate>) -> impl IntoView {
    let ctx = use_app();
    let user = RwSignal::new(None::<UserProfile>);

    spawn_local(async move {
        match api::provider_user_profile().await {
            Ok(loaded) => user.set(Some(loaded)),
            Err(e) => ctx.api_error(&e, "Error loading profile."),
        }
    });

    let stage = move || status.with(|s| s.as_ref().map(|s| s.stage()).unwrap_or(VerificationStatus::Unknown));
    let profile = move || status.with(|s| s.as_ref().and_then(|s| s.profile.clone()));

    view! {
        <div class="row">
            <div class="col-md-4 mb-3">
                <div class="card h-100 text-center">
                    <div class="card-body">
                        {move || match profile().and_then(|p| p.profile_image) {
                            Some(img) => view! {
                                <img src=ctx.image(Some(&img)) class="rounded-circle mb-3" width="120" height="120" style="object-fit: cover;" alt="Profile"/>
                            }.into_any(),
                            None => view! { <i class="fas fa-user-circle fa-5x text-muted mb-3"></i> }.into_any(),
                        }}
                        <h5>{move || user.with(|u| or_dash(u.as_ref().map(|u| u.username.as_str())))}</h5>
                        <StatusBadge badge=Signal::derive(move || stage().badge())/>
                        <Show when=move || !gate.get().can_add_listings>
                            <p class="small text-muted mt-2 mb-0">"Listings unlock once verification is approved."</p>
                        </Show>
                    </div>
                </div>
            </div>
            <div class="col-md-8 mb-3">
                <div class="card h-100">
                    <div class="card-header"><h5 class="mb-0">"Business Profile"</h5></div>
                    <div class="card-body">
                        <dl class="row mb-0">
                            <dt class="col-sm-4">"Email"</dt>
                            <dd class="col-sm-8">{move || user.with(|u| or_dash(u.as_ref().map(|u| u.email.as_str())))}</dd>
                            <dt class="col-sm-4">"Phone"</dt>
                            <dd class="col-sm-8">{move || user.with(|u| or_dash(u.as_ref().map(|u| u.phone.as_str())))}</dd>
                            <dt class="col-sm-4">"Business Name"</dt>
                            <dd class="col-sm-8">{move || or_dash(profile().as_ref().map(|p| p.business_name.as_str()))}</dd>
                            <dt class="col-sm-4">"Aadhaar"</dt>
                            <dd class="col-sm-8">{move || profile().map(|p| mask_aadhaar(&p.aadhaar_number)).unwrap_or_else(|| "-".to_string())}</dd>
                            <dt class="col-sm-4">"Business Licence"</dt>
                            <dd class="col-sm-8">{move || profile().and_then(|p| p.business_license).unwrap_or_else(|| "N/A".to_string())}</dd>
                            <dt class="col-sm-4">"Verified At"</dt>
                            <dd class="col-sm-8">{move || or_dash(profile().and_then(|p| p.verified_at).as_deref())}</dd>
                        </dl>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refused_status_redirects() {
        assert_eq!(auth_redirect(&ApiError::Unauthorized), Some("/login"));
        assert_eq!(auth_redirect(&ApiError::Forbidden), Some("/"));
        assert_eq!(auth_redirect(&ApiError::Status(500)), None);
    }

    #[test]
    fn test_resume_messages() {
        assert_eq!(resume_message(&ResumeOutcome::NoDraft), None);
        assert_eq!(resume_message(&ResumeOutcome::NotAPaymentReturn), None);
        assert_eq!(
            resume_message(&ResumeOutcome::Submitted(ListingKind::Tiffin)),
            Some((false, "Payment successful! Listing added.".to_string()))
        );
        let failed = ResumeOutcome::Failed {
            kind: ListingKind::House,
            error: ApiError::Rejected("Title is required".into()),
        };
        assert_eq!(resume_message(&failed), Some((true, "Error adding listing: Title is required".to_string())));
    }

    #[test]
    fn test_every_listing_kind_has_a_section() {
        for kind in [ListingKind::House, ListingKind::Tiffin, ListingKind::Service] {
            let id = listing_section(kind);
            assert!(SECTIONS.iter().any(|item| item.id == id), "missing section {}", id);
        }
    }
}
