//! Provider Listing Grids
//!
//! House, tiffin and service cards with a status overlay and a details
//! modal. Each grid reloads when its refresh counter moves.

use leptos::prelude::*;
use urbanease_domain::{
    inr_grouped, kitchen_badge, or_dash, truncate, HouseListing, ListingKind, ListingStatus, ServiceListing,
    TiffinListing,
};

use super::add_listing::AddListing;
use super::use_refresh;
use crate::api;
use crate::components::{Carousel, Modal, StatusBadge};
use crate::context::use_app;
use crate::pages::loadable::{reload_on, Loadable};

/// Heading and hint shown when a grid has no cards
fn empty_text(kind: ListingKind) -> (&'static str, &'static str) {
    match kind {
        ListingKind::House => ("No house listings yet.", "Start by adding your first property listing."),
        ListingKind::Tiffin => ("No tiffin services yet.", "Start by adding your tiffin service."),
        ListingKind::Service => ("No service listings yet.", "Start by adding your first home service."),
    }
}

fn radius(km: Option<f64>) -> String {
    km.map(|r| format!("{} km", r)).unwrap_or_else(|| "N/A".to_string())
}

/// Cards for a loaded grid, or its loading/error/empty state
fn grid<T, V, R>(state: RwSignal<Loadable<Vec<T>>>, kind: ListingKind, card: R) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    V: IntoView + 'static,
    R: Fn(T) -> V + Send + Sync + 'static,
{
    move || match state.get() {
        Loadable::Loading => view! {
            <div class="col-12 text-center text-muted py-5">"Loading..."</div>
        }
        .into_any(),
        Loadable::Failed => view! {
            <div class="col-12 text-center text-danger py-5">"Error loading listings."</div>
        }
        .into_any(),
        Loadable::Ready(rows) if rows.is_empty() => {
            let (title, hint) = empty_text(kind);
            view! {
                <div class="col-12 text-center py-5">
                    <i class="fas fa-folder-open fa-3x text-muted mb-3"></i>
                    <h5>{title}</h5>
                    <p class="text-muted">{hint}</p>
                </div>
            }
            .into_any()
        }
        Loadable::Ready(rows) => rows.into_iter().map(&card).collect_view().into_any(),
    }
}

/// Section title with the add button once listings are allowed
#[component]
fn GridHeader(
    #[prop(into)] title: String,
    #[prop(into)] add_label: String,
    can_add: Signal<bool>,
    show_add: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="d-flex justify-content-between align-items-center mb-3">
            <h4 class="mb-0">{title}</h4>
            <Show when=move || can_add.get()>
                <button class="btn btn-primary" on:click=move |_| show_add.set(true)>
                    <i class="fas fa-plus me-1"></i>{add_label.clone()}
                </button>
            </Show>
        </div>
    }
}

/// Top-right overlay on a listing card
fn status_overlay(status: ListingStatus) -> impl IntoView {
    let badge = status.badge();
    view! {
        <span class=format!("badge position-absolute top-0 end-0 m-2 {}", status.card_class())>{badge.label}</span>
    }
}

fn detail(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="col-md-6 mb-2">
            <div class="small text-muted">{label}</div>
            <div class="fw-semibold">{value}</div>
        </div>
    }
}

#[component]
pub fn HouseGrid(can_add: Signal<bool>) -> impl IntoView {
    let ctx = use_app();
    let refresh = use_refresh();
    let state = reload_on("house listings", refresh.houses.into(), api::house_listings);
    let show_add = RwSignal::new(false);
    let show_view = RwSignal::new(false);
    let (selected, set_selected) = signal::<Option<HouseListing>>(None);
    let placeholder = ctx.config.with_value(|c| c.placeholder_image.clone());

    let card = move |house: HouseListing| {
        let cover = ctx.image(house.cover());
        let status = house.status;
        let open = house.clone();
        view! {
            <div class="col-md-6 col-lg-4 mb-4">
                <div class="card listing-card h-100">
                    <div class="position-relative">
                        <img src=cover class="card-img-top" style="height: 200px; object-fit: cover;" alt=house.title.clone()/>
                        {status_overlay(status)}
                    </div>
                    <div class="card-body">
                        <span class="badge bg-light text-dark border mb-2">{house.house_type.clone()}</span>
                        <h5 class="card-title">{house.title.clone()}</h5>
                        <p class="small text-muted mb-2"><i class="fas fa-map-marker-alt me-1"></i>{house.location.clone()}</p>
                        <div class="d-flex justify-content-between align-items-center">
                            <span class="fw-bold text-primary">{inr_grouped(house.price)}</span>
                            <button
                                class="btn btn-sm btn-outline-primary"
                                on:click=move |_| {
                                    set_selected.set(Some(open.clone()));
                                    show_view.set(true);
                                }
                            >
                                "View Details"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        }
    };

    view! {
        <GridHeader title="House Listings" add_label="Add House" can_add=can_add show_add=show_add/>
        <div class="row">{grid(state, ListingKind::House, card)}</div>

        <AddListing kind=ListingKind::House show=show_add/>

        <Modal
            show=show_view
            title=Signal::derive(move || selected.with(|h| h.as_ref().map(|h| h.title.clone()).unwrap_or_default()))
            size="modal-lg"
        >
            {let placeholder = placeholder.clone(); move || selected.get().map(|h| {
                let images: Vec<String> = if h.images.is_empty() {
                    h.cover().map(|c| vec![ctx.image(Some(c))]).unwrap_or_default()
                } else {
                    h.images.iter().map(|img| ctx.image(Some(&img.image_path))).collect()
                };
                let placeholder = placeholder.clone();
                view! {
                    <Carousel images=images placeholder=placeholder.clone()/>
                    <div class="row mt-3">
                        {detail("Type", h.house_type.clone())}
                        {detail("Location", h.location.clone())}
                        {detail(if h.house_type == "Apartment" { "Full Property Price" } else { "Monthly Rent" }, inr_grouped(h.price))}
                        {detail("Listed On", or_dash(h.created_at.as_deref()))}
                        <div class="col-md-6 mb-2">
                            <div class="small text-muted">"Status"</div>
                            <StatusBadge badge=h.status.badge()/>
                        </div>
                        {detail("Approved On", or_dash(h.approved_at.as_deref()))}
                    </div>
                    <p class="mb-0">{h.description.clone().unwrap_or_else(|| "No description provided.".to_string())}</p>
                }
            })}
        </Modal>
    }
}

#[component]
pub fn TiffinGrid(can_add: Signal<bool>) -> impl IntoView {
    let ctx = use_app();
    let refresh = use_refresh();
    let state = reload_on("tiffin listings", refresh.tiffins.into(), api::tiffin_listings);
    let show_add = RwSignal::new(false);
    let show_view = RwSignal::new(false);
    let (selected, set_selected) = signal::<Option<TiffinListing>>(None);

    let card = move |tiffin: TiffinListing| {
        let cover = ctx.image(tiffin.preview_image.as_deref());
        let status = tiffin.status;
        let open = tiffin.clone();
        view! {
            <div class="col-md-6 col-lg-4 mb-4">
                <div class="card listing-card h-100">
                    <div class="position-relative">
                        <img src=cover class="card-img-top" style="height: 200px; object-fit: cover;" alt="Tiffin"/>
                        {status_overlay(status)}
                    </div>
                    <div class="card-body">
                        <h5 class="card-title">{tiffin.title()}</h5>
                        <p class="small text-muted mb-1"><i class="fas fa-truck me-1"></i>{radius(tiffin.delivery_radius)}</p>
                        <p class="small text-muted mb-2"><i class="fas fa-calendar me-1"></i>{or_dash(tiffin.available_days.as_deref())}</p>
                        <button
                            class="btn btn-sm btn-outline-primary w-100"
                            on:click=move |_| {
                                set_selected.set(Some(open.clone()));
                                show_view.set(true);
                            }
                        >
                            "View Details"
                        </button>
                    </div>
                </div>
            </div>
        }
    };

    view! {
        <GridHeader title="Tiffin Services" add_label="Add Tiffin Service" can_add=can_add show_add=show_add/>
        <div class="row">{grid(state, ListingKind::Tiffin, card)}</div>

        <AddListing kind=ListingKind::Tiffin show=show_add/>

        <Modal
            show=show_view
            title=Signal::derive(move || selected.with(|t| t.as_ref().map(|t| t.title()).unwrap_or_default()))
        >
            {move || selected.get().map(|t| view! {
                <img src=ctx.image(t.preview_image.as_deref()) class="img-fluid rounded mb-3" alt="Tiffin"/>
                <div class="row">
                    {detail("Diet", t.diet_type.label().to_string())}
                    {detail("Delivery Radius", radius(t.delivery_radius))}
                    {detail("Fast Delivery", if t.fast_delivery_available { "Available".to_string() } else { "Not available".to_string() })}
                    {detail("Available Days", or_dash(t.available_days.as_deref()))}
                    {detail("Listed On", or_dash(t.created_at.as_deref()))}
                    <div class="col-md-6 mb-2">
                        <div class="small text-muted">"Status"</div>
                        <StatusBadge badge=t.status.badge()/>
                    </div>
                </div>
                <StatusBadge badge=kitchen_badge(t.kitchen_open)/>
            })}
        </Modal>
    }
}

#[component]
pub fn ServiceGrid(can_add: Signal<bool>) -> impl IntoView {
    let refresh = use_refresh();
    let state = reload_on("service listings", refresh.services.into(), api::service_listings);
    let show_add = RwSignal::new(false);
    let show_view = RwSignal::new(false);
    let (selected, set_selected) = signal::<Option<ServiceListing>>(None);

    let card = move |service: ServiceListing| {
        let status = service.status;
        let open = service.clone();
        view! {
            <div class="col-md-6 col-lg-4 mb-4">
                <div class="card listing-card h-100 position-relative">
                    {status_overlay(status)}
                    <div class="card-body">
                        <span class="badge bg-light text-dark border mb-2">
                            <i class=format!("fas {} me-1", service.service_category.icon())></i>
                            {service.service_category.label()}
                        </span>
                        <h5 class="card-title">{service.service_title.clone()}</h5>
                        <p class="small">{truncate(service.description.as_deref().unwrap_or_default(), 100)}</p>
                        <p class="small text-muted mb-2"><i class="fas fa-calendar me-1"></i>{or_dash(service.availability_days.as_deref())}</p>
                        <div class="fw-bold text-primary mb-3">"From " {inr_grouped(service.base_price)}</div>
                        <button
                            class="btn btn-sm btn-outline-primary w-100"
                            on:click=move |_| {
                                set_selected.set(Some(open.clone()));
                                show_view.set(true);
                            }
                        >
                            "View Details"
                        </button>
                    </div>
                </div>
            </div>
        }
    };

    view! {
        <GridHeader title="Home Services" add_label="Add Service" can_add=can_add show_add=show_add/>
        <div class="row">{grid(state, ListingKind::Service, card)}</div>

        <AddListing kind=ListingKind::Service show=show_add/>

        <Modal
            show=show_view
            title=Signal::derive(move || selected.with(|s| s.as_ref().map(|s| s.service_title.clone()).unwrap_or_default()))
        >
            {move || selected.get().map(|s| view! {
                <div class="row">
                    {detail("Category", s.service_category.label())}
                    {detail("Base Price", inr_grouped(s.base_price))}
                    {detail("Service Radius", radius(s.service_radius))}
                    {detail("Availability", or_dash(s.availability_days.as_deref()))}
                    {detail("Listed On", or_dash(s.created_at.as_deref()))}
                    <div class="col-md-6 mb-2">
                        <div class="small text-muted">"Status"</div>
                        <StatusBadge badge=s.status.badge()/>
                    </div>
                </div>
                <p class="mb-0">{s.description.clone().unwrap_or_else(|| "No description provided.".to_string())}</p>
            })}
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_per_kind() {
        assert_eq!(empty_text(ListingKind::House).0, "No house listings yet.");
        assert_eq!(empty_text(ListingKind::House).1, "Start by adding your first property listing.");
        assert_eq!(empty_text(ListingKind::Service).0, "No service listings yet.");
    }

    #[test]
    fn test_radius_text() {
        assert_eq!(radius(Some(3.5)), "3.5 km");
        assert_eq!(radius(None), "N/A");
    }
}
