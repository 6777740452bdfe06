//! Customer Dashboard

use leptos::prelude::*;
use urbanease_domain::HousingKind;

use crate::components::Modal;
use crate::dom;

const TILES: &[(&str, &str, &str, &str)] = &[
    ("Tiffin", "Home-style meals delivered daily", "fa-utensils", "/tiffin"),
    ("Services", "Electricians, plumbers, cleaning and more", "fa-tools", "/services"),
    ("My Orders", "Track your meal orders", "fa-receipt", "/my-orders"),
    ("My Bookings", "Service appointments you booked", "fa-calendar-check", "/my-bookings"),
];

#[component]
pub fn CustomerHome() -> impl IntoView {
    let show_housing = RwSignal::new(false);
    let (selected, set_selected) = signal::<Option<HousingKind>>(None);

    let go_housing = move |_| {
        if let Some(kind) = selected.get_untracked() {
            show_housing.set(false);
            dom::go_to(&format!("/housing/{}", kind.slug()));
        }
    };

    view! {
        <div class="container py-4">
            <h2 class="mb-4">"What are you looking for?"</h2>
            <div class="row g-3">
                <div class="col-md-4">
                    <div class="card h-100 dashboard-tile" on:click=move |_| show_housing.set(true)>
                        <div class="card-body text-center">
                            <i class="fas fa-home fa-2x text-primary mb-2"></i>
                            <h5>"Housing"</h5>
                            <p class="text-muted small mb-0">"Hostels, PGs and apartments"</p>
                        </div>
                    </div>
                </div>
                {TILES.iter().map(|(title, blurb, icon, href)| view! {
                    <div class="col-md-4">
                        <a class="card h-100 dashboard-tile text-decoration-none" href=*href>
                            <div class="card-body text-center">
                                <i class=format!("fas {} fa-2x text-primary mb-2", icon)></i>
                                <h5 class="text-dark">{*title}</h5>
                                <p class="text-muted small mb-0">{*blurb}</p>
                            </div>
                        </a>
                    </div>
                }).collect_view()}
            </div>
        </div>

        <Modal
            show=show_housing
            title="Choose housing type".to_string()
            footer=move || view! {
                <button
                    class="btn btn-primary"
                    disabled=move || selected.get().is_none()
                    on:click=go_housing
                >
                    "Continue"
                </button>
            }
        >
            <div class="row g-2">
                {[HousingKind::Hostel, HousingKind::Pg, HousingKind::Apartment].into_iter().map(|kind| view! {
                    <div class="col-4">
                        <div
                            class=move || if selected.get() == Some(kind) {
                                "card housing-option-card selected text-center p-3"
                            } else {
                                "card housing-option-card text-center p-3"
                            }
                            on:click=move |_| set_selected.set(Some(kind))
                        >
                            {kind.label()}
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </Modal>
    }
}
