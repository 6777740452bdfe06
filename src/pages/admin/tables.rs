//! Admin Overview Tables
//!
//! Read-only tables, each fetched once when its section first opens.

use leptos::prelude::*;
use urbanease_domain::{inr, mask_aadhaar, or_dash, time_12h, Badge};

use crate::api;
use crate::components::StatusBadge;
use crate::pages::loadable::{clipped, load, table_body};

/// Business name with the owner's username underneath
fn owner(business: Option<&str>, username: Option<&str>) -> impl IntoView {
    view! {
        <div class="fw-bold">{or_dash(business)}</div>
        <div class="small text-muted">{or_dash(username)}</div>
    }
}

fn fast_badge(fast: bool) -> Badge {
    if fast {
        Badge { class: "bg-primary", label: "Fast Delivery" }
    } else {
        Badge { class: "bg-secondary", label: "Standard" }
    }
}

fn radius(km: Option<f64>) -> String {
    km.map(|r| format!("{} km", r)).unwrap_or_else(|| "N/A".to_string())
}

#[component]
fn AdminTable(
    #[prop(into)] title: String,
    headers: &'static [&'static str],
    children: Children,
) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-header"><h5 class="mb-0">{title}</h5></div>
            <div class="table-responsive">
                <table class="table table-hover align-middle mb-0">
                    <thead class="table-light">
                        <tr>{headers.iter().map(|h| view! { <th>{*h}</th> }).collect_view()}</tr>
                    </thead>
                    <tbody>{children()}</tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
pub fn ProviderProfilesTable() -> impl IntoView {
    let state = load("provider profiles", api::provider_profiles);
    view! {
        <AdminTable
            title="Provider Profiles"
            headers=&["#", "Business", "Status", "Aadhaar", "Licence", "Verified At", "Created At"]
        >
            {table_body(state, 7, "No data available.", |n, p| view! {
                <tr>
                    <td>{n}</td>
                    <td>{owner(Some(&p.business_name), Some(&p.username))}</td>
                    <td><StatusBadge badge=p.verification_status.badge()/></td>
                    <td>{mask_aadhaar(&p.aadhaar_number)}</td>
                    <td>{or_dash(p.business_license.as_deref())}</td>
                    <td>{or_dash(p.verified_at.as_deref())}</td>
                    <td>{or_dash(p.created_at.as_deref())}</td>
                </tr>
            })}
        </AdminTable>
    }
}

#[component]
pub fn HouseListingsTable() -> impl IntoView {
    let state = load("house listings", api::all_house_listings);
    view! {
        <AdminTable
            title="House Listings"
            headers=&["#", "Provider", "Title", "Type", "Location", "Price", "Status", "Approved At", "Created At"]
        >
            {table_body(state, 9, "No data available.", |n, h| view! {
                <tr>
                    <td>{n}</td>
                    <td>{owner(h.provider_business_name.as_deref(), h.provider_username.as_deref())}</td>
                    <td>{h.title.clone()}</td>
                    <td>{h.house_type.clone()}</td>
                    <td>{h.location.clone()}</td>
                    <td>{inr(h.price)}</td>
                    <td><StatusBadge badge=h.status.badge()/></td>
                    <td>{or_dash(h.approved_at.as_deref())}</td>
                    <td>{or_dash(h.created_at.as_deref())}</td>
                </tr>
            })}
        </AdminTable>
    }
}

#[component]
pub fn TiffinListingsTable() -> impl IntoView {
    let state = load("tiffin listings", api::all_tiffin_listings);
    view! {
        <AdminTable
            title="Tiffin Listings"
            headers=&["#", "Provider", "Radius", "Delivery", "Diet", "Days", "Status", "Approved At", "Created At"]
        >
            {table_body(state, 9, "No data available.", |n, t| view! {
                <tr>
                    <td>{n}</td>
                    <td>{owner(t.provider_business_name.as_deref(), t.provider_username.as_deref())}</td>
                    <td>{radius(t.delivery_radius)}</td>
                    <td><StatusBadge badge=fast_badge(t.fast_delivery_available)/></td>
                    <td>{t.diet_type.label()}</td>
                    <td>{or_dash(t.available_days.as_deref())}</td>
                    <td><StatusBadge badge=t.status.badge()/></td>
                    <td>{or_dash(t.approved_at.as_deref())}</td>
                    <td>{or_dash(t.created_at.as_deref())}</td>
                </tr>
            })}
        </AdminTable>
    }
}

#[component]
pub fn ServiceListingsTable() -> impl IntoView {
    let state = load("service listings", api::all_service_listings);
    view! {
        <AdminTable
            title="Service Listings"
            headers=&["#", "Title", "Provider", "Category", "Base Price", "Radius", "Days", "Status", "Approved At", "Created At"]
        >
            {table_body(state, 10, "No data available.", |n, s| view! {
                <tr>
                    <td>{n}</td>
                    <td><div class="fw-bold">{s.service_title.clone()}</div></td>
                    <td>{owner(s.provider_business_name.as_deref(), s.provider_username.as_deref())}</td>
                    <td>{s.service_category.label()}</td>
                    <td>{inr(s.base_price)}</td>
                    <td>{radius(s.service_radius)}</td>
                    <td>{or_dash(s.availability_days.as_deref())}</td>
                    <td><StatusBadge badge=s.status.badge()/></td>
                    <td>{or_dash(s.approved_at.as_deref())}</td>
                    <td>{or_dash(s.created_at.as_deref())}</td>
                </tr>
            })}
        </AdminTable>
    }
}

#[component]
pub fn OrdersTable() -> impl IntoView {
    let state = load("orders", api::all_orders);
    view! {
        <AdminTable
            title="Orders"
            headers=&["#", "Customer", "Provider", "Meal", "Qty", "Base", "Total", "Delivery", "Status", "Address", "Ordered"]
        >
            {table_body(state, 11, "No orders found.", |n, o| {
                let delivery = if o.fast_delivery {
                    Badge { class: "bg-warning text-dark", label: "Fast" }
                } else {
                    Badge { class: "bg-light text-dark", label: "Standard" }
                };
                view! {
                    <tr>
                        <td>{n}</td>
                        <td><div class="fw-bold">{or_dash(o.customer_name.as_deref())}</div></td>
                        <td><div class="fw-bold">{or_dash(o.provider_business_name.as_deref())}</div></td>
                        <td>{o.meal_name.clone()}</td>
                        <td>{o.quantity}</td>
                        <td>{inr(o.base_price)}</td>
                        <td><div class="fw-bold">{inr(o.total_price)}</div></td>
                        <td><StatusBadge badge=delivery/></td>
                        <td><StatusBadge badge=o.order_status.badge()/></td>
                        <td>{clipped(o.delivery_address.as_deref())}</td>
                        <td>{or_dash(o.order_date.as_deref())}</td>
                    </tr>
                }
            })}
        </AdminTable>
    }
}

#[component]
pub fn BookingsTable() -> impl IntoView {
    let state = load("service bookings", api::all_bookings);
    view! {
        <AdminTable
            title="Service Bookings"
            headers=&["#", "Customer", "Provider", "Service", "Date", "Time", "Status", "Address", "Notes", "Quote", "Created"]
        >
            {table_body(state, 11, "No bookings found.", |n, b| view! {
                <tr>
                    <td>{n}</td>
                    <td><div class="fw-bold">{or_dash(b.customer_name.as_deref())}</div></td>
                    <td><div class="fw-bold">{or_dash(b.provider_business_name.as_deref())}</div></td>
                    <td>{b.service_title.clone()}</td>
                    <td>{or_dash(b.booking_date.as_deref())}</td>
                    <td>{b.booking_time.as_deref().map(time_12h).unwrap_or_else(|| "-".to_string())}</td>
                    <td><StatusBadge badge=b.booking_status.badge()/></td>
                    <td>{clipped(b.address.as_deref())}</td>
                    <td>{clipped(b.notes.as_deref())}</td>
                    <td>
                        {match b.quote() {
                            Some(price) => view! { <span>{inr(price)}</span> }.into_any(),
                            None => view! { <span class="text-muted">"Not Quoted"</span> }.into_any(),
                        }}
                    </td>
                    <td>{or_dash(b.created_at.as_deref())}</td>
                </tr>
            })}
        </AdminTable>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_falls_back_to_na() {
        assert_eq!(radius(Some(5.0)), "5 km");
        assert_eq!(radius(None), "N/A");
    }

    #[test]
    fn test_fast_badge_labels() {
        assert_eq!(fast_badge(true).label, "Fast Delivery");
        assert_eq!(fast_badge(false).css(), "badge bg-secondary");
    }
}
