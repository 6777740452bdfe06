//! My Bookings

use leptos::prelude::*;
use urbanease_domain::{inr, or_dash, time_12h, truncate, ServiceBooking};

use crate::components::StatusBadge;

#[component]
pub fn MyBookingsPage(bookings: Vec<ServiceBooking>) -> impl IntoView {
    let empty = bookings.is_empty();

    view! {
        <div class="container py-4">
            <h2 class="mb-4">"My Bookings"</h2>
            <Show when=move || empty>
                <p class="text-muted">"No service bookings yet."</p>
            </Show>
            <div class="table-responsive">
                <table class="table table-hover align-middle">
                    <thead>
                        <tr>
                            <th>"Service"</th>
                            <th>"Provider"</th>
                            <th>"Date"</th>
                            <th>"Time"</th>
                            <th>"Address"</th>
                            <th>"Quote"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {bookings.into_iter().map(|b| {
                            let address = b.address.clone().unwrap_or_default();
                            view! {
                                <tr>
                                    <td>
                                        <div class="fw-semibold">{b.service_title.clone()}</div>
                                        <div class="small text-muted">{b.service_category.label()}</div>
                                    </td>
                                    <td>{or_dash(b.provider_business_name.as_deref())}</td>
                                    <td>{or_dash(b.booking_date.as_deref())}</td>
                                    <td>{b.booking_time.as_deref().map(time_12h).unwrap_or_else(|| "-".to_string())}</td>
                                    <td title=address.clone()>{truncate(&address, 40)}</td>
                                    <td>{b.quote().map(inr).unwrap_or_else(|| "--".to_string())}</td>
                                    <td><StatusBadge badge=b.booking_status.badge()/></td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
