//! Service Bookings
//!
//! Approved services open a bookings table; each booking's details modal
//! carries the accept/reject/complete actions its status allows.

use leptos::prelude::*;
use leptos::task::spawn_local;
use urbanease_domain::{inr, inr_grouped, or_dash, time_12h, BookingStatus, ServiceBooking, ServiceListing};

use super::{bump, use_refresh};
use crate::api;
use crate::components::{ConfirmButton, Modal, StatusBadge};
use crate::context::use_app;
use crate::pages::loadable::{reload_on, table_body, Loadable};

fn quote_text(booking: &ServiceBooking) -> String {
    booking.quote().map(inr).unwrap_or_else(|| "Not Quoted".to_string())
}

fn time_text(booking: &ServiceBooking) -> String {
    booking.booking_time.as_deref().map(time_12h).unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn BookingsSection() -> impl IntoView {
    let refresh = use_refresh();
    let services = reload_on("service listings", refresh.services.into(), api::service_listings);
    let (managing, set_managing) = signal::<Option<ServiceListing>>(None);

    let service_card = move |service: ServiceListing| {
        let approved = service.status.is_approved();
        let pick = service.clone();
        view! {
            <div class="col-md-6 col-lg-4 mb-4">
                <div class="card h-100 position-relative">
                    <span class=format!("{} position-absolute top-0 end-0 m-2", service.status.badge().css())>
                        {service.status.badge().label}
                    </span>
                    <div class="card-body d-flex flex-column">
                        <div class="text-center text-secondary mb-3">
                            <i class=format!("fas {} fa-3x", service.service_category.icon())></i>
                        </div>
                        <h5 class="fw-bold mb-1 text-truncate">{service.service_title.clone()}</h5>
                        <span class="badge bg-secondary mb-2 align-self-start">{service.service_category.label()}</span>
                        <p class="text-muted mb-3">"Base Price: " <strong>{inr_grouped(service.base_price)}</strong></p>
                        <button
                            class=if approved { "btn btn-primary mt-auto" } else { "btn btn-secondary mt-auto" }
                            disabled=!approved
                            title=if approved { "" } else { "Service must be approved before managing bookings." }
                            on:click=move |_| set_managing.set(Some(pick.clone()))
                        >
                            "Manage Services"
                        </button>
                    </div>
                </div>
            </div>
        }
    };

    view! {
        <Show
            when=move || managing.with(|m| m.is_some())
            fallback=move || view! {
                <h4 class="mb-3">"Service Bookings"</h4>
                <div class="row">
                    {move || match services.get() {
                        Loadable::Loading => view! { <div class="col-12 text-center text-muted py-5">"Loading..."</div> }.into_any(),
                        Loadable::Failed => view! { <div class="col-12 text-center text-danger py-5">"Failed to load services."</div> }.into_any(),
                        Loadable::Ready(list) if list.is_empty() => view! {
                            <div class="col-12 text-center text-muted py-5">"No service listings yet."</div>
                        }.into_any(),
                        Loadable::Ready(list) => list.into_iter().map(service_card).collect_view().into_any(),
                    }}
                </div>
            }
        >
            {move || managing.get().map(|service| view! {
                <BookingsTable service=service on_back=move |_| set_managing.set(None)/>
            })}
        </Show>
    }
}

#[component]
fn BookingsTable(service: ServiceListing, #[prop(into)] on_back: Callback<()>) -> impl IntoView {
    let ctx = use_app();
    let refresh = use_refresh();
    let service_id = service.id;
    let bookings_refresh = RwSignal::new(0u32);
    let bookings = reload_on("service bookings", bookings_refresh.into(), move || api::service_bookings(service_id));

    let show_details = RwSignal::new(false);
    let (selected, set_selected) = signal::<Option<ServiceBooking>>(None);
    let (updating, set_updating) = signal(false);

    let update = move |next: BookingStatus| {
        if updating.get_untracked() {
            return;
        }
        let Some(booking_id) = selected.with_untracked(|b| b.as_ref().map(|b| b.id)) else {
            return;
        };
        set_updating.set(true);
        spawn_local(async move {
            match api::update_booking_status(booking_id, next).await {
                Ok(_) => {
                    show_details.set(false);
                    ctx.notify("Booking status updated!");
                    bump(bookings_refresh);
                    bump(refresh.counts);
                }
                Err(e) => ctx.api_error(&e, "Failed to update booking status."),
            }
            set_updating.set(false);
        });
    };

    view! {
        <div class="mb-3">
            <button class="btn btn-link px-0" on:click=move |_| on_back.run(())>
                <i class="fas fa-arrow-left me-1"></i>"Back to services"
            </button>
            <h4 class="mb-0">{service.service_title.clone()}</h4>
        </div>

        <div class="card">
            <div class="table-responsive">
                <table class="table table-hover align-middle mb-0">
                    <thead class="table-light">
                        <tr>
                            <th>"Booking ID"</th>
                            <th>"Customer"</th>
                            <th>"Date"</th>
                            <th>"Time"</th>
                            <th>"Price"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {table_body(bookings, 7, "No bookings yet.", move |_, b: ServiceBooking| {
                            let details = b.clone();
                            view! {
                                <tr>
                                    <td>{format!("#{}", b.id)}</td>
                                    <td>{or_dash(b.customer_name.as_deref())}</td>
                                    <td>{or_dash(b.booking_date.as_deref())}</td>
                                    <td>{time_text(&b)}</td>
                                    <td class="fw-bold">{quote_text(&b)}</td>
                                    <td><StatusBadge badge=b.booking_status.badge()/></td>
                                    <td>
                                        <button
                                            class="btn btn-primary btn-sm"
                                            on:click=move |_| {
                                                set_selected.set(Some(details.clone()));
                                                show_details.set(true);
                                            }
                                        >
                                            "View"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </div>
        </div>

        <Modal
            show=show_details
            title=Signal::derive(move || selected.with(|b| b.as_ref().map(|b| format!("Booking #{}", b.id)).unwrap_or_default()))
            footer=move || {
                let actions = selected.with(|b| b.as_ref().map(|b| b.booking_status.actions()).unwrap_or_default());
                view! {
                    {actions.into_iter().map(|action| view! {
                        <ConfirmButton
                            label=action.label
                            button_class=action.button_class
                            prompt=action.confirm
                            disabled=updating
                            on_confirm=move |_| update(action.next)
                        />
                    }).collect_view()}
                    <button class="btn btn-secondary" on:click=move |_| show_details.set(false)>"Close"</button>
                }
            }
        >
            {move || selected.get().map(|b| view! {
                <dl class="row mb-0">
                    <dt class="col-sm-4">"Customer"</dt>
                    <dd class="col-sm-8">{or_dash(b.customer_name.as_deref())}</dd>
                    <dt class="col-sm-4">"Phone"</dt>
                    <dd class="col-sm-8">{or_dash(b.customer_phone.as_deref())}</dd>
                    <dt class="col-sm-4">"Service"</dt>
                    <dd class="col-sm-8">{b.service_title.clone()}</dd>
                    <dt class="col-sm-4">"Category"</dt>
                    <dd class="col-sm-8">{b.service_category.label()}</dd>
                    <dt class="col-sm-4">"Date"</dt>
                    <dd class="col-sm-8">{or_dash(b.booking_date.as_deref())}</dd>
                    <dt class="col-sm-4">"Time"</dt>
                    <dd class="col-sm-8">{time_text(&b)}</dd>
                    <dt class="col-sm-4">"Price"</dt>
                    <dd class="col-sm-8">{quote_text(&b)}</dd>
                    <dt class="col-sm-4">"Status"</dt>
                    <dd class="col-sm-8"><StatusBadge badge=b.booking_status.badge()/></dd>
                    <dt class="col-sm-4">"Address"</dt>
                    <dd class="col-sm-8">{or_dash(b.address.as_deref())}</dd>
                    <dt class="col-sm-4">"Notes"</dt>
                    <dd class="col-sm-8">{b.notes.clone().filter(|n| !n.is_empty()).unwrap_or_else(|| "No notes provided.".to_string())}</dd>
                    <dt class="col-sm-4">"Requested"</dt>
                    <dd class="col-sm-8">{or_dash(b.created_at.as_deref())}</dd>
                </dl>
            })}
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use urbanease_domain::ServiceCategory;

    fn booking(quoted: Option<f64>, time: Option<&str>) -> ServiceBooking {
        ServiceBooking {
            id: 7,
            customer_name: Some("Ravi".into()),
            customer_phone: None,
            provider_business_name: None,
            service_title: "Tap repair".into(),
            service_category: ServiceCategory::Plumber,
            booking_date: Some("2024-05-02".into()),
            booking_time: time.map(str::to_string),
            booking_status: BookingStatus::Requested,
            address: None,
            notes: None,
            quoted_price: quoted,
            created_at: None,
        }
    }

    #[test]
    fn test_unpriced_booking_says_not_quoted() {
        assert_eq!(quote_text(&booking(Some(0.0), None)), "Not Quoted");
        assert_eq!(quote_text(&booking(None, None)), "Not Quoted");
        assert_eq!(quote_text(&booking(Some(450.0), None)), "₹450.00");
    }

    #[test]
    fn test_time_text() {
        assert_eq!(time_text(&booking(None, Some("14:05"))), "2:05 PM");
        assert_eq!(time_text(&booking(None, None)), "-");
    }
}
