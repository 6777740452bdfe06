//! Services Browser
//!
//! Category-filtered service cards with a saved flag and a booking modal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use urbanease_domain::{inr_rounded, truncate, validate_booking, ServiceCard, ServiceCategory};

use crate::api;
use crate::components::{toggle_saved, Modal, SaveButton, SavedFlags};
use crate::context::use_app;

#[derive(Clone, Debug, PartialEq)]
struct BookingTarget {
    service_id: i64,
    title: String,
    price: f64,
}

#[component]
pub fn ServicesPage(services: Vec<ServiceCard>) -> impl IntoView {
    let ctx = use_app();
    let flags = SavedFlags::new();
    let (category, set_category) = signal::<Option<ServiceCategory>>(None);

    let show_book = RwSignal::new(false);
    let (target, set_target) = signal::<Option<BookingTarget>>(None);
    let (date, set_date) = signal(String::new());
    let (time, set_time) = signal(String::new());
    let (address, set_address) = signal(String::new());
    let (notes, set_notes) = signal(String::new());
    let (booking, set_booking) = signal(false);

    for s in &services {
        flags.get_or_init(s.id, s.is_saved);
    }
    let services = StoredValue::new(services);

    let visible = move || {
        let selected = category.get();
        services.with_value(|list| {
            list.iter()
                .filter(|s| selected.map_or(true, |c| s.service_category == c))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let open_booking = move |service: &ServiceCard| {
        set_target.set(Some(BookingTarget {
            service_id: service.id,
            title: service.service_title.clone(),
            price: service.base_price,
        }));
        set_date.set(String::new());
        set_time.set(String::new());
        set_address.set(String::new());
        set_notes.set(String::new());
        show_book.set(true);
    };

    let confirm_booking = move |_| {
        if booking.get_untracked() {
            return;
        }
        let Some(service_id) = target.with_untracked(|t| t.as_ref().map(|t| t.service_id)) else {
            return;
        };
        let req = match validate_booking(
            &date.get_untracked(),
            &time.get_untracked(),
            &address.get_untracked(),
            &notes.get_untracked(),
        ) {
            Ok(req) => req,
            Err(e) => {
                ctx.error(e.to_string());
                return;
            }
        };
        set_booking.set(true);
        spawn_local(async move {
            match api::book_service(service_id, &req).await {
                Ok(_) => {
                    show_book.set(false);
                    ctx.notify("Service booked successfully");
                }
                Err(err) => ctx.api_error(&err, "Booking failed"),
            }
            set_booking.set(false);
        });
    };

    view! {
        <div class="container py-4">
            <h2 class="mb-3">"Home Services"</h2>
            <div class="d-flex flex-wrap gap-2 mb-4">
                <button
                    class=move || if category.get().is_none() { "btn btn-primary btn-sm" } else { "btn btn-outline-primary btn-sm" }
                    on:click=move |_| set_category.set(None)
                >
                    "All"
                </button>
                {ServiceCategory::ALL.into_iter().map(|c| view! {
                    <button
                        class=move || if category.get() == Some(c) { "btn btn-primary btn-sm" } else { "btn btn-outline-primary btn-sm" }
                        on:click=move |_| set_category.set(Some(c))
                    >
                        <i class=format!("fas {} me-1", c.icon())></i>{c.label()}
                    </button>
                }).collect_view()}
            </div>

            <div class="row g-4">
                <For
                    each=visible
                    key=|s| s.id
                    children=move |service| {
                        let id = service.id;
                        let saved = flags.get_or_init(id, service.is_saved);
                        let for_booking = service.clone();
                        view! {
                            <div class="col-md-6 col-lg-4">
                                <div class="card service-card h-100">
                                    <div class="card-body">
                                        <div class="d-flex justify-content-between align-items-start mb-2">
                                            <span class="badge bg-light text-dark border">
                                                <i class=format!("fas {} me-1", service.service_category.icon())></i>
                                                {service.service_category.label()}
                                            </span>
                                            <SaveButton
                                                state=saved
                                                on_toggle=move |_| {
                                                    let state = flags.get_or_init(id, false);
                                                    toggle_saved(ctx, state, "Service", move |request| api::set_service_saved(id, request));
                                                }
                                                compact=true
                                            />
                                        </div>
                                        <h5 class="card-title">{service.service_title.clone()}</h5>
                                        <p class="small text-muted mb-1">{service.business_name.clone()}</p>
                                        <p class="small">{truncate(service.description.as_deref().unwrap_or_default(), 100)}</p>
                                        <p class="small text-muted mb-2">
                                            <i class="fas fa-calendar me-1"></i>{service.availability_days.clone().unwrap_or_else(|| "-".to_string())}
                                        </p>
                                        <div class="d-flex justify-content-between align-items-center">
                                            <span class="fw-bold text-primary">"From " {inr_rounded(service.base_price)}</span>
                                            <button class="btn btn-primary btn-sm" on:click=move |_| open_booking(&for_booking)>
                                                "Book Service"
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
            <Show when=move || visible().is_empty()>
                <p class="text-muted">"No services in this category yet."</p>
            </Show>
        </div>

        <Modal
            show=show_book
            title="Book Service".to_string()
            footer=move || view! {
                <button class="btn btn-secondary" on:click=move |_| show_book.set(false)>"Cancel"</button>
                <button class="btn btn-primary" disabled=move || booking.get() on:click=confirm_booking>
                    "Confirm Booking"
                </button>
            }
        >
            <div class="mb-2">
                <label class="form-label">"Service"</label>
                <input class="form-control" readonly prop:value=move || target.with(|t| t.as_ref().map(|t| t.title.clone()).unwrap_or_default())/>
            </div>
            <div class="mb-2">
                <label class="form-label">"Base Price"</label>
                <input class="form-control" readonly prop:value=move || target.with(|t| t.as_ref().map(|t| inr_rounded(t.price)).unwrap_or_default())/>
            </div>
            <div class="row">
                <div class="col-6 mb-2">
                    <label class="form-label">"Date"</label>
                    <input type="date" class="form-control" prop:value=move || date.get() on:input=move |ev| set_date.set(event_target_value(&ev))/>
                </div>
                <div class="col-6 mb-2">
                    <label class="form-label">"Time"</label>
                    <input type="time" class="form-control" prop:value=move || time.get() on:input=move |ev| set_time.set(event_target_value(&ev))/>
                </div>
            </div>
            <div class="mb-2">
                <label class="form-label">"Address"</label>
                <textarea class="form-control" rows="2" prop:value=move || address.get() on:input=move |ev| set_address.set(event_target_value(&ev))></textarea>
            </div>
            <div>
                <label class="form-label">"Notes"</label>
                <textarea class="form-control" rows="2" prop:value=move || notes.get() on:input=move |ev| set_notes.set(event_target_value(&ev))></textarea>
            </div>
        </Modal>
    }
}
