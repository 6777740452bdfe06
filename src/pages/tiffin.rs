//! Tiffin Browser
//!
//! Kitchen cards, a kitchen detail view with its meals, and the order modal
//! with a live total.

use leptos::prelude::*;
use leptos::task::spawn_local;
use urbanease_domain::{
    inr_rounded, order_total, validate_meal_order, DietType, KitchenCard, KitchenDetail, Meal,
};

use crate::api;
use crate::components::{Carousel, Modal};
use crate::context::use_app;
use crate::pages::housing::ProviderBlock;
use crate::pages::loadable::Latest;

fn diet_badge_class(diet: DietType) -> &'static str {
    match diet {
        DietType::Veg => "badge mb-2 bg-success",
        DietType::NonVeg => "badge mb-2 bg-danger",
        _ => "badge mb-2 bg-warning text-dark",
    }
}

fn diet_chip_class(diet: DietType) -> &'static str {
    match diet {
        DietType::NonVeg => "diet-badge diet-non-veg",
        DietType::Both => "diet-badge diet-both",
        _ => "diet-badge diet-veg",
    }
}

/// Meal picked for the order modal
#[derive(Clone, Debug, PartialEq)]
struct OrderTarget {
    meal_id: i64,
    meal_name: String,
    unit_price: f64,
}

#[component]
pub fn TiffinPage(kitchens: Vec<KitchenCard>, default_address: String) -> impl IntoView {
    let ctx = use_app();
    let (kitchen, set_kitchen) = signal::<Option<KitchenDetail>>(None);
    let (meals, set_meals) = signal::<Option<Vec<Meal>>>(None);

    // Order modal state
    let show_order = RwSignal::new(false);
    let (target, set_target) = signal::<Option<OrderTarget>>(None);
    let (quantity, set_quantity) = signal(String::from("1"));
    let (fast, set_fast) = signal(false);
    let (address, set_address) = signal(String::new());
    let (notes, set_notes) = signal(String::new());
    let (placing, set_placing) = signal(false);
    let default_address = StoredValue::new(default_address);

    let charge = ctx.config.with_value(|c| c.fast_delivery_charge);
    let fast_available = move || kitchen.with(|k| k.as_ref().map(|k| k.listing.fast_delivery_available).unwrap_or(false));

    let total = move || {
        let unit = target.with(|t| t.as_ref().map(|t| t.unit_price).unwrap_or(0.0));
        let qty = quantity.with(|q| q.trim().parse::<u32>().ok().filter(|q| *q >= 1).unwrap_or(1));
        order_total(unit, qty, fast.get() && fast_available(), charge)
    };

    let latest = Latest::new();

    let show_kitchen = move |id: i64| {
        let ticket = latest.begin();
        spawn_local(async move {
            let result = api::tiffin_details(id).await;
            if !latest.is_current(ticket) {
                return;
            }
            match result {
                Ok(detail) => {
                    set_meals.set(None);
                    set_kitchen.set(Some(detail));
                    if let Some(window) = web_sys::window() {
                        window.scroll_to_with_x_and_y(0.0, 0.0);
                    }
                    let loaded = match api::tiffin_meals(id).await {
                        Ok(list) => list,
                        Err(e) => {
                            log::error!("Meals for kitchen #{} failed: {}", id, e);
                            Vec::new()
                        }
                    };
                    if latest.is_current(ticket) {
                        set_meals.set(Some(loaded));
                    }
                }
                Err(err) => {
                    log::error!("Kitchen #{} failed: {}", id, err);
                    ctx.error("Failed to load kitchen details.");
                    set_kitchen.set(None);
                }
            }
        });
    };

    let open_order = move |meal: &Meal| {
        set_target.set(Some(OrderTarget {
            meal_id: meal.id,
            meal_name: meal.meal_name.clone(),
            unit_price: meal.price,
        }));
        set_quantity.set("1".to_string());
        set_fast.set(false);
        set_notes.set(String::new());
        set_address.set(default_address.with_value(|a| a.trim().to_string()));
        show_order.set(true);
    };

    let place_order = move |_| {
        if placing.get_untracked() {
            return;
        }
        let meal_id = target.with_untracked(|t| t.as_ref().map(|t| t.meal_id));
        let fast_delivery = fast.get_untracked() && fast_available();
        let validated = validate_meal_order(
            meal_id,
            &quantity.get_untracked(),
            fast_delivery,
            &address.get_untracked(),
            &notes.get_untracked(),
        );
        let (meal_id, order) = match validated {
            Ok(v) => v,
            Err(e) => {
                ctx.error(e.to_string());
                return;
            }
        };
        set_placing.set(true);
        spawn_local(async move {
            match api::order_meal(meal_id, &order).await {
                Ok(_) => {
                    show_order.set(false);
                    ctx.notify("Order placed successfully");
                }
                Err(err) => ctx.api_error(&err, "Failed to place order"),
            }
            set_placing.set(false);
        });
    };

    let placeholder = ctx.config.with_value(|c| c.placeholder_image.clone());
    let kitchens = StoredValue::new(kitchens);

    view! {
        <div class="container py-4">
            <Show
                when=move || kitchen.with(|k| k.is_some())
                fallback=move || view! {
                    <section id="kitchensListSection">
                        <h2 class="mb-4">"Tiffin Services"</h2>
                        <div class="row g-4">
                            {kitchens.with_value(|list| list.iter().map(|k| {
                                let id = k.id;
                                view! {
                                    <div class="col-md-6 col-lg-4">
                                        <div class="card kitchen-card h-100">
                                            <img src=ctx.image(k.image_path.as_deref()) class="card-img-top" style="height: 200px; object-fit: cover;" alt=k.business_name.clone()/>
                                            <div class="card-body">
                                                <h5 class="card-title">{k.business_name.clone()}</h5>
                                                <span class=diet_badge_class(k.diet_type)>{k.diet_type.label()}</span>
                                                <p class="small text-muted mb-1">
                                                    <i class="fas fa-calendar me-1"></i>{k.available_days.clone().unwrap_or_else(|| "Mon-Sun".to_string())}
                                                </p>
                                                <p class="small text-muted mb-2">
                                                    <i class="fas fa-route me-1"></i>
                                                    {k.delivery_radius.map(|r| format!("{} km radius", r)).unwrap_or_else(|| "-".to_string())}
                                                </p>
                                                {k.fast_delivery_available.then(|| view! {
                                                    <span class="badge bg-info text-dark mb-2"><i class="fas fa-bolt me-1"></i>"Fast Delivery"</span>
                                                })}
                                                <button class="btn btn-primary w-100 order-food-btn" on:click=move |_| show_kitchen(id)>
                                                    "Order Food"
                                                </button>
                                            </div>
                                        </div>
                                    </div>
                                }
                            }).collect_view())}
                        </div>
                    </section>
                }
            >
                <section id="kitchenDetailSection">
                    <button class="btn btn-link mb-3 px-0" on:click=move |_| set_kitchen.set(None)>
                        <i class="fas fa-arrow-left me-1"></i>"Back to kitchens"
                    </button>
                    {let placeholder = placeholder.clone(); move || kitchen.get().map(|detail| {
                        let listing = detail.listing;
                        let images: Vec<String> = listing.images.iter().map(|img| ctx.image(Some(img))).collect();
                        let placeholder = placeholder.clone();
                        view! {
                            <div class="row g-4">
                                <div class="col-lg-7">
                                    <Carousel images=images placeholder=placeholder.clone()/>
                                </div>
                                <div class="col-lg-5">
                                    <h3>{detail.provider.business_name.clone()}</h3>
                                    <span class=diet_badge_class(listing.diet_type)>{listing.diet_type.as_str().to_uppercase()}</span>
                                    <ul class="list-unstyled small">
                                        <li><strong>"Available: "</strong>{listing.available_days.clone().unwrap_or_else(|| "Mon-Sun".to_string())}</li>
                                        <li><strong>"Delivery radius: "</strong>{listing.delivery_radius.map(|r| format!("{} km", r)).unwrap_or_else(|| "-".to_string())}</li>
                                        <li><strong>"Listed: "</strong>{listing.created_at.clone().unwrap_or_default()}</li>
                                    </ul>
                                    {listing.fast_delivery_available.then(|| view! {
                                        <span class="badge bg-info text-dark"><i class="fas fa-bolt me-1"></i>"Fast Delivery"</span>
                                    })}
                                    <ProviderBlock provider=detail.provider/>
                                </div>
                            </div>
                        }
                    })}
                    <h4 class="mt-4 mb-3">"Menu"</h4>
                    {move || match meals.get() {
                        None => view! {
                            <div class="text-center py-4"><div class="spinner-border text-primary"></div></div>
                        }.into_any(),
                        Some(list) if list.is_empty() => view! {
                            <p class="text-muted">"No meals available right now."</p>
                        }.into_any(),
                        Some(list) => view! {
                            <div class="row g-4">
                                {list.into_iter().map(|meal| {
                                    let meal_for_order = meal.clone();
                                    view! {
                                        <div class="col-md-6 col-lg-4">
                                            <div class="meal-card">
                                                <div class="meal-image">
                                                    <img src=ctx.image(meal.meal_image_path.as_deref()) alt=meal.meal_name.clone()/>
                                                    <span class="meal-badge">{meal.meal_category.clone()}</span>
                                                    <span class=diet_chip_class(meal.diet_type)>{meal.diet_type.as_str()}</span>
                                                </div>
                                                <div class="meal-content">
                                                    <h4 class="meal-title">{meal.meal_name.clone()}</h4>
                                                    <span class="meal-price">{inr_rounded(meal.price)}</span>
                                                    <p class="meal-desc text-truncate-3">{meal.description.clone().unwrap_or_default()}</p>
                                                    <button class="btn btn-primary w-100" on:click=move |_| open_order(&meal_for_order)>
                                                        "Order Now"
                                                    </button>
                                                </div>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        }.into_any(),
                    }}
                </section>
            </Show>
        </div>

        <Modal
            show=show_order
            title="Order Meal".to_string()
            footer=move || view! {
                <button class="btn btn-secondary" on:click=move |_| show_order.set(false)>"Cancel"</button>
                <button class="btn btn-primary" disabled=move || placing.get() on:click=place_order>
                    "Place Order"
                </button>
            }
        >
            <div class="mb-2">
                <label class="form-label">"Meal"</label>
                <input class="form-control" readonly prop:value=move || target.with(|t| t.as_ref().map(|t| t.meal_name.clone()).unwrap_or_default())/>
            </div>
            <div class="mb-2">
                <label class="form-label">"Price"</label>
                <input class="form-control" readonly prop:value=move || target.with(|t| t.as_ref().map(|t| inr_rounded(t.unit_price)).unwrap_or_default())/>
            </div>
            <div class="mb-2">
                <label class="form-label">"Quantity"</label>
                <input
                    type="number"
                    min="1"
                    class="form-control"
                    prop:value=move || quantity.get()
                    on:input=move |ev| set_quantity.set(event_target_value(&ev))
                />
            </div>
            <Show when=fast_available>
                <div class="form-check mb-2">
                    <input
                        type="checkbox"
                        class="form-check-input"
                        id="orderFastDelivery"
                        prop:checked=move || fast.get()
                        on:change=move |ev| set_fast.set(event_target_checked(&ev))
                    />
                    <label class="form-check-label" for="orderFastDelivery">
                        "Fast delivery " {format!("( + {} )", inr_rounded(charge))}
                    </label>
                </div>
            </Show>
            <div class="mb-2">
                <label class="form-label">"Delivery Address"</label>
                <textarea
                    class="form-control"
                    rows="2"
                    prop:value=move || address.get()
                    on:input=move |ev| set_address.set(event_target_value(&ev))
                ></textarea>
            </div>
            <div class="mb-2">
                <label class="form-label">"Notes"</label>
                <textarea
                    class="form-control"
                    rows="2"
                    prop:value=move || notes.get()
                    on:input=move |ev| set_notes.set(event_target_value(&ev))
                ></textarea>
            </div>
            <div>
                <label class="form-label">"Total"</label>
                <input class="form-control fw-bold" readonly prop:value=move || inr_rounded(total())/>
            </div>
        </Modal>
    }
}
