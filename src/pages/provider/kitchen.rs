//! Kitchen Manager
//!
//! Approved tiffin services can be managed: open or close the kitchen,
//! maintain the meal menu and move food orders along their status chain.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use urbanease_domain::{
    availability_badge, inr, kitchen_badge, or_dash, require_fields, title_case, ApiError, Badge, DietType,
    FoodOrder, Meal, Optimistic, OrderStatus, TiffinListing, ValidationResult,
};
use web_sys::FormData;

use super::{bump, use_refresh};
use crate::api;
use crate::components::{ConfirmButton, Modal, StatusBadge};
use crate::context::use_app;
use crate::dom;
use crate::pages::loadable::{reload_on, table_body, Loadable};

const MEAL_CATEGORIES: &[&str] = &["breakfast", "lunch", "dinner", "snacks"];

fn toggle_error(err: &ApiError) -> String {
    match err {
        ApiError::Rejected(msg) => format!("Failed to update status: {}", msg),
        _ => "Error updating status.".to_string(),
    }
}

fn fast_badge(fast: bool) -> Badge {
    if fast {
        Badge { class: "bg-warning text-dark", label: "Fast" }
    } else {
        Badge { class: "bg-light text-muted", label: "Standard" }
    }
}

/// Multipart fields of the meal form, in the order the backend reads them
fn meal_fields(
    name: &str,
    category: &str,
    diet: DietType,
    price: &str,
    description: &str,
    available: bool,
) -> ValidationResult<Vec<(&'static str, String)>> {
    require_fields(&[("Meal name", name), ("Category", category), ("Price", price)])?;
    Ok(vec![
        ("meal_name", name.trim().to_string()),
        ("meal_category", category.to_string()),
        ("diet_type", diet.as_str().to_string()),
        ("price", price.trim().to_string()),
        ("description", description.trim().to_string()),
        ("is_available", available.to_string()),
    ])
}

#[component]
pub fn KitchenSection() -> impl IntoView {
    let refresh = use_refresh();
    let tiffins = reload_on("tiffin listings", refresh.tiffins.into(), api::tiffin_listings);
    let (managing, set_managing) = signal::<Option<TiffinListing>>(None);

    view! {
        <Show
            when=move || managing.with(|m| m.is_some())
            fallback=move || view! {
                <div class="card">
                    <div class="card-header"><h5 class="mb-0">"Your Tiffin Services"</h5></div>
                    <div class="table-responsive">
                        <table class="table table-hover align-middle mb-0">
                            <thead class="table-light">
                                <tr>
                                    <th>"#"</th>
                                    <th>"Service"</th>
                                    <th>"Days"</th>
                                    <th>"Status"</th>
                                    <th>"Kitchen"</th>
                                    <th>"Action"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {table_body(tiffins, 6, "No tiffin services yet.", move |n, t| {
                                    let approved = t.status.is_approved();
                                    let pick = t.clone();
                                    view! {
                                        <tr>
                                            <td>{n}</td>
                                            <td><div class="fw-bold">{t.title()}</div></td>
                                            <td>{or_dash(t.available_days.as_deref())}</td>
                                            <td><StatusBadge badge=t.status.badge()/></td>
                                            <td><StatusBadge badge=kitchen_badge(t.kitchen_open)/></td>
                                            <td>
                                                <button
                                                    class="btn btn-primary btn-sm"
                                                    disabled=!approved
                                                    on:click=move |_| set_managing.set(Some(pick.clone()))
                                                >
                                                    {if approved { "Manage Kitchen" } else { "Pending Approval" }}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    </div>
                </div>
            }
        >
            {move || managing.get().map(|tiffin| view! {
                <KitchenManager tiffin=tiffin on_back=move |_| set_managing.set(None)/>
            })}
        </Show>
    }
}

#[component]
fn KitchenManager(tiffin: TiffinListing, #[prop(into)] on_back: Callback<()>) -> impl IntoView {
    let ctx = use_app();
    let refresh = use_refresh();
    let tiffin_id = tiffin.id;
    let kitchen = RwSignal::new(Optimistic::new(tiffin.kitchen_open));

    let meals_refresh = RwSignal::new(0u32);
    let orders_refresh = RwSignal::new(0u32);
    let meals = reload_on("meals", meals_refresh.into(), move || api::kitchen_meals(tiffin_id));
    let orders = reload_on("orders", orders_refresh.into(), move || api::kitchen_orders(tiffin_id));

    let show_meal_form = RwSignal::new(false);
    let (editing, set_editing) = signal::<Option<Meal>>(None);
    let show_meal = RwSignal::new(false);
    let (viewing, set_viewing) = signal::<Option<Meal>>(None);
    let show_order = RwSignal::new(false);
    let (order, set_order) = signal::<Option<FoodOrder>>(None);
    let (updating, set_updating) = signal::<Option<i64>>(None);

    let toggle = move |_| {
        let mut started = false;
        kitchen.update(|k| started = k.begin(!k.confirmed()).is_some());
        if !started {
            return;
        }
        spawn_local(async move {
            match api::toggle_kitchen(tiffin_id).await {
                Ok(open) => {
                    kitchen.update(|k| k.commit(open));
                    ctx.notify(if open { "Kitchen is now open" } else { "Kitchen is now closed" });
                    bump(refresh.tiffins);
                }
                Err(e) => {
                    log::error!("Kitchen toggle for tiffin #{} failed: {}", tiffin_id, e);
                    kitchen.update(|k| k.rollback());
                    ctx.error(toggle_error(&e));
                }
            }
        });
    };

    let advance = move |order_id: i64, next: OrderStatus| {
        if updating.get_untracked().is_some() {
            return;
        }
        set_updating.set(Some(order_id));
        spawn_local(async move {
            match api::update_order_status(order_id, next).await {
                Ok(_) => {
                    ctx.notify("Order status updated!");
                    bump(orders_refresh);
                    bump(refresh.counts);
                }
                Err(e) => ctx.api_error(&e, "Failed to update order status."),
            }
            set_updating.set(None);
        });
    };

    let meal_card = move |meal: Meal| {
        let for_view = meal.clone();
        let for_edit = meal.clone();
        let image = meal.meal_image_path.as_deref().map(|img| ctx.image(Some(img)));
        view! {
            <div class="col-md-6 col-lg-4 mb-4">
                <div class="card h-100">
                    <div class="position-relative">
                        {match image {
                            Some(src) => view! {
                                <img src=src class="card-img-top" style="height: 160px; object-fit: cover;" alt=meal.meal_name.clone()/>
                            }.into_any(),
                            None => view! {
                                <div class="d-flex align-items-center justify-content-center bg-light" style="height: 160px;">
                                    <i class="fas fa-utensils fa-2x text-secondary"></i>
                                </div>
                            }.into_any(),
                        }}
                        <span class=format!("{} position-absolute top-0 end-0 m-2", availability_badge(meal.is_available).css())>
                            {availability_badge(meal.is_available).label}
                        </span>
                    </div>
                    <div class="card-body d-flex flex-column">
                        <div class="d-flex justify-content-between align-items-start mb-2">
                            <h5 class="fw-bold mb-0 text-truncate">{meal.meal_name.clone()}</h5>
                            <span class="badge bg-primary">{inr(meal.price)}</span>
                        </div>
                        <div class="d-flex gap-2 mb-2">
                            <span class="badge bg-secondary">{title_case(&meal.meal_category)}</span>
                            <span class="badge bg-info text-dark">{meal.diet_type.label()}</span>
                        </div>
                        <div class="d-flex gap-2 mt-auto">
                            <button
                                class="btn btn-outline-primary btn-sm flex-fill"
                                on:click=move |_| {
                                    set_viewing.set(Some(for_view.clone()));
                                    show_meal.set(true);
                                }
                            >
                                "View"
                            </button>
                            <button
                                class="btn btn-outline-secondary btn-sm flex-fill"
                                on:click=move |_| {
                                    set_editing.set(Some(for_edit.clone()));
                                    show_meal_form.set(true);
                                }
                            >
                                "Edit"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        }
    };

    let title = tiffin.title();

    view! {
        <div class="d-flex justify-content-between align-items-center mb-3">
            <div>
                <button class="btn btn-link px-0" on:click=move |_| on_back.run(())>
                    <i class="fas fa-arrow-left me-1"></i>"Back to services"
                </button>
                <h4 class="mb-0">{format!("Managing: {}", title)}</h4>
            </div>
            <div class="d-flex align-items-center gap-2">
                <StatusBadge badge=Signal::derive(move || kitchen_badge(kitchen.get().shown()))/>
                <div class="form-check form-switch mb-0">
                    <input
                        class="form-check-input"
                        type="checkbox"
                        role="switch"
                        prop:checked=move || kitchen.get().shown()
                        disabled=move || kitchen.get().in_flight()
                        on:change=toggle
                    />
                </div>
            </div>
        </div>

        <div class="card mb-4">
            <div class="card-header d-flex justify-content-between align-items-center">
                <h5 class="mb-0">"Meals"</h5>
                <button
                    class="btn btn-primary btn-sm"
                    on:click=move |_| {
                        set_editing.set(None);
                        show_meal_form.set(true);
                    }
                >
                    <i class="fas fa-plus me-1"></i>"Add Meal"
                </button>
            </div>
            <div class="card-body">
                <div class="row">
                    {move || match meals.get() {
                        Loadable::Loading => view! { <div class="col-12 text-center text-muted py-4">"Loading..."</div> }.into_any(),
                        Loadable::Failed => view! { <div class="col-12 text-center text-danger py-4">"Failed to load meals."</div> }.into_any(),
                        Loadable::Ready(list) if list.is_empty() => view! {
                            <div class="col-12 text-center text-muted py-4">"No meals added yet."</div>
                        }.into_any(),
                        Loadable::Ready(list) => list.into_iter().map(meal_card).collect_view().into_any(),
                    }}
                </div>
            </div>
        </div>

        <div class="card">
            <div class="card-header"><h5 class="mb-0">"Orders"</h5></div>
            <div class="table-responsive">
                <table class="table table-hover align-middle mb-0">
                    <thead class="table-light">
                        <tr>
                            <th>"Order ID"</th>
                            <th>"Customer"</th>
                            <th>"Meal"</th>
                            <th>"Qty"</th>
                            <th>"Total"</th>
                            <th>"Fast"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {table_body(orders, 8, "No orders yet.", move |_, o: FoodOrder| {
                            let id = o.id;
                            let details = o.clone();
                            let action = o.order_status.next_action().map(|action| view! {
                                <ConfirmButton
                                    label=action.label
                                    button_class=action.button_class
                                    prompt=action.confirm
                                    disabled=Signal::derive(move || updating.get().is_some())
                                    on_confirm=move |_| advance(id, action.next)
                                />
                            });
                            view! {
                                <tr>
                                    <td>{format!("#{}", o.id)}</td>
                                    <td>{or_dash(o.customer_name.as_deref())}</td>
                                    <td>{o.meal_name.clone()}</td>
                                    <td>{o.quantity}</td>
                                    <td class="fw-bold">{inr(o.total_price)}</td>
                                    <td><StatusBadge badge=fast_badge(o.fast_delivery)/></td>
                                    <td><StatusBadge badge=o.order_status.badge()/></td>
                                    <td>
                                        <div class="d-flex gap-1">
                                            <button
                                                class="btn btn-outline-primary btn-sm"
                                                on:click=move |_| {
                                                    set_order.set(Some(details.clone()));
                                                    show_order.set(true);
                                                }
                                            >
                                                "View"
                                            </button>
                                            {action}
                                        </div>
                                    </td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </div>
        </div>

        <MealForm
            show=show_meal_form
            tiffin_id=tiffin_id
            editing=editing
            on_saved=move |_| bump(meals_refresh)
        />

        <Modal
            show=show_meal
            title=Signal::derive(move || viewing.with(|m| m.as_ref().map(|m| m.meal_name.clone()).unwrap_or_default()))
        >
            {move || viewing.get().map(|m| view! {
                {m.meal_image_path.as_deref().map(|img| view! {
                    <img src=ctx.image(Some(img)) class="img-fluid rounded mb-3" alt=m.meal_name.clone()/>
                })}
                <dl class="row mb-0">
                    <dt class="col-sm-4">"Price"</dt>
                    <dd class="col-sm-8">{inr(m.price)}</dd>
                    <dt class="col-sm-4">"Category"</dt>
                    <dd class="col-sm-8">{title_case(&m.meal_category)}</dd>
                    <dt class="col-sm-4">"Diet"</dt>
                    <dd class="col-sm-8">{m.diet_type.label()}</dd>
                    <dt class="col-sm-4">"Status"</dt>
                    <dd class="col-sm-8"><StatusBadge badge=availability_badge(m.is_available)/></dd>
                    <dt class="col-sm-4">"Description"</dt>
                    <dd class="col-sm-8">{m.description.clone().filter(|d| !d.is_empty()).unwrap_or_else(|| "No description available.".to_string())}</dd>
                </dl>
            })}
        </Modal>

        <Modal
            show=show_order
            title=Signal::derive(move || order.with(|o| o.as_ref().map(|o| format!("Order #{}", o.id)).unwrap_or_default()))
        >
            {move || order.get().map(|o| view! {
                <dl class="row mb-0">
                    <dt class="col-sm-5">"Customer"</dt>
                    <dd class="col-sm-7">{or_dash(o.customer_name.as_deref())}</dd>
                    <dt class="col-sm-5">"Phone"</dt>
                    <dd class="col-sm-7">{or_dash(o.customer_phone.as_deref())}</dd>
                    <dt class="col-sm-5">"Meal"</dt>
                    <dd class="col-sm-7">{o.meal_name.clone()}</dd>
                    <dt class="col-sm-5">"Category"</dt>
                    <dd class="col-sm-7">{o.meal_category.as_deref().map(title_case).unwrap_or_else(|| "-".to_string())}</dd>
                    <dt class="col-sm-5">"Diet"</dt>
                    <dd class="col-sm-7">{o.diet_type.label()}</dd>
                    <dt class="col-sm-5">"Quantity"</dt>
                    <dd class="col-sm-7">{o.quantity}</dd>
                    <dt class="col-sm-5">"Base Price"</dt>
                    <dd class="col-sm-7">{inr(o.base_price)}</dd>
                    <dt class="col-sm-5">"Fast Delivery"</dt>
                    <dd class="col-sm-7">{if o.fast_delivery { "Yes" } else { "No" }}</dd>
                    <dt class="col-sm-5">"Fast Delivery Charge"</dt>
                    <dd class="col-sm-7">{inr(o.fast_delivery_charge)}</dd>
                    <dt class="col-sm-5">"Total"</dt>
                    <dd class="col-sm-7 fw-bold">{inr(o.total_price)}</dd>
                    <dt class="col-sm-5">"Status"</dt>
                    <dd class="col-sm-7"><StatusBadge badge=o.order_status.badge()/></dd>
                    <dt class="col-sm-5">"Address"</dt>
                    <dd class="col-sm-7">{or_dash(o.delivery_address.as_deref())}</dd>
                    <dt class="col-sm-5">"Ordered"</dt>
                    <dd class="col-sm-7">{or_dash(o.order_date.as_deref())}</dd>
                </dl>
            })}
        </Modal>
    }
}

/// Add or edit one meal; `editing` picks the mode
#[component]
fn MealForm(
    show: RwSignal<bool>,
    tiffin_id: i64,
    editing: ReadSignal<Option<Meal>>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let ctx = use_app();
    let (name, set_name) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (diet, set_diet) = signal(DietType::Veg);
    let (price, set_price) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (available, set_available) = signal(true);
    let preview = dom::Preview::new();
    let (saving, set_saving) = signal(false);
    let image_input = NodeRef::<html::Input>::new();

    // Load the picked meal (or blanks) whenever the form opens
    Effect::new(move |_| {
        if !show.get() {
            return;
        }
        let meal = editing.get_untracked();
        set_name.set(meal.as_ref().map(|m| m.meal_name.clone()).unwrap_or_default());
        set_category.set(meal.as_ref().map(|m| m.meal_category.clone()).unwrap_or_default());
        set_diet.set(meal.as_ref().map(|m| m.diet_type).filter(|d| *d == DietType::NonVeg).unwrap_or(DietType::Veg));
        set_price.set(meal.as_ref().map(|m| m.price.to_string()).unwrap_or_default());
        set_description.set(meal.as_ref().and_then(|m| m.description.clone()).unwrap_or_default());
        set_available.set(meal.as_ref().map(|m| m.is_available).unwrap_or(true));
        preview.set(meal.as_ref().and_then(|m| m.meal_image_path.as_deref().map(|img| ctx.image(Some(img)))));
        dom::clear_input(&image_input);
    });

    let on_image = move |_| {
        if let Some(file) = dom::picked_file(&image_input) {
            preview.show_file(&file);
        }
    };

    let save = move |_| {
        if saving.get_untracked() {
            return;
        }
        let fields = match meal_fields(
            &name.get_untracked(),
            &category.get_untracked(),
            diet.get_untracked(),
            &price.get_untracked(),
            &description.get_untracked(),
            available.get_untracked(),
        ) {
            Ok(fields) => fields,
            Err(e) => {
                ctx.error(e.to_string());
                return;
            }
        };
        let form = match FormData::new() {
            Ok(form) => form,
            Err(e) => {
                log::error!("FormData unavailable: {:?}", e);
                return;
            }
        };
        for (key, value) in &fields {
            if let Err(e) = form.append_with_str(key, value) {
                log::error!("Could not append {}: {:?}", key, e);
            }
        }
        if let Some(file) = dom::picked_file(&image_input) {
            if let Err(e) = form.append_with_blob_and_filename("meal_image", &file, &file.name()) {
                log::error!("Could not attach meal image: {:?}", e);
            }
        }

        let meal_id = editing.get_untracked().map(|m| m.id);
        set_saving.set(true);
        spawn_local(async move {
            let result = match meal_id {
                Some(id) => api::edit_meal(id, form).await,
                None => api::add_meal(tiffin_id, form).await,
            };
            let (done, failed) = if meal_id.is_some() {
                ("Meal updated successfully!", "An error occurred while updating the meal.")
            } else {
                ("Meal added successfully!", "An error occurred while adding the meal.")
            };
            match result {
                Ok(_) => {
                    show.set(false);
                    ctx.notify(done);
                    on_saved.run(());
                }
                Err(e) => ctx.api_error(&e, failed),
            }
            set_saving.set(false);
        });
    };

    view! {
        <Modal
            show=show
            title=Signal::derive(move || if editing.with(|m| m.is_some()) { "Edit Meal".to_string() } else { "Add Meal".to_string() })
            footer=move || view! {
                <button class="btn btn-secondary" on:click=move |_| show.set(false)>"Cancel"</button>
                <button class="btn btn-primary" disabled=move || saving.get() on:click=save>
                    {move || if saving.get() { "Saving..." } else { "Save Meal" }}
                </button>
            }
        >
            {move || preview.get().map(|src| view! {
                <img src=src class="img-fluid rounded mb-3" style="max-height: 180px;" alt="Meal preview"/>
            })}
            <div class="mb-3">
                <label class="form-label">"Meal Name"</label>
                <input class="form-control" prop:value=move || name.get() on:input=move |ev| set_name.set(event_target_value(&ev))/>
            </div>
            <div class="row">
                <div class="col-6 mb-3">
                    <label class="form-label">"Category"</label>
                    <select class="form-select" prop:value=move || category.get() on:change=move |ev| set_category.set(event_target_value(&ev))>
                        <option value="">"Select category"</option>
                        {MEAL_CATEGORIES.iter().map(|c| view! { <option value=*c>{title_case(c)}</option> }).collect_view()}
                    </select>
                </div>
                <div class="col-6 mb-3">
                    <label class="form-label">"Price"</label>
                    <input type="number" min="0" class="form-control" prop:value=move || price.get() on:input=move |ev| set_price.set(event_target_value(&ev))/>
                </div>
            </div>
            <div class="mb-3">
                <label class="form-label d-block">"Diet Type"</label>
                {[DietType::Veg, DietType::NonVeg].into_iter().map(|d| {
                    let id = format!("meal-diet-{}", d.as_str());
                    view! {
                        <div class="form-check form-check-inline">
                            <input
                                type="radio"
                                name="meal_diet_type"
                                class="form-check-input"
                                id=id.clone()
                                prop:checked=move || diet.get() == d
                                on:change=move |_| set_diet.set(d)
                            />
                            <label class="form-check-label" for=id>{d.label()}</label>
                        </div>
                    }
                }).collect_view()}
            </div>
            <div class="mb-3">
                <label class="form-label">"Description"</label>
                <textarea class="form-control" rows="2" prop:value=move || description.get() on:input=move |ev| set_description.set(event_target_value(&ev))></textarea>
            </div>
            <div class="form-check form-switch mb-3">
                <input
                    class="form-check-input"
                    type="checkbox"
                    id="meal-available"
                    prop:checked=move || available.get()
                    on:change=move |ev| set_available.set(event_target_checked(&ev))
                />
                <label class="form-check-label" for="meal-available">"Available"</label>
            </div>
            <div class="mb-3">
                <label class="form-label">"Meal Image"</label>
                <input type="file" class="form-control" accept="image/*" node_ref=image_input on:change=on_image/>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_fields_order_and_flags() {
        let fields = meal_fields(" Paneer Thali ", "lunch", DietType::Veg, "120", "", false).unwrap();
        let keys: Vec<_> = fields.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["meal_name", "meal_category", "diet_type", "price", "description", "is_available"]);
        assert_eq!(fields[0].1, "Paneer Thali");
        assert_eq!(fields[2].1, "veg");
        assert_eq!(fields[5].1, "false");
    }

    #[test]
    fn test_meal_fields_require_price() {
        let err = meal_fields("Egg Curry", "dinner", DietType::NonVeg, " ", "", true).unwrap_err();
        assert_eq!(err.to_string(), "Price is required");
    }

    #[test]
    fn test_toggle_error_text() {
        assert_eq!(toggle_error(&ApiError::Rejected("Not your kitchen".into())), "Failed to update status: Not your kitchen");
        assert_eq!(toggle_error(&ApiError::Network("offline".into())), "Error updating status.");
    }

    #[test]
    fn test_order_fast_badge() {
        assert_eq!(fast_badge(true).label, "Fast");
        assert_eq!(fast_badge(false).label, "Standard");
    }
}
