//! My Orders

use leptos::prelude::*;
use urbanease_domain::{humanize, inr_rounded, or_dash, FoodOrder};

use crate::components::{Modal, StatusBadge};

#[component]
pub fn MyOrdersPage(orders: Vec<FoodOrder>) -> impl IntoView {
    let show = RwSignal::new(false);
    let (selected, set_selected) = signal::<Option<FoodOrder>>(None);
    let empty = orders.is_empty();

    let row = move |label: &'static str, value: String| {
        view! {
            <tr>
                <th class="text-muted fw-normal" style="width: 40%;">{label}</th>
                <td>{if value.is_empty() { "—".to_string() } else { value }}</td>
            </tr>
        }
    };

    view! {
        <div class="container py-4">
            <h2 class="mb-4">"My Orders"</h2>
            <Show when=move || empty>
                <p class="text-muted">"You have not ordered anything yet."</p>
            </Show>
            <div class="row g-3">
                {orders.into_iter().map(|order| {
                    let for_modal = order.clone();
                    view! {
                        <div class="col-md-6">
                            <div class="card h-100">
                                <div class="card-body">
                                    <div class="d-flex justify-content-between">
                                        <h5 class="card-title mb-1">{order.meal_name.clone()}</h5>
                                        <StatusBadge badge=order.order_status.badge()/>
                                    </div>
                                    <p class="small text-muted mb-2">{or_dash(order.provider_business_name.as_deref())}</p>
                                    <div class="d-flex justify-content-between align-items-center">
                                        <span>{format!("Qty {}", order.quantity)} " · " <strong>{inr_rounded(order.total_price)}</strong></span>
                                        <button
                                            class="btn btn-outline-primary btn-sm"
                                            on:click=move |_| {
                                                set_selected.set(Some(for_modal.clone()));
                                                show.set(true);
                                            }
                                        >
                                            "View Details"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>

        <Modal show=show title="Order Details".to_string()>
            {move || selected.get().map(|o| view! {
                <table class="table table-sm mb-0">
                    <tbody>
                        {row("Meal", o.meal_name.clone())}
                        {row("Provider", o.provider_business_name.clone().unwrap_or_default())}
                        {row("Diet", humanize(o.diet_type.as_str()))}
                        {row("Category", o.meal_category.as_deref().map(humanize).unwrap_or_default())}
                        {row("Quantity", o.quantity.to_string())}
                        {row("Fast Delivery", if o.fast_delivery { "Yes" } else { "No" }.to_string())}
                        {row("Status", humanize(o.order_status.as_str()))}
                        {row("Address", o.delivery_address.clone().unwrap_or_default())}
                        {row("Ordered On", o.order_date.clone().unwrap_or_default())}
                        {row("Total", inr_rounded(o.total_price))}
                    </tbody>
                </table>
            })}
        </Modal>
    }
}
