//! Status Badge Component

use leptos::prelude::*;
use urbanease_domain::Badge;

#[component]
pub fn StatusBadge(#[prop(into)] badge: Signal<Badge>) -> impl IntoView {
    view! {
        <span class=move || badge.get().css()>{move || badge.get().label}</span>
    }
}
