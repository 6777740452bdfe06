//! UrbanEase Frontend App
//!
//! Provides the shared context, renders the navbar and toast host, and mounts
//! whichever page the host document asked for.

use leptos::prelude::*;

use crate::components::{ProfileDropdown, ToastHost};
use crate::config::{Page, PageData};
use crate::context::AppContext;
use crate::pages::{
    AdminDashboard, CustomerHome, HousingPage, LoginPage, MyBookingsPage, MyOrdersPage,
    ProfilePage, ProviderDashboard, ServicesPage, SignupPage, TiffinPage,
};

/// Auth pages render without the navbar
fn shows_navbar(page: &Page) -> bool {
    !matches!(page, Page::Login | Page::Signup)
}

#[component]
fn Navbar() -> impl IntoView {
    let ctx = crate::context::use_app();
    let signed_in = move || ctx.user.with(|u| u.is_some());

    view! {
        <nav class="navbar navbar-expand-lg navbar-light bg-white shadow-sm sticky-top">
            <div class="container-fluid">
                <a class="navbar-brand fw-bold" href="/">
                    <i class="fas fa-city me-2 text-primary"></i>"UrbanEase"
                </a>
                <div class="ms-auto d-flex align-items-center">
                    <Show
                        when=signed_in
                        fallback=|| view! { <a class="btn btn-outline-primary btn-sm" href="/login">"Login"</a> }
                    >
                        <ProfileDropdown/>
                    </Show>
                </div>
            </div>
        </nav>
    }
}

fn page_view(page: Page) -> AnyView {
    match page {
        Page::Login => view! { <LoginPage/> }.into_any(),
        Page::Signup => view! { <SignupPage/> }.into_any(),
        Page::Profile => view! { <ProfilePage/> }.into_any(),
        Page::CustomerDashboard => view! { <CustomerHome/> }.into_any(),
        Page::Housing { kind, cards } => view! { <HousingPage kind=kind cards=cards/> }.into_any(),
        Page::Tiffin { kitchens, default_address } => {
            view! { <TiffinPage kitchens=kitchens default_address=default_address/> }.into_any()
        }
        Page::Services { services } => view! { <ServicesPage services=services/> }.into_any(),
        Page::MyOrders { orders } => view! { <MyOrdersPage orders=orders/> }.into_any(),
        Page::MyBookings { bookings } => view! { <MyBookingsPage bookings=bookings/> }.into_any(),
        Page::Admin => view! { <AdminDashboard/> }.into_any(),
        Page::Provider => view! { <ProviderDashboard/> }.into_any(),
    }
}

#[component]
pub fn App(data: PageData) -> impl IntoView {
    let PageData { page, user, config } = data;
    provide_context(AppContext::new(config, user));

    let navbar = shows_navbar(&page);

    view! {
        <ToastHost/>
        {navbar.then(|| view! { <Navbar/> })}
        {page_view(page)}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_pages_hide_navbar() {
        assert!(!shows_navbar(&Page::Login));
        assert!(!shows_navbar(&Page::Signup));
        assert!(shows_navbar(&Page::Admin));
        assert!(shows_navbar(&Page::MyOrders { orders: Vec::new() }));
    }
}
