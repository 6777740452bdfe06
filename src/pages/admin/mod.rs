//! Admin Dashboard
//!
//! Sidebar sections over the four approval queues, the read-only overview
//! tables and the user list. Counts and queue rows are loaded once on mount
//! and kept in the [`AdminStore`](crate::store::AdminStore).

mod pending;
mod tables;
mod users;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use urbanease_domain::paths::Review;

use crate::api;
use crate::components::{CountCard, Sidebar, SidebarItem, SidebarToggle};
use crate::store::{store_count, store_set_count, AdminState, AdminStateStoreFields, AdminStore};

use pending::PendingSection;
use tables::{BookingsTable, HouseListingsTable, OrdersTable, ProviderProfilesTable, ServiceListingsTable, TiffinListingsTable};
use users::UsersTable;

const SECTIONS: &[SidebarItem] = &[
    SidebarItem::new("dashboard", "Dashboard", "fa-tachometer-alt"),
    SidebarItem::new("pending-providers", "Pending Providers", "fa-user-clock"),
    SidebarItem::new("pending-houses", "Pending Houses", "fa-home"),
    SidebarItem::new("pending-tiffins", "Pending Tiffins", "fa-utensils"),
    SidebarItem::new("pending-services", "Pending Services", "fa-tools"),
    SidebarItem::new("provider-profiles", "Provider Profiles", "fa-id-card"),
    SidebarItem::new("house-listings", "House Listings", "fa-building"),
    SidebarItem::new("tiffin-listings", "Tiffin Listings", "fa-hamburger"),
    SidebarItem::new("service-listings", "Service Listings", "fa-wrench"),
    SidebarItem::new("orders", "Orders", "fa-receipt"),
    SidebarItem::new("service-bookings", "Service Bookings", "fa-calendar-check"),
    SidebarItem::new("users", "Users", "fa-users"),
];

/// Sidebar id of a queue's section
fn pending_section(review: Review) -> String {
    format!("pending-{}", review.plural())
}

fn card_meta(review: Review) -> (&'static str, &'static str, &'static str) {
    match review {
        Review::Provider => ("Pending Providers", "fa-user-clock", "warning"),
        Review::House => ("Pending Houses", "fa-home", "primary"),
        Review::Tiffin => ("Pending Tiffins", "fa-utensils", "success"),
        Review::Service => ("Pending Services", "fa-tools", "info"),
    }
}

/// Fetch one queue's count and rows into the store
fn load_queue(store: AdminStore, review: Review) {
    spawn_local(async move {
        match api::pending_count(review).await {
            Ok(count) => store_set_count(&store, review, count),
            Err(e) => log::error!("Pending {} count failed: {}", review.plural(), e),
        }
    });
    spawn_local(async move {
        let loaded = match review {
            Review::Provider => api::pending_providers().await.map(|rows| store.providers().write().set_rows(rows)),
            Review::House => api::pending_houses().await.map(|rows| store.houses().write().set_rows(rows)),
            Review::Tiffin => api::pending_tiffins().await.map(|rows| store.tiffins().write().set_rows(rows)),
            Review::Service => api::pending_services().await.map(|rows| store.services().write().set_rows(rows)),
        };
        if let Err(e) = loaded {
            log::error!("Pending {} failed: {}", review.plural(), e);
        }
    });
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let store = Store::new(AdminState::default());
    provide_context(store);

    let section = RwSignal::new("dashboard".to_string());
    let sidebar_open = RwSignal::new(false);

    for review in Review::ALL {
        load_queue(store, review);
    }

    let visible = move |id: &'static str| move || section.get() == id;

    view! {
        <div class="admin-layout d-flex">
            <Sidebar title="UrbanEase Admin" items=SECTIONS active=section open=sidebar_open/>
            <main class="flex-grow-1 p-4">
                <div class="d-flex align-items-center mb-4">
                    <SidebarToggle open=sidebar_open/>
                    <a
                        href="#"
                        class="navbar-brand ms-2"
                        on:click=move |ev| {
                            ev.prevent_default();
                            section.set("dashboard".to_string());
                        }
                    >
                        "Admin Dashboard"
                    </a>
                </div>

                <Show when=visible("dashboard")>
                    <div class="row">
                        {Review::ALL.into_iter().map(|review| {
                            let (title, icon, tone) = card_meta(review);
                            view! {
                                <CountCard
                                    title=title
                                    icon=icon
                                    tone=tone
                                    count=Signal::derive(move || store_count(&store, review))
                                    on_click=move |_| section.set(pending_section(review))
                                />
                            }
                        }).collect_view()}
                    </div>
                </Show>

                {Review::ALL.into_iter().map(|review| {
                    let id = pending_section(review);
                    view! {
                        <Show when=move || section.get() == id>
                            <PendingSection review=review/>
                        </Show>
                    }
                }).collect_view()}

                <Show when=visible("provider-profiles")>
                    <ProviderProfilesTable/>
                </Show>
                <Show when=visible("house-listings")>
                    <HouseListingsTable/>
                </Show>
                <Show when=visible("tiffin-listings")>
                    <TiffinListingsTable/>
                </Show>
                <Show when=visible("service-listings")>
                    <ServiceListingsTable/>
                </Show>
                <Show when=visible("orders")>
                    <OrdersTable/>
                </Show>
                <Show when=visible("service-bookings")>
                    <BookingsTable/>
                </Show>
                <Show when=visible("users")>
                    <UsersTable/>
                </Show>
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_queue_has_a_sidebar_section() {
        for review in Review::ALL {
            let id = pending_section(review);
            assert!(SECTIONS.iter().any(|item| item.id == id), "missing section {}", id);
        }
    }

    #[test]
    fn test_section_ids_are_unique() {
        let mut ids: Vec<_> = SECTIONS.iter().map(|item| item.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), SECTIONS.len());
    }
}
