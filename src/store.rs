//! Admin Dashboard State Store
//!
//! Uses Leptos reactive_stores so each approval queue re-renders on its own.

use leptos::prelude::*;
use reactive_stores::Store;
use urbanease_domain::paths::Review;
use urbanease_domain::{PendingHouse, PendingProvider, PendingQueue, PendingService, PendingTiffin};

/// The four approval queues shown on the admin dashboard
#[derive(Clone, Debug, Default, Store)]
pub struct AdminState {
    pub providers: PendingQueue<PendingProvider>,
    pub houses: PendingQueue<PendingHouse>,
    pub tiffins: PendingQueue<PendingTiffin>,
    pub services: PendingQueue<PendingService>,
}

/// Type alias for the store
pub type AdminStore = Store<AdminState>;

/// Get the admin store from context
pub fn use_admin_store() -> AdminStore {
    expect_context::<AdminStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Count shown on a queue's dashboard card
pub fn store_count(store: &AdminStore, review: Review) -> u32 {
    match review {
        Review::Provider => store.providers().read().count(),
        Review::House => store.houses().read().count(),
        Review::Tiffin => store.tiffins().read().count(),
        Review::Service => store.services().read().count(),
    }
}

pub fn store_set_count(store: &AdminStore, review: Review, count: u32) {
    match review {
        Review::Provider => store.providers().write().set_count(count),
        Review::House => store.houses().write().set_count(count),
        Review::Tiffin => store.tiffins().write().set_count(count),
        Review::Service => store.services().write().set_count(count),
    }
}

/// Remove a decided row from its queue and lower the count
pub fn store_resolve(store: &AdminStore, review: Review, id: i64) {
    let removed = match review {
        Review::Provider => store.providers().write().resolve(id).is_some(),
        Review::House => store.houses().write().resolve(id).is_some(),
        Review::Tiffin => store.tiffins().write().resolve(id).is_some(),
        Review::Service => store.services().write().resolve(id).is_some(),
    };
    if !removed {
        log::warn!("Resolved {} #{} was not in the local queue", review.singular(), id);
    }
}
