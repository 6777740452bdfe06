//! Backend Endpoints
//!
//! Route builders plus the decoding rules for the backend's reply shapes:
//! `{success, message, ...}` envelopes, bare arrays and bare objects.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::listing::Meal;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Not authenticated")]
    Unauthorized,
    #[error("Not allowed")]
    Forbidden,
    #[error("Not found")]
    NotFound,
    #[error("{0}")]
    Rejected(String),
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error("Server returned status {0}")]
    Status(u16),
}

impl ApiError {
    /// Text for an error toast, falling back when the server gave none
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected(msg) if !msg.is_empty() => msg.clone(),
            ApiError::Network(_) => "Server error. Please try again.".to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// Common envelope fields; `success` is absent on bare payloads
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl Envelope {
    fn failure(&self) -> Option<String> {
        if self.success == Some(false) {
            return Some(self.message.clone().unwrap_or_default());
        }
        if self.success.is_none() {
            if let Some(err) = &self.error {
                return Some(err.clone());
            }
        }
        None
    }
}

/// Decode a reply body given its HTTP status.
///
/// 401 and 403 always win. A `success: false` envelope becomes
/// `Rejected(message)` whatever the status, so 404s that carry a message
/// keep it.
pub fn decode<T: DeserializeOwned>(status: u16, body: &str) -> ApiResult<T> {
    match status {
        401 => return Err(ApiError::Unauthorized),
        403 => return Err(ApiError::Forbidden),
        _ => {}
    }

    if let Ok(envelope) = serde_json::from_str::<Envelope>(body) {
        if let Some(message) = envelope.failure() {
            return Err(ApiError::Rejected(message));
        }
    }

    match status {
        200..=299 => {}
        404 => return Err(ApiError::NotFound),
        other => return Err(ApiError::Status(other)),
    }

    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Bare `{success, message}` acknowledgement
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedFlag {
    #[serde(default)]
    pub saved: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveCount {
    #[serde(default)]
    pub active_count: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingCount {
    #[serde(default)]
    pub count: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KitchenToggle {
    pub kitchen_open: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub account_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub new_status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspendResult {
    #[serde(default)]
    pub updated_status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealList {
    #[serde(default)]
    pub meals: Vec<Meal>,
}

/// Route builders, relative to the configured API base
pub mod paths {
    use crate::listing::{HousingKind, ListingKind};

    pub const LOGIN: &str = "/login";
    pub const SIGNUP: &str = "/signup";
    pub const VERIFY_OTP: &str = "/verify_otp";
    pub const PROFILE_UPDATE: &str = "/profile/update";

    pub const PROVIDER_STATUS: &str = "/provider/api/status";
    pub const PROVIDER_USER_PROFILE: &str = "/provider/api/user-profile";
    pub const PROVIDER_APPLY: &str = "/provider/api/apply-verification";
    pub const PROVIDER_STATS: &str = "/provider/api/dashboard-stats";
    pub const PROVIDER_ACTIVE_ORDERS: &str = "/provider/orders/active-count";
    pub const PROVIDER_ACTIVE_BOOKINGS: &str = "/provider/service-bookings/active-count";

    pub const ADMIN_PROVIDER_PROFILES: &str = "/admin/api/provider-profiles";
    pub const ADMIN_HOUSE_LISTINGS: &str = "/admin/api/house-listings";
    pub const ADMIN_TIFFIN_LISTINGS: &str = "/admin/api/tiffin-listings";
    pub const ADMIN_SERVICE_LISTINGS: &str = "/admin/api/service-listings";
    pub const ADMIN_ORDERS: &str = "/admin/api/orders";
    pub const ADMIN_BOOKINGS: &str = "/admin/api/service-bookings";
    pub const ADMIN_USERS: &str = "/admin/api/users";

    // ============================================================================
    // Provider listings
    // ============================================================================

    /// `/provider/api/{kind}-listings`
    pub fn provider_listings(kind: ListingKind) -> String {
        format!("/provider/api/{}-listings", kind.slug())
    }

    /// `/provider/api/{kind}-listings/add`
    pub fn add_listing(kind: ListingKind) -> String {
        format!("/provider/api/{}-listings/add", kind.slug())
    }

    pub fn kitchen_meals(tiffin_id: i64) -> String {
        format!("/provider/tiffin/{}/meals", tiffin_id)
    }

    pub fn kitchen_orders(tiffin_id: i64) -> String {
        format!("/provider/tiffin/{}/orders", tiffin_id)
    }

    pub fn add_meal(tiffin_id: i64) -> String {
        format!("/provider/tiffin/{}/add-meal", tiffin_id)
    }

    pub fn toggle_kitchen(tiffin_id: i64) -> String {
        format!("/provider/tiffin/{}/toggle-kitchen", tiffin_id)
    }

    pub fn edit_meal(meal_id: i64) -> String {
        format!("/provider/meal/{}/edit", meal_id)
    }

    pub fn order_status(order_id: i64) -> String {
        format!("/provider/order/{}/update-status", order_id)
    }

    pub fn service_bookings(service_id: i64) -> String {
        format!("/provider/service/{}/bookings", service_id)
    }

    pub fn booking_status(booking_id: i64) -> String {
        format!("/provider/service-booking/{}/update-status", booking_id)
    }

    // ============================================================================
    // Admin
    // ============================================================================

    /// Entity segment used by the admin approval routes
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Review {
        Provider,
        House,
        Tiffin,
        Service,
    }

    impl Review {
        pub const ALL: [Review; 4] = [Review::Provider, Review::House, Review::Tiffin, Review::Service];

        pub fn singular(&self) -> &'static str {
            match self {
                Review::Provider => "provider",
                Review::House => "house",
                Review::Tiffin => "tiffin",
                Review::Service => "service",
            }
        }

        pub fn plural(&self) -> &'static str {
            match self {
                Review::Provider => "providers",
                Review::House => "houses",
                Review::Tiffin => "tiffins",
                Review::Service => "services",
            }
        }
    }

    pub fn pending_count(review: Review) -> String {
        format!("/admin/api/pending-{}/count", review.plural())
    }

    pub fn pending_list(review: Review) -> String {
        format!("/admin/api/pending-{}", review.plural())
    }

    pub fn review_detail(review: Review, id: i64) -> String {
        format!("/admin/api/{}/{}", review.singular(), id)
    }

    pub fn approve(review: Review, id: i64) -> String {
        format!("/admin/api/{}/{}/approve", review.singular(), id)
    }

    pub fn reject(review: Review, id: i64) -> String {
        format!("/admin/api/{}/{}/reject", review.singular(), id)
    }

    pub fn suspend_user(user_id: i64) -> String {
        format!("/admin/api/users/{}/suspend", user_id)
    }

    // ============================================================================
    // Customer
    // ============================================================================

    pub fn housing_details(kind: HousingKind, id: i64) -> String {
        format!("/housing/{}/{}/details", kind.slug(), id)
    }

    pub fn housing_is_saved(kind: HousingKind, id: i64) -> String {
        format!("/housing/{}/{}/is-saved", kind.slug(), id)
    }

    pub fn housing_save(kind: HousingKind, id: i64) -> String {
        format!("/housing/{}/{}/save", kind.slug(), id)
    }

    pub fn housing_unsave(kind: HousingKind, id: i64) -> String {
        format!("/housing/{}/{}/unsave", kind.slug(), id)
    }

    pub fn tiffin_details(id: i64) -> String {
        format!("/tiffin/{}/details", id)
    }

    pub fn tiffin_meals(id: i64) -> String {
        format!("/tiffin/{}/meals", id)
    }

    pub fn order_meal(meal_id: i64) -> String {
        format!("/meals/{}/order", meal_id)
    }

    pub fn service_save(id: i64) -> String {
        format!("/services/{}/save", id)
    }

    pub fn service_unsave(id: i64) -> String {
        format!("/services/{}/unsave", id)
    }

    pub fn book_service(id: i64) -> String {
        format!("/services/{}/book", id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{HousingKind, ListingKind};

    #[test]
    fn test_paths() {
        assert_eq!(paths::add_listing(ListingKind::Service), "/provider/api/service-listings/add");
        assert_eq!(paths::pending_count(paths::Review::Tiffin), "/admin/api/pending-tiffins/count");
        assert_eq!(paths::approve(paths::Review::House, 5), "/admin/api/house/5/approve");
        assert_eq!(paths::housing_unsave(HousingKind::Pg, 3), "/housing/pg/3/unsave");
        assert_eq!(paths::booking_status(8), "/provider/service-booking/8/update-status");
    }

    #[test]
    fn test_decode_bare_array() {
        let rows: Vec<PendingCount> = decode(200, r#"[{"count": 1}, {"count": 2}]"#).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_decode_rejected_keeps_message() {
        let err = decode::<Ack>(404, r#"{"success": false, "message": "Listing not found"}"#).unwrap_err();
        assert_eq!(err, ApiError::Rejected("Listing not found".into()));
        assert_eq!(err.user_message("Could not load details."), "Listing not found");

        let err = decode::<Vec<PendingCount>>(200, r#"{"success": false, "message": "Provider profile not found"}"#)
            .unwrap_err();
        assert_eq!(err, ApiError::Rejected("Provider profile not found".into()));
    }

    #[test]
    fn test_decode_auth_statuses_win() {
        let body = r#"{"success": false, "message": "Not authenticated"}"#;
        assert_eq!(decode::<Ack>(401, body).unwrap_err(), ApiError::Unauthorized);
        assert_eq!(decode::<Ack>(403, body).unwrap_err(), ApiError::Forbidden);
    }

    #[test]
    fn test_decode_server_error_body() {
        let err = decode::<PendingCount>(500, r#"{"error": "Internal Server Error", "details": "boom"}"#).unwrap_err();
        assert_eq!(err, ApiError::Rejected("Internal Server Error".into()));
        assert_eq!(decode::<PendingCount>(502, "<html>").unwrap_err(), ApiError::Status(502));
        assert_eq!(decode::<PendingCount>(404, "").unwrap_err(), ApiError::NotFound);
    }

    #[test]
    fn test_decode_envelope_payload() {
        let toggle: KitchenToggle =
            decode(200, r#"{"success": true, "message": "Kitchen status updated", "kitchen_open": false}"#).unwrap();
        assert!(!toggle.kitchen_open);
        assert!(matches!(decode::<KitchenToggle>(200, "not json"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_network_message() {
        assert_eq!(
            ApiError::Network("TypeError".into()).user_message("x"),
            "Server error. Please try again."
        );
        assert_eq!(ApiError::Rejected(String::new()).user_message("Failed to place order"), "Failed to place order");
    }
}
