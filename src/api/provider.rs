//! Provider Calls

use serde::Serialize;
use urbanease_domain::{
    paths, Ack, ActiveCount, ApiResult, BookingStatus, DashboardStats, FoodOrder, HouseListing,
    KitchenToggle, ListingKind, Meal, OrderStatus, ProviderStatus, ServiceBooking, ServiceListing,
    StatusUpdate, TiffinListing, UserProfile,
};
use web_sys::FormData;

use super::{get, post_empty, send_form, send_json};

#[derive(Serialize)]
struct NewStatusArgs<'a> {
    new_status: &'a str,
}

// ========================
// Verification
// ========================

pub async fn provider_status() -> ApiResult<ProviderStatus> {
    get(paths::PROVIDER_STATUS).await
}

pub async fn provider_user_profile() -> ApiResult<UserProfile> {
    get(paths::PROVIDER_USER_PROFILE).await
}

/// Multipart: business_name, aadhaar_number, business_license, profile_photo
pub async fn apply_verification(form: FormData) -> ApiResult<Ack> {
    send_form("POST", paths::PROVIDER_APPLY, form, &[]).await
}

pub async fn dashboard_stats() -> ApiResult<DashboardStats> {
    get(paths::PROVIDER_STATS).await
}

pub async fn active_order_count() -> ApiResult<u32> {
    let count: ActiveCount = get(paths::PROVIDER_ACTIVE_ORDERS).await?;
    Ok(count.active_count)
}

pub async fn active_booking_count() -> ApiResult<u32> {
    let count: ActiveCount = get(paths::PROVIDER_ACTIVE_BOOKINGS).await?;
    Ok(count.active_count)
}

// ========================
// Listings
// ========================

pub async fn house_listings() -> ApiResult<Vec<HouseListing>> {
    get(&paths::provider_listings(ListingKind::House)).await
}

pub async fn tiffin_listings() -> ApiResult<Vec<TiffinListing>> {
    get(&paths::provider_listings(ListingKind::Tiffin)).await
}

pub async fn service_listings() -> ApiResult<Vec<ServiceListing>> {
    get(&paths::provider_listings(ListingKind::Service)).await
}

/// Multipart add-listing POST, carrying the draft's idempotency key
pub async fn add_listing(endpoint: &str, form: FormData, idempotency_key: &str) -> ApiResult<Ack> {
    send_form("POST", endpoint, form, &[("Idempotency-Key", idempotency_key)]).await
}

// ========================
// Kitchen
// ========================

pub async fn kitchen_meals(tiffin_id: i64) -> ApiResult<Vec<Meal>> {
    get(&paths::kitchen_meals(tiffin_id)).await
}

pub async fn kitchen_orders(tiffin_id: i64) -> ApiResult<Vec<FoodOrder>> {
    get(&paths::kitchen_orders(tiffin_id)).await
}

pub async fn toggle_kitchen(tiffin_id: i64) -> ApiResult<bool> {
    let toggled: KitchenToggle = post_empty(&paths::toggle_kitchen(tiffin_id)).await?;
    Ok(toggled.kitchen_open)
}

/// Multipart: meal_name, meal_category, diet_type, price, description, is_available, meal_image
pub async fn add_meal(tiffin_id: i64, form: FormData) -> ApiResult<Ack> {
    send_form("POST", &paths::add_meal(tiffin_id), form, &[]).await
}

pub async fn edit_meal(meal_id: i64, form: FormData) -> ApiResult<Ack> {
    send_form("PUT", &paths::edit_meal(meal_id), form, &[]).await
}

pub async fn update_order_status(order_id: i64, next: OrderStatus) -> ApiResult<StatusUpdate> {
    send_json("POST", &paths::order_status(order_id), &NewStatusArgs { new_status: next.as_str() }).await
}

// ========================
// Service bookings
// ========================

pub async fn service_bookings(service_id: i64) -> ApiResult<Vec<ServiceBooking>> {
    get(&paths::service_bookings(service_id)).await
}

pub async fn update_booking_status(booking_id: i64, next: BookingStatus) -> ApiResult<StatusUpdate> {
    send_json("POST", &paths::booking_status(booking_id), &NewStatusArgs { new_status: next.as_str() }).await
}
