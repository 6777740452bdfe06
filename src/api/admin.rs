//! Admin Calls
//!
//! Approval queues, review details and the read-only overview tables.

use urbanease_domain::paths::{self, Review};
use urbanease_domain::{
    Ack, ApiResult, FoodOrder, HouseListing, PendingCount, PendingHouse, PendingProvider,
    PendingService, PendingTiffin, ProviderDetail, ProviderProfileRow, ServiceBooking,
    ServiceListing, SuspendResult, TiffinListing, User,
};

use super::{get, post_empty};

// ========================
// Pending queues
// ========================

pub async fn pending_count(review: Review) -> ApiResult<u32> {
    let count: PendingCount = get(&paths::pending_count(review)).await?;
    Ok(count.count)
}

pub async fn pending_providers() -> ApiResult<Vec<PendingProvider>> {
    get(&paths::pending_list(Review::Provider)).await
}

pub async fn pending_houses() -> ApiResult<Vec<PendingHouse>> {
    get(&paths::pending_list(Review::House)).await
}

pub async fn pending_tiffins() -> ApiResult<Vec<PendingTiffin>> {
    get(&paths::pending_list(Review::Tiffin)).await
}

pub async fn pending_services() -> ApiResult<Vec<PendingService>> {
    get(&paths::pending_list(Review::Service)).await
}

// ========================
// Review details
// ========================

pub async fn provider_detail(id: i64) -> ApiResult<ProviderDetail> {
    get(&paths::review_detail(Review::Provider, id)).await
}

pub async fn house_detail(id: i64) -> ApiResult<HouseListing> {
    get(&paths::review_detail(Review::House, id)).await
}

pub async fn tiffin_detail(id: i64) -> ApiResult<TiffinListing> {
    get(&paths::review_detail(Review::Tiffin, id)).await
}

pub async fn service_detail(id: i64) -> ApiResult<ServiceListing> {
    get(&paths::review_detail(Review::Service, id)).await
}

/// Approve (`true`) or reject (`false`) a queued record
pub async fn decide(review: Review, id: i64, approve: bool) -> ApiResult<Ack> {
    let path = if approve {
        paths::approve(review, id)
    } else {
        paths::reject(review, id)
    };
    post_empty(&path).await
}

// ========================
// Overview tables
// ========================

pub async fn provider_profiles() -> ApiResult<Vec<ProviderProfileRow>> {
    get(paths::ADMIN_PROVIDER_PROFILES).await
}

pub async fn all_house_listings() -> ApiResult<Vec<HouseListing>> {
    get(paths::ADMIN_HOUSE_LISTINGS).await
}

pub async fn all_tiffin_listings() -> ApiResult<Vec<TiffinListing>> {
    get(paths::ADMIN_TIFFIN_LISTINGS).await
}

pub async fn all_service_listings() -> ApiResult<Vec<ServiceListing>> {
    get(paths::ADMIN_SERVICE_LISTINGS).await
}

pub async fn all_orders() -> ApiResult<Vec<FoodOrder>> {
    get(paths::ADMIN_ORDERS).await
}

pub async fn all_bookings() -> ApiResult<Vec<ServiceBooking>> {
    get(paths::ADMIN_BOOKINGS).await
}

pub async fn users() -> ApiResult<Vec<User>> {
    get(paths::ADMIN_USERS).await
}

pub async fn suspend_user(id: i64) -> ApiResult<SuspendResult> {
    post_empty(&paths::suspend_user(id)).await
}
