//! Customer Calls
//!
//! Housing, tiffin and services browsers.

use urbanease_domain::{
    paths, Ack, ApiResult, BookingRequest, HousingDetail, HousingKind, KitchenDetail, Meal,
    MealList, MealOrderRequest, SaveRequest, SavedFlag,
};

use super::{delete, get, post_empty, send_json};

async fn apply_save(request: SaveRequest, save_path: String, unsave_path: String) -> ApiResult<Ack> {
    match request {
        SaveRequest::Save => post_empty(&save_path).await,
        SaveRequest::Unsave => delete(&unsave_path).await,
    }
}

// ========================
// Housing
// ========================

pub async fn housing_details(kind: HousingKind, id: i64) -> ApiResult<HousingDetail> {
    get(&paths::housing_details(kind, id)).await
}

pub async fn housing_is_saved(kind: HousingKind, id: i64) -> ApiResult<bool> {
    let flag: SavedFlag = get(&paths::housing_is_saved(kind, id)).await?;
    Ok(flag.saved)
}

pub async fn set_housing_saved(kind: HousingKind, id: i64, request: SaveRequest) -> ApiResult<Ack> {
    apply_save(request, paths::housing_save(kind, id), paths::housing_unsave(kind, id)).await
}

// ========================
// Tiffin
// ========================

pub async fn tiffin_details(id: i64) -> ApiResult<KitchenDetail> {
    get(&paths::tiffin_details(id)).await
}

pub async fn tiffin_meals(id: i64) -> ApiResult<Vec<Meal>> {
    let list: MealList = get(&paths::tiffin_meals(id)).await?;
    Ok(list.meals)
}

pub async fn order_meal(meal_id: i64, order: &MealOrderRequest) -> ApiResult<Ack> {
    send_json("POST", &paths::order_meal(meal_id), order).await
}

// ========================
// Services
// ========================

pub async fn set_service_saved(id: i64, request: SaveRequest) -> ApiResult<Ack> {
    apply_save(request, paths::service_save(id), paths::service_unsave(id)).await
}

pub async fn book_service(id: i64, booking: &BookingRequest) -> ApiResult<Ack> {
    send_json("POST", &paths::book_service(id), booking).await
}
