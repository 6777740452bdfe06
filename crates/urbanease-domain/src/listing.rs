//! Listing Records
//!
//! Houses, tiffin kitchens, services and meals as the backend returns them,
//! for the admin tables, the provider grids and the customer browsers.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::status::ListingStatus;

/// Housing browser flavour; each has its own `/housing/{slug}` routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HousingKind {
    Hostel,
    #[serde(rename = "PG")]
    Pg,
    Apartment,
}

impl HousingKind {
    pub fn slug(&self) -> &'static str {
        match self {
            HousingKind::Hostel => "hostel",
            HousingKind::Pg => "pg",
            HousingKind::Apartment => "apartment",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HousingKind::Hostel => "Hostel",
            HousingKind::Pg => "PG",
            HousingKind::Apartment => "Apartment",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "hostel" => Some(HousingKind::Hostel),
            "pg" => Some(HousingKind::Pg),
            "apartment" => Some(HousingKind::Apartment),
            _ => None,
        }
    }
}

/// The three listing families a provider can pay for and submit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingKind {
    House,
    Tiffin,
    Service,
}

impl ListingKind {
    pub fn slug(&self) -> &'static str {
        match self {
            ListingKind::House => "house",
            ListingKind::Tiffin => "tiffin",
            ListingKind::Service => "service",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "house" => Some(ListingKind::House),
            "tiffin" => Some(ListingKind::Tiffin),
            "service" => Some(ListingKind::Service),
            _ => None,
        }
    }

    /// Noun used in toasts, e.g. "House listing submitted"
    pub fn noun(&self) -> &'static str {
        match self {
            ListingKind::House => "House",
            ListingKind::Tiffin => "Tiffin",
            ListingKind::Service => "Service",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DietType {
    #[serde(rename = "veg")]
    Veg,
    #[serde(rename = "non-veg", alias = "non_veg", alias = "nonveg")]
    NonVeg,
    #[serde(rename = "both")]
    Both,
    #[default]
    #[serde(other)]
    Unknown,
}

impl DietType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietType::Veg => "veg",
            DietType::NonVeg => "non-veg",
            DietType::Both => "both",
            DietType::Unknown => "",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DietType::Veg => "Veg",
            DietType::NonVeg => "Non-Veg",
            DietType::Both => "Veg & Non-Veg",
            DietType::Unknown => "-",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    Electrician,
    Plumber,
    Carpenter,
    AcRepair,
    Cleaning,
    PackersMovers,
    WifiInstallation,
    GasConnection,
    Laundry,
    #[default]
    #[serde(other)]
    Other,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 9] = [
        ServiceCategory::Electrician,
        ServiceCategory::Plumber,
        ServiceCategory::Carpenter,
        ServiceCategory::AcRepair,
        ServiceCategory::Cleaning,
        ServiceCategory::PackersMovers,
        ServiceCategory::WifiInstallation,
        ServiceCategory::GasConnection,
        ServiceCategory::Laundry,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::Electrician => "electrician",
            ServiceCategory::Plumber => "plumber",
            ServiceCategory::Carpenter => "carpenter",
            ServiceCategory::AcRepair => "ac_repair",
            ServiceCategory::Cleaning => "cleaning",
            ServiceCategory::PackersMovers => "packers_movers",
            ServiceCategory::WifiInstallation => "wifi_installation",
            ServiceCategory::GasConnection => "gas_connection",
            ServiceCategory::Laundry => "laundry",
            ServiceCategory::Other => "other",
        }
    }

    pub fn label(&self) -> String {
        crate::format::title_case(self.as_str())
    }

    /// Font Awesome icon shown on service cards
    pub fn icon(&self) -> &'static str {
        match self {
            ServiceCategory::Electrician => "fa-bolt",
            ServiceCategory::Plumber => "fa-faucet",
            ServiceCategory::Carpenter => "fa-hammer",
            ServiceCategory::AcRepair => "fa-snowflake",
            ServiceCategory::Cleaning => "fa-broom",
            ServiceCategory::PackersMovers => "fa-truck",
            ServiceCategory::WifiInstallation => "fa-wifi",
            ServiceCategory::GasConnection => "fa-burn",
            ServiceCategory::Laundry => "fa-tshirt",
            ServiceCategory::Other => "fa-tools",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingImage {
    #[serde(default)]
    pub id: Option<i64>,
    pub image_path: String,
}

/// House listing row (provider grid and admin table/detail)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseListing {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "type", default)]
    pub house_type: String,
    #[serde(default)]
    pub status: ListingStatus,
    #[serde(default)]
    pub approved_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub preview_image: Option<String>,
    #[serde(default)]
    pub images: Vec<ListingImage>,
    #[serde(default)]
    pub provider_business_name: Option<String>,
    #[serde(default)]
    pub provider_username: Option<String>,
    #[serde(default)]
    pub provider_email: Option<String>,
    #[serde(default)]
    pub provider_phone: Option<String>,
    #[serde(default)]
    pub business_license: Option<String>,
}

impl Entity for HouseListing {
    type Id = i64;
    fn id(&self) -> i64 {
        self.id
    }
}

impl HouseListing {
    pub fn kind(&self) -> Option<HousingKind> {
        HousingKind::from_label(&self.house_type)
    }

    /// First image, falling back to the preview field
    pub fn cover(&self) -> Option<&str> {
        self.preview_image
            .as_deref()
            .or_else(|| self.images.first().map(|img| img.image_path.as_str()))
    }
}

/// Tiffin kitchen row (provider grid, kitchen manager, admin table/detail)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TiffinListing {
    pub id: i64,
    #[serde(default)]
    pub delivery_radius: Option<f64>,
    #[serde(default)]
    pub fast_delivery_available: bool,
    #[serde(default)]
    pub status: ListingStatus,
    #[serde(default)]
    pub diet_type: DietType,
    #[serde(default)]
    pub available_days: Option<String>,
    #[serde(default)]
    pub preview_image: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub approved_at: Option<String>,
    #[serde(default)]
    pub kitchen_open: bool,
    #[serde(default)]
    pub provider_business_name: Option<String>,
    #[serde(default)]
    pub provider_username: Option<String>,
    #[serde(default)]
    pub provider_email: Option<String>,
    #[serde(default)]
    pub provider_phone: Option<String>,
    #[serde(default)]
    pub business_license: Option<String>,
}

impl Entity for TiffinListing {
    type Id = i64;
    fn id(&self) -> i64 {
        self.id
    }
}

impl TiffinListing {
    /// Display name used in the kitchen manager header
    pub fn title(&self) -> String {
        format!("{} Tiffin", self.diet_type.label())
    }
}

/// Service listing row (provider grid and admin table/detail)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceListing {
    pub id: i64,
    #[serde(default)]
    pub service_category: ServiceCategory,
    #[serde(default)]
    pub service_title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub base_price: f64,
    #[serde(default)]
    pub service_radius: Option<f64>,
    #[serde(default)]
    pub availability_days: Option<String>,
    #[serde(default)]
    pub status: ListingStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub approved_at: Option<String>,
    #[serde(default)]
    pub provider_business_name: Option<String>,
    #[serde(default)]
    pub provider_username: Option<String>,
    #[serde(default)]
    pub provider_email: Option<String>,
    #[serde(default)]
    pub provider_phone: Option<String>,
}

impl Entity for ServiceListing {
    type Id = i64;
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: i64,
    #[serde(default)]
    pub meal_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub meal_category: String,
    #[serde(default)]
    pub diet_type: DietType,
    #[serde(default)]
    pub price: f64,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default, alias = "image_path")]
    pub meal_image_path: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Entity for Meal {
    type Id = i64;
    fn id(&self) -> i64 {
        self.id
    }
}

/// Provider block embedded in customer detail responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProviderCard {
    #[serde(default)]
    pub business_name: String,
    #[serde(default)]
    pub verification_status: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub profile_pic: Option<String>,
}

impl ProviderCard {
    pub fn is_verified(&self) -> bool {
        self.verification_status.as_deref() == Some("verified")
    }
}

/// One chip in a housing details "Features" row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureBadge {
    pub class: &'static str,
    pub icon: Option<&'static str>,
    pub label: String,
}

impl FeatureBadge {
    fn plain(class: &'static str, label: impl Into<String>) -> Self {
        Self { class, icon: None, label: label.into() }
    }

    fn with_icon(class: &'static str, icon: &'static str, label: &str) -> Self {
        Self { class, icon: Some(icon), label: label.to_string() }
    }
}

/// Listing block of `/housing/{kind}/{id}/details`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HousingListingDetail {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "type", default)]
    pub house_type: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub room_type: Option<String>,
    #[serde(default)]
    pub wifi: bool,
    #[serde(default)]
    pub attached_bathroom: bool,
    #[serde(default)]
    pub food_included: bool,
    #[serde(default)]
    pub laundry: bool,
    #[serde(default)]
    pub ac_available: bool,
    #[serde(default)]
    pub sharing: Option<String>,
    #[serde(default)]
    pub listing_purpose: Option<String>,
    #[serde(default)]
    pub bhk: Option<String>,
    #[serde(default)]
    pub tenant_preference: Option<String>,
    #[serde(default)]
    pub furnishing: Option<String>,
}

impl HousingListingDetail {
    /// Feature chips for the given housing flavour
    pub fn features(&self, kind: HousingKind) -> Vec<FeatureBadge> {
        let mut out = Vec::new();
        let mut push_text = |class: &'static str, value: &Option<String>| {
            if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
                out.push(FeatureBadge::plain(class, v));
            }
        };

        match kind {
            HousingKind::Hostel => {
                push_text("bg-primary", &self.gender);
                push_text("bg-secondary", &self.room_type);
            }
            HousingKind::Pg => {
                push_text("bg-primary", &self.gender);
                push_text("bg-secondary", &self.sharing.as_ref().map(|s| format!("{} Sharing", s)));
            }
            HousingKind::Apartment => {
                push_text("bg-primary", &self.listing_purpose);
                push_text("bg-secondary", &self.bhk.as_ref().map(|b| format!("{} BHK", b)));
                push_text("bg-info text-dark", &self.tenant_preference);
                push_text("bg-success", &self.furnishing);
                return out;
            }
        }

        if self.wifi {
            out.push(FeatureBadge::with_icon("bg-info text-dark", "fa-wifi", "WiFi"));
        }
        if self.ac_available {
            out.push(FeatureBadge::with_icon("bg-info text-dark", "fa-snowflake", "AC"));
        }
        if self.attached_bathroom {
            out.push(FeatureBadge::with_icon("bg-success", "fa-bath", "Attached Bathroom"));
        }
        if self.food_included {
            out.push(FeatureBadge::with_icon("bg-success", "fa-utensils", "Food Included"));
        }
        if self.laundry {
            out.push(FeatureBadge::with_icon("bg-warning text-dark", "fa-tshirt", "Laundry"));
        }
        out
    }
}

/// Payload of `/housing/{kind}/{id}/details`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HousingDetail {
    pub listing: HousingListingDetail,
    #[serde(default)]
    pub provider: ProviderCard,
}

/// Card on a housing browser page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HousingCard {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub room_type: Option<String>,
    #[serde(default)]
    pub sharing: Option<String>,
    #[serde(default)]
    pub bhk: Option<String>,
    #[serde(default)]
    pub furnishing: Option<String>,
    #[serde(default)]
    pub is_saved: bool,
}

impl Entity for HousingCard {
    type Id = i64;
    fn id(&self) -> i64 {
        self.id
    }
}

/// Card on the tiffin browser page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitchenCard {
    pub id: i64,
    #[serde(default)]
    pub delivery_radius: Option<f64>,
    #[serde(default)]
    pub fast_delivery_available: bool,
    #[serde(default)]
    pub diet_type: DietType,
    #[serde(default)]
    pub available_days: Option<String>,
    #[serde(default)]
    pub business_name: String,
    #[serde(default)]
    pub image_path: Option<String>,
}

impl Entity for KitchenCard {
    type Id = i64;
    fn id(&self) -> i64 {
        self.id
    }
}

/// Listing block of `/tiffin/{id}/details`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct KitchenInfo {
    pub id: i64,
    #[serde(default)]
    pub delivery_radius: Option<f64>,
    #[serde(default)]
    pub fast_delivery_available: bool,
    #[serde(default)]
    pub diet_type: DietType,
    #[serde(default)]
    pub available_days: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Payload of `/tiffin/{id}/details`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct KitchenDetail {
    pub listing: KitchenInfo,
    #[serde(default)]
    pub provider: ProviderCard,
}

/// Card on the services browser page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCard {
    pub id: i64,
    #[serde(default)]
    pub service_title: String,
    #[serde(default)]
    pub service_category: ServiceCategory,
    #[serde(default)]
    pub base_price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub availability_days: Option<String>,
    #[serde(default)]
    pub business_name: String,
    #[serde(default)]
    pub is_saved: bool,
}

impl Entity for ServiceCard {
    type Id = i64;
    fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_housing_kind_labels() {
        assert_eq!(HousingKind::Pg.slug(), "pg");
        assert_eq!(HousingKind::from_label("PG"), Some(HousingKind::Pg));
        assert_eq!(HousingKind::from_label("Villa"), None);
        let kind: HousingKind = serde_json::from_str("\"PG\"").unwrap();
        assert_eq!(kind, HousingKind::Pg);
    }

    #[test]
    fn test_house_listing_from_provider_api() {
        let json = r#"{
            "id": 7, "title": "Sunrise Hostel", "description": null, "price": 4500.0,
            "location": "Pune", "type": "Hostel", "status": "approved",
            "approved_at": "2024-05-02", "created_at": "2024-05-01",
            "preview_image": null,
            "images": [{"id": 1, "image_path": "uploads/a.jpg"}, {"id": 2, "image_path": "b.jpg"}]
        }"#;
        let house: HouseListing = serde_json::from_str(json).unwrap();
        assert_eq!(house.kind(), Some(HousingKind::Hostel));
        assert!(house.status.is_approved());
        assert_eq!(house.cover(), Some("uploads/a.jpg"));
        assert_eq!(house.id(), 7);
    }

    #[test]
    fn test_meal_accepts_either_image_field() {
        let provider: Meal = serde_json::from_str(
            r#"{"id": 1, "meal_name": "Thali", "price": 120, "diet_type": "veg", "meal_image_path": "t.jpg", "is_available": false}"#,
        )
        .unwrap();
        assert_eq!(provider.meal_image_path.as_deref(), Some("t.jpg"));
        assert!(!provider.is_available);

        let customer: Meal = serde_json::from_str(
            r#"{"id": 2, "meal_name": "Biryani", "price": 180, "diet_type": "non-veg", "image_path": "b.jpg"}"#,
        )
        .unwrap();
        assert_eq!(customer.meal_image_path.as_deref(), Some("b.jpg"));
        assert_eq!(customer.diet_type, DietType::NonVeg);
        assert!(customer.is_available);
    }

    #[test]
    fn test_hostel_features() {
        let detail = HousingListingDetail {
            id: 1,
            gender: Some("Male".into()),
            room_type: Some("Single".into()),
            wifi: true,
            laundry: true,
            ..Default::default()
        };
        let labels: Vec<_> = detail
            .features(HousingKind::Hostel)
            .into_iter()
            .map(|f| f.label)
            .collect();
        assert_eq!(labels, vec!["Male", "Single", "WiFi", "Laundry"]);
    }

    #[test]
    fn test_apartment_features_skip_amenities() {
        let detail = HousingListingDetail {
            id: 2,
            bhk: Some("2".into()),
            furnishing: Some("Semi-Furnished".into()),
            wifi: true,
            ..Default::default()
        };
        let labels: Vec<_> = detail
            .features(HousingKind::Apartment)
            .into_iter()
            .map(|f| f.label)
            .collect();
        assert_eq!(labels, vec!["2 BHK", "Semi-Furnished"]);
    }

    #[test]
    fn test_service_category_icons_and_labels() {
        assert_eq!(ServiceCategory::AcRepair.label(), "Ac Repair");
        assert_eq!(ServiceCategory::PackersMovers.icon(), "fa-truck");
        let unknown: ServiceCategory = serde_json::from_str("\"painter\"").unwrap();
        assert_eq!(unknown, ServiceCategory::Other);
        assert_eq!(unknown.icon(), "fa-tools");
    }
}
