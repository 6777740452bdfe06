//! Page Data & Configuration
//!
//! Every host page embeds a `<script id="page-data" type="application/json">`
//! block naming the view to mount, the records the server rendered for it,
//! and optional config overrides.

use serde::{Deserialize, Serialize};
use urbanease_domain::{
    FoodOrder, HousingCard, HousingKind, KitchenCard, ServiceBooking, ServiceCard, UserProfile,
};

pub const PAGE_DATA_ID: &str = "page-data";

fn default_image_base() -> String {
    "/static/images/database_images/".to_string()
}

fn default_placeholder() -> String {
    "/static/images/placeholder.jpg".to_string()
}

fn default_fast_delivery_charge() -> f64 {
    20.0
}

fn default_toast_ms() -> u32 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_payment_path() -> String {
    "/payment".to_string()
}

fn default_log_capacity() -> usize {
    500
}

/// Runtime settings, each overridable from the page data block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Prefix for every backend route ("" = same origin)
    #[serde(default)]
    pub api_base: String,
    #[serde(default = "default_image_base")]
    pub image_base: String,
    #[serde(default = "default_placeholder")]
    pub placeholder_image: String,
    #[serde(default = "default_fast_delivery_charge")]
    pub fast_delivery_charge: f64,
    #[serde(default = "default_toast_ms")]
    pub toast_ms: u32,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_capacity")]
    pub log_capacity: usize,
    #[serde(default = "default_payment_path")]
    pub payment_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            image_base: default_image_base(),
            placeholder_image: default_placeholder(),
            fast_delivery_charge: default_fast_delivery_charge(),
            toast_ms: default_toast_ms(),
            log_level: default_log_level(),
            log_capacity: default_log_capacity(),
            payment_path: default_payment_path(),
        }
    }
}

impl AppConfig {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), path)
    }

    /// Image URL for a stored reference, or the placeholder
    pub fn image(&self, stored: Option<&str>) -> String {
        stored
            .and_then(|s| urbanease_domain::image_url(&self.image_base, s))
            .unwrap_or_else(|| self.placeholder_image.clone())
    }
}

/// Which view to mount, with the records the server rendered for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Page {
    Login,
    Signup,
    Profile,
    CustomerDashboard,
    Housing {
        kind: HousingKind,
        #[serde(default)]
        cards: Vec<HousingCard>,
    },
    Tiffin {
        #[serde(default)]
        kitchens: Vec<KitchenCard>,
        #[serde(default)]
        default_address: String,
    },
    Services {
        #[serde(default)]
        services: Vec<ServiceCard>,
    },
    MyOrders {
        #[serde(default)]
        orders: Vec<FoodOrder>,
    },
    MyBookings {
        #[serde(default)]
        bookings: Vec<ServiceBooking>,
    },
    Admin,
    Provider,
}

impl Page {
    pub fn name(&self) -> &'static str {
        match self {
            Page::Login => "login",
            Page::Signup => "signup",
            Page::Profile => "profile",
            Page::CustomerDashboard => "customer_dashboard",
            Page::Housing { .. } => "housing",
            Page::Tiffin { .. } => "tiffin",
            Page::Services { .. } => "services",
            Page::MyOrders { .. } => "my_orders",
            Page::MyBookings { .. } => "my_bookings",
            Page::Admin => "admin",
            Page::Provider => "provider",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageData {
    #[serde(flatten)]
    pub page: Page,
    /// Signed-in user, for the navbar and profile page
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub config: AppConfig,
}

impl PageData {
    pub fn parse(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| format!("Invalid page data: {}", e))
    }

    /// Read the block from the current document
    pub fn from_document() -> Result<Self, String> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "No document".to_string())?;
        let raw = document
            .get_element_by_id(PAGE_DATA_ID)
            .and_then(|el| el.text_content())
            .ok_or_else(|| format!("Missing #{} block", PAGE_DATA_ID))?;
        Self::parse(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_config_absent() {
        let data = PageData::parse(r#"{"page": "login"}"#).unwrap();
        assert_eq!(data.page, Page::Login);
        assert_eq!(data.page.name(), "login");
        assert_eq!(data.config, AppConfig::default());
        assert_eq!(data.config.fast_delivery_charge, 20.0);
        assert_eq!(data.config.toast_ms, 3000);
    }

    #[test]
    fn test_partial_config_override() {
        let data = PageData::parse(
            r#"{"page": "tiffin", "kitchens": [], "default_address": "12 MG Road",
                "config": {"fast_delivery_charge": 30, "api_base": "https://api.example.com/"}}"#,
        )
        .unwrap();
        assert_eq!(data.config.fast_delivery_charge, 30.0);
        assert_eq!(data.config.payment_path, "/payment");
        assert_eq!(data.config.url("/login"), "https://api.example.com/login");
        match data.page {
            Page::Tiffin { default_address, .. } => assert_eq!(default_address, "12 MG Road"),
            other => panic!("unexpected page {:?}", other),
        }
    }

    #[test]
    fn test_housing_page() {
        let data = PageData::parse(
            r#"{"page": "housing", "kind": "PG",
                "cards": [{"id": 1, "title": "Green PG", "price": 6500, "location": "Pune"}]}"#,
        )
        .unwrap();
        match data.page {
            Page::Housing { kind, cards } => {
                assert_eq!(kind, HousingKind::Pg);
                assert_eq!(cards.len(), 1);
                assert!(!cards[0].is_saved);
            }
            other => panic!("unexpected page {:?}", other),
        }
    }

    #[test]
    fn test_image_fallback() {
        let config = AppConfig::default();
        assert_eq!(config.image(None), "/static/images/placeholder.jpg");
        assert_eq!(config.image(Some("up/x y.jpg")), "/static/images/database_images/x%20y.jpg");
    }

    #[test]
    fn test_unknown_page_is_error() {
        assert!(PageData::parse(r#"{"page": "nowhere"}"#).is_err());
        assert!(PageData::parse("").is_err());
    }
}
