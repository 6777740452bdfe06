//! Orders and Bookings
//!
//! One record type per flow, shared by the provider tables, the admin tables
//! and the customer "my orders" / "my bookings" pages. Each endpoint fills a
//! different subset of fields, so most of them are optional.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::listing::{DietType, ServiceCategory};
use crate::status::{BookingStatus, OrderStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodOrder {
    pub id: i64,
    #[serde(default, alias = "customer_username")]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub provider_business_name: Option<String>,
    #[serde(default)]
    pub meal_name: String,
    #[serde(default)]
    pub meal_category: Option<String>,
    #[serde(default)]
    pub diet_type: DietType,
    #[serde(default = "one")]
    pub quantity: u32,
    #[serde(default)]
    pub base_price: f64,
    #[serde(default)]
    pub fast_delivery: bool,
    #[serde(default)]
    pub fast_delivery_charge: f64,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default)]
    pub order_status: OrderStatus,
    #[serde(default)]
    pub delivery_address: Option<String>,
    #[serde(default)]
    pub order_date: Option<String>,
}

fn one() -> u32 {
    1
}

impl Entity for FoodOrder {
    type Id = i64;
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceBooking {
    pub id: i64,
    #[serde(default, alias = "customer_username")]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub provider_business_name: Option<String>,
    #[serde(default)]
    pub service_title: String,
    #[serde(default)]
    pub service_category: ServiceCategory,
    #[serde(default)]
    pub booking_date: Option<String>,
    #[serde(default)]
    pub booking_time: Option<String>,
    #[serde(default)]
    pub booking_status: BookingStatus,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub quoted_price: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Entity for ServiceBooking {
    type Id = i64;
    fn id(&self) -> i64 {
        self.id
    }
}

impl ServiceBooking {
    /// A zero quote means the provider has not priced the job yet
    pub fn quote(&self) -> Option<f64> {
        self.quoted_price.filter(|p| *p > 0.0)
    }
}

/// Live total for the order modal: unit price x quantity, plus the fast
/// delivery charge when selected.
pub fn order_total(unit_price: f64, quantity: u32, fast_delivery: bool, charge: f64) -> f64 {
    let base = unit_price * f64::from(quantity);
    if fast_delivery {
        base + charge
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_total() {
        assert_eq!(order_total(120.0, 2, false, 20.0), 240.0);
        assert_eq!(order_total(120.0, 2, true, 20.0), 260.0);
        assert_eq!(order_total(99.5, 0, false, 20.0), 0.0);
    }

    #[test]
    fn test_admin_order_uses_customer_username() {
        let json = r#"{
            "id": 3, "customer_username": "asha", "provider_business_name": "Annapurna",
            "meal_name": "Thali", "quantity": 2, "base_price": 120.0,
            "fast_delivery": true, "fast_delivery_charge": 20.0, "total_price": 260.0,
            "order_status": "preparing", "delivery_address": "12 MG Road",
            "order_date": "2024-06-01"
        }"#;
        let order: FoodOrder = serde_json::from_str(json).unwrap();
        assert_eq!(order.customer_name.as_deref(), Some("asha"));
        assert_eq!(order.order_status, OrderStatus::Preparing);
        assert_eq!(order.diet_type, DietType::Unknown);
    }

    #[test]
    fn test_booking_quote() {
        let json = r#"{
            "id": 9, "customer_name": "ravi", "service_title": "Fan repair",
            "service_category": "electrician", "booking_date": "2024-06-02",
            "booking_time": "14:30", "booking_status": "requested",
            "address": "Flat 4", "notes": "", "quoted_price": 0
        }"#;
        let booking: ServiceBooking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.quote(), None);
        assert_eq!(booking.booking_status, BookingStatus::Requested);
        assert_eq!(booking.service_category, ServiceCategory::Electrician);
    }
}
