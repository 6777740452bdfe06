//! Status Enums
//!
//! Every status the backend reports, with its badge and the transitions a
//! provider may trigger. Unknown wire values deserialize to `Unknown`.

use serde::{Deserialize, Serialize};

/// Label + Bootstrap class pair rendered as `<span class="badge {class}">`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub class: &'static str,
    pub label: &'static str,
}

impl Badge {
    const fn new(class: &'static str, label: &'static str) -> Self {
        Self { class, label }
    }

    pub const UNKNOWN: Badge = Badge::new("bg-secondary", "Unknown");

    /// Full class attribute for a badge element
    pub fn css(&self) -> String {
        format!("badge {}", self.class)
    }
}

/// Approval state of a house, tiffin or service listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    #[serde(other)]
    Unknown,
}

impl ListingStatus {
    pub fn badge(&self) -> Badge {
        match self {
            ListingStatus::Pending => Badge::new("bg-warning text-dark", "Pending"),
            ListingStatus::Approved => Badge::new("bg-success", "Approved"),
            ListingStatus::Rejected => Badge::new("bg-danger", "Rejected"),
            ListingStatus::Unknown => Badge::UNKNOWN,
        }
    }

    /// Overlay class used on listing cards
    pub fn card_class(&self) -> &'static str {
        match self {
            ListingStatus::Approved => "badge-approved",
            ListingStatus::Rejected => "badge-rejected",
            ListingStatus::Pending | ListingStatus::Unknown => "badge-pending",
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, ListingStatus::Approved)
    }
}

/// Provider verification state; `Unverified` means no profile was submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    #[default]
    Unverified,
    Pending,
    Rejected,
    Verified,
    #[serde(other)]
    Unknown,
}

impl VerificationStatus {
    pub fn badge(&self) -> Badge {
        match self {
            VerificationStatus::Unverified => Badge::new("bg-secondary", "Not Submitted"),
            VerificationStatus::Pending => Badge::new("bg-warning text-dark", "Pending"),
            VerificationStatus::Rejected => Badge::new("bg-danger", "Rejected"),
            VerificationStatus::Verified => Badge::new("bg-success", "Verified"),
            VerificationStatus::Unknown => Badge::UNKNOWN,
        }
    }
}

/// Food order progression: placed -> preparing -> out_for_delivery -> delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Placed,
    Preparing,
    OutForDelivery,
    Delivered,
    Cancelled,
    #[serde(other)]
    Unknown,
}

/// A provider-triggered status change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusAction<S> {
    pub next: S,
    pub label: &'static str,
    pub confirm: &'static str,
    pub button_class: &'static str,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "placed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out_for_delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Unknown => "unknown",
        }
    }

    pub fn badge(&self) -> Badge {
        match self {
            OrderStatus::Placed => Badge::new("bg-secondary", "Placed"),
            OrderStatus::Preparing => Badge::new("bg-warning text-dark", "Preparing"),
            OrderStatus::OutForDelivery => Badge::new("bg-info", "Out for Delivery"),
            OrderStatus::Delivered => Badge::new("bg-success", "Delivered"),
            OrderStatus::Cancelled => Badge::new("bg-danger", "Cancelled"),
            OrderStatus::Unknown => Badge::UNKNOWN,
        }
    }

    /// Next step a provider can take, if any
    pub fn next_action(&self) -> Option<StatusAction<OrderStatus>> {
        let (next, label, confirm) = match self {
            OrderStatus::Placed => (OrderStatus::Preparing, "Prepare", "Mark this order as preparing?"),
            OrderStatus::Preparing => (
                OrderStatus::OutForDelivery,
                "Out for Delivery",
                "Mark this order as out for delivery?",
            ),
            OrderStatus::OutForDelivery => (OrderStatus::Delivered, "Delivered", "Mark this order as delivered?"),
            OrderStatus::Delivered | OrderStatus::Cancelled | OrderStatus::Unknown => return None,
        };
        Some(StatusAction { next, label, confirm, button_class: "btn btn-primary btn-sm" })
    }

    /// Orders still needing provider attention
    pub fn is_active(&self) -> bool {
        matches!(self, OrderStatus::Placed | OrderStatus::Preparing | OrderStatus::OutForDelivery)
    }
}

/// Service booking progression: requested -> accepted -> completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    #[default]
    Requested,
    Accepted,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Requested => "requested",
            BookingStatus::Accepted => "accepted",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Unknown => "unknown",
        }
    }

    pub fn badge(&self) -> Badge {
        match self {
            BookingStatus::Requested => Badge::new("bg-secondary", "Requested"),
            BookingStatus::Accepted => Badge::new("bg-info", "Accepted"),
            BookingStatus::Completed => Badge::new("bg-success", "Completed"),
            BookingStatus::Cancelled => Badge::new("bg-danger", "Cancelled"),
            BookingStatus::Unknown => Badge::UNKNOWN,
        }
    }

    /// Actions offered in the booking details footer, in display order
    pub fn actions(&self) -> Vec<StatusAction<BookingStatus>> {
        match self {
            BookingStatus::Requested => vec![
                StatusAction {
                    next: BookingStatus::Cancelled,
                    label: "Reject",
                    confirm: "Reject this booking?",
                    button_class: "btn btn-danger",
                },
                StatusAction {
                    next: BookingStatus::Accepted,
                    label: "Accept",
                    confirm: "Accept this booking?",
                    button_class: "btn btn-primary",
                },
            ],
            BookingStatus::Accepted => vec![StatusAction {
                next: BookingStatus::Completed,
                label: "Complete Service",
                confirm: "Mark service as completed?",
                button_class: "btn btn-primary",
            }],
            BookingStatus::Completed | BookingStatus::Cancelled | BookingStatus::Unknown => Vec::new(),
        }
    }
}

/// Account state as shown to admins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    #[default]
    Active,
    Suspended,
    #[serde(other)]
    Unknown,
}

impl UserStatus {
    pub fn badge(&self) -> Badge {
        match self {
            UserStatus::Active => Badge::new("bg-success", "Active"),
            UserStatus::Suspended => Badge::new("bg-danger", "Suspended"),
            UserStatus::Unknown => Badge::UNKNOWN,
        }
    }
}

pub fn availability_badge(available: bool) -> Badge {
    if available {
        Badge::new("bg-success", "Available")
    } else {
        Badge::new("bg-danger", "Unavailable")
    }
}

pub fn kitchen_badge(open: bool) -> Badge {
    if open {
        Badge::new("bg-success rounded-pill px-3 py-2", "Kitchen Open")
    } else {
        Badge::new("bg-danger rounded-pill px-3 py-2", "Kitchen Closed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_badges_cover_every_status() {
        let all = [
            ListingStatus::Pending,
            ListingStatus::Approved,
            ListingStatus::Rejected,
            ListingStatus::Unknown,
        ];
        let labels: Vec<_> = all.iter().map(|s| s.badge().label).collect();
        assert_eq!(labels, vec!["Pending", "Approved", "Rejected", "Unknown"]);
        assert_eq!(ListingStatus::Approved.card_class(), "badge-approved");
        assert_eq!(ListingStatus::Unknown.card_class(), "badge-pending");
    }

    #[test]
    fn test_order_badges_and_actions() {
        let all = [
            OrderStatus::Placed,
            OrderStatus::Preparing,
            OrderStatus::OutForDelivery,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
            OrderStatus::Unknown,
        ];
        for status in all {
            assert!(!status.badge().label.is_empty());
            assert!(status.badge().class.starts_with("bg-"));
        }
        assert_eq!(OrderStatus::OutForDelivery.badge().label, "Out for Delivery");

        // Walk the whole progression
        let mut status = OrderStatus::Placed;
        let mut steps = Vec::new();
        while let Some(action) = status.next_action() {
            steps.push(action.label);
            status = action.next;
        }
        assert_eq!(steps, vec!["Prepare", "Out for Delivery", "Delivered"]);
        assert_eq!(status, OrderStatus::Delivered);
        assert!(OrderStatus::Cancelled.next_action().is_none());
    }

    #[test]
    fn test_booking_actions() {
        let requested = BookingStatus::Requested.actions();
        assert_eq!(requested.len(), 2);
        assert_eq!(requested[0].next, BookingStatus::Cancelled);
        assert_eq!(requested[1].next, BookingStatus::Accepted);

        let accepted = BookingStatus::Accepted.actions();
        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0].next, BookingStatus::Completed);

        assert!(BookingStatus::Completed.actions().is_empty());
        assert!(BookingStatus::Cancelled.actions().is_empty());
    }

    #[test]
    fn test_verification_and_user_badges() {
        assert_eq!(VerificationStatus::Unverified.badge().label, "Not Submitted");
        assert_eq!(VerificationStatus::Verified.badge().class, "bg-success");
        assert_eq!(UserStatus::Suspended.badge().label, "Suspended");
        assert_eq!(UserStatus::Unknown.badge(), Badge::UNKNOWN);
    }

    #[test]
    fn test_unknown_wire_values() {
        let status: OrderStatus = serde_json::from_str("\"returned\"").unwrap();
        assert_eq!(status, OrderStatus::Unknown);
        let status: OrderStatus = serde_json::from_str("\"out_for_delivery\"").unwrap();
        assert_eq!(status, OrderStatus::OutForDelivery);
        let status: BookingStatus = serde_json::from_str("\"accepted\"").unwrap();
        assert_eq!(status, BookingStatus::Accepted);
    }
}
