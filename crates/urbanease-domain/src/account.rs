//! Accounts and Provider Verification
//!
//! Login roles, the admin user table, provider profiles and the status gate
//! that decides what a provider's dashboard shows.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::status::{UserStatus, VerificationStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Customer,
    Provider,
    ServiceProvider,
    Admin,
}

impl AccountType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "customer" => Some(AccountType::Customer),
            "provider" => Some(AccountType::Provider),
            "service_provider" => Some(AccountType::ServiceProvider),
            "admin" => Some(AccountType::Admin),
            _ => None,
        }
    }

    pub fn dashboard_path(&self) -> &'static str {
        match self {
            AccountType::Customer => "/customer/dashboard",
            AccountType::Provider | AccountType::ServiceProvider => "/provider/dashboard",
            AccountType::Admin => "/admin",
        }
    }

    /// Where a successful login lands, or the message shown for a role the
    /// UI does not know.
    pub fn redirect_for(raw: &str) -> Result<&'static str, String> {
        Self::parse(raw)
            .map(|t| t.dashboard_path())
            .ok_or_else(|| format!("Unknown account type: {}", raw))
    }
}

/// Row of the admin users table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub account_type: String,
    #[serde(default)]
    pub status: UserStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Entity for User {
    type Id = i64;
    fn id(&self) -> i64 {
        self.id
    }
}

impl User {
    /// Admins are never suspendable and a suspended user has nothing to do
    pub fn can_suspend(&self) -> bool {
        self.account_type != "admin" && self.status == UserStatus::Active
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProviderProfile {
    pub id: i64,
    #[serde(default)]
    pub business_name: String,
    #[serde(default)]
    pub aadhaar_number: String,
    #[serde(default)]
    pub business_license: Option<String>,
    #[serde(default)]
    pub verified_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Payload of `/provider/api/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProviderStatus {
    #[serde(default)]
    pub has_profile: bool,
    #[serde(default)]
    pub verification_status: Option<VerificationStatus>,
    #[serde(default)]
    pub profile: Option<ProviderProfile>,
}

impl ProviderStatus {
    pub fn stage(&self) -> VerificationStatus {
        if !self.has_profile {
            return VerificationStatus::Unverified;
        }
        self.verification_status.unwrap_or(VerificationStatus::Unknown)
    }

    pub fn gate(&self) -> ProviderGate {
        self.stage().gate()
    }
}

/// Alert shown above the provider dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner {
    pub class: &'static str,
    pub icon: &'static str,
    pub message: &'static str,
}

/// What the provider dashboard exposes at a given verification stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderGate {
    pub banner: Option<Banner>,
    pub show_form: bool,
    pub prefill_form: bool,
    pub show_dashboard: bool,
    pub sidebar_locked: bool,
    pub can_add_listings: bool,
}

impl ProviderGate {
    const LOCKED: ProviderGate = ProviderGate {
        banner: None,
        show_form: false,
        prefill_form: false,
        show_dashboard: false,
        sidebar_locked: true,
        can_add_listings: false,
    };
}

impl VerificationStatus {
    pub fn gate(&self) -> ProviderGate {
        match self {
            VerificationStatus::Unverified => ProviderGate {
                banner: Some(Banner {
                    class: "alert-info",
                    icon: "fa-info-circle",
                    message: "Complete your verification to start offering services on UrbanEase.",
                }),
                show_form: true,
                ..ProviderGate::LOCKED
            },
            VerificationStatus::Pending => ProviderGate {
                banner: Some(Banner {
                    class: "alert-warning",
                    icon: "fa-clock",
                    message: "Your verification is under review. We will notify you once it is approved.",
                }),
                ..ProviderGate::LOCKED
            },
            VerificationStatus::Rejected => ProviderGate {
                banner: Some(Banner {
                    class: "alert-danger",
                    icon: "fa-times-circle",
                    message: "Your verification was rejected. Please review your information and reapply.",
                }),
                show_form: true,
                prefill_form: true,
                ..ProviderGate::LOCKED
            },
            VerificationStatus::Verified => ProviderGate {
                banner: Some(Banner {
                    class: "alert-success",
                    icon: "fa-check-circle",
                    message: "Your account is verified. You can now access all features.",
                }),
                show_form: false,
                prefill_form: false,
                show_dashboard: true,
                sidebar_locked: false,
                can_add_listings: true,
            },
            VerificationStatus::Unknown => ProviderGate::LOCKED,
        }
    }
}

/// Row of the admin pending-providers queue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingProvider {
    pub id: i64,
    #[serde(default)]
    pub business_name: String,
}

impl Entity for PendingProvider {
    type Id = i64;
    fn id(&self) -> i64 {
        self.id
    }
}

/// Row of the admin provider-profiles table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderProfileRow {
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub business_name: String,
    #[serde(default)]
    pub aadhaar_number: String,
    #[serde(default)]
    pub business_license: Option<String>,
    #[serde(default)]
    pub verification_status: VerificationStatus,
    #[serde(default)]
    pub verified_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Entity for ProviderProfileRow {
    type Id = i64;
    fn id(&self) -> i64 {
        self.id
    }
}

/// Admin provider details modal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProviderDetail {
    pub id: i64,
    #[serde(default)]
    pub business_name: String,
    #[serde(default)]
    pub aadhaar_number: String,
    #[serde(default)]
    pub business_license: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Basic account fields used to prefill forms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserProfile {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DashboardStats {
    #[serde(default)]
    pub house_count: u32,
    #[serde(default)]
    pub tiffin_count: u32,
    #[serde(default)]
    pub service_count: u32,
    #[serde(default)]
    pub order_count: u32,
    #[serde(default)]
    pub booking_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_redirects() {
        assert_eq!(AccountType::redirect_for("customer"), Ok("/customer/dashboard"));
        assert_eq!(AccountType::redirect_for("provider"), Ok("/provider/dashboard"));
        assert_eq!(AccountType::redirect_for("service_provider"), Ok("/provider/dashboard"));
        assert_eq!(AccountType::redirect_for("admin"), Ok("/admin"));
        assert_eq!(
            AccountType::redirect_for("guest"),
            Err("Unknown account type: guest".to_string())
        );
    }

    #[test]
    fn test_no_profile_is_unverified() {
        let status: ProviderStatus =
            serde_json::from_str(r#"{"has_profile": false, "verification_status": null, "profile": null}"#)
                .unwrap();
        assert_eq!(status.stage(), VerificationStatus::Unverified);
        let gate = status.gate();
        assert!(gate.show_form);
        assert!(!gate.prefill_form);
        assert!(gate.sidebar_locked);
        assert_eq!(gate.banner.map(|b| b.class), Some("alert-info"));
    }

    #[test]
    fn test_gate_per_stage() {
        let pending = VerificationStatus::Pending.gate();
        assert!(!pending.show_form && !pending.show_dashboard && pending.sidebar_locked);

        let rejected = VerificationStatus::Rejected.gate();
        assert!(rejected.show_form && rejected.prefill_form && !rejected.can_add_listings);

        let verified = VerificationStatus::Verified.gate();
        assert!(verified.show_dashboard && !verified.sidebar_locked && verified.can_add_listings);
        assert!(!verified.show_form);
        assert_eq!(
            verified.banner.map(|b| b.message),
            Some("Your account is verified. You can now access all features.")
        );
    }

    #[test]
    fn test_verified_profile_from_status_endpoint() {
        let json = r#"{
            "has_profile": true, "verification_status": "verified",
            "profile": {"id": 4, "business_name": "Annapurna", "aadhaar_number": "123412341234",
                        "business_license": null, "verified_at": "2024-05-01",
                        "created_at": "2024-04-20", "profile_image": "p.jpg"}
        }"#;
        let status: ProviderStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.stage(), VerificationStatus::Verified);
        assert_eq!(status.profile.map(|p| p.business_name), Some("Annapurna".to_string()));
    }

    #[test]
    fn test_user_can_suspend() {
        let mut user = User {
            id: 1,
            username: "asha".into(),
            email: "a@x.com".into(),
            phone: None,
            account_type: "customer".into(),
            status: UserStatus::Active,
            created_at: None,
        };
        assert!(user.can_suspend());
        user.status = UserStatus::Suspended;
        assert!(!user.can_suspend());
        user.status = UserStatus::Active;
        user.account_type = "admin".into();
        assert!(!user.can_suspend());
    }
}
