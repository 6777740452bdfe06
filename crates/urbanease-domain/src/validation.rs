//! Form Validation
//!
//! Every check runs before a request body is built, so an invalid form never
//! reaches the network. Messages are the ones shown to the user.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::listing::DietType;

/// Largest accepted verification photo
pub const MAX_PHOTO_BYTES: u64 = 5 * 1024 * 1024;

const PASSWORD_SPECIALS: &str = "!@#$%^&*(),.?\":{}|<>";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    LoginFieldsRequired,
    #[error("All fields are required!")]
    SignupFieldsRequired,
    #[error("All fields are required.")]
    ProfileFieldsRequired,
    #[error("Please enter a valid 10-digit Indian mobile number.")]
    InvalidPhone,
    #[error("This is not a valid email address.")]
    InvalidEmail,
    #[error("Password must be at least 8 characters long.")]
    PasswordTooShort,
    #[error("Password must contain at least one uppercase letter and one special character.")]
    PasswordTooWeak,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Please enter a valid 6-digit OTP.")]
    InvalidOtp,
    #[error("Please enter a valid 12-digit Aadhaar number")]
    InvalidAadhaar,
    #[error("Only JPEG images are allowed for profile photo")]
    PhotoNotJpeg,
    #[error("Profile photo must be less than 5MB")]
    PhotoTooLarge,
    #[error("Please select at least one diet type")]
    MissingDiet,
    #[error("Please select at least one available day")]
    NoDaysSelected,
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Please select a meal to order.")]
    NoMealSelected,
    #[error("Quantity must be at least 1.")]
    InvalidQuantity,
    #[error("Delivery address is required.")]
    MissingDeliveryAddress,
    #[error("Please select a booking date")]
    MissingBookingDate,
    #[error("Please select a booking time")]
    MissingBookingTime,
    #[error("Please enter the service address")]
    MissingServiceAddress,
}

pub type ValidationResult<T> = Result<T, ValidationError>;

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[6-9]\d{9}$").expect("valid phone regex"))
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // ASCII word characters only
        Regex::new(r"^(?-u:\w)+([.-]?(?-u:\w)+)*@(?-u:\w)+([.]?(?-u:\w)+)*(\.(?-u:\w){2,3})+$")
            .expect("valid email regex")
    })
}

fn all_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

// ============================================================================
// Auth
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub fn validate_login(email: &str, password: &str) -> ValidationResult<LoginRequest> {
    let email = email.trim();
    let password = password.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::LoginFieldsRequired);
    }
    Ok(LoginRequest { email: email.to_string(), password: password.to_string() })
}

/// Raw values of the signup form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub account_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub account_type: String,
}

pub fn validate_signup(form: &SignupForm) -> ValidationResult<SignupRequest> {
    let username = form.username.trim();
    let phone = form.phone.trim();
    let email = form.email.trim();
    let account_type = form.account_type.trim();
    let password = form.password.as_str();

    if [username, phone, email, password, form.confirm_password.as_str(), account_type]
        .iter()
        .any(|v| v.is_empty())
    {
        return Err(ValidationError::SignupFieldsRequired);
    }
    if !phone_regex().is_match(phone) {
        return Err(ValidationError::InvalidPhone);
    }
    if !email_regex().is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if password.chars().count() < 8 {
        return Err(ValidationError::PasswordTooShort);
    }
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_special = password.chars().any(|c| PASSWORD_SPECIALS.contains(c));
    if !has_upper || !has_special {
        return Err(ValidationError::PasswordTooWeak);
    }
    if password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    Ok(SignupRequest {
        username: username.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        account_type: account_type.to_string(),
    })
}

pub fn validate_otp(otp: &str) -> ValidationResult<String> {
    let otp = otp.trim();
    if all_digits(otp, 6) {
        Ok(otp.to_string())
    } else {
        Err(ValidationError::InvalidOtp)
    }
}

// ============================================================================
// Provider verification
// ============================================================================

pub fn validate_aadhaar(aadhaar: &str) -> ValidationResult<()> {
    if all_digits(aadhaar, 12) {
        Ok(())
    } else {
        Err(ValidationError::InvalidAadhaar)
    }
}

/// Optional photo: JPEG only, at most 5 MB
pub fn validate_profile_photo(mime: &str, size: u64) -> ValidationResult<()> {
    if !matches!(mime, "image/jpeg" | "image/jpg") {
        return Err(ValidationError::PhotoNotJpeg);
    }
    if size > MAX_PHOTO_BYTES {
        return Err(ValidationError::PhotoTooLarge);
    }
    Ok(())
}

// ============================================================================
// Profile
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub username: String,
    pub email: String,
    pub phone: String,
}

pub fn validate_profile_update(username: &str, email: &str, phone: &str) -> ValidationResult<ProfileUpdate> {
    let (username, email, phone) = (username.trim(), email.trim(), phone.trim());
    if username.is_empty() || email.is_empty() || phone.is_empty() {
        return Err(ValidationError::ProfileFieldsRequired);
    }
    Ok(ProfileUpdate { username: username.into(), email: email.into(), phone: phone.into() })
}

// ============================================================================
// Listing forms
// ============================================================================

/// First empty field among `(label, value)` pairs
pub fn require_fields(fields: &[(&'static str, &str)]) -> ValidationResult<()> {
    match fields.iter().find(|(_, value)| value.trim().is_empty()) {
        Some((label, _)) => Err(ValidationError::Required(*label)),
        None => Ok(()),
    }
}

pub fn diet_from_flags(veg: bool, non_veg: bool) -> ValidationResult<DietType> {
    match (veg, non_veg) {
        (true, true) => Ok(DietType::Both),
        (true, false) => Ok(DietType::Veg),
        (false, true) => Ok(DietType::NonVeg),
        (false, false) => Err(ValidationError::MissingDiet),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }
}

/// Availability text stored with tiffin and service listings
pub fn summarize_days(selected: &[Weekday]) -> ValidationResult<String> {
    let mut days = selected.to_vec();
    days.sort();
    days.dedup();

    let weekends = days.iter().filter(|d| d.is_weekend()).count();
    let summary = match (days.len(), weekends) {
        (0, _) => return Err(ValidationError::NoDaysSelected),
        (7, _) => "All Days".to_string(),
        (5, 0) => "Weekdays".to_string(),
        (2, 2) => "Weekends".to_string(),
        _ => days.iter().map(|d| d.name()).collect::<Vec<_>>().join(", "),
    };
    Ok(summary)
}

// ============================================================================
// Customer requests
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealOrderRequest {
    pub quantity: u32,
    pub fast_delivery: bool,
    pub delivery_address: String,
    pub notes: String,
}

pub fn validate_meal_order(
    meal_id: Option<i64>,
    quantity: &str,
    fast_delivery: bool,
    address: &str,
    notes: &str,
) -> ValidationResult<(i64, MealOrderRequest)> {
    let meal_id = meal_id.ok_or(ValidationError::NoMealSelected)?;
    let quantity = match quantity.trim().parse::<u32>() {
        Ok(q) if q >= 1 => q,
        _ => return Err(ValidationError::InvalidQuantity),
    };
    let address = address.trim();
    if address.is_empty() {
        return Err(ValidationError::MissingDeliveryAddress);
    }
    Ok((
        meal_id,
        MealOrderRequest {
            quantity,
            fast_delivery,
            delivery_address: address.to_string(),
            notes: notes.trim().to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub booking_date: String,
    pub booking_time: String,
    pub address: String,
    pub notes: String,
}

pub fn validate_booking(date: &str, time: &str, address: &str, notes: &str) -> ValidationResult<BookingRequest> {
    let (date, time, address) = (date.trim(), time.trim(), address.trim());
    if date.is_empty() {
        return Err(ValidationError::MissingBookingDate);
    }
    if time.is_empty() {
        return Err(ValidationError::MissingBookingTime);
    }
    if address.is_empty() {
        return Err(ValidationError::MissingServiceAddress);
    }
    Ok(BookingRequest {
        booking_date: date.to_string(),
        booking_time: time.to_string(),
        address: address.to_string(),
        notes: notes.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup() -> SignupForm {
        SignupForm {
            username: "asha".into(),
            phone: "9876543210".into(),
            email: "asha.k@example.com".into(),
            password: "Secret@123".into(),
            confirm_password: "Secret@123".into(),
            account_type: "customer".into(),
        }
    }

    #[test]
    fn test_empty_login_is_rejected() {
        assert_eq!(validate_login("", "pw"), Err(ValidationError::LoginFieldsRequired));
        assert_eq!(validate_login("  a@b.com ", "   "), Err(ValidationError::LoginFieldsRequired));
        let req = validate_login(" a@b.com ", "pw").unwrap();
        assert_eq!(req.email, "a@b.com");
    }

    #[test]
    fn test_signup_happy_path() {
        let req = validate_signup(&signup()).unwrap();
        assert_eq!(req.account_type, "customer");
    }

    #[test]
    fn test_signup_checks_in_order() {
        let mut form = signup();
        form.username.clear();
        assert_eq!(validate_signup(&form), Err(ValidationError::SignupFieldsRequired));

        let mut form = signup();
        form.phone = "5876543210".into();
        assert_eq!(validate_signup(&form), Err(ValidationError::InvalidPhone));

        let mut form = signup();
        form.email = "asha@".into();
        assert_eq!(validate_signup(&form), Err(ValidationError::InvalidEmail));

        let mut form = signup();
        form.email = "ü@exämple.com".into();
        assert_eq!(validate_signup(&form), Err(ValidationError::InvalidEmail));

        let mut form = signup();
        form.password = "Se@1".into();
        form.confirm_password = "Se@1".into();
        assert_eq!(validate_signup(&form), Err(ValidationError::PasswordTooShort));

        let mut form = signup();
        form.password = "secret@123".into();
        form.confirm_password = "secret@123".into();
        assert_eq!(validate_signup(&form), Err(ValidationError::PasswordTooWeak));

        let mut form = signup();
        form.confirm_password = "Secret@124".into();
        assert_eq!(validate_signup(&form), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn test_otp_and_aadhaar() {
        assert!(validate_otp("123456").is_ok());
        assert_eq!(validate_otp("12345"), Err(ValidationError::InvalidOtp));
        assert_eq!(validate_otp("12345a"), Err(ValidationError::InvalidOtp));
        assert!(validate_aadhaar("123412341234").is_ok());
        assert_eq!(validate_aadhaar("1234 1234 1234"), Err(ValidationError::InvalidAadhaar));
    }

    #[test]
    fn test_profile_photo() {
        assert!(validate_profile_photo("image/jpeg", 1024).is_ok());
        assert!(validate_profile_photo("image/jpeg", MAX_PHOTO_BYTES).is_ok());
        assert_eq!(validate_profile_photo("image/png", 10), Err(ValidationError::PhotoNotJpeg));
        assert_eq!(
            validate_profile_photo("image/jpg", MAX_PHOTO_BYTES + 1),
            Err(ValidationError::PhotoTooLarge)
        );
    }

    #[test]
    fn test_days_summary() {
        assert_eq!(summarize_days(&Weekday::ALL).unwrap(), "All Days");
        assert_eq!(summarize_days(&Weekday::ALL[..5]).unwrap(), "Weekdays");
        assert_eq!(
            summarize_days(&[Weekday::Sunday, Weekday::Saturday]).unwrap(),
            "Weekends"
        );
        assert_eq!(
            summarize_days(&[Weekday::Friday, Weekday::Monday]).unwrap(),
            "Monday, Friday"
        );
        assert_eq!(summarize_days(&[]), Err(ValidationError::NoDaysSelected));
    }

    #[test]
    fn test_diet_flags() {
        assert_eq!(diet_from_flags(true, true), Ok(DietType::Both));
        assert_eq!(diet_from_flags(false, true), Ok(DietType::NonVeg));
        assert_eq!(diet_from_flags(false, false), Err(ValidationError::MissingDiet));
    }

    #[test]
    fn test_meal_order() {
        assert_eq!(
            validate_meal_order(None, "1", false, "x", ""),
            Err(ValidationError::NoMealSelected)
        );
        assert_eq!(
            validate_meal_order(Some(1), "0", false, "x", ""),
            Err(ValidationError::InvalidQuantity)
        );
        assert_eq!(
            validate_meal_order(Some(1), "two", false, "x", ""),
            Err(ValidationError::InvalidQuantity)
        );
        assert_eq!(
            validate_meal_order(Some(1), "2", true, "  ", ""),
            Err(ValidationError::MissingDeliveryAddress)
        );
        let (id, req) = validate_meal_order(Some(4), "2", true, " 12 MG Road ", "ring bell").unwrap();
        assert_eq!(id, 4);
        assert_eq!(req.quantity, 2);
        assert_eq!(req.delivery_address, "12 MG Road");
    }

    #[test]
    fn test_booking() {
        assert_eq!(validate_booking("", "10:00", "a", ""), Err(ValidationError::MissingBookingDate));
        assert_eq!(validate_booking("2024-06-01", "", "a", ""), Err(ValidationError::MissingBookingTime));
        assert_eq!(
            validate_booking("2024-06-01", "10:00", " ", ""),
            Err(ValidationError::MissingServiceAddress)
        );
        assert!(validate_booking("2024-06-01", "10:00", "Flat 4", "").is_ok());
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(
            require_fields(&[("Title", "Room"), ("Price", " ")]),
            Err(ValidationError::Required("Price"))
        );
        assert!(require_fields(&[("Title", "Room")]).is_ok());
        assert_eq!(ValidationError::Required("Price").to_string(), "Price is required");
    }

    #[test]
    fn test_profile_update() {
        assert_eq!(
            validate_profile_update("asha", "", "98"),
            Err(ValidationError::ProfileFieldsRequired)
        );
        assert!(validate_profile_update("asha", "a@b.com", "98").is_ok());
    }
}
