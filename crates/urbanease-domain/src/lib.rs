//! UrbanEase Domain Layer
//!
//! Entities and view rules shared by every page of the UI:
//! - entity: core entity trait and error types
//! - status: status enums and their badges
//! - listing / order / account: records as the backend returns them
//! - endpoints: REST paths and response envelopes
//! - validation / format: form checks and display helpers
//! - toggle / pending: optimistic update state
//! - draft: pending-listing persistence across the payment redirect
//!
//! Nothing here touches the DOM, so it all runs under native `cargo test`.

mod entity;
mod status;
mod listing;
mod order;
mod account;
mod endpoints;
mod validation;
mod format;
mod toggle;
mod pending;
mod draft;

pub use entity::{Entity, DomainError, DomainResult};
pub use status::{
    Badge, ListingStatus, VerificationStatus, OrderStatus, BookingStatus, UserStatus,
    StatusAction, availability_badge, kitchen_badge,
};
pub use listing::{
    HousingKind, ListingKind, HouseListing, ListingImage, TiffinListing, ServiceListing,
    ServiceCategory, DietType, HousingDetail, HousingListingDetail, ProviderCard, FeatureBadge,
    HousingCard, KitchenCard, KitchenInfo, KitchenDetail, ServiceCard, Meal,
};
pub use order::{FoodOrder, ServiceBooking, order_total};
pub use account::{
    AccountType, User, ProviderStatus, ProviderProfile, ProviderGate, Banner, PendingProvider,
    ProviderProfileRow, ProviderDetail, UserProfile, DashboardStats,
};
pub use endpoints::{
    ApiError, ApiResult, Envelope, Ack, SavedFlag, ActiveCount, PendingCount, KitchenToggle,
    LoginResponse, StatusUpdate, SuspendResult, MealList, decode, paths,
};
pub use validation::{
    ValidationError, ValidationResult, LoginRequest, SignupForm, SignupRequest, ProfileUpdate,
    MealOrderRequest, BookingRequest, Weekday, validate_login, validate_signup, validate_otp,
    validate_aadhaar, validate_profile_photo, validate_profile_update, validate_meal_order,
    validate_booking, require_fields, diet_from_flags, summarize_days, MAX_PHOTO_BYTES,
};
pub use format::{
    inr, inr_grouped, inr_rounded, title_case, humanize, time_12h, truncate, mask_aadhaar,
    image_url, or_dash,
};
pub use toggle::{Optimistic, SaveRequest};
pub use pending::{PendingQueue, PendingHouse, PendingTiffin, PendingService};
pub use draft::{
    ListingDraft, DraftMeta, DraftState, DraftStore, ListingSubmitter, MemoryDraftStore,
    ResumeOutcome, begin_payment, resume_after_payment, retry_pending, stranded_draft, is_payment_success,
    strip_payment_param, DRAFT_KEY,
};
