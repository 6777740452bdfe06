//! UI Components
//!
//! Reusable Leptos components shared by every page.

mod toast;
mod profile_dropdown;
mod sidebar;
mod modal;
mod carousel;
mod status_badge;
mod confirm_button;
mod save_button;
mod count_card;

pub use toast::ToastHost;
pub use profile_dropdown::ProfileDropdown;
pub use sidebar::{Sidebar, SidebarItem, SidebarToggle};
pub use modal::Modal;
pub use carousel::Carousel;
pub use status_badge::StatusBadge;
pub use confirm_button::ConfirmButton;
pub use save_button::{toggle_saved, SaveButton, SavedFlags};
pub use count_card::{CountCard, EmptyRow};
