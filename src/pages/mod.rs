//! Pages
//!
//! One top-level component per server-rendered host page.

mod admin;
mod customer_home;
mod housing;
pub(crate) mod loadable;
mod login;
mod my_bookings;
mod my_orders;
mod profile;
mod provider;
mod services;
mod signup;
mod tiffin;

pub use admin::AdminDashboard;
pub use customer_home::CustomerHome;
pub use housing::HousingPage;
pub use login::LoginPage;
pub use my_bookings::MyBookingsPage;
pub use my_orders::MyOrdersPage;
pub use profile::ProfilePage;
pub use provider::ProviderDashboard;
pub use services::ServicesPage;
pub use signup::SignupPage;
pub use tiffin::TiffinPage;
