pub mod admin;
pub mod billing;
pub mod dashboard;
pub mod error;
pub mod favorites;
pub mod home;
pub mod listing_detail;
pub mod listing_form;
pub mod listings;
pub mod login;
pub mod settings;

pub use admin::{admin_page, AdminVm};
pub use billing::{billing_page, BillingRow, BillingVm};
pub use dashboard::{dashboard_page, DashboardVm};
pub use error::error_page;
pub use favorites::{favorites_page, FavoritesVm};
pub use home::{home_page, HomeVm};
pub use listing_detail::{listing_detail_page, DetailVm};
pub use listing_form::{listing_form_page, ListingFormVm};
pub use listings::{listings_page, ListingsVm};
pub use login::{login_page, LoginVm};
pub use settings::{settings_page, SettingsVm};
