mod admin_tests;
mod auth_tests;
mod billing_tests;
mod favorites_tests;
mod landlord_tests;
mod listings_tests;
mod settings_tests;
