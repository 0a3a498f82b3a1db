pub mod billing;
pub mod draft;
pub mod listing;
pub mod user;
