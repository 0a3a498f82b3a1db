pub mod client;
pub mod single_flight;

pub use client::{HttpApi, RentalsApi};
