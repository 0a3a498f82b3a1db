pub mod connection;
pub mod state;
