pub mod agency;
pub mod analytics;
pub mod auth;
pub mod booking;
pub mod car;
