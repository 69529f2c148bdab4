pub mod access;
pub mod agency;
pub mod analytics;
pub mod auth;
pub mod booking;
pub mod fleet;
pub mod password;
pub mod token;
