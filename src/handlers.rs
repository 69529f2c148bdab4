pub mod admin;
pub mod agency;
pub mod auth;
pub mod health;
pub mod public;
