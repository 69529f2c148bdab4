//! Multi-tenant car rental backend: agencies, their cars and public bookings,
//! with role and agency scoped access control.

pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
