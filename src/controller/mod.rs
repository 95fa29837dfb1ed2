//! HTTP handler groups mounted by the route composer.
//!
//! `core` serves the diagnostic surface (banner, health, not-found). The
//! remaining modules are the mountable groups for the business route
//! collaborators: each exposes `routes()`, runs behind the database-readiness
//! gate, and reports failures as [`AppError`](crate::error::AppError) values;
//! an explicit status attached to the error is honored when the response is
//! rendered.

pub mod attendance;
pub mod core;
pub mod customers;
pub mod reports;
pub mod whatsapp;
