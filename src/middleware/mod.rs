//! Cross-cutting request middleware.
//!
//! Only two concerns live here: the access log and the database-readiness
//! gate. Everything else in the pipeline (CORS, body ceiling, panic
//! boundary) is an off-the-shelf tower layer wired up in `router`.

pub mod logging;
pub mod readiness;
