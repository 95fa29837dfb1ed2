//! Backend core for the attendly attendance service.
//!
//! This crate is the bootstrap and lifecycle layer of the API: it resolves the
//! execution context, prepares storage, owns the database connection, and
//! composes the HTTP pipeline that the business route groups mount into.
//!
//! # Architecture
//!
//! - **Configuration** (`config`) - Environment-based execution context,
//!   including the persistent/ephemeral classification and storage-root
//!   resolution
//! - **Storage** (`storage`) - Named storage areas created best-effort under
//!   the resolved root
//! - **Connection** (`connection`) - Process-wide single-flight cache for the
//!   pooled database connection
//! - **State** (`state`) - Shared application state cloned into every handler
//! - **Router** (`router`) - Route composition and the ordered middleware
//!   pipeline
//! - **Controller** (`controller`) - Diagnostic endpoints and the mountable
//!   handler groups
//! - **Middleware** (`middleware`) - Access logging and the database-readiness
//!   gate
//! - **Error** (`error`) - Application error types and their uniform HTTP
//!   rendering
//!
//! # Execution modes
//!
//! The same composed [`axum::Router`] serves both deployment shapes. A
//! persistent process binds its own listener (see `main.rs`); hosts that
//! manage the listener themselves drive the router as a tower `Service`, one
//! call per invocation, and rely on the readiness gate for connectivity.

pub mod config;
pub mod connection;
pub mod controller;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod startup;
pub mod state;
pub mod storage;
