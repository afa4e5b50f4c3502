//! # stayhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **REST JSON API** (`/api/amenities`, `/api/rooms`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses
//! - Resolve the authenticated requester for operations that need one
//!
//! ## Dependency rule
//! Depends on `stayhub-app` (for port traits and services) and
//! `stayhub-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod auth;
pub mod error;
pub mod router;
pub mod state;
