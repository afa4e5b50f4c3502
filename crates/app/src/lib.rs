//! # stayhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `AmenityRepository` — CRUD for amenities
//!   - `CategoryRepository` — read access to the category catalog
//!   - `RoomRepository` — CRUD for rooms (including their amenity set)
//! - Define **driving/inbound ports** as use-case structs:
//!   - `AmenityService` — create, list, get, update, delete
//!   - `RoomService` — create (with reference checks), list, get, update, delete
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `stayhub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
