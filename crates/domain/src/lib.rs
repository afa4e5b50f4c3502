//! # stayhub-domain
//!
//! Pure domain model for the stayhub listing service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Amenities** (named feature tags attachable to rooms)
//! - Define **Categories** (classification with a rooms/experiences kind)
//! - Define **Rooms** (the primary listing entity, owned by a user)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod amenity;
pub mod category;
pub mod room;
