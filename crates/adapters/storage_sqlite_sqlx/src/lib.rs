//! # stayhub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `stayhub-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `stayhub-app` (for port traits) and `stayhub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod amenity_repo;
pub mod category_repo;
pub mod error;
pub mod pool;
pub mod room_repo;

pub use amenity_repo::SqliteAmenityRepository;
pub use category_repo::SqliteCategoryRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
pub use room_repo::SqliteRoomRepository;
