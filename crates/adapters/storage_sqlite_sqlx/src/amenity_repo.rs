//! `SQLite` implementation of [`AmenityRepository`].

use std::future::Future;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use stayhub_app::ports::AmenityRepository;
use stayhub_domain::amenity::Amenity;
use stayhub_domain::error::StayHubError;
use stayhub_domain::id::AmenityId;
use stayhub_domain::time::Timestamp;

use crate::error::StorageError;

fn decode_timestamp(value: &str) -> Result<Timestamp, sqlx::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

/// Wrapper for converting database rows into domain [`Amenity`].
struct Wrapper(Amenity);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Amenity> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let description: Option<String> = row.try_get("description")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        let id = AmenityId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Amenity {
            id,
            name,
            description,
            created_at: decode_timestamp(&created_at)?,
            updated_at: decode_timestamp(&updated_at)?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO amenities (id, name, description, created_at, updated_at) VALUES (?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM amenities WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM amenities";
const UPDATE: &str = "UPDATE amenities SET name = ?, description = ?, updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM amenities WHERE id = ?";

/// `SQLite`-backed amenity repository.
pub struct SqliteAmenityRepository {
    pool: SqlitePool,
}

impl SqliteAmenityRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl AmenityRepository for SqliteAmenityRepository {
    fn create(&self, amenity: Amenity) -> impl Future<Output = Result<Amenity, StayHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(amenity.id.to_string())
                .bind(&amenity.name)
                .bind(amenity.description.as_deref())
                .bind(amenity.created_at.to_rfc3339())
                .bind(amenity.updated_at.to_rfc3339())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(amenity)
        }
    }

    fn get_by_id(
        &self,
        id: AmenityId,
    ) -> impl Future<Output = Result<Option<Amenity>, StayHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Amenity>, StayHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(&self, amenity: Amenity) -> impl Future<Output = Result<Amenity, StayHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE)
                .bind(&amenity.name)
                .bind(amenity.description.as_deref())
                .bind(amenity.updated_at.to_rfc3339())
                .bind(amenity.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(amenity)
        }
    }

    fn delete(&self, id: AmenityId) -> impl Future<Output = Result<(), StayHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
