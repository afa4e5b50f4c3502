//! `SQLite` implementation of [`CategoryRepository`].
//!
//! The port is read-only; `insert` and `seed_defaults` are inherent
//! methods because categories are provisioned out-of-band (by an
//! operator, a fixture, or the daemon's startup seeding).

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use stayhub_app::ports::CategoryRepository;
use stayhub_domain::category::{Category, CategoryKind};
use stayhub_domain::error::StayHubError;
use stayhub_domain::id::CategoryId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Category`].
struct Wrapper(Category);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Category> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let kind: String = row.try_get("kind")?;

        let id = CategoryId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let kind =
            CategoryKind::from_str(&kind).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Category { id, name, kind }))
    }
}

const INSERT: &str = "INSERT INTO categories (id, name, kind) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM categories WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM categories";
const COUNT: &str = "SELECT COUNT(*) FROM categories";

/// `SQLite`-backed category repository.
pub struct SqliteCategoryRepository {
    pool: SqlitePool,
}

impl SqliteCategoryRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a category.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the insert fails.
    pub async fn insert(&self, category: &Category) -> Result<(), StayHubError> {
        sqlx::query(INSERT)
            .bind(category.id.to_string())
            .bind(&category.name)
            .bind(category.kind.as_str())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(())
    }

    /// Seed the two standard categories into an empty table. A table
    /// that already holds categories is left untouched.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the count or inserts fail.
    pub async fn seed_defaults(&self) -> Result<(), StayHubError> {
        let (count,): (i64,) = sqlx::query_as(COUNT)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::from)?;

        if count > 0 {
            return Ok(());
        }

        self.insert(&Category::new("Rooms", CategoryKind::Rooms))
            .await?;
        self.insert(&Category::new("Experiences", CategoryKind::Experiences))
            .await?;
        Ok(())
    }
}

impl CategoryRepository for SqliteCategoryRepository {
    fn get_by_id(
        &self,
        id: CategoryId,
    ) -> impl Future<Output = Result<Option<Category>, StayHubError>> + Send {
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

    fn get_all(&self) -> impl Future<Output = Result<Vec<Category>, StayHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
