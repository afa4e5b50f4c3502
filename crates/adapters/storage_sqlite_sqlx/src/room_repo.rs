//! `SQLite` implementation of [`RoomRepository`].
//!
//! A room and its amenity join rows form one aggregate: writes touch both
//! inside a single transaction, so a failed write persists nothing.

use std::collections::HashMap;
use std::future::Future;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use stayhub_app::ports::RoomRepository;
use stayhub_domain::error::StayHubError;
use stayhub_domain::id::{AmenityId, CategoryId, RoomId, UserId};
use stayhub_domain::room::{Room, RoomKind};
use stayhub_domain::time::Timestamp;

use crate::error::StorageError;

fn decode_timestamp(value: &str) -> Result<Timestamp, sqlx::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

fn get_u32(row: &SqliteRow, column: &str) -> Result<u32, sqlx::Error> {
    let value: i64 = row.try_get(column)?;
    u32::try_from(value).map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

fn decode_amenity_id(value: &str) -> Result<AmenityId, StorageError> {
    AmenityId::from_str(value)
        .map_err(|err| StorageError::Database(sqlx::Error::Decode(Box::new(err))))
}

/// Wrapper for converting database rows into domain [`Room`].
///
/// The amenity set lives in the join table and is loaded separately;
/// the wrapper leaves it empty.
struct Wrapper(Room);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let owner_id: String = row.try_get("owner_id")?;
        let category_id: String = row.try_get("category_id")?;
        let kind: String = row.try_get("kind")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        let id = RoomId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let owner_id =
            UserId::from_str(&owner_id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let category_id = CategoryId::from_str(&category_id)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let kind = RoomKind::from_str(&kind).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Room {
            id,
            owner_id,
            category_id,
            amenity_ids: Vec::new(),
            name: row.try_get("name")?,
            country: row.try_get("country")?,
            city: row.try_get("city")?,
            price: get_u32(row, "price")?,
            rooms: get_u32(row, "rooms")?,
            toilets: get_u32(row, "toilets")?,
            description: row.try_get("description")?,
            address: row.try_get("address")?,
            pet_friendly: row.try_get("pet_friendly")?,
            kind,
            created_at: decode_timestamp(&created_at)?,
            updated_at: decode_timestamp(&updated_at)?,
        }))
    }
}

const INSERT: &str = "INSERT INTO rooms (id, owner_id, category_id, name, country, city, price, \
     rooms, toilets, description, address, pet_friendly, kind, created_at, updated_at) \
     VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM rooms WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM rooms";
const UPDATE: &str = "UPDATE rooms SET category_id = ?, name = ?, country = ?, city = ?, \
     price = ?, rooms = ?, toilets = ?, description = ?, address = ?, pet_friendly = ?, \
     kind = ?, updated_at = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM rooms WHERE id = ?";

const INSERT_AMENITY: &str =
    "INSERT INTO room_amenities (room_id, amenity_id, position) VALUES (?, ?, ?)";
const DELETE_AMENITIES: &str = "DELETE FROM room_amenities WHERE room_id = ?";
const SELECT_AMENITIES: &str =
    "SELECT amenity_id FROM room_amenities WHERE room_id = ? ORDER BY position";
const SELECT_ALL_AMENITIES: &str =
    "SELECT room_id, amenity_id FROM room_amenities ORDER BY room_id, position";

/// `SQLite`-backed room repository.
pub struct SqliteRoomRepository {
    pool: SqlitePool,
}

impl SqliteRoomRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl RoomRepository for SqliteRoomRepository {
    fn create(&self, room: Room) -> impl Future<Output = Result<Room, StayHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            sqlx::query(INSERT)
                .bind(room.id.to_string())
                .bind(room.owner_id.to_string())
                .bind(room.category_id.to_string())
                .bind(&room.name)
                .bind(&room.country)
                .bind(&room.city)
                .bind(i64::from(room.price))
                .bind(i64::from(room.rooms))
                .bind(i64::from(room.toilets))
                .bind(&room.description)
                .bind(&room.address)
                .bind(room.pet_friendly)
                .bind(room.kind.as_str())
                .bind(room.created_at.to_rfc3339())
                .bind(room.updated_at.to_rfc3339())
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;

            for (amenity_id, position) in room.amenity_ids.iter().zip(0i64..) {
                sqlx::query(INSERT_AMENITY)
                    .bind(room.id.to_string())
                    .bind(amenity_id.to_string())
                    .bind(position)
                    .execute(&mut *tx)
                    .await
                    .map_err(StorageError::from)?;
            }

            tx.commit().await.map_err(StorageError::from)?;

            Ok(room)
        }
    }

    fn get_by_id(
        &self,
        id: RoomId,
    ) -> impl Future<Output = Result<Option<Room>, StayHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            let Some(Wrapper(mut room)) = row else {
                return Ok(None);
            };

            let amenity_rows: Vec<(String,)> = sqlx::query_as(SELECT_AMENITIES)
                .bind(id.to_string())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            room.amenity_ids = amenity_rows
                .iter()
                .map(|(value,)| decode_amenity_id(value))
                .collect::<Result<_, _>>()?;

            Ok(Some(room))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Room>, StayHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            let amenity_rows: Vec<(String, String)> = sqlx::query_as(SELECT_ALL_AMENITIES)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            let mut by_room: HashMap<String, Vec<AmenityId>> = HashMap::new();
            for (room_id, amenity_id) in &amenity_rows {
                by_room
                    .entry(room_id.clone())
                    .or_default()
                    .push(decode_amenity_id(amenity_id)?);
            }

            Ok(rows
                .into_iter()
                .map(|Wrapper(mut room)| {
                    room.amenity_ids = by_room.remove(&room.id.to_string()).unwrap_or_default();
                    room
                })
                .collect())
        }
    }

    fn update(&self, room: Room) -> impl Future<Output = Result<Room, StayHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            sqlx::query(UPDATE)
                .bind(room.category_id.to_string())
                .bind(&room.name)
                .bind(&room.country)
                .bind(&room.city)
                .bind(i64::from(room.price))
                .bind(i64::from(room.rooms))
                .bind(i64::from(room.toilets))
                .bind(&room.description)
                .bind(&room.address)
                .bind(room.pet_friendly)
                .bind(room.kind.as_str())
                .bind(room.updated_at.to_rfc3339())
                .bind(room.id.to_string())
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;

            sqlx::query(DELETE_AMENITIES)
                .bind(room.id.to_string())
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;

            for (amenity_id, position) in room.amenity_ids.iter().zip(0i64..) {
                sqlx::query(INSERT_AMENITY)
                    .bind(room.id.to_string())
                    .bind(amenity_id.to_string())
                    .bind(position)
                    .execute(&mut *tx)
                    .await
                    .map_err(StorageError::from)?;
            }

            tx.commit().await.map_err(StorageError::from)?;

            Ok(room)
        }
    }

    fn delete(&self, id: RoomId) -> impl Future<Output = Result<(), StayHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            sqlx::query(DELETE_AMENITIES)
                .bind(id.to_string())
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;

            sqlx::query(DELETE_BY_ID)
                .bind(id.to_string())
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;

            tx.commit().await.map_err(StorageError::from)?;

            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteRoomRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteRoomRepository::new(db.pool().clone())
    }

    fn test_room(amenities: Vec<AmenityId>) -> Room {
        Room::builder(UserId::new(), CategoryId::new())
            .name("Seaside flat")
            .country("Portugal")
            .city("Lisbon")
            .price(120)
            .rooms(2)
            .toilets(1)
            .description("Bright flat near the beach")
            .address("Rua do Mar 7")
            .pet_friendly(false)
            .kind(RoomKind::PrivateRoom)
            .amenities(amenities)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_and_retrieve_room_with_amenities_in_order() {
        let repo = setup().await;
        let a = AmenityId::new();
        let b = AmenityId::new();
        let room = test_room(vec![a, b]);
        let id = room.id;

        repo.create(room).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.id, id);
        assert_eq!(fetched.name, "Seaside flat");
        assert_eq!(fetched.price, 120);
        assert_eq!(fetched.kind, RoomKind::PrivateRoom);
        assert!(!fetched.pet_friendly);
        assert_eq!(fetched.amenity_ids, vec![a, b]);
    }

    #[tokio::test]
    async fn should_return_none_when_room_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(RoomId::new()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_all_rooms_with_their_amenity_sets() {
        let repo = setup().await;
        let a = AmenityId::new();
        let with_amenity = test_room(vec![a]);
        let bare = test_room(vec![]);
        let with_amenity_id = with_amenity.id;
        repo.create(with_amenity).await.unwrap();
        repo.create(bare).await.unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 2);

        let fetched = all.iter().find(|r| r.id == with_amenity_id).unwrap();
        assert_eq!(fetched.amenity_ids, vec![a]);
        let other = all.iter().find(|r| r.id != with_amenity_id).unwrap();
        assert!(other.amenity_ids.is_empty());
    }

    #[tokio::test]
    async fn should_update_room_fields_and_replace_amenity_set() {
        let repo = setup().await;
        let a = AmenityId::new();
        let b = AmenityId::new();
        let mut room = test_room(vec![a]);
        let id = room.id;
        repo.create(room.clone()).await.unwrap();

        room.name = "Seaside flat deluxe".to_string();
        room.price = 150;
        room.amenity_ids = vec![b];
        repo.update(room).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Seaside flat deluxe");
        assert_eq!(fetched.price, 150);
        assert_eq!(fetched.amenity_ids, vec![b]);
    }

    #[tokio::test]
    async fn should_preserve_owner_through_roundtrip() {
        let repo = setup().await;
        let room = test_room(vec![]);
        let id = room.id;
        let owner = room.owner_id;
        repo.create(room).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.owner_id, owner);
    }

    #[tokio::test]
    async fn should_delete_room_and_its_join_rows() {
        let repo = setup().await;
        let a = AmenityId::new();
        let doomed = test_room(vec![a]);
        let survivor = test_room(vec![a]);
        let doomed_id = doomed.id;
        let survivor_id = survivor.id;
        repo.create(doomed).await.unwrap();
        repo.create(survivor).await.unwrap();

        repo.delete(doomed_id).await.unwrap();

        assert!(repo.get_by_id(doomed_id).await.unwrap().is_none());
        let kept = repo.get_by_id(survivor_id).await.unwrap().unwrap();
        assert_eq!(kept.amenity_ids, vec![a]);
    }
}
