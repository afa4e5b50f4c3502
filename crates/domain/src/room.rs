//! Room — the primary listing entity, owned by a user.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::amenity::Amenity;
use crate::category::Category;
use crate::error::{StayHubError, ValidationError};
use crate::id::{AmenityId, CategoryId, RoomId, UserId};
use crate::time::{Timestamp, now};

/// What part of the property a listing offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomKind {
    EntirePlace,
    PrivateRoom,
    SharedRoom,
}

impl RoomKind {
    /// Stable string form used for storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EntirePlace => "entire_place",
            Self::PrivateRoom => "private_room",
            Self::SharedRoom => "shared_room",
        }
    }
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomKind {
    type Err = UnknownRoomKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entire_place" => Ok(Self::EntirePlace),
            "private_room" => Ok(Self::PrivateRoom),
            "shared_room" => Ok(Self::SharedRoom),
            other => Err(UnknownRoomKind(other.to_string())),
        }
    }
}

/// Parse error for [`RoomKind`].
#[derive(Debug, thiserror::Error)]
#[error("unknown room kind: {0}")]
pub struct UnknownRoomKind(String);

/// A listing. The owner is bound once at creation and never changes;
/// the category must classify rooms, not experiences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub owner_id: UserId,
    pub category_id: CategoryId,
    pub amenity_ids: Vec<AmenityId>,
    pub name: String,
    pub country: String,
    pub city: String,
    /// Price per night, in whole currency units.
    pub price: u32,
    /// Number of rooms in the property.
    pub rooms: u32,
    pub toilets: u32,
    pub description: String,
    pub address: String,
    pub pet_friendly: bool,
    pub kind: RoomKind,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Room {
    /// Create a builder for constructing a [`Room`].
    ///
    /// The owner and category are required up front: the owner is set
    /// exactly once, from the authenticated requester, and is never
    /// settable from request input.
    #[must_use]
    pub fn builder(owner_id: UserId, category_id: CategoryId) -> RoomBuilder {
        RoomBuilder {
            id: None,
            owner_id,
            category_id,
            amenity_ids: Vec::new(),
            name: None,
            country: None,
            city: None,
            price: None,
            rooms: None,
            toilets: None,
            description: None,
            address: None,
            pet_friendly: None,
            kind: None,
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`StayHubError::Validation`] when `name` is empty or
    /// `price` is zero.
    pub fn validate(&self) -> Result<(), StayHubError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.price == 0 {
            return Err(ValidationError::ZeroPrice.into());
        }
        Ok(())
    }

    /// Merge the provided fields of `patch` into this room and bump
    /// `updated_at`. Absent fields are left unchanged. The owner is
    /// deliberately not patchable.
    pub fn apply(&mut self, patch: RoomPatch, ts: Timestamp) {
        if let Some(category_id) = patch.category_id {
            self.category_id = category_id;
        }
        if let Some(amenity_ids) = patch.amenity_ids {
            self.amenity_ids = amenity_ids;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(country) = patch.country {
            self.country = country;
        }
        if let Some(city) = patch.city {
            self.city = city;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(rooms) = patch.rooms {
            self.rooms = rooms;
        }
        if let Some(toilets) = patch.toilets {
            self.toilets = toilets;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(pet_friendly) = patch.pet_friendly {
            self.pet_friendly = pet_friendly;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        self.updated_at = ts;
    }
}

/// Partial update for a [`Room`]. Absent fields are left unchanged.
///
/// The category and amenities are written by id (serialized as `category`
/// and `amenities`, matching the creation payload) even though reads
/// return them nested.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RoomPatch {
    #[serde(rename = "category")]
    pub category_id: Option<CategoryId>,
    #[serde(rename = "amenities")]
    pub amenity_ids: Option<Vec<AmenityId>>,
    pub name: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub price: Option<u32>,
    pub rooms: Option<u32>,
    pub toilets: Option<u32>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub pet_friendly: Option<bool>,
    pub kind: Option<RoomKind>,
}

/// Reduced projection used in collection listings.
///
/// Deliberately omits detail-only fields (owner, description, address,
/// amenity/category data).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSummary {
    pub id: RoomId,
    pub name: String,
    pub country: String,
    pub city: String,
    pub price: u32,
    pub kind: RoomKind,
}

impl From<&Room> for RoomSummary {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id,
            name: room.name.clone(),
            country: room.country.clone(),
            city: room.city.clone(),
            price: room.price,
            kind: room.kind,
        }
    }
}

/// Full-field projection with the category and amenity records resolved.
///
/// `category` is optional: the catalog may retire a category after rooms
/// were filed under it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDetail {
    pub id: RoomId,
    pub owner_id: UserId,
    pub name: String,
    pub country: String,
    pub city: String,
    pub price: u32,
    pub rooms: u32,
    pub toilets: u32,
    pub description: String,
    pub address: String,
    pub pet_friendly: bool,
    pub kind: RoomKind,
    pub category: Option<Category>,
    pub amenities: Vec<Amenity>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl RoomDetail {
    /// Assemble the detail projection from a room and its resolved references.
    #[must_use]
    pub fn assemble(room: Room, category: Option<Category>, amenities: Vec<Amenity>) -> Self {
        Self {
            id: room.id,
            owner_id: room.owner_id,
            name: room.name,
            country: room.country,
            city: room.city,
            price: room.price,
            rooms: room.rooms,
            toilets: room.toilets,
            description: room.description,
            address: room.address,
            pet_friendly: room.pet_friendly,
            kind: room.kind,
            category,
            amenities,
            created_at: room.created_at,
            updated_at: room.updated_at,
        }
    }
}

/// Step-by-step builder for [`Room`].
#[derive(Debug)]
pub struct RoomBuilder {
    id: Option<RoomId>,
    owner_id: UserId,
    category_id: CategoryId,
    amenity_ids: Vec<AmenityId>,
    name: Option<String>,
    country: Option<String>,
    city: Option<String>,
    price: Option<u32>,
    rooms: Option<u32>,
    toilets: Option<u32>,
    description: Option<String>,
    address: Option<String>,
    pet_friendly: Option<bool>,
    kind: Option<RoomKind>,
}

impl RoomBuilder {
    #[must_use]
    pub fn id(mut self, id: RoomId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn amenity(mut self, id: AmenityId) -> Self {
        self.amenity_ids.push(id);
        self
    }

    #[must_use]
    pub fn amenities(mut self, ids: impl IntoIterator<Item = AmenityId>) -> Self {
        self.amenity_ids.extend(ids);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    #[must_use]
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    #[must_use]
    pub fn price(mut self, price: u32) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn rooms(mut self, rooms: u32) -> Self {
        self.rooms = Some(rooms);
        self
    }

    #[must_use]
    pub fn toilets(mut self, toilets: u32) -> Self {
        self.toilets = Some(toilets);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn pet_friendly(mut self, pet_friendly: bool) -> Self {
        self.pet_friendly = Some(pet_friendly);
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: RoomKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Consume the builder, validate, and return a [`Room`].
    ///
    /// # Errors
    ///
    /// Returns [`StayHubError::Validation`] if `name` is missing or empty,
    /// or `price` is missing or zero.
    pub fn build(self) -> Result<Room, StayHubError> {
        let ts = now();
        let room = Room {
            id: self.id.unwrap_or_default(),
            owner_id: self.owner_id,
            category_id: self.category_id,
            amenity_ids: self.amenity_ids,
            name: self.name.unwrap_or_default(),
            country: self.country.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            rooms: self.rooms.unwrap_or(1),
            toilets: self.toilets.unwrap_or(1),
            description: self.description.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            pet_friendly: self.pet_friendly.unwrap_or(true),
            kind: self.kind.unwrap_or(RoomKind::EntirePlace),
            created_at: ts,
            updated_at: ts,
        };
        room.validate()?;
        Ok(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> RoomBuilder {
        Room::builder(UserId::new(), CategoryId::new())
    }

    #[test]
    fn should_build_valid_room_when_name_and_price_provided() {
        let room = builder()
            .name("Seaside flat")
            .price(120)
            .city("Lisbon")
            .build()
            .unwrap();
        assert_eq!(room.name, "Seaside flat");
        assert_eq!(room.price, 120);
        assert_eq!(room.kind, RoomKind::EntirePlace);
        assert!(room.pet_friendly);
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = builder().price(80).build();
        assert!(matches!(
            result,
            Err(StayHubError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_return_validation_error_when_price_is_zero() {
        let result = builder().name("Attic").build();
        assert!(matches!(
            result,
            Err(StayHubError::Validation(ValidationError::ZeroPrice))
        ));
    }

    #[test]
    fn should_collect_amenities_in_order() {
        let a = AmenityId::new();
        let b = AmenityId::new();
        let room = builder()
            .name("Loft")
            .price(90)
            .amenity(a)
            .amenity(b)
            .build()
            .unwrap();
        assert_eq!(room.amenity_ids, vec![a, b]);
    }

    #[test]
    fn should_merge_patch_without_touching_owner() {
        let owner = UserId::new();
        let mut room = Room::builder(owner, CategoryId::new())
            .name("Cabin")
            .price(60)
            .build()
            .unwrap();

        let patch = RoomPatch {
            price: Some(75),
            pet_friendly: Some(false),
            ..RoomPatch::default()
        };
        room.apply(patch, now());

        assert_eq!(room.owner_id, owner);
        assert_eq!(room.price, 75);
        assert!(!room.pet_friendly);
        assert_eq!(room.name, "Cabin");
    }

    #[test]
    fn should_roundtrip_kind_through_str() {
        let kind: RoomKind = "private_room".parse().unwrap();
        assert_eq!(kind, RoomKind::PrivateRoom);
        assert!(RoomKind::from_str("penthouse").is_err());
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let room = builder().name("Studio").price(45).build().unwrap();
        let json = serde_json::to_string(&room).unwrap();
        let parsed: Room = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, room.id);
        assert_eq!(parsed.owner_id, room.owner_id);
        assert_eq!(parsed.price, 45);
    }

    #[test]
    fn should_omit_detail_fields_from_summary() {
        let room = builder()
            .name("Villa")
            .price(300)
            .description("Secluded")
            .build()
            .unwrap();
        let summary = RoomSummary::from(&room);
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["name"], "Villa");
        assert!(json.get("description").is_none());
        assert!(json.get("owner_id").is_none());
        assert!(json.get("address").is_none());
        assert!(json.get("amenities").is_none());
    }

    #[test]
    fn should_assemble_detail_with_resolved_references() {
        use crate::category::CategoryKind;

        let amenity = Amenity::builder().name("Wifi").build().unwrap();
        let category = Category::new("Tiny homes", CategoryKind::Rooms);
        let room = Room::builder(UserId::new(), category.id)
            .name("Hut")
            .price(30)
            .amenity(amenity.id)
            .build()
            .unwrap();

        let detail = RoomDetail::assemble(room.clone(), Some(category.clone()), vec![amenity]);
        assert_eq!(detail.id, room.id);
        assert_eq!(detail.owner_id, room.owner_id);
        assert_eq!(detail.category.as_ref().map(|c| c.id), Some(category.id));
        assert_eq!(detail.amenities.len(), 1);
    }
}
