//! Category — classifies a listing as a room or an experience.
//!
//! Categories are provisioned by an external catalog; this core reads
//! them to validate room creation and never mutates them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::id::CategoryId;

/// Discriminator for what a category classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    Rooms,
    Experiences,
}

impl CategoryKind {
    /// Stable string form used for storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rooms => "rooms",
            Self::Experiences => "experiences",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryKind {
    type Err = UnknownCategoryKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rooms" => Ok(Self::Rooms),
            "experiences" => Ok(Self::Experiences),
            other => Err(UnknownCategoryKind(other.to_string())),
        }
    }
}

/// Parse error for [`CategoryKind`].
#[derive(Debug, thiserror::Error)]
#[error("unknown category kind: {0}")]
pub struct UnknownCategoryKind(String);

/// A classification entity referenced by rooms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub kind: CategoryKind,
}

impl Category {
    /// Construct a category with a fresh id.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            kind,
        }
    }
}
