//! Frontend Models
//!
//! Data structures matching the item service's JSON.

use serde::{Deserialize, Deserializer};

/// One marketplace listing (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    /// Empty when the listing has no photo
    #[serde(default)]
    pub image_filename: String,
}

impl Item {
    pub fn has_image(&self) -> bool {
        !self.image_filename.is_empty()
    }
}

/// Body of `GET /items` and `GET /search`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemListResponse {
    /// The backend sends `null` for an empty collection.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<Item>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Item>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Item>>::deserialize(deserializer)?.unwrap_or_default())
}
