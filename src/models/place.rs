use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Review;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub location: String,
    pub image_url: String,
    pub views: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// A place together with its reviews, as returned by the detail endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceWithReviews {
    #[serde(flatten)]
    pub place: Place,
    pub reviews: Vec<Review>,
}

/// Client-supplied fields for a new place. Anything else in the body
/// (`id`, `views`, timestamps) is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewPlace {
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub image_url: String,
}
