use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub place_id: i64,
    pub user_name: String,
    pub rating: i64,
    pub comment: String,
    pub created_at: String,
}

/// Client-supplied fields for a new review. The place id always comes from
/// the request path, so a `placeId` in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewReview {
    #[serde(deserialize_with = "super::null_as_default")]
    pub user_name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub rating: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub comment: String,
}
