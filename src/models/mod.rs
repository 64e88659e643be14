pub mod place;
pub mod review;

pub use place::{NewPlace, Place, PlaceWithReviews};
pub use review::{NewReview, Review};

use serde::{Deserialize, Deserializer};

// Treat an explicit JSON null the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
