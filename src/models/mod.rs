//! Request and response shapes of the Custom Vision Training API.
//!
//! Fields the service marks as required are always written (defaulted when the
//! caller leaves them out); every other field is skipped while unset, so a value
//! that went through decode and encode once is stable from then on.

mod image;
mod prediction;
mod project;
mod shape;
mod tag;

pub use image::*;
pub use prediction::*;
pub use project::*;
pub use shape::{BodyShape, ResponseShape, TypedPayload};
pub use tag::*;

use serde::{Deserialize, Deserializer};

/// Treats an explicit `null` like a missing field for always-present fields.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
