//! Data shapes held by the stores.
//!
//! Everything here is a plain serde-derived record; the stores own the
//! mutation rules.

mod location;
mod trip;

pub use location::{Coordinates, DevicePosition, GeocodedPlace, SelectedLocation};
pub use trip::Driver;
