//! # Curbside
//!
//! Shared state stores for a ride-hailing client.
//!
//! Curbside provides two levels of abstraction:
//!
//! ## Signals (low-level primitive)
//!
//! - `Signal<T>` - Shared values with explicit change notification
//! - `WatchGuard` - RAII deregistration for watchers
//! - Derived values via `map` and `zip`
//!
//! ## Stores (application state)
//!
//! - `LocationStore` - The rider's selected location and the device's
//!   current position
//! - `TripStore` - Trip identity, route, driver, and lifecycle flags
//!
//! Stores emit `tracing` debug events on every mutation; the crate never
//! installs a subscriber itself.

pub mod model;
pub mod signal;
pub mod store;

// Re-export main types for convenience
pub use model::{Coordinates, DevicePosition, Driver, GeocodedPlace, SelectedLocation};
pub use signal::{Signal, WatchGuard};
pub use store::{LocationStore, TripStore};
