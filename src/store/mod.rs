//! Application state stores.
//!
//! Each store owns its fields as [`Signal`](crate::signal::Signal)s and
//! offers the mutators and reset the UI layer drives. Stores are
//! independent leaves; instances are passed by handle, there are no
//! ambient singletons.

mod location;
mod trip;

pub use location::LocationStore;
pub use trip::TripStore;
