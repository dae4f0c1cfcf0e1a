use tracing::debug;

use crate::model::{Coordinates, Driver};
use crate::signal::Signal;

/// Store for the active trip.
///
/// Fields are exposed as public signals and mutated directly by the
/// consuming layer as the trip advances; the store itself provides the
/// baseline state, the derived [`in_progress`](TripStore::in_progress)
/// flag, and [`reset`](TripStore::reset).
#[derive(Clone)]
pub struct TripStore {
    pub id: Signal<Option<i64>>,
    pub user_id: Signal<Option<i64>>,
    /// Route polyline from the pickup point. A fresh store holds an
    /// empty sequence; a reset store holds `None`.
    pub origin: Signal<Option<Vec<Coordinates>>>,
    pub destination: Signal<Coordinates>,
    /// A fresh store holds an empty string; a reset store holds `None`.
    pub destination_name: Signal<Option<String>>,
    pub driver_location: Signal<Coordinates>,
    pub driver: Signal<Driver>,
    pub is_started: Signal<bool>,
    pub is_complete: Signal<bool>,
    in_progress: Signal<bool>,
}

impl TripStore {
    pub fn new() -> Self {
        let is_started = Signal::new(false);
        let is_complete = Signal::new(false);
        let in_progress = is_started
            .clone()
            .zip(is_complete.clone())
            .map(|&(started, complete)| started && !complete);

        Self {
            id: Signal::new(None),
            user_id: Signal::new(None),
            origin: Signal::new(Some(Vec::new())),
            destination: Signal::new(Coordinates::default()),
            destination_name: Signal::new(Some(String::new())),
            driver_location: Signal::new(Coordinates::default()),
            driver: Signal::new(Driver::default()),
            is_started,
            is_complete,
            in_progress,
        }
    }

    /// Started and not yet complete. Derived from the two flag signals
    /// and updated whenever either changes.
    pub fn in_progress(&self) -> &Signal<bool> {
        &self.in_progress
    }

    /// Return every field to its post-trip baseline: identifiers,
    /// origin, destination name and every driver field (including the
    /// vehicle make) to `None`, both coordinate pairs to null, both
    /// lifecycle flags to `false`.
    ///
    /// `origin` and `destination_name` end up `None` here, not at their
    /// fresh-store `Some` baselines.
    pub fn reset(&self) {
        debug!(target: "curbside::trip", "store reset");
        self.id.set(None);
        self.user_id.set(None);
        self.origin.set(None);
        self.destination.set(Coordinates::default());
        self.destination_name.set(None);
        self.driver_location.set(Coordinates::default());
        self.driver.set(Driver::default());
        self.is_started.set(false);
        self.is_complete.set(false);
    }
}

impl Default for TripStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> TripStore {
        let store = TripStore::new();
        store.id.set(Some(31));
        store.user_id.set(Some(7));
        store
            .origin
            .set(Some(vec![Coordinates::new(52.52, 13.40), Coordinates::new(52.53, 13.41)]));
        store.destination.set(Coordinates::new(52.50, 13.37));
        store.destination_name.set(Some("Potsdamer Platz".to_string()));
        store.driver_location.set(Coordinates::new(52.51, 13.39));
        store.driver.set(Driver {
            id: Some(99),
            year: Some(2019),
            make: Some("Toyota".to_string()),
            model: Some("Prius".to_string()),
            license_plate: Some("B-TX 4411".to_string()),
            user_name: Some("Nadia".to_string()),
        });
        store.is_started.set(true);
        store
    }

    #[test]
    fn fresh_store_baseline() {
        let store = TripStore::new();

        assert_eq!(store.id.get(), None);
        assert_eq!(store.user_id.get(), None);
        assert_eq!(store.origin.get(), Some(Vec::new()));
        assert!(store.destination.get().is_empty());
        assert_eq!(store.destination_name.get().as_deref(), Some(""));
        assert!(store.driver_location.get().is_empty());
        assert_eq!(store.driver.get(), Driver::default());
        assert!(!store.is_started.get());
        assert!(!store.is_complete.get());
        assert!(!store.in_progress().get());
    }

    #[test]
    fn fields_mutate_directly() {
        let store = TripStore::new();
        store.id.set(Some(4));
        store.origin.update(|origin| {
            if let Some(points) = origin {
                points.push(Coordinates::new(1.0, 2.0));
            }
        });

        assert_eq!(store.id.get(), Some(4));
        assert_eq!(store.origin.get(), Some(vec![Coordinates::new(1.0, 2.0)]));
    }

    #[test]
    fn reset_clears_every_field() {
        let store = populated();
        store.is_complete.set(true);

        store.reset();

        assert_eq!(store.id.get(), None);
        assert_eq!(store.user_id.get(), None);
        assert_eq!(store.origin.get(), None);
        assert!(store.destination.get().is_empty());
        assert_eq!(store.destination_name.get(), None);
        assert!(store.driver_location.get().is_empty());
        assert_eq!(store.driver.get(), Driver::default());
        assert!(!store.is_started.get());
        assert!(!store.is_complete.get());
    }

    #[test]
    fn reset_clears_vehicle_make() {
        let store = populated();
        assert_eq!(store.driver.get().make.as_deref(), Some("Toyota"));

        store.reset();
        assert_eq!(store.driver.get().make, None);
    }

    #[test]
    fn reset_nulls_origin_rather_than_emptying_it() {
        let store = populated();
        store.reset();
        assert_eq!(store.origin.get(), None);
        assert_ne!(store.origin.get(), TripStore::new().origin.get());
    }

    #[test]
    fn reset_twice_is_idempotent() {
        let store = populated();

        store.reset();
        let first = (
            store.id.get(),
            store.origin.get(),
            store.destination.get(),
            store.destination_name.get(),
            store.driver.get(),
            store.is_started.get(),
            store.is_complete.get(),
        );

        store.reset();
        let second = (
            store.id.get(),
            store.origin.get(),
            store.destination.get(),
            store.destination_name.get(),
            store.driver.get(),
            store.is_started.get(),
            store.is_complete.get(),
        );

        assert_eq!(first, second);
    }

    #[test]
    fn in_progress_follows_the_lifecycle_flags() {
        let store = TripStore::new();
        assert!(!store.in_progress().get());

        store.is_started.set(true);
        assert!(store.in_progress().get());

        store.is_complete.set(true);
        assert!(!store.in_progress().get());

        store.reset();
        assert!(!store.in_progress().get());
    }
}
