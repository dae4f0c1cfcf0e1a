use tracing::debug;

use crate::model::{DevicePosition, GeocodedPlace, SelectedLocation};
use crate::signal::Signal;

/// Store for the location picker: the place the rider has selected and
/// the device-reported current position.
///
/// Cloning the store clones handles to the same shared state, so a
/// clone can be handed to each consuming component.
///
/// ```
/// use curbside::{GeocodedPlace, LocationStore};
///
/// let store = LocationStore::new();
/// store.set_selected_location(&GeocodedPlace {
///     display_name: Some("Alexanderplatz, Berlin".into()),
///     lat: Some(52.5219),
///     lon: Some(13.4132),
/// });
///
/// assert_eq!(store.selected_location().with(|s| s.geometry.lat), Some(52.5219));
/// ```
#[derive(Clone)]
pub struct LocationStore {
    selected_location: Signal<SelectedLocation>,
    current_location: Signal<Option<DevicePosition>>,
}

impl LocationStore {
    pub fn new() -> Self {
        Self {
            selected_location: Signal::new(SelectedLocation::default()),
            current_location: Signal::new(None),
        }
    }

    /// The currently selected location.
    pub fn selected_location(&self) -> &Signal<SelectedLocation> {
        &self.selected_location
    }

    /// The last device-reported position, if any.
    pub fn current_location(&self) -> &Signal<Option<DevicePosition>> {
        &self.current_location
    }

    /// Adopt a geocoder result as the selected location.
    ///
    /// `display_name` feeds both `name` and `address`. No validation:
    /// fields absent from the record land as `None`.
    pub fn set_selected_location(&self, place: &GeocodedPlace) {
        debug!(
            target: "curbside::location",
            name = ?place.display_name,
            lat = ?place.lat,
            lon = ?place.lon,
            "selected location set"
        );
        self.selected_location.update(|selected| {
            selected.name = place.display_name.clone();
            selected.address = place.display_name.clone();
            selected.geometry.lat = place.lat;
            selected.geometry.lng = place.lon;
        });
    }

    /// Replace the device position wholesale.
    pub fn set_current_location(&self, position: Option<DevicePosition>) {
        debug!(target: "curbside::location", ?position, "current location set");
        self.current_location.set(position);
    }

    /// Clear every field to `None`, including inside the geometry.
    ///
    /// Note this is not the fresh-store baseline: a new store holds
    /// empty strings for name and address, a reset one holds `None`.
    pub fn reset(&self) {
        debug!(target: "curbside::location", "store reset");
        self.selected_location.set(SelectedLocation::cleared());
        self.current_location.set(None);
    }
}

impl Default for LocationStore {
    fn default() -> Self {
        Self::new()
    }
}
