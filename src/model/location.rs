use serde::{Deserialize, Deserializer, Serialize};

/// A nullable coordinate pair.
///
/// Both fields are independently nullable; callers are expected to set
/// them together, but nothing enforces the pairing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl Coordinates {
    /// A pair with both components set.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat: Some(lat),
            lng: Some(lng),
        }
    }

    /// True when neither component is set.
    pub fn is_empty(&self) -> bool {
        self.lat.is_none() && self.lng.is_none()
    }
}

/// The location the rider has picked in the search UI.
///
/// A fresh store holds empty strings for `name` and `address`; a reset
/// store holds `None`. The two baselines are distinct and observable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedLocation {
    pub name: Option<String>,
    pub address: Option<String>,
    pub geometry: Coordinates,
}

impl Default for SelectedLocation {
    fn default() -> Self {
        Self {
            name: Some(String::new()),
            address: Some(String::new()),
            geometry: Coordinates::default(),
        }
    }
}

impl SelectedLocation {
    /// The post-reset state: every field `None`, including the geometry.
    pub fn cleared() -> Self {
        Self {
            name: None,
            address: None,
            geometry: Coordinates::default(),
        }
    }
}

/// A device-reported position fix.
///
/// The location store replaces this wholesale and never looks inside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DevicePosition {
    pub lat: f64,
    pub lng: f64,
    pub accuracy: Option<f64>,
    pub heading: Option<f64>,
}

impl DevicePosition {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            accuracy: None,
            heading: None,
        }
    }
}

/// A single geocoder search result, as delivered by the upstream API.
///
/// Nominatim-style payloads carry coordinates as numeric strings
/// (`"lat": "52.517"`); other sources send plain numbers. Both parse,
/// and anything absent or unparseable decays to `None` rather than
/// failing the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodedPlace {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_coord")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coord")]
    pub lon: Option<f64>,
}

fn lenient_coord<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer).unwrap_or(None) {
        Some(Raw::Number(n)) => Some(n),
        Some(Raw::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}
