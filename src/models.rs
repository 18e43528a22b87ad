//! Wire Models
//!
//! Data structures matching the backend record.

use serde::{Deserialize, Deserializer, Serialize};

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// The single persisted business record. The API has no record id; every
/// route addresses this one row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationRecord {
    #[serde(deserialize_with = "coord")]
    pub latitude: f64,
    #[serde(deserialize_with = "coord")]
    pub longitude: f64,
    #[serde(default)]
    pub text1: String,
    #[serde(default)]
    pub text2: String,
    #[serde(default)]
    pub text3: String,
}

impl LocationRecord {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}

/// The backend serves coordinates as JSON numbers or as strings depending
/// on how the row was written. Accept both.
fn coord<'de, D>(de: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrStr {
        Num(f64),
        Str(String),
    }

    match NumOrStr::deserialize(de)? {
        NumOrStr::Num(n) => Ok(n),
        NumOrStr::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Body of `PUT /api/data/location`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationPayload {
    pub latitude: f64,
    pub longitude: f64,
}

/// Body of `PUT /api/data/texts`. All three fields are always sent
/// together, changed or not.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextsPayload {
    pub text1: String,
    pub text2: String,
    pub text3: String,
}
