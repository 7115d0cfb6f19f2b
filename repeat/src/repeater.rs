//! Repeater records as returned by the repeater database.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A field that may arrive as a JSON number, a string or `null`.
///
/// The raw text is kept so it can be echoed back unmodified when it isn't numeric.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Loose(String);

impl Loose {
    /// Creates a new field from its text.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interprets the text as a float.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.0.trim().parse().ok()
    }
}

impl From<&str> for Loose {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Loose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Loose {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = match Value::deserialize(deserializer)? {
            Value::Null => String::new(),
            Value::String(s) => s,
            other => other.to_string(),
        };

        Ok(Loose(text))
    }
}

impl Serialize for Loose {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// A single repeater near the requested position.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RepeaterRecord {
    /// Callsign of the repeater.
    pub callsign: String,
    /// Output frequency in MHz.
    pub frequency: Loose,
    /// Input offset in MHz; negative for a downward shift.
    #[serde(default)]
    pub offset: Loose,
    /// CTCSS tone required to access the repeater.
    #[serde(default)]
    pub uplink_offset: Loose,
    /// Distance from the requesting station in meters.
    #[serde(default)]
    pub distance: Loose,
    /// Compass direction from the requesting station, e.g. `NW`.
    #[serde(default)]
    pub direction: Loose,
    /// Country the repeater is located in.
    #[serde(default)]
    pub country: Loose,
    /// Latitude of the repeater site.
    #[serde(default)]
    pub lat: f64,
    /// Longitude of the repeater site.
    #[serde(default)]
    pub long: f64,
}
