// crates/geofill-core/src/model.rs
use serde::{Deserialize, Serialize};

/// Raw place entry as it comes from the provider's JSON.
///
/// Coordinates arrive as decimal strings.
#[derive(Debug, Deserialize)]
pub struct PlaceRaw {
    pub display_name: String,
    #[serde(default)]
    pub lat: Option<String>,
    #[serde(default)]
    pub lon: Option<String>,
}

/// One candidate address shown in the dropdown.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub label: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Suggestion {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            latitude: None,
            longitude: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// `(lat, lon)` when both coordinates parsed.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

impl From<PlaceRaw> for Suggestion {
    fn from(raw: PlaceRaw) -> Self {
        Self {
            latitude: parse_opt_f64(&raw.lat),
            longitude: parse_opt_f64(&raw.lon),
            label: raw.display_name,
        }
    }
}

fn parse_opt_f64(s: &Option<String>) -> Option<f64> {
    s.as_ref().and_then(|v| v.trim().parse::<f64>().ok())
}
