// crates/geofill-core/src/config.rs

//! # Configuration
//!
//! Widget settings plus the two serde shapes exchanged with the host shell.

use crate::provider::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_COUNTRY_CODE: &str = "ae";
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
pub const DEFAULT_MIN_QUERY_CHARS: usize = 3;
pub const DEFAULT_RESULT_LIMIT: u32 = 5;

/// Which fetch reply wins when several are in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseOrdering {
    /// Every reply is applied in arrival order; a slow reply may overwrite a
    /// newer, faster one.
    #[default]
    LastArrival,
    /// Only the reply stamped with the most recently issued ticket is applied.
    LastIssued,
}

/// Settings fixed for the lifetime of one mounted widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub country_code: String,
    pub endpoint: String,
    pub debounce_ms: u64,
    pub min_query_chars: usize,
    pub result_limit: u32,
    pub ordering: ResponseOrdering,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
            result_limit: DEFAULT_RESULT_LIMIT,
            ordering: ResponseOrdering::default(),
        }
    }
}

impl WidgetConfig {
    /// Defaults with the country filter taken from the host, falling back to
    /// `"ae"` when the host sends nothing (or an empty string).
    pub fn from_host(inputs: &HostInputs) -> Self {
        Self::default().with_country(inputs.country_code.as_deref())
    }

    pub fn with_country(mut self, code: Option<&str>) -> Self {
        self.country_code = match code.map(str::trim) {
            Some(c) if !c.is_empty() => c.to_string(),
            _ => DEFAULT_COUNTRY_CODE.to_string(),
        };
        self
    }

    pub fn with_ordering(mut self, ordering: ResponseOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Property bag the host delivers on init and on every refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostInputs {
    pub address_field: Option<String>,
    pub country_code: Option<String>,
}

impl HostInputs {
    /// The bound value, with a missing value read as the empty string.
    pub fn address(&self) -> &str {
        self.address_field.as_deref().unwrap_or("")
    }
}

/// Values the host reads back after a change notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostOutputs {
    pub address_field: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_falls_back_to_default() {
        let inputs = HostInputs::default();
        assert_eq!(WidgetConfig::from_host(&inputs).country_code, "ae");

        let blank = HostInputs {
            country_code: Some("  ".into()),
            ..HostInputs::default()
        };
        assert_eq!(WidgetConfig::from_host(&blank).country_code, "ae");
    }

    #[test]
    fn host_inputs_use_camel_case() {
        let inputs: HostInputs =
            serde_json::from_str(r#"{"addressField":"Abu Dhabi","countryCode":"sa"}"#).unwrap();
        assert_eq!(inputs.address(), "Abu Dhabi");
        assert_eq!(WidgetConfig::from_host(&inputs).country_code, "sa");

        let json = serde_json::to_string(&HostOutputs {
            address_field: "Dubai".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"addressField":"Dubai"}"#);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg: WidgetConfig = serde_json::from_str(r#"{"ordering":"last_issued"}"#).unwrap();
        assert_eq!(cfg.ordering, ResponseOrdering::LastIssued);
        assert_eq!(cfg.debounce(), Duration::from_millis(500));
        assert_eq!(cfg.result_limit, 5);
    }
}
