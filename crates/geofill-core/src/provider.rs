// crates/geofill-core/src/provider.rs

//! # Geocoding Provider
//!
//! Builds search URLs for a Nominatim-compatible endpoint and turns its
//! replies into [`Suggestion`]s. No I/O happens here unless the `blocking`
//! feature is enabled.

use crate::config::WidgetConfig;
use crate::error::{GeofillError, Result};
use crate::fetcher::HttpReply;
use crate::model::{PlaceRaw, Suggestion};
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";

/// Output format token; the provider answers with a JSON array.
const FORMAT_JSON: &str = "json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NominatimProvider {
    endpoint: Url,
    country_code: String,
    limit: u32,
}

impl NominatimProvider {
    pub fn new(endpoint: &str, country_code: impl Into<String>, limit: u32) -> Result<Self> {
        Ok(Self {
            endpoint: Url::parse(endpoint)?,
            country_code: country_code.into(),
            limit,
        })
    }

    pub fn from_config(config: &WidgetConfig) -> Result<Self> {
        Self::new(&config.endpoint, config.country_code.clone(), config.result_limit)
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// The GET url for one free-text lookup. The query is percent-encoded,
    /// not trimmed.
    pub fn search_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("format", FORMAT_JSON)
            .append_pair("q", query)
            .append_pair("countrycodes", &self.country_code)
            .append_pair("limit", &self.limit.to_string());
        url
    }

    /// Decodes a provider reply.
    ///
    /// Non-2xx statuses and malformed bodies are errors; a `null` body counts
    /// as an empty result set.
    pub fn parse_reply(&self, reply: &HttpReply) -> Result<Vec<Suggestion>> {
        if !reply.is_success() {
            return Err(GeofillError::Status(reply.status));
        }
        let raw: Option<Vec<PlaceRaw>> = serde_json::from_str(&reply.body)?;
        Ok(raw
            .unwrap_or_default()
            .into_iter()
            .map(Suggestion::from)
            .collect())
    }
}

#[cfg(feature = "blocking")]
mod blocking {
    use super::*;
    use reqwest::blocking::Client;

    /// Nominatim's usage policy asks every client to identify itself.
    const USER_AGENT: &str = concat!("geofill/", env!("CARGO_PKG_VERSION"));

    impl NominatimProvider {
        /// Performs one GET and hands back the raw status and body.
        pub fn fetch_blocking(&self, url: &Url) -> Result<HttpReply> {
            let client = Client::builder().user_agent(USER_AGENT).build()?;
            let response = client.get(url.as_str()).send()?;
            let status = response.status().as_u16();
            let body = response.text()?;
            Ok(HttpReply { status, body })
        }

        /// Synchronous lookup for native callers.
        pub fn lookup_blocking(&self, query: &str) -> Result<Vec<Suggestion>> {
            let url = self.search_url(query);
            log::debug!("GET {url}");
            let reply = self.fetch_blocking(&url)?;
            self.parse_reply(&reply)
        }
    }
}
