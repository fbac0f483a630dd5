// crates/geofill-core/src/lib.rs

//! # geofill-core
//!
//! Host-agnostic core of an address autocomplete field.
//!
//! The crate owns the interesting part of the widget: debouncing keystrokes,
//! issuing geocode queries, tracking the suggestion list and committing a
//! selection back to the bound value. Everything that touches a real display
//! surface, a real timer or a real network stack sits behind a small trait so
//! the same controller runs in the browser (`geofill-wasm`), in a terminal
//! (`geofill-cli`) and in plain unit tests.
//!
//! ```rust
//! use geofill_core::prelude::*;
//!
//! let provider = NominatimProvider::new(DEFAULT_ENDPOINT, "ae", 5).unwrap();
//! let url = provider.search_url("Dubai Marina");
//! assert!(url.as_str().contains("countrycodes=ae"));
//! ```

pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod fetcher;
pub mod host;
pub mod list;
pub mod model;
pub mod provider;

// Re-exports
pub use crate::config::{HostInputs, HostOutputs, ResponseOrdering, WidgetConfig};
pub use crate::controller::{AddressAutocomplete, Key, KeyOutcome};
pub use crate::debounce::{DebounceToken, Debouncer, Scheduler};
pub use crate::error::{GeofillError, Result};
pub use crate::fetcher::{FetchTicket, HttpReply, SuggestionFetcher, Transport};
pub use crate::host::HostControl;
pub use crate::list::{Direction, InputField, SuggestionList, SuggestionView};
pub use crate::model::Suggestion;
pub use crate::provider::{NominatimProvider, DEFAULT_ENDPOINT};

pub mod prelude {
    pub use crate::config::*;
    pub use crate::controller::*;
    pub use crate::debounce::*;
    pub use crate::error::{GeofillError, Result};
    pub use crate::fetcher::*;
    pub use crate::host::*;
    pub use crate::list::*;
    pub use crate::model::*;
    pub use crate::provider::*;
}
