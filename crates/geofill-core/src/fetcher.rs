// crates/geofill-core/src/fetcher.rs

//! # Suggestion Fetcher
//!
//! Applies the query gate, stamps every outbound lookup with a
//! [`FetchTicket`] and decides what a reply does to the suggestion set.
//! The actual request is performed by the host through [`Transport`]; the
//! reply comes back later through
//! [`crate::AddressAutocomplete::handle_fetch_reply`].

use crate::config::{ResponseOrdering, WidgetConfig};
use crate::error::Result;
use crate::model::Suggestion;
use crate::provider::NominatimProvider;
use url::Url;

/// Sequence stamp of one issued lookup. Tickets increase monotonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(pub u64);

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Fire-and-forget request issuer supplied by the host.
///
/// Implementations must not call back into the controller synchronously from
/// `send`; the reply is delivered on a later turn of the event loop.
pub trait Transport {
    fn send(&mut self, ticket: FetchTicket, url: Url);
}

/// The lookup gate: a query is sent only when it is non-empty and at least
/// `min_chars` characters long. Characters, not bytes, are counted.
pub fn query_passes_gate(query: &str, min_chars: usize) -> bool {
    !query.is_empty() && query.chars().count() >= min_chars
}

/// Outcome of asking the fetcher to look a query up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStart {
    /// Query too short or empty; nothing was sent.
    Gated,
    Issued(FetchTicket),
}

/// What a reply does to the suggestion set.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Replace(Vec<Suggestion>),
    /// Superseded by a newer ticket (only under [`ResponseOrdering::LastIssued`]).
    Stale,
    /// Transport, status or decoding failure; already logged.
    Failed,
}

pub struct SuggestionFetcher<T: Transport> {
    transport: T,
    provider: NominatimProvider,
    ordering: ResponseOrdering,
    min_query_chars: usize,
    next_ticket: u64,
    latest_issued: Option<FetchTicket>,
}

impl<T: Transport> SuggestionFetcher<T> {
    pub fn new(transport: T, provider: NominatimProvider, config: &WidgetConfig) -> Self {
        Self {
            transport,
            provider,
            ordering: config.ordering,
            min_query_chars: config.min_query_chars,
            next_ticket: 0,
            latest_issued: None,
        }
    }

    pub fn accepts(&self, query: &str) -> bool {
        query_passes_gate(query, self.min_query_chars)
    }

    /// Sends one lookup for `query` unless the gate rejects it.
    pub fn fetch(&mut self, query: &str) -> FetchStart {
        if !self.accepts(query) {
            // replies to earlier queries no longer describe the field
            self.latest_issued = None;
            return FetchStart::Gated;
        }

        let ticket = FetchTicket(self.next_ticket);
        self.next_ticket += 1;
        self.latest_issued = Some(ticket);

        let url = self.provider.search_url(query);
        log::debug!("fetch #{} -> {url}", ticket.0);
        self.transport.send(ticket, url);
        FetchStart::Issued(ticket)
    }

    /// Classifies a reply. Failures are reported here and go no further.
    pub fn resolve(&mut self, ticket: FetchTicket, outcome: Result<HttpReply>) -> Resolution {
        if self.ordering == ResponseOrdering::LastIssued && self.latest_issued != Some(ticket) {
            log::warn!("discarding stale reply for fetch #{}", ticket.0);
            return Resolution::Stale;
        }

        match outcome.and_then(|reply| self.provider.parse_reply(&reply)) {
            Ok(items) => Resolution::Replace(items),
            Err(e) => {
                log::error!("Error fetching address suggestions (fetch #{}): {e}", ticket.0);
                Resolution::Failed
            }
        }
    }

    pub fn provider(&self) -> &NominatimProvider {
        &self.provider
    }

    pub fn ordering(&self) -> ResponseOrdering {
        self.ordering
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }
}
