// crates/geofill-core/src/controller.rs

//! # Input Controller
//!
//! [`AddressAutocomplete`] ties the debouncer, the fetcher and the suggestion
//! list together. Hosts forward raw events (`handle_*`) and lifecycle calls;
//! the controller never blocks and never talks to the network itself.

use crate::config::{HostInputs, HostOutputs, WidgetConfig};
use crate::debounce::{DebounceToken, Debouncer, Scheduler};
use crate::error::Result;
use crate::fetcher::{FetchStart, FetchTicket, HttpReply, Resolution, SuggestionFetcher, Transport};
use crate::list::{Direction, InputField, SuggestionList, SuggestionView};
use crate::provider::NominatimProvider;

/// Keys the widget reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowDown" | "Down" => Key::ArrowDown,
            "ArrowUp" | "Up" => Key::ArrowUp,
            "Enter" => Key::Enter,
            _ => Key::Other,
        }
    }
}

/// Whether the host should suppress the key's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Consumed,
    Ignored,
}

pub struct AddressAutocomplete<V, S, T>
where
    S: Scheduler,
    T: Transport,
{
    value: String,
    pending_query: String,
    debouncer: Debouncer<S>,
    fetcher: SuggestionFetcher<T>,
    list: SuggestionList,
    view: V,
    on_change: Box<dyn FnMut()>,
    torn_down: bool,
}

impl<V, S, T> AddressAutocomplete<V, S, T>
where
    V: SuggestionView + InputField,
    S: Scheduler,
    T: Transport,
{
    /// Builds the widget with the panel hidden. No request is made.
    pub fn new(
        config: &WidgetConfig,
        provider: NominatimProvider,
        mut view: V,
        scheduler: S,
        transport: T,
        on_change: impl FnMut() + 'static,
    ) -> Self {
        let mut list = SuggestionList::new();
        list.hide(&mut view);

        Self {
            value: String::new(),
            pending_query: String::new(),
            debouncer: Debouncer::new(scheduler, config.debounce()),
            fetcher: SuggestionFetcher::new(transport, provider, config),
            list,
            view,
            on_change: Box::new(on_change),
            torn_down: false,
        }
    }

    pub fn from_config(
        config: &WidgetConfig,
        view: V,
        scheduler: S,
        transport: T,
        on_change: impl FnMut() + 'static,
    ) -> Result<Self> {
        let provider = NominatimProvider::from_config(config)?;
        Ok(Self::new(config, provider, view, scheduler, transport, on_change))
    }

    // -----------------------------------------------------------------------
    // Host lifecycle
    // -----------------------------------------------------------------------

    /// Overwrites the value and the visible text when the host's value
    /// differs. The panel is left as it is.
    pub fn receive_external_value(&mut self, value: &str) {
        if self.torn_down || self.value == value {
            return;
        }
        self.value = value.to_string();
        self.show_text(value);
    }

    pub fn apply_host_inputs(&mut self, inputs: &HostInputs) {
        self.receive_external_value(inputs.address());
    }

    pub fn read_value(&self) -> &str {
        &self.value
    }

    pub fn outputs(&self) -> HostOutputs {
        HostOutputs {
            address_field: self.value.clone(),
        }
    }

    /// Cancels the pending timer, drops the rendered suggestions and turns
    /// every later event into a no-op.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.debouncer.cancel();
        self.list.clear(&mut self.view);
        self.torn_down = true;
    }

    // -----------------------------------------------------------------------
    // Events
    // -----------------------------------------------------------------------

    /// One keystroke: remember the field text and restart the debounce timer.
    pub fn handle_input(&mut self, text: &str) {
        if self.torn_down {
            return;
        }
        self.pending_query.clear();
        self.pending_query.push_str(text);
        self.debouncer.trigger();
    }

    /// Timer callback. Stale tokens are ignored.
    pub fn handle_debounce_elapsed(&mut self, token: DebounceToken) {
        if self.torn_down || !self.debouncer.fire(token) {
            return;
        }
        let query = self.pending_query.clone();
        self.request_suggestions(&query);
    }

    /// Runs the fetch gate for `query` and sends the lookup.
    pub fn request_suggestions(&mut self, query: &str) -> FetchStart {
        let start = self.fetcher.fetch(query);
        if start == FetchStart::Gated {
            self.list.clear(&mut self.view);
        }
        start
    }

    /// Transport callback for the lookup stamped `ticket`.
    pub fn handle_fetch_reply(&mut self, ticket: FetchTicket, outcome: Result<HttpReply>) {
        if self.torn_down {
            log::debug!("reply for fetch #{} after teardown dropped", ticket.0);
            return;
        }
        match self.fetcher.resolve(ticket, outcome) {
            Resolution::Replace(items) if items.is_empty() => {
                self.list.clear(&mut self.view);
            }
            Resolution::Replace(items) => {
                self.list.render(items, &mut self.view);
                self.list.show(&mut self.view);
            }
            Resolution::Stale | Resolution::Failed => {}
        }
    }

    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        if self.torn_down || self.list.is_empty() {
            return KeyOutcome::Ignored;
        }
        match key {
            Key::ArrowDown => {
                self.list.navigate(Direction::Down, &mut self.view);
            }
            Key::ArrowUp => {
                self.list.navigate(Direction::Up, &mut self.view);
            }
            Key::Enter => {
                if let Some(label) = self.list.active().map(|s| s.label.clone()) {
                    self.commit(&label);
                }
            }
            Key::Other => return KeyOutcome::Ignored,
        }
        KeyOutcome::Consumed
    }

    pub fn handle_item_hover(&mut self, index: usize) {
        if !self.torn_down {
            self.list.highlight(index, &mut self.view);
        }
    }

    pub fn handle_item_click(&mut self, index: usize) {
        if let Some(label) = self.list.get(index).map(|s| s.label.clone()) {
            self.commit(&label);
        }
    }

    /// Click landed outside the mount point.
    pub fn handle_outside_click(&mut self) {
        if !self.torn_down {
            self.list.hide(&mut self.view);
        }
    }

    /// Makes `label` the value, hides the panel and notifies the host once.
    pub fn commit(&mut self, label: &str) {
        if self.torn_down {
            return;
        }
        self.value = label.to_string();
        self.show_text(label);
        self.list.hide(&mut self.view);
        (self.on_change)();
    }

    // a pending timer must look up what the field shows when it fires
    fn show_text(&mut self, text: &str) {
        self.view.set_text(text);
        self.pending_query.clear();
        self.pending_query.push_str(text);
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn list(&self) -> &SuggestionList {
        &self.list
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn pending_query(&self) -> &str {
        &self.pending_query
    }

    pub fn debouncer(&self) -> &Debouncer<S> {
        &self.debouncer
    }

    pub fn debouncer_mut(&mut self) -> &mut Debouncer<S> {
        &mut self.debouncer
    }

    pub fn fetcher(&self) -> &SuggestionFetcher<T> {
        &self.fetcher
    }

    pub fn fetcher_mut(&mut self) -> &mut SuggestionFetcher<T> {
        &mut self.fetcher
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}
