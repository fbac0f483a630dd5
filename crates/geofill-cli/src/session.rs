//! Terminal host for replaying an autocomplete session.
//!
//! The view prints what a browser would render, the scheduler fires only
//! when asked and the transport queues requests so the caller can perform
//! them with the blocking client, one at a time.

use geofill_core::prelude::*;
use std::collections::VecDeque;
use std::time::Duration;
use url::Url;

#[derive(Debug, Default)]
pub struct TerminalView {
    rows: Vec<String>,
    highlighted: Option<usize>,
}

impl SuggestionView for TerminalView {
    fn clear_items(&mut self) {
        self.rows.clear();
    }

    fn append_item(&mut self, index: usize, label: &str) {
        println!("    [{index}] {label}");
        self.rows.push(label.to_string());
    }

    fn set_visible(&mut self, visible: bool) {
        if visible {
            println!("  ▾ {} suggestion(s) shown", self.rows.len());
        } else {
            println!("  ▴ suggestions hidden");
        }
    }

    fn set_highlight(&mut self, index: Option<usize>) {
        if self.highlighted != index {
            if let Some(label) = index.and_then(|i| self.rows.get(i)) {
                println!("  > {label}");
            }
        }
        self.highlighted = index;
    }
}

impl InputField for TerminalView {
    fn set_text(&mut self, text: &str) {
        println!("  input = {text:?}");
    }
}

/// Timer that only fires when the caller says the pause has elapsed.
#[derive(Debug, Default)]
pub struct PauseScheduler {
    live: Option<DebounceToken>,
}

impl PauseScheduler {
    pub fn take_live(&mut self) -> Option<DebounceToken> {
        self.live.take()
    }
}

impl Scheduler for PauseScheduler {
    type Handle = DebounceToken;

    fn schedule(&mut self, delay: Duration, token: DebounceToken) -> DebounceToken {
        log::trace!("timer #{} armed for {delay:?}", token.0);
        self.live = Some(token);
        token
    }

    fn cancel(&mut self, handle: DebounceToken) {
        if self.live == Some(handle) {
            self.live = None;
        }
    }
}

#[derive(Debug, Default)]
pub struct QueueTransport {
    queue: VecDeque<(FetchTicket, Url)>,
}

impl Transport for QueueTransport {
    fn send(&mut self, ticket: FetchTicket, url: Url) {
        self.queue.push_back((ticket, url));
    }
}

pub type TerminalWidget = AddressAutocomplete<TerminalView, PauseScheduler, QueueTransport>;

/// [`HostControl`] over the terminal capabilities.
pub struct TerminalControl {
    template: WidgetConfig,
    widget: Option<TerminalWidget>,
}

impl TerminalControl {
    /// `template` supplies everything but the country filter, which comes
    /// from the host inputs at `init`.
    pub fn new(template: WidgetConfig) -> Self {
        Self {
            template,
            widget: None,
        }
    }

    pub fn widget_mut(&mut self) -> Result<&mut TerminalWidget> {
        self.widget
            .as_mut()
            .ok_or_else(|| GeofillError::Host("control is not initialized".into()))
    }

    /// Lets the debounce pause elapse, then performs every queued lookup.
    pub fn settle(&mut self) -> Result<()> {
        let widget = self.widget_mut()?;
        if let Some(token) = widget.debouncer_mut().scheduler_mut().take_live() {
            widget.handle_debounce_elapsed(token);
        }
        while let Some((ticket, url)) = widget.fetcher_mut().transport_mut().queue.pop_front() {
            println!("  GET {url}");
            let outcome = widget.fetcher().provider().fetch_blocking(&url);
            widget.handle_fetch_reply(ticket, outcome);
        }
        Ok(())
    }
}

impl HostControl for TerminalControl {
    type Mount = ();

    fn init(&mut self, inputs: &HostInputs, notify: Box<dyn FnMut()>, _mount: ()) -> Result<()> {
        let config = self.template.clone().with_country(inputs.country_code.as_deref());
        let widget = AddressAutocomplete::from_config(
            &config,
            TerminalView::default(),
            PauseScheduler::default(),
            QueueTransport::default(),
            notify,
        )?;
        self.widget = Some(widget);
        Ok(())
    }

    fn update_view(&mut self, inputs: &HostInputs) {
        if let Some(widget) = self.widget.as_mut() {
            widget.apply_host_inputs(inputs);
        }
    }

    fn get_outputs(&self) -> HostOutputs {
        self.widget
            .as_ref()
            .map(|w| w.outputs())
            .unwrap_or_default()
    }

    fn destroy(&mut self) {
        if let Some(mut widget) = self.widget.take() {
            widget.teardown();
        }
    }
}
