#![allow(dead_code)]

use geofill_core::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use url::Url;

/// In-memory panel + text box.
#[derive(Debug, Default)]
pub struct FakeView {
    pub rows: Vec<String>,
    pub highlighted: Option<usize>,
    pub visible: bool,
    pub text: String,
}

impl SuggestionView for FakeView {
    fn clear_items(&mut self) {
        self.rows.clear();
    }

    fn append_item(&mut self, index: usize, label: &str) {
        assert_eq!(index, self.rows.len());
        self.rows.push(label.to_string());
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_highlight(&mut self, index: Option<usize>) {
        self.highlighted = index;
    }
}

impl InputField for FakeView {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

/// Timer facility driven by the test.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pub scheduled: Vec<(Duration, DebounceToken)>,
    pub cancelled: Vec<DebounceToken>,
}

impl ManualScheduler {
    pub fn live(&self) -> Option<DebounceToken> {
        let last = self.scheduled.last()?.1;
        (!self.cancelled.contains(&last)).then_some(last)
    }
}

impl Scheduler for ManualScheduler {
    type Handle = DebounceToken;

    fn schedule(&mut self, delay: Duration, token: DebounceToken) -> DebounceToken {
        self.scheduled.push((delay, token));
        token
    }

    fn cancel(&mut self, handle: DebounceToken) {
        self.cancelled.push(handle);
    }
}

/// Records every request instead of sending it.
#[derive(Debug, Default)]
pub struct Outbox {
    pub sent: Vec<(FetchTicket, Url)>,
}

impl Transport for Outbox {
    fn send(&mut self, ticket: FetchTicket, url: Url) {
        self.sent.push((ticket, url));
    }
}

pub type Widget = AddressAutocomplete<FakeView, ManualScheduler, Outbox>;

pub const DUBAI: &str = r#"[{"display_name":"Dubai, UAE","lat":"25.2","lon":"55.3"}]"#;

pub const THREE: &str = r#"[
    {"display_name":"Dubai Marina, Dubai","lat":"25.08","lon":"55.14"},
    {"display_name":"Dubai Mall, Dubai","lat":"25.19","lon":"55.27"},
    {"display_name":"Dubai Creek, Dubai","lat":"25.24","lon":"55.33"}
]"#;

pub fn widget() -> (Widget, Rc<Cell<usize>>) {
    widget_with(WidgetConfig::default())
}

pub fn widget_with(config: WidgetConfig) -> (Widget, Rc<Cell<usize>>) {
    let notified = Rc::new(Cell::new(0));
    let counter = notified.clone();
    let w = Widget::from_config(
        &config,
        FakeView::default(),
        ManualScheduler::default(),
        Outbox::default(),
        move || counter.set(counter.get() + 1),
    )
    .unwrap();
    (w, notified)
}

/// Types `text` and lets the debounce timer fire.
pub fn type_and_wait(w: &mut Widget, text: &str) {
    w.handle_input(text);
    elapse(w);
}

pub fn elapse(w: &mut Widget) {
    if let Some(token) = w.debouncer().scheduler().live() {
        w.handle_debounce_elapsed(token);
    }
}

pub fn sent(w: &Widget) -> &[(FetchTicket, Url)] {
    &w.fetcher().transport().sent
}

pub fn last_ticket(w: &Widget) -> FetchTicket {
    sent(w).last().expect("a request was sent").0
}

pub fn reply(w: &mut Widget, ticket: FetchTicket, body: &str) {
    w.handle_fetch_reply(ticket, Ok(HttpReply::ok(body)));
}

/// `q` parameter of every request sent so far.
pub fn fetched_queries(w: &Widget) -> Vec<String> {
    sent(w)
        .iter()
        .flat_map(|(_, url)| url.query_pairs().filter(|(k, _)| k == "q").map(|(_, v)| v.into_owned()))
        .collect()
}
