//! Basic usage example for geofill-rs
//!
//! This example drives the autocomplete controller by hand: it types a few
//! characters, lets the debounce pause elapse, answers the lookup with a
//! canned provider reply and selects a suggestion with the keyboard. Pass
//! `--live` to answer with the real provider instead.

use geofill_rs::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use url::Url;

const CANNED: &str = r#"[
  {"display_name":"Dubai Marina, Dubai, United Arab Emirates","lat":"25.0805","lon":"55.1403"},
  {"display_name":"Dubai Mall, Downtown Dubai, United Arab Emirates","lat":"25.1985","lon":"55.2796"}
]"#;

#[derive(Default)]
struct PrintView {
    rows: Vec<String>,
}

impl SuggestionView for PrintView {
    fn clear_items(&mut self) {
        self.rows.clear();
    }

    fn append_item(&mut self, index: usize, label: &str) {
        println!("  [{index}] {label}");
        self.rows.push(label.to_string());
    }

    fn set_visible(&mut self, visible: bool) {
        println!("  panel {}", if visible { "shown" } else { "hidden" });
    }

    fn set_highlight(&mut self, index: Option<usize>) {
        if let Some(i) = index {
            println!("  highlight -> {}", self.rows[i]);
        }
    }
}

impl InputField for PrintView {
    fn set_text(&mut self, text: &str) {
        println!("  input: {text}");
    }
}

#[derive(Default)]
struct Timer {
    live: Option<DebounceToken>,
}

impl Scheduler for Timer {
    type Handle = DebounceToken;

    fn schedule(&mut self, _delay: Duration, token: DebounceToken) -> DebounceToken {
        self.live = Some(token);
        token
    }

    fn cancel(&mut self, _handle: DebounceToken) {
        self.live = None;
    }
}

#[derive(Default)]
struct Outbox {
    sent: Vec<(FetchTicket, Url)>,
}

impl Transport for Outbox {
    fn send(&mut self, ticket: FetchTicket, url: Url) {
        self.sent.push((ticket, url));
    }
}

fn main() -> Result<()> {
    let live = std::env::args().any(|a| a == "--live");
    println!("=== geofill-rs Basic Usage Example ===\n");

    let notified = Rc::new(Cell::new(0));
    let counter = notified.clone();
    let config = WidgetConfig::default();
    let mut widget = AddressAutocomplete::from_config(
        &config,
        PrintView::default(),
        Timer::default(),
        Outbox::default(),
        move || counter.set(counter.get() + 1),
    )?;

    println!("--- Typing ---");
    for text in ["D", "Du", "Dub", "Dubai"] {
        println!("typed {text:?}");
        widget.handle_input(text);
    }

    println!("\n--- Pause elapsed ---");
    if let Some(token) = widget.debouncer_mut().scheduler_mut().live.take() {
        widget.handle_debounce_elapsed(token);
    }
    let (ticket, url) = widget
        .fetcher_mut()
        .transport_mut()
        .sent
        .pop()
        .ok_or_else(|| GeofillError::Host("no lookup was issued".into()))?;
    println!("GET {url}");

    println!("\n--- Reply ---");
    let reply = if live {
        widget.fetcher().provider().fetch_blocking(&url)
    } else {
        Ok(HttpReply::ok(CANNED))
    };
    widget.handle_fetch_reply(ticket, reply);

    println!("\n--- ArrowDown, ArrowDown, Enter ---");
    widget.handle_key(Key::ArrowDown);
    widget.handle_key(Key::ArrowDown);
    widget.handle_key(Key::Enter);

    println!("\nValue: {}", widget.read_value());
    println!("Change notifications: {}", notified.get());
    Ok(())
}
