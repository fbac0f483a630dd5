//! geofill — Command-line interface for geofill-core
//!
//! This binary runs the address autocomplete core against the live
//! geocoding provider from your terminal. It can print the exact request URL
//! the widget would send, run a single lookup, or replay a typing session
//! through the debouncer, the fetcher and the suggestion list.
//!
//! Usage examples
//! --------------
//!
//! - Show the request URL for a query
//!   $ geofill url "Dubai Marina"
//!
//! - Look an address up (country filter defaults to `ae`)
//!   $ geofill search "Dubai Marina"
//!   $ geofill --country sa search "King Fahd Road"
//!
//! - Replay keystrokes, press ArrowDown twice and Enter
//!   $ geofill replay D Du Dub Duba --down 2
//!
//! Logging
//! -------
//!
//! Fetch failures are reported through the log; pass `-v`/`-vv` to see them
//! together with the issued lookups.
mod args;
mod session;

use crate::args::{CliArgs, Commands};
use crate::session::TerminalControl;
use clap::Parser;
use geofill_core::prelude::*;
use log::LevelFilter;
use std::cell::Cell;
use std::rc::Rc;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    pretty_env_logger::formatted_builder()
        .filter_level(level)
        .init();

    // Build the widget configuration from the global flags
    let mut config = WidgetConfig::default().with_country(args.country.as_deref());
    if let Some(endpoint) = &args.endpoint {
        config.endpoint = endpoint.clone();
    }
    if args.last_issued {
        config.ordering = ResponseOrdering::LastIssued;
    }

    match args.command {
        Commands::Url { query } => {
            let provider = NominatimProvider::from_config(&config)?;
            println!("{}", provider.search_url(&query));
        }

        Commands::Search { query } => {
            let provider = NominatimProvider::from_config(&config)?;
            if !query_passes_gate(&query, config.min_query_chars) {
                println!(
                    "Query too short: at least {} characters are needed",
                    config.min_query_chars
                );
                return Ok(());
            }
            log::info!("looking up {query:?} (at most {} results)", provider.limit());
            let suggestions = provider.lookup_blocking(&query)?;
            if suggestions.is_empty() {
                println!("No addresses found matching: {query}");
            } else {
                for s in suggestions {
                    match s.coordinates() {
                        Some((lat, lon)) => println!("{} ({lat:.5}, {lon:.5})", s.label),
                        None => println!("{}", s.label),
                    }
                }
            }
        }

        Commands::Replay {
            keystrokes,
            down,
            initial,
        } => {
            let notified = Rc::new(Cell::new(0usize));
            let counter = notified.clone();
            let inputs = HostInputs {
                address_field: initial,
                country_code: Some(config.country_code.clone()),
            };

            let mut control = TerminalControl::new(config);
            control.init(
                &inputs,
                Box::new(move || counter.set(counter.get() + 1)),
                (),
            )?;
            control.update_view(&inputs);

            let widget = control.widget_mut()?;
            for text in &keystrokes {
                println!("typed {text:?}");
                widget.handle_input(text);
            }
            control.settle()?;

            let widget = control.widget_mut()?;
            for _ in 0..down {
                widget.handle_key(Key::ArrowDown);
            }
            widget.handle_key(Key::Enter);

            let outputs = control.get_outputs();
            println!("Committed value: {:?}", outputs.address_field);
            println!("Change notifications: {}", notified.get());
            control.destroy();
        }
    }

    Ok(())
}
