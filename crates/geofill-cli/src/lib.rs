//! geofill-cli
//! ===========
//!
//! Command-line interface for `geofill-core`.
//!
//! This crate primarily provides a binary (`geofill`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! geofill --help
//! geofill url "Dubai Marina"
//! geofill search "Dubai Marina" --country ae
//! geofill replay D Du Dub Duba --down 2
//! ```
//!
//! For programmatic access use the [`geofill-core`] crate directly.
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
