//! geofill-rs
//!
//! Workspace crate; re-exports [`geofill_core`] so the demos under `demos/`
//! can be run from the repository root.

pub use geofill_core::*;
