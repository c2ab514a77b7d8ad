//! Core types for the tracker bridge — the `Tracker` capability, the
//! custom event carried on the secondary reporting channel, and Google
//! Analytics field constants.
//!
//! # Modules
//!
//! - [`tracker`] — The `Tracker` trait and an in-process reference implementation
//! - [`event`] — `CustomEvent`, the secondary-channel event type
//! - [`fields`] — GA measurement-protocol field names and identifier classification
//! - [`error`] — Error type shared across the workspace

pub mod error;
pub mod event;
pub mod fields;
pub mod tracker;

pub use error::{BridgeError, BridgeResult};
pub use event::CustomEvent;
pub use tracker::{MemoryTracker, Params, Tracker};
