//! Tracker bridge — a decorator over the Google Analytics `Tracker`
//! capability that mirrors tracked events into a secondary reporting
//! channel while forwarding them to the wrapped tracker.
//!
//! # Modules
//!
//! - [`adapter`] — `TrackingAdapter`, the decorator itself
//! - [`hooks`] — Optional event creation/customization callbacks
//! - [`settings`] — Runtime flags controlling both downstream channels
//! - [`sink`] — The secondary-channel sink trait and shipped sinks

pub mod adapter;
pub mod hooks;
pub mod settings;
pub mod sink;

pub use adapter::TrackingAdapter;
pub use hooks::EventHooks;
pub use settings::BridgeSettings;
pub use sink::{BufferingSink, EventSink, LoggingSink};

pub use bridge_core::{CustomEvent, MemoryTracker, Params, Tracker};
