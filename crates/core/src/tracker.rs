//! The `Tracker` capability — named analytics parameters plus one-shot
//! sends, polymorphic so decorators can stand in wherever a tracker is
//! expected.

use std::collections::HashMap;

use parking_lot::Mutex;
use tracing::debug;

/// A map from parameter names to parameter values, either persistent
/// (held by a tracker) or call-scoped (passed to a single `send`).
pub type Params = HashMap<String, String>;

/// Capability for recording named analytics parameters and forwarding
/// tracking information to a reporting backend.
///
/// Implementations must look synchronous to a single caller; any batching
/// or delivery asynchrony is the implementation's own concern.
pub trait Tracker: Send + Sync {
    /// Identifying name of this tracker.
    fn name(&self) -> &str;

    /// Set a tracking parameter. A `None` value clears the parameter
    /// instead of storing an empty entry. Empty parameter names are
    /// ignored.
    fn set(&self, parameter: &str, value: Option<String>);

    /// Get a tracking parameter, or `None` if no value is set.
    fn get(&self, parameter: &str) -> Option<String>;

    /// Queue tracking information. `params` supplies values for this call
    /// only and is not merged into the tracker's persistent parameters.
    fn send(&self, params: Option<&Params>);
}

/// In-process reference tracker. Holds the parameter map under a single
/// lock and records every merged `send` payload, which also makes it the
/// standard wrapped-tracker double in bridge tests.
pub struct MemoryTracker {
    name: String,
    params: Mutex<Params>,
    sent: Mutex<Vec<Params>>,
}

impl MemoryTracker {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Mutex::new(Params::new()),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of every payload this tracker has been asked to send,
    /// oldest first. Each payload is the persistent map merged with the
    /// call-scoped overrides.
    pub fn sent(&self) -> Vec<Params> {
        self.sent.lock().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().len()
    }
}

impl Tracker for MemoryTracker {
    fn name(&self) -> &str {
        &self.name
    }

    fn set(&self, parameter: &str, value: Option<String>) {
        if parameter.is_empty() {
            debug!(tracker = %self.name, "Ignoring set with empty parameter name");
            return;
        }
        let mut params = self.params.lock();
        match value {
            Some(v) => {
                params.insert(parameter.to_string(), v);
            }
            None => {
                params.remove(parameter);
            }
        }
    }

    fn get(&self, parameter: &str) -> Option<String> {
        self.params.lock().get(parameter).cloned()
    }

    fn send(&self, params: Option<&Params>) {
        let mut merged = self.params.lock().clone();
        if let Some(overrides) = params {
            for (key, value) in overrides {
                merged.insert(key.clone(), value.clone());
            }
        }
        debug!(
            tracker = %self.name,
            params = merged.len(),
            "Recording tracking payload"
        );
        self.sent.lock().push(merged);
    }
}
