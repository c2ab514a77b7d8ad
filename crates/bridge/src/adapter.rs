//! The tracking adapter — a `Tracker` decorator that fans each tracked
//! call out to the wrapped tracker and/or a secondary custom-event sink.

use std::sync::Arc;

use bridge_core::{fields, CustomEvent, Params, Tracker};
use parking_lot::{Mutex, RwLock};
use tracing::debug;

use crate::hooks::EventHooks;
use crate::settings::BridgeSettings;
use crate::sink::EventSink;

/// Event name used when no creation hook is set and the call-scoped
/// parameters carry no GA event action.
pub const DEFAULT_EVENT_NAME: &str = "ga_event";

/// Decorator over a wrapped [`Tracker`]. Implements the same capability so
/// it can stand in wherever a tracker is expected, while mirroring each
/// `send` into a secondary reporting sink.
///
/// The wrapped tracker and sink are shared references; the adapter does
/// not manage their lifecycles.
pub struct TrackingAdapter {
    name: String,
    tracker: Arc<dyn Tracker>,
    sink: Arc<dyn EventSink>,
    params: Mutex<Params>,
    hooks: RwLock<EventHooks>,
    settings: RwLock<BridgeSettings>,
}

impl TrackingAdapter {
    /// Create an adapter bound to one wrapped tracker, with default
    /// settings and no hooks. The adapter takes its name from the wrapped
    /// tracker.
    pub fn for_tracker(tracker: Arc<dyn Tracker>, sink: Arc<dyn EventSink>) -> Self {
        Self::with_settings(tracker, sink, BridgeSettings::default())
    }

    pub fn with_settings(
        tracker: Arc<dyn Tracker>,
        sink: Arc<dyn EventSink>,
        settings: BridgeSettings,
    ) -> Self {
        Self {
            name: tracker.name().to_string(),
            tracker,
            sink,
            params: Mutex::new(Params::new()),
            hooks: RwLock::new(EventHooks::default()),
            settings: RwLock::new(settings),
        }
    }

    /// Snapshot of the current settings.
    pub fn settings(&self) -> BridgeSettings {
        self.settings.read().clone()
    }

    pub fn set_settings(&self, settings: BridgeSettings) {
        *self.settings.write() = settings;
    }

    pub fn set_hooks(&self, hooks: EventHooks) {
        *self.hooks.write() = hooks;
    }

    /// Reference to the wrapped tracker.
    pub fn wrapped(&self) -> &Arc<dyn Tracker> {
        &self.tracker
    }

    /// Synthesize the default secondary-channel event from the call-scoped
    /// parameters: name from the GA event action when present, value from
    /// the GA event value, and every parameter mirrored as a property.
    fn default_event(call_params: &Params) -> CustomEvent {
        let name = call_params
            .get(fields::EVENT_ACTION)
            .cloned()
            .unwrap_or_else(|| DEFAULT_EVENT_NAME.to_string());

        let mut event = CustomEvent::new(name);
        if let Some(value) = call_params.get(fields::EVENT_VALUE) {
            if let Ok(parsed) = value.parse::<f64>() {
                event.value = Some(parsed);
            }
        }
        for (key, value) in call_params {
            event.set_property(key.clone(), serde_json::Value::String(value.clone()));
        }
        event
    }
}

impl Tracker for TrackingAdapter {
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
        let settings = self.settings.read().clone();

        let mut call_params = params.cloned().unwrap_or_default();
        if !settings.allow_device_identifiers {
            call_params = fields::strip_device_identifiers(&call_params);
        }

        if settings.forward_to_tracker {
            let mut merged = self.params.lock().clone();
            for (key, value) in &call_params {
                merged.insert(key.clone(), value.clone());
            }
            if !settings.allow_device_identifiers {
                merged = fields::strip_device_identifiers(&merged);
            }
            debug!(
                tracker = %self.name,
                params = merged.len(),
                "Forwarding to wrapped tracker"
            );
            self.tracker.send(Some(&merged));
        }

        if settings.mirror_to_sink {
            let hooks = self.hooks.read();

            let mut event = match &hooks.creation {
                Some(create) => match create(&call_params, self.tracker.as_ref()) {
                    Some(event) => event,
                    None => {
                        debug!(
                            tracker = %self.name,
                            "Creation hook returned no event, skipping secondary channel"
                        );
                        return;
                    }
                },
                None => Self::default_event(&call_params),
            };

            if let Some(customize) = &hooks.customization {
                customize(&mut event, &call_params, self.tracker.as_ref());
            }
            drop(hooks);

            debug!(tracker = %self.name, event = %event.name, "Mirroring to secondary sink");
            self.sink.dispatch(event, self.tracker.as_ref());
        }
    }
}
