//! Optional callbacks for shaping secondary-channel events.

use std::fmt;

use bridge_core::{CustomEvent, Params, Tracker};

/// Builds the secondary-channel event for one tracked call. Returning
/// `None` suppresses the secondary channel for that call entirely,
/// including customization and dispatch.
pub type EventCreationFn =
    Box<dyn Fn(&Params, &dyn Tracker) -> Option<CustomEvent> + Send + Sync>;

/// Mutates a secondary-channel event in place after it has been populated
/// with default parameters, before dispatch.
pub type EventCustomizationFn =
    Box<dyn Fn(&mut CustomEvent, &Params, &dyn Tracker) + Send + Sync>;

/// The two optional hooks, held together so "hook present vs absent" is an
/// explicit state on one configuration value.
#[derive(Default)]
pub struct EventHooks {
    pub creation: Option<EventCreationFn>,
    pub customization: Option<EventCustomizationFn>,
}

impl EventHooks {
    pub fn with_creation<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Params, &dyn Tracker) -> Option<CustomEvent> + Send + Sync + 'static,
    {
        self.creation = Some(Box::new(hook));
        self
    }

    pub fn with_customization<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut CustomEvent, &Params, &dyn Tracker) + Send + Sync + 'static,
    {
        self.customization = Some(Box::new(hook));
        self
    }
}

impl fmt::Debug for EventHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHooks")
            .field("creation", &self.creation.is_some())
            .field("customization", &self.customization.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hooks_are_absent() {
        let hooks = EventHooks::default();
        assert!(hooks.creation.is_none());
        assert!(hooks.customization.is_none());
    }

    #[test]
    fn test_builder_sets_hooks() {
        let hooks = EventHooks::default()
            .with_creation(|_, _| Some(CustomEvent::new("custom")))
            .with_customization(|event, _, _| {
                event.set_property("extra", serde_json::json!(true));
            });
        assert!(hooks.creation.is_some());
        assert!(hooks.customization.is_some());
    }
}
