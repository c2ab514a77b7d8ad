//! Custom events for the secondary reporting channel.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{BridgeError, BridgeResult};

/// Maximum accepted length of a custom event name.
pub const MAX_EVENT_NAME_LEN: usize = 255;

/// An event dispatched to the secondary reporting sink, either synthesized
/// from a tracked call or built by a caller-supplied creation hook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomEvent {
    pub id: Uuid,
    pub name: String,
    /// Optional numeric value attached to the event (e.g. a GA event value).
    pub value: Option<f64>,
    pub transaction_id: Option<String>,
    pub interaction_type: Option<String>,
    pub interaction_id: Option<String>,
    pub properties: HashMap<String, serde_json::Value>,
    pub occurred_at: DateTime<Utc>,
}

impl CustomEvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            value: None,
            transaction_id: None,
            interaction_type: None,
            interaction_id: None,
            properties: HashMap::new(),
            occurred_at: Utc::now(),
        }
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn set_property(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.properties.insert(key.into(), value);
    }

    /// Check that the event is acceptable for dispatch: non-empty name
    /// within the length cap, and a finite value if one is set.
    pub fn validate(&self) -> BridgeResult<()> {
        if self.name.is_empty() {
            return Err(BridgeError::InvalidEvent("event name is empty".into()));
        }
        if self.name.len() > MAX_EVENT_NAME_LEN {
            return Err(BridgeError::InvalidEvent(format!(
                "event name exceeds {} characters",
                MAX_EVENT_NAME_LEN
            )));
        }
        if let Some(value) = self.value {
            if !value.is_finite() {
                return Err(BridgeError::InvalidEvent(format!(
                    "event value {} is not finite",
                    value
                )));
            }
        }
        Ok(())
    }
}
