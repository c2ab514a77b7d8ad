//! Runtime settings for the bridge.

use serde::{Deserialize, Serialize};

/// Flags controlling the two downstream channels of a
/// [`TrackingAdapter`](crate::adapter::TrackingAdapter). The two channels
/// are independent; disabling one never affects the other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeSettings {
    /// Forward each `send` to the wrapped tracker (default: true).
    pub forward_to_tracker: bool,
    /// Mirror each `send` into the secondary sink as a custom event
    /// (default: true).
    pub mirror_to_sink: bool,
    /// Allow device-advertising identifiers (IDFA and related fields) to
    /// pass through on both channels (default: false).
    pub allow_device_identifiers: bool,
}

impl Default for BridgeSettings {
    fn default() -> Self {
        Self {
            forward_to_tracker: true,
            mirror_to_sink: true,
            allow_device_identifiers: false,
        }
    }
}
