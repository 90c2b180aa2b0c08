//! Import configuration.

use serde::{Deserialize, Serialize};

use crate::fixed_point::OverflowPolicy;

/// Settings for turning a host clip into an `AnimationData` record.
/// Missing fields in JSON take their default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Drop bindings whose property name mentions "scale" from the imported clip.
    pub strip_scale_channels: bool,

    /// Extension of the timeline file that sits next to the source clip.
    pub timeline_extension: String,

    /// How samples outside the fixed-point range are handled.
    pub overflow: OverflowPolicy,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            strip_scale_channels: true,
            timeline_extension: "txt".to_string(),
            overflow: OverflowPolicy::Reject,
        }
    }
}
