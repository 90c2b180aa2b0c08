//! JSON form of the `AnimationData` record.
//!
//! Notes:
//! - Field names follow the host record (`length`, `eventList`, `positionCurve`, ...).
//! - Missing curves load as empty (not animated).
//! - Loading validates ordering: events sorted by time, keyframe times non-decreasing.

use crate::data::AnimationData;
use crate::error::AnimDataError;
use crate::Result;

/// Parse a stored record and validate its ordering invariants.
pub fn parse_animation_json(s: &str) -> Result<AnimationData> {
    let data: AnimationData = serde_json::from_str(s)?;
    data.validate_basic()
        .map_err(|reason| AnimDataError::InvalidRecord { reason })?;
    Ok(data)
}

/// Export a record as serde_json::Value (stable schema for serialization).
pub fn export_animation_json(data: &AnimationData) -> serde_json::Value {
    serde_json::to_value(data).unwrap_or(serde_json::Value::Null)
}

/// Export a record as pretty-printed JSON text.
pub fn export_animation_json_string(data: &AnimationData) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}
