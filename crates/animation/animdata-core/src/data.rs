//! Fixed-point animation record (AnimationData) and its parts.
//!
//! Field names on the wire follow the host record layout (`val`, `inTan`, `eventList`, ...).

use serde::{Deserialize, Serialize};

/// One sample of a scalar curve. Every field is fixed-point with scale 1/10000.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct KeyFrame {
    #[serde(rename = "val")]
    pub value: i32,
    pub time: i32,
    #[serde(rename = "inTan")]
    pub in_tangent: i32,
    #[serde(rename = "outTan")]
    pub out_tangent: i32,
}

/// Ordered keyframes of one animated channel. Empty means "not animated".
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    #[serde(default)]
    pub points: Vec<KeyFrame>,
}

impl Curve {
    pub fn new(points: Vec<KeyFrame>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Vector3Curve {
    #[serde(default)]
    pub x: Curve,
    #[serde(default)]
    pub y: Curve,
    #[serde(default)]
    pub z: Curve,
}

/// Rotation stored per component. Components are not re-normalized on decode.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct QuaternionCurve {
    #[serde(default)]
    pub x: Curve,
    #[serde(default)]
    pub y: Curve,
    #[serde(default)]
    pub z: Curve,
    #[serde(default)]
    pub w: Curve,
}

/// Discrete timeline marker. `time` is whole ticks (not fixed-point scaled).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: i32,
    pub time: i32,
}

/// Immutable per-clip record, produced only for non-looping clips.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct AnimationData {
    pub length: i32,
    #[serde(rename = "eventList", default)]
    pub event_list: Vec<Event>,
    #[serde(rename = "positionCurve", default)]
    pub position_curve: Vector3Curve,
    #[serde(rename = "rotationCurve", default)]
    pub rotation_curve: QuaternionCurve,
}

impl AnimationData {
    /// All seven channels with their labels, position first.
    pub fn channels(&self) -> [(&'static str, &Curve); 7] {
        [
            ("position.x", &self.position_curve.x),
            ("position.y", &self.position_curve.y),
            ("position.z", &self.position_curve.z),
            ("rotation.x", &self.rotation_curve.x),
            ("rotation.y", &self.rotation_curve.y),
            ("rotation.z", &self.rotation_curve.z),
            ("rotation.w", &self.rotation_curve.w),
        ]
    }

    /// Validate basic invariants (events sorted by time, keyframe times non-decreasing).
    pub fn validate_basic(&self) -> Result<(), String> {
        if self.event_list.windows(2).any(|w| w[0].time > w[1].time) {
            return Err("eventList must be sorted by time".into());
        }
        for (label, curve) in self.channels() {
            if curve.points.windows(2).any(|w| w[0].time > w[1].time) {
                return Err(format!("Keyframe times must be non-decreasing for '{label}'"));
            }
        }
        Ok(())
    }
}
