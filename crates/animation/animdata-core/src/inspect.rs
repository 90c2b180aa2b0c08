//! Decoded, read-only view of an `AnimationData` record for inspection tools.

use serde::{Deserialize, Serialize};

use crate::data::{AnimationData, Curve};
use crate::fixed_point::{decode_curve, CurveSample};
use crate::timeline::EventKinds;

/// Tangent handling for decoded keys. Records carry tangent values only, so every
/// decoded key is handed on with independent in/out tangents.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TangentMode {
    #[default]
    Free,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InspectedKey {
    #[serde(flatten)]
    pub sample: CurveSample,
    pub in_mode: TangentMode,
    pub out_mode: TangentMode,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InspectedCurve {
    pub label: &'static str,
    pub keys: Vec<InspectedKey>,
}

impl InspectedCurve {
    fn decode(label: &'static str, curve: &Curve) -> Self {
        let keys = decode_curve(curve)
            .into_iter()
            .map(|sample| InspectedKey {
                sample,
                in_mode: TangentMode::Free,
                out_mode: TangentMode::Free,
            })
            .collect();
        Self { label, keys }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectedEvent {
    /// `None` when the kind is not in the supplied table.
    pub name: Option<String>,
    pub kind: i32,
    pub time: i32,
}

/// Everything an inspector panel shows for one record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnimationView {
    pub length: i32,
    /// X, Y, Z
    pub position: [InspectedCurve; 3],
    /// X, Y, Z, W
    pub rotation: [InspectedCurve; 4],
    pub events: Vec<InspectedEvent>,
}

impl AnimationView {
    pub fn new(data: &AnimationData, kinds: &EventKinds) -> Self {
        let p = &data.position_curve;
        let r = &data.rotation_curve;
        Self {
            length: data.length,
            position: [
                InspectedCurve::decode("X", &p.x),
                InspectedCurve::decode("Y", &p.y),
                InspectedCurve::decode("Z", &p.z),
            ],
            rotation: [
                InspectedCurve::decode("X", &r.x),
                InspectedCurve::decode("Y", &r.y),
                InspectedCurve::decode("Z", &r.z),
                InspectedCurve::decode("W", &r.w),
            ],
            events: data
                .event_list
                .iter()
                .map(|e| InspectedEvent {
                    name: kinds.name_of(e.kind).map(str::to_string),
                    kind: e.kind,
                    time: e.time,
                })
                .collect(),
        }
    }
}
