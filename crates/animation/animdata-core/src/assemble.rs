//! Builds the per-clip `AnimationData` record from raw channel samples.

use serde::{Deserialize, Serialize};

use crate::data::{AnimationData, Event, QuaternionCurve, Vector3Curve};
use crate::fixed_point::{encode_curve_with, CurveSample, OverflowPolicy};
use crate::Result;

/// Raw float samples for the seven animated channels. A channel the clip does not
/// animate is left empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClipChannels {
    /// x, y, z
    pub position: [Vec<CurveSample>; 3],
    /// x, y, z, w
    pub rotation: [Vec<CurveSample>; 4],
}

impl ClipChannels {
    pub fn is_empty(&self) -> bool {
        self.position.iter().chain(self.rotation.iter()).all(Vec::is_empty)
    }
}

/// Assemble a record for a clip. Looping clips produce `None`: only the loop flag is
/// kept, on the host's clip object.
///
/// `events` are stable-sorted by time, so ties keep the order they were passed in.
pub fn assemble(
    length: i32,
    looping: bool,
    events: Vec<Event>,
    channels: &ClipChannels,
) -> Result<Option<AnimationData>> {
    assemble_with(length, looping, events, channels, OverflowPolicy::Reject)
}

pub fn assemble_with(
    length: i32,
    looping: bool,
    mut events: Vec<Event>,
    channels: &ClipChannels,
    policy: OverflowPolicy,
) -> Result<Option<AnimationData>> {
    if looping {
        return Ok(None);
    }
    events.sort_by_key(|e| e.time);

    let [px, py, pz] = &channels.position;
    let [rx, ry, rz, rw] = &channels.rotation;
    let position_curve = Vector3Curve {
        x: encode_curve_with(px, policy)?,
        y: encode_curve_with(py, policy)?,
        z: encode_curve_with(pz, policy)?,
    };
    let rotation_curve = QuaternionCurve {
        x: encode_curve_with(rx, policy)?,
        y: encode_curve_with(ry, policy)?,
        z: encode_curve_with(rz, policy)?,
        w: encode_curve_with(rw, policy)?,
    };

    Ok(Some(AnimationData {
        length,
        event_list: events,
        position_curve,
        rotation_curve,
    }))
}
