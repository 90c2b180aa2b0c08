//! Host clip bindings and their mapping onto the seven encoded channels.
//!
//! Hosts expose a clip as a list of curve bindings keyed by property name
//! (`m_LocalPosition.x`, `m_LocalRotation.w`, ...). Only local position and rotation
//! are encoded; every other property is ignored.

use serde::{Deserialize, Serialize};

use crate::fixed_point::CurveSample;

/// One of the seven channels stored in an `AnimationData` record.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ChannelTarget {
    PositionX,
    PositionY,
    PositionZ,
    RotationX,
    RotationY,
    RotationZ,
    RotationW,
}

impl ChannelTarget {
    pub const ALL: [ChannelTarget; 7] = [
        ChannelTarget::PositionX,
        ChannelTarget::PositionY,
        ChannelTarget::PositionZ,
        ChannelTarget::RotationX,
        ChannelTarget::RotationY,
        ChannelTarget::RotationZ,
        ChannelTarget::RotationW,
    ];

    /// Map a host property name to a channel. Exact, case-sensitive match.
    pub fn from_property(property: &str) -> Option<Self> {
        match property {
            "m_LocalPosition.x" => Some(Self::PositionX),
            "m_LocalPosition.y" => Some(Self::PositionY),
            "m_LocalPosition.z" => Some(Self::PositionZ),
            "m_LocalRotation.x" => Some(Self::RotationX),
            "m_LocalRotation.y" => Some(Self::RotationY),
            "m_LocalRotation.z" => Some(Self::RotationZ),
            "m_LocalRotation.w" => Some(Self::RotationW),
            _ => None,
        }
    }

    pub fn property(self) -> &'static str {
        match self {
            Self::PositionX => "m_LocalPosition.x",
            Self::PositionY => "m_LocalPosition.y",
            Self::PositionZ => "m_LocalPosition.z",
            Self::RotationX => "m_LocalRotation.x",
            Self::RotationY => "m_LocalRotation.y",
            Self::RotationZ => "m_LocalRotation.z",
            Self::RotationW => "m_LocalRotation.w",
        }
    }
}

/// A host curve and the property it animates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveBinding {
    pub property: String,
    #[serde(default)]
    pub samples: Vec<CurveSample>,
}

/// Read-only view of a host clip. Hosts implement this over their native clip type.
pub trait ClipSource {
    fn name(&self) -> &str;
    /// Clip duration in seconds.
    fn length(&self) -> f32;
    fn bindings(&self) -> Vec<CurveBinding>;
}

/// A clip already sampled into plain data (JSON-loadable).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SampledClip {
    pub name: String,
    /// Seconds.
    pub length: f32,
    #[serde(default)]
    pub bindings: Vec<CurveBinding>,
}

impl ClipSource for SampledClip {
    fn name(&self) -> &str {
        &self.name
    }

    fn length(&self) -> f32 {
        self.length
    }

    fn bindings(&self) -> Vec<CurveBinding> {
        self.bindings.clone()
    }
}
