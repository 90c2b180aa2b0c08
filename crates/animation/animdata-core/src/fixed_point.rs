//! Fixed-point codec: float curve samples <-> integer keyframes.
//!
//! Every field is scaled by [`FIXED_POINT_SCALE`] (4 decimal digits) and truncated toward
//! zero, matching an integer cast. The scaling is done in `f64` so that f32 inputs such
//! as `1.2345` land on the expected integer instead of one below it.
//!
//! Out-of-range behavior:
//! - [`encode`] saturates to `i32::MIN`/`i32::MAX` and maps NaN to 0 (float-to-int cast).
//! - [`try_encode`] reports [`AnimDataError::ChannelOverflow`] instead.

use serde::{Deserialize, Serialize};

use crate::data::{Curve, KeyFrame};
use crate::error::AnimDataError;
use crate::Result;

/// Divisor between the integer and float representations.
pub const FIXED_POINT_SCALE: i32 = 10000;

/// One fixed-point unit as a float.
pub const TO_FLOAT_FACTOR: f32 = 1.0 / FIXED_POINT_SCALE as f32;

/// A float curve sample as read from the host's curve representation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveSample {
    pub time: f32,
    pub value: f32,
    #[serde(rename = "inTangent", default)]
    pub in_tangent: f32,
    #[serde(rename = "outTangent", default)]
    pub out_tangent: f32,
}

impl CurveSample {
    pub fn new(time: f32, value: f32, in_tangent: f32, out_tangent: f32) -> Self {
        Self {
            time,
            value,
            in_tangent,
            out_tangent,
        }
    }
}

impl From<(f32, f32, f32, f32)> for CurveSample {
    fn from((time, value, in_tangent, out_tangent): (f32, f32, f32, f32)) -> Self {
        Self::new(time, value, in_tangent, out_tangent)
    }
}

/// What to do with samples whose scaled value does not fit in an `i32`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Fail the whole curve with `ChannelOverflow`.
    #[default]
    Reject,
    /// Clamp to the `i32` range (NaN becomes 0).
    Saturate,
}

#[inline]
fn scaled(value: f32) -> f64 {
    (value as f64 * FIXED_POINT_SCALE as f64).trunc()
}

/// Float to fixed-point, truncating toward zero. Saturates on overflow.
#[inline]
pub fn encode(value: f32) -> i32 {
    scaled(value) as i32
}

/// Float to fixed-point, rejecting values outside the representable range.
#[inline]
pub fn try_encode(value: f32) -> Result<i32> {
    let s = scaled(value);
    if !s.is_finite() || s < i32::MIN as f64 || s > i32::MAX as f64 {
        return Err(AnimDataError::ChannelOverflow {
            value: value.to_string(),
        });
    }
    Ok(s as i32)
}

/// Fixed-point to float.
#[inline]
pub fn decode(fixed: i32) -> f32 {
    (fixed as f64 / FIXED_POINT_SCALE as f64) as f32
}

/// Encode a single sample field by field.
pub fn encode_sample(sample: &CurveSample, policy: OverflowPolicy) -> Result<KeyFrame> {
    let enc = |v: f32| match policy {
        OverflowPolicy::Reject => try_encode(v),
        OverflowPolicy::Saturate => Ok(encode(v)),
    };
    Ok(KeyFrame {
        value: enc(sample.value)?,
        time: enc(sample.time)?,
        in_tangent: enc(sample.in_tangent)?,
        out_tangent: enc(sample.out_tangent)?,
    })
}

#[inline]
pub fn decode_keyframe(kf: &KeyFrame) -> CurveSample {
    CurveSample {
        time: decode(kf.time),
        value: decode(kf.value),
        in_tangent: decode(kf.in_tangent),
        out_tangent: decode(kf.out_tangent),
    }
}

/// Encode samples into a curve, one keyframe per sample, input order kept.
/// Fails with `ChannelOverflow` on the first unrepresentable field.
pub fn encode_curve(samples: &[CurveSample]) -> Result<Curve> {
    encode_curve_with(samples, OverflowPolicy::Reject)
}

pub fn encode_curve_with(samples: &[CurveSample], policy: OverflowPolicy) -> Result<Curve> {
    let points = samples
        .iter()
        .map(|s| encode_sample(s, policy))
        .collect::<Result<Vec<_>>>()?;
    Ok(Curve { points })
}

/// Decode every keyframe of a curve, preserving order.
///
/// Only tangent values are stored; callers feeding these into an interpolator should
/// treat both tangents as free (see [`crate::inspect::TangentMode`]).
pub fn decode_curve(curve: &Curve) -> Vec<CurveSample> {
    curve.points.iter().map(decode_keyframe).collect()
}
