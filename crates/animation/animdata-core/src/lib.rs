//! animdata core (engine-agnostic)
//!
//! Turns authored animation clips into compact fixed-point records and back:
//! - `fixed_point`: float samples <-> integer keyframes (scale 10000, truncating).
//! - `timeline`: line-based event timeline text -> sorted events + loop flag.
//! - `assemble`: builds the immutable `AnimationData` record for non-looping clips.
//!
//! Around the core sit the host-facing pieces: channel bindings and clip import,
//! a decoded inspection view, and JSON (de)serialization of records.

pub mod assemble;
pub mod binding;
pub mod config;
pub mod data;
pub mod error;
pub mod fixed_point;
pub mod import;
pub mod inspect;
pub mod stored_animation;
pub mod timeline;

// Re-exports for consumers (hosts)
pub use assemble::{assemble, assemble_with, ClipChannels};
pub use binding::{ChannelTarget, ClipSource, CurveBinding, SampledClip};
pub use config::ImportConfig;
pub use data::{AnimationData, Curve, Event, KeyFrame, QuaternionCurve, Vector3Curve};
pub use error::AnimDataError;
pub use fixed_point::{
    decode, decode_curve, encode, encode_curve, encode_curve_with, try_encode, CurveSample,
    OverflowPolicy, FIXED_POINT_SCALE,
};
pub use import::{import_clip, import_clip_from_path, ImportedClip};
pub use inspect::{AnimationView, TangentMode};
pub use stored_animation::{
    export_animation_json, export_animation_json_string, parse_animation_json,
};
pub use timeline::{parse_timeline, read_timeline_file, EventKinds, Timeline};

/// Result type for this crate.
pub type Result<T> = core::result::Result<T, AnimDataError>;
