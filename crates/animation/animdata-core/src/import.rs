//! Clip import: host bindings + timeline text -> loop flag and optional record.

use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::assemble::{assemble_with, ClipChannels};
use crate::binding::{ChannelTarget, ClipSource, CurveBinding};
use crate::config::ImportConfig;
use crate::data::AnimationData;
use crate::timeline::{parse_timeline, EventKinds};
use crate::Result;

/// Result of importing one clip. `data` is `None` for looping clips.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImportedClip {
    pub name: String,
    pub looping: bool,
    /// Curves the host should keep on its re-exported clip. Scale curves are absent
    /// when `strip_scale_channels` is set.
    pub bindings: Vec<CurveBinding>,
    pub data: Option<AnimationData>,
}

fn is_scale_property(property: &str) -> bool {
    property.to_lowercase().contains("scale")
}

/// The clip's bindings, minus scale curves when configured.
pub fn retained_bindings<C: ClipSource + ?Sized>(
    clip: &C,
    cfg: &ImportConfig,
) -> Vec<CurveBinding> {
    clip.bindings()
        .into_iter()
        .filter(|b| {
            let strip = cfg.strip_scale_channels && is_scale_property(&b.property);
            if strip {
                debug!("{}: dropping scale binding '{}'", clip.name(), b.property);
            }
            !strip
        })
        .collect()
}

/// Gather the position/rotation channels of a clip. A later binding for the same
/// channel replaces an earlier one.
pub fn collect_channels<C: ClipSource + ?Sized>(clip: &C, cfg: &ImportConfig) -> ClipChannels {
    channels_from_bindings(clip.name(), &retained_bindings(clip, cfg))
}

fn channels_from_bindings(clip_name: &str, bindings: &[CurveBinding]) -> ClipChannels {
    let mut channels = ClipChannels::default();
    let mut seen = [false; 7];

    for binding in bindings {
        let Some(target) = ChannelTarget::from_property(&binding.property) else {
            debug!("{clip_name}: ignoring binding '{}'", binding.property);
            continue;
        };

        let slot = match target {
            ChannelTarget::PositionX => &mut channels.position[0],
            ChannelTarget::PositionY => &mut channels.position[1],
            ChannelTarget::PositionZ => &mut channels.position[2],
            ChannelTarget::RotationX => &mut channels.rotation[0],
            ChannelTarget::RotationY => &mut channels.rotation[1],
            ChannelTarget::RotationZ => &mut channels.rotation[2],
            ChannelTarget::RotationW => &mut channels.rotation[3],
        };
        let idx = target as usize;
        if seen[idx] {
            warn!(
                "{clip_name}: duplicate binding for '{}', keeping the last one",
                binding.property
            );
        }
        seen[idx] = true;
        *slot = binding.samples.clone();
    }
    channels
}

/// Import a clip with its timeline text.
///
/// The clip length in seconds is truncated to whole units for the record.
pub fn import_clip<C: ClipSource + ?Sized>(
    clip: &C,
    timeline_text: &str,
    kinds: &EventKinds,
    cfg: &ImportConfig,
) -> Result<ImportedClip> {
    let timeline = parse_timeline(timeline_text, kinds)?;
    let bindings = retained_bindings(clip, cfg);
    let channels = channels_from_bindings(clip.name(), &bindings);
    if channels.is_empty() {
        debug!("{}: no position or rotation bindings", clip.name());
    }
    let length = clip.length() as i32;

    let data = assemble_with(length, timeline.looping, timeline.events, &channels, cfg.overflow)?;
    debug!(
        "{}: imported (looping={}, events={}, record={})",
        clip.name(),
        timeline.looping,
        data.as_ref().map_or(0, |d| d.event_list.len()),
        data.is_some()
    );

    Ok(ImportedClip {
        name: clip.name().to_string(),
        looping: timeline.looping,
        bindings,
        data,
    })
}

/// Timeline file sitting next to a clip: `<dir>/<stem>.<timeline_extension>`.
pub fn timeline_path_for(clip_path: &Path, cfg: &ImportConfig) -> PathBuf {
    clip_path.with_extension(&cfg.timeline_extension)
}

/// Import a clip whose timeline lives next to `clip_path` on disk. The imported clip is
/// named after the file stem rather than the source clip's own name.
pub fn import_clip_from_path<C: ClipSource + ?Sized>(
    clip: &C,
    clip_path: &Path,
    kinds: &EventKinds,
    cfg: &ImportConfig,
) -> Result<ImportedClip> {
    let timeline_path = timeline_path_for(clip_path, cfg);
    debug!("{}: reading timeline {}", clip.name(), timeline_path.display());
    let text = std::fs::read_to_string(&timeline_path)?;
    let mut imported = import_clip(clip, &text, kinds, cfg)?;
    if let Some(stem) = clip_path.file_stem() {
        imported.name = stem.to_string_lossy().into_owned();
    }
    Ok(imported)
}
