//! Event timeline text parser.
//!
//! Grammar, one statement per line:
//! - `loop` (after trimming) marks the clip as looping, wherever it appears.
//! - Blank lines are skipped.
//! - Anything else is split on `,`, `_` and ` ` (empty tokens dropped). Exactly two
//!   tokens form an event `name,time`; any other count is skipped without error, which
//!   lets authors leave comment-like notes in the file.
//!
//! A two-token line whose name is not a known event kind, or whose time is not an
//! integer, fails the whole parse.

use std::path::Path;

use hashbrown::HashMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::data::Event;
use crate::error::AnimDataError;
use crate::Result;

const LOOP_TOKEN: &str = "loop";
const SEPARATORS: [char; 3] = [',', '_', ' '];

/// Closed name <-> integer table of event kinds, supplied by the host.
///
/// Serialized as an ordered list of `{ "name": ..., "value": ... }` entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<EventKind>", into = "Vec<EventKind>")]
pub struct EventKinds {
    entries: Vec<EventKind>,
    by_name: HashMap<String, i32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventKind {
    pub name: String,
    pub value: i32,
}

impl EventKinds {
    /// Build from explicit `(name, value)` pairs. A repeated name keeps its last value.
    pub fn new<I, S>(kinds: I) -> Self
    where
        I: IntoIterator<Item = (S, i32)>,
        S: Into<String>,
    {
        kinds
            .into_iter()
            .map(|(name, value)| EventKind {
                name: name.into(),
                value,
            })
            .collect::<Vec<_>>()
            .into()
    }

    /// Build from names only, numbering them 0, 1, 2, ... like a plain enum.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().zip(0..))
    }

    /// Case-sensitive lookup of a kind by name.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<i32> {
        self.by_name.get(name).copied()
    }

    /// First declared name for a kind value.
    pub fn name_of(&self, value: i32) -> Option<&str> {
        self.entries
            .iter()
            .find(|k| k.value == value)
            .map(|k| k.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EventKind> {
        self.entries.iter()
    }
}

impl From<Vec<EventKind>> for EventKinds {
    fn from(entries: Vec<EventKind>) -> Self {
        let by_name = entries
            .iter()
            .map(|k| (k.name.clone(), k.value))
            .collect();
        Self { entries, by_name }
    }
}

impl From<EventKinds> for Vec<EventKind> {
    fn from(kinds: EventKinds) -> Self {
        kinds.entries
    }
}

/// Parsed timeline: events sorted by time plus the loop flag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub events: Vec<Event>,
    pub looping: bool,
}

/// Parse timeline text against the given event-kind table.
pub fn parse_timeline(text: &str, kinds: &EventKinds) -> Result<Timeline> {
    let mut timeline = Timeline::default();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if line == LOOP_TOKEN {
            timeline.looping = true;
            continue;
        }

        let tokens: Vec<&str> = line.split(SEPARATORS).filter(|t| !t.is_empty()).collect();
        let [name, value] = tokens.as_slice() else {
            debug!(
                "timeline line {} skipped ({} tokens): {line}",
                idx + 1,
                tokens.len()
            );
            continue;
        };

        let malformed = |reason: String| AnimDataError::MalformedEventLine {
            line: idx + 1,
            text: line.to_string(),
            reason,
        };
        let kind = kinds
            .lookup(name)
            .ok_or_else(|| malformed(format!("unknown event '{name}'")))?;
        let time = value
            .parse::<i32>()
            .map_err(|e| malformed(format!("invalid time '{value}': {e}")))?;
        timeline.events.push(Event { kind, time });
    }

    // Vec::sort_by_key is stable: events sharing a time keep file order.
    timeline.events.sort_by_key(|e| e.time);
    Ok(timeline)
}

/// Read and parse a timeline file.
pub fn read_timeline_file(path: impl AsRef<Path>, kinds: &EventKinds) -> Result<Timeline> {
    let text = std::fs::read_to_string(path.as_ref())?;
    parse_timeline(&text, kinds)
}
