//! Event definitions: named transition templates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel accepted in place of a source state name, meaning "whichever
/// state is currently active".
pub const ANY_STATE: &str = "any";

/// Allowed source(s) of an event.
///
/// In JSON documents a source is written as a state name, a list of
/// candidate names, or the string `"any"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SourceRepr", into = "SourceRepr")]
pub enum Source {
    /// Exactly this state must be active.
    State(String),
    /// One of these candidates must be active; the active one becomes the
    /// concrete source.
    AnyOf(Vec<String>),
    /// Whatever state is active.
    Any,
}

impl Source {
    /// Source naming a single state, taken literally even if it is `"any"`.
    pub fn state(name: impl Into<String>) -> Self {
        Self::State(name.into())
    }

    /// Source accepting any of the given candidates.
    pub fn any_of<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::AnyOf(candidates.into_iter().map(Into::into).collect())
    }

    /// State names this source refers to. Empty for [`Source::Any`].
    pub fn names(&self) -> &[String] {
        match self {
            Self::State(name) => std::slice::from_ref(name),
            Self::AnyOf(candidates) => candidates,
            Self::Any => &[],
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::State(name) => f.write_str(name),
            Self::AnyOf(candidates) => f.write_str(&candidates.join(" or ")),
            Self::Any => f.write_str(ANY_STATE),
        }
    }
}

impl From<&str> for Source {
    fn from(name: &str) -> Self {
        if name == ANY_STATE {
            Self::Any
        } else {
            Self::State(name.to_string())
        }
    }
}

impl From<String> for Source {
    fn from(name: String) -> Self {
        if name == ANY_STATE {
            Self::Any
        } else {
            Self::State(name)
        }
    }
}

impl From<Vec<String>> for Source {
    fn from(candidates: Vec<String>) -> Self {
        Self::AnyOf(candidates)
    }
}

impl From<Vec<&str>> for Source {
    fn from(candidates: Vec<&str>) -> Self {
        Self::any_of(candidates)
    }
}

impl<const N: usize> From<[&str; N]> for Source {
    fn from(candidates: [&str; N]) -> Self {
        Self::any_of(candidates)
    }
}

impl From<&Source> for Source {
    fn from(source: &Source) -> Self {
        source.clone()
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum SourceRepr {
    One(String),
    Many(Vec<String>),
}

impl From<SourceRepr> for Source {
    fn from(repr: SourceRepr) -> Self {
        match repr {
            SourceRepr::One(name) => name.into(),
            SourceRepr::Many(candidates) => Self::AnyOf(candidates),
        }
    }
}

impl From<Source> for SourceRepr {
    fn from(source: Source) -> Self {
        match source {
            Source::State(name) => Self::One(name),
            Source::AnyOf(candidates) => Self::Many(candidates),
            Source::Any => Self::One(ANY_STATE.to_string()),
        }
    }
}

/// Definition of an event: allowed source(s) and a single destination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSpec {
    pub from: Source,
    pub to: String,
}

impl EventSpec {
    pub fn new(from: impl Into<Source>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Runtime record of a named event. Immutable after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventRecord {
    pub(crate) name: String,
    pub(crate) from: Source,
    pub(crate) to: String,
}

impl EventRecord {
    pub(crate) fn from_spec(name: String, spec: EventSpec) -> Self {
        Self {
            name,
            from: spec.from,
            to: spec.to,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn from(&self) -> &Source {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }
}
