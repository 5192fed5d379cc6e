use std::{fmt::Display, ops::Range};

use serde::{Deserialize, Serialize};

/// The two version-declaring commands that are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DirectiveKind {
    /// `cmake_minimum_required(VERSION x.y)`
    MinRequired,
    /// `cmake_policy(VERSION x.y)`
    Policy,
}

impl DirectiveKind {
    /// Command name as written in a `CMakeLists.txt`
    #[must_use]
    pub const fn command(&self) -> &'static str {
        match self {
            Self::MinRequired => "cmake_minimum_required",
            Self::Policy => "cmake_policy",
        }
    }
}

impl Display for DirectiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.command())
    }
}

/// A recognised directive on a single line.
///
/// `span` is the byte range of `version` inside the line it was matched on, so a
/// rewrite can replace exactly that substring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectiveMatch {
    pub line: usize,
    pub kind: DirectiveKind,
    pub version: String,
    #[serde(skip)]
    pub span: Range<usize>,
}

impl DirectiveMatch {
    #[must_use]
    pub const fn new(line: usize, kind: DirectiveKind, version: String, span: Range<usize>) -> Self {
        Self {
            line,
            kind,
            version,
            span,
        }
    }
}
