use cmakefix_core::{DirectiveKind, DirectiveMatch};
use regex::Regex;
use std::sync::LazyLock;

static MIN_REQUIRED_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*cmake_minimum_required\s*\(\s*VERSION\s+([0-9.]+)")
        .expect("hardcoded regex must compile")
});

static POLICY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*cmake_policy\s*\(\s*VERSION\s+([0-9.]+)")
        .expect("hardcoded regex must compile")
});

const RANGE_SEPARATOR: &str = "...";

/// Recognise a version directive at the start of `line`.
///
/// `index` is the line's position in its file and is carried into the match.
#[must_use]
pub fn match_line(index: usize, line: &str) -> Option<DirectiveMatch> {
    [
        (DirectiveKind::MinRequired, &*MIN_REQUIRED_PATTERN),
        (DirectiveKind::Policy, &*POLICY_PATTERN),
    ]
    .into_iter()
    .find_map(|(kind, pattern)| {
        let version = pattern.captures(line)?.get(1)?;
        Some(DirectiveMatch::new(
            index,
            kind,
            version.as_str().to_string(),
            version.range(),
        ))
    })
}

/// Split a `min...max` version range; a plain version has no max.
#[must_use]
pub fn split_range(version: &str) -> (&str, Option<&str>) {
    match version.split_once(RANGE_SEPARATOR) {
        Some((min, max)) => (min, Some(max)),
        None => (version, None),
    }
}
