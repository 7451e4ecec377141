//! Best-effort version comparison for Maven-style version strings.
//!
//! This is a heuristic, not a semantic-version parser: a known qualifier token
//! is recorded and removed, then the first three runs of digits become
//! major/minor/patch. Anything else (pre-release suffixes, build metadata,
//! classifiers such as `-jre`) is discarded. Versions without digits parse as
//! `0.0.0` and therefore compare equal to each other.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Qualifier tokens recognised anywhere in a version string, checked in this order
const KNOWN_QUALIFIERS: [&str; 4] = ["SNAPSHOT", "Final", "RELEASE", "GA"];

/// A version string reduced to `(major, minor, patch, qualifier)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Recognised qualifier token, empty when none was present
    pub qualifier: String,
}

impl ParsedVersion {
    pub fn parse(version: &str) -> Self {
        let mut qualifier = String::new();
        let mut cleaned = version.to_string();

        if let Some(token) = KNOWN_QUALIFIERS.iter().find(|q| version.contains(*q)) {
            qualifier = (*token).to_string();
            cleaned = cleaned.replace(token, "");
        }

        let mut components = digit_runs(&cleaned).into_iter();
        Self {
            major: components.next().unwrap_or(0),
            minor: components.next().unwrap_or(0),
            patch: components.next().unwrap_or(0),
            qualifier,
        }
    }

    fn numeric(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }
}

impl Ord for ParsedVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.numeric()
            .cmp(&other.numeric())
            .then_with(|| self.qualifier.cmp(&other.qualifier))
    }
}

impl PartialOrd for ParsedVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.qualifier.is_empty() {
            write!(f, "-{}", self.qualifier)?;
        }
        Ok(())
    }
}

/// Extracts every maximal run of ASCII digits, left to right.
/// Runs too long for u64 saturate instead of failing.
fn digit_runs(text: &str) -> Vec<u64> {
    text.split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .map(|run| run.parse::<u64>().unwrap_or(u64::MAX))
        .collect()
}

/// Size of an upgrade, decided by the highest-order component that differs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionJump {
    Patch,
    Minor,
    Major,
}

impl VersionJump {
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionJump::Patch => "patch",
            VersionJump::Minor => "minor",
            VersionJump::Major => "major",
        }
    }
}

impl fmt::Display for VersionJump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True when both versions share major and minor (qualifier ignored)
pub fn same_major_minor(a: &str, b: &str) -> bool {
    let (a, b) = (ParsedVersion::parse(a), ParsedVersion::parse(b));
    a.major == b.major && a.minor == b.minor
}

/// True when both versions share the major component
pub fn same_major(a: &str, b: &str) -> bool {
    ParsedVersion::parse(a).major == ParsedVersion::parse(b).major
}

/// Classifies the upgrade `from` → `to`
pub fn jump_type(from: &str, to: &str) -> VersionJump {
    let (from, to) = (ParsedVersion::parse(from), ParsedVersion::parse(to));
    if from.major != to.major {
        VersionJump::Major
    } else if from.minor != to.minor {
        VersionJump::Minor
    } else {
        VersionJump::Patch
    }
}

/// Returns the versions ordered highest first, using the parsed tuple rather
/// than string order (so `10.1.9` sorts below `10.1.10`).
pub fn sort_descending(versions: &[String]) -> Vec<String> {
    let mut sorted = versions.to_vec();
    sorted.sort_by(|a, b| ParsedVersion::parse(b).cmp(&ParsedVersion::parse(a)));
    sorted
}
