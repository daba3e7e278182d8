//! Runtime version parsing and ordering.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use semver::Version;

use crate::error::RuntimeError;

const PREVIEW_MARKER: &str = "-preview.";

/// A `M.m.p` runtime version with an optional `-preview.x.y.z` sub-version.
///
/// Ordering compares the base triple first. For equal bases a stable
/// release sorts above any preview, and two previews compare by their
/// preview triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuntimeVersionNumber {
    version: Version,
    preview: Option<Version>,
}

impl RuntimeVersionNumber {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            version: Version::new(major, minor, patch),
            preview: None,
        }
    }

    /// Attach a preview sub-version, e.g. `8.0.0` -> `8.0.0-preview.7.0.1`.
    pub fn with_preview(mut self, major: u64, minor: u64, patch: u64) -> Self {
        self.preview = Some(Version::new(major, minor, patch));
        self
    }

    /// Parse a base triple and an optional preview triple, both `M.m.p`.
    pub fn parse(version: &str, preview: Option<&str>) -> Result<Self, RuntimeError> {
        Ok(Self {
            version: parse_triple(version)?,
            preview: preview.map(parse_triple).transpose()?,
        })
    }

    pub fn major(&self) -> u64 {
        self.version.major
    }

    pub fn minor(&self) -> u64 {
        self.version.minor
    }

    pub fn patch(&self) -> u64 {
        self.version.patch
    }

    pub fn is_preview(&self) -> bool {
        self.preview.is_some()
    }

    /// The preview triple, if this is a preview build.
    pub fn preview(&self) -> Option<(u64, u64, u64)> {
        self.preview.as_ref().map(|p| (p.major, p.minor, p.patch))
    }
}

fn parse_triple(input: &str) -> Result<Version, RuntimeError> {
    let malformed = |reason: String| RuntimeError::MalformedVersion {
        input: input.to_string(),
        reason,
    };

    let parts: Vec<&str> = input.split('.').collect();
    if parts.len() != 3 {
        return Err(malformed(format!(
            "expected 3 components, found {}",
            parts.len()
        )));
    }

    let mut numbers = [0u64; 3];
    for (slot, part) in numbers.iter_mut().zip(&parts) {
        // `u64::from_str` accepts a leading '+', so check the digits first.
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed(format!(
                "component '{part}' is not a non-negative integer"
            )));
        }
        *slot = part
            .parse()
            .map_err(|e| malformed(format!("component '{part}': {e}")))?;
    }

    Ok(Version::new(numbers[0], numbers[1], numbers[2]))
}

impl Ord for RuntimeVersionNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.version
            .cmp(&other.version)
            .then_with(|| match (&self.preview, &other.preview) {
                (None, None) => Ordering::Equal,
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (Some(a), Some(b)) => a.cmp(b),
            })
    }
}

impl PartialOrd for RuntimeVersionNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for RuntimeVersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.version)?;
        if let Some(preview) = &self.preview {
            write!(f, "{PREVIEW_MARKER}{preview}")?;
        }
        Ok(())
    }
}

impl FromStr for RuntimeVersionNumber {
    type Err = RuntimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(PREVIEW_MARKER) {
            Some((version, preview)) => Self::parse(version, Some(preview)),
            None => Self::parse(s, None),
        }
    }
}

/// An installed runtime version together with the directory it is listed under.
///
/// Identity is the full path (`<dir>/<version>`), not the numeric version:
/// two listings of the same version in different locations are distinct.
/// Use [`RuntimeVersion::number`] to order by version.
#[derive(Debug, Clone)]
pub struct RuntimeVersion {
    dir: PathBuf,
    number: RuntimeVersionNumber,
    full_path: PathBuf,
}

impl RuntimeVersion {
    pub fn new(dir: impl Into<PathBuf>, number: RuntimeVersionNumber) -> Self {
        let dir = dir.into();
        let full_path = dir.join(number.to_string());
        Self {
            dir,
            number,
            full_path,
        }
    }

    /// Parse the version strings captured from a listing line.
    pub fn parse(
        dir: impl Into<PathBuf>,
        version: &str,
        preview: Option<&str>,
    ) -> Result<Self, RuntimeError> {
        let number = RuntimeVersionNumber::parse(version, preview)?;
        Ok(Self::new(dir, number))
    }

    /// The directory the runtime family is installed under.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn number(&self) -> &RuntimeVersionNumber {
        &self.number
    }

    /// `<dir>/M.m.p` or `<dir>/M.m.p-preview.x.y.z`.
    pub fn full_path(&self) -> &Path {
        &self.full_path
    }
}

impl PartialEq for RuntimeVersion {
    fn eq(&self, other: &Self) -> bool {
        self.full_path == other.full_path
    }
}

impl Eq for RuntimeVersion {}

impl Hash for RuntimeVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.full_path.hash(state);
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_path.display())
    }
}
