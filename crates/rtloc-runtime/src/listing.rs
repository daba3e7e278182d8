//! Parsing of `dotnet --list-runtimes` output.
//!
//! Each listed runtime is one line shaped like
//! `Microsoft.NETCore.App 7.0.2 [/usr/share/dotnet/shared/Microsoft.NETCore.App]`,
//! optionally with a `-preview.x.y.z` suffix on the version.

use std::collections::BTreeMap;

use crate::error::RuntimeError;
use crate::version::RuntimeVersion;

/// The fields of a listing line, borrowed from the line itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListedRuntime<'a> {
    pub family: &'a str,
    pub version: &'a str,
    pub preview: Option<&'a str>,
    pub location: &'a str,
}

impl<'a> ListedRuntime<'a> {
    /// Split a line into its fields, or `None` if it does not have the
    /// `<family> <version>[-preview.<preview>] [<location>]` shape.
    ///
    /// Fields are separated by exactly one whitespace character, the family
    /// and location contain no whitespace, and the bracketed location ends
    /// the line. Version components are not validated here.
    pub fn tokenize(line: &'a str) -> Option<Self> {
        let (family, rest) = next_token(line)?;
        let (version, rest) = next_token(rest)?;
        let location = rest.strip_prefix('[')?.strip_suffix(']')?;
        if location.is_empty() || location.contains(char::is_whitespace) {
            return None;
        }

        let (version, preview) = match version.split_once("-preview.") {
            Some((version, preview)) => (version, Some(preview)),
            None => (version, None),
        };
        if version.is_empty() || preview.is_some_and(str::is_empty) {
            return None;
        }

        Some(Self {
            family,
            version,
            preview,
            location,
        })
    }
}

/// Take one non-empty token and skip the single separator that follows it.
fn next_token(s: &str) -> Option<(&str, &str)> {
    let end = s.find(char::is_whitespace)?;
    if end == 0 {
        return None;
    }
    let (token, rest) = s.split_at(end);
    let mut rest = rest.chars();
    rest.next();
    Some((token, rest.as_str()))
}

/// Parse one listing line into its family name and runtime version.
pub fn parse_line(line: &str) -> Result<(String, RuntimeVersion), RuntimeError> {
    let listed =
        ListedRuntime::tokenize(line).ok_or_else(|| RuntimeError::MalformedListingLine {
            line: line.to_string(),
        })?;
    let version = RuntimeVersion::parse(listed.location, listed.version, listed.preview)?;
    Ok((listed.family.to_string(), version))
}

/// Family name to the runtime version kept for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeFamilyMap {
    entries: BTreeMap<String, RuntimeVersion>,
}

impl RuntimeFamilyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `version` for `family`, replacing any earlier entry.
    ///
    /// The replacement is unconditional: a later listing line wins even
    /// when it names an older version.
    pub fn insert(&mut self, family: impl Into<String>, version: RuntimeVersion) {
        let family = family.into();
        if let Some(previous) = self.entries.insert(family.clone(), version) {
            tracing::trace!("Replaced {previous} for {family}");
        }
    }

    pub fn get(&self, family: &str) -> Result<&RuntimeVersion, RuntimeError> {
        self.entries
            .get(family)
            .ok_or_else(|| RuntimeError::FamilyNotFound {
                family: family.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in family-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuntimeVersion)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Parse listing lines in order into a [`RuntimeFamilyMap`].
///
/// Lines that do not parse are skipped; they never abort the remaining lines.
pub fn parse_runtimes<S: AsRef<str>>(lines: &[S]) -> RuntimeFamilyMap {
    let mut runtimes = RuntimeFamilyMap::new();
    for line in lines {
        match parse_line(line.as_ref()) {
            Ok((family, version)) => runtimes.insert(family, version),
            Err(e) => tracing::debug!("Skipping listed runtime: {e}"),
        }
    }
    runtimes
}
