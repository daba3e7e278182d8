use miette::Diagnostic;
use thiserror::Error;

/// Conditions raised while selecting a runtime.
///
/// None of these are fatal: each one is recovered where it is raised by
/// skipping the offending input or falling through to the next tier.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum RuntimeError {
    /// A listing line does not have the `<family> <version> [<location>]` shape.
    #[error("Malformed runtime listing line: {line:?}")]
    MalformedListingLine { line: String },

    /// A version or preview triple is not three non-negative integers.
    #[error("Malformed version '{input}': {reason}")]
    MalformedVersion { input: String, reason: String },

    /// The queried family has no entry in the parsed listing.
    #[error("Runtime family '{family}' is not installed")]
    FamilyNotFound { family: String },

    /// Neither the framework root nor a Mono root exists.
    #[error("No desktop runtime root found")]
    NoDesktopRoot,
}
