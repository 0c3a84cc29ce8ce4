//! Error types produced by the normalizers.
//!
//! Whitespace normalization is total and never fails. Unicode normalization
//! fails only when the caller asks for a compatibility check and the two
//! forms disagree. The remaining variants cover values that arrive from
//! outside the type system (form names, JSON config documents).
//!
//! | Error | Raised by |
//! |-------|-----------|
//! | [`Divergence`](NormalizeError::Divergence) | [`normalize_unicode`](crate::normalize_unicode) with `check_compatible` |
//! | [`InvalidArgument`](NormalizeError::InvalidArgument) | form parsing, preserve-token validation |
//! | [`Config`](NormalizeError::Config) | [`NormalizeConfig::from_json`](crate::NormalizeConfig::from_json) |

use std::fmt;

use thiserror::Error;

use crate::form::NormalizationForm;

/// Errors that can occur during normalization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// Canonical and compatibility results differ for the same input.
    #[error("{0}")]
    Divergence(Box<DivergenceReport>),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid config: {0}")]
    Config(String),
}

impl NormalizeError {
    /// Returns the divergence details when this is a divergence error.
    pub fn divergence(&self) -> Option<&DivergenceReport> {
        match self {
            NormalizeError::Divergence(report) => Some(report),
            _ => None,
        }
    }
}

/// Everything a caller needs to log or display a canonical/compatibility
/// mismatch.
///
/// Both outputs have already been through diacritic ordering, so they
/// differ for a reason other than mark order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivergenceReport {
    /// The text as it was passed in.
    pub input: String,
    /// The form that was requested.
    pub target: NormalizationForm,
    /// Result of normalizing `input` to `target`.
    pub target_output: String,
    /// The paired form the result was checked against.
    pub counterpart: NormalizationForm,
    /// Result of normalizing `input` to `counterpart`.
    pub counterpart_output: String,
}

impl fmt::Display for DivergenceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unicode normalization may have changed the string \"{}\" in an undesirable way: \
             the {} form ({}: \"{}\") does not match the {} form ({}: \"{}\")",
            self.input,
            self.target.description(),
            self.target,
            self.target_output,
            self.counterpart.description(),
            self.counterpart,
            self.counterpart_output,
        )
    }
}
