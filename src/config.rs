//! Per-call option structs for both normalizers.
//!
//! Every option is passed explicitly. The `Default` impls carry the literal
//! defaults of the function signatures and nothing else: no process-wide
//! settings exist.
//!
//! # JSON
//!
//! [`NormalizeConfig`] can be loaded from a JSON document. Missing fields
//! take their defaults; `null` disables a stage.
//!
//! ```json
//! {
//!   "unicode": { "target": "NFKC", "check_compatible": true },
//!   "space":   { "preserve": ["\n"], "trim": true }
//! }
//! ```
//!
//! ```rust
//! use textnorm::{NormalizationForm, NormalizeConfig};
//!
//! let cfg = NormalizeConfig::from_json(r#"{ "unicode": { "target": "NFD" } }"#).unwrap();
//! let unicode = cfg.unicode.as_ref().unwrap();
//! assert_eq!(unicode.target, NormalizationForm::Nfd);
//! assert!(!unicode.check_compatible);
//! assert_eq!(cfg.space, Some(Default::default()));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::NormalizeError;
use crate::form::NormalizationForm;

/// Options for [`normalize_space`](crate::normalize_space).
///
/// In JSON each preserved character is a one-character string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SpaceConfig {
    /// Characters kept verbatim as separators, applied in order.
    pub preserve: Vec<char>,
    /// Strip leading and trailing whitespace entirely. When false, one
    /// space is kept at each end that had whitespace.
    pub trim: bool,
}

impl SpaceConfig {
    /// Builds a config from string tokens, checking that each one is a
    /// single code point.
    ///
    /// ```rust
    /// use textnorm::SpaceConfig;
    ///
    /// let cfg = SpaceConfig::from_tokens(["\t", "\n"], true).unwrap();
    /// assert_eq!(cfg.preserve, vec!['\t', '\n']);
    /// assert!(SpaceConfig::from_tokens(["\r\n"], true).is_err());
    /// ```
    pub fn from_tokens<I, S>(tokens: I, trim: bool) -> Result<Self, NormalizeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let preserve = tokens
            .into_iter()
            .map(|token| single_char(token.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { preserve, trim })
    }
}

impl Default for SpaceConfig {
    fn default() -> Self {
        Self {
            preserve: Vec::new(),
            trim: true,
        }
    }
}

/// Options for [`normalize_unicode`](crate::normalize_unicode).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UnicodeConfig {
    pub target: NormalizationForm,
    /// Fail when the target form and its compatibility counterpart
    /// disagree.
    pub check_compatible: bool,
}

/// Options for [`normalize_text`](crate::normalize_text).
///
/// Unicode normalization runs first, whitespace normalization second. A
/// stage set to `None` is skipped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NormalizeConfig {
    pub unicode: Option<UnicodeConfig>,
    pub space: Option<SpaceConfig>,
}

impl NormalizeConfig {
    /// Parses a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, NormalizeError> {
        serde_json::from_str(json).map_err(|err| NormalizeError::Config(err.to_string()))
    }

    pub fn to_json(&self) -> Result<String, NormalizeError> {
        serde_json::to_string_pretty(self).map_err(|err| NormalizeError::Config(err.to_string()))
    }
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            unicode: Some(UnicodeConfig::default()),
            space: Some(SpaceConfig::default()),
        }
    }
}

fn single_char(token: &str) -> Result<char, NormalizeError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(NormalizeError::InvalidArgument(format!(
            "preserve token {token:?} must be exactly one character"
        ))),
    }
}
