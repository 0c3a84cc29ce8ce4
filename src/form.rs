//! The four Unicode normalization forms and how they pair up.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::error::NormalizeError;

/// Target normalization form.
///
/// Serialized and displayed as the conventional upper-case abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NormalizationForm {
    /// Canonical composition
    #[default]
    #[serde(rename = "NFC")]
    Nfc,
    /// Canonical decomposition
    #[serde(rename = "NFD")]
    Nfd,
    /// Compatibility composition
    #[serde(rename = "NFKC")]
    Nfkc,
    /// Compatibility decomposition
    #[serde(rename = "NFKD")]
    Nfkd,
}

impl NormalizationForm {
    pub const ALL: [NormalizationForm; 4] = [
        NormalizationForm::Nfc,
        NormalizationForm::Nfd,
        NormalizationForm::Nfkc,
        NormalizationForm::Nfkd,
    ];

    /// The form used for the divergence check. The pairing is symmetric:
    /// NFC and NFKC check each other, as do NFD and NFKD.
    ///
    /// ```rust
    /// use textnorm::NormalizationForm;
    ///
    /// assert_eq!(NormalizationForm::Nfc.compatibility_counterpart(), NormalizationForm::Nfkc);
    /// assert_eq!(NormalizationForm::Nfkd.compatibility_counterpart(), NormalizationForm::Nfd);
    /// ```
    pub fn compatibility_counterpart(self) -> Self {
        match self {
            NormalizationForm::Nfc => NormalizationForm::Nfkc,
            NormalizationForm::Nfd => NormalizationForm::Nfkd,
            NormalizationForm::Nfkc => NormalizationForm::Nfc,
            NormalizationForm::Nfkd => NormalizationForm::Nfd,
        }
    }

    pub fn is_compatibility(self) -> bool {
        matches!(self, NormalizationForm::Nfkc | NormalizationForm::Nfkd)
    }

    pub fn is_composed(self) -> bool {
        matches!(self, NormalizationForm::Nfc | NormalizationForm::Nfkc)
    }

    /// Runs the standard normalization algorithm for this form, without
    /// diacritic ordering.
    pub fn apply(self, text: &str) -> String {
        match self {
            NormalizationForm::Nfc => text.nfc().collect(),
            NormalizationForm::Nfd => text.nfd().collect(),
            NormalizationForm::Nfkc => text.nfkc().collect(),
            NormalizationForm::Nfkd => text.nfkd().collect(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NormalizationForm::Nfc => "NFC",
            NormalizationForm::Nfd => "NFD",
            NormalizationForm::Nfkc => "NFKC",
            NormalizationForm::Nfkd => "NFKD",
        }
    }

    /// Long name, e.g. "canonical composition".
    pub fn description(self) -> &'static str {
        match self {
            NormalizationForm::Nfc => "canonical composition",
            NormalizationForm::Nfd => "canonical decomposition",
            NormalizationForm::Nfkc => "compatibility composition",
            NormalizationForm::Nfkd => "compatibility decomposition",
        }
    }
}

impl fmt::Display for NormalizationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NormalizationForm {
    type Err = NormalizeError;

    /// Accepts `NFC`, `NFD`, `NFKC`, `NFKD` in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NormalizationForm::ALL
            .into_iter()
            .find(|form| form.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                NormalizeError::InvalidArgument(format!(
                    "unknown normalization form {s:?}; expected one of NFC, NFD, NFKC, NFKD"
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairing_is_symmetric() {
        for form in NormalizationForm::ALL {
            let pair = form.compatibility_counterpart();
            assert_ne!(form, pair);
            assert_eq!(pair.compatibility_counterpart(), form);
            assert_eq!(form.is_composed(), pair.is_composed());
            assert_ne!(form.is_compatibility(), pair.is_compatibility());
        }
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("nfkd".parse::<NormalizationForm>(), Ok(NormalizationForm::Nfkd));
        assert_eq!(" NFC ".parse::<NormalizationForm>(), Ok(NormalizationForm::Nfc));
        for form in NormalizationForm::ALL {
            assert_eq!(form.to_string().parse::<NormalizationForm>(), Ok(form));
        }
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "NFX".parse::<NormalizationForm>().unwrap_err();
        assert!(matches!(err, NormalizeError::InvalidArgument(_)));
    }

    #[test]
    fn serde_uses_abbreviations() {
        let json = serde_json::to_string(&NormalizationForm::Nfkc).unwrap();
        assert_eq!(json, "\"NFKC\"");
        let back: NormalizationForm = serde_json::from_str("\"NFD\"").unwrap();
        assert_eq!(back, NormalizationForm::Nfd);
    }

    #[test]
    fn apply_matches_expected_shapes() {
        assert_eq!(NormalizationForm::Nfd.apply("\u{00E9}"), "e\u{0301}");
        assert_eq!(NormalizationForm::Nfc.apply("e\u{0301}"), "\u{00E9}");
        assert_eq!(NormalizationForm::Nfkc.apply("\u{FB01}"), "fi");
        assert_eq!(NormalizationForm::Nfc.apply("\u{FB01}"), "\u{FB01}");
    }
}
