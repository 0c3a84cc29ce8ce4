//! Unicode normal-form conversion with deterministic mark order.
//!
//! The normalization itself is delegated to `unicode-normalization`. On top
//! of it we:
//!
//! - order combining marks that share a class (see [`order_diacritics`]),
//!   so canonically equivalent inputs compare equal as strings;
//! - optionally check the result against the paired canonical or
//!   compatibility form and report when they differ.

use tracing::{debug, warn};

use crate::config::UnicodeConfig;
use crate::diacritics::order_diacritics;
use crate::error::{DivergenceReport, NormalizeError};
use crate::form::NormalizationForm;

/// Normalizes `text` to `target` and orders combining marks.
///
/// With `check_compatible` set, the input is also normalized to
/// [`NormalizationForm::compatibility_counterpart`] of `target`. If the two
/// results differ the call fails with [`NormalizeError::Divergence`].
///
/// # Examples
///
/// ```rust
/// use textnorm::{normalize_unicode, NormalizationForm};
///
/// let nfd = normalize_unicode("caf\u{00E9}", NormalizationForm::Nfd, false).unwrap();
/// assert_eq!(nfd, "cafe\u{0301}");
///
/// // The "fi" ligature folds under NFKC but not under NFC.
/// assert!(normalize_unicode("\u{FB01}", NormalizationForm::Nfc, true).is_err());
/// ```
pub fn normalize_unicode(
    text: &str,
    target: NormalizationForm,
    check_compatible: bool,
) -> Result<String, NormalizeError> {
    let (normalized, passes) = normalize_ordered(text, target);
    debug!(
        form = %target,
        input_len = text.len(),
        output_len = normalized.len(),
        passes,
        "normalize_unicode"
    );

    if check_compatible {
        let counterpart = target.compatibility_counterpart();
        let (paired, _) = normalize_ordered(text, counterpart);
        if paired != normalized {
            warn!(
                form = %target,
                counterpart = %counterpart,
                "normalization_divergence"
            );
            return Err(NormalizeError::Divergence(Box::new(DivergenceReport {
                input: text.to_owned(),
                target,
                target_output: normalized,
                counterpart,
                counterpart_output: paired,
            })));
        }
    }

    Ok(normalized)
}

/// [`normalize_unicode`] driven by a [`UnicodeConfig`].
pub fn normalize_unicode_with(text: &str, cfg: &UnicodeConfig) -> Result<String, NormalizeError> {
    normalize_unicode(text, cfg.target, cfg.check_compatible)
}

/// Normalizes and orders marks until the output is stable.
///
/// Ordering can move a mark in front of a same-class neighbour that was
/// blocking it from composing with its base, so composed forms may need
/// another pass. Every extra pass composes at least one pair and shortens
/// the string, which bounds the loop. Decomposed forms are stable after the
/// first pass.
fn normalize_ordered(text: &str, form: NormalizationForm) -> (String, usize) {
    let mut current = order_diacritics(&form.apply(text));
    let mut passes = 1;
    if !form.is_composed() {
        return (current, passes);
    }
    loop {
        let next = order_diacritics(&form.apply(&current));
        if next == current {
            return (current, passes);
        }
        current = next;
        passes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEGA: &str = "\u{03BC}\u{03AD}\u{03B3}\u{03B1}";

    #[test]
    fn greek_round_trip_through_nfd() {
        let nfd = normalize_unicode(MEGA, NormalizationForm::Nfd, false).unwrap();
        assert_eq!(nfd, "\u{03BC}\u{03B5}\u{0301}\u{03B3}\u{03B1}");
        let nfc = normalize_unicode(&nfd, NormalizationForm::Nfc, false).unwrap();
        assert_eq!(nfc, MEGA);
    }

    #[test]
    fn lunate_sigma_diverges_under_nfkc() {
        let input = "\u{03F2}";
        let err = normalize_unicode(input, NormalizationForm::Nfkc, true).unwrap_err();
        let report = err.divergence().expect("divergence report");
        assert_eq!(report.input, input);
        assert_eq!(report.target, NormalizationForm::Nfkc);
        assert_eq!(report.counterpart, NormalizationForm::Nfc);
        assert_eq!(report.counterpart_output, input);
        assert_ne!(report.target_output, input);
    }

    #[test]
    fn lunate_sigma_passes_without_check() {
        let out = normalize_unicode("\u{03F2}", NormalizationForm::Nfc, false).unwrap();
        assert_eq!(out, "\u{03F2}");
    }

    #[test]
    fn check_passes_when_forms_agree() {
        for form in NormalizationForm::ALL {
            let out = normalize_unicode(MEGA, form, true).unwrap();
            assert_eq!(out, normalize_unicode(MEGA, form, false).unwrap());
        }
    }

    #[test]
    fn decomposed_pairing_checked_too() {
        let err = normalize_unicode("x\u{00B2}", NormalizationForm::Nfd, true).unwrap_err();
        let report = err.divergence().unwrap();
        assert_eq!(report.counterpart, NormalizationForm::Nfkd);
        assert_eq!(report.counterpart_output, "x2");
    }

    #[test]
    fn equal_class_marks_compare_equal() {
        // Neither mark composes with 'q'.
        let a = normalize_unicode("q\u{0301}\u{0300}", NormalizationForm::Nfc, false).unwrap();
        let b = normalize_unicode("q\u{0300}\u{0301}", NormalizationForm::Nfc, false).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, "q\u{0300}\u{0301}");
    }

    #[test]
    fn unblocked_mark_composes_on_later_pass() {
        // 'a' + double acute does not compose, and blocks the acute behind it.
        // Ordering puts the acute first, which then composes to U+00E1.
        let out = normalize_unicode("a\u{030B}\u{0301}", NormalizationForm::Nfc, false).unwrap();
        assert_eq!(out, "\u{00E1}\u{030B}");
        assert_eq!(normalize_unicode(&out, NormalizationForm::Nfc, false).unwrap(), out);
    }

    #[test]
    fn precomposed_letters_survive() {
        // U+1EA7 carries two marks of the same class; NFC keeps it whole.
        let out = normalize_unicode("a\u{0302}\u{0300}", NormalizationForm::Nfc, false).unwrap();
        assert_eq!(out, "\u{1EA7}");
        assert_eq!(normalize_unicode("\u{1EA7}", NormalizationForm::Nfc, false).unwrap(), out);
    }

    #[test]
    fn idempotent_for_every_form() {
        let samples = [
            "",
            "plain",
            MEGA,
            "a\u{030B}\u{0301}",
            "\u{FB01}ne \u{2460} \u{1E9B}\u{0323}",
            "\u{0301}leading mark",
            "\u{AC00}\u{11A8}",
        ];
        for form in NormalizationForm::ALL {
            for s in samples {
                let once = normalize_unicode(s, form, false).unwrap();
                let twice = normalize_unicode(&once, form, false).unwrap();
                assert_eq!(once, twice, "{form} {s:?}");
            }
        }
    }

    #[test]
    fn config_wrapper_matches_direct_call() {
        let cfg = UnicodeConfig {
            target: NormalizationForm::Nfkd,
            check_compatible: false,
        };
        assert_eq!(
            normalize_unicode_with("\u{FB01}", &cfg).unwrap(),
            normalize_unicode("\u{FB01}", NormalizationForm::Nfkd, false).unwrap()
        );
    }
}
