//! Deterministic ordering of combining marks.
//!
//! Canonical reordering only sorts marks by combining class; marks that
//! share a class keep their input order. Two strings that differ only in
//! the order of same-class marks therefore survive normalization as two
//! different code point sequences. [`order_diacritics`] closes that gap by
//! ordering every run of marks by `(combining class, code point)`.

use unicode_normalization::char::canonical_combining_class;

/// Sorts each run of combining marks by combining class, then code point.
///
/// Base characters (combining class 0) never move. A run of marks with no
/// preceding base (at the start of the text) is ordered in place like any
/// other run.
///
/// ```rust
/// use textnorm::order_diacritics;
///
/// // U+0301 and U+0300 both have combining class 230.
/// assert_eq!(order_diacritics("a\u{0301}\u{0300}"), "a\u{0300}\u{0301}");
/// assert_eq!(order_diacritics("a\u{0300}\u{0301}"), "a\u{0300}\u{0301}");
/// ```
pub fn order_diacritics(text: &str) -> String {
    let mut ordered = String::with_capacity(text.len());
    let mut marks: Vec<(u8, char)> = Vec::new();

    for ch in text.chars() {
        match canonical_combining_class(ch) {
            0 => {
                flush_marks(&mut marks, &mut ordered);
                ordered.push(ch);
            }
            class => marks.push((class, ch)),
        }
    }
    flush_marks(&mut marks, &mut ordered);

    ordered
}

/// Appends the pending run in `(class, code point)` order and clears it.
fn flush_marks(marks: &mut Vec<(u8, char)>, out: &mut String) {
    if marks.len() > 1 {
        marks.sort_unstable();
    }
    out.extend(marks.drain(..).map(|(_, ch)| ch));
}
