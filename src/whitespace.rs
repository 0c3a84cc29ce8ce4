//! Whitespace normalization.
//!
//! Whitespace is whatever [`char::is_whitespace`] says it is: space, tab,
//! newline, carriage return, no-break space, the ideographic space and the
//! rest of the Unicode `White_Space` property. Nothing is enumerated here.
//!
//! # Algorithm
//!
//! 1. With no preserved characters, split on runs of whitespace and rejoin
//!    the non-empty pieces with a single ASCII space. This trims both ends.
//! 2. With preserved characters, split on the first one, normalize each
//!    fragment with the rest of the list, and rejoin with the character put
//!    back. Every occurrence survives in place.
//! 3. With `trim` off, put back a single space at either end where step 1
//!    or 2 removed leading or trailing whitespace.
//!
//! # Examples
//!
//! ```rust
//! use textnorm::normalize_space;
//!
//! assert_eq!(normalize_space("  hello   world  ", &[], true), "hello world");
//! assert_eq!(normalize_space("a \t b\tc", &['\t'], true), "a\tb\tc");
//! assert_eq!(normalize_space("  hello   world  ", &[], false), " hello world ");
//! ```

use crate::config::SpaceConfig;

/// Collapses whitespace runs to single spaces, keeping every character in
/// `preserve` exactly where it occurred.
///
/// `preserve` is read in order. The first character splits the text and the
/// remaining characters apply inside each fragment, so a preserved
/// character is never merged into a neighbouring run. Preserved characters
/// may themselves be whitespace; that is the usual reason to preserve them.
///
/// When `trim` is false the result keeps at most one space at each end,
/// standing in for whatever leading or trailing whitespace was removed.
/// The exact boundary whitespace is not replayed.
///
/// # Examples
///
/// ```rust
/// use textnorm::normalize_space;
///
/// let text = "\tThe\tquick \t brown  fox ";
/// assert_eq!(normalize_space(text, &['\t'], true), "\tThe\tquick\tbrown fox");
///
/// // Whitespace-only input
/// assert_eq!(normalize_space(" \n\t ", &[], true), "");
/// assert_eq!(normalize_space(" \n\t ", &[], false), " ");
/// ```
pub fn normalize_space(text: &str, preserve: &[char], trim: bool) -> String {
    let collapsed = collapse_preserving(text, preserve);
    if trim {
        collapsed
    } else {
        restore_boundary_spaces(text, collapsed)
    }
}

/// [`normalize_space`] driven by a [`SpaceConfig`].
pub fn normalize_space_with(text: &str, cfg: &SpaceConfig) -> String {
    normalize_space(text, &cfg.preserve, cfg.trim)
}

/// Collapses repeated whitespace and trims edges.
///
/// This is [`normalize_space`] with nothing preserved and trimming on.
///
/// ```rust
/// use textnorm::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("hello\r\n\u{00A0} world"), "hello world");
/// assert_eq!(collapse_whitespace("   \n\t   "), "");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}

fn collapse_preserving(text: &str, preserve: &[char]) -> String {
    let Some((&token, rest)) = preserve.split_first() else {
        return collapse_whitespace(text);
    };

    let mut normalized = String::with_capacity(text.len());
    for (idx, fragment) in text.split(token).enumerate() {
        if idx > 0 {
            normalized.push(token);
        }
        normalized.push_str(&collapse_preserving(fragment, rest));
    }
    normalized
}

/// Re-adds one space at each end where the original had whitespace that
/// collapsing removed. A boundary character that survived (because it was
/// preserved) counts as not removed.
fn restore_boundary_spaces(original: &str, collapsed: String) -> String {
    let lost_leading = original
        .chars()
        .next()
        .is_some_and(|ch| ch.is_whitespace() && !collapsed.starts_with(ch));
    let lost_trailing = original
        .chars()
        .next_back()
        .is_some_and(|ch| ch.is_whitespace() && !collapsed.ends_with(ch));

    // Whitespace-only input collapses to nothing; one space stands in for
    // both boundaries.
    if collapsed.is_empty() {
        return if lost_leading {
            String::from(" ")
        } else {
            collapsed
        };
    }
    if !lost_leading && !lost_trailing {
        return collapsed;
    }

    let mut restored = String::with_capacity(collapsed.len() + 2);
    if lost_leading {
        restored.push(' ');
    }
    restored.push_str(&collapsed);
    if lost_trailing {
        restored.push(' ');
    }
    restored
}
