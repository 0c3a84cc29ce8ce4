use std::time::Instant;

use tracing::{debug, warn};

use crate::config::NormalizeConfig;
use crate::error::NormalizeError;
use crate::unicode::normalize_unicode_with;
use crate::whitespace::normalize_space_with;

/// Main entry point. Runs the Unicode stage, then the whitespace stage,
/// skipping whichever one the config disables.
///
/// ```rust
/// use textnorm::{normalize_text, NormalizeConfig};
///
/// let out = normalize_text("  Cafe\u{0301}   au  lait ", &NormalizeConfig::default()).unwrap();
/// assert_eq!(out, "Caf\u{00E9} au lait");
/// ```
pub fn normalize_text(text: &str, cfg: &NormalizeConfig) -> Result<String, NormalizeError> {
    let start = Instant::now();

    // Unicode first: compatibility forms can rewrite whitespace characters,
    // and the whitespace stage must see the final code points.
    let unicode_text = match cfg.unicode.as_ref() {
        Some(unicode_cfg) => match normalize_unicode_with(text, unicode_cfg) {
            Ok(normalized) => normalized,
            Err(err) => {
                let elapsed_micros = start.elapsed().as_micros();
                warn!(error = %err, elapsed_micros, "normalize_text_failure");
                return Err(err);
            }
        },
        None => text.to_owned(),
    };

    let normalized = match cfg.space.as_ref() {
        Some(space_cfg) => normalize_space_with(&unicode_text, space_cfg),
        None => unicode_text,
    };

    let elapsed_micros = start.elapsed().as_micros();
    debug!(
        input_len = text.len(),
        output_len = normalized.len(),
        elapsed_micros,
        "normalize_text_success"
    );
    Ok(normalized)
}
