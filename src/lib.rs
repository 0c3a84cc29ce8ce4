//! Whitespace and Unicode normalization.
//!
//! Two independent, stateless normalizers:
//!
//! - [`normalize_space`] collapses whitespace runs to single spaces and
//!   trims, optionally keeping chosen characters (a tab, a newline, a
//!   no-break space) verbatim as separators.
//! - [`normalize_unicode`] converts to NFC, NFD, NFKC or NFKD, orders
//!   combining marks deterministically, and can reject input whose
//!   canonical and compatibility forms differ.
//!
//! [`normalize_text`] chains the two under a single [`NormalizeConfig`].
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock-dependent output, no locale. Every call works on its
//! own copies, so all entry points are safe to call from any number of
//! threads at once.
//!
//! ## Invariants worth knowing
//!
//! - `normalize_space` never fails; `normalize_unicode` fails only when a
//!   compatibility check was requested
//! - `normalize_unicode` is idempotent for every form
//! - Marks sharing a combining class come out ordered by code point, so
//!   their input order never shows in the output

mod config;
mod diacritics;
mod error;
mod form;
mod pipeline;
mod unicode;
mod whitespace;

pub use crate::config::{NormalizeConfig, SpaceConfig, UnicodeConfig};
pub use crate::diacritics::order_diacritics;
pub use crate::error::{DivergenceReport, NormalizeError};
pub use crate::form::NormalizationForm;
pub use crate::pipeline::normalize_text;
pub use crate::unicode::{normalize_unicode, normalize_unicode_with};
pub use crate::whitespace::{collapse_whitespace, normalize_space, normalize_space_with};
