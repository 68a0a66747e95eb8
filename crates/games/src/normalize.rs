//! Draft normalization applied before anything is sent to the store.
//!
//! Both `add` and `update` go through [`normalize_draft`], so the progress
//! suffix and rating default are decided in exactly one place.

use crate::types::{GameDraft, GamePayload};

/// Rating assigned to drafts that do not carry one.
pub const DEFAULT_RATING: u8 = 3;

/// Lowest accepted rating.
pub const MIN_RATING: u8 = 1;

/// Highest accepted rating.
pub const MAX_RATING: u8 = 5;

/// Returns `raw` with a trailing `%`, appending it if missing.
///
/// Surrounding whitespace is dropped and an empty value becomes `"0%"`.
pub fn normalize_progress(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "0%".into();
    }
    if trimmed.ends_with('%') {
        trimmed.to_string()
    } else {
        format!("{trimmed}%")
    }
}

/// Numeric value of a progress string such as `"45%"` or `"45"`.
///
/// Returns 0 when the value cannot be parsed.
pub fn progress_value(progress: &str) -> f64 {
    progress
        .trim()
        .trim_end_matches('%')
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Builds the payload sent to the store from a caller-supplied draft.
pub fn normalize_draft(draft: GameDraft) -> GamePayload {
    let rating = draft
        .rating
        .unwrap_or(DEFAULT_RATING)
        .clamp(MIN_RATING, MAX_RATING);

    GamePayload {
        title: draft.title,
        platform: draft.platform,
        progress: normalize_progress(&draft.progress),
        cover: draft.cover,
        rating,
        review: draft.review,
    }
}
