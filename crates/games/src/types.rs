//! Domain types for the game collection.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::normalize::{self, DEFAULT_RATING, MAX_RATING, MIN_RATING};

/// Text shown in place of a missing review.
///
/// An empty review and a review that was never written are stored the same
/// way, so both display as this sentinel.
pub const NO_REVIEW: &str = "No review yet";

/// Store-assigned game identifier.
///
/// Stores may encode ids as JSON strings or numbers; both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for GameId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for GameId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match TextOrNumber::deserialize(deserializer)? {
            TextOrNumber::Text(s) => Ok(Self(s)),
            TextOrNumber::Number(n) => Ok(Self(n.to_string())),
        }
    }
}

/// A persisted game as returned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub title: String,
    #[serde(default)]
    pub platform: String,
    /// Always carries a trailing `%`, even if the store sent a bare number.
    #[serde(default = "zero_progress", deserialize_with = "progress_from_wire")]
    pub progress: String,
    #[serde(default)]
    pub cover: String,
    /// Always within 1 to 5; text, null or out-of-range values are coerced.
    #[serde(default = "default_rating", deserialize_with = "rating_from_wire")]
    pub rating: u8,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub review: String,
}

impl Game {
    /// Numeric progress, 0 when the stored value is not a number.
    pub fn progress_value(&self) -> f64 {
        normalize::progress_value(&self.progress)
    }

    /// Whether the game has been played through.
    pub fn is_completed(&self) -> bool {
        self.progress_value() >= 100.0
    }

    /// Review text, or [`NO_REVIEW`] when empty.
    pub fn review_display(&self) -> &str {
        if self.review.trim().is_empty() {
            NO_REVIEW
        } else {
            &self.review
        }
    }

    /// Case-insensitive match of an already lowercased needle against the
    /// searchable fields.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.platform.to_lowercase().contains(needle)
            || self.review.to_lowercase().contains(needle)
    }
}

/// Caller-supplied game contents before the store has persisted them.
///
/// `progress` may be given with or without the `%` suffix and `rating` may
/// be left out; see [`crate::normalize::normalize_draft`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameDraft {
    pub title: String,
    pub platform: String,
    pub progress: String,
    pub cover: String,
    pub rating: Option<u8>,
    pub review: String,
}

impl GameDraft {
    pub fn new(title: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            platform: platform.into(),
            ..Default::default()
        }
    }

    /// Accepts `80`, `"80"` or `"80%"`.
    pub fn with_progress(mut self, progress: impl fmt::Display) -> Self {
        self.progress = progress.to_string();
        self
    }

    pub fn with_cover(mut self, cover: impl Into<String>) -> Self {
        self.cover = cover.into();
        self
    }

    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_review(mut self, review: impl Into<String>) -> Self {
        self.review = review.into();
        self
    }
}

impl From<&Game> for GameDraft {
    fn from(game: &Game) -> Self {
        Self {
            title: game.title.clone(),
            platform: game.platform.clone(),
            progress: game.progress.clone(),
            cover: game.cover.clone(),
            rating: Some(game.rating),
            review: game.review.clone(),
        }
    }
}

/// Normalized record body sent on create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GamePayload {
    pub title: String,
    pub platform: String,
    pub progress: String,
    pub cover: String,
    pub rating: u8,
    pub review: String,
}

impl GamePayload {
    /// The game this payload describes once the store has assigned `id`.
    pub fn into_game(self, id: GameId) -> Game {
        Game {
            id,
            title: self.title,
            platform: self.platform,
            progress: self.progress,
            cover: self.cover,
            rating: self.rating,
            review: self.review,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

fn zero_progress() -> String {
    "0%".into()
}

fn default_rating() -> u8 {
    DEFAULT_RATING
}

fn progress_from_wire<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(TextOrNumber::Text(s)) => s,
        Some(TextOrNumber::Number(n)) => n.to_string(),
        None => String::new(),
    };
    Ok(normalize::normalize_progress(&raw))
}

fn rating_from_wire<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(TextOrNumber::Text(s)) => s.trim().parse::<f64>().ok(),
        Some(TextOrNumber::Number(n)) => n.as_f64(),
        None => None,
    };
    let rating = match value.filter(|v| v.is_finite()) {
        Some(v) => v.round().clamp(f64::from(MIN_RATING), f64::from(MAX_RATING)) as u8,
        None => DEFAULT_RATING,
    };
    Ok(rating)
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
