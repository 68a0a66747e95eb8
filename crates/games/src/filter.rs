//! Search over the collection.

use crate::types::Game;

/// Games whose title, platform or review contains `query`, ignoring case.
///
/// An empty query returns every game. The query is not trimmed, so
/// whitespace is part of what must match.
pub fn filter_games(games: &[Game], query: &str) -> Vec<Game> {
    if query.is_empty() {
        return games.to_vec();
    }

    let needle = query.to_lowercase();
    games
        .iter()
        .filter(|game| game.matches_lowercase(&needle))
        .cloned()
        .collect()
}

/// Games not yet played through, in collection order, at most `limit`.
pub fn in_progress(games: &[Game], limit: usize) -> Vec<Game> {
    games
        .iter()
        .filter(|game| !game.is_completed())
        .take(limit)
        .cloned()
        .collect()
}
