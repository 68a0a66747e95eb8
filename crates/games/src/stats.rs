//! Aggregate statistics derived from the collection.

use serde::Serialize;

use crate::types::Game;

/// Summary figures shown alongside the game list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total: usize,
    /// Mean rating rounded to one decimal place, 0 when empty.
    pub average_rating: f64,
    /// Mean progress rounded to the nearest integer, 0 when empty.
    pub average_progress: u32,
    /// Title of the furthest-along game; the first one wins ties.
    pub most_advanced: Option<String>,
    pub five_star_count: usize,
}

impl Statistics {
    pub fn compute(games: &[Game]) -> Self {
        if games.is_empty() {
            return Self::default();
        }

        let count = games.len() as f64;
        let rating_sum: f64 = games.iter().map(|g| f64::from(g.rating)).sum();
        let progress_sum: f64 = games.iter().map(Game::progress_value).sum();

        let mut most_advanced: Option<(&Game, f64)> = None;
        for game in games {
            let value = game.progress_value();
            match most_advanced {
                Some((_, best)) if value <= best => {}
                _ => most_advanced = Some((game, value)),
            }
        }

        Self {
            total: games.len(),
            average_rating: (rating_sum / count * 10.0).round() / 10.0,
            average_progress: (progress_sum / count).round().max(0.0) as u32,
            most_advanced: most_advanced.map(|(g, _)| g.title.clone()),
            five_star_count: games.iter().filter(|g| g.rating == 5).count(),
        }
    }
}

/// Number of games on one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformCount {
    pub platform: String,
    pub count: usize,
}

/// Per-platform game counts in first-seen order.
///
/// Labels are compared exactly; `"PC"` and `"pc"` are separate platforms.
pub fn platform_breakdown(games: &[Game]) -> Vec<PlatformCount> {
    let mut counts: Vec<PlatformCount> = Vec::new();
    for game in games {
        match counts.iter_mut().find(|c| c.platform == game.platform) {
            Some(entry) => entry.count += 1,
            None => counts.push(PlatformCount {
                platform: game.platform.clone(),
                count: 1,
            }),
        }
    }
    counts
}
