//! Plain-text rendering of games and statistics.

use std::fmt::Write;

use gametracker_games::{Game, PlatformCount, Statistics};

const MAX_RATING: usize = 5;

fn stars(rating: u8) -> String {
    let filled = usize::from(rating).min(MAX_RATING);
    format!("{}{}", "★".repeat(filled), "☆".repeat(MAX_RATING - filled))
}

/// One-line summary used by `list` and `search`.
pub fn game_line(game: &Game) -> String {
    format!(
        "{:>6}  {}  [{}]  {}  {}",
        game.id,
        game.title,
        game.platform,
        game.progress,
        stars(game.rating)
    )
}

pub fn game_list(games: &[Game]) -> String {
    if games.is_empty() {
        return "No games.".into();
    }
    games.iter().map(game_line).collect::<Vec<_>>().join("\n")
}

/// Detail view of a single game.
pub fn game_details(game: &Game) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", game.title);
    let _ = writeln!(out, "  id:       {}", game.id);
    let _ = writeln!(out, "  platform: {}", game.platform);
    let status = if game.is_completed() { " (completed)" } else { "" };
    let _ = writeln!(out, "  progress: {}{status}", game.progress);
    let _ = writeln!(out, "  rating:   {}", stars(game.rating));
    if !game.cover.is_empty() {
        let _ = writeln!(out, "  cover:    {}", game.cover);
    }
    let _ = write!(out, "  review:   {}", game.review_display());
    out
}

/// Sidebar entries for games still being played.
pub fn playing(games: &[Game]) -> String {
    if games.is_empty() {
        return "Nothing in progress.".into();
    }
    games
        .iter()
        .map(|g| format!("{}  {} complete", g.title, g.progress))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn statistics(stats: &Statistics, platforms: &[PlatformCount]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Games:            {}", stats.total);
    let _ = writeln!(out, "Average rating:   {:.1}", stats.average_rating);
    let _ = writeln!(out, "Average progress: {}%", stats.average_progress);
    let _ = writeln!(
        out,
        "Most advanced:    {}",
        stats.most_advanced.as_deref().unwrap_or("-")
    );
    let _ = write!(out, "Five-star games:  {}", stats.five_star_count);
    for entry in platforms {
        let _ = write!(out, "\n  {:<14} {}", entry.platform, entry.count);
    }
    out
}
