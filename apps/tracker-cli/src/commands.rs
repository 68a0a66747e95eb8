//! Command-line intents and their dispatch onto the game collection.

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};

use gametracker_games::{GameCollection, GameDraft, GameId};

use crate::config::TrackerConfig;
use crate::render;

#[derive(Debug, Parser)]
#[command(name = "gametracker", version, about = "Track games, progress and ratings")]
pub struct Cli {
    /// Store base URL, overriding the config file and GAMETRACKER_URL.
    #[arg(long, global = true)]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every game.
    List,
    /// Search title, platform and review.
    Search { query: String },
    /// Show collection statistics.
    Stats,
    /// List games still in progress.
    Playing {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show one game.
    Show { id: String },
    /// Add a game.
    Add(DraftArgs),
    /// Replace a game's record.
    Update {
        id: String,
        #[command(flatten)]
        draft: DraftArgs,
    },
    /// Delete a game.
    Delete {
        id: String,
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Args)]
pub struct DraftArgs {
    #[arg(long, value_parser = non_empty)]
    pub title: String,
    #[arg(long)]
    pub platform: String,
    /// Percentage, with or without a trailing `%`.
    #[arg(long, default_value = "")]
    pub progress: String,
    #[arg(long, default_value = "")]
    pub cover: String,
    /// 1 to 5; defaults to 3.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub rating: Option<u8>,
    #[arg(long, default_value = "")]
    pub review: String,
}

impl From<DraftArgs> for GameDraft {
    fn from(args: DraftArgs) -> Self {
        GameDraft {
            title: args.title,
            platform: args.platform,
            progress: args.progress,
            cover: args.cover,
            rating: args.rating,
            review: args.review,
        }
    }
}

fn non_empty(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        Err("must not be empty".into())
    } else {
        Ok(value.to_string())
    }
}

/// Loads the collection and runs one intent, returning the text to print.
pub async fn run(
    command: Command,
    collection: &GameCollection,
    config: &TrackerConfig,
) -> anyhow::Result<String> {
    if let Command::Delete { id, yes: false } = &command {
        bail!("refusing to delete game {id} without --yes");
    }

    collection
        .load()
        .await
        .context("failed to load games from the store")?;

    let output = match command {
        Command::List => render::game_list(&collection.games().await),
        Command::Search { query } => render::game_list(&collection.filter(&query).await),
        Command::Stats => render::statistics(
            &collection.statistics().await,
            &collection.platform_breakdown().await,
        ),
        Command::Playing { limit } => {
            let limit = limit.unwrap_or(config.currently_playing_limit);
            render::playing(&collection.currently_playing(limit).await)
        }
        Command::Show { id } => {
            let id = GameId::new(id);
            match collection.get(&id).await {
                Some(game) => render::game_details(&game),
                None => bail!("no game with id {id}"),
            }
        }
        Command::Add(args) => {
            let game = collection
                .add(args.into())
                .await
                .context("failed to add game")?;
            format!("Added {}", render::game_line(&game))
        }
        Command::Update { id, draft } => {
            let id = GameId::new(id);
            let game = collection
                .update(&id, draft.into())
                .await
                .with_context(|| format!("failed to update game {id}"))?;
            format!("Updated {}", render::game_line(&game))
        }
        Command::Delete { id, .. } => {
            let id = GameId::new(id);
            collection
                .delete(&id)
                .await
                .with_context(|| format!("failed to delete game {id}"))?;
            format!("Deleted {id}")
        }
    };

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use gametracker_games::{FetchError, Game, GamePayload, GameStore, StoreFuture};
    use std::sync::{Arc, Mutex};

    /// Store that serves a fixed list and records mutating requests.
    struct FixedStore {
        games: Vec<Game>,
        requests: Mutex<Vec<String>>,
    }

    impl FixedStore {
        fn new(games: Vec<Game>) -> Self {
            Self {
                games,
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    impl GameStore for FixedStore {
        fn list(&self) -> StoreFuture<'_, Vec<Game>> {
            Box::pin(async move { Ok(self.games.clone()) })
        }

        fn create<'a>(&'a self, payload: &'a GamePayload) -> StoreFuture<'a, Game> {
            self.requests.lock().unwrap().push("CREATE".into());
            Box::pin(async move { Ok(payload.clone().into_game(GameId::new("100"))) })
        }

        fn update<'a>(&'a self, id: &'a GameId, payload: &'a GamePayload) -> StoreFuture<'a, Game> {
            self.requests.lock().unwrap().push(format!("UPDATE {id}"));
            Box::pin(async move { Ok(payload.clone().into_game(id.clone())) })
        }

        fn delete<'a>(&'a self, id: &'a GameId) -> StoreFuture<'a, ()> {
            self.requests.lock().unwrap().push(format!("DELETE {id}"));
            Box::pin(async move {
                Err(FetchError::Status {
                    status: 503,
                    body: "maintenance".into(),
                })
            })
        }
    }

    fn sample() -> Vec<Game> {
        vec![Game {
            id: GameId::new("1"),
            title: "Hades II".into(),
            platform: "PC".into(),
            progress: "94%".into(),
            cover: String::new(),
            rating: 5,
            review: String::new(),
        }]
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn rating_out_of_range_is_rejected() {
        let result = Cli::try_parse_from([
            "gametracker", "add", "--title", "A", "--platform", "PC", "--rating", "6",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn blank_title_is_rejected() {
        let result =
            Cli::try_parse_from(["gametracker", "add", "--title", " ", "--platform", "PC"]);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn add_prints_normalized_game() {
        let store = Arc::new(FixedStore::new(sample()));
        let collection = GameCollection::new(store);
        let cli = parse(&[
            "gametracker", "add", "--title", "C", "--platform", "PC", "--progress", "80",
        ]);

        let out = run(cli.command, &collection, &TrackerConfig::default())
            .await
            .unwrap();

        assert!(out.starts_with("Added"));
        assert!(out.contains("80%"));
        assert!(out.contains("★★★☆☆"));
    }

    #[tokio::test]
    async fn delete_without_confirmation_sends_nothing() {
        let store = Arc::new(FixedStore::new(sample()));
        let collection = GameCollection::new(store.clone());
        let cli = parse(&["gametracker", "delete", "1"]);

        let result = run(cli.command, &collection, &TrackerConfig::default()).await;

        assert!(result.is_err());
        assert!(store.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_delete_keeps_game() {
        let store = Arc::new(FixedStore::new(sample()));
        let collection = GameCollection::new(store.clone());
        let cli = parse(&["gametracker", "delete", "1", "--yes"]);

        let result = run(cli.command, &collection, &TrackerConfig::default()).await;

        assert!(result.is_err());
        assert_eq!(collection.len().await, 1);
        assert_eq!(*store.requests.lock().unwrap(), vec!["DELETE 1".to_string()]);
    }

    #[tokio::test]
    async fn show_unknown_id_errors() {
        let collection = GameCollection::new(Arc::new(FixedStore::new(sample())));
        let cli = parse(&["gametracker", "show", "42"]);

        assert!(
            run(cli.command, &collection, &TrackerConfig::default())
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn playing_uses_configured_limit() {
        let collection = GameCollection::new(Arc::new(FixedStore::new(sample())));
        let config = TrackerConfig {
            currently_playing_limit: 0,
            ..TrackerConfig::default()
        };
        let cli = parse(&["gametracker", "playing"]);

        let out = run(cli.command, &collection, &config).await.unwrap();
        assert_eq!(out, "Nothing in progress.");
    }

    #[test]
    fn global_url_flag_after_subcommand() {
        let cli = parse(&["gametracker", "list", "--url", "http://other"]);
        assert_eq!(cli.url.as_deref(), Some("http://other"));
    }
}
