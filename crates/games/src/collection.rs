//! Game collection: the single owner of the in-memory game list.
//!
//! Every mutation goes through the store first; the local list only changes
//! once the store has confirmed. The list lock is never held across a store
//! call, so two racing mutations resolve last-write-wins.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::filter::{filter_games, in_progress};
use crate::normalize::normalize_draft;
use crate::stats::{PlatformCount, Statistics, platform_breakdown};
use crate::store::GameStore;
use crate::types::{Game, GameDraft, GameId};

/// Client-side state of the tracked games, synchronized with a [`GameStore`].
pub struct GameCollection {
    store: Arc<dyn GameStore>,
    games: RwLock<Vec<Game>>,
    loaded: AtomicBool,
}

impl GameCollection {
    /// Creates an empty, unloaded collection backed by `store`.
    pub fn new(store: Arc<dyn GameStore>) -> Self {
        Self {
            store,
            games: RwLock::new(Vec::new()),
            loaded: AtomicBool::new(false),
        }
    }

    /// Whether a `load` has succeeded at least once.
    pub fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::Acquire)
    }

    /// Replaces the collection with the store's list.
    ///
    /// On failure the previous list is kept. Returns the number of games
    /// loaded.
    pub async fn load(&self) -> Result<usize, FetchError> {
        let fetched = self
            .store
            .list()
            .await
            .inspect_err(|e| warn!(error = %e, "failed to load games"))?;

        let games = dedup_by_id(fetched);
        let count = games.len();
        *self.games.write().await = games;
        self.loaded.store(true, Ordering::Release);

        debug!(count, "loaded games");
        Ok(count)
    }

    /// Persists a new game and appends the stored record.
    pub async fn add(&self, draft: GameDraft) -> Result<Game, FetchError> {
        let payload = normalize_draft(draft);
        let created = self
            .store
            .create(&payload)
            .await
            .inspect_err(|e| warn!(title = %payload.title, error = %e, "failed to add game"))?;

        let mut games = self.games.write().await;
        match games.iter_mut().find(|g| g.id == created.id) {
            Some(existing) => {
                warn!(id = %created.id, "store reused an existing id, replacing entry");
                *existing = created.clone();
            }
            None => games.push(created.clone()),
        }

        debug!(id = %created.id, title = %created.title, "added game");
        Ok(created)
    }

    /// Replaces the game with `id` by the normalized `draft`.
    ///
    /// The whole record is resent. If the game has left the collection by
    /// the time the store answers, nothing is re-inserted.
    pub async fn update(&self, id: &GameId, draft: GameDraft) -> Result<Game, FetchError> {
        let payload = normalize_draft(draft);
        let updated = self
            .store
            .update(id, &payload)
            .await
            .inspect_err(|e| warn!(%id, error = %e, "failed to update game"))?;

        let updated = if &updated.id == id {
            updated
        } else {
            warn!(%id, echoed = %updated.id, "store echoed a different id, keeping the requested one");
            Game {
                id: id.clone(),
                ..updated
            }
        };

        let mut games = self.games.write().await;
        match games.iter_mut().find(|g| &g.id == id) {
            Some(existing) => {
                *existing = updated.clone();
                debug!(%id, "updated game");
            }
            None => debug!(%id, "updated game is no longer in the collection"),
        }

        Ok(updated)
    }

    /// Deletes the game with `id` from the store, then from the collection.
    ///
    /// Deleting an id the collection does not hold is not an error.
    pub async fn delete(&self, id: &GameId) -> Result<(), FetchError> {
        self.store
            .delete(id)
            .await
            .inspect_err(|e| warn!(%id, error = %e, "failed to delete game"))?;

        let mut games = self.games.write().await;
        let before = games.len();
        games.retain(|g| &g.id != id);
        debug!(%id, removed = before - games.len(), "deleted game");
        Ok(())
    }

    /// Snapshot of the whole collection, in order.
    pub async fn games(&self) -> Vec<Game> {
        self.games.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.games.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.games.read().await.is_empty()
    }

    /// Looks up a single game.
    pub async fn get(&self, id: &GameId) -> Option<Game> {
        self.games.read().await.iter().find(|g| &g.id == id).cloned()
    }

    /// Games matching `query`; see [`filter_games`].
    pub async fn filter(&self, query: &str) -> Vec<Game> {
        filter_games(&self.games.read().await, query)
    }

    /// Games still being played, at most `limit`.
    pub async fn currently_playing(&self, limit: usize) -> Vec<Game> {
        in_progress(&self.games.read().await, limit)
    }

    pub async fn statistics(&self) -> Statistics {
        Statistics::compute(&self.games.read().await)
    }

    pub async fn platform_breakdown(&self) -> Vec<PlatformCount> {
        platform_breakdown(&self.games.read().await)
    }
}

/// Drops later entries that repeat a non-empty id already seen.
fn dedup_by_id(games: Vec<Game>) -> Vec<Game> {
    let mut seen = HashSet::with_capacity(games.len());
    games
        .into_iter()
        .filter(|g| {
            if g.id.as_str().is_empty() {
                return true;
            }
            let fresh = seen.insert(g.id.clone());
            if !fresh {
                warn!(id = %g.id, "store listed a duplicate id, keeping the first");
            }
            fresh
        })
        .collect()
}
