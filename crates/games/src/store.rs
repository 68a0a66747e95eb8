//! Contract for the remote store holding the persisted games.

use std::future::Future;
use std::pin::Pin;

use crate::error::FetchError;
use crate::types::{Game, GameId, GamePayload};

/// Boxed future returned by [`GameStore`] operations.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, FetchError>> + Send + 'a>>;

/// Abstract connection to the game store.
///
/// The application implements this on top of its transport (HTTP in
/// `gametracker-rest-store`); tests implement it with canned responses.
pub trait GameStore: Send + Sync {
    /// Returns every stored game, in store order.
    fn list(&self) -> StoreFuture<'_, Vec<Game>>;

    /// Persists a new game and returns it with its assigned id.
    fn create<'a>(&'a self, payload: &'a GamePayload) -> StoreFuture<'a, Game>;

    /// Replaces the game with `id` and returns the stored record.
    fn update<'a>(&'a self, id: &'a GameId, payload: &'a GamePayload) -> StoreFuture<'a, Game>;

    /// Deletes the game with `id`.
    fn delete<'a>(&'a self, id: &'a GameId) -> StoreFuture<'a, ()>;
}
