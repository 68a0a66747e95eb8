//! Game collection state: the client-side owner of the tracked games list.
//!
//! This crate implements the **business logic** of the game tracker. It is a
//! library crate with no UI or transport dependencies; callers provide a
//! `GameStore` implementation that talks to the actual backend.
//!
//! # Operations
//!
//! - **Load**: replace the in-memory list with the store's list
//! - **Add** / **Update**: normalize a draft and persist it
//! - **Delete**: remove a game once the store confirms
//! - **Filter**: case-insensitive search over title, platform and review
//! - **Statistics**: totals and averages derived on demand

pub mod collection;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod stats;
pub mod store;
pub mod types;

// Re-export primary types for convenience.
pub use collection::GameCollection;
pub use error::FetchError;
pub use stats::{PlatformCount, Statistics};
pub use store::{GameStore, StoreFuture};
pub use types::{Game, GameDraft, GameId, GamePayload, NO_REVIEW};
