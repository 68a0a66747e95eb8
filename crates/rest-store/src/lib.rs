//! REST client for the game tracker backend.
//!
//! Implements [`gametracker_games::GameStore`] over JSON/HTTP against
//! `GET/POST/PUT/DELETE /api/games`.

pub mod client;

pub use client::RestStore;
