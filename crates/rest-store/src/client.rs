//! Game store HTTP client.
//!
//! Async HTTP client using `reqwest`, exchanging JSON with
//! `{base_url}/api/games`.

use std::time::Duration;

use gametracker_games::{FetchError, Game, GameId, GamePayload, GameStore, StoreFuture};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::RequestBuilder;
use tracing::debug;

const GAMES_ENDPOINT: &str = "/api/games";

/// Game store reached over HTTP.
pub struct RestStore {
    http: reqwest::Client,
    base_url: String,
}

impl RestStore {
    /// Creates a client for the backend at `base_url` using the transport's
    /// default timeout.
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        Self::build(base_url, None)
    }

    /// Creates a client whose requests fail after `timeout`.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        Self::build(base_url, Some(timeout))
    }

    fn build(base_url: &str, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(http_error)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn games_url(&self) -> String {
        format!("{}{GAMES_ENDPOINT}", self.base_url)
    }

    fn game_url(&self, id: &GameId) -> String {
        let encoded = utf8_percent_encode(id.as_str(), NON_ALPHANUMERIC);
        format!("{}{GAMES_ENDPOINT}/{encoded}", self.base_url)
    }

    /// Sends a request and returns the body of a 2xx response.
    async fn send(&self, request: RequestBuilder) -> Result<Vec<u8>, FetchError> {
        let resp = request.send().await.map_err(http_error)?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp.bytes().await.map_err(http_error)?.to_vec())
    }
}

impl GameStore for RestStore {
    fn list(&self) -> StoreFuture<'_, Vec<Game>> {
        Box::pin(async move {
            let url = self.games_url();
            debug!(%url, "GET games");
            let body = self.send(self.http.get(&url)).await?;
            Ok(serde_json::from_slice(&body)?)
        })
    }

    fn create<'a>(&'a self, payload: &'a GamePayload) -> StoreFuture<'a, Game> {
        Box::pin(async move {
            let url = self.games_url();
            debug!(%url, title = %payload.title, "POST game");
            let body = self.send(self.http.post(&url).json(payload)).await?;
            Ok(serde_json::from_slice(&body)?)
        })
    }

    fn update<'a>(&'a self, id: &'a GameId, payload: &'a GamePayload) -> StoreFuture<'a, Game> {
        Box::pin(async move {
            let url = self.game_url(id);
            debug!(%url, "PUT game");
            let body = self.send(self.http.put(&url).json(payload)).await?;

            // An empty 2xx body means the store accepted the record as sent.
            if body.iter().all(u8::is_ascii_whitespace) {
                return Ok(payload.clone().into_game(id.clone()));
            }
            Ok(serde_json::from_slice(&body)?)
        })
    }

    fn delete<'a>(&'a self, id: &'a GameId) -> StoreFuture<'a, ()> {
        Box::pin(async move {
            let url = self.game_url(id);
            debug!(%url, "DELETE game");
            self.send(self.http.delete(&url)).await?;
            Ok(())
        })
    }
}

fn http_error(e: reqwest::Error) -> FetchError {
    if e.is_connect() || e.is_timeout() {
        FetchError::Unavailable(e.to_string())
    } else {
        FetchError::Http(e.to_string())
    }
}
