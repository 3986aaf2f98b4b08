// src/app/error.rs
use thiserror::Error;

/// Fetch failures. Any of these ends the current load attempt.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("no TMDb api key configured (set tmdb_api_key in config.json or TMDB_API_KEY)")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("catalog answered with HTTP {0}")]
    Status(u16),
    #[error("catalog returned an empty body")]
    EmptyBody,
}

#[derive(Debug, Error)]
#[error("malformed catalog payload: {0}")]
pub struct ParseError(#[from] pub serde_json::Error);

/// Everything that can end a background load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("fetch worker exited without a result")]
    WorkerLost,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReleaseDateError {
    #[error("release date `{0}` is too short")]
    TooShort(String),
    #[error("release date `{0}` has no valid month")]
    BadMonth(String),
    #[error("release date `{0}` has no readable year")]
    BadYear(String),
}

#[derive(Debug, Error)]
#[error("saved screen state is unreadable: {0}")]
pub struct StateError(#[from] pub serde_json::Error);
