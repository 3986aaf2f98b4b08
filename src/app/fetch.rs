// src/app/fetch.rs
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use tracing::{debug, info};

use super::error::NetworkError;
use crate::config::AppConfig;

pub const POPULARITY_QUERY: &str = "sort_by=popularity.desc";

/// Something that can hand back one raw catalog page.
/// Called from a worker thread, never from the UI thread.
pub trait MovieSource: Send + Sync {
    fn fetch(&self) -> Result<String, NetworkError>;
}

/// One GET against TMDb's discover endpoint.
pub struct TmdbFetcher {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl TmdbFetcher {
    pub fn from_config(cfg: &AppConfig) -> Result<Self, NetworkError> {
        let client = Client::builder()
            .user_agent(concat!("popmovies/", env!("CARGO_PKG_VERSION")))
            .default_headers({
                let mut h = HeaderMap::new();
                h.insert(ACCEPT, HeaderValue::from_static("application/json"));
                h
            })
            .build()?;
        Ok(Self::with_client(
            client,
            cfg.api_base_url.clone(),
            cfg.tmdb_api_key.clone(),
        ))
    }

    pub fn with_client(client: Client, base_url: String, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    fn request_url(&self, api_key: &str) -> String {
        format!(
            "{}?{}&api_key={}",
            self.base_url,
            POPULARITY_QUERY,
            urlencoding::encode(api_key)
        )
    }
}

impl MovieSource for TmdbFetcher {
    fn fetch(&self) -> Result<String, NetworkError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(NetworkError::MissingApiKey)?;

        debug!("GET {}?{}&api_key=<redacted>", self.base_url, POPULARITY_QUERY);
        let resp = self.client.get(self.request_url(api_key)).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(NetworkError::Status(status.as_u16()));
        }

        let body = resp.text()?;
        if body.trim().is_empty() {
            return Err(NetworkError::EmptyBody);
        }
        info!("Fetched catalog page ({} bytes)", body.len());
        Ok(body)
    }
}
