// src/page_extractor/fetcher.rs
use crate::config::FetchConfig;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("unsupported scheme {scheme:?} in {url} (expected http or https)")]
    UnsupportedScheme { url: String, scheme: String },
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },
}

/// Response body together with the final URL after redirects, which is
/// the base used to resolve relative image references.
#[derive(Debug)]
pub struct FetchedPage {
    pub final_url: Url,
    pub body: String,
}

pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(config: &FetchConfig) -> crate::models::Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self { client })
    }

    /// One GET, no retries. Failures surface immediately to the caller.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(FetchError::UnsupportedScheme {
                url: url.to_string(),
                scheme: parsed.scheme().to_string(),
            });
        }

        debug!("Fetching: {}", parsed);

        let response = self
            .client
            .get(parsed.clone())
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: parsed.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: parsed.to_string(),
                status,
            });
        }

        let final_url = response.url().clone();
        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Request {
                url: final_url.to_string(),
                source,
            })?;

        debug!("Fetched {} bytes from {}", body.len(), final_url);

        Ok(FetchedPage { final_url, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FetchConfig;

    fn fetcher() -> PageFetcher {
        PageFetcher::new(&FetchConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn malformed_url_is_rejected_without_a_request() {
        let err = fetcher().fetch("not a url").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }

    #[tokio::test]
    async fn non_http_scheme_is_rejected() {
        let err = fetcher().fetch("ftp://example.com/page").await.unwrap_err();
        assert!(matches!(err, FetchError::UnsupportedScheme { .. }));
    }

    #[tokio::test]
    async fn unreachable_host_surfaces_a_request_error() {
        let err = fetcher()
            .fetch("http://localhost:1/unreachable")
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Request { .. }));
    }
}
