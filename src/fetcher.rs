use std::time::Duration;

use tracing::info;

use crate::error::{Result, ScrapeError};

pub const WIKI_BASE_URL: &str = "https://en.wikipedia.org";

#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        FetchOptions {
            timeout: Duration::from_secs(30),
            user_agent: default_user_agent(),
        }
    }
}

pub fn default_user_agent() -> String {
    format!("wiki_sections/{}", env!("CARGO_PKG_VERSION"))
}

/// Only English Wikipedia pages are accepted. Literal prefix check.
pub fn validate_url(url: &str) -> Result<()> {
    if url.starts_with(WIKI_BASE_URL) {
        Ok(())
    } else {
        Err(ScrapeError::InvalidUrl(url.to_string()))
    }
}

/// GET the page and return its body. Non-2xx statuses are errors; no retries.
pub async fn fetch_page(url: &str, opts: &FetchOptions) -> Result<String> {
    let network = |reason: &str, source: Option<reqwest::Error>| ScrapeError::Network {
        url: url.to_string(),
        reason: reason.to_string(),
        source,
    };

    let client = reqwest::Client::builder()
        .user_agent(opts.user_agent.as_str())
        .timeout(opts.timeout)
        .build()
        .map_err(|e| network("failed to build http client", Some(e)))?;

    info!("Fetching page: {}", url);
    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|e| network("request failed", Some(e)))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(network(&format!("request failed with status {}", status), None));
    }

    let body = resp
        .text()
        .await
        .map_err(|e| network("failed to read response body", Some(e)))?;
    info!("Received {} bytes", body.len());
    Ok(body)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn accepts_english_wikipedia() {
        assert!(validate_url("https://en.wikipedia.org/wiki/Rust_(programming_language)").is_ok());
    }

    #[test]
    fn rejects_other_hosts() {
        for url in [
            "https://de.wikipedia.org/wiki/Rust",
            "http://en.wikipedia.org/wiki/Rust",
            "en.wikipedia.org/wiki/Rust",
            "",
        ] {
            let err = validate_url(url).unwrap_err();
            assert!(matches!(err, ScrapeError::InvalidUrl(ref u) if u == url));
        }
    }

    #[test]
    fn prefix_only_check() {
        // 24-character literal prefix, nothing more
        assert!(validate_url("https://en.wikipedia.org.evil.example").is_ok());
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        let opts = FetchOptions {
            timeout: Duration::from_secs(2),
            ..Default::default()
        };
        let err = fetch_page("http://127.0.0.1:1/wiki/Nothing", &opts).await.unwrap_err();
        assert!(matches!(err, ScrapeError::Network { source: Some(_), .. }));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[tokio::test]
    async fn non_success_status_is_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wiki/Missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let url = format!("{}/wiki/Missing", server.uri());
        let err = fetch_page(&url, &FetchOptions::default()).await.unwrap_err();
        match err {
            ScrapeError::Network { url: failed, reason, source } => {
                assert_eq!(failed, url);
                assert!(reason.contains("404"), "unexpected reason: {}", reason);
                assert!(source.is_none());
            }
            other => panic!("expected network error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn success_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wiki/Rust"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>lead</p><h2>History</h2>"))
            .mount(&server)
            .await;

        let url = format!("{}/wiki/Rust", server.uri());
        let body = fetch_page(&url, &FetchOptions::default()).await.unwrap();
        assert_eq!(body, "<p>lead</p><h2>History</h2>");
    }
}
