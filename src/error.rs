use thiserror::Error;

/// Errors that abort a scrape. Per-node problems (an anchor without `href`,
/// an empty fragment) never surface here; they are skipped where they occur.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Url is not a valid wikipedia url: {0}")]
    InvalidUrl(String),

    /// Transport failure (`source` set) or a non-2xx status (`source` empty).
    #[error("failed to fetch {url}: {reason}")]
    Network {
        url: String,
        reason: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("page has no processable body: {0}")]
    Input(String),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
