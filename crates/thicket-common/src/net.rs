//! HTTP fetch utilities.
//!
//! Provides the blocking HTTP GET wrapper used to load remote markup before
//! it is handed to the tree builder.
use std::time::Duration;

use thiserror::Error;

use crate::warning::warn_once;

/// User-Agent header sent with all requests.
///
/// Mimics a common desktop browser to avoid basic bot detection.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default request timeout.
const TIMEOUT: Duration = Duration::from_secs(30);

/// Errors produced while fetching a document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("HTTP error: {0}")]
    Status(reqwest::StatusCode),
    /// The response body could not be decoded as text.
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}

/// Returns `true` if `source` looks like an `http://` or `https://` URL.
#[must_use]
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Fetch a URL and return its body as text.
///
/// # Errors
///
/// Returns a [`FetchError`] if the HTTP client cannot be created, the request
/// fails, the response has a non-success status, or the body cannot be decoded.
pub fn fetch_text(url: &str) -> Result<String, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(TIMEOUT)
        .build()
        .map_err(FetchError::Client)?;

    let response = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()
        .map_err(FetchError::Request)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    response.text().map_err(FetchError::Body)
}

/// Fetch a URL for parsing, degrading to empty markup on failure.
///
/// A failed fetch is not fatal: it is reported through
/// [`warn_once`](crate::warning::warn_once) and the caller receives `""`,
/// which the tree builder turns into a bare root.
#[must_use]
pub fn fetch_markup(url: &str) -> String {
    fetch_text(url).unwrap_or_else(|e| {
        warn_once("Net", &format!("error loading {url}: {e}"));
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_remote() {
        assert!(is_remote("https://example.com/"));
        assert!(is_remote("http://localhost:8080/page.html"));
        assert!(!is_remote("page.html"));
        assert!(!is_remote("file:///tmp/page.html"));
    }

    #[test]
    fn test_unreachable_url_yields_empty_markup() {
        // Port 9 (discard) on localhost is not expected to serve HTTP.
        assert_eq!(fetch_markup("http://127.0.0.1:9/"), "");
    }
}
