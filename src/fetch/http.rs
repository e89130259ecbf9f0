// src/fetch/http.rs
// =============================================================================
// This module fetches a page body over HTTP(S).
//
// Key functionality:
// - Makes exactly one GET request per call (no retries, no caching)
// - Returns the body whatever the status code is (404 pages included)
// - Turns transport errors (DNS, refused connection, timeout, TLS, ...) into
//   a readable reason string
//
// The body is read as raw bytes and decoded as UTF-8 without looking at the
// declared charset, so UTF-8 pages come through byte for byte. Bytes that are
// not valid UTF-8 are replaced with U+FFFD; that decode is lossy.
//
// Rust concepts:
// - async/await: The request is asynchronous, we await it to completion
// - Result<T, E>: For error handling
// - Error sources: reqwest errors wrap lower-level errors we walk through
// =============================================================================

use reqwest::Client;

use super::{FetchConfig, Fetcher};
use crate::error::MapperError;

// The real fetcher, configured once and used for a single request
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    config: FetchConfig,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    // Builds the HTTP client from our config
    //
    // Redirects follow reqwest's default policy. The timeout is only set
    // when the user asked for one. A bad setting (e.g. a user agent with a
    // newline in it) fails here as a builder error.
    fn client(&self) -> Result<Client, reqwest::Error> {
        let mut builder = Client::builder().user_agent(self.config.user_agent.as_str());

        if let Some(timeout) = self.config.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build()
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, MapperError> {
        let client = self.client().map_err(|e| transport_failure(url, &e))?;

        tracing::info!(url, "fetching page");

        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_failure(url, &e))?;

        // The status is informational only, the body is returned either way
        let status = response.status();
        if status.is_success() {
            tracing::debug!(url, status = status.as_u16(), "response received");
        } else {
            tracing::warn!(url, status = status.as_u16(), "non-success status, scanning body anyway");
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| transport_failure(url, &e))?;

        tracing::debug!(url, bytes = bytes.len(), "body buffered");
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

fn transport_failure(url: &str, error: &reqwest::Error) -> MapperError {
    MapperError::TransportFailure {
        url: url.to_string(),
        reason: describe_error(error),
    }
}

// Describes a reqwest error as "<category>: <error>: <cause>: ..."
//
// The category comes first so the user can see at a glance what went wrong;
// the chain of sources keeps the low-level detail (e.g. the DNS message).
fn describe_error(error: &reqwest::Error) -> String {
    let category = if error.is_timeout() {
        "request timed out"
    } else if error.is_connect() {
        "could not connect"
    } else if error.is_builder() {
        "invalid request"
    } else if error.is_redirect() {
        "redirect failed"
    } else if error.is_body() || error.is_decode() {
        "could not read response body"
    } else {
        "request failed"
    };

    let mut reason = category.to_string();
    let mut source: Option<&dyn std::error::Error> = Some(error);
    while let Some(err) = source {
        reason.push_str(": ");
        reason.push_str(&err.to_string());
        source = err.source();
    }
    reason
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why not check response.status()?
//    - The page is scanned whatever the server says about it
//    - Error pages have links and buttons too
//    - Only failures to talk to the server at all are errors
//
// 2. What is err.source()?
//    - Errors can wrap other errors (a "cause")
//    - source() returns the wrapped error, or None at the bottom
//    - Walking the chain gives the full story: "error sending request" ->
//      "dns error" -> "failed to lookup address information"
//
// 3. Why bytes() and not text()?
//    - text() transcodes using the charset in the Content-Type header
//    - We want the href exactly as the page wrote it, so we skip that step
// -----------------------------------------------------------------------------
