// src/fetch/mod.rs
// =============================================================================
// This module retrieves the page we are going to scan.
//
// Submodules:
// - http: The real fetcher, a single GET through reqwest
//
// The pipeline only talks to the `Fetcher` trait, so tests can swap in a
// fake transport and check that no request is made when it shouldn't be.
// =============================================================================

mod http;

use std::future::Future;
use std::time::Duration;

use crate::error::MapperError;

pub use http::HttpFetcher;

// Anything that can turn a URL into a page body
//
// Implementations return the whole body as text. They must NOT look at the
// HTTP status: a 404 page is still a page.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, MapperError>>;
}

// Settings for the HTTP client
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Whole-request timeout. None = wait as long as the transport does
    pub timeout: Option<Duration>,
    /// Value of the User-Agent header
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

pub fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
