// src/pipeline.rs
// =============================================================================
// Fetch, then extract. That's the whole pipeline.
//
// The steps run strictly one after the other: the body is fully buffered
// before the extractor sees it. If any step fails nothing is extracted and
// the error goes straight back to the caller.
// =============================================================================

use crate::error::MapperError;
use crate::extract::{self, ExtractMode, ExtractionResult};
use crate::fetch::Fetcher;

// Maps one page: checks the URL, fetches it, extracts links and buttons
//
// An absent or empty URL is a MissingArgument error and the fetcher is never
// called.
pub async fn map_page<F: Fetcher>(
    fetcher: &F,
    url: Option<&str>,
    mode: ExtractMode,
) -> Result<ExtractionResult, MapperError> {
    let url = url
        .filter(|url| !url.is_empty())
        .ok_or(MapperError::MissingArgument("url"))?;

    let body = fetcher.fetch(url).await?;

    Ok(extract::extract(&body, mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{FetchConfig, HttpFetcher};
    use std::cell::{Cell, RefCell};

    // A fetcher that never touches the network and remembers every call
    struct FakeFetcher {
        response: Result<String, String>,
        calls: Cell<usize>,
        urls: RefCell<Vec<String>>,
    }

    impl FakeFetcher {
        fn serving(body: &str) -> Self {
            Self {
                response: Ok(body.to_string()),
                calls: Cell::new(0),
                urls: RefCell::new(Vec::new()),
            }
        }

        fn failing(reason: &str) -> Self {
            Self {
                response: Err(reason.to_string()),
                calls: Cell::new(0),
                urls: RefCell::new(Vec::new()),
            }
        }
    }

    impl Fetcher for FakeFetcher {
        async fn fetch(&self, url: &str) -> Result<String, MapperError> {
            self.calls.set(self.calls.get() + 1);
            self.urls.borrow_mut().push(url.to_string());
            self.response
                .clone()
                .map_err(|reason| MapperError::TransportFailure {
                    url: url.to_string(),
                    reason,
                })
        }
    }

    #[tokio::test]
    async fn test_missing_url_makes_no_request() {
        let fetcher = FakeFetcher::serving("<a href='/x'>");

        let err = map_page(&fetcher, None, ExtractMode::Pattern).await.unwrap_err();

        assert!(matches!(err, MapperError::MissingArgument("url")));
        assert_eq!(fetcher.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_empty_url_counts_as_missing() {
        let fetcher = FakeFetcher::serving("<a href='/x'>");

        let err = map_page(&fetcher, Some(""), ExtractMode::Pattern).await.unwrap_err();

        assert!(matches!(err, MapperError::MissingArgument(_)));
        assert_eq!(fetcher.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_returned() {
        let fetcher = FakeFetcher::failing("could not connect: connection refused");

        let err = map_page(&fetcher, Some("http://unreachable.invalid"), ExtractMode::Pattern)
            .await
            .unwrap_err();

        match err {
            MapperError::TransportFailure { url, reason } => {
                assert_eq!(url, "http://unreachable.invalid");
                assert!(reason.contains("connection refused"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(fetcher.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_end_to_end() {
        let fetcher = FakeFetcher::serving(
            r#"<html><a href="/about">About</a><button class="x">Go</button></html>"#,
        );

        let result = map_page(&fetcher, Some("https://example.com"), ExtractMode::Pattern)
            .await
            .unwrap();

        assert_eq!(result.links, vec!["/about"]);
        assert_eq!(result.buttons, vec!["Go"]);
        assert_eq!(*fetcher.urls.borrow(), vec!["https://example.com"]);
    }

    #[tokio::test]
    async fn test_empty_body_is_success() {
        let fetcher = FakeFetcher::serving("");

        let result = map_page(&fetcher, Some("https://example.com"), ExtractMode::Pattern)
            .await
            .unwrap();

        assert_eq!(result, ExtractionResult::default());
    }

    #[tokio::test]
    async fn test_dom_mode_is_passed_through() {
        let fetcher = FakeFetcher::serving("<button>Outer<button>Inner</button></button>");

        let result = map_page(&fetcher, Some("https://example.com"), ExtractMode::Dom)
            .await
            .unwrap();

        assert_eq!(result.buttons, vec!["Outer", "Inner"]);
    }

    #[tokio::test]
    async fn test_missing_url_checked_before_client_settings() {
        let config = FetchConfig {
            user_agent: "bad\nagent".to_string(),
            ..FetchConfig::default()
        };
        let fetcher = HttpFetcher::new(&config);

        let err = map_page(&fetcher, None, ExtractMode::Pattern).await.unwrap_err();

        assert!(matches!(err, MapperError::MissingArgument("url")));
    }
}
