//! Page fetching.

use reqwest::Client;
use url::Url;

/// Errors from fetching a page
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read body of {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Single-shot HTTP GET client.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    /// GET `url` and return the body as text.
    ///
    /// Error statuses are logged but their body is still returned.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            source: e,
        })?;

        tracing::debug!(%parsed, "fetching page");
        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| FetchError::Request {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, url, "server returned an error status");
        }

        let body = response.text().await.map_err(|e| FetchError::Body {
            url: url.to_string(),
            source: e,
        })?;
        tracing::debug!(bytes = body.len(), "page fetched");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/page"))
            .and(header("user-agent", "snipmd-test"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>hi</p>"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let fetcher = Fetcher::new("snipmd-test").unwrap();
        let body = fetcher
            .fetch(&format!("{}/page", mock_server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "<p>hi</p>");
    }

    #[tokio::test]
    async fn test_error_status_still_returns_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("<h1>Not Found</h1>"))
            .mount(&mock_server)
            .await;

        let fetcher = Fetcher::new("snipmd-test").unwrap();
        let body = fetcher
            .fetch(&format!("{}/missing", mock_server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "<h1>Not Found</h1>");
    }

    #[tokio::test]
    async fn test_invalid_url() {
        let fetcher = Fetcher::new("snipmd-test").unwrap();
        let err = fetcher.fetch("not a url").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let mock_server = MockServer::start().await;
        let uri = mock_server.uri();
        drop(mock_server);

        let fetcher = Fetcher::new("snipmd-test").unwrap();
        let err = fetcher.fetch(&uri).await.unwrap_err();
        assert!(matches!(err, FetchError::Request { .. }));
    }
}
