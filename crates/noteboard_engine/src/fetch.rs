use std::time::Duration;

use page_logging::page_debug;
use url::Url;

use crate::{FailureKind, FetchError, PageFragment, PageQuery};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(
        &self,
        base_url: &str,
        query: &PageQuery,
    ) -> Result<PageFragment, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestPageFetcher {
    settings: FetchSettings,
}

impl ReqwestPageFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl PageFetcher for ReqwestPageFetcher {
    async fn fetch_page(
        &self,
        base_url: &str,
        query: &PageQuery,
    ) -> Result<PageFragment, FetchError> {
        let url = notes_page_url(base_url, query)?;
        page_debug!("GET {url}");
        let client = self.build_client()?;

        let response = client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        // Anything that is not `{html, has_more}` is a contract violation
        // and takes the same failure path as a broken transfer.
        response.json::<PageFragment>().await.map_err(|err| {
            if err.is_decode() {
                FetchError::new(FailureKind::MalformedResponse, err.to_string())
            } else {
                map_reqwest_error(err)
            }
        })
    }
}

/// URL for the next-page endpoint: `{base}/notes` with the form fields and
/// the requested page number as query parameters.
pub fn notes_page_url(base_url: &str, query: &PageQuery) -> Result<Url, FetchError> {
    let mut url = parse_base(base_url)?
        .join("notes")
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
    url.query_pairs_mut().extend_pairs(query.pairs());
    Ok(url)
}

/// URL for a full-navigation filter submission: the base page with the form
/// fields as query parameters. Navigation always lands on the first page,
/// so no page parameter is carried.
pub fn filter_submit_url(base_url: &str, query: &PageQuery) -> Result<Url, FetchError> {
    let mut url = parse_base(base_url)?;
    url.query_pairs_mut().extend_pairs(query.form_pairs());
    Ok(url)
}

fn parse_base(base_url: &str) -> Result<Url, FetchError> {
    // A trailing slash keeps `join` from eating the last path segment.
    let normalized = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{base_url}/")
    };
    Url::parse(&normalized).map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
