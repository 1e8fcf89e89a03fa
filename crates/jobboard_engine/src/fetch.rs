use std::time::Duration;

use futures_util::StreamExt;
use jobboard_logging::jb_debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CACHE_CONTROL};

use crate::{
    decode_detail, decode_list, parse_total_pages, FailureKind, FetchError, JobDetailRecord,
    ListResponse,
};

/// Response header carrying the page count of a collection route.
pub const TOTAL_PAGES_HEADER: &str = "X-WP-TotalPages";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
    /// Ask intermediaries not to serve cached listings.
    pub no_store: bool,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
            no_store: true,
        }
    }
}

#[async_trait::async_trait]
pub trait JobsClient: Send + Sync {
    async fn fetch_list(&self, url: &str) -> Result<ListResponse, FetchError>;

    async fn fetch_detail(&self, url: &str) -> Result<JobDetailRecord, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestJobsClient {
    settings: FetchSettings,
    client: reqwest::Client,
}

struct RawResponse {
    total_pages: Option<String>,
    bytes: Vec<u8>,
}

impl ReqwestJobsClient {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if settings.no_store {
            headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        }

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .default_headers(headers)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self { settings, client })
    }

    async fn get(&self, url: &str) -> Result<RawResponse, FetchError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let total_pages = response
            .headers()
            .get(TOTAL_PAGES_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        jb_debug!("GET {} -> {} bytes", url, bytes.len());
        Ok(RawResponse { total_pages, bytes })
    }
}

#[async_trait::async_trait]
impl JobsClient for ReqwestJobsClient {
    async fn fetch_list(&self, url: &str) -> Result<ListResponse, FetchError> {
        let raw = self.get(url).await?;
        let total_pages = parse_total_pages(raw.total_pages.as_deref());
        decode_list(&raw.bytes, total_pages)
    }

    async fn fetch_detail(&self, url: &str) -> Result<JobDetailRecord, FetchError> {
        let raw = self.get(url).await?;
        decode_detail(&raw.bytes)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
