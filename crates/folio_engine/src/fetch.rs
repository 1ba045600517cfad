use std::time::Duration;

use folio_logging::{folio_debug, folio_info};
use futures_util::StreamExt;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Response, StatusCode, Url};

use crate::{FailureKind, FetchError, FetchRequest, RepoRecord};

const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Root of the listing API, e.g. `https://api.github.com`.
    pub api_base: String,
    /// Account whose public repositories are listed.
    pub account: String,
    pub user_agent: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
    pub allowed_content_types: Vec<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            account: "SaifDemos".to_string(),
            user_agent: concat!("folio/", env!("CARGO_PKG_VERSION")).to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
            allowed_content_types: vec![
                "application/json".to_string(),
                "application/vnd.github+json".to_string(),
            ],
        }
    }
}

impl FetchSettings {
    /// `{api_base}/users/{account}/repos` with the request's query parameters.
    pub fn listing_url(&self, request: &FetchRequest) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.api_base)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| FetchError::new(FailureKind::InvalidUrl, "api base cannot be a base url"))?
            .pop_if_empty()
            .extend(["users", self.account.as_str(), "repos"]);

        if request.per_page.is_some() || request.sort.is_some() {
            let mut query = url.query_pairs_mut();
            if let Some(per_page) = request.per_page {
                query.append_pair("per_page", &per_page.to_string());
            }
            if let Some(sort) = request.sort {
                query.append_pair("sort", sort.as_str());
            }
        }
        Ok(url)
    }
}

/// Retrieves the repository listing. Implementations never touch shared state.
#[async_trait::async_trait]
pub trait RepoFetcher: Send + Sync {
    async fn fetch_repos(&self, request: &FetchRequest) -> Result<Vec<RepoRecord>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .user_agent(self.settings.user_agent.as_str())
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    fn is_content_type_allowed(&self, content_type: &str) -> bool {
        let ct = content_type.split(';').next().unwrap_or(content_type).trim();
        self.settings
            .allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ct))
    }

    async fn read_body(&self, response: Response) -> Result<Vec<u8>, FetchError> {
        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, Some(content_len)));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(too_large(self.settings.max_bytes, Some(next_len)));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl RepoFetcher for ReqwestFetcher {
    async fn fetch_repos(&self, request: &FetchRequest) -> Result<Vec<RepoRecord>, FetchError> {
        let url = self.settings.listing_url(request)?;
        let client = self.build_client()?;
        folio_info!("Fetching repository listing from {}", url);

        let response = client
            .get(url)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(&response, status));
        }

        if let Some(ct) = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
        {
            if !self.is_content_type_allowed(ct) {
                return Err(FetchError::new(
                    FailureKind::UnsupportedContentType {
                        content_type: ct.to_string(),
                    },
                    format!("unexpected content type {ct}"),
                ));
            }
        }

        let bytes = self.read_body(response).await?;
        let records: Vec<RepoRecord> = serde_json::from_slice(&bytes).map_err(|err| {
            FetchError::new(
                FailureKind::MalformedBody,
                format!("malformed repository listing: {err}"),
            )
        })?;
        folio_debug!("Decoded {} repositories ({} bytes)", records.len(), bytes.len());
        Ok(records)
    }
}

fn status_error(response: &Response, status: StatusCode) -> FetchError {
    let exhausted = response
        .headers()
        .get(RATE_LIMIT_REMAINING)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|remaining| remaining.trim() == "0");
    let limited = status == StatusCode::TOO_MANY_REQUESTS
        || (status == StatusCode::FORBIDDEN && exhausted);

    if limited {
        FetchError::new(FailureKind::RateLimited, "GitHub API rate limit reached")
    } else {
        FetchError::new(
            FailureKind::HttpStatus(status.as_u16()),
            format!("GitHub API responded with {status}"),
        )
    }
}

fn too_large(max_bytes: u64, actual: Option<u64>) -> FetchError {
    FetchError::new(
        FailureKind::TooLarge { max_bytes, actual },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, "request timed out");
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
