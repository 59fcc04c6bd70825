// src/api/mod.rs
//
// Thin typed client for the scraping backend. One method per endpoint,
// each issuing exactly one request. No retries.

mod types;

pub use types::*;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::config::{consts::*, options::PanelOptions};
use crate::core::FilterRange;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Failed to save download: {0}")]
    Save(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    options: PanelOptions,
}

impl ApiClient {
    pub fn new(options: &PanelOptions) -> Result<Self> {
        let base = options.base_url();
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(ApiError::InvalidUrl(format!(
                "URL must start with http:// or https://, got: {base}"
            )));
        }

        let mut builder = Client::builder();
        if let Some(t) = options.timeout {
            builder = builder.timeout(t);
        }
        let http = builder.build()?;

        Ok(Self { http, options: options.clone() })
    }

    pub fn options(&self) -> &PanelOptions {
        &self.options
    }

    pub fn base_url(&self) -> &str {
        self.options.base_url()
    }

    pub async fn login(&self) -> Result<LoginResponse> {
        let url = self.options.url_for(EP_LOGIN);
        logd!("API: POST {url}");
        decode(self.http.post(&url).send().await?, &url).await
    }

    pub async fn scrape(&self, filter: &FilterRange) -> Result<ScrapeResult> {
        let url = self.options.url_for(EP_SCRAPE);
        logd!("API: POST {url}?filter_type={filter}");
        let resp = self
            .http
            .post(&url)
            .query(&[("filter_type", filter.value())])
            .send()
            .await?;
        decode(resp, &url).await
    }

    pub async fn check_auth(&self) -> Result<AuthStatus> {
        let url = self.options.url_for(EP_CHECK_AUTH);
        logd!("API: GET {url}");
        decode(self.http.get(&url).send().await?, &url).await
    }

    pub async fn latest_file(&self) -> Result<LatestFile> {
        let url = self.options.url_for(EP_LATEST_FILE);
        logd!("API: GET {url}");
        decode(self.http.get(&url).send().await?, &url).await
    }

    pub async fn open_folder(&self) -> Result<FolderResponse> {
        let url = self.options.url_for(EP_OPEN_FOLDER);
        logd!("API: POST {url}");
        decode(self.http.post(&url).send().await?, &url).await
    }

    /// Fetch a backend-relative file (the latest export) as raw bytes.
    pub async fn download(&self, path: &str) -> Result<Vec<u8>> {
        let url = self.options.url_for(path);
        logd!("API: GET {url}");
        let resp = check_status(self.http.get(&url).send().await?, &url)?;
        Ok(resp.bytes().await?.to_vec())
    }
}

fn check_status(resp: Response, url: &str) -> Result<Response> {
    let status = resp.status();
    if !status.is_success() {
        return Err(ApiError::Status { status: status.as_u16(), url: s!(url) });
    }
    Ok(resp)
}

async fn decode<T: DeserializeOwned>(resp: Response, url: &str) -> Result<T> {
    let resp = check_status(resp, url)?;
    Ok(resp.json::<T>().await?)
}
