//! REST-backed content source
//!
//! Talks to the public endpoints of the Lissnify backend:
//! - `GET api/categories/`
//! - `GET api/testimonials/`
//! - `GET api/listenerList/`
//!
//! Each returns a bare JSON array. Steps have no endpoint and come from
//! the built-in copy.

use std::time::Duration;

use lissnify_core::prelude::*;
use lissnify_core::{Category, Listener, Step, Testimonial};
use serde::de::DeserializeOwned;
use url::Url;

use super::auth::AuthTokenProvider;
use super::data_source::DataSource;
use super::fixtures;
use crate::config::ApiSettings;

const CATEGORIES_PATH: &str = "api/categories/";
const TESTIMONIALS_PATH: &str = "api/testimonials/";
const LISTENERS_PATH: &str = "api/listenerList/";

/// HTTP client for the Lissnify REST API
#[derive(Debug, Clone)]
pub struct RestDataSource {
    client: reqwest::Client,
    base_url: Url,
    auth: AuthTokenProvider,
}

impl RestDataSource {
    pub fn new(api: &ApiSettings, auth: AuthTokenProvider) -> Result<Self> {
        let base_url = parse_base_url(&api.base_url)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(api.timeout_ms))
            .user_agent(concat!("lissnify-deck/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::request(format!("Failed to create HTTP client: {}", e)))?;

        debug!("REST source at {} (timeout {}ms)", base_url, api.timeout_ms);
        Ok(Self {
            client,
            base_url,
            auth,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an API path against the base URL
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::config_invalid(format!("Bad endpoint {}: {}", path, e)))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        let mut request = self.client.get(url.clone());
        if let Some(token) = self.auth.token() {
            request = request.bearer_auth(token);
        }

        trace!("GET {}", url);
        let response = request
            .send()
            .await
            .map_err(|e| Error::request(format!("GET {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!("GET {} returned {}", url, status);
            return Err(Error::http(status.as_u16(), url.as_str()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::request(format!("Reading {} failed: {}", url, e)))?;
        serde_json::from_str(&body).map_err(|e| Error::decode(format!("{}: {}", url, e)))
    }
}

/// Parse `base_url`, making sure relative joins keep any path prefix
fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim())
        .map_err(|e| Error::config_invalid(format!("Invalid api.base_url {:?}: {}", raw, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::config_invalid(format!(
            "api.base_url must be http or https, got {:?}",
            raw
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

impl DataSource for RestDataSource {
    fn label(&self) -> String {
        match self.base_url.port() {
            Some(port) => format!("{}:{}", self.base_url.host_str().unwrap_or("?"), port),
            None => self.base_url.host_str().unwrap_or("?").to_string(),
        }
    }

    async fn categories(&self) -> Result<Vec<Category>> {
        self.get_json(CATEGORIES_PATH).await
    }

    async fn testimonials(&self) -> Result<Vec<Testimonial>> {
        self.get_json(TESTIMONIALS_PATH).await
    }

    async fn listeners(&self) -> Result<Vec<Listener>> {
        self.get_json(LISTENERS_PATH).await
    }

    async fn steps(&self) -> Result<Vec<Step>> {
        Ok(fixtures::steps())
    }
}
