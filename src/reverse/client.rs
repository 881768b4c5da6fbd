//! HTTP client for the reverse geocode service.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, StatusCode};
use std::collections::BTreeMap;
use std::future::{self, Future};
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::call_options::CallOptions;
use super::error::{Result, ReverseError, TransportError};
use super::response::{ComponentsResult, DisplayNameResult, Envelope, ReverseResult, OK_STATUS};
use super::{Component, ReverseGeocoder, Version};
use crate::config::{ApiKeySource, Config};
use crate::version::user_agent;

const LAT: &str = "lat";
const LON: &str = "lon";
const LANGUAGE: &str = "language";
const ZOOM_LEVEL: &str = "zoom";
const RESPONSE_TYPE: &str = "type";
const DISPLAY: &str = "display";

/// Post-processing step applied to a freshly built [`ReverseClient`].
pub type ConstructorOption = Box<dyn FnOnce(&mut ReverseClient)>;

/// Replace the HTTP transport. The given client's own timeout applies.
pub fn with_http_client(http: Client) -> ConstructorOption {
    Box::new(move |client| client.http = http)
}

/// Send requests to `url` instead of `{base}/reverse/{version}`.
pub fn with_url(url: &str) -> ConstructorOption {
    let url = url.to_string();
    Box::new(move |client| client.url = url)
}

/// Reverse geocode client backed by the remote service.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ReverseClient {
    cfg: Config,
    url: String,
    http: Client,
}

impl ReverseClient {
    /// Create a client for `{api_base_url}/reverse/{version}`
    pub fn new(cfg: Config, version: Version, timeout: Duration) -> Result<Self> {
        Self::with_options(cfg, version, timeout, Vec::new())
    }

    /// Like [`ReverseClient::new`], then apply `opts` in order.
    pub fn with_options<I>(
        cfg: Config,
        version: Version,
        timeout: Duration,
        opts: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = ConstructorOption>,
    {
        let http = Client::builder()
            .user_agent(user_agent())
            .timeout(timeout)
            .build()
            .map_err(ReverseError::ClientBuild)?;

        let mut client = Self {
            url: reverse_url(&cfg, &version),
            cfg,
            http,
        };

        for opt in opts {
            opt(&mut client);
        }

        Ok(client)
    }

    /// Resolved endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn execute<R, F>(
        &self,
        cancel: F,
        lat: f64,
        lon: f64,
        options: &CallOptions,
    ) -> Result<R::Output>
    where
        R: ReverseResult,
        F: Future<Output = ()>,
    {
        let mut url =
            Url::parse(&self.url).map_err(|e| ReverseError::RequestConstruction(e.to_string()))?;

        let mut params = query_params(lat, lon, options, R::DISPLAY);
        let mut headers = HeaderMap::new();

        match &self.cfg.api_key_source {
            ApiKeySource::Header => {
                insert_header(&mut headers, &self.cfg.api_key_name, &self.cfg.api_key)?
            }
            ApiKeySource::QueryParam => {
                params.insert(self.cfg.api_key_name.clone(), self.cfg.api_key.clone());
            }
            ApiKeySource::Unsupported(raw) => {
                return Err(ReverseError::InvalidKeySource(raw.clone()));
            }
        }

        for (name, value) in options.headers() {
            insert_header(&mut headers, name, value)?;
        }

        url.query_pairs_mut().extend_pairs(params.iter());

        debug!("Reverse geocoding {:.6},{:.6} (display={})", lat, lon, R::DISPLAY);

        let round_trip = async {
            let response = self
                .http
                .get(url)
                .headers(headers)
                .send()
                .await
                .map_err(TransportError::from)?;

            let status = response.status();
            debug!("Reverse geocode responded with status {}", status);

            if status != StatusCode::OK {
                // Drain so the connection can be reused; the body is irrelevant here.
                let _ = response.bytes().await;
                return Err(ReverseError::UnexpectedStatus(status.as_u16()));
            }

            let body = response.bytes().await.map_err(TransportError::from)?;
            Ok::<_, ReverseError>(body)
        };

        let body = tokio::select! {
            biased;
            () = cancel => return Err(TransportError::Canceled.into()),
            result = round_trip => result?,
        };

        let envelope: Envelope<R> = serde_json::from_slice(&body)?;
        if envelope.status != OK_STATUS {
            return Err(ReverseError::ApplicationStatus(envelope.status));
        }

        Ok(envelope.into_output())
    }
}

impl ReverseGeocoder for ReverseClient {
    async fn get_components(
        &self,
        lat: f64,
        lon: f64,
        options: &CallOptions,
    ) -> Result<Vec<Component>> {
        self.get_components_with_cancel(future::pending(), lat, lon, options)
            .await
    }

    async fn get_display_name(&self, lat: f64, lon: f64, options: &CallOptions) -> Result<String> {
        self.get_display_name_with_cancel(future::pending(), lat, lon, options)
            .await
    }

    async fn get_components_with_cancel<F>(
        &self,
        cancel: F,
        lat: f64,
        lon: f64,
        options: &CallOptions,
    ) -> Result<Vec<Component>>
    where
        F: Future<Output = ()> + Send,
    {
        self.execute::<ComponentsResult, F>(cancel, lat, lon, options)
            .await
    }

    async fn get_display_name_with_cancel<F>(
        &self,
        cancel: F,
        lat: f64,
        lon: f64,
        options: &CallOptions,
    ) -> Result<String>
    where
        F: Future<Output = ()> + Send,
    {
        self.execute::<DisplayNameResult, F>(cancel, lat, lon, options)
            .await
    }
}

fn reverse_url(cfg: &Config, version: &Version) -> String {
    let base_url = cfg.api_base_url.trim_end_matches('/');
    format!("{}/reverse/{}", base_url, version)
}

/// Query parameters for one call, keyed by name so later inserts replace earlier ones
fn query_params(
    lat: f64,
    lon: f64,
    options: &CallOptions,
    display: bool,
) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();

    params.insert(LAT.to_string(), format!("{:.6}", lat));
    params.insert(LON.to_string(), format!("{:.6}", lon));

    if let Some(language) = options.language_param() {
        params.insert(LANGUAGE.to_string(), language.as_str().to_string());
    }
    if let Some(zoom_level) = options.zoom_level_param() {
        params.insert(ZOOM_LEVEL.to_string(), zoom_level.to_string());
    }
    if let Some(response_type) = options.response_type_param() {
        params.insert(RESPONSE_TYPE.to_string(), response_type.as_str().to_string());
    }

    params.insert(DISPLAY.to_string(), display.to_string());
    params
}

fn insert_header(headers: &mut HeaderMap, name: &str, value: &str) -> Result<()> {
    let name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| ReverseError::RequestConstruction(format!("header name {:?}: {}", name, e)))?;
    let value = HeaderValue::from_str(value)
        .map_err(|e| ReverseError::RequestConstruction(format!("header {}: {}", name, e)))?;
    headers.insert(name, value);
    Ok(())
}
