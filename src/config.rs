//! Connection settings shared by the service clients.
//!
//! Loading and validating these values is up to the caller; the struct derives
//! `Deserialize` so it can be read from any serde format.

use serde::Deserialize;
use std::fmt;

/// Where the API key is placed on outgoing requests.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum ApiKeySource {
    /// Sent as an HTTP header named after `api_key_name`
    #[default]
    Header,
    /// Sent as a query parameter named after `api_key_name`
    QueryParam,
    /// Anything else; rejected when a request is made
    Unsupported(String),
}

impl ApiKeySource {
    pub fn as_str(&self) -> &str {
        match self {
            ApiKeySource::Header => "header",
            ApiKeySource::QueryParam => "query_param",
            ApiKeySource::Unsupported(raw) => raw,
        }
    }
}

impl From<&str> for ApiKeySource {
    fn from(raw: &str) -> Self {
        match raw {
            "header" => ApiKeySource::Header,
            "query_param" => ApiKeySource::QueryParam,
            other => ApiKeySource::Unsupported(other.to_string()),
        }
    }
}

impl From<String> for ApiKeySource {
    fn from(raw: String) -> Self {
        ApiKeySource::from(raw.as_str())
    }
}

impl fmt::Display for ApiKeySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the API, with or without a trailing slash
    pub api_base_url: String,
    pub api_key: String,
    /// Header or query parameter name carrying the key
    pub api_key_name: String,
    #[serde(default)]
    pub api_key_source: ApiKeySource,
}

impl Config {
    pub fn new(
        api_base_url: &str,
        api_key: &str,
        api_key_name: &str,
        api_key_source: ApiKeySource,
    ) -> Self {
        Self {
            api_base_url: api_base_url.to_string(),
            api_key: api_key.to_string(),
            api_key_name: api_key_name.to_string(),
            api_key_source,
        }
    }
}
