//! Reverse geocoding: coordinates to address components or a display name.
//!
//! [`ReverseClient`] talks to the remote service, [`MockClient`] answers from
//! memory. Both implement [`ReverseGeocoder`].

mod call_options;
mod client;
mod error;
mod mock;
mod response;

use std::fmt;
use std::future::Future;

pub use call_options::{
    with_driver_response_type, with_english_language, with_farsi_language, with_headers,
    with_passenger_response_type, with_verbose_response_type, with_zoom_level, CallOptionSetter,
    CallOptions, Language, ResponseType, DEFAULT_ZOOM_LEVEL,
};
pub use client::{with_http_client, with_url, ConstructorOption, ReverseClient};
pub use error::{Result, ReverseError, TransportError};
pub use mock::MockClient;
pub use response::{Component, ERROR_STATUS, OK_STATUS};

/// API version segment of the endpoint path
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Version {
    #[default]
    V1,
    /// Any other segment, passed through as is
    Custom(String),
}

impl Version {
    pub fn as_str(&self) -> &str {
        match self {
            Version::V1 => "v1",
            Version::Custom(segment) => segment,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operations of a reverse geocode service.
///
/// The `*_with_cancel` variants stop waiting as soon as `cancel` resolves and
/// fail with [`TransportError::Canceled`].
pub trait ReverseGeocoder {
    /// Address components of the location at `lat`, `lon`.
    fn get_components(
        &self,
        lat: f64,
        lon: f64,
        options: &CallOptions,
    ) -> impl Future<Output = Result<Vec<Component>>> + Send;

    /// Human readable address of the location at `lat`, `lon`.
    fn get_display_name(
        &self,
        lat: f64,
        lon: f64,
        options: &CallOptions,
    ) -> impl Future<Output = Result<String>> + Send;

    fn get_components_with_cancel<F>(
        &self,
        cancel: F,
        lat: f64,
        lon: f64,
        options: &CallOptions,
    ) -> impl Future<Output = Result<Vec<Component>>> + Send
    where
        F: Future<Output = ()> + Send;

    fn get_display_name_with_cancel<F>(
        &self,
        cancel: F,
        lat: f64,
        lon: f64,
        options: &CallOptions,
    ) -> impl Future<Output = Result<String>> + Send
    where
        F: Future<Output = ()> + Send;
}
