//! In-memory reverse geocoder for tests of calling code.

use std::future::Future;

use super::call_options::CallOptions;
use super::error::Result;
use super::response::Component;
use super::ReverseGeocoder;

/// Answers every call with the same canned components and display name.
#[derive(Debug, Clone, Default)]
pub struct MockClient {
    components: Vec<Component>,
    display_name: String,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_components(mut self, components: Vec<Component>) -> Self {
        self.components = components;
        self
    }

    pub fn with_display_name(mut self, display_name: &str) -> Self {
        self.display_name = display_name.to_string();
        self
    }
}

impl ReverseGeocoder for MockClient {
    async fn get_components(
        &self,
        _lat: f64,
        _lon: f64,
        _options: &CallOptions,
    ) -> Result<Vec<Component>> {
        Ok(self.components.clone())
    }

    async fn get_display_name(
        &self,
        _lat: f64,
        _lon: f64,
        _options: &CallOptions,
    ) -> Result<String> {
        Ok(self.display_name.clone())
    }

    async fn get_components_with_cancel<F>(
        &self,
        _cancel: F,
        lat: f64,
        lon: f64,
        options: &CallOptions,
    ) -> Result<Vec<Component>>
    where
        F: Future<Output = ()> + Send,
    {
        self.get_components(lat, lon, options).await
    }

    async fn get_display_name_with_cancel<F>(
        &self,
        _cancel: F,
        lat: f64,
        lon: f64,
        options: &CallOptions,
    ) -> Result<String>
    where
        F: Future<Output = ()> + Send,
    {
        self.get_display_name(lat, lon, options).await
    }
}
