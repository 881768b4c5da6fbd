//! Response shapes returned by the reverse geocode endpoint.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Envelope status of a successful request
pub const OK_STATUS: &str = "OK";
pub const ERROR_STATUS: &str = "ERROR";

/// One element of the address hierarchy (country, city, street, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub component_type: String,
}

impl Component {
    pub fn new(name: &str, component_type: &str) -> Self {
        Self {
            name: name.to_string(),
            component_type: component_type.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<R> {
    pub status: String,
    /// `None` when absent or `null`
    #[serde(default)]
    pub result: Option<R>,
}

impl<R: ReverseResult> Envelope<R> {
    pub fn into_output(self) -> R::Output {
        self.result.unwrap_or_default().into_output()
    }
}

/// A `result` payload and the value extracted from it.
pub(crate) trait ReverseResult: DeserializeOwned + Default {
    type Output;

    /// Value of the `display` query parameter selecting this shape
    const DISPLAY: bool;

    fn into_output(self) -> Self::Output;
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ComponentsResult {
    #[serde(default)]
    components: Option<Vec<Component>>,
}

impl ReverseResult for ComponentsResult {
    type Output = Vec<Component>;
    const DISPLAY: bool = false;

    fn into_output(self) -> Vec<Component> {
        self.components.unwrap_or_default()
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DisplayNameResult {
    #[serde(rename = "displayName", default)]
    display_name: Option<String>,
}

impl ReverseResult for DisplayNameResult {
    type Output = String;
    const DISPLAY: bool = true;

    fn into_output(self) -> String {
        self.display_name.unwrap_or_default()
    }
}
