//! Per-request options for reverse geocode calls.
//!
//! Every optional parameter starts unset and is only sent once a setter touches it.
//! Setters can be folded over the defaults with [`CallOptions::new`] or chained as
//! builder methods; in both forms the last setter touching a field wins.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Zoom level reported when none was set
pub const DEFAULT_ZOOM_LEVEL: i32 = 16;

/// Shape of the address returned by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    #[default]
    Driver,
    Passenger,
    Verbose,
}

impl ResponseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseType::Driver => "driver",
            ResponseType::Passenger => "passenger",
            ResponseType::Verbose => "verbose",
        }
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language of the returned address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "fa")]
    Farsi,
    #[serde(rename = "en")]
    English,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Farsi => "fa",
            Language::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single option applied in place by [`CallOptions::new`].
pub type CallOptionSetter = Box<dyn FnOnce(&mut CallOptions) + Send>;

/// Variable behaviour of one reverse geocode request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallOptions {
    zoom_level: Option<i32>,
    response_type: Option<ResponseType>,
    language: Option<Language>,
    headers: HashMap<String, String>,
}

impl CallOptions {
    /// Start from the defaults and apply `setters` in order.
    pub fn new<I>(setters: I) -> Self
    where
        I: IntoIterator<Item = CallOptionSetter>,
    {
        let mut options = CallOptions::default();
        for setter in setters {
            setter(&mut options);
        }
        options
    }

    pub fn with_driver_response_type(self) -> Self {
        self.apply(with_driver_response_type())
    }

    pub fn with_passenger_response_type(self) -> Self {
        self.apply(with_passenger_response_type())
    }

    pub fn with_verbose_response_type(self) -> Self {
        self.apply(with_verbose_response_type())
    }

    pub fn with_farsi_language(self) -> Self {
        self.apply(with_farsi_language())
    }

    pub fn with_english_language(self) -> Self {
        self.apply(with_english_language())
    }

    pub fn with_zoom_level(self, zoom_level: i32) -> Self {
        self.apply(with_zoom_level(zoom_level))
    }

    pub fn with_headers(self, headers: HashMap<String, String>) -> Self {
        self.apply(with_headers(headers))
    }

    fn apply(mut self, setter: CallOptionSetter) -> Self {
        setter(&mut self);
        self
    }

    /// Zoom level to send, if one was set
    pub fn zoom_level_param(&self) -> Option<i32> {
        self.zoom_level
    }

    /// Effective zoom level, falling back to [`DEFAULT_ZOOM_LEVEL`]
    pub fn zoom_level(&self) -> i32 {
        self.zoom_level.unwrap_or(DEFAULT_ZOOM_LEVEL)
    }

    pub fn response_type_param(&self) -> Option<ResponseType> {
        self.response_type
    }

    pub fn response_type(&self) -> ResponseType {
        self.response_type.unwrap_or_default()
    }

    pub fn language_param(&self) -> Option<Language> {
        self.language
    }

    pub fn language(&self) -> Language {
        self.language.unwrap_or_default()
    }

    /// Extra headers sent after the base headers
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

pub fn with_driver_response_type() -> CallOptionSetter {
    Box::new(|options| options.response_type = Some(ResponseType::Driver))
}

pub fn with_passenger_response_type() -> CallOptionSetter {
    Box::new(|options| options.response_type = Some(ResponseType::Passenger))
}

pub fn with_verbose_response_type() -> CallOptionSetter {
    Box::new(|options| options.response_type = Some(ResponseType::Verbose))
}

pub fn with_farsi_language() -> CallOptionSetter {
    Box::new(|options| options.language = Some(Language::Farsi))
}

pub fn with_english_language() -> CallOptionSetter {
    Box::new(|options| options.language = Some(Language::English))
}

/// Any value is accepted; range checks are left to the service.
pub fn with_zoom_level(zoom_level: i32) -> CallOptionSetter {
    Box::new(move |options| options.zoom_level = Some(zoom_level))
}

/// Replace the extra headers. An empty map keeps the headers already set.
pub fn with_headers(headers: HashMap<String, String>) -> CallOptionSetter {
    Box::new(move |options| {
        if !headers.is_empty() {
            options.headers = headers;
        }
    })
}
