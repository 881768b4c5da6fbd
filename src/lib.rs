//! Smapp SDK - client for the Smapp reverse geocoding API
//!
//! Turns a latitude/longitude pair into address components or a single
//! display name.
//!
//! ```no_run
//! use std::time::Duration;
//! use smapp_sdk::config::{ApiKeySource, Config};
//! use smapp_sdk::reverse::{CallOptions, ReverseClient, ReverseGeocoder, Version};
//!
//! # async fn run() -> smapp_sdk::reverse::Result<()> {
//! let cfg = Config::new("https://api.example.com", "key", "X-Smapp-Key", ApiKeySource::Header);
//! let client = ReverseClient::new(cfg, Version::V1, Duration::from_secs(5))?;
//! let options = CallOptions::default().with_english_language().with_zoom_level(16);
//! let name = client.get_display_name(35.7, 51.4, &options).await?;
//! println!("{}", name);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod reverse;
pub mod version;

pub use config::{ApiKeySource, Config};
pub use reverse::{CallOptions, Component, MockClient, ReverseClient, ReverseGeocoder};
