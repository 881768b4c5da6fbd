//! SDK version and the `User-Agent` sent with every request.

/// Version of this SDK, taken from the package manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Value of the `User-Agent` header, e.g. `smapp-sdk-rs/0.7.0`
pub fn user_agent() -> String {
    format!("smapp-sdk-rs/{}", VERSION)
}
