//! The remote post resource and its HTTP client.
//!
//! [`Resource`] is the seam between the fetch lifecycle and the network:
//! the controller only ever sees `Result<Option<FetchResult>, FetchError>`.
//! `Ok(None)` means the server answered 2xx with a JSON `null` body.

mod error;
mod http;
mod model;

use async_trait::async_trait;

pub use error::{FetchError, UNKNOWN_ERROR_MESSAGE};
pub use http::HttpResource;
pub use model::FetchResult;

/// Source of a single fetch.
///
/// One call is one outbound request. Implementations must not retry.
#[async_trait]
pub trait Resource: Send + Sync {
    async fn fetch(&self) -> Result<Option<FetchResult>, FetchError>;

    /// Human-readable target, used in logs and the header.
    fn describe(&self) -> String;
}
