use crate::core::Result;
use async_trait::async_trait;

/// Opaque transport between request construction and response mapping.
///
/// The engine is agnostic to the payload format the implementation speaks
/// (SOAP/XML, JSON). Implementations own all suspension points, retries,
/// and timeouts; the engine never retries.
#[async_trait]
pub trait ServiceCaller: Send + Sync {
    /// Send a request payload and return the raw response payload
    async fn call(&self, request_payload: &str) -> Result<String>;
}
