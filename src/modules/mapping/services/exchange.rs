use tracing::error;

use crate::core::{AuditSink, Result, ServiceCaller};

/// Attachment name under which a failed request payload is preserved
pub const REQUEST_AUDIT_NAME: &str = "suretax-request-payload";

/// Owns the round-trip failure semantics between the two mappers.
///
/// On transport failure the original request payload is recorded to the
/// audit sink and the error propagates unchanged. No retries, and no
/// partial results for the document.
pub struct ExchangeRunner;

impl ExchangeRunner {
    pub async fn run_round_trip<C>(
        caller: &C,
        request_payload: &str,
        audit: &dyn AuditSink,
    ) -> Result<String>
    where
        C: ServiceCaller + ?Sized,
    {
        match caller.call(request_payload).await {
            Ok(response_payload) => Ok(response_payload),
            Err(err) => {
                error!("tax service round trip failed: {}", err);
                audit.record(REQUEST_AUDIT_NAME, request_payload);
                Err(err)
            }
        }
    }
}
