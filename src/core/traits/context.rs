/// Read-only key/value property lookup supplied by the integration platform.
///
/// Carries credentials, the service base URL, and per-document feature flags.
/// The engine never reads properties directly; `Config::from_properties`
/// resolves them into typed configuration before any engine function runs.
pub trait PropertySource {
    fn get_property(&self, key: &str) -> Option<String>;
}

/// Audit-trail attachment sink.
///
/// The orchestration seam records inbound payloads here when a document
/// fails; the engine itself produces no audit output.
pub trait AuditSink {
    fn record(&self, name: &str, content: &str);
}
