pub mod caller;
pub mod context;

pub use caller::ServiceCaller;
pub use context::{AuditSink, PropertySource};
