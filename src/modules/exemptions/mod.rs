pub mod models;
pub mod services;

pub use models::{ExemptionResult, TaxGroup, TaxLine};
pub use services::ExemptionAllocator;
