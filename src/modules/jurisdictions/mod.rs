pub mod models;
pub mod services;

pub use models::{GeocodeResult, JurisdictionRecord, UnifyMatching};
pub use services::{JurisdictionCodeBuilder, UNIFY_FLAG};
