pub mod jurisdiction_builder;
pub mod state_codes;

pub use jurisdiction_builder::{JurisdictionCodeBuilder, UNIFY_FLAG};
