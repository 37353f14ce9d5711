pub mod models;
pub mod services;

pub use models::{AddressDecision, AddressInput};
pub use services::AddressDecisionEngine;
