pub mod address_decision;

pub use address_decision::AddressDecisionEngine;
