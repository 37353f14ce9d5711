pub mod address;

pub use address::{AddressDecision, AddressInput};
