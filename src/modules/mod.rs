pub mod addresses;
pub mod amounts;
pub mod exemptions;
pub mod jurisdictions;
pub mod mapping;
