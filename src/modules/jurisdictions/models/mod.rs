pub mod geocode;
pub mod jurisdiction;
pub mod unify;

pub use geocode::GeocodeResult;
pub use jurisdiction::JurisdictionRecord;
pub use unify::UnifyMatching;
