pub mod models;
pub mod services;

pub use models::ScaledAmount;
pub use services::{AmountFormatter, DecimalScaler};
