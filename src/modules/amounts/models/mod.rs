pub mod scaled_amount;

pub use scaled_amount::ScaledAmount;
