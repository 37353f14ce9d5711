pub mod amount_formatter;
pub mod decimal_scaler;

pub use amount_formatter::AmountFormatter;
pub use decimal_scaler::{DecimalScaler, DEFAULT_SCALE, MAX_SCALE};
