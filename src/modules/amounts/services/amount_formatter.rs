use rust_decimal::Decimal;

use super::decimal_scaler::DecimalScaler;

/// Renders decimal amounts in the ERP trailing-minus string convention.
pub struct AmountFormatter;

impl AmountFormatter {
    /// Format an integer-of-minor-unit amount.
    ///
    /// No decimal point is emitted; negative values render as the magnitude
    /// followed by a trailing "-"; zero renders as unsigned "0".
    pub fn format(amount: Decimal) -> String {
        let rounded = amount.round_dp(0).normalize();
        if rounded.is_zero() {
            return "0".to_string();
        }
        if rounded.is_sign_negative() {
            format!("{}-", rounded.abs())
        } else {
            rounded.to_string()
        }
    }

    /// Scale a decimal amount up by the currency-decimal count, then format.
    ///
    /// The half-to-even round happens once, inside the scale conversion.
    pub fn format_scaled(amount: Decimal, scale: u32) -> String {
        Self::format(DecimalScaler::to_scaled(amount, scale))
    }
}
