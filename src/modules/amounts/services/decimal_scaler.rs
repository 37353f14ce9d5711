use rust_decimal::Decimal;
use tracing::warn;

/// Currency-decimal count assumed when the transmitted scale is unusable
pub const DEFAULT_SCALE: u32 = 2;

/// Upper bound on the currency-decimal count (Decimal mantissa limit)
pub const MAX_SCALE: u32 = 28;

/// Converts ERP decimal-scaled integer strings into true decimal amounts.
///
/// ERP amounts arrive as integers with an implied decimal point ("10000"
/// with scale 2 means 100.00) and use a trailing-minus sign convention
/// ("500-" means -500). Unusable input degrades to zero instead of failing,
/// so document processing stays total; every substitution is logged.
pub struct DecimalScaler;

impl DecimalScaler {
    /// Parse a scaled integer string into the decimal amount it represents.
    ///
    /// A single trailing "-" is normalized to a leading sign before standard
    /// decimal parsing. Empty, blank, or non-numeric input yields zero.
    pub fn parse_scaled(raw: &str, scale: u32) -> Decimal {
        let raw = raw.trim();
        if raw.is_empty() {
            return Decimal::ZERO;
        }

        let normalized = match raw.strip_suffix('-') {
            Some(magnitude) => format!("-{}", magnitude.trim_end()),
            None => raw.to_string(),
        };

        let value: Decimal = match normalized.parse() {
            Ok(value) => value,
            Err(_) => {
                warn!("unparseable scaled amount {:?}, substituting 0", raw);
                return Decimal::ZERO;
            }
        };

        value * minor_unit(scale)
    }

    /// Parse a currency-decimal count from the document header.
    ///
    /// Falls back to 2 when the string is not a usable non-negative integer.
    pub fn parse_scale(raw: &str) -> u32 {
        match raw.trim().parse::<u32>() {
            Ok(scale) if scale <= MAX_SCALE => scale,
            _ => {
                warn!(
                    "unparseable currency-decimal count {:?}, falling back to {}",
                    raw, DEFAULT_SCALE
                );
                DEFAULT_SCALE
            }
        }
    }

    /// Scale a decimal amount back up to its integer-of-minor-unit
    /// representation, rounding half-to-even exactly once.
    pub fn to_scaled(amount: Decimal, scale: u32) -> Decimal {
        (amount / minor_unit(scale)).round_dp(0)
    }
}

/// 10^-scale as an exact decimal (0.01 for scale 2)
fn minor_unit(scale: u32) -> Decimal {
    Decimal::new(1, scale.min(MAX_SCALE))
}
