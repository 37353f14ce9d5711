use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::amounts::services::{AmountFormatter, DecimalScaler};

/// A decimal amount together with the currency-decimal count used to derive
/// it from (and render it back to) an ERP scaled integer string.
///
/// All line items of one document share the same scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaledAmount {
    pub value: Decimal,
    pub scale: u32,
}

impl ScaledAmount {
    pub fn new(value: Decimal, scale: u32) -> Self {
        Self { value, scale }
    }

    /// Build from a raw ERP scaled integer string (lenient parse)
    pub fn from_raw(raw: &str, scale: u32) -> Self {
        Self {
            value: DecimalScaler::parse_scaled(raw, scale),
            scale,
        }
    }

    pub fn zero(scale: u32) -> Self {
        Self {
            value: Decimal::ZERO,
            scale,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Render back into the ERP scaled trailing-minus convention
    pub fn to_erp_string(&self) -> String {
        AmountFormatter::format_scaled(self.value, self.scale)
    }
}
