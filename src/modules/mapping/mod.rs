pub mod models;
pub mod services;

pub use models::{ExemptAmountLine, SourceLineItem, TaxLineRequest, TaxRequest};
pub use services::{ExchangeRunner, TaxRequestMapper, TaxResponseMapper};
