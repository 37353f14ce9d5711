pub mod tax_request;
pub mod tax_response;

pub use tax_request::{SourceLineItem, TaxLineRequest, TaxRequest};
pub use tax_response::ExemptAmountLine;
