pub mod exemption_allocator;

pub use exemption_allocator::{ExemptionAllocator, NO_EXEMPTION, RATIO_EXEMPTION_PREFIX};
