//! Yasashii Car Share provider implementation.

mod descriptor;
mod pricing;

pub use descriptor::yasashii_descriptor;
pub use pricing::{YASASHII_TARIFF, yasashii_pricing};
