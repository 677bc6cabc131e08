//! ENEOS Car Share provider implementation.
//!
//! Service-station car sharing with hour packs up to 72 hours. Rentals
//! longer than 72 hours are not offered.

mod descriptor;
mod pricing;

pub use descriptor::eneos_descriptor;
pub use pricing::{ENEOS_TARIFF, eneos_pricing};
