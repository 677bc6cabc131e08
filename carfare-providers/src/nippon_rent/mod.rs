//! Nippon Rent-A-Car provider implementation.
//!
//! Counter rental with 6/12/24-hour packs. Beyond 24 hours each excess hour
//! is billed until the extra-day rate is cheaper.

mod descriptor;
mod pricing;

pub use descriptor::nippon_rent_descriptor;
pub use pricing::{NIPPON_RENT_TARIFF, nippon_rent_pricing};
