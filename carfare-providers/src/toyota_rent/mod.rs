//! Toyota Rent a Car provider implementation.
//!
//! Counter rental: the shortest covering pack is always charged, even for a
//! 15-minute rental. Every kilometre is billed.

mod descriptor;
mod pricing;

pub use descriptor::toyota_rent_descriptor;
pub use pricing::{TOYOTA_RENT_TARIFF, toyota_rent_pricing};
