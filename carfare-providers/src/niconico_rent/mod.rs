//! Niconico Rent a Car provider implementation.

mod descriptor;
mod pricing;

pub use descriptor::niconico_rent_descriptor;
pub use pricing::{NICONICO_RENT_TARIFF, niconico_rent_pricing};
