//! ORIX Rent a Car provider implementation.

mod descriptor;
mod pricing;

pub use descriptor::orix_rent_descriptor;
pub use pricing::{ORIX_RENT_TARIFF, orix_rent_pricing};
