//! e-Share Mobi provider implementation.
//!
//! Car sharing with four night packs and 6/12/24-hour packs, tried in a fixed
//! priority order. Distance is free; rentals are limited to 72 hours.

mod descriptor;
mod plan;
mod pricing;

pub use descriptor::eshare_mobi_descriptor;
pub use plan::{EShareMobiPlan, EShareMobiRates};
pub use pricing::{ESHARE_MOBI_MAX_HOURS, EShareMobiPricing, NightPack};
