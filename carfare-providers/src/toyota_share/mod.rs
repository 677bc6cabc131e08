//! TOYOTA SHARE provider implementation.
//!
//! Car sharing from Toyota dealers. Packs stop at 24 hours; longer rentals
//! pay per started hour until the day rate becomes cheaper.

mod descriptor;
mod pricing;

pub use descriptor::toyota_share_descriptor;
pub use pricing::{TOYOTA_SHARE_TARIFF, toyota_share_pricing};
