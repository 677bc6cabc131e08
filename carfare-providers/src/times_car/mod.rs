//! Times Car Share provider implementation.
//!
//! Per-15-minute car sharing with hour packs from 6 to 72 hours and an
//! overnight pack.
//!
//! ## Tariff
//!
//! - 220 yen per started 15 minutes, capped by the first covering hour pack
//! - Night pack (2640 yen): pick-up from 18:00, return by 09:00
//! - 20 yen/km once the rental exceeds 6 hours, or on the night pack
//! - 550 yen insurance per started 24 hours
//! - Beyond 72 hours: the 72-hour pack plus 2640 yen per started day

mod descriptor;
mod pricing;

pub use descriptor::times_car_descriptor;
pub use pricing::{TIMES_CAR_TARIFF, TimesCarPricing, is_night_pack_window};
