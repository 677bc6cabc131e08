//! EveryGo provider implementation.
//!
//! Honda's car sharing service. Five candidate prices are computed for
//! every rental and the lowest wins:
//!
//! - 15-minute pay-as-you-go (weekdays only)
//! - 4-hour pack (weekdays only), extended at the 15-minute rate
//! - 8-hour and 16-hour packs, extended at a reduced rate
//! - Night pack for rentals inside 21:00 to 07:00
//!
//! Rates depend on the vehicle [`EveryGoPlan`] class.

mod descriptor;
mod plan;
mod pricing;

pub use descriptor::everygo_descriptor;
pub use plan::{EveryGoPlan, EveryGoRates};
pub use pricing::{EVERYGO_MAX_HOURS, EveryGoPricing};
