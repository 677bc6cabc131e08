//! Times Car Rental provider implementation.
//!
//! Counter rental. Excess hours beyond 24 are billed hourly until the
//! extra-day rate is cheaper; an excess ending on a day boundary bills
//! whole days.

mod descriptor;
mod pricing;

pub use descriptor::times_rent_descriptor;
pub use pricing::{TIMES_RENT_TARIFF, times_rent_pricing};
