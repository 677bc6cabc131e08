//! Times Car Share provider descriptor.

use super::pricing::TimesCarPricing;
use crate::descriptor::ProviderDescriptor;

/// Creates the Times Car Share provider descriptor.
pub fn times_car_descriptor() -> ProviderDescriptor {
    ProviderDescriptor::new(TimesCarPricing::new()).with_aliases(&["times", "timescar"])
}
