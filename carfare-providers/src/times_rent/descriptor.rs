//! Times Car Rental provider descriptor.

use super::pricing::times_rent_pricing;
use crate::descriptor::ProviderDescriptor;

/// Creates the Times Car Rental provider descriptor.
pub fn times_rent_descriptor() -> ProviderDescriptor {
    ProviderDescriptor::new(times_rent_pricing()).with_aliases(&["timesrent"])
}
