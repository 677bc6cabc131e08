//! EveryGo provider descriptor.

use super::plan::EveryGoPlan;
use super::pricing::EveryGoPricing;
use crate::descriptor::ProviderDescriptor;

/// Creates the EveryGo provider descriptor for a plan class.
pub fn everygo_descriptor(plan: EveryGoPlan) -> ProviderDescriptor {
    ProviderDescriptor::new(EveryGoPricing::new(plan)).with_aliases(&["honda", "every-go"])
}
