//! Toyota Rent a Car provider descriptor.

use super::pricing::toyota_rent_pricing;
use crate::descriptor::ProviderDescriptor;

/// Creates the Toyota Rent a Car provider descriptor.
pub fn toyota_rent_descriptor() -> ProviderDescriptor {
    ProviderDescriptor::new(toyota_rent_pricing()).with_aliases(&["toyota"])
}
