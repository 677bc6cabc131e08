//! Niconico Rent a Car provider descriptor.

use super::pricing::niconico_rent_pricing;
use crate::descriptor::ProviderDescriptor;

/// Creates the Niconico Rent a Car provider descriptor.
pub fn niconico_rent_descriptor() -> ProviderDescriptor {
    ProviderDescriptor::new(niconico_rent_pricing()).with_aliases(&["niconico", "2525"])
}
