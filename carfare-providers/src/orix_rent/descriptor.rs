//! ORIX Rent a Car provider descriptor.

use super::pricing::orix_rent_pricing;
use crate::descriptor::ProviderDescriptor;

/// Creates the ORIX Rent a Car provider descriptor.
pub fn orix_rent_descriptor() -> ProviderDescriptor {
    ProviderDescriptor::new(orix_rent_pricing()).with_aliases(&["orix"])
}
