//! Nippon Rent-A-Car provider descriptor.

use super::pricing::nippon_rent_pricing;
use crate::descriptor::ProviderDescriptor;

/// Creates the Nippon Rent-A-Car provider descriptor.
pub fn nippon_rent_descriptor() -> ProviderDescriptor {
    ProviderDescriptor::new(nippon_rent_pricing()).with_aliases(&["nippon"])
}
