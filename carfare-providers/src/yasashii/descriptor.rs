//! Yasashii Car Share provider descriptor.

use super::pricing::yasashii_pricing;
use crate::descriptor::ProviderDescriptor;

/// Creates the Yasashii Car Share provider descriptor.
pub fn yasashii_descriptor() -> ProviderDescriptor {
    ProviderDescriptor::new(yasashii_pricing())
}
