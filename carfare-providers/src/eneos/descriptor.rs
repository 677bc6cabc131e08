//! ENEOS Car Share provider descriptor.

use super::pricing::eneos_pricing;
use crate::descriptor::ProviderDescriptor;

/// Creates the ENEOS Car Share provider descriptor.
pub fn eneos_descriptor() -> ProviderDescriptor {
    ProviderDescriptor::new(eneos_pricing())
}
