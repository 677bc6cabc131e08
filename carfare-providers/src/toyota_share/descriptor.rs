//! TOYOTA SHARE provider descriptor.

use super::pricing::toyota_share_pricing;
use crate::descriptor::ProviderDescriptor;

/// Creates the TOYOTA SHARE provider descriptor.
pub fn toyota_share_descriptor() -> ProviderDescriptor {
    ProviderDescriptor::new(toyota_share_pricing()).with_aliases(&["tshare"])
}
