//! e-Share Mobi provider descriptor.

use super::plan::EShareMobiPlan;
use super::pricing::EShareMobiPricing;
use crate::descriptor::ProviderDescriptor;

/// Creates the e-Share Mobi provider descriptor for a plan class.
pub fn eshare_mobi_descriptor(plan: EShareMobiPlan) -> ProviderDescriptor {
    ProviderDescriptor::new(EShareMobiPricing::new(plan)).with_aliases(&["eshare", "mobi"])
}
