//! Provider registry.
//!
//! The registry owns every provider descriptor in comparison order. It is
//! built once by the host and passed by reference to [`compare`], so no
//! provider list lives in global state.
//!
//! [`compare`]: crate::compare

use carfare_core::ProviderKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::descriptor::ProviderDescriptor;
use crate::eneos::eneos_descriptor;
use crate::error::ProviderError;
use crate::eshare_mobi::{EShareMobiPlan, eshare_mobi_descriptor};
use crate::everygo::{EveryGoPlan, everygo_descriptor};
use crate::niconico_rent::niconico_rent_descriptor;
use crate::nippon_rent::nippon_rent_descriptor;
use crate::orix_rent::orix_rent_descriptor;
use crate::times_car::times_car_descriptor;
use crate::times_rent::times_rent_descriptor;
use crate::toyota_rent::toyota_rent_descriptor;
use crate::toyota_share::toyota_share_descriptor;
use crate::yasashii::yasashii_descriptor;

// ============================================================================
// Registry Options
// ============================================================================

/// Choices that change how providers are priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryOptions {
    /// EveryGo vehicle plan class.
    pub everygo_plan: EveryGoPlan,
    /// e-Share Mobi vehicle plan class.
    pub eshare_plan: EShareMobiPlan,
}

/// Builds all descriptors in comparison order.
///
/// Car sharing services come first, then counter rentals.
fn init_descriptors(options: &RegistryOptions) -> Vec<ProviderDescriptor> {
    vec![
        // Car sharing
        times_car_descriptor(),
        toyota_share_descriptor(),
        eneos_descriptor(),
        yasashii_descriptor(),
        everygo_descriptor(options.everygo_plan),
        eshare_mobi_descriptor(options.eshare_plan),
        // Rent-a-car
        toyota_rent_descriptor(),
        nippon_rent_descriptor(),
        niconico_rent_descriptor(),
        times_rent_descriptor(),
        orix_rent_descriptor(),
    ]
}

/// Builds the CLI name to provider kind mapping.
fn build_cli_name_map(descriptors: &[ProviderDescriptor]) -> HashMap<String, ProviderKind> {
    let mut map = HashMap::new();

    for desc in descriptors {
        // Primary CLI name
        map.insert(desc.cli_name().to_string(), desc.id);

        // Aliases
        for alias in &desc.metadata.aliases {
            map.insert(alias.clone(), desc.id);
        }
    }

    map
}

// ============================================================================
// Provider Registry
// ============================================================================

/// Ordered collection of provider descriptors.
#[derive(Debug)]
pub struct ProviderRegistry {
    descriptors: Vec<ProviderDescriptor>,
    cli_names: HashMap<String, ProviderKind>,
}

impl ProviderRegistry {
    /// Builds the registry of all built-in providers.
    pub fn new(options: &RegistryOptions) -> Self {
        Self::from_descriptors(init_descriptors(options))
    }

    /// Built-in providers with default plan classes.
    pub fn builtin() -> Self {
        Self::new(&RegistryOptions::default())
    }

    /// Wraps an explicit descriptor list; its order is the comparison order.
    pub fn from_descriptors(descriptors: Vec<ProviderDescriptor>) -> Self {
        let cli_names = build_cli_name_map(&descriptors);
        Self {
            descriptors,
            cli_names,
        }
    }

    /// Returns all provider descriptors in order.
    pub fn all(&self) -> &[ProviderDescriptor] {
        &self.descriptors
    }

    /// Gets a provider descriptor by kind.
    pub fn get(&self, id: ProviderKind) -> Option<&ProviderDescriptor> {
        self.descriptors.iter().find(|d| d.id == id)
    }

    /// Looks up a provider by CLI name or alias.
    pub fn get_by_cli_name(&self, name: &str) -> Option<&ProviderDescriptor> {
        let kind = self.cli_names.get(name)?;
        self.get(*kind)
    }

    /// Resolves a CLI name or alias to its provider kind.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::UnknownProvider`] if nothing matches.
    pub fn resolve(&self, name: &str) -> Result<ProviderKind, ProviderError> {
        self.cli_names
            .get(name.trim())
            .copied()
            .ok_or_else(|| ProviderError::UnknownProvider(name.to_string()))
    }

    /// Keeps only the given providers, preserving registry order.
    #[must_use]
    pub fn filtered(mut self, kinds: &[ProviderKind]) -> Self {
        self.descriptors.retain(|d| kinds.contains(&d.id));
        self.cli_names.retain(|_, kind| kinds.contains(kind));
        self
    }

    /// Returns the number of registered providers.
    pub fn count(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns all provider kinds in order.
    pub fn kinds(&self) -> Vec<ProviderKind> {
        self.descriptors.iter().map(|d| d.id).collect()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

// ============================================================================
// Tests
// ============================================================================
