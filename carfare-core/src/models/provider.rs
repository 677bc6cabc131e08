//! Provider-related types.
//!
//! This module contains types related to rental providers:
//! - [`ProviderKind`] - Enum of supported providers
//! - [`ProviderCategory`] - Car share vs. rent-a-car
//! - [`ProviderMetadata`] - Display info

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Provider Kind
// ============================================================================

/// Supported rental providers, in registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderKind {
    /// Times Car Share
    TimesCar,
    /// TOYOTA SHARE
    ToyotaShare,
    /// ENEOS Car Share
    Eneos,
    /// Yasashii Car Share
    Yasashii,
    /// EveryGo (Honda)
    EveryGo,
    /// e-Share Mobi
    EShareMobi,
    /// Toyota Rent a Car
    ToyotaRent,
    /// Nippon Rent-A-Car
    NipponRent,
    /// Niconico Rent a Car
    NiconicoRent,
    /// Times Car Rental
    TimesRent,
    /// ORIX Rent a Car
    OrixRent,
}

impl ProviderKind {
    /// Returns the display name for this provider.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::TimesCar => "タイムズカーシェア",
            Self::ToyotaShare => "TOYOTA SHARE",
            Self::Eneos => "ENEOSカーシェア",
            Self::Yasashii => "やさしいカーシェア",
            Self::EveryGo => "EveryGo",
            Self::EShareMobi => "eシェアモビ",
            Self::ToyotaRent => "トヨタレンタカー",
            Self::NipponRent => "ニッポンレンタカー",
            Self::NiconicoRent => "ニコニコレンタカー",
            Self::TimesRent => "タイムズレンタカー",
            Self::OrixRent => "オリックスレンタカー",
        }
    }

    /// Returns the romanized name for this provider.
    pub fn english_name(&self) -> &'static str {
        match self {
            Self::TimesCar => "Times Car Share",
            Self::ToyotaShare => "TOYOTA SHARE",
            Self::Eneos => "ENEOS Car Share",
            Self::Yasashii => "Yasashii Car Share",
            Self::EveryGo => "EveryGo",
            Self::EShareMobi => "e-Share Mobi",
            Self::ToyotaRent => "Toyota Rent a Car",
            Self::NipponRent => "Nippon Rent-A-Car",
            Self::NiconicoRent => "Niconico Rent a Car",
            Self::TimesRent => "Times Car Rental",
            Self::OrixRent => "ORIX Rent a Car",
        }
    }

    /// Returns all provider kinds in registry order.
    pub fn all() -> &'static [ProviderKind] {
        &[
            Self::TimesCar,
            Self::ToyotaShare,
            Self::Eneos,
            Self::Yasashii,
            Self::EveryGo,
            Self::EShareMobi,
            Self::ToyotaRent,
            Self::NipponRent,
            Self::NiconicoRent,
            Self::TimesRent,
            Self::OrixRent,
        ]
    }

    /// Returns the CLI name for this provider (lowercase, no spaces).
    pub fn cli_name(&self) -> &'static str {
        match self {
            Self::TimesCar => "times-car",
            Self::ToyotaShare => "toyota-share",
            Self::Eneos => "eneos",
            Self::Yasashii => "yasashii",
            Self::EveryGo => "everygo",
            Self::EShareMobi => "eshare-mobi",
            Self::ToyotaRent => "toyota-rent",
            Self::NipponRent => "nippon-rent",
            Self::NiconicoRent => "niconico-rent",
            Self::TimesRent => "times-rent",
            Self::OrixRent => "orix-rent",
        }
    }

    /// Looks up a provider by its CLI name.
    pub fn from_cli_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.cli_name() == name)
    }

    /// Returns the provider category.
    pub fn category(&self) -> ProviderCategory {
        match self {
            Self::TimesCar
            | Self::ToyotaShare
            | Self::Eneos
            | Self::Yasashii
            | Self::EveryGo
            | Self::EShareMobi => ProviderCategory::CarShare,
            Self::ToyotaRent
            | Self::NipponRent
            | Self::NiconicoRent
            | Self::TimesRent
            | Self::OrixRent => ProviderCategory::RentACar,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ============================================================================
// Provider Category
// ============================================================================

/// Business model of a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderCategory {
    /// Self-service car sharing, billed per 15 minutes with packs.
    CarShare,
    /// Counter rental, billed by flat duration packs.
    RentACar,
}

impl ProviderCategory {
    /// Short label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::CarShare => "カーシェア",
            Self::RentACar => "レンタカー",
        }
    }
}

// ============================================================================
// Provider Metadata
// ============================================================================

/// Display metadata for a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderMetadata {
    /// Provider identifier.
    pub id: ProviderKind,
    /// Display name shown in comparison tables.
    pub display_name: String,
    /// Romanized name.
    pub english_name: String,
    /// CLI name.
    pub cli_name: String,
    /// Alternative CLI names.
    pub aliases: Vec<String>,
    /// Business model.
    pub category: ProviderCategory,
}

impl ProviderMetadata {
    /// Creates default metadata for the given provider.
    pub fn for_provider(id: ProviderKind) -> Self {
        Self {
            id,
            display_name: id.display_name().to_string(),
            english_name: id.english_name().to_string(),
            cli_name: id.cli_name().to_string(),
            aliases: Vec::new(),
            category: id.category(),
        }
    }
}
