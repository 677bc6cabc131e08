//! User preferences store.
//!
//! Manages user settings with persistence.

use carfare_core::ProviderKind;
use carfare_providers::{EShareMobiPlan, EveryGoPlan, RegistryOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::persistence::{default_settings_path, load_json, save_json};

// ============================================================================
// Settings Types
// ============================================================================

/// User preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Providers included in comparisons.
    pub enabled_providers: Vec<ProviderKind>,

    /// EveryGo vehicle plan class.
    pub everygo_plan: EveryGoPlan,

    /// e-Share Mobi vehicle plan class.
    pub eshare_plan: EShareMobiPlan,

    /// Distance used when a quote does not give one.
    pub default_distance_km: f64,

    /// Rental length used when a quote gives neither an end nor hours.
    pub default_hours: u32,

    /// JSON file of public holidays.
    pub holidays_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled_providers: ProviderKind::all().to_vec(),
            everygo_plan: EveryGoPlan::default(),
            eshare_plan: EShareMobiPlan::default(),
            default_distance_km: 100.0,
            default_hours: 24,
            holidays_file: None,
        }
    }
}

impl Settings {
    /// Plan classes for building the provider registry.
    pub fn registry_options(&self) -> RegistryOptions {
        RegistryOptions {
            everygo_plan: self.everygo_plan,
            eshare_plan: self.eshare_plan,
        }
    }

    /// Enabled providers in registry order, without duplicates.
    pub fn enabled_kinds(&self) -> Vec<ProviderKind> {
        ProviderKind::all()
            .iter()
            .copied()
            .filter(|k| self.enabled_providers.contains(k))
            .collect()
    }

    /// Checks the quote defaults.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`] for a negative or non-finite distance or
    /// a zero-hour rental.
    pub fn validate(&self) -> Result<(), StoreError> {
        if !self.default_distance_km.is_finite() || self.default_distance_km < 0.0 {
            return Err(StoreError::Config(format!(
                "default_distance_km must be a non-negative number, got {}",
                self.default_distance_km
            )));
        }
        if self.default_hours == 0 {
            return Err(StoreError::Config("default_hours must be at least 1".to_string()));
        }
        Ok(())
    }
}

// ============================================================================
// Settings Store
// ============================================================================

/// Thread-safe settings with persistence.
pub struct SettingsStore {
    settings: Arc<RwLock<Settings>>,
    path: PathBuf,
}

impl SettingsStore {
    /// Creates a new settings store with default settings.
    pub fn new(path: PathBuf) -> Self {
        Self::with_settings(path, Settings::default())
    }

    fn with_settings(path: PathBuf, settings: Settings) -> Self {
        Self {
            settings: Arc::new(RwLock::new(settings)),
            path,
        }
    }

    /// Loads settings from the default path.
    ///
    /// # Errors
    ///
    /// Returns error if settings cannot be loaded from disk.
    pub async fn load_default() -> Result<Self, StoreError> {
        Self::load(default_settings_path()).await
    }

    /// Loads settings from a path.
    ///
    /// A missing, corrupt or invalid file falls back to defaults.
    ///
    /// # Errors
    ///
    /// Does not currently fail; unreadable files fall back to defaults.
    pub async fn load(path: PathBuf) -> Result<Self, StoreError> {
        let settings = if path.exists() {
            info!(path = %path.display(), "Loading settings");
            match load_json::<Settings>(&path).await {
                Ok(settings) => match settings.validate() {
                    Ok(()) => settings,
                    Err(e) => {
                        warn!(error = %e, "Invalid settings, using defaults");
                        Settings::default()
                    }
                },
                Err(e) => {
                    warn!(error = %e, "Failed to load settings, using defaults");
                    Settings::default()
                }
            }
        } else {
            debug!(path = %path.display(), "Settings file not found, using defaults");
            Settings::default()
        };

        Ok(Self::with_settings(path, settings))
    }

    /// The file this store saves to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets a copy of the current settings.
    pub async fn get(&self) -> Settings {
        self.settings.read().await.clone()
    }

    /// Updates settings in memory; call [`SettingsStore::save`] to persist.
    pub async fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut Settings),
    {
        let mut settings = self.settings.write().await;
        f(&mut settings);
    }

    /// Saves settings to disk.
    ///
    /// # Errors
    ///
    /// Returns error if settings cannot be written to disk.
    pub async fn save(&self) -> Result<(), StoreError> {
        let settings = self.settings.read().await;
        save_json(&self.path, &*settings).await?;
        info!(path = %self.path.display(), "Settings saved");
        Ok(())
    }

    // ========================================================================
    // Convenience Methods
    // ========================================================================

    /// Checks if a provider is enabled.
    pub async fn is_provider_enabled(&self, provider: ProviderKind) -> bool {
        self.settings
            .read()
            .await
            .enabled_providers
            .contains(&provider)
    }

    /// Enables or disables a provider, keeping registry order.
    pub async fn set_provider_enabled(&self, provider: ProviderKind, enabled: bool) {
        self.update(|s| {
            s.enabled_providers.retain(|k| *k != provider);
            if enabled {
                s.enabled_providers.push(provider);
            }
            s.enabled_providers = s.enabled_kinds();
        })
        .await;
    }

    /// Sets the EveryGo plan class.
    pub async fn set_everygo_plan(&self, plan: EveryGoPlan) {
        self.update(|s| s.everygo_plan = plan).await;
    }

    /// Sets the e-Share Mobi plan class.
    pub async fn set_eshare_plan(&self, plan: EShareMobiPlan) {
        self.update(|s| s.eshare_plan = plan).await;
    }

    /// Sets or clears the public-holiday file.
    pub async fn set_holidays_file(&self, path: Option<PathBuf>) {
        self.update(|s| s.holidays_file = path).await;
    }

    /// Restores every setting to its default.
    pub async fn reset(&self) {
        self.update(|s| *s = Settings::default()).await;
    }
}
