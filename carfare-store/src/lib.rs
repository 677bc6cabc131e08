// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Carfare Store
//!
//! Persisted user preferences for the Carfare CLI.
//!
//! This crate provides:
//!
//! - **SettingsStore**: User preferences with persistence
//! - **Holidays**: Loading public-holiday files into a calendar
//! - **Persistence**: File I/O helpers for JSON data
//!
//! ## Usage
//!
//! ```ignore
//! use carfare_store::SettingsStore;
//! use carfare_core::ProviderKind;
//!
//! let store = SettingsStore::load_default().await?;
//! store.set_provider_enabled(ProviderKind::Yasashii, false).await;
//! store.save().await?;
//!
//! let registry = ProviderRegistry::new(&store.get().await.registry_options());
//! ```

pub mod error;
pub mod holidays;
pub mod persistence;
pub mod settings_store;

pub use error::StoreError;
pub use holidays::{load_holidays, parse_holidays};
pub use persistence::{
    default_config_dir, default_settings_path, load_json, load_json_or_default, save_json,
};
pub use settings_store::{Settings, SettingsStore};
