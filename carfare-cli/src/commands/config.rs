//! Config command - manage configuration.

use anyhow::Result;
use carfare_core::ProviderKind;
use carfare_providers::{EShareMobiPlan, EveryGoPlan, ProviderRegistry};
use carfare_store::{SettingsStore, default_config_dir, default_settings_path, load_holidays};
use clap::{Args, Subcommand};
use std::path::PathBuf;
use tracing::info;

use crate::output::JsonFormatter;
use crate::{Cli, OutputFormat};

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration.
    Show,

    /// Show configuration paths.
    Path,

    /// Enable a provider.
    Enable {
        /// Provider to enable.
        provider: String,
    },

    /// Disable a provider.
    Disable {
        /// Provider to disable.
        provider: String,
    },

    /// Set a vehicle plan class.
    Plan {
        /// Provider with plan classes: everygo or eshare-mobi.
        provider: String,
        /// Class: entry, basic, middle, premium (everygo) or e1..e4 (eshare-mobi).
        class: String,
    },

    /// Set the public-holiday file (omit to clear).
    Holidays {
        /// JSON list of YYYY-MM-DD dates.
        file: Option<PathBuf>,
    },

    /// Reset to defaults.
    Reset,
}

/// Runs the config command.
pub async fn run(args: &ConfigArgs, cli: &Cli) -> Result<()> {
    match &args.action {
        ConfigAction::Show => show_config(cli).await,
        ConfigAction::Path => show_paths(cli),
        ConfigAction::Enable { provider } => set_enabled(provider, true).await,
        ConfigAction::Disable { provider } => set_enabled(provider, false).await,
        ConfigAction::Plan { provider, class } => set_plan(provider, class).await,
        ConfigAction::Holidays { file } => set_holidays(file.clone()).await,
        ConfigAction::Reset => reset_config().await,
    }
}

async fn show_config(cli: &Cli) -> Result<()> {
    let store = SettingsStore::load_default().await?;
    let settings = store.get().await;

    match cli.format {
        OutputFormat::Text => {
            let registry = ProviderRegistry::new(&settings.registry_options());

            println!("Carfare Configuration");
            println!("{}", "─".repeat(40));
            println!();
            println!("Enabled providers:");
            for kind in settings.enabled_kinds() {
                if let Some(desc) = registry.get(kind) {
                    println!("  • {} ({})", desc.display_name(), desc.cli_name());
                }
            }
            println!();
            println!("EveryGo plan:      {}", settings.everygo_plan);
            println!("e-Share Mobi plan: {}", settings.eshare_plan);
            println!("Default distance:  {}km", settings.default_distance_km);
            println!("Default hours:     {}h", settings.default_hours);
            match &settings.holidays_file {
                Some(path) => println!("Holiday file:      {}", path.display()),
                None => println!("Holiday file:      (weekends only)"),
            }
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            let output = formatter.format(&settings)?;
            println!("{output}");
        }
    }

    Ok(())
}

fn show_paths(cli: &Cli) -> Result<()> {
    let config_dir = default_config_dir();
    let settings_path = default_settings_path();

    match cli.format {
        OutputFormat::Text => {
            println!("Configuration Paths");
            println!("{}", "─".repeat(40));
            println!();
            println!("Config dir:    {}", config_dir.display());
            println!("Settings file: {}", settings_path.display());
        }
        OutputFormat::Json => {
            let paths = serde_json::json!({
                "config_dir": config_dir.display().to_string(),
                "settings_file": settings_path.display().to_string(),
            });
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&paths)?);
        }
    }

    Ok(())
}

async fn set_enabled(name: &str, enabled: bool) -> Result<()> {
    let registry = ProviderRegistry::builtin();
    let kind = registry.resolve(&name.to_lowercase())?;

    let store = SettingsStore::load_default().await?;
    store.set_provider_enabled(kind, enabled).await;
    store.save().await?;

    if enabled {
        info!(provider = %kind.display_name(), "Provider enabled");
        println!("Enabled: {}", kind.display_name());
    } else {
        info!(provider = %kind.display_name(), "Provider disabled");
        println!("Disabled: {}", kind.display_name());
    }

    Ok(())
}

async fn set_plan(provider: &str, class: &str) -> Result<()> {
    let registry = ProviderRegistry::builtin();
    let kind = registry.resolve(&provider.to_lowercase())?;
    let store = SettingsStore::load_default().await?;

    match kind {
        ProviderKind::EveryGo => {
            let plan: EveryGoPlan = class.parse()?;
            store.set_everygo_plan(plan).await;
            println!("EveryGo plan set to: {plan}");
        }
        ProviderKind::EShareMobi => {
            let plan: EShareMobiPlan = class.parse()?;
            store.set_eshare_plan(plan).await;
            println!("e-Share Mobi plan set to: {plan}");
        }
        other => anyhow::bail!("{} has no plan classes", other.display_name()),
    }

    store.save().await?;
    info!(provider = %kind.cli_name(), class, "Plan class updated");

    Ok(())
}

async fn set_holidays(file: Option<PathBuf>) -> Result<()> {
    if let Some(path) = &file {
        // Reject files the quote command would ignore.
        let set = load_holidays(path).await?;
        println!("Holiday file set to: {} ({} dates)", path.display(), set.len());
    } else {
        println!("Holiday file cleared (weekends only)");
    }

    let store = SettingsStore::load_default().await?;
    store.set_holidays_file(file).await;
    store.save().await?;

    info!("Holiday file updated");
    Ok(())
}

async fn reset_config() -> Result<()> {
    let store = SettingsStore::load_default().await?;
    store.reset().await;
    store.save().await?;

    info!(path = %store.path().display(), "Settings reset");
    println!("Configuration reset to defaults");

    Ok(())
}
