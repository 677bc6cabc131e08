//! Providers command - list available providers.

use anyhow::Result;
use carfare_providers::ProviderRegistry;
use carfare_store::SettingsStore;
use tracing::info;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Runs the providers command.
pub async fn run(cli: &Cli) -> Result<()> {
    info!("Listing providers");

    let store = SettingsStore::load_default().await?;
    let settings = store.get().await;
    let registry = ProviderRegistry::new(&settings.registry_options());
    let enabled = settings.enabled_kinds();

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);

            println!("{}", formatter.format_providers_header());
            println!("{}", "─".repeat(70));

            for desc in registry.all() {
                println!("{}", formatter.format_provider_line(desc, enabled.contains(&desc.id)));
            }

            println!();
            println!(
                "Total: {} providers ({} enabled)",
                registry.count(),
                enabled.len()
            );
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            let output = formatter.format_providers(registry.all(), &enabled)?;
            println!("{output}");
        }
    }

    Ok(())
}
