//! Quote command - price one rental window with every enabled provider.

use anyhow::Result;
use carfare_core::{HolidayCalendar, ProviderKind, WeekendCalendar};
use carfare_providers::{ProviderRegistry, compare_window};
use carfare_store::{SettingsStore, load_holidays};
use chrono::{Duration, Local, NaiveDateTime, Timelike};
use clap::Args;
use std::path::Path;
use tracing::{info, warn};

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Accepted date-time layouts, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// Arguments for the quote command.
#[derive(Args, Default)]
pub struct QuoteArgs {
    /// Pick-up time, "YYYY-MM-DD HH:MM" (default: now).
    #[arg(long, short)]
    pub start: Option<String>,

    /// Return time, "YYYY-MM-DD HH:MM".
    #[arg(long, short, conflicts_with = "hours")]
    pub end: Option<String>,

    /// Rental length in hours (default: from settings).
    #[arg(long)]
    pub hours: Option<u32>,

    /// Planned distance in kilometres (default: from settings).
    #[arg(long, short)]
    pub distance: Option<f64>,
}

/// Runs the quote command.
pub async fn run(args: &QuoteArgs, cli: &Cli) -> Result<()> {
    let store = SettingsStore::load_default().await?;
    let settings = store.get().await;

    let registry = ProviderRegistry::new(&settings.registry_options());
    let kinds = match parse_provider_selection(&registry, cli.provider.as_deref())? {
        Some(kinds) => kinds,
        None => settings.enabled_kinds(),
    };
    let registry = registry.filtered(&kinds);
    if registry.count() == 0 {
        anyhow::bail!("No providers enabled. Use `carfare config enable <provider>`");
    }

    let start = match &args.start {
        Some(s) => parse_datetime(s)?,
        None => now_to_the_minute(),
    };
    let end = match (&args.end, args.hours) {
        (Some(e), _) => parse_datetime(e)?,
        (None, Some(hours)) => hours_after(start, hours)?,
        (None, None) => hours_after(start, settings.default_hours)?,
    };
    let distance = args.distance.unwrap_or(settings.default_distance_km);

    info!(%start, %end, distance, providers = registry.count(), "Comparing fees");

    let calendar = load_calendar(settings.holidays_file.as_deref()).await;
    let report = compare_window(&registry, start, end, distance, calendar.as_ref())?;

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_report(&report, &registry));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format_report(&report, &registry)?);
        }
    }

    Ok(())
}

/// Parses the `--provider` flag.
///
/// `None` means "use the enabled providers from settings".
fn parse_provider_selection(
    registry: &ProviderRegistry,
    arg: Option<&str>,
) -> Result<Option<Vec<ProviderKind>>> {
    let Some(arg) = arg else {
        return Ok(None);
    };

    let arg = arg.trim().to_lowercase();
    if arg == "all" {
        return Ok(Some(registry.kinds()));
    }

    let mut providers = Vec::new();
    for name in arg.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        let kind = registry.resolve(name)?;
        if !providers.contains(&kind) {
            providers.push(kind);
        }
    }
    if providers.is_empty() {
        anyhow::bail!("No valid providers specified");
    }
    Ok(Some(providers))
}

/// Parses a local date-time in one of [`DATETIME_FORMATS`].
fn parse_datetime(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| anyhow::anyhow!("Invalid date-time: {s}. Use \"YYYY-MM-DD HH:MM\""))
}

fn hours_after(start: NaiveDateTime, hours: u32) -> Result<NaiveDateTime> {
    start
        .checked_add_signed(Duration::hours(i64::from(hours)))
        .ok_or_else(|| anyhow::anyhow!("{hours} hours from {start} is out of range"))
}

fn now_to_the_minute() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.date()
        .and_hms_opt(now.hour(), now.minute(), 0)
        .unwrap_or(now)
}

/// Weekends plus the configured public holidays, or weekends only.
async fn load_calendar(path: Option<&Path>) -> Box<dyn HolidayCalendar> {
    let Some(path) = path else {
        return Box::new(WeekendCalendar);
    };

    match load_holidays(path).await {
        Ok(set) => Box::new(set),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Ignoring unreadable holiday file");
            Box::new(WeekendCalendar)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_provider_default() {
        let registry = ProviderRegistry::builtin();
        assert!(parse_provider_selection(&registry, None).unwrap().is_none());
    }

    #[test]
    fn test_parse_provider_all() {
        let registry = ProviderRegistry::builtin();
        let providers = parse_provider_selection(&registry, Some("all")).unwrap().unwrap();
        assert_eq!(providers, registry.kinds());
    }

    #[test]
    fn test_parse_provider_single() {
        let registry = ProviderRegistry::builtin();
        let providers = parse_provider_selection(&registry, Some("eneos")).unwrap().unwrap();
        assert_eq!(providers, vec![ProviderKind::Eneos]);
    }

    #[test]
    fn test_parse_provider_comma_separated_with_alias() {
        let registry = ProviderRegistry::builtin();
        let providers = parse_provider_selection(&registry, Some("times-car, honda,everygo"))
            .unwrap()
            .unwrap();
        assert_eq!(providers, vec![ProviderKind::TimesCar, ProviderKind::EveryGo]);
    }

    #[test]
    fn test_parse_provider_unknown() {
        let registry = ProviderRegistry::builtin();
        let err = parse_provider_selection(&registry, Some("eneos,hertz")).unwrap_err();
        assert!(err.to_string().contains("hertz"));
    }

    #[test]
    fn test_parse_provider_empty_list() {
        let registry = ProviderRegistry::builtin();
        assert!(parse_provider_selection(&registry, Some(" , ")).is_err());
    }

    #[test]
    fn test_parse_datetime_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 4, 1)
            .unwrap()
            .and_hms_opt(21, 30, 0)
            .unwrap();
        assert_eq!(parse_datetime("2024-04-01 21:30").unwrap(), expected);
        assert_eq!(parse_datetime("2024-04-01T21:30").unwrap(), expected);
        assert_eq!(parse_datetime(" 2024/04/01 21:30 ").unwrap(), expected);
        assert_eq!(parse_datetime("2024-04-01 21:30:00").unwrap(), expected);
    }

    #[test]
    fn test_parse_datetime_invalid() {
        assert!(parse_datetime("tomorrow").is_err());
        assert!(parse_datetime("2024-04-01").is_err());
        assert!(parse_datetime("2024-13-01 10:00").is_err());
    }

    #[test]
    fn test_hours_after() {
        let start = parse_datetime("2024-04-01 21:00").unwrap();
        assert_eq!(hours_after(start, 10).unwrap(), parse_datetime("2024-04-02 07:00").unwrap());

        let err = hours_after(start, u32::MAX).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_now_is_truncated() {
        let now = now_to_the_minute();
        assert_eq!(now.second(), 0);
        assert_eq!(now.nanosecond(), 0);
    }

    #[tokio::test]
    async fn test_calendar_without_file_is_weekends() {
        let calendar = load_calendar(None).await;
        // 2024-04-29 is a Monday.
        let monday = NaiveDate::from_ymd_opt(2024, 4, 29).unwrap();
        assert!(!calendar.is_holiday(monday));
    }

    #[tokio::test]
    async fn test_calendar_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("holidays.json");
        tokio::fs::write(&path, r#"["2024-04-29"]"#).await.unwrap();

        let calendar = load_calendar(Some(&path)).await;
        let monday = NaiveDate::from_ymd_opt(2024, 4, 29).unwrap();
        assert!(calendar.is_holiday(monday));
    }

    #[tokio::test]
    async fn test_calendar_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let calendar = load_calendar(Some(&dir.path().join("missing.json"))).await;
        let saturday = NaiveDate::from_ymd_opt(2024, 4, 27).unwrap();
        assert!(calendar.is_holiday(saturday));
    }
}
