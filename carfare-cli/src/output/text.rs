//! Text output formatting with colors.

use carfare_core::{ProviderResult, Yen};
use carfare_providers::{ComparisonReport, ProviderDescriptor, ProviderQuote, ProviderRegistry};

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";

// Column widths
const NAME_WIDTH: usize = 22;
const RATE_WIDTH: usize = 9;
const PLAN_WIDTH: usize = 24;
const FEE_WIDTH: usize = 9;

const PAY_AS_YOU_GO: &str = "通常料金";
const UNAVAILABLE: &str = "利用不可";
const CHEAPEST: &str = "★ 最安";

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Formats a full comparison: header, one row per provider, cheapest summary.
    pub fn format_report(&self, report: &ComparisonReport, registry: &ProviderRegistry) -> String {
        let mut lines = Vec::new();
        let request = &report.request;

        lines.push(format!(
            "{} {} → {} ({}, {}km)",
            self.bold("料金比較"),
            request.start().format("%Y-%m-%d %H:%M"),
            request.end().format("%Y-%m-%d %H:%M"),
            format_duration((request.end() - request.start()).num_minutes()),
            request.distance_km()
        ));
        lines.push(String::new());
        lines.push(self.format_quotes_header());
        lines.push("─".repeat(NAME_WIDTH + RATE_WIDTH + PLAN_WIDTH + FEE_WIDTH * 4 + 6));

        let cheapest = report.cheapest().map(|q| q.provider);
        for quote in &report.quotes {
            let rate = registry
                .get(quote.provider)
                .map_or(0, ProviderDescriptor::rate_per_km);
            lines.push(self.format_quote_line(quote, rate, cheapest == Some(quote.provider)));
        }

        lines.push(String::new());
        match report.cheapest() {
            Some(best) => {
                let total = best.result.total_fee().unwrap_or_default();
                lines.push(format!(
                    "{}: {} {}",
                    self.green("最安"),
                    best.name,
                    self.bold(&format_yen(total))
                ));
            }
            None => lines.push(self.red("No provider can serve this rental window")),
        }

        lines.join("\n")
    }

    /// Formats the column header of the comparison table.
    pub fn format_quotes_header(&self) -> String {
        let header = format!(
            "{} {} {} {} {} {} {}",
            pad_right("Provider", NAME_WIDTH),
            pad_left("距離料金", RATE_WIDTH),
            pad_right("プラン", PLAN_WIDTH),
            pad_left("時間料金", FEE_WIDTH),
            pad_left("距離", FEE_WIDTH),
            pad_left("保険", FEE_WIDTH),
            pad_left("合計", FEE_WIDTH),
        );
        self.bold(&header)
    }

    /// Formats one provider's row.
    pub fn format_quote_line(&self, quote: &ProviderQuote, rate_per_km: Yen, cheapest: bool) -> String {
        let name = pad_right(&quote.name, NAME_WIDTH);
        let rate = pad_left(&format_rate(rate_per_km), RATE_WIDTH);

        match &quote.result {
            ProviderResult::Quoted { fees, plan } => {
                let plan_text = match (&plan.applied_plan_name, plan.extension_fee) {
                    (Some(name), Some(ext)) => format!("{name} +{}", format_yen(ext)),
                    (Some(name), None) => name.clone(),
                    (None, _) => PAY_AS_YOU_GO.to_string(),
                };
                let plan_text = pad_right(&plan_text, PLAN_WIDTH);
                let plan_text = if plan.has_plan() {
                    self.cyan(&plan_text)
                } else {
                    self.dim(&plan_text)
                };

                let total = pad_left(&format_yen(fees.total_fee), FEE_WIDTH);
                let mut line = format!(
                    "{name} {rate} {plan_text} {} {} {} {}",
                    pad_left(&format_yen(fees.time_fee), FEE_WIDTH),
                    pad_left(&format_yen(fees.mileage_fee), FEE_WIDTH),
                    pad_left(&format_yen(fees.insurance_fee), FEE_WIDTH),
                    self.bold(&total),
                );
                if cheapest {
                    line.push(' ');
                    line.push_str(&self.green(CHEAPEST));
                }
                line
            }
            ProviderResult::Unavailable { max_hours } => format!(
                "{name} {rate} {} {}",
                self.red(UNAVAILABLE),
                self.dim(&format!("(最大{max_hours}時間)"))
            ),
        }
    }

    /// Formats provider list header.
    pub fn format_providers_header(&self) -> String {
        let header = format!(
            "{} {} {} {} {} {}",
            pad_right("Provider", NAME_WIDTH),
            pad_right("CLI", 15),
            pad_right("種別", 12),
            pad_left("距離料金", RATE_WIDTH),
            pad_left("最大", 6),
            "Enabled"
        );
        self.bold(&header)
    }

    /// Formats a single provider line.
    pub fn format_provider_line(&self, desc: &ProviderDescriptor, enabled: bool) -> String {
        let status = if enabled {
            self.green("✓")
        } else {
            self.dim("−")
        };

        let max = desc
            .max_hours()
            .map_or_else(|| "−".to_string(), |h| format!("{h}h"));

        format!(
            "{} {} {} {} {} {}",
            pad_right(desc.display_name(), NAME_WIDTH),
            pad_right(desc.cli_name(), 15),
            pad_right(desc.metadata.category.label(), 12),
            pad_left(&format_rate(desc.rate_per_km()), RATE_WIDTH),
            pad_left(&max, 6),
            status
        )
    }

    // ========================================================================
    // Color/style helpers
    // ========================================================================

    fn paint(&self, code: &str, text: &str) -> String {
        if self.use_colors {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    fn green(&self, text: &str) -> String {
        self.paint(GREEN, text)
    }

    fn red(&self, text: &str) -> String {
        self.paint(RED, text)
    }

    fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }
}

// ============================================================================
// Plain formatting helpers
// ============================================================================

/// Formats whole yen with thousands separators: `¥12,345`.
pub fn format_yen(amount: Yen) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    out.push('¥');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a per-kilometre rate; zero means distance is free.
pub fn format_rate(rate_per_km: Yen) -> String {
    if rate_per_km == 0 {
        "無料".to_string()
    } else {
        format!("{rate_per_km}円/km")
    }
}

/// Formats a rental length as `10時間30分`.
pub fn format_duration(minutes: i64) -> String {
    format!("{}時間{:02}分", minutes / 60, minutes % 60)
}

/// Terminal column width; CJK and other wide characters take two columns.
fn display_width(text: &str) -> usize {
    text.chars().map(|c| if u32::from(c) < 0x1100 { 1 } else { 2 }).sum()
}

fn pad_right(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(text));
    format!("{text}{}", " ".repeat(fill))
}

fn pad_left(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(text));
    format!("{}{text}", " ".repeat(fill))
}
