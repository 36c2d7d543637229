use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::metrics::{DailyLabel, EfficiencyRating, RatingThresholds, WeeklySummary};
use crate::ranking::RankEntry;

const BANNER_WIDTH: usize = 60;
const COMPARISON_WIDTH: usize = 70;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Program banner shown once at startup
pub fn format_header(use_colors: bool) -> String {
    let rule = "═".repeat(BANNER_WIDTH);
    let title = "      CODAC LOGISTICS DELIVERY & FUEL AUDITOR";
    if use_colors {
        format!("{}\n{}\n{}\n", rule.cyan(), title.cyan(), rule.cyan())
    } else {
        format!("{}\n{}\n{}\n", rule, title, rule)
    }
}

/// Closing banner
pub fn format_footer(use_colors: bool) -> String {
    let rule = "═".repeat(BANNER_WIDTH);
    let thanks = "         Thank you for using the Fuel Auditor!";
    if use_colors {
        format!("{}\n{}\n{}\n", rule, thanks.cyan(), rule)
    } else {
        format!("{}\n{}\n{}\n", rule, thanks, rule)
    }
}

/// Boxed section title, e.g. "DRIVER 1 REGISTRATION"
pub fn format_section_title(title: &str, use_colors: bool) -> String {
    let inner = BANNER_WIDTH - 2;
    let boxed = format!(
        "┌{rule}┐\n│ {title:<width$} │\n└{rule}┘",
        rule = "─".repeat(inner),
        title = title,
        width = inner - 2,
    );
    if use_colors {
        format!("\n{}\n", boxed.yellow())
    } else {
        format!("\n{}\n", boxed)
    }
}

/// Sub-section marker inside the report
fn format_sub_section(title: &str, use_colors: bool) -> String {
    if use_colors {
        format!("{} {}", "▶".green(), title.green())
    } else {
        format!("▶ {}", title)
    }
}

/// Visual bar for the daily breakdown table, one width per label
fn visual_bar(label: DailyLabel) -> &'static str {
    match label {
        DailyLabel::High => "█████",
        DailyLabel::Good => "███  ",
        DailyLabel::Low => "█    ",
        DailyLabel::NoData => "   - ",
    }
}

/// Trend symbol for the weekly chart
fn trend_symbol(label: DailyLabel) -> &'static str {
    match label {
        DailyLabel::High => "▲",
        DailyLabel::Good => "●",
        DailyLabel::Low => "▼",
        DailyLabel::NoData => "-",
    }
}

fn rating_colored(rating: EfficiencyRating, text: &str, use_colors: bool) -> String {
    if !use_colors {
        return text.to_string();
    }
    match rating {
        EfficiencyRating::High => text.green().to_string(),
        EfficiencyRating::Standard => text.yellow().to_string(),
        EfficiencyRating::Low => text.red().to_string(),
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a driver name to fit a column, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Render the full audit report for one driver: info block, daily breakdown
/// table, performance summary and the weekly trend chart.
pub fn format_audit_report(
    summary: &WeeklySummary,
    thresholds: &RatingThresholds,
    currency: &str,
    use_colors: bool,
) -> String {
    let mut out = String::new();

    out.push_str(&format_section_title("AUDIT REPORT SUMMARY", use_colors));
    out.push('\n');

    out.push_str(&format!("Driver: {}\n", summary.driver.name));
    out.push_str(&format!(
        "Budget: {} {:.2}\n",
        currency, summary.driver.weekly_budget
    ));
    out.push_str(&format!(
        "Total Distance: {:.1} km\n",
        summary.driver.total_distance_km
    ));
    out.push_str(&format!(
        "Generated: {}\n\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    ));

    // Daily breakdown table
    out.push_str(&format_sub_section("Daily Expense Breakdown", use_colors));
    out.push('\n');
    let rule = "─".repeat(65);
    out.push_str(&rule);
    out.push('\n');
    out.push_str("│ Day │  Fuel Cost  │  Distance  │ Efficiency │ Visual │\n");
    out.push_str(&rule);
    out.push('\n');
    for day in &summary.days {
        out.push_str(&format!(
            "│ {:>3} │ {} {:>7.2} │ {:>7.1} km │ {:<10} │ {:<6} │\n",
            day.day,
            currency,
            day.fuel_cost,
            day.distance_km,
            day.label.to_string(),
            visual_bar(day.label),
        ));
    }
    out.push_str(&rule);
    out.push_str("\n\n");

    // Performance summary
    out.push_str(&format_sub_section("Performance Summary", use_colors));
    out.push('\n');
    out.push_str(&format!(
        "Total Fuel Spent:     {} {:>10.2}\n",
        currency, summary.total_fuel_spent
    ));
    out.push_str(&format!(
        "Average Daily:        {} {:>10.2}\n",
        currency, summary.average_daily_expense
    ));
    out.push_str(&format!(
        "Efficiency Ratio:     {:>10.1} km/{}\n",
        summary.efficiency_ratio, currency
    ));
    out.push_str(&format!(
        "Efficiency Rating:    {}\n",
        rating_colored(summary.rating, &summary.rating.to_string(), use_colors)
    ));
    let status = if summary.under_budget {
        "UNDER BUDGET"
    } else {
        "OVER BUDGET"
    };
    let status = if !use_colors {
        status.to_string()
    } else if summary.under_budget {
        status.green().to_string()
    } else {
        status.red().to_string()
    };
    out.push_str(&format!("Budget Status:        {}\n\n", status));

    // Trend chart
    out.push_str(&format_sub_section("Weekly Efficiency Trend", use_colors));
    out.push('\n');
    out.push_str("Day:    ");
    out.push_str(
        &(1..=summary.days.len())
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join("   "),
    );
    out.push('\n');
    out.push_str("Trend:  ");
    for day in &summary.days {
        out.push_str(&format!("{}   ", trend_symbol(day.label)));
    }
    out.push('\n');
    out.push_str(&format_legend(thresholds));
    out.push('\n');

    out
}

/// Rating legend line, built from the configured boundaries
pub fn format_legend(thresholds: &RatingThresholds) -> String {
    format!(
        "Legend: ▲ High (>{high}) ● Good ({standard}-{high}) ▼ Low (<{standard}) - No data",
        high = thresholds.high,
        standard = thresholds.standard,
    )
}

/// Render the multi-driver comparison: rank, name, ratio and rating per row.
/// Driver names are truncated to keep rows inside the terminal width.
pub fn format_comparison_table(
    ranked: &[RankEntry],
    thresholds: &RatingThresholds,
    currency: &str,
    use_colors: bool,
) -> String {
    if ranked.is_empty() {
        return "No drivers to compare.".to_string();
    }

    let name_width = match get_terminal_width() {
        // Fixed columns take ~48 chars; give the rest to the name
        Some(w) if w > 54 => (w - 48).min(22),
        Some(_) => 12,
        None => 22,
    };

    let mut out = String::new();
    let rule = "═".repeat(COMPARISON_WIDTH);
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        " Rank │ {:<width$} │ Efficiency (km/{}) │ Rating\n",
        "Driver Name",
        currency,
        width = name_width,
    ));
    out.push_str(&rule);
    out.push('\n');

    for (i, entry) in ranked.iter().enumerate() {
        let rating = crate::metrics::classify_rating(entry.ratio, thresholds);
        let row = format!(
            " {:>4} │ {:<width$} │ {:>18.1} │ {}",
            i + 1,
            truncate_name(&entry.name, name_width),
            entry.ratio,
            rating.short(),
            width = name_width,
        );
        out.push_str(&rating_colored(rating, &row, use_colors));
        out.push('\n');
    }

    out.push_str(&rule);
    out.push('\n');
    out
}

/// The winner line printed under the comparison table
pub fn format_most_efficient(entry: &RankEntry, currency: &str, use_colors: bool) -> String {
    let line = format!(
        "🏆 Most Efficient: {} ({:.1} km/{})",
        entry.name, entry.ratio, currency
    );
    if use_colors {
        line.green().to_string()
    } else {
        line
    }
}
