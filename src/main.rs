use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;
use std::time::Instant;

use fuel_audit::config::{self, AuditConfig};
use fuel_audit::input;
use fuel_audit::metrics::{self, DailyRecord, DriverProfile};
use fuel_audit::output;
use fuel_audit::ranking::{most_efficient, RankingBoard};

const EXIT_SUCCESS: i32 = 0;
const EXIT_IO: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Parser, Debug)]
#[command(name = "fuel-audit")]
#[command(about = "Weekly fuel expense and delivery efficiency auditor", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/fuel-audit/config.yaml)
    #[arg(short, long)]
    config: Option<String>,

    /// Disable colored output even on a terminal
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let cli = Cli::parse();
    let start_time = Instant::now();

    let config_path = cli.config.map(PathBuf::from);
    let config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if cli.verbose {
        eprintln!(
            "Tracking up to {} drivers, weekly distance {} to {} km, currency {}",
            config.max_drivers, config.distance.min_km, config.distance.max_km, config.currency
        );
    }

    let use_colors = !cli.no_color && output::should_use_colors();

    let stdin = std::io::stdin();
    let mut reader = stdin.lock();

    match run_session(&mut reader, &config, use_colors, cli.verbose) {
        Ok(count) => {
            if cli.verbose {
                eprintln!("Audited {} driver(s) in {:?}", count, start_time.elapsed());
            }
            std::process::exit(EXIT_SUCCESS);
        }
        Err(e) => {
            eprintln!("Session error: {}", e);
            std::process::exit(EXIT_IO);
        }
    }
}

/// Run one interactive audit session: collect drivers until the operator
/// stops or the cap is reached, then print the comparison when at least two
/// drivers were reported. Returns the number of drivers audited.
fn run_session<R: BufRead>(
    reader: &mut R,
    config: &AuditConfig,
    use_colors: bool,
    verbose: bool,
) -> anyhow::Result<usize> {
    println!("{}", output::format_header(use_colors));

    let mut board = RankingBoard::new(config.max_drivers);

    loop {
        println!(
            "{}",
            output::format_section_title(
                &format!("DRIVER {} REGISTRATION", board.len() + 1),
                use_colors
            )
        );

        let name = input::prompt_text(reader, "Enter Driver's Full Name", use_colors)?;
        let weekly_budget = input::prompt_bounded(
            reader,
            &format!("Enter Weekly Fuel Budget (in {})", config.currency),
            0.0,
            None,
            use_colors,
        )?;
        let total_distance_km = input::prompt_bounded(
            reader,
            &format!(
                "Enter Total Distance Traveled this week ({} to {} km)",
                config.distance.min_km, config.distance.max_km
            ),
            config.distance.min_km,
            Some(config.distance.max_km),
            use_colors,
        )?;

        println!(
            "{}",
            output::format_section_title(
                &format!("DAILY FUEL TRACKING - {}", name.to_uppercase()),
                use_colors
            )
        );

        let mut fuel_costs = Vec::with_capacity(metrics::DAYS_PER_WEEK);
        for day in 1..=metrics::DAYS_PER_WEEK {
            fuel_costs.push(input::prompt_bounded(
                reader,
                &format!("  Day {} fuel cost ({})", day, config.currency),
                0.0,
                None,
                use_colors,
            )?);
        }
        let mut distances = Vec::with_capacity(metrics::DAYS_PER_WEEK);
        for day in 1..=metrics::DAYS_PER_WEEK {
            distances.push(input::prompt_bounded(
                reader,
                &format!("  Day {} distance (km)", day),
                0.0,
                None,
                use_colors,
            )?);
        }

        let records: Vec<DailyRecord> = fuel_costs
            .iter()
            .zip(distances.iter())
            .map(|(&fuel_cost, &distance_km)| DailyRecord {
                fuel_cost,
                distance_km,
            })
            .collect();

        let profile = DriverProfile {
            name,
            weekly_budget,
            total_distance_km,
        };

        let compute_start = Instant::now();
        let summary = metrics::submit_driver(profile, &records, &config.thresholds)?;
        if verbose {
            eprintln!(
                "Summary for {} computed in {:?}",
                summary.driver.name,
                compute_start.elapsed()
            );
        }

        println!(
            "{}",
            output::format_audit_report(&summary, &config.thresholds, &config.currency, use_colors)
        );

        board.submit(summary.driver.name.clone(), summary.efficiency_ratio)?;

        if board.len() >= config.max_drivers {
            println!("Maximum of {} drivers reached.", config.max_drivers);
            break;
        }
        if !input::prompt_yes_no(reader, "Add another driver? (yes/no)")? {
            break;
        }
    }

    if board.len() > 1 {
        let ranked = board.compute_ranking()?;
        println!(
            "{}",
            output::format_section_title("MULTI-DRIVER EFFICIENCY COMPARISON", use_colors)
        );
        println!(
            "{}",
            output::format_comparison_table(&ranked, &config.thresholds, &config.currency, use_colors)
        );
        let best = most_efficient(&ranked)?;
        println!("{}", output::format_most_efficient(best, &config.currency, use_colors));
        println!();
    }

    println!("{}", output::format_footer(use_colors));
    Ok(board.len())
}
