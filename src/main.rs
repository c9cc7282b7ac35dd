//! tzwindow - DST-safe UTC query windows for local calendar days

use clap::{Parser, Subcommand};
use colored::Colorize;
use tzwindow::format::{
    format_clock_csv, format_clock_json, format_clock_table, format_window_csv,
    format_window_json, format_window_table, print_banner,
};
use tzwindow::types::{ClockReport, OutputFormat, WindowReport};
use tzwindow::{day_range_utc, format_utc, local_today, now_true, offset_at, parse_zone};

#[derive(Parser)]
#[command(name = "tzwindow")]
#[command(author, version, about = "DST-safe UTC query windows for local calendar days")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// IANA timezone identifier (e.g., America/New_York)
    #[arg(short, long, global = true, default_value = "UTC")]
    zone: String,

    /// Calendar day in the zone, YYYY-MM-DD (defaults to today)
    #[arg(short, long, global = true)]
    date: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "table")]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current true instant, shifted instant, and offset for a zone
    Now,
    /// List IANA timezone identifiers, optionally filtered
    Zones {
        /// Case-insensitive substring filter (e.g., "auckland")
        filter: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Now) => run_now(&cli),
        Some(Commands::Zones { ref filter }) => run_zones(filter.as_deref()),
        None => run_window(&cli),
    }
}

fn run_window(cli: &Cli) -> anyhow::Result<()> {
    // Only show banner for table format
    if matches!(cli.format, OutputFormat::Table) {
        print_banner();
    }

    let zone = parse_zone(&cli.zone)?;
    let window = day_range_utc(zone, cli.date.as_deref())?;

    let date = match cli.date {
        Some(ref d) => d.clone(),
        None => local_today(zone).to_string(),
    };

    let report = WindowReport {
        zone: cli.zone.clone(),
        date,
        span_secs: window.end.secs() - window.start.secs(),
        window,
    };

    let output = match cli.format {
        OutputFormat::Table => format_window_table(&report),
        OutputFormat::Json => format_window_json(&report),
        OutputFormat::Csv => format_window_csv(&report),
    };

    println!("{}", output);

    Ok(())
}

fn run_now(cli: &Cli) -> anyhow::Result<()> {
    if matches!(cli.format, OutputFormat::Table) {
        print_banner();
    }

    let zone = parse_zone(&cli.zone)?;
    let now = now_true();
    let offset = offset_at(now, zone);
    let shifted = now.shift(offset);

    let report = ClockReport {
        zone: cli.zone.clone(),
        true_secs: now.secs(),
        shifted_secs: shifted.secs(),
        offset_secs: offset,
        true_iso: format_utc(now)?,
    };

    let output = match cli.format {
        OutputFormat::Table => format_clock_table(&report),
        OutputFormat::Json => format_clock_json(&report),
        OutputFormat::Csv => format_clock_csv(&report),
    };

    println!("{}", output);

    if matches!(cli.format, OutputFormat::Table) {
        println!(
            "{}",
            "  The shifted value is display-biased, not a point in time.".dimmed()
        );
        println!();
    }

    Ok(())
}

fn run_zones(filter: Option<&str>) -> anyhow::Result<()> {
    print_banner();

    let needle = filter.map(|f| f.to_lowercase());
    let mut count = 0;

    for tz in chrono_tz::TZ_VARIANTS.iter() {
        let name = tz.name();
        if let Some(ref n) = needle {
            if !name.to_lowercase().contains(n.as_str()) {
                continue;
            }
        }
        println!("  {} {}", "•".cyan(), name);
        count += 1;
    }

    println!("\n{} zones matched\n", count.to_string().bold());

    Ok(())
}
