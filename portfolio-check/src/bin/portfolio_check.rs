use anyhow::{Context, Result};
use clap::Parser;
use portfolio_check::{run_checks, Check, Outcome, Report, TargetDocument};

/// Validate the portfolio page (index.html) in the current directory
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Only run this check (can be repeated); all checks run by default
    #[arg(long, value_enum)]
    only: Vec<Check>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let checks = if cli.only.is_empty() {
        Check::ALL.to_vec()
    } else {
        cli.only
    };

    let document = TargetDocument::locate();
    let report = run_checks(&document, &checks);

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    } else {
        print_report(&report);
    }

    if !report.passed() {
        std::process::exit(1);
    }

    Ok(())
}

fn print_report(report: &Report) {
    println!("Checking {}", report.document);

    for result in &report.results {
        let verdict = match &result.outcome {
            Outcome::Passed => "PASS".to_string(),
            Outcome::Failed { message } => format!("FAIL: {}", message),
            Outcome::Errored { message } => format!("ERROR: {}", message),
            Outcome::Skipped { reason } => format!("SKIP: {}", reason),
        };
        println!("  {:<12} {}", result.check.name(), verdict);
    }

    if let Some(summary) = &report.summary {
        println!();
        if let Some(title) = &summary.title {
            println!("Title: {}", title);
        }
        if !summary.headings.is_empty() {
            println!("Headings:");
            for (i, heading) in summary.headings.iter().enumerate() {
                println!("  {}. {}", i + 1, heading);
            }
        }
        println!("Keywords found: {}", summary.keywords.join(", "));
        println!("Characters: {}", summary.characters);
    }

    let problems = report
        .results
        .iter()
        .filter(|result| !result.outcome.is_passed())
        .count();
    println!();
    if problems == 0 {
        println!("All {} checks passed", report.results.len());
    } else {
        println!("{} of {} checks did not pass", problems, report.results.len());
    }
}
