//! CLI shell: validate an upload, profile it, print the JSON report, and
//! optionally ask the local model for a data story.

use std::process::ExitCode;

use datastory::config::Config;
use datastory::insights::InsightsGenerator;
use datastory::io::{read_csv, validate_upload};
use datastory::report::analyze;
use datastory::vis::ChartBuilder;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let want_story = args.iter().any(|a| a == "--story");
    let path = match args.iter().find(|a| !a.starts_with("--")) {
        Some(path) => path.clone(),
        None => {
            eprintln!("usage: datastory <file.csv> [--story]");
            return ExitCode::from(2);
        }
    };

    let config = Config::from_env();

    let size = match std::fs::metadata(&path) {
        Ok(meta) => meta.len(),
        Err(e) => {
            eprintln!("cannot read {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = validate_upload(&path, size, &config) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    let table = match read_csv(&path) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("failed to load {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let report = analyze(&table);
    let charts = ChartBuilder::new(&table).all_charts();

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("failed to serialize report: {}", e);
            return ExitCode::FAILURE;
        }
    }
    eprintln!("{} chart specs prepared", charts.len());

    if want_story {
        // Blocking call with a large timeout; failures degrade to inline
        // messages and never discard the report above.
        match InsightsGenerator::new(&config) {
            Ok(generator) => {
                let insights = generator.generate_all(&report);
                println!("\n## Data Story\n{}", insights.data_story);
                println!("\n## Suggested Visualizations\n{}", insights.visualization_suggestions);
                println!("\n## Next Steps\n{}", insights.next_steps);
            }
            Err(e) => eprintln!("{}", e),
        }
    }

    ExitCode::SUCCESS
}
