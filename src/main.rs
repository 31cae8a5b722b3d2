/*!
 * Command-line interface for vcfilters
 */

use std::io;
use std::process;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use vcfilters::config::{Args, Config};
use vcfilters::error::Result;
use vcfilters::report::{ConversionReport, ReportFormat, Reporter};
use vcfilters::scanner::Scanner;
use vcfilters::writer::FiltersWriter;

fn main() {
    // Parse command line arguments; any usage error exits with status 1
    let args = Args::try_parse().unwrap_or_else(|e| {
        let code = if e.use_stderr() { 1 } else { 0 };
        let _ = e.print();
        process::exit(code);
    });

    // Generate shell completions
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut io::stdout());
        return;
    }

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    // Create configuration
    let config = Config::from_args(args)?;

    // Validate configuration
    config.validate()?;

    // Create scanner and writer
    let scanner = Scanner::new(config.clone());
    let writer = FiltersWriter::new(config.clone());

    // Time both the scan and the write
    let start_time = Instant::now();

    // Scan project file
    let items = scanner.scan()?;

    // Write .filters output
    writer.write(&items)?;

    let duration = start_time.elapsed();

    // Prepare the conversion report
    let report = ConversionReport {
        output_file: config.output_file.display().to_string(),
        duration,
        filter_count: items.filter_count(),
        total_entries: items.entry_count(),
        group_counts: items
            .groups()
            .map(|(kind, entries)| (kind.to_string(), entries.len()))
            .collect(),
    };

    // Create a reporter and print the report
    let reporter = Reporter::new(ReportFormat::ConsoleTable);
    reporter.print_report(&report);

    Ok(())
}
