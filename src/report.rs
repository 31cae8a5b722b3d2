/*!
 * Reporting functionality for vcfilters
 *
 * Provides functionality for generating formatted summaries of a conversion
 * using the tabled library for clean, consistent table rendering.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

/// Statistics for one project conversion
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// Output file path
    pub output_file: String,
    /// Time taken to scan and write
    pub duration: Duration,
    /// Number of distinct filters generated
    pub filter_count: usize,
    /// Total number of file entries written
    pub total_entries: usize,
    /// Entries per item-group tag, in emission order
    pub group_counts: Vec<(String, usize)>,
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
    // Other formats could be added in the future
    // JSON, HTML, etc.
}

/// Report generator for conversion results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Generate a report string based on conversion statistics
    pub fn generate_report(&self, report: &ConversionReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
            // Additional formats could be added here
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &ConversionReport) {
        println!("\n{}", self.generate_report(report));
    }

    // Create a summary table using the tabled crate
    fn create_summary_table(&self, report: &ConversionReport) -> String {
        // Define the summary table data structure
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let rows = vec![
            SummaryRow {
                key: "📂 Output File".to_string(),
                value: report.output_file.clone(),
            },
            SummaryRow {
                key: "⏱️ Process Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "🗂️ Filters".to_string(),
                value: report.filter_count.to_string(),
            },
            SummaryRow {
                key: "📄 File Entries".to_string(),
                value: report.total_entries.to_string(),
            },
        ];

        // Create and style the table
        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Create an item-groups table using the tabled crate
    fn create_groups_table(&self, report: &ConversionReport) -> String {
        // Define the groups table data structure
        #[derive(Tabled)]
        struct GroupRow {
            #[tabled(rename = "Item Type")]
            kind: String,

            #[tabled(rename = "Files")]
            files: String,
        }

        let rows: Vec<GroupRow> = report
            .group_counts
            .iter()
            .map(|(kind, count)| GroupRow {
                kind: kind.clone(),
                files: count.to_string(),
            })
            .collect();

        // Create and style the table
        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Generate a console table report
    fn generate_console_report(&self, report: &ConversionReport) -> String {
        let groups_table = self.create_groups_table(report);
        let summary_table = self.create_summary_table(report);

        format!(
            "{}\n{}\n\n{}\n{}",
            "📋  ITEM GROUPS", groups_table, "✅  CONVERSION COMPLETE", summary_table
        )
    }
}
