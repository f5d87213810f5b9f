use std::io::IsTerminal;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use evtwire_session::{Outcome, SessionReport};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct ReportOutput<'a> {
    role: &'a str,
    records: u64,
    outcome: Outcome,
    endpoint: &'a str,
    timestamp: String,
}

pub fn print_report(role: &str, endpoint: &str, report: &SessionReport, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = ReportOutput {
                role,
                records: report.records,
                outcome: report.outcome,
                endpoint,
                timestamp: now_unix_seconds(),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["ROLE", "RECORDS", "OUTCOME", "ENDPOINT"])
                .add_row(vec![
                    role.to_string(),
                    report.records.to_string(),
                    outcome_label(&report.outcome),
                    endpoint.to_string(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "role={} records={} outcome={} endpoint={}",
                role,
                report.records,
                outcome_label(&report.outcome),
                endpoint
            );
        }
    }
}

fn outcome_label(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Clean => "clean".to_string(),
        Outcome::Truncated { declared } => format!("truncated (declared {declared} bytes)"),
        Outcome::InvalidLength { length } => format!("invalid-length ({length})"),
    }
}

fn now_unix_seconds() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "0".to_string())
}
