//! Human-readable console output for command reports

use std::fmt::Write as _;

use tablectl_core::record::display_value;
use tablectl_core::{DropReport, FetchOutcome, InspectReport, Record};

pub fn table_list(tables: &[String]) -> String {
    let mut out = String::new();
    for name in tables {
        let _ = writeln!(out, "{}", name);
    }
    let _ = writeln!(out, "{} table(s)", tables.len());
    out
}

pub fn inspect_report(report: &InspectReport) -> String {
    let mut out = String::new();

    if !report.exists {
        let _ = writeln!(out, "Table {} exists: false", report.table);
        return out;
    }
    let _ = writeln!(out, "Table {} exists: true", report.table);

    let _ = writeln!(out, "\nColumns ({}):", report.columns.len());
    let name_width = report.columns.iter().map(|c| c.name.len()).max().unwrap_or(0);
    let type_width = report
        .columns
        .iter()
        .map(|c| c.data_type.len())
        .max()
        .unwrap_or(0);
    for col in &report.columns {
        let nullability = if col.is_nullable { "NULL" } else { "NOT NULL" };
        let _ = write!(
            out,
            "  {:>3}. {:<name_width$}  {:<type_width$}  {:<8}",
            col.ordinal_position, col.name, col.data_type, nullability
        );
        if let Some(default) = &col.default {
            let _ = write!(out, "  default {}", default);
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "\nRows ({}):", report.row_count);
    for row in &report.rows {
        let _ = writeln!(out, "  {}", inline_record(row));
    }
    if report.is_truncated() {
        let _ = writeln!(
            out,
            "  ... {} more row(s) not shown",
            report.row_count - report.rows.len() as i64
        );
    }

    out
}

pub fn drop_report(report: &DropReport) -> String {
    if !report.absent_after {
        format!("WARNING: table {} still exists after DROP\n", report.table)
    } else if report.existed_before {
        format!("Table {} dropped\n", report.table)
    } else {
        format!("Table {} does not exist\n", report.table)
    }
}

pub fn fetch_outcome(outcome: &FetchOutcome, lookup: &str) -> String {
    match outcome {
        FetchOutcome::Found(record) => {
            let width = record.keys().map(String::len).max().unwrap_or(0);
            let mut out = String::new();
            for (column, value) in record {
                let _ = writeln!(out, "{:<width$}  {}", column, display_value(value));
            }
            out
        }
        FetchOutcome::NotFound => format!("Not found: {}\n", lookup),
    }
}

fn inline_record(record: &Record) -> String {
    record
        .iter()
        .map(|(column, value)| format!("{}={}", column, display_value(value)))
        .collect::<Vec<_>>()
        .join(", ")
}
