use crate::args::OutputFormat;

use tdf::report::QueryReport;
use tdf::Result;

use std::fmt::{Display, Write};

pub fn write_report(report: &QueryReport, format: OutputFormat) -> Result<String> {
    return match format {
        OutputFormat::Text => write_text(report),
        OutputFormat::Json => write_json(report),
    };
}

fn write_json(report: &QueryReport) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');

    return Ok(json);
}

fn write_text(report: &QueryReport) -> Result<String> {
    let mut out = String::new();

    writeln!(out, "Total amount: {}", report.total_amount)?;

    if let Some(sent_by) = &report.sent_by {
        writeln!(out, "Total amount sent by {:?}: {}", sent_by.sender, sent_by.total)?;
    }

    writeln!(out, "Max amount: {}", or_none(report.max_amount.as_ref()))?;
    writeln!(out, "Unique clients: {}", report.unique_client_count)?;

    if let Some(client_issues) = &report.client_issues {
        writeln!(
            out,
            "Open compliance issues for {:?}: {}",
            client_issues.client, client_issues.has_open_issue
        )?;
    }

    writeln!(out, "Transactions by beneficiary:")?;
    if report.transactions_by_beneficiary.is_empty() {
        writeln!(out, "  none")?;
    }
    for (beneficiary, transactions) in report.transactions_by_beneficiary.iter() {
        writeln!(out, "  {beneficiary}:")?;
        for tx in transactions {
            writeln!(out, "    {tx}")?;
        }
    }

    let unsolved_issue_ids = report
        .unsolved_issue_ids
        .iter()
        .map(|issue_id| issue_id.to_string())
        .collect::<Vec<_>>();
    if unsolved_issue_ids.is_empty() {
        writeln!(out, "Unsolved issue ids: none")?;
    } else {
        writeln!(out, "Unsolved issue ids: {}", unsolved_issue_ids.join(", "))?;
    }

    let solved_issue_messages = report
        .solved_issue_messages
        .iter()
        .map(|message| message.as_deref().unwrap_or("(no message)"))
        .collect::<Vec<_>>();
    write_section(&mut out, "Solved issue messages:", &solved_issue_messages)?;
    write_section(&mut out, "Top 3 transactions by amount:", &report.top3_by_amount)?;

    writeln!(out, "Top sender: {}", or_none(report.top_sender.as_ref()))?;

    return Ok(out);
}

fn write_section<T: Display>(out: &mut String, title: &str, lines: &[T]) -> Result {
    writeln!(out, "{title}")?;

    if lines.is_empty() {
        writeln!(out, "  none")?;
    }

    for line in lines {
        writeln!(out, "  {line}")?;
    }

    return Ok(());
}

fn or_none<T: Display>(value: Option<&T>) -> String {
    return value
        .map(|value| value.to_string())
        .unwrap_or_else(|| "none".to_string());
}
