use std::collections::BTreeMap;
use waterhole_scanner::{ErrorKind, ProbeReport};

fn status_label(status_code: u16) -> String {
    match status_code {
        100..=199 => format!("[{}] Informational", status_code),
        200..=299 => format!("[{}] Success", status_code),
        300..=399 => format!("[{}] Redirect", status_code),
        400..=499 => format!("[{}] Client Error", status_code),
        500..=599 => format!("[{}] Server Error", status_code),
        _ => format!("[{}]", status_code),
    }
}

/// Summarise a finished run: counts per status code and per error kind
pub fn generate_probe_summary(report: &ProbeReport) -> String {
    let mut by_status: BTreeMap<u16, usize> = BTreeMap::new();
    for row in &report.results {
        *by_status.entry(row.http_response).or_default() += 1;
    }

    let mut by_kind: BTreeMap<ErrorKind, usize> = BTreeMap::new();
    for row in &report.errors {
        *by_kind.entry(row.error_type).or_default() += 1;
    }

    let mut summary = String::new();

    summary.push_str("\n═══════════════════════════════════════════════════════════════════════════════\n");
    summary.push_str("                            PROBE SUMMARY\n");
    summary.push_str("═══════════════════════════════════════════════════════════════════════════════\n\n");

    summary.push_str(&format!("Targets probed: {}\n", report.total()));
    if report.is_empty() {
        summary.push_str("Nothing was probed.\n\n");
        summary.push_str("═══════════════════════════════════════════════════════════════════════════════\n");
        return summary;
    }

    summary.push_str(&format!("Responses: {}\n", report.results.len()));
    summary.push_str(&format!("Errors: {}\n\n", report.errors.len()));

    if !by_status.is_empty() {
        summary.push_str("Responses by status\n");
        summary.push_str("───────────────────────────────────────────────────────────────────────────────\n");
        for (status_code, count) in &by_status {
            summary.push_str(&format!("  {}: {}\n", status_label(*status_code), count));
        }
        summary.push('\n');
    }

    if !by_kind.is_empty() {
        summary.push_str("Errors by type\n");
        summary.push_str("───────────────────────────────────────────────────────────────────────────────\n");
        for (kind, count) in &by_kind {
            summary.push_str(&format!("  {}: {}\n", kind, count));
        }
        summary.push('\n');
    }

    summary.push_str("═══════════════════════════════════════════════════════════════════════════════\n");

    summary
}
