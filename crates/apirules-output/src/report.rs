use apirules_rules::types::{CheckResult, REPORT_PREFIX};

/// Render every violation, suppressed or not, as sorted report lines.
///
/// The output can be fed back as a known-exceptions file, so lines carry
/// only the report key and never the hint.
pub fn render_report(result: &CheckResult) -> String {
    let mut lines: Vec<String> = result
        .violations
        .iter()
        .map(|v| format!("{}{}", REPORT_PREFIX, v.report_key()))
        .collect();
    lines.sort();
    lines.dedup();

    let mut out = lines.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}
