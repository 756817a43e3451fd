use apirules_rules::types::{RuleFailure, RuleViolation, REPORT_PREFIX};

/// One report line: `API rule violation: rule,package,type,field[; hint]`.
pub(crate) fn format_violation_human(v: &RuleViolation) -> String {
    let mut out = format!("{}{}", REPORT_PREFIX, v.report_key());
    if let Some(hint) = v.hint() {
        out.push_str(&format!("; {}", hint));
    }
    if v.suppressed {
        out.push_str(" (known exception)");
    }
    out.push('\n');
    out
}

pub(crate) fn format_failure_human(f: &RuleFailure) -> String {
    let location = if f.package.is_empty() {
        f.type_name.clone()
    } else {
        format!("{}.{}", f.package, f.type_name)
    };
    format!(
        "error[{}]: could not check {}\n   = {}\n",
        f.rule, location, f.error
    )
}
