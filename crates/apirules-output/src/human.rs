use crate::human_helpers::{format_failure_human, format_violation_human};
use crate::OutputFormatter;
use apirules_rules::types::{CheckResult, RulesResult};

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_check(&self, result: &CheckResult) -> String {
        if result.violations.is_empty() && result.failures.is_empty() {
            return String::new(); // Clean check = empty stdout
        }

        let mut out = String::new();

        for v in &result.violations {
            out.push_str(&format_violation_human(v));
        }
        for f in &result.failures {
            out.push_str(&format_failure_human(f));
        }

        let suppressed = result.suppressed_count();
        out.push_str(&format!(
            "\n{} violation(s), {} known exception(s) in {} type(s)\n",
            result.violations.len() - suppressed,
            suppressed,
            result.types_checked,
        ));
        if !result.failures.is_empty() {
            out.push_str(&format!(
                "{} type(s) could not be checked\n",
                result.failures.len()
            ));
        }

        out
    }

    fn format_rules(&self, result: &RulesResult) -> String {
        let mut out = String::new();
        for rule in &result.rules {
            let state = if rule.enabled { "" } else { " (disabled)" };
            out.push_str(&format!(
                "{}{}\n  {}\n",
                rule.name, state, rule.description
            ));
        }
        out
    }
}
