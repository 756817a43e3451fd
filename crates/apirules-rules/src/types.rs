use serde::{Deserialize, Serialize};

/// Prefix of one line in a violation report or known-exceptions file.
pub const REPORT_PREFIX: &str = "API rule violation: ";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub version: String,
    pub command: String,
    pub status: String, // "ok" | "violations" | "error"
    pub types_checked: usize,
    pub rules: Vec<String>,
    pub violations: Vec<RuleViolation>,
    pub failures: Vec<RuleFailure>,
}

impl CheckResult {
    /// Status string for a set of findings: failures win over violations.
    pub fn status_for(violations: &[RuleViolation], failures: &[RuleFailure]) -> &'static str {
        if !failures.is_empty() {
            "error"
        } else if violations.iter().any(|v| !v.suppressed) {
            "violations"
        } else {
            "ok"
        }
    }

    /// Fold another model's result into this one.
    pub fn absorb(&mut self, other: CheckResult) {
        self.types_checked += other.types_checked;
        for rule in other.rules {
            if !self.rules.contains(&rule) {
                self.rules.push(rule);
            }
        }
        self.violations.extend(other.violations);
        self.failures.extend(other.failures);
        self.status = Self::status_for(&self.violations, &self.failures).to_string();
    }

    /// Violations that are not covered by a known exception.
    pub fn active_violations(&self) -> impl Iterator<Item = &RuleViolation> {
        self.violations.iter().filter(|v| !v.suppressed)
    }

    pub fn suppressed_count(&self) -> usize {
        self.violations.iter().filter(|v| v.suppressed).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleViolation {
    pub rule: String,
    pub package: String,
    pub type_name: String,
    /// Offending member name.
    pub field: String,
    /// Full text produced by the rule: the field, optionally followed by `; <hint>`.
    pub message: String,
    pub suppressed: bool,
}

impl RuleViolation {
    pub fn new(rule: &str, package: &str, type_name: &str, message: String) -> Self {
        let field = message
            .split_once(';')
            .map(|(field, _)| field)
            .unwrap_or(&message)
            .trim()
            .to_string();
        Self {
            rule: rule.to_string(),
            package: package.to_string(),
            type_name: type_name.to_string(),
            field,
            message,
            suppressed: false,
        }
    }

    /// `rule,package,type,field`, the identity used by exception lists.
    pub fn report_key(&self) -> String {
        format!(
            "{},{},{},{}",
            self.rule, self.package, self.type_name, self.field
        )
    }

    /// Remediation hint after the field name, if the rule gave one.
    pub fn hint(&self) -> Option<&str> {
        self.message
            .split_once(';')
            .map(|(_, hint)| hint.trim())
            .filter(|h| !h.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleFailure {
    pub rule: String,
    pub package: String,
    pub type_name: String,
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesResult {
    pub version: String,
    pub command: String,
    pub rules: Vec<RuleInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleInfo {
    pub name: String,
    pub description: String,
    pub enabled: bool,
}
