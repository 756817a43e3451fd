use std::collections::HashSet;
use std::path::Path;

use crate::types::{RuleViolation, REPORT_PREFIX};

/// Known exceptions: violations that have been accepted and no longer fail a check.
///
/// A violation is suppressed when its report key is listed, or when its whole
/// rule is suppressed. Suppressed violations stay in the result, marked
/// `suppressed = true`.
#[derive(Debug, Default, Clone)]
pub struct ExceptionList {
    keys: HashSet<String>,
    rules: HashSet<String>,
}

impl ExceptionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept one `rule,package,type,field` key. Surrounding whitespace and an
    /// `API rule violation: ` prefix are ignored, as is a trailing `; hint`.
    pub fn add_key(&mut self, key: &str) {
        if let Some(key) = normalize_key(key) {
            self.keys.insert(key);
        }
    }

    /// Accept every violation of a rule.
    pub fn suppress_rule(&mut self, rule: &str) {
        self.rules.insert(rule.to_string());
    }

    /// Read a report file (one violation per line, as written by `--report`).
    /// Blank lines and `#` comments are skipped. Returns the number of keys added.
    pub fn load_report(&mut self, path: &Path) -> std::io::Result<usize> {
        let content = std::fs::read_to_string(path)?;
        let before = self.keys.len();
        for line in content.lines() {
            self.add_key(line);
        }
        Ok(self.keys.len() - before)
    }

    pub fn is_known(&self, violation: &RuleViolation) -> bool {
        self.rules.contains(&violation.rule) || self.keys.contains(&violation.report_key())
    }

    /// Mark the violation suppressed if it is a known exception.
    pub fn apply(&self, mut violation: RuleViolation) -> RuleViolation {
        if self.is_known(&violation) {
            violation.suppressed = true;
        }
        violation
    }
}

fn normalize_key(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let key = line.strip_prefix(REPORT_PREFIX).unwrap_or(line);
    let key = key.split_once(';').map(|(k, _)| k).unwrap_or(key).trim();
    if key.is_empty() {
        None
    } else {
        Some(key.to_string())
    }
}
