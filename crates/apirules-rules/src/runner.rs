use apirules_core::config::ApiRulesConfig;
use apirules_core::graph::TypeGraph;
use apirules_core::types::TypeDecl;
use rayon::prelude::*;

use crate::list_type::ListTypeMissing;
use crate::rule::ApiRule;
use crate::suppress::ExceptionList;
use crate::types::{CheckResult, RuleFailure, RuleInfo, RuleViolation};

/// Every rule apirules ships, in reporting order.
pub fn builtin_rules() -> Vec<Box<dyn ApiRule>> {
    vec![Box::new(ListTypeMissing)]
}

/// Ordered set of rules plus the exceptions applied to their findings.
pub struct RuleSet {
    rules: Vec<Box<dyn ApiRule>>,
    exceptions: ExceptionList,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            rules: builtin_rules(),
            exceptions: ExceptionList::new(),
        }
    }
}

enum Outcome {
    Violation(RuleViolation),
    Failure(RuleFailure),
}

impl RuleSet {
    pub fn empty() -> Self {
        Self {
            rules: Vec::new(),
            exceptions: ExceptionList::new(),
        }
    }

    /// Built-in rules minus the ones the config disables, with the config's
    /// exceptions loaded.
    pub fn from_config(config: &ApiRulesConfig) -> Self {
        let rules = builtin_rules()
            .into_iter()
            .filter(|r| config.rules.is_enabled(r.name()))
            .collect();
        let mut exceptions = ExceptionList::new();
        for key in &config.exceptions {
            exceptions.add_key(key);
        }
        Self { rules, exceptions }
    }

    pub fn register(&mut self, rule: Box<dyn ApiRule>) {
        self.rules.push(rule);
    }

    pub fn exceptions_mut(&mut self) -> &mut ExceptionList {
        &mut self.exceptions
    }

    pub fn rule_names(&self) -> Vec<String> {
        self.rules.iter().map(|r| r.name().to_string()).collect()
    }

    /// Describe every built-in rule and whether this set runs it.
    pub fn describe(&self) -> Vec<RuleInfo> {
        builtin_rules()
            .iter()
            .map(|r| RuleInfo {
                name: r.name().to_string(),
                description: r.description().to_string(),
                enabled: self.rules.iter().any(|own| own.name() == r.name()),
            })
            .collect()
    }

    /// Run every rule against every declared type of the graph.
    ///
    /// Types are evaluated in parallel; results come back in graph order,
    /// then rule order, then member order.
    pub fn check(&self, graph: &TypeGraph) -> CheckResult {
        let declared: Vec<&TypeDecl> = graph.declared().map(|(_, decl)| decl).collect();

        let outcomes: Vec<Vec<Outcome>> = declared
            .par_iter()
            .map(|decl| self.check_type(graph, decl))
            .collect();

        let mut violations = Vec::new();
        let mut failures = Vec::new();
        for outcome in outcomes.into_iter().flatten() {
            match outcome {
                Outcome::Violation(v) => violations.push(self.exceptions.apply(v)),
                Outcome::Failure(f) => failures.push(f),
            }
        }

        let status = CheckResult::status_for(&violations, &failures);

        CheckResult {
            version: env!("CARGO_PKG_VERSION").to_string(),
            command: "check".to_string(),
            status: status.to_string(),
            types_checked: declared.len(),
            rules: self.rule_names(),
            violations,
            failures,
        }
    }

    fn check_type(&self, graph: &TypeGraph, decl: &TypeDecl) -> Vec<Outcome> {
        let package = decl.package();
        let type_name = decl.display_name();
        let mut outcomes = Vec::new();

        for rule in &self.rules {
            match rule.validate(graph, decl) {
                Ok(found) => outcomes.extend(found.into_iter().map(|message| {
                    Outcome::Violation(RuleViolation::new(rule.name(), package, type_name, message))
                })),
                // Partial findings are dropped: the type's result is indeterminate.
                Err(e) => outcomes.push(Outcome::Failure(RuleFailure {
                    rule: rule.name().to_string(),
                    package: package.to_string(),
                    type_name: type_name.to_string(),
                    error: e.to_string(),
                })),
            }
        }

        outcomes
    }
}
