use std::path::PathBuf;

use apirules_core::loader;
use apirules_output::report::render_report;
use apirules_output::OutputFormatter;
use apirules_rules::runner::RuleSet;
use apirules_rules::types::CheckResult;

use super::{load_config, model_files};

pub struct CheckArgs {
    pub paths: Vec<PathBuf>,
    pub config: Option<PathBuf>,
    pub suppress: Vec<String>,
    pub exceptions: Option<PathBuf>,
    pub report: Option<PathBuf>,
}

/// Run `apirules check <paths>` -- validate every declared type in the models.
///
/// Exit codes: 0 clean (known exceptions allowed), 1 violations, 2 the check
/// itself could not complete.
pub fn run(formatter: &dyn OutputFormatter, verbose: bool, args: CheckArgs) -> i32 {
    let config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("apirules check: {}", e);
            return 2;
        }
    };

    let mut rules = RuleSet::from_config(&config);
    for rule in &args.suppress {
        rules.exceptions_mut().suppress_rule(rule);
    }
    if let Some(path) = &args.exceptions {
        match rules.exceptions_mut().load_report(path) {
            Ok(n) => {
                if verbose {
                    eprintln!(
                        "apirules check: loaded {} known exception(s) from {}",
                        n,
                        path.display()
                    );
                }
            }
            Err(e) => {
                eprintln!(
                    "apirules check: failed to read exceptions {}: {}",
                    path.display(),
                    e
                );
                return 2;
            }
        }
    }

    let files = match model_files::collect(&args.paths) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("apirules check: {}", e);
            return 2;
        }
    };
    if files.is_empty() {
        eprintln!("apirules check: no model files found");
        return 2;
    }

    let mut total = CheckResult {
        version: env!("CARGO_PKG_VERSION").to_string(),
        command: "check".to_string(),
        status: "ok".to_string(),
        types_checked: 0,
        rules: rules.rule_names(),
        violations: Vec::new(),
        failures: Vec::new(),
    };

    for file in &files {
        let graph = match loader::load_file(file) {
            Ok(g) => g,
            Err(e) => {
                eprintln!("apirules check: {}: {}", file.display(), e);
                return 2;
            }
        };
        let result = rules.check(&graph);
        if verbose {
            eprintln!(
                "apirules check: {}: {} type(s), {} violation(s), {} failure(s)",
                file.display(),
                result.types_checked,
                result.violations.len(),
                result.failures.len()
            );
        }
        total.absorb(result);
    }

    if let Some(path) = &args.report {
        if let Err(e) = std::fs::write(path, render_report(&total)) {
            eprintln!(
                "apirules check: failed to write report {}: {}",
                path.display(),
                e
            );
            return 2;
        }
    }

    let output = formatter.format_check(&total);
    if !output.is_empty() {
        println!("{}", output.trim_end());
    }

    exit_code(&total)
}

fn exit_code(result: &CheckResult) -> i32 {
    if !result.failures.is_empty() {
        2
    } else if result.active_violations().next().is_some() {
        1
    } else {
        0
    }
}
