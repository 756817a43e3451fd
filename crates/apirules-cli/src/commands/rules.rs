use std::path::PathBuf;

use apirules_output::OutputFormatter;
use apirules_rules::runner::RuleSet;
use apirules_rules::types::RulesResult;

use super::load_config;

/// Run `apirules rules` -- list built-in rules and whether the config enables them.
pub fn run(formatter: &dyn OutputFormatter, config: Option<PathBuf>) -> i32 {
    let config = match load_config(config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("apirules rules: {}", e);
            return 2;
        }
    };

    let result = RulesResult {
        version: env!("CARGO_PKG_VERSION").to_string(),
        command: "rules".to_string(),
        rules: RuleSet::from_config(&config).describe(),
    };
    let output = formatter.format_rules(&result);
    if !output.is_empty() {
        println!("{}", output.trim_end());
    }
    0
}
