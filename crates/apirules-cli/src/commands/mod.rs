pub mod check;
pub mod completion;
pub mod model_files;
pub mod rules;

use std::path::Path;

use apirules_core::config::{ApiRulesConfig, ConfigError};

/// Explicit `--config` wins; otherwise `.apirules/apirules.json` under the
/// working directory, falling back to defaults.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<ApiRulesConfig, ConfigError> {
    match explicit {
        Some(path) => ApiRulesConfig::load_file(path),
        None => {
            let dir = std::env::current_dir()
                .map(|cwd| cwd.join(".apirules"))
                .unwrap_or_else(|_| Path::new(".apirules").to_path_buf());
            Ok(ApiRulesConfig::load(&dir))
        }
    }
}
