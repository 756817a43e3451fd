use apirules_core::graph::TypeGraph;
use apirules_core::types::{GraphError, TypeDecl};

/// Contract every API rule implements.
///
/// `validate` returns one entry per offending member, in member declaration
/// order. A violation is a normal outcome; `Err` means the rule could not
/// finish analysing `root` and whatever it found so far must not be trusted.
pub trait ApiRule: Send + Sync {
    /// Stable snake_case identifier used in reports and config.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn validate(&self, graph: &TypeGraph, root: &TypeDecl) -> Result<Vec<String>, RuleError>;
}

/// Reasons a rule could not evaluate its input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("member `{member}`: {source}")]
    Graph {
        member: String,
        #[source]
        source: GraphError,
    },
}
