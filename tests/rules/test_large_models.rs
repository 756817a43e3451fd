// Tests on generated models with many types.

use apirules_core::loader;
use apirules_rules::runner::RuleSet;

use super::common::generators::generate_model;

#[test]
/// Parallel evaluation still reports in declaration order.
fn test_large_model_order_and_counts() {
    let graph = loader::load_str(&generate_model(500)).unwrap();
    let result = RuleSet::default().check(&graph);

    assert_eq!(result.types_checked, 500);
    assert_eq!(result.violations.len(), 500);
    for (i, v) in result.violations.iter().enumerate() {
        assert_eq!(v.type_name, format!("Type{i:05}"));
        assert_eq!(
            v.message,
            "Entries; should be taged as +listType=map and +listKey=name"
        );
    }
}
