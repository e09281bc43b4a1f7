pub(crate) use super::*;
use crate::data::{Record, Schema};
use crate::error::PerfilarError;

fn schema(names: &[&str]) -> Schema {
    Schema::new(names.iter().map(|s| (*s).to_string()).collect()).expect("valid schema")
}

fn record(pairs: &[(&str, f64)]) -> Record {
    Record::from_pairs(pairs.iter().map(|(n, v)| ((*n).to_string(), *v)).collect())
}

#[test]
fn test_train_updates_each_property() {
    let mut class = ClassProfile::new("A", &schema(&["x", "y"]));
    class
        .train(&record(&[("x", 1.0), ("y", 10.0)]))
        .expect("schema names");
    class
        .train(&record(&[("x", 3.0), ("y", 30.0)]))
        .expect("schema names");

    let x = class.property("x").expect("declared");
    assert_eq!(x.count(), 2);
    assert!((x.mean() - 2.0).abs() < 1e-12);
    let y = class.property("y").expect("declared");
    assert!((y.mean() - 20.0).abs() < 1e-12);
}

#[test]
fn test_train_unknown_property_fails() {
    let mut class = ClassProfile::new("A", &schema(&["x"]));
    let err = class
        .train(&record(&[("bogus", 1.0)]))
        .expect_err("not in schema");
    assert!(matches!(err, PerfilarError::InvalidPropertyName { name } if name == "bogus"));
}

#[test]
fn test_train_partial_application_on_failure() {
    // Entries before the invalid name stay applied; no rollback.
    let mut class = ClassProfile::new("A", &schema(&["x", "y"]));
    let result = class.train(&record(&[("x", 5.0), ("bogus", 1.0), ("y", 2.0)]));
    assert!(result.is_err());
    assert_eq!(class.property("x").expect("declared").count(), 1);
    assert_eq!(class.property("y").expect("declared").count(), 0);
}

#[test]
fn test_score_counts_in_range_fraction() {
    let mut class = ClassProfile::new("A", &schema(&["x", "y"]));
    for (x, y) in [(1.0, 10.0), (2.0, 20.0), (3.0, 30.0)] {
        class
            .train(&record(&[("x", x), ("y", y)]))
            .expect("schema names");
    }
    // x: mean 2, half_range 1, range (1, 3); y: mean 20, half_range 10
    let s = class
        .score(&record(&[("x", 2.0), ("y", 100.0)]))
        .expect("schema names");
    assert!((s - 0.5).abs() < 1e-12);
}

#[test]
fn test_score_excludes_boundary_values() {
    // mean 5, half_range 1: exactly 4 and exactly 6 are NOT in range.
    let mut class = ClassProfile::new("A", &schema(&["x"]));
    for x in [4.0, 5.0, 6.0] {
        class.train(&record(&[("x", x)])).expect("schema names");
    }
    let p = class.property("x").expect("declared");
    assert!((p.mean() - 5.0).abs() < 1e-12);
    assert!((p.half_range() - 1.0).abs() < 1e-12);

    for boundary in [4.0, 6.0] {
        let s = class.score(&record(&[("x", boundary)])).expect("schema names");
        assert_eq!(s, 0.0);
    }
    let s = class.score(&record(&[("x", 5.5)])).expect("schema names");
    assert_eq!(s, 1.0);
}

#[test]
fn test_score_inclusive_bounds_config() {
    let mut class = ClassProfile::new("A", &schema(&["x"]));
    for x in [4.0, 5.0, 6.0] {
        class.train(&record(&[("x", x)])).expect("schema names");
    }
    class.set_inclusive_bounds(true);
    let s = class.score(&record(&[("x", 6.0)])).expect("schema names");
    assert_eq!(s, 1.0);
}

#[test]
fn test_score_empty_sample_fails() {
    let class = ClassProfile::new("A", &schema(&["x"]));
    let err = class.score(&Record::from_pairs(vec![])).expect_err("empty");
    assert!(matches!(err, PerfilarError::DivisionByZero { .. }));
}

#[test]
fn test_score_unknown_property_fails() {
    let class = ClassProfile::new("A", &schema(&["x"]));
    let err = class
        .score(&record(&[("bogus", 1.0)]))
        .expect_err("not in schema");
    assert!(matches!(err, PerfilarError::InvalidPropertyName { .. }));
}

#[test]
fn test_score_does_not_mutate() {
    let mut class = ClassProfile::new("A", &schema(&["x"]));
    class.train(&record(&[("x", 1.0)])).expect("schema names");
    class.train(&record(&[("x", 3.0)])).expect("schema names");
    let before = class.property("x").expect("declared").count();
    let _ = class.score(&record(&[("x", 2.0)])).expect("schema names");
    assert_eq!(class.property("x").expect("declared").count(), before);
}

#[test]
fn test_find_redundancies_affine_pair() {
    // y = 2x + 1 is perfectly correlated with x.
    let mut class = ClassProfile::new("A", &schema(&["x", "y", "noise"]));
    let noise = [7.0, -3.0, 4.0, 12.0, -8.0, 1.0];
    for (i, x) in [1.0, 2.0, 3.0, 4.0, 5.0, 6.0].into_iter().enumerate() {
        class
            .train(&record(&[("x", x), ("y", 2.0 * x + 1.0), ("noise", noise[i])]))
            .expect("schema names");
    }

    let redundancies = class.find_redundancies(0.7).expect("nonzero variance");
    assert_eq!(redundancies.len(), 1);
    assert_eq!(redundancies[0].first, "x");
    assert_eq!(redundancies[0].second, "y");
    assert!((redundancies[0].r - 1.0).abs() < 1e-9);
}

#[test]
fn test_find_redundancies_identical_values() {
    let mut class = ClassProfile::new("A", &schema(&["a", "b"]));
    for v in [1.0, 5.0, 2.0, 8.0] {
        class
            .train(&record(&[("a", v), ("b", v)]))
            .expect("schema names");
    }
    let redundancies = class.find_redundancies(0.7).expect("nonzero variance");
    assert_eq!(redundancies.len(), 1);
    assert!((redundancies[0].r.abs() - 1.0).abs() < 1e-9);
}

#[test]
fn test_find_redundancies_negative_correlation() {
    let mut class = ClassProfile::new("A", &schema(&["up", "down"]));
    for v in [1.0, 2.0, 3.0, 4.0] {
        class
            .train(&record(&[("up", v), ("down", -v)]))
            .expect("schema names");
    }
    let redundancies = class.find_redundancies(0.7).expect("nonzero variance");
    assert_eq!(redundancies.len(), 1);
    assert!((redundancies[0].r + 1.0).abs() < 1e-9);
}

#[test]
fn test_find_redundancies_below_threshold_empty() {
    let mut class = ClassProfile::new("A", &schema(&["x", "y"]));
    for (x, y) in [(1.0, 1.0), (2.0, -1.0), (3.0, 1.0), (4.0, -1.0)] {
        class
            .train(&record(&[("x", x), ("y", y)]))
            .expect("schema names");
    }
    let redundancies = class.find_redundancies(0.7).expect("nonzero variance");
    assert!(redundancies.is_empty());
}

#[test]
fn test_find_redundancies_zero_variance_fails() {
    let mut class = ClassProfile::new("A", &schema(&["x", "flat"]));
    for x in [1.0, 2.0, 3.0] {
        class
            .train(&record(&[("x", x), ("flat", 9.0)]))
            .expect("schema names");
    }
    let err = class.find_redundancies(0.7).expect_err("flat has zero variance");
    assert!(matches!(err, PerfilarError::DivisionByZero { .. }));
}

#[test]
fn test_display_lists_properties_in_schema_order() {
    let mut class = ClassProfile::new("A", &schema(&["b", "a"]));
    class
        .train(&record(&[("b", 1.0), ("a", 2.0)]))
        .expect("schema names");
    let rendered = class.to_string();
    let b_pos = rendered.find("b:").expect("b rendered");
    let a_pos = rendered.find("a:").expect("a rendered");
    assert!(b_pos < a_pos);
}
