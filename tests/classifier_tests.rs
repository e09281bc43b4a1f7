//! End-to-end classifier flow: schema declaration, streamed training,
//! classification, redundancy analysis, and snapshot resume.

use perfilar::prelude::*;

const PROPERTIES: [&str; 4] = [
    "sepal_length",
    "sepal_width",
    "petal_length",
    "petal_width",
];

// A handful of rows per species, in schema order.
const SETOSA: [[f64; 4]; 5] = [
    [5.1, 3.5, 1.4, 0.2],
    [4.9, 3.0, 1.4, 0.2],
    [4.7, 3.2, 1.3, 0.2],
    [5.0, 3.6, 1.4, 0.2],
    [5.4, 3.9, 1.7, 0.4],
];
const VERSICOLOR: [[f64; 4]; 5] = [
    [7.0, 3.2, 4.7, 1.4],
    [6.4, 3.2, 4.5, 1.5],
    [6.9, 3.1, 4.9, 1.5],
    [5.5, 2.3, 4.0, 1.3],
    [6.5, 2.8, 4.6, 1.5],
];

fn iris_schema() -> Schema {
    Schema::new(PROPERTIES.iter().map(|p| (*p).to_string()).collect())
        .expect("valid schema")
}

fn trained_dataset() -> Dataset {
    let mut dataset = Dataset::new("iris", iris_schema(), &["setosa", "versicolor"])
        .expect("valid classes");
    let schema = dataset.schema().clone();
    for row in &SETOSA {
        let record = Record::from_schema(&schema, row).expect("arity matches");
        dataset.train("setosa", &record).expect("declared class");
    }
    for row in &VERSICOLOR {
        let record = Record::from_schema(&schema, row).expect("arity matches");
        dataset.train("versicolor", &record).expect("declared class");
    }
    dataset
}

#[test]
fn classifies_a_versicolor_sample() {
    let dataset = trained_dataset();
    let sample = Record::from_schema(dataset.schema(), &[6.2, 2.9, 4.3, 1.3])
        .expect("arity matches");
    let scores = dataset.classify(&sample).expect("valid sample");

    assert_eq!(scores.len(), 2);
    for score in scores.values() {
        assert!((0.0..=1.0).contains(score));
    }
    assert!(scores["versicolor"] > scores["setosa"]);
}

#[test]
fn classifies_a_setosa_sample() {
    let dataset = trained_dataset();
    let sample = Record::from_schema(dataset.schema(), &[5.0, 3.4, 1.4, 0.2])
        .expect("arity matches");
    let scores = dataset.classify(&sample).expect("valid sample");
    assert!(scores["setosa"] > scores["versicolor"]);
}

#[test]
fn wrong_arity_row_is_rejected_before_training() {
    let dataset = trained_dataset();
    let err = Record::from_schema(dataset.schema(), &[6.2, 2.9, 4.3])
        .expect_err("one value short");
    assert!(matches!(err, PerfilarError::LengthMismatch { .. }));
}

#[test]
fn partial_sample_scores_over_its_own_fields() {
    // A sample may carry a subset of the schema; the score denominator is
    // the sample size, not the schema size.
    let dataset = trained_dataset();
    let sample = Record::from_pairs(vec![("petal_length".to_string(), 4.5)]);
    let scores = dataset.classify(&sample).expect("valid sample");
    assert_eq!(scores["versicolor"], 1.0);
    assert_eq!(scores["setosa"], 0.0);
}

#[test]
fn redundancy_analysis_flags_derived_property() {
    let schema = Schema::new(vec![
        "length_cm".to_string(),
        "length_mm".to_string(),
        "width".to_string(),
    ])
    .expect("valid schema");
    let mut dataset = Dataset::new("measurements", schema, &["only"])
        .expect("valid classes");

    let widths = [3.0, 1.0, 4.0, 1.5, 5.0, 9.0];
    for (i, cm) in [1.2, 2.5, 3.1, 4.8, 5.0, 6.3].into_iter().enumerate() {
        let record = Record::from_pairs(vec![
            ("length_cm".to_string(), cm),
            ("length_mm".to_string(), cm * 10.0),
            ("width".to_string(), widths[i]),
        ]);
        dataset.train("only", &record).expect("declared class");
    }

    let redundancies = dataset
        .find_redundancies("only", DEFAULT_REDUNDANCY_THRESHOLD)
        .expect("nonzero variance");
    assert_eq!(redundancies.len(), 1);
    assert_eq!(redundancies[0].first, "length_cm");
    assert_eq!(redundancies[0].second, "length_mm");
    assert!((redundancies[0].r - 1.0).abs() < 1e-9);
}

#[test]
fn snapshot_resume_classifies_identically() {
    let dataset = trained_dataset();
    let json = dataset.to_json().expect("snapshot encodes");
    let resumed = Dataset::from_json(&json).expect("snapshot decodes");

    for row in SETOSA.iter().chain(VERSICOLOR.iter()) {
        let sample =
            Record::from_schema(dataset.schema(), row).expect("arity matches");
        assert_eq!(
            dataset.classify(&sample).expect("valid sample"),
            resumed.classify(&sample).expect("valid sample"),
        );
    }
}

#[test]
fn diagnostic_dump_covers_every_class_and_property() {
    let dataset = trained_dataset();
    let dump = dataset.to_string();
    assert!(dump.contains("dataset 'iris'"));
    for class in ["setosa", "versicolor"] {
        assert!(dump.contains(&format!("class '{class}'")));
    }
    for property in PROPERTIES {
        assert!(dump.contains(property));
    }
    assert_eq!(dump, dataset.to_string());
}

#[test]
fn training_and_classification_interleave() {
    let mut dataset = Dataset::new("demo", iris_schema(), &["a", "b"])
        .expect("valid classes");
    let schema = dataset.schema().clone();

    let record = Record::from_schema(&schema, &SETOSA[0]).expect("arity matches");
    dataset.train("a", &record).expect("declared class");

    let sample = Record::from_schema(&schema, &SETOSA[0]).expect("arity matches");
    let scores = dataset.classify(&sample).expect("valid sample");
    // A single observation gives zero half-range; the strict interval is
    // empty, so even the trained value itself is out of range.
    assert_eq!(scores["a"], 0.0);

    let record = Record::from_schema(&schema, &SETOSA[4]).expect("arity matches");
    dataset.train("a", &record).expect("declared class");
    // Midpoints of the two trained rows fall strictly inside every band.
    let midpoint = Record::from_schema(&schema, &[5.25, 3.7, 1.55, 0.3])
        .expect("arity matches");
    let scores = dataset.classify(&midpoint).expect("valid sample");
    assert_eq!(scores["a"], 1.0);
}
