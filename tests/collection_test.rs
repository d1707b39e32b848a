//! Integration tests for collection merging and JSON persistence.

use mathpdf::{extract_from_text, Difficulty, ExtractOptions, ProblemCollection, ProblemRecord};
use std::fs;

fn record(id: u32, problem: &str) -> ProblemRecord {
    ProblemRecord {
        id,
        category: "Mathematics".to_string(),
        difficulty: Difficulty::Easy,
        problem: problem.to_string(),
    }
}

#[test]
fn test_merge_scenario_sorted_ids() {
    // new = [3, 1] merged with existing = [2] comes out as [1, 2, 3].
    let existing = ProblemCollection::from_records(vec![record(2, "two")]);
    let merged = existing.merge(vec![record(3, "three"), record(1, "one")]);

    let ids: Vec<u32> = merged.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_merge_length_is_exact_sum() {
    let existing = ProblemCollection::from_records(vec![record(1, "a"), record(2, "b")]);
    let prior_len = existing.len();

    let new = vec![record(1, "duplicate id"), record(7, "c")];
    let new_len = new.len();

    let merged = existing.merge(new);
    assert_eq!(merged.len(), prior_len + new_len);
}

#[test]
fn test_file_round_trip_preserves_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("problems.json");

    let records = extract_from_text(
        "1. What is 2+2? (A) 3 (B) 4\n2. Find the derivative of f.",
        ExtractOptions::default(),
    )
    .unwrap();

    let collection = ProblemCollection::from_records(records);
    collection.save(&path).unwrap();

    let reloaded = ProblemCollection::load_or_default(Some(&path));
    assert_eq!(reloaded, collection);
}

#[test]
fn test_merge_with_prior_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let prior_path = dir.path().join("prior.json");

    ProblemCollection::from_records(vec![record(2, "prior problem two")])
        .save(&prior_path)
        .unwrap();

    let new = extract_from_text("4. Compute 2+2 now.\n3. Compute 1+1 now.", ExtractOptions::default())
        .unwrap();

    let merged = ProblemCollection::load_or_default(Some(&prior_path)).merge(new);
    let ids: Vec<u32> = merged.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 3, 4]);
}

#[test]
fn test_corrupt_prior_file_degrades_to_new_only() {
    let dir = tempfile::tempdir().unwrap();
    let prior_path = dir.path().join("prior.json");
    fs::write(&prior_path, "[{\"id\": oops").unwrap();

    let merged = ProblemCollection::load_or_default(Some(&prior_path))
        .merge(vec![record(1, "only the new one")]);
    assert_eq!(merged.len(), 1);
}

#[test]
fn test_sample_file_contains_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("problems.json");

    let collection =
        ProblemCollection::from_records(vec![record(1, "a"), record(2, "b"), record(3, "c")]);
    collection.save(&path).unwrap();
    let sample_path = collection.save_sample(&path, 2).unwrap();

    let sample = ProblemCollection::load_or_default(Some(&sample_path));
    let ids: Vec<u32> = sample.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_output_is_a_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("problems.json");

    ProblemCollection::from_records(vec![record(1, "a")]).save(&path).unwrap();

    let json = fs::read_to_string(&path).unwrap();
    assert!(json.trim_start().starts_with('['));
    assert!(json.trim_end().ends_with(']'));
}
