use serde_json::json;
use std::fs;
use test_log::test;
use tgen::error::Error;
use tgen::loader::{ResourceNamespace, ResourceRoot};
use tgen::variables::{AggregationMode, NamedResult, VariablesReader};
mod utils;
use utils::{build_archive, fixture};

fn names(results: &[NamedResult]) -> Vec<&str> {
    results.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn test_directory_yields_one_result_per_supported_file() {
    let resources = ResourceNamespace::default();
    let reader = VariablesReader::new(&resources);

    let results = reader.aggregate(&fixture("variables/users")).unwrap();

    assert_eq!(names(&results), vec!["users1", "users2"]);
    assert_eq!(results[0].mapping["users"][1]["name"], json!("Mary"));
    assert_eq!(results[1].mapping["users"][0]["id"], json!(3));
}

#[test]
fn test_separate_mode_keeps_path_order() {
    let resources = ResourceNamespace::default();
    let reader = VariablesReader::new(&resources);

    let results = reader
        .combine(
            &[fixture("variables/groups.yml"), fixture("variables/users")],
            AggregationMode::Separate,
        )
        .unwrap();

    assert_eq!(names(&results), vec!["groups", "users1", "users2"]);
}

#[test]
fn test_combined_mode_lists_every_value() {
    let resources = ResourceNamespace::default();
    let reader = VariablesReader::new(&resources);

    let results = reader
        .combine(
            &[fixture("variables/users"), fixture("variables/groups.yml")],
            AggregationMode::Combined,
        )
        .unwrap();

    assert_eq!(results.len(), 1);
    let combined = &results[0];
    assert_eq!(combined.name, "COMBINED");
    let keys: Vec<_> = combined.mapping.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["users", "groups"]);
    assert_eq!(combined.mapping["users"].as_array().unwrap().len(), 2);
    assert_eq!(combined.mapping["groups"][0][1]["name"], json!("developers"));
}

#[test]
fn test_reading_twice_gives_equal_results() {
    let resources = ResourceNamespace::default();
    let reader = VariablesReader::new(&resources);
    let paths = [fixture("variables/users"), fixture("variables/groups.yml")];

    let first = reader.combine(&paths, AggregationMode::Combined).unwrap();
    let second = reader.combine(&paths, AggregationMode::Combined).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_only_unsupported_files_yield_nothing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("readme.txt"), "hello").unwrap();
    let resources = ResourceNamespace::default();
    let reader = VariablesReader::new(&resources);

    let path = dir.path().to_str().unwrap();
    assert!(reader.aggregate(path).unwrap().is_empty());
    assert!(reader.combine(&[path], AggregationMode::Combined).unwrap().is_empty());
}

#[test]
fn test_uppercase_extensions_are_accepted() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("vars.YAML"), "a: 1").unwrap();
    let resources = ResourceNamespace::default();

    let results = VariablesReader::new(&resources).aggregate(dir.path().to_str().unwrap()).unwrap();

    assert_eq!(names(&results), vec!["vars"]);
}

#[test]
fn test_nonexistent_path() {
    let resources = ResourceNamespace::default();
    let result = VariablesReader::new(&resources).aggregate("does/not/exist");
    assert!(matches!(result, Err(Error::SourceNotFound { .. })));
}

#[test]
fn test_empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    let resources = ResourceNamespace::default();

    let result = VariablesReader::new(&resources).aggregate(dir.path().to_str().unwrap());

    assert!(matches!(result, Err(Error::EmptyDirectory { .. })));
}

#[test]
fn test_malformed_file_aborts_combine() {
    let resources = ResourceNamespace::default();
    let result = VariablesReader::new(&resources).combine(
        &[fixture("variables/groups.yml"), fixture("variables/invalid")],
        AggregationMode::Separate,
    );

    match result {
        Err(Error::MalformedContent { source_path, .. }) => {
            assert!(source_path.ends_with("broken.yaml"))
        }
        other => panic!("Expected malformed content, got {other:?}"),
    }
}

#[test]
fn test_list_root_is_malformed() {
    let resources = ResourceNamespace::default();
    let result =
        VariablesReader::new(&resources).aggregate(&fixture("variables/invalid/list.json"));
    assert!(matches!(result, Err(Error::MalformedContent { .. })));
}

#[test]
fn test_packaged_directory_fallback() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir_all(root.path().join("packaged").join("users")).unwrap();
    fs::write(root.path().join("packaged").join("users").join("b.yml"), "v: b").unwrap();
    fs::write(root.path().join("packaged").join("users").join("a.json"), r#"{"v": "a"}"#)
        .unwrap();
    let resources = ResourceNamespace::new(vec![ResourceRoot::Directory(root.path().to_path_buf())]);

    let results = VariablesReader::new(&resources).aggregate("packaged/users").unwrap();

    assert_eq!(names(&results), vec!["a", "b"]);
    assert_eq!(results[1].mapping["v"], json!("b"));
}

#[test]
fn test_packaged_archive_fallback() {
    let root = tempfile::tempdir().unwrap();
    let archive = build_archive(
        root.path(),
        "resources.zip",
        &[
            ("packaged/users/users2.json", r#"{"users": [{"name": "Peter"}]}"#),
            ("packaged/users/users1.yaml", "users:\n  - name: John\n"),
            ("packaged/users/readme.txt", "skip me"),
            ("packaged/users/nested/deep.yml", "deep: true"),
        ],
    );
    let resources = ResourceNamespace::new(vec![ResourceRoot::Archive(archive)]);

    let results = VariablesReader::new(&resources)
        .combine(&["packaged/users"], AggregationMode::Combined)
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].mapping["users"], json!([[{"name": "John"}], [{"name": "Peter"}]]));
}
