#![allow(dead_code)]

use log::debug;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tgen::cli::{run, Args};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const FIXTURES: &str = "tests/fixtures";

/// Path of a file or directory under `tests/fixtures`, as the CLI would receive it.
pub fn fixture(relative: &str) -> String {
    format!("{FIXTURES}/{relative}")
}

/// Builds arguments for a run writing into `output`.
pub fn args(template: &str, variables: &[&str], output: &Path) -> Args {
    Args {
        template: template.to_string(),
        variables: variables.iter().map(|v| v.to_string()).collect(),
        output: output.to_path_buf(),
        combine: false,
        resources: Vec::new(),
        dry_run: false,
        verbose: 2,
    }
}

/// Writes a zip archive holding `entries` (name, content) into `dir`.
/// Names ending with `/` become directory entries.
pub fn build_archive(dir: &Path, name: &str, entries: &[(&str, &str)]) -> PathBuf {
    let path = dir.join(name);
    let mut zip = ZipWriter::new(File::create(&path).unwrap());
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    for (entry, content) in entries {
        if entry.ends_with('/') {
            zip.add_directory(entry.trim_end_matches('/'), options).unwrap();
        } else {
            zip.start_file(*entry, options).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
    }
    zip.finish().unwrap();
    path
}

/// Lists every file below `dir`, relative to it and sorted.
pub fn list_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
        .collect();
    files.sort();
    files
}

/// Prints a diff of files and their contents between two directories.
/// Shows files only present in one directory and content differences for files present in both.
///
/// # Arguments
/// * `dir1` - The first directory to compare (actual output).
/// * `dir2` - The second directory to compare (expected output).
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let actual = list_files(dir1);
    let expected = list_files(dir2);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {dir1:?}");
    println!("Expected output: {dir2:?}");

    for file in actual.iter().filter(|f| !expected.contains(f)) {
        println!("  + {file:?}");
    }
    for file in expected.iter().filter(|f| !actual.contains(f)) {
        println!("  - {file:?}");
    }
    for file in actual.iter().filter(|f| expected.contains(f)) {
        let content1 = fs::read_to_string(dir1.join(file)).unwrap_or_default();
        let content2 = fs::read_to_string(dir2.join(file)).unwrap_or_default();
        if content1 != content2 {
            println!("\n  File: {file:?}");
            println!("  --- Actual content:\n{content1}");
            println!("  --- Expected content:\n{content2}");
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Runs tgen with `args`, then asserts the output directory matches `expected_dir`.
pub fn run_and_assert(args: Args, expected_dir: &str) {
    let output = args.output.clone();
    run(args).unwrap();
    match dir_diff::is_different(&output, expected_dir) {
        Ok(true) => {
            print_dir_diff(&output, expected_dir.as_ref());
            panic!("Directories differ. See above for details.");
        }
        Ok(false) => {}
        Err(e) => debug!("Error comparing directories: {e:?}"),
    }
    assert!(!dir_diff::is_different(&output, expected_dir).unwrap());
}
