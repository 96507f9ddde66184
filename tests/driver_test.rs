//! Integration tests for whole runs over patterns

use image_lint_rs::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn bounds() -> BoundConfig {
    BoundConfig {
        min_width: 10,
        max_width: 800,
        min_height: 10,
        max_height: 1080,
    }
}

fn write_jpeg(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    image::RgbImage::new(width, height).save(&path).unwrap();
    path
}

fn run(patterns: &[String]) -> (RunOutcome, String) {
    let linter = Linter::new(&bounds(), OutputStyle::Markdown);
    let mut out = Vec::new();
    let outcome = linter.run(patterns, &mut out).unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

/// Test the too-tall scenario end to end
#[test]
fn test_too_tall_image_fails_run() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_jpeg(temp_dir.path(), "tall.jpg", 100, 2000);

    let (outcome, output) = run(&[path.display().to_string()]);
    assert_eq!(outcome.exit_code(), 1);
    assert_eq!(
        output,
        format!(
            "* {}\n  * max-height: expected(<1080) actual(2000)\n",
            path.display()
        )
    );
}

/// Test an image inside every bound
#[test]
fn test_image_within_bounds_passes_silently() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_jpeg(temp_dir.path(), "fine.jpg", 400, 300);

    let (outcome, output) = run(&[path.display().to_string()]);
    assert_eq!(outcome.exit_code(), 0);
    assert_eq!(outcome.checked, 1);
    assert!(output.is_empty());
}

/// Test two patterns: passing file then failing file
#[test]
fn test_second_pattern_failure_is_the_only_block() {
    let temp_dir = TempDir::new().unwrap();
    let good_dir = temp_dir.path().join("good");
    let bad_dir = temp_dir.path().join("bad");
    std::fs::create_dir_all(&good_dir).unwrap();
    std::fs::create_dir_all(&bad_dir).unwrap();
    write_jpeg(&good_dir, "ok.jpg", 400, 300);
    let bad = write_jpeg(&bad_dir, "wide.jpg", 900, 300);

    let patterns = vec![
        format!("{}/*.jpg", good_dir.display()),
        format!("{}/*.jpg", bad_dir.display()),
    ];
    let (outcome, output) = run(&patterns);

    assert_eq!(outcome.checked, 2);
    assert_eq!(outcome.exit_code(), 1);
    assert_eq!(output.lines().filter(|l| l.starts_with("* ")).count(), 1);
    assert!(output.starts_with(&format!("* {}\n", bad.display())));
    assert!(output.contains("max-width: expected(<800) actual(900)"));
}

/// Test output follows pattern order, then resolution order
#[test]
fn test_output_order_follows_patterns() {
    let temp_dir = TempDir::new().unwrap();
    let first = write_jpeg(temp_dir.path(), "z_first.jpg", 5, 5);
    let second = write_jpeg(temp_dir.path(), "a_second.jpg", 5, 5);

    let (_, output) = run(&[first.display().to_string(), second.display().to_string()]);
    let headers: Vec<&str> = output.lines().filter(|l| l.starts_with("* ")).collect();

    assert_eq!(
        headers,
        vec![
            format!("* {}", first.display()),
            format!("* {}", second.display())
        ]
    );
}

/// Test that repeating a run gives identical output and status
#[test]
fn test_runs_are_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    write_jpeg(temp_dir.path(), "a.jpg", 2, 2);
    write_jpeg(temp_dir.path(), "b.jpg", 400, 300);
    write_jpeg(temp_dir.path(), "c.jpg", 1000, 1200);
    std::fs::write(temp_dir.path().join("d.jpg"), b"broken").unwrap();

    let patterns = vec![format!("{}/**/*.jpg", temp_dir.path().display())];
    let first = run(&patterns);
    let second = run(&patterns);

    assert_eq!(first, second);
    assert_eq!(first.0.failed, 3);
}

/// Test that the same file matched by two patterns is checked twice
#[test]
fn test_overlapping_patterns_report_twice() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_jpeg(temp_dir.path(), "tiny.jpg", 3, 3);

    let literal = path.display().to_string();
    let glob = format!("{}/*.jpg", temp_dir.path().display());
    let (outcome, output) = run(&[literal, glob]);

    assert_eq!(outcome.checked, 2);
    assert_eq!(outcome.failed, 2);
    assert_eq!(output.matches("min-width").count(), 2);
}

/// Test the JSON style end to end
#[test]
fn test_json_style_run() {
    let temp_dir = TempDir::new().unwrap();
    write_jpeg(temp_dir.path(), "big.jpg", 900, 1200);

    let linter = Linter::new(&bounds(), OutputStyle::Json);
    let mut out = Vec::new();
    let pattern = format!("{}/*.jpg", temp_dir.path().display());
    linter.run(&[pattern], &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let value: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
    let rules: Vec<&str> = value["violations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["rule"].as_str().unwrap())
        .collect();
    assert_eq!(rules, vec!["max-width", "max-height"]);
}
