//! Hygiene checks: scan `surveys/src` for patterns that hide or crash on errors.
//!
//! This crate runs inside the browser, where a panic takes the whole page
//! down. Every budget is zero; test files (`*_test.rs`) are exempt.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

/// Lines where a pattern is the accepted idiom rather than a discarded error.
/// An unset environment variable is `None`, not a failure.
const EXEMPT: [&str; 1] = ["env::var("];

fn hits(files: &[SourceFile], pattern: &str) -> Vec<String> {
    files
        .iter()
        .flat_map(|file| {
            file.content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains(pattern))
                .filter(|(_, line)| !EXEMPT.iter().any(|exempt| line.contains(exempt)))
                .map(|(n, line)| format!("  {}:{}: {}", file.path, n + 1, line.trim()))
        })
        .collect()
}

fn assert_absent(pattern: &str) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");
    let found = hits(&files, pattern);
    assert!(found.is_empty(), "`{pattern}` is not allowed in surveys/src:\n{}", found.join("\n"));
}

#[test]
fn no_unwrap() {
    assert_absent(".unwrap()");
}

#[test]
fn no_expect() {
    assert_absent(".expect(");
}

#[test]
fn no_panics() {
    assert_absent("panic!(");
    assert_absent("unreachable!(");
    assert_absent("todo!(");
    assert_absent("unimplemented!(");
}

#[test]
fn no_silent_discard() {
    assert_absent("let _ =");
    assert_absent(".ok()");
}

#[test]
fn env_lookup_is_exempt() {
    let files = vec![SourceFile {
        path: "src/config.rs".to_owned(),
        content: "    std::env::var(key).ok()\n    parsed.ok()\n".to_owned(),
    }];
    let found = hits(&files, ".ok()");
    assert_eq!(found.len(), 1);
    assert!(found[0].contains("parsed.ok()"));
}
