//! Hygiene — enforces coding standards at test time.
//!
//! Scans the production source tree (`src/`, minus the sibling `*_test.rs`
//! modules) for antipatterns. Every budget is zero; a new hit means fixing
//! the code, not raising the budget.

use std::fs;
use std::path::Path;

/// Patterns that must not appear in production code.
const FORBIDDEN: &[(&str, &str)] = &[
    (".unwrap()", "propagate or default instead of panicking"),
    (".expect(", "propagate or default instead of panicking"),
    ("panic!(", "no process-fatal paths in a UI crate"),
    ("todo!(", "no stubs in shipped code"),
    ("unimplemented!(", "no stubs in shipped code"),
    ("unreachable!(", "encode the invariant in types instead"),
    ("#[allow(dead_code)]", "delete unused code instead of hiding it"),
];

fn production_sources(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
            continue;
        }
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((path.to_string_lossy().into_owned(), content));
        }
    }
}

#[test]
fn production_code_has_no_forbidden_patterns() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no production sources found under src/");

    let mut violations = Vec::new();
    for (path, content) in &files {
        for (line_no, line) in content.lines().enumerate() {
            for (pattern, why) in FORBIDDEN {
                if line.contains(pattern) {
                    violations.push(format!("{path}:{}: {pattern} — {why}", line_no + 1));
                }
            }
        }
    }
    assert!(
        violations.is_empty(),
        "forbidden patterns in production code:\n{}",
        violations.join("\n")
    );
}
