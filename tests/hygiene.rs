//! Hygiene — enforces coding standards at test time
//!
//! These tests scan the portal source tree for antipatterns that violate
//! project standards. Each has a budget (ideally zero). If you must add one,
//! you have to fix an existing one first — the budget never grows.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    note: &'static str,
}

// Panics — these crash the hydrated app.
const PANICS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, note: "" },
    Budget { pattern: ".expect(", max: 0, note: "" },
    Budget { pattern: "panic!(", max: 0, note: "" },
    Budget { pattern: "unreachable!(", max: 0, note: "" },
    Budget { pattern: "todo!(", max: 0, note: "Ratchet down as stubs are implemented." },
    Budget { pattern: "unimplemented!(", max: 0, note: "" },
];

// Silent loss — discards errors without inspecting.
const SILENT_LOSS: &[Budget] = &[
    // Non-browser stubs consuming their unused arguments.
    Budget { pattern: "let _ =", max: 6, note: "" },
    // gloo `Response::ok()` status checks, not `Result::ok()`.
    Budget { pattern: ".ok()", max: 2, note: "" },
];

// Style / structure.
const STRUCTURE: &[Budget] = &[
    Budget { pattern: "#[allow(dead_code)]", max: 0, note: "" },
    // Access redirects belong to `RouteGuard`, which uses `<Redirect>`.
    Budget { pattern: "use_navigate", max: 0, note: "Route access through RouteGuard." },
];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding test files.
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
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn count_in_source(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| line.contains(pattern))
                .count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn check(budgets: &[Budget]) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found under src/");
    let mut failures = Vec::new();
    for budget in budgets {
        let hits = count_in_source(&files, budget.pattern);
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            let listing = hits
                .iter()
                .map(|(path, c)| format!("  {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!(
                "{} budget exceeded: found {count}, max {}. {}\n{listing}",
                budget.pattern, budget.max, budget.note
            ));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn panic_budgets() {
    check(PANICS);
}

#[test]
fn silent_loss_budgets() {
    check(SILENT_LOSS);
}

#[test]
fn structure_budgets() {
    check(STRUCTURE);
}
