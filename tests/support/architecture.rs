use std::fs;
use std::path::{Path, PathBuf};

/// A source line flagged by a layering check.
#[derive(Debug)]
pub struct Hit {
    pub file: String,
    pub line: usize,
    pub text: String,
}

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn walk(dir: &Path, out: &mut Vec<PathBuf>) {
    let entries = fs::read_dir(dir).unwrap_or_else(|e| panic!("read {}: {e}", dir.display()));
    for path in entries.filter_map(|entry| entry.ok().map(|e| e.path())) {
        if path.is_dir() {
            walk(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

/// Non-test lines of every Rust file under `dir`, with 1-based line numbers.
fn production_lines(dir: &str) -> Vec<(String, usize, String)> {
    let root = crate_root();
    let mut files = Vec::new();
    walk(&root.join(dir), &mut files);
    files.sort();

    files
        .iter()
        .flat_map(|path| {
            let name = path
                .strip_prefix(&root)
                .unwrap_or(path)
                .to_string_lossy()
                .replace('\\', "/");
            let content =
                fs::read_to_string(path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()));
            content
                .lines()
                .take_while(|line| line.trim() != "#[cfg(test)]")
                .enumerate()
                .map(|(idx, line)| (name.clone(), idx + 1, line.to_string()))
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Lines under `dir` mentioning any of `patterns`, outside test modules.
pub fn find_lines_containing(dir: &str, patterns: &[&str]) -> Vec<Hit> {
    production_lines(dir)
        .into_iter()
        .filter(|(_, _, text)| patterns.iter().any(|p| text.contains(p)))
        .map(|(file, line, text)| Hit { file, line, text })
        .collect()
}

/// Lines of `mod.rs` files under `dir` that do more than declare or re-export.
pub fn find_non_export_lines_in_mod_files(dir: &str) -> Vec<Hit> {
    let mut hits = Vec::new();
    let mut in_use_list = false;

    for (file, line, text) in production_lines(dir) {
        if !file.ends_with("/mod.rs") {
            continue;
        }
        let trimmed = text.trim();
        if in_use_list {
            in_use_list = !trimmed.ends_with("};");
            continue;
        }
        if trimmed.starts_with("pub use ") {
            in_use_list = !trimmed.ends_with(';');
            continue;
        }
        let declaration = trimmed.is_empty()
            || trimmed.starts_with("//")
            || trimmed.starts_with("pub mod ")
            || trimmed.starts_with("mod ")
            || trimmed.starts_with("#[cfg");
        if !declaration {
            hits.push(Hit { file, line, text });
        }
    }
    hits
}

pub fn path_exists(relative: &str) -> bool {
    crate_root().join(relative).exists()
}
