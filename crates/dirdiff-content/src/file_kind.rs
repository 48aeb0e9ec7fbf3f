//! Display categories for files, keyed by extension or basename.

use std::path::Path;

/// Map a relative path to its display category.
///
/// Pure lookup: a small basename table first (dotfiles and well-known
/// extensionless files), then the extension table. Unmatched extensions
/// fall back to the uppercased extension itself; extensionless files fall
/// back to `"Unknown"`.
pub fn classify(rel_path: &str) -> String {
    let path = Path::new(rel_path);

    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        if let Some(kind) = classify_basename(name) {
            return kind.to_string();
        }
    }

    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => {
            let ext = ext.to_lowercase();
            match classify_extension(&ext) {
                Some(kind) => kind.to_string(),
                None => ext.to_uppercase(),
            }
        }
        None => "Unknown".to_string(),
    }
}

fn classify_basename(name: &str) -> Option<&'static str> {
    match name {
        "Makefile" | "makefile" | "GNUmakefile" => Some("Makefile"),
        "Dockerfile" => Some("Docker"),
        ".gitignore" | ".gitattributes" | ".gitmodules" => Some("Git"),
        ".env" => Some("Environment"),
        _ => None,
    }
}

fn classify_extension(ext: &str) -> Option<&'static str> {
    match ext {
        "ts" => Some("TypeScript"),
        "tsx" => Some("React TSX"),
        "js" | "mjs" | "cjs" => Some("JavaScript"),
        "jsx" => Some("React JSX"),
        "rs" => Some("Rust"),
        "go" => Some("Go"),
        "java" => Some("Java"),
        "py" => Some("Python"),
        "c" | "h" => Some("C"),
        "cpp" | "cc" | "hpp" => Some("C++"),
        "css" => Some("CSS"),
        "scss" => Some("SCSS"),
        "html" | "htm" => Some("HTML"),
        "json" => Some("JSON"),
        "yaml" | "yml" => Some("YAML"),
        "xml" => Some("XML"),
        "md" => Some("Markdown"),
        "sql" => Some("SQL"),
        "sh" | "bash" => Some("Shell"),
        "env" => Some("Environment"),
        "properties" => Some("Properties"),
        "gradle" => Some("Gradle"),
        "toml" => Some("TOML"),
        "cfg" | "conf" => Some("Config"),
        "ini" => Some("INI"),
        "log" => Some("Log"),
        "txt" => Some("Text"),
        "bat" => Some("Batch"),
        "ps1" => Some("PowerShell"),
        _ => None,
    }
}
