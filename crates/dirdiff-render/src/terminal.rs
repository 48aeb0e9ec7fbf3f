//! Colored terminal report.

use std::fmt::Write;

use colored::Colorize;

use dirdiff_engine::{DiffHunk, DiffLine, DiffResult, FileDiff, FileStatus};

use crate::bytes::human_size;

const WIDE_RULE: &str =
    "══════════════════════════════════════════════════════════════════════";
const THIN_RULE: &str =
    "──────────────────────────────────────────────────────────────────────";

/// Render the full report as terminal text.
///
/// Color is applied through `colored`; disable it with
/// `colored::control::set_override(false)` before calling.
pub fn render_text(result: &DiffResult) -> String {
    let mut out = String::new();

    header(&mut out, result);
    overview(&mut out, result);
    kind_breakdown(&mut out, result);

    listing_section(
        &mut out,
        "NEW FILES",
        result.files_with_status(FileStatus::Added).collect(),
        |f| format!("{} {}", "+".green(), f.rel_path.green()),
    );
    listing_section(
        &mut out,
        "DELETED FILES",
        result.files_with_status(FileStatus::Deleted).collect(),
        |f| format!("{} {}", "-".red(), f.rel_path.red()),
    );
    listing_section(
        &mut out,
        "BINARY MODIFIED",
        result.files_with_status(FileStatus::BinaryModified).collect(),
        |f| format!("{} {}", "~".magenta(), f.rel_path.magenta()),
    );

    modified_section(&mut out, result);
    warnings_section(&mut out, result);

    if !result.has_changes() {
        let _ = writeln!(
            out,
            "\n  {}",
            "✓ No differences found. The trees are identical.".green().bold()
        );
    }

    let _ = writeln!(out, "\n{}", WIDE_RULE.bold());
    out
}

fn header(out: &mut String, result: &DiffResult) {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    let _ = writeln!(out, "\n{}", WIDE_RULE.bold());
    let _ = writeln!(out, "  {}", "DIRECTORY DIFF REPORT".bold());
    let _ = writeln!(out, "{}", WIDE_RULE.bold());
    let _ = writeln!(out, "  {}  {}", "Original:".dimmed(), result.original_root.display());
    let _ = writeln!(out, "  {}  {}", "Modified:".dimmed(), result.modified_root.display());
    let _ = writeln!(out, "  {} {}", "Timestamp:".dimmed(), timestamp);
    let _ = writeln!(out, "{}", THIN_RULE.bold());
}

fn overview(out: &mut String, result: &DiffResult) {
    let s = &result.summary;
    let _ = writeln!(out, "\n  {}", "OVERVIEW".bold());
    let _ = writeln!(out, "  Files in Original:      {}", s.files_in_original);
    let _ = writeln!(out, "  Files in Modified:      {}", s.files_in_modified);
    let _ = writeln!(out, "  Unchanged:              {}", s.unchanged.to_string().dimmed());
    let _ = writeln!(out, "  {}", format!("+ New Files:             {}", s.added).green());
    let _ = writeln!(out, "  {}", format!("- Deleted Files:         {}", s.deleted).red());
    let _ = writeln!(out, "  {}", format!("~ Modified Files:        {}", s.modified).yellow());
    let _ = writeln!(
        out,
        "  {}",
        format!("~ Binary Modified:       {}", s.binary_modified).magenta()
    );
    let _ = writeln!(out, "  {}", format!("Lines Added:             +{}", s.lines_added).cyan());
    let _ = writeln!(out, "  {}", format!("Lines Removed:           -{}", s.lines_removed).red());
}

fn kind_breakdown(out: &mut String, result: &DiffResult) {
    let interesting: Vec<_> = result
        .kinds
        .iter()
        .filter(|(_, stats)| {
            stats.added + stats.deleted + stats.modified + stats.binary_modified > 0
        })
        .collect();
    if interesting.is_empty() {
        return;
    }

    let _ = writeln!(out, "\n  {}", "BY FILE TYPE".bold());
    for (kind, stats) in interesting {
        let mut parts = Vec::new();
        if stats.added > 0 {
            parts.push(format!("+{}", stats.added).green().to_string());
        }
        if stats.deleted > 0 {
            parts.push(format!("-{}", stats.deleted).red().to_string());
        }
        let changed = stats.modified + stats.binary_modified;
        if changed > 0 {
            parts.push(format!("~{changed}").yellow().to_string());
        }
        let _ = writeln!(out, "    {:<20} {}", kind, parts.join(" "));
    }
}

fn listing_section(
    out: &mut String,
    title: &str,
    files: Vec<&FileDiff>,
    line: impl Fn(&FileDiff) -> String,
) {
    if files.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{}", THIN_RULE.bold());
    let _ = writeln!(out, "  {}", format!("{title} ({})", files.len()).bold());
    for file in files {
        let size = match (file.size_original, file.size_modified) {
            (Some(a), Some(b)) => format!("({} → {})", human_size(a), human_size(b)),
            (Some(a), None) => format!("({})", human_size(a)),
            (None, Some(b)) => format!("({})", human_size(b)),
            (None, None) => String::new(),
        };
        let _ = writeln!(out, "    {}  {}", line(file), size.dimmed());
    }
}

fn modified_section(out: &mut String, result: &DiffResult) {
    let modified: Vec<_> = result.files_with_status(FileStatus::Modified).collect();
    if modified.is_empty() {
        return;
    }

    let _ = writeln!(out, "\n{}", THIN_RULE.bold());
    let _ = writeln!(out, "  {}", format!("MODIFIED FILES ({})", modified.len()).yellow().bold());

    for file in modified {
        let sizes = format!(
            "({} → {})",
            human_size(file.size_original.unwrap_or(0)),
            human_size(file.size_modified.unwrap_or(0)),
        );
        let _ = writeln!(
            out,
            "\n    {}  {}  {} {}",
            format!("~ {}", file.rel_path).yellow().bold(),
            sizes.dimmed(),
            format!("+{}", file.lines_added).green(),
            format!("-{}", file.lines_removed).red(),
        );
        for hunk in &file.hunks {
            render_hunk(out, hunk);
        }
    }
}

fn render_hunk(out: &mut String, hunk: &DiffHunk) {
    let _ = writeln!(
        out,
        "      {}",
        format!(
            "@@ -{},{} +{},{} @@",
            hunk.old_start, hunk.old_count, hunk.new_start, hunk.new_count
        )
        .cyan()
    );
    for line in &hunk.lines {
        let rendered = match line {
            DiffLine::Context(text) => format!(" {text}").dimmed(),
            DiffLine::Added(text) => format!("+{text}").green(),
            DiffLine::Removed(text) => format!("-{text}").red(),
        };
        let _ = writeln!(out, "      {rendered}");
    }
}

fn warnings_section(out: &mut String, result: &DiffResult) {
    if result.warnings.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{}", THIN_RULE.bold());
    let _ = writeln!(
        out,
        "  {}",
        format!("WARNINGS ({})", result.warnings.len()).yellow().bold()
    );
    for warning in &result.warnings {
        let _ = writeln!(out, "    {}: {}", warning.path, warning.reason.dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dirdiff_engine::{DiffSummary, KindStats};
    use std::collections::BTreeMap;

    fn plain() {
        colored::control::set_override(false);
    }

    fn result_with(files: Vec<FileDiff>) -> DiffResult {
        let mut summary = DiffSummary::default();
        let mut kinds: BTreeMap<String, KindStats> = BTreeMap::new();
        for file in &files {
            let stats = kinds.entry(file.kind.clone()).or_default();
            match file.status {
                FileStatus::Added => {
                    summary.added += 1;
                    stats.added += 1;
                }
                FileStatus::Deleted => {
                    summary.deleted += 1;
                    stats.deleted += 1;
                }
                FileStatus::Unchanged => summary.unchanged += 1,
                FileStatus::Modified => {
                    summary.modified += 1;
                    stats.modified += 1;
                }
                FileStatus::BinaryModified => {
                    summary.binary_modified += 1;
                    stats.binary_modified += 1;
                }
            }
            summary.lines_added += file.lines_added;
            summary.lines_removed += file.lines_removed;
        }
        DiffResult {
            original_root: "/tmp/a".into(),
            modified_root: "/tmp/b".into(),
            summary,
            files,
            kinds,
            warnings: Vec::new(),
        }
    }

    fn modified_file() -> FileDiff {
        FileDiff {
            rel_path: "src/app.ts".into(),
            status: FileStatus::Modified,
            kind: "TypeScript".into(),
            size_original: Some(100),
            size_modified: Some(120),
            hunks: vec![DiffHunk {
                old_start: 1,
                old_count: 2,
                new_start: 1,
                new_count: 2,
                lines: vec![
                    DiffLine::Context("line1".into()),
                    DiffLine::Removed("line2".into()),
                    DiffLine::Added("line2x".into()),
                ],
            }],
            lines_added: 1,
            lines_removed: 1,
        }
    }

    #[test]
    fn identical_trees_render_the_all_clear_line() {
        plain();
        let text = render_text(&result_with(vec![]));
        assert!(text.contains("No differences found"));
    }

    #[test]
    fn modified_files_render_hunk_headers_and_lines() {
        plain();
        let text = render_text(&result_with(vec![modified_file()]));
        assert!(text.contains("MODIFIED FILES (1)"));
        assert!(text.contains("@@ -1,2 +1,2 @@"));
        assert!(text.contains("-line2"));
        assert!(text.contains("+line2x"));
        assert!(text.contains("+1"));
    }

    #[test]
    fn breakdown_lists_touched_kinds_only() {
        plain();
        let text = render_text(&result_with(vec![modified_file()]));
        assert!(text.contains("BY FILE TYPE"));
        assert!(text.contains("TypeScript"));
    }

    #[test]
    fn warnings_are_listed() {
        plain();
        let mut result = result_with(vec![]);
        result
            .warnings
            .push(dirdiff_engine::ScanWarning::new("locked.txt", "permission denied"));
        let text = render_text(&result);
        assert!(text.contains("WARNINGS (1)"));
        assert!(text.contains("locked.txt"));
    }
}
