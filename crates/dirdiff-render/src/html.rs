//! Self-contained HTML report.

use std::fmt::Write;

use dirdiff_engine::{DiffLine, DiffResult, FileDiff, FileStatus};

use crate::bytes::human_size;

/// Render the report as one standalone HTML document.
pub fn render_html(result: &DiffResult) -> String {
    let s = &result.summary;
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");

    let added: Vec<_> = result.files_with_status(FileStatus::Added).collect();
    let deleted: Vec<_> = result.files_with_status(FileStatus::Deleted).collect();
    let binary: Vec<_> = result.files_with_status(FileStatus::BinaryModified).collect();
    let modified: Vec<_> = result.files_with_status(FileStatus::Modified).collect();

    let mut body = String::new();

    let _ = write!(
        body,
        "<h1>Directory Diff Report</h1>\n\
         <div class=\"meta\">\n\
         Original: <strong>{}</strong><br>\n\
         Modified: <strong>{}</strong><br>\n\
         Created: {timestamp}\n\
         </div>\n",
        escape(&result.original_root.display().to_string()),
        escape(&result.modified_root.display().to_string()),
    );

    let _ = write!(
        body,
        "<div class=\"summary\">\n\
         {}{}{}{}{}{}{}\
         </div>\n",
        stat_card(&s.added.to_string(), "New Files", "var(--green)"),
        stat_card(&s.deleted.to_string(), "Deleted", "var(--red)"),
        stat_card(&s.modified.to_string(), "Modified", "var(--yellow)"),
        stat_card(&s.binary_modified.to_string(), "Binary Modified", "var(--magenta)"),
        stat_card(&format!("+{}", s.lines_added), "Lines Added", "var(--green)"),
        stat_card(&format!("-{}", s.lines_removed), "Lines Removed", "var(--red)"),
        stat_card(&s.unchanged.to_string(), "Unchanged", "var(--muted)"),
    );

    body.push_str(
        "<div class=\"filter\"><input type=\"text\" id=\"searchBox\" \
         placeholder=\"Filter filenames...\" oninput=\"filterFiles()\"></div>\n",
    );

    file_list(&mut body, "New Files", "add", "+", "var(--green)", &added);
    file_list(&mut body, "Deleted Files", "del", "-", "var(--red)", &deleted);
    file_list(&mut body, "Binary Modified", "bin", "~", "var(--magenta)", &binary);

    if !modified.is_empty() {
        let _ = write!(
            body,
            "<div class=\"section-title\" style=\"color:var(--yellow)\">~ Modified Files ({})</div>\n",
            modified.len()
        );
        for file in &modified {
            diff_section(&mut body, file);
        }
    }

    if !result.warnings.is_empty() {
        let _ = write!(
            body,
            "<div class=\"section-title\" style=\"color:var(--yellow)\">Warnings ({})</div>\n<ul class=\"file-list\">\n",
            result.warnings.len()
        );
        for warning in &result.warnings {
            let _ = write!(
                body,
                "<li>{}: {}</li>\n",
                escape(&warning.path),
                escape(&warning.reason)
            );
        }
        body.push_str("</ul>\n");
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <title>Diff Report – {timestamp}</title>\n<style>\n{STYLE}\n</style>\n</head>\n\
         <body>\n{body}\n<script>\n{SCRIPT}\n</script>\n</body>\n</html>\n"
    )
}

fn stat_card(number: &str, label: &str, color: &str) -> String {
    format!(
        "<div class=\"stat-card\"><div class=\"number\" style=\"color:{color}\">{number}</div>\
         <div class=\"label\">{label}</div></div>\n"
    )
}

fn file_list(
    body: &mut String,
    title: &str,
    class: &str,
    marker: &str,
    color: &str,
    files: &[&FileDiff],
) {
    if files.is_empty() {
        return;
    }
    let _ = write!(
        body,
        "<div class=\"section-title\" style=\"color:{color}\">{marker} {title} ({})</div>\n<ul class=\"file-list\">\n",
        files.len()
    );
    for file in files {
        let size = match (file.size_original, file.size_modified) {
            (Some(a), Some(b)) => format!("{} → {}", human_size(a), human_size(b)),
            (Some(a), None) => human_size(a),
            (None, Some(b)) => human_size(b),
            (None, None) => String::new(),
        };
        let _ = write!(
            body,
            "<li class=\"filterable\" data-name=\"{name}\">\
             <span class=\"status {class}\">{marker}</span> {name} \
             <span class=\"lang\">({size})</span></li>\n",
            name = escape(&file.rel_path),
        );
    }
    body.push_str("</ul>\n");
}

fn diff_section(body: &mut String, file: &FileDiff) {
    let _ = write!(
        body,
        "<details class=\"file-diff\" id=\"{name}\">\n\
         <summary>\n\
         <span class=\"status mod\">~</span>\n\
         <span class=\"filepath\">{name}</span>\n\
         <span class=\"lang\">{kind}</span>\n\
         <span class=\"stats\"><span class=\"add\">+{added}</span> \
         <span class=\"del\">-{removed}</span></span>\n\
         </summary>\n<div class=\"diff-content\">",
        name = escape(&file.rel_path),
        kind = escape(&file.kind),
        added = file.lines_added,
        removed = file.lines_removed,
    );

    for hunk in &file.hunks {
        let _ = write!(
            body,
            "<div class=\"diff-hunk\">@@ -{},{} +{},{} @@</div>",
            hunk.old_start, hunk.old_count, hunk.new_start, hunk.new_count
        );
        for line in &hunk.lines {
            let (class, marker, text) = match line {
                DiffLine::Context(text) => ("diff-ctx", ' ', text),
                DiffLine::Added(text) => ("diff-add", '+', text),
                DiffLine::Removed(text) => ("diff-del", '-', text),
            };
            let _ = write!(body, "<div class=\"{class}\">{marker}{}</div>", escape(text));
        }
    }

    body.push_str("</div>\n</details>\n");
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

const STYLE: &str = r#"    :root { --bg: #0d1117; --fg: #c9d1d9; --border: #30363d; --green: #3fb950;
             --red: #f85149; --yellow: #d29922; --blue: #58a6ff; --magenta: #bc8cff;
             --muted: #8b949e; --surface: #161b22; --diff-add-bg: #12261e; --diff-del-bg: #2d1214; }
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body { font-family: 'Segoe UI', system-ui, sans-serif; background: var(--bg);
            color: var(--fg); padding: 2rem; line-height: 1.6; }
    h1 { color: var(--blue); margin-bottom: 0.5rem; font-size: 1.5rem; }
    .meta { color: var(--muted); margin-bottom: 2rem; font-size: 0.9rem; }
    .summary { display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
                gap: 1rem; margin-bottom: 2rem; }
    .stat-card { background: var(--surface); border: 1px solid var(--border);
                  border-radius: 8px; padding: 1rem; text-align: center; }
    .stat-card .number { font-size: 1.8rem; font-weight: 700; }
    .stat-card .label { font-size: 0.85rem; color: var(--muted); }
    .section-title { font-size: 1.1rem; font-weight: 600; margin: 1.5rem 0 0.5rem;
                      padding: 0.5rem 0; border-bottom: 1px solid var(--border); }
    .file-list { list-style: none; }
    .file-list li { padding: 0.3rem 0.5rem; font-family: monospace; font-size: 0.9rem; }
    .file-list li:hover { background: var(--surface); border-radius: 4px; }
    .file-diff { margin: 0.5rem 0; border: 1px solid var(--border); border-radius: 8px;
                  overflow: hidden; }
    .file-diff summary { cursor: pointer; padding: 0.6rem 1rem; background: var(--surface);
                          display: flex; align-items: center; gap: 0.8rem; font-family: monospace;
                          font-size: 0.9rem; }
    .file-diff summary:hover { background: #1c2129; }
    .status { font-weight: 700; width: 1.2rem; text-align: center; }
    .status.add { color: var(--green); }
    .status.del { color: var(--red); }
    .status.mod { color: var(--yellow); }
    .status.bin { color: var(--magenta); }
    .filepath { flex: 1; }
    .lang { color: var(--muted); font-size: 0.8rem; }
    .stats .add { color: var(--green); }
    .stats .del { color: var(--red); margin-left: 0.4rem; }
    .diff-content { font-family: 'Fira Code', 'Consolas', monospace; font-size: 0.82rem;
                     overflow-x: auto; max-height: 600px; overflow-y: auto; }
    .diff-hunk { padding: 2px 12px; color: var(--blue); background: var(--surface); }
    .diff-add { padding: 2px 12px; background: var(--diff-add-bg); color: var(--green); }
    .diff-del { padding: 2px 12px; background: var(--diff-del-bg); color: var(--red); }
    .diff-ctx { padding: 2px 12px; color: var(--muted); }
    .filter { margin-bottom: 1.5rem; }
    .filter input { background: var(--surface); border: 1px solid var(--border); color: var(--fg);
                     padding: 0.5rem 1rem; border-radius: 6px; width: 100%; max-width: 400px;
                     font-size: 0.9rem; }
    .filter input::placeholder { color: #484f58; }
    .hidden { display: none !important; }"#;

const SCRIPT: &str = r#"function filterFiles() {
    const q = document.getElementById('searchBox').value.toLowerCase();
    document.querySelectorAll('.filterable, .file-diff').forEach(el => {
        const name = (el.dataset.name || el.id || '').toLowerCase();
        el.classList.toggle('hidden', q && !name.includes(q));
    });
}"#;
