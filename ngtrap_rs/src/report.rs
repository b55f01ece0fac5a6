use std::fmt::Write as _;
use std::path::Path;

use crate::session::Resolved;

fn render_block(out: &mut String, label: &str, lines: &[String]) {
    if lines.is_empty() {
        let _ = writeln!(out, "{label}: =empty=");
    } else {
        let _ = writeln!(out, "{label}: ---\n{}\n---", lines.join("\n"));
    }
}

/// Human-readable advice for one pair: the import block for the class file
/// and the name block for the `imports: [...]` annotation.
pub fn render_pair(markup: &Path, resolved: &Resolved) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "* process [{}]", markup.display());
    render_block(&mut out, "imports", &resolved.imports);
    render_block(&mut out, "annotation-imports", &resolved.modules);
    out
}
