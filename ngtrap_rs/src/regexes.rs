use std::sync::OnceLock;

use regex::Regex;

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex literal")
}

/// `import { Name } from ...` / `import { Name, Other } from ...`.
/// Only the first identifier is captured.
pub(crate) fn regex_named_import() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        regex(r#"^import\s*\{\s*([A-Za-z0-9]+)(?:\s*(?:,\s+[A-Za-z0-9]+)+)?\s*\}\s*"#)
    })
}

pub(crate) fn regex_component_decorator() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"^@Component\("#))
}

pub(crate) fn regex_component_selector() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"^\s*selector:\s*['"]([a-zA-Z0-9_-]+)['"]"#))
}

pub(crate) fn regex_export_class() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"^\s*export\s+class\s+([a-zA-Z0-9_]+)"#))
}

/// Wraps a literal template token with the delimiters that may surround it
/// in markup: tag openers, attribute separators, bindings, structural
/// directives and pipes on the left; tag closers, assignments and
/// interpolation ends on the right.
pub(crate) fn markup_trap_pattern(trigger: &str) -> String {
    format!(
        r#"(?:<|\s+|\(|\[|\|\s*|\*){}(?:>|\s+|\)|\]|=|/|\s*\}}\}})"#,
        regex::escape(trigger)
    )
}
