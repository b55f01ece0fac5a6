//! Component discovery.
//!
//! Scans `*component.ts` files for an `@Component(` decorator followed by a
//! `selector:` line and an `export class` line, and registers each hit as a
//! new catalog entry plus a template trap on its selector. Discovered
//! components share one tier placed after everything already in the catalog.

use std::path::Path;

use crate::catalog::CatalogBuilder;
use crate::error::Result;
use crate::fs_utils::{StopFolders, gather_files, read_source};
use crate::regexes::{regex_component_decorator, regex_component_selector, regex_export_class};
use crate::traps::TrapTables;

/// Prefix keeping discovered keys apart from built-in ones.
pub const DISCOVERED_KEY_PREFIX: &str = "x-app-";

/// Selector and class name scraped from one component file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDef {
    pub selector: String,
    pub class_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    SeekMarker,
    SeekSelector,
    SeekClassName,
}

/// Walk the decorator → selector → class signature over `source`.
pub fn parse_component(source: &str) -> Option<ComponentDef> {
    let mut state = ScanState::SeekMarker;
    let mut selector = None;
    for line in source.lines() {
        match state {
            ScanState::SeekMarker => {
                if regex_component_decorator().is_match(line) {
                    state = ScanState::SeekSelector;
                }
            }
            ScanState::SeekSelector => {
                if let Some(caps) = regex_component_selector().captures(line) {
                    selector = Some(caps[1].to_string());
                    state = ScanState::SeekClassName;
                }
            }
            ScanState::SeekClassName => {
                if let Some(caps) = regex_export_class().captures(line) {
                    return Some(ComponentDef {
                        selector: selector?,
                        class_name: caps[1].to_string(),
                    });
                }
            }
        }
    }
    None
}

/// `import { Class } from '../<folder>/<stem>';` for a component at `path`.
pub fn import_statement(path: &Path, class_name: &str) -> Option<String> {
    let folder = path.parent()?.file_name()?.to_str()?;
    let module = path.file_stem()?.to_str()?;
    Some(format!("import {{ {class_name} }} from '../{folder}/{module}';"))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionSummary {
    pub scanned: usize,
    pub registered: Vec<String>,
    pub skipped: Vec<String>,
}

impl ExpansionSummary {
    pub fn modified(&self) -> bool {
        !self.registered.is_empty()
    }
}

/// Discover components under `root` and register them. The tier is read
/// from `catalog` before scanning, so each root's components get their own
/// tier after whatever the catalog already held.
pub fn scan_components(
    catalog: &mut CatalogBuilder,
    tables: &mut TrapTables,
    root: &Path,
    stop: &StopFolders,
) -> Result<ExpansionSummary> {
    let tier = catalog.tier_bound();
    let mut summary = ExpansionSummary::default();

    for path in gather_files(root, stop) {
        let is_component = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with("component.ts"));
        if !is_component {
            continue;
        }
        summary.scanned += 1;
        tracing::info!("* scan for component [{}]", path.display());

        let Some(def) = parse_component(&read_source(&path)?) else {
            continue;
        };
        let Some(statement) = import_statement(&path, &def.class_name) else {
            continue;
        };
        tracing::info!("found component: {:?}", def.selector);

        let key = format!("{DISCOVERED_KEY_PREFIX}{}", def.selector);
        if tables.markup.contains_key(&def.selector) {
            tracing::warn!(
                "existed selector in markup traps: {:?} (not adding found component)",
                def.selector
            );
            summary.skipped.push(def.selector);
            continue;
        }
        if !catalog.register(key.as_str(), tier, [statement]) {
            tracing::warn!("existed definition key in catalog: {key:?} (not adding found component)");
            summary.skipped.push(def.selector);
            continue;
        }
        tables.markup.insert(def.selector, key.clone());
        summary.registered.push(key);
    }

    tracing::info!(
        "component scan of [{}] completed: modified={}",
        root.display(),
        summary.modified()
    );
    Ok(summary)
}
