//! Trap (detector) construction.
//!
//! Traps are described as plain data in [`TrapTables`] and compiled once,
//! after the catalog is frozen, into a [`TrapSet`] shared by every scan
//! session.

use std::collections::BTreeMap;
use std::sync::Arc;

use regex::Regex;

use crate::catalog::{Catalog, CatalogEntry};
use crate::regexes::markup_trap_pattern;
use crate::session::ScanSession;

/// Source tables for trap construction.
#[derive(Debug, Clone, Default)]
pub struct TrapTables {
    /// Template token → catalog key.
    pub markup: BTreeMap<String, String>,
    /// Class-source regex → catalog key.
    pub logic: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct Trap {
    regex: Regex,
    entry: Arc<CatalogEntry>,
}

impl Trap {
    pub fn entry(&self) -> &Arc<CatalogEntry> {
        &self.entry
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}

#[derive(Debug, Clone)]
pub struct TrapSet {
    markup: Vec<Trap>,
    logic: Vec<Trap>,
    tier_bound: usize,
}

impl TrapSet {
    /// Compile every table row whose key resolves in `catalog`. Rows with an
    /// unknown key or an invalid pattern are skipped with a warning.
    pub fn build(catalog: &Catalog, tables: &TrapTables) -> Self {
        let markup = tables
            .markup
            .iter()
            .filter_map(|(trigger, key)| {
                compile(catalog, "markup", trigger, key, &markup_trap_pattern(trigger))
            })
            .collect();
        let logic = tables
            .logic
            .iter()
            .filter_map(|(pattern, key)| compile(catalog, "logic", pattern, key, pattern))
            .collect();
        Self {
            markup,
            logic,
            tier_bound: catalog.tier_bound(),
        }
    }

    pub fn markup(&self) -> &[Trap] {
        &self.markup
    }

    pub fn logic(&self) -> &[Trap] {
        &self.logic
    }

    pub fn tier_bound(&self) -> usize {
        self.tier_bound
    }

    /// Fresh accumulator for one template/class pair.
    pub fn session(&self) -> ScanSession<'_> {
        ScanSession::new(self)
    }
}

fn compile(
    catalog: &Catalog,
    kind: &str,
    source: &str,
    key: &str,
    pattern: &str,
) -> Option<Trap> {
    let Some(entry) = catalog.get(key) else {
        tracing::warn!("import definition key for {kind}:[{source}] not found: [{key}]");
        return None;
    };
    match Regex::new(pattern) {
        Ok(regex) => Some(Trap {
            regex,
            entry: Arc::clone(entry),
        }),
        Err(err) => {
            tracing::warn!("invalid {kind} trap [{source}] for [{key}]: {err}");
            None
        }
    }
}
