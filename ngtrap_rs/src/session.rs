//! Per-pair scan session and the resolver that turns matched entries into
//! tier-grouped import lines.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::catalog::CatalogEntry;
use crate::traps::{Trap, TrapSet};

/// Resolver output for one template/class pair.
///
/// Both sequences are grouped by tier (ascending), sorted within a tier and
/// separated by a single empty string between non-empty tiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolved {
    /// Statements for the top of the class file.
    pub imports: Vec<String>,
    /// Names for the component's `imports: [...]` annotation.
    pub modules: Vec<String>,
}

impl Resolved {
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.modules.is_empty()
    }
}

/// Accumulates every catalog entry whose trap fired at least once.
#[derive(Debug)]
pub struct ScanSession<'a> {
    traps: &'a TrapSet,
    matched: BTreeMap<String, Arc<CatalogEntry>>,
}

impl<'a> ScanSession<'a> {
    pub(crate) fn new(traps: &'a TrapSet) -> Self {
        Self {
            traps,
            matched: BTreeMap::new(),
        }
    }

    /// Feed one template line. A trailing space is appended so tokens at the
    /// end of a line still see a closing delimiter.
    pub fn feed_markup_line(&mut self, line: &str) {
        let line = format!("{line} ");
        let traps = self.traps;
        for trap in traps.markup() {
            if trap.is_match(&line) && self.record(trap) {
                tracing::debug!("have element: {}: {:?}", trap.entry().key, line);
            }
        }
    }

    /// Feed one class-source line.
    pub fn feed_logic_line(&mut self, line: &str) {
        let traps = self.traps;
        for trap in traps.logic() {
            if trap.is_match(line) && self.record(trap) {
                tracing::debug!("have member: {}: {:?}", trap.entry().key, line);
            }
        }
    }

    pub fn feed_markup(&mut self, text: &str) {
        for line in text.lines() {
            self.feed_markup_line(line);
        }
    }

    pub fn feed_logic(&mut self, text: &str) {
        for line in text.lines() {
            self.feed_logic_line(line);
        }
    }

    /// Keys recorded so far, sorted.
    pub fn matched_keys(&self) -> impl Iterator<Item = &str> {
        self.matched.keys().map(String::as_str)
    }

    // Returns true on first sighting of the key.
    fn record(&mut self, trap: &Trap) -> bool {
        let entry = trap.entry();
        if self.matched.contains_key(&entry.key) {
            return false;
        }
        self.matched.insert(entry.key.clone(), Arc::clone(entry));
        true
    }

    pub fn export(&self) -> Resolved {
        let mut resolved = Resolved::default();
        for tier in 0..self.traps.tier_bound() {
            let mut imports = BTreeSet::new();
            let mut modules = BTreeSet::new();
            for entry in self.matched.values().filter(|e| e.tier == tier) {
                imports.extend(entry.imports.iter().map(String::as_str));
                modules.extend(entry.modules.iter().map(String::as_str));
            }
            append_group(&mut resolved.imports, imports);
            append_group(&mut resolved.modules, modules);
        }
        resolved
    }
}

fn append_group(out: &mut Vec<String>, group: BTreeSet<&str>) {
    if group.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push(String::new());
    }
    out.extend(group.into_iter().map(str::to_string));
}
