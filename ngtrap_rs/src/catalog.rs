//! Symbol catalog: symbolic key → tier + import statements.
//!
//! Built in two phases. A [`CatalogBuilder`] collects built-in rows,
//! configuration rows and discovered components; [`CatalogBuilder::finish`]
//! freezes it into a [`Catalog`] that trap construction borrows.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::regexes::regex_named_import;

/// One import requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub key: String,
    pub tier: usize,
    /// Statements emitted when this entry is selected.
    pub imports: Vec<String>,
    /// Names introduced by `imports`, as listed in the component's
    /// `imports: [...]` annotation.
    pub modules: Vec<String>,
}

impl CatalogEntry {
    pub fn new(key: impl Into<String>, tier: usize, imports: Vec<String>) -> Self {
        let modules = imports
            .iter()
            .filter_map(|stmt| referenced_name(stmt))
            .collect();
        Self {
            key: key.into(),
            tier,
            imports,
            modules,
        }
    }
}

/// Name introduced by a named import statement, or `None` when the
/// statement has another shape (default, namespace or side-effect import).
pub fn referenced_name(statement: &str) -> Option<String> {
    regex_named_import()
        .captures(statement)
        .map(|caps| caps[1].to_string())
}

#[derive(Debug, Default)]
pub struct CatalogBuilder {
    entries: BTreeMap<String, CatalogEntry>,
    tier_bound: usize,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an entry.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        tier: usize,
        imports: impl IntoIterator<Item = String>,
    ) {
        let entry = CatalogEntry::new(key, tier, imports.into_iter().collect());
        let replaced = self.entries.insert(entry.key.clone(), entry);
        match replaced {
            // An overwrite may lower the highest tier.
            Some(_) => self.recompute_tier_bound(),
            None => self.tier_bound = self.tier_bound.max(tier + 1),
        }
    }

    /// Insert an entry only if `key` is unused. Returns `false` when the key
    /// already exists; the caller decides how to report it.
    #[must_use]
    pub fn register(
        &mut self,
        key: impl Into<String>,
        tier: usize,
        imports: impl IntoIterator<Item = String>,
    ) -> bool {
        let key = key.into();
        if self.entries.contains_key(&key) {
            return false;
        }
        self.insert(key, tier, imports);
        true
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// `1 + max(tier)` over current entries; 0 when empty.
    pub fn tier_bound(&self) -> usize {
        self.tier_bound
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn recompute_tier_bound(&mut self) {
        self.tier_bound = self
            .entries
            .values()
            .map(|e| e.tier + 1)
            .max()
            .unwrap_or(0);
    }

    pub fn finish(self) -> Catalog {
        Catalog {
            tier_bound: self.tier_bound,
            entries: self
                .entries
                .into_iter()
                .map(|(key, entry)| (key, Arc::new(entry)))
                .collect(),
        }
    }
}

/// Frozen catalog shared by every trap and scan session.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: BTreeMap<String, Arc<CatalogEntry>>,
    tier_bound: usize,
}

impl Catalog {
    pub fn get(&self, key: &str) -> Option<&Arc<CatalogEntry>> {
        self.entries.get(key)
    }

    pub fn tier_bound(&self) -> usize {
        self.tier_bound
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &Arc<CatalogEntry>> {
        self.entries.values()
    }
}
