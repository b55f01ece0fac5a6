use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::{NgtrapError, Result};

/// A component template and the class file next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePair {
    pub markup: PathBuf,
    pub logic: PathBuf,
}

/// Directory names pruned from every walk.
#[derive(Debug, Clone, Default)]
pub struct StopFolders(BTreeSet<String>);

impl StopFolders {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.extend(names.into_iter().map(Into::into));
    }

    pub fn contains(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|name| self.0.contains(name))
    }
}

fn is_pruned(entry: &DirEntry, stop: &StopFolders) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && stop.contains(entry.file_name())
}

/// Every file under `root`, never descending into stop folders. Within a
/// directory, files come first and subdirectories after, each by name. The
/// root itself is never pruned.
///
/// Unreadable or missing directories are logged and skipped. Symlinked files
/// are listed; symlinked directories are not followed.
pub fn gather_files(root: &Path, stop: &StopFolders) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by(|a, b| {
            a.file_type()
                .is_dir()
                .cmp(&b.file_type().is_dir())
                .then_with(|| a.file_name().cmp(b.file_name()))
        })
        .into_iter()
        .filter_entry(|entry| !is_pruned(entry, stop));
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("skipping unreadable path under [{}]: {err}", root.display());
                continue;
            }
        };
        if entry.path().is_file() {
            files.push(entry.into_path());
        }
    }
    files
}

/// Pair each `*.html` under `root` with the `*.ts` of the same stem in the
/// same directory. Templates without a class file are logged and skipped.
pub fn gather_pairs(root: &Path, stop: &StopFolders) -> Vec<SourcePair> {
    let mut pairs = Vec::new();
    for markup in gather_files(root, stop) {
        if markup.extension() != Some(OsStr::new("html")) {
            continue;
        }
        let logic = markup.with_extension("ts");
        if !logic.is_file() {
            tracing::info!("cannot reach .ts counter part: [{}]", markup.display());
            continue;
        }
        pairs.push(SourcePair { markup, logic });
    }
    pairs
}

pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| NgtrapError::io(path, err))
}
