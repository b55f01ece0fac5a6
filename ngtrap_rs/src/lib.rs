//! # ngtrap
//!
//! **Angular import advisor** - tells you which modules a standalone
//! component's template and class need, so you can paste them into the
//! class file's header and the `imports: [...]` annotation.
//!
//! Detection is purely textual: every known tag, attribute, directive, pipe
//! or injected service is a *trap* pointing at a catalog entry, and each
//! template/class pair is run through the traps in one scan session.
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,no_run
//! use ngtrap::{builtin, TrapSet};
//!
//! let catalog = builtin::catalog().finish();
//! let traps = TrapSet::build(&catalog, &builtin::trap_tables());
//!
//! let mut session = traps.session();
//! session.feed_markup("<mat-icon>home</mat-icon>");
//! session.feed_logic("constructor(private dialog: MatDialog) {}");
//! let resolved = session.export();
//! println!("{}", resolved.imports.join("\n"));
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! ngtrap src/app                     # advise every component pair
//! ngtrap --scan-component src/app    # also learn the project's own components
//! ngtrap -v src/app                  # log every trap hit
//! ```

// ============================================================================
// Core Modules
// ============================================================================

/// Built-in catalog rows, trap tables and stop folders.
pub mod builtin;

/// Symbol catalog: key → tier + import statements.
pub mod catalog;

/// Optional `.ngtrap/config.toml`.
pub mod config;

pub mod error;

/// Component discovery (`--scan-component`).
pub mod expand;

/// Directory walking and template/class pairing.
pub mod fs_utils;

pub mod report;

/// Scan sessions and tier-grouped export.
pub mod session;

/// Trap compilation.
pub mod traps;

mod regexes;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use catalog::{Catalog, CatalogBuilder, CatalogEntry};
pub use error::{NgtrapError, Result};
pub use fs_utils::{SourcePair, StopFolders};
pub use session::{Resolved, ScanSession};
pub use traps::{TrapSet, TrapTables};

use std::path::Path;

/// Run one scan session over a template and its class file.
///
/// Both files are read before scanning starts, so an unreadable class file
/// produces no partial result for the pair.
pub fn extract_pair(traps: &TrapSet, markup: &Path, logic: &Path) -> Result<Resolved> {
    let markup_src = fs_utils::read_source(markup)?;
    let logic_src = fs_utils::read_source(logic)?;
    let mut session = traps.session();
    session.feed_markup(&markup_src);
    session.feed_logic(&logic_src);
    Ok(session.export())
}
