//! # RHTMX Glob
//!
//! File discovery and eager module loading for convention-based routing.
//!
//! Given one or more glob patterns and a base directory, [`glob_import`]
//! finds every matching file and loads each one through a [`ModuleLoader`],
//! producing a [`ModuleTable`] keyed by absolute path.
//!
//! - Patterns starting with `/` are anchored at the base directory by string
//!   concatenation; other patterns are resolved relative to it. The base
//!   directory part is always taken literally, whatever characters it holds
//! - Matching is done by a [`GlobMatcher`] ([`FsMatcher`] by default), which
//!   understands the extended glob dialect documented in [`pattern`]
//! - Loads run concurrently; any failure fails the whole import
//!
//! ## Example
//!
//! ```no_run
//! use rhtmx_glob::{glob_import, FsMatcher, SourceLoader};
//! use std::path::Path;
//!
//! # async fn run() -> Result<(), rhtmx_glob::GlobImportError> {
//! let modules = glob_import(
//!     "/app/routes/**/*.(md|mdx)",
//!     Path::new("/srv/site"),
//!     &FsMatcher::new(),
//!     &SourceLoader,
//! )
//! .await?;
//!
//! for (path, module) in &modules {
//!     println!("{} ({} bytes)", path.display(), module.source.len());
//! }
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod import;
mod loader;
mod matcher;
pub mod pattern;
mod table;

pub use import::{expand_patterns, glob_import, GlobImportError, IntoPatterns};
pub use loader::{LoadError, ModuleLoader, ModuleRegistry, SourceLoader, SourceModule};
pub use matcher::{FsMatcher, GlobError, GlobMatcher, GlobOptions};
pub use pattern::{Pattern, PatternError};
pub use table::ModuleTable;
