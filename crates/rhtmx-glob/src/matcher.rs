//! Filesystem glob matching
//!
//! [`GlobMatcher`] is the seam between pattern expansion and the filesystem.
//! [`FsMatcher`] is the default implementation: it walks the directory tree
//! under each pattern's literal prefix and keeps the entries the pattern
//! accepts.

use crate::pattern::{Pattern, PatternError};
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Errors raised by a glob matcher
#[derive(Debug, thiserror::Error)]
pub enum GlobError {
    /// The directory patterns are resolved against is missing or unreadable
    #[error("cannot read base directory {path:?}")]
    BaseDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A pattern could not be parsed
    #[error("invalid glob pattern {pattern:?}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: PatternError,
    },

    /// The blocking traversal task panicked or was cancelled
    #[error("glob traversal task failed")]
    Task(#[from] tokio::task::JoinError),
}

/// Options passed to a [`GlobMatcher`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobOptions {
    /// Directory relative patterns are resolved against
    pub cwd: PathBuf,
    /// Return absolute paths (otherwise relative to `cwd`)
    pub absolute: bool,
    /// Return regular files only
    pub only_files: bool,
    /// Treat a pattern naming a directory as "everything below it"
    pub expand_directories: bool,
}

impl GlobOptions {
    /// Options used for module discovery: absolute paths, files only, no
    /// directory expansion
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            absolute: true,
            only_files: true,
            expand_directories: false,
        }
    }

    pub fn with_only_files(mut self, only_files: bool) -> Self {
        self.only_files = only_files;
        self
    }

    pub fn with_absolute(mut self, absolute: bool) -> Self {
        self.absolute = absolute;
        self
    }

    pub fn with_expand_directories(mut self, expand: bool) -> Self {
        self.expand_directories = expand;
        self
    }
}

/// Resolves a set of patterns to file paths
///
/// Implementations return each path once; ordering is not part of the
/// contract.
#[async_trait]
pub trait GlobMatcher: Send + Sync {
    async fn glob(&self, patterns: &[String], options: &GlobOptions) -> Result<Vec<PathBuf>, GlobError>;
}

#[async_trait]
impl<G: GlobMatcher + ?Sized> GlobMatcher for Arc<G> {
    async fn glob(&self, patterns: &[String], options: &GlobOptions) -> Result<Vec<PathBuf>, GlobError> {
        (**self).glob(patterns, options).await
    }
}

/// Directory-walking matcher backed by `walkdir`
#[derive(Debug, Clone)]
pub struct FsMatcher {
    follow_links: bool,
}

impl Default for FsMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FsMatcher {
    pub fn new() -> Self {
        Self { follow_links: true }
    }

    /// Whether symbolic links are followed during traversal (default: true)
    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Synchronous matching; [`GlobMatcher::glob`] runs this on the blocking pool
    pub fn glob_sync(&self, patterns: &[String], options: &GlobOptions) -> Result<Vec<PathBuf>, GlobError> {
        let cwd = absolute_cwd(&options.cwd)?;

        let _listing = std::fs::read_dir(&cwd).map_err(|source| GlobError::BaseDir {
            path: cwd.clone(),
            source,
        })?;

        let compiled = patterns
            .iter()
            .map(|pattern| compile(pattern, &options.cwd, &cwd))
            .collect::<Result<Vec<_>, _>>()?;

        let mut found = BTreeSet::new();
        for pattern in &compiled {
            let pattern = if options.expand_directories && pattern.is_literal() && pattern.literal_prefix().is_dir() {
                pattern.with_contents()
            } else {
                pattern.clone()
            };
            self.walk(&pattern, options, &mut found);
        }

        debug!(
            patterns = patterns.len(),
            matches = found.len(),
            cwd = %cwd.display(),
            "glob matched"
        );

        let paths = found
            .into_iter()
            .map(|path| {
                if options.absolute {
                    path
                } else {
                    path.strip_prefix(&cwd).map(Path::to_path_buf).unwrap_or(path)
                }
            })
            .collect();

        Ok(paths)
    }

    fn walk(&self, pattern: &Pattern, options: &GlobOptions, found: &mut BTreeSet<PathBuf>) {
        let root = pattern.literal_prefix();
        if !root.exists() {
            return;
        }

        let mut walker = WalkDir::new(&root).follow_links(self.follow_links);
        if let Some(depth) = pattern.max_depth() {
            walker = walker.max_depth(depth);
        }

        // Hidden entries below the prefix can only match a segment that
        // names a leading dot
        let skip_hidden = !pattern.names_dot_entries();
        let entries = walker
            .into_iter()
            .filter_entry(move |entry| !(skip_hidden && entry.depth() > 0 && is_hidden(entry)));

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(pattern = %pattern, error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            if options.only_files && !entry.file_type().is_file() {
                continue;
            }

            if pattern.matches(entry.path()) {
                found.insert(entry.into_path());
            }
        }
    }
}

#[async_trait]
impl GlobMatcher for FsMatcher {
    async fn glob(&self, patterns: &[String], options: &GlobOptions) -> Result<Vec<PathBuf>, GlobError> {
        let matcher = self.clone();
        let patterns = patterns.to_vec();
        let options = options.clone();

        tokio::task::spawn_blocking(move || matcher.glob_sync(&patterns, &options)).await?
    }
}

/// Parses one pattern and anchors it at `cwd`
///
/// A pattern that starts with the text of `base` (the cwd as given) has that
/// prefix anchored literally, so separators and glob characters in the
/// directory name are never read as pattern syntax. Only the remainder is
/// parsed as a glob.
fn compile(pattern: &str, base: &Path, cwd: &Path) -> Result<Pattern, GlobError> {
    let base_text = base.to_string_lossy();
    let rest = pattern
        .strip_prefix(base_text.as_ref())
        .filter(|rest| !base_text.is_empty() && (rest.is_empty() || rest.starts_with(std::path::is_separator)))
        .map(|rest| rest.trim_start_matches(std::path::is_separator));

    let parsed = match rest {
        Some("") => Pattern::parse("."),
        Some(rest) => Pattern::parse(rest),
        None => Pattern::parse(pattern),
    };

    parsed
        .map(|parsed| parsed.anchored_at(cwd))
        .map_err(|source| GlobError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn absolute_cwd(cwd: &Path) -> Result<PathBuf, GlobError> {
    if cwd.is_absolute() {
        return Ok(cwd.to_path_buf());
    }

    std::env::current_dir()
        .map(|current| current.join(cwd))
        .map_err(|source| GlobError::BaseDir {
            path: cwd.to_path_buf(),
            source,
        })
}
