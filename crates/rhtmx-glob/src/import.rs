//! Pattern expansion and eager module loading

use crate::loader::{LoadError, ModuleLoader};
use crate::matcher::{GlobError, GlobMatcher, GlobOptions};
use crate::table::ModuleTable;
use futures::future::join_all;
use std::path::Path;
use tracing::{debug, trace};

/// Errors raised by [`glob_import`]
#[derive(Debug, thiserror::Error)]
pub enum GlobImportError {
    #[error(transparent)]
    Glob(#[from] GlobError),

    #[error(transparent)]
    Load(#[from] LoadError),
}

/// One pattern or many
pub trait IntoPatterns {
    fn into_patterns(self) -> Vec<String>;
}

impl IntoPatterns for &str {
    fn into_patterns(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoPatterns for String {
    fn into_patterns(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoPatterns for &String {
    fn into_patterns(self) -> Vec<String> {
        vec![self.clone()]
    }
}

impl IntoPatterns for Vec<String> {
    fn into_patterns(self) -> Vec<String> {
        self
    }
}

impl IntoPatterns for Vec<&str> {
    fn into_patterns(self) -> Vec<String> {
        self.into_iter().map(str::to_string).collect()
    }
}

impl IntoPatterns for &[&str] {
    fn into_patterns(self) -> Vec<String> {
        self.iter().map(|p| p.to_string()).collect()
    }
}

impl IntoPatterns for &[String] {
    fn into_patterns(self) -> Vec<String> {
        self.to_vec()
    }
}

impl<const N: usize> IntoPatterns for [&str; N] {
    fn into_patterns(self) -> Vec<String> {
        self.iter().map(|p| p.to_string()).collect()
    }
}

/// Anchors patterns that start with a path separator at `base_dir`
///
/// The rewrite is plain string concatenation: `"/x"` becomes
/// `"<base_dir>/x"` with no separator cleanup, and patterns without a
/// leading separator are returned untouched.
///
/// # Examples
///
/// ```
/// use rhtmx_glob::expand_patterns;
/// use std::path::Path;
///
/// let patterns = vec!["/app/**/*.ts".to_string(), "lib/*.ts".to_string()];
/// assert_eq!(
///     expand_patterns(&patterns, Path::new("/proj")),
///     vec!["/proj/app/**/*.ts", "lib/*.ts"]
/// );
/// ```
pub fn expand_patterns(patterns: &[String], base_dir: &Path) -> Vec<String> {
    let base = base_dir.to_string_lossy();

    patterns
        .iter()
        .map(|pattern| match pattern.chars().next() {
            Some(first) if std::path::is_separator(first) => format!("{base}{pattern}"),
            _ => pattern.clone(),
        })
        .collect()
}

/// Finds every file matching `patterns` under `base_dir` and loads it
///
/// The matcher is called once with the whole expanded pattern set. Loads
/// run concurrently and all of them settle before the result is built; if
/// any load failed, the first failure (in path order) is returned and no
/// table is produced. Zero matches is an empty table, not an error.
pub async fn glob_import<G, L>(
    patterns: impl IntoPatterns,
    base_dir: &Path,
    matcher: &G,
    loader: &L,
) -> Result<ModuleTable<L::Module>, GlobImportError>
where
    G: GlobMatcher + ?Sized,
    L: ModuleLoader + ?Sized,
{
    let patterns = expand_patterns(&patterns.into_patterns(), base_dir);
    debug!(?patterns, base_dir = %base_dir.display(), "importing modules");

    let files = matcher.glob(&patterns, &GlobOptions::new(base_dir)).await?;
    if files.is_empty() {
        debug!(?patterns, "no modules matched");
        return Ok(ModuleTable::new());
    }

    let settled = join_all(files.into_iter().map(|path| async move {
        trace!(path = %path.display(), "loading module");
        loader.load(&path).await.map(|module| (path, module))
    }))
    .await;

    let table = settled.into_iter().collect::<Result<ModuleTable<_>, LoadError>>()?;
    debug!(modules = table.len(), "modules loaded");

    Ok(table)
}
