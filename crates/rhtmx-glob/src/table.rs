//! Path-keyed module tables

use std::collections::btree_map::{self, BTreeMap};
use std::path::{Path, PathBuf};

/// Loaded modules keyed by absolute file path
///
/// Built once per discovery and never mutated afterwards. Iteration is in
/// path order so output is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleTable<M> {
    modules: BTreeMap<PathBuf, M>,
}

impl<M> ModuleTable<M> {
    /// An empty table
    pub fn new() -> Self {
        Self {
            modules: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&M> {
        self.modules.get(path.as_ref())
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.modules.contains_key(path.as_ref())
    }

    /// File paths in order
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.modules.keys().map(PathBuf::as_path)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, PathBuf, M> {
        self.modules.iter()
    }

    pub fn into_inner(self) -> BTreeMap<PathBuf, M> {
        self.modules
    }
}

impl<M> Default for ModuleTable<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> FromIterator<(PathBuf, M)> for ModuleTable<M> {
    fn from_iter<I: IntoIterator<Item = (PathBuf, M)>>(iter: I) -> Self {
        Self {
            modules: iter.into_iter().collect(),
        }
    }
}

impl<M> IntoIterator for ModuleTable<M> {
    type Item = (PathBuf, M);
    type IntoIter = btree_map::IntoIter<PathBuf, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.modules.into_iter()
    }
}

impl<'a, M> IntoIterator for &'a ModuleTable<M> {
    type Item = (&'a PathBuf, &'a M);
    type IntoIter = btree_map::Iter<'a, PathBuf, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.modules.iter()
    }
}
