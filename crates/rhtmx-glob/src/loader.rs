//! Module loaders
//!
//! A [`ModuleLoader`] turns a matched file path into a loaded module. Route
//! modules are registered up front in a [`ModuleRegistry`] and looked up by
//! their path relative to the project, so discovery stays filesystem driven
//! while the module code itself is compiled in.

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tracing::trace;

/// Errors raised while loading a single module
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// No module is available for the path
    #[error("no module registered for {path:?}")]
    NotFound { path: PathBuf },

    /// The file could not be read
    #[error("failed to read module {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The module's own initialization failed
    #[error("module {path:?} failed to initialize")]
    Init {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

impl LoadError {
    /// The path that failed to load
    pub fn path(&self) -> &Path {
        match self {
            LoadError::NotFound { path } | LoadError::Io { path, .. } | LoadError::Init { path, .. } => path,
        }
    }
}

/// Loads the module behind a file path
#[async_trait]
pub trait ModuleLoader: Send + Sync {
    /// What a loaded module looks like
    type Module: Send + 'static;

    async fn load(&self, path: &Path) -> Result<Self::Module, LoadError>;
}

#[async_trait]
impl<L: ModuleLoader + ?Sized> ModuleLoader for Arc<L> {
    type Module = L::Module;

    async fn load(&self, path: &Path) -> Result<Self::Module, LoadError> {
        (**self).load(path).await
    }
}

type Factory<M> = Arc<dyn Fn() -> anyhow::Result<M> + Send + Sync>;

/// Startup-time registry of module factories
///
/// Modules are keyed by their path relative to `base_dir`, always with `/`
/// separators (`app/routes/blog/post.tsx`). Every load runs the factory
/// again; nothing is cached.
///
/// # Examples
///
/// ```
/// use rhtmx_glob::ModuleRegistry;
///
/// let registry = ModuleRegistry::new("/proj")
///     .with_module("app/routes/index.ts", || Ok("home"))
///     .with_module("/app/routes/about.ts", || Ok("about"));
///
/// assert_eq!(registry.ids(), vec!["app/routes/about.ts", "app/routes/index.ts"]);
/// ```
pub struct ModuleRegistry<M> {
    base_dir: PathBuf,
    factories: HashMap<String, Factory<M>>,
}

impl<M> ModuleRegistry<M> {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            factories: HashMap::new(),
        }
    }

    /// Registers a factory, replacing any previous one with the same id
    pub fn register<F>(&mut self, id: impl AsRef<str>, factory: F)
    where
        F: Fn() -> anyhow::Result<M> + Send + Sync + 'static,
    {
        self.factories.insert(normalize_id(id.as_ref()), Arc::new(factory));
    }

    /// Builder form of [`ModuleRegistry::register`]
    pub fn with_module<F>(mut self, id: impl AsRef<str>, factory: F) -> Self
    where
        F: Fn() -> anyhow::Result<M> + Send + Sync + 'static,
    {
        self.register(id, factory);
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Registered ids, sorted
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.factories.contains_key(&normalize_id(id))
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// The id a file path is looked up under
    pub fn module_id(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.base_dir).ok()?;
        let id = relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(name) => Some(name.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/");

        (!id.is_empty()).then_some(id)
    }
}

impl<M> fmt::Debug for ModuleRegistry<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field("base_dir", &self.base_dir)
            .field("ids", &self.ids())
            .finish()
    }
}

#[async_trait]
impl<M: Send + 'static> ModuleLoader for ModuleRegistry<M> {
    type Module = M;

    async fn load(&self, path: &Path) -> Result<M, LoadError> {
        let factory = self
            .module_id(path)
            .and_then(|id| self.factories.get(&id))
            .ok_or_else(|| LoadError::NotFound {
                path: path.to_path_buf(),
            })?;

        trace!(path = %path.display(), "instantiating registered module");
        factory().map_err(|source| LoadError::Init {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn normalize_id(id: &str) -> String {
    id.replace('\\', "/")
        .split('/')
        .filter(|part| !part.is_empty() && *part != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// A module whose contents are its source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceModule {
    pub path: PathBuf,
    pub source: String,
}

impl SourceModule {
    /// File extension without the dot (`"mdx"`, `"tsx"`, ...)
    pub fn extension(&self) -> Option<&str> {
        self.path.extension().and_then(|ext| ext.to_str())
    }
}

/// Loader that reads each file's text
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceLoader;

#[async_trait]
impl ModuleLoader for SourceLoader {
    type Module = SourceModule;

    async fn load(&self, path: &Path) -> Result<SourceModule, LoadError> {
        let source = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(SourceModule {
            path: path.to_path_buf(),
            source,
        })
    }
}
