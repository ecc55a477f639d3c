// File: src/resolver.rs
// Purpose: Convention-based resolution of route modules

use crate::category::{RouteCategory, ROUTES_ROOT};
use crate::options::AppOptions;
use crate::resolved::ResolvedConfiguration;
use rhtmx_glob::{glob_import, FsMatcher, GlobImportError, GlobMatcher, ModuleLoader, ModuleTable};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Errors raised while resolving route modules
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// No project root was given and the current directory is unavailable
    #[error("failed to determine the current directory")]
    CurrentDir(#[source] std::io::Error),

    /// The project root is missing, not a directory, or unreadable
    #[error("project root {path:?} is not a readable directory")]
    ProjectRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Discovering or loading one category failed
    #[error("failed to resolve {category} modules")]
    Category {
        category: RouteCategory,
        #[source]
        source: GlobImportError,
    },
}

/// Resolves route modules by filesystem convention
///
/// Owns the glob matcher and module loader used for discovery. Each call to
/// [`Resolver::resolve`] builds fresh tables; nothing is cached.
#[derive(Debug, Clone)]
pub struct Resolver<G, L> {
    matcher: G,
    loader: L,
}

impl<L: ModuleLoader> Resolver<FsMatcher, L> {
    /// Resolver that walks the real filesystem
    pub fn new(loader: L) -> Self {
        Self::with_matcher(FsMatcher::new(), loader)
    }
}

impl<G: GlobMatcher, L: ModuleLoader> Resolver<G, L> {
    pub fn with_matcher(matcher: G, loader: L) -> Self {
        Self { matcher, loader }
    }

    pub fn matcher(&self) -> &G {
        &self.matcher
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Fills in every category the caller did not supply
    ///
    /// Supplied tables are used as-is and their category is never searched.
    /// Missing categories are discovered concurrently under the project
    /// root. Any failure fails the whole call; no partial configuration is
    /// returned.
    pub async fn resolve<A>(
        &self,
        options: AppOptions<L::Module, A>,
    ) -> Result<ResolvedConfiguration<L::Module, A>, ResolveError> {
        let AppOptions {
            root,
            project_root,
            app,
            init,
            trailing_slash,
            not_found,
            error,
            renderer,
            middleware,
            routes,
        } = options;

        let project_root = resolve_project_root(project_root)?;
        let _listing = tokio::fs::read_dir(&project_root)
            .await
            .map_err(|source| ResolveError::ProjectRoot {
                path: project_root.clone(),
                source,
            })?;

        debug!(project_root = %project_root.display(), "resolving route modules");

        let (not_found, error, renderer, middleware, routes) = tokio::try_join!(
            self.category(RouteCategory::NotFound, not_found, &project_root),
            self.category(RouteCategory::Error, error, &project_root),
            self.category(RouteCategory::Renderer, renderer, &project_root),
            self.category(RouteCategory::Middleware, middleware, &project_root),
            self.category(RouteCategory::Routes, routes, &project_root),
        )?;

        info!(
            project_root = %project_root.display(),
            routes = routes.len(),
            middleware = middleware.len(),
            renderer = renderer.len(),
            not_found = not_found.len(),
            error = error.len(),
            "route modules resolved"
        );

        Ok(ResolvedConfiguration {
            root: root.unwrap_or_else(|| ROUTES_ROOT.to_string()),
            project_root,
            app,
            init,
            trailing_slash,
            not_found,
            error,
            renderer,
            middleware,
            routes,
        })
    }

    /// Discovers and loads the modules of one category under `project_root`
    pub async fn discover(
        &self,
        category: RouteCategory,
        project_root: &Path,
    ) -> Result<ModuleTable<L::Module>, ResolveError> {
        glob_import(category.patterns(), project_root, &self.matcher, &self.loader)
            .await
            .map_err(|source| ResolveError::Category { category, source })
    }

    async fn category(
        &self,
        category: RouteCategory,
        supplied: Option<ModuleTable<L::Module>>,
        project_root: &Path,
    ) -> Result<ModuleTable<L::Module>, ResolveError> {
        match supplied {
            Some(table) => {
                debug!(%category, modules = table.len(), "using supplied modules");
                Ok(table)
            }
            None => self.discover(category, project_root).await,
        }
    }
}

fn resolve_project_root(project_root: Option<PathBuf>) -> Result<PathBuf, ResolveError> {
    match project_root {
        Some(path) if path.is_absolute() => Ok(path),
        Some(path) => std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .map_err(ResolveError::CurrentDir),
        None => std::env::current_dir().map_err(ResolveError::CurrentDir),
    }
}
