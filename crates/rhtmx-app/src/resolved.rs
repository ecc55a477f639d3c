// File: src/resolved.rs
// Purpose: Fully resolved configuration handed to the application assembler

use crate::category::RouteCategory;
use crate::options::InitHook;
use rhtmx_glob::ModuleTable;
use std::fmt;
use std::path::{Path, PathBuf};

/// Resolved configuration: one module table per category plus the
/// pass-through fields
///
/// Every module table is present, either supplied by the caller or
/// discovered. `app`, `init` and `trailing_slash` are forwarded untouched.
#[derive(Clone)]
pub struct ResolvedConfiguration<M, A = ()> {
    pub root: String,
    pub project_root: PathBuf,
    pub app: Option<A>,
    pub init: Option<InitHook<A>>,
    pub trailing_slash: Option<bool>,
    pub not_found: ModuleTable<M>,
    pub error: ModuleTable<M>,
    pub renderer: ModuleTable<M>,
    pub middleware: ModuleTable<M>,
    pub routes: ModuleTable<M>,
}

impl<M, A> ResolvedConfiguration<M, A> {
    /// The module table for a category
    pub fn table(&self, category: RouteCategory) -> &ModuleTable<M> {
        match category {
            RouteCategory::NotFound => &self.not_found,
            RouteCategory::Error => &self.error,
            RouteCategory::Renderer => &self.renderer,
            RouteCategory::Middleware => &self.middleware,
            RouteCategory::Routes => &self.routes,
        }
    }

    /// Total modules across all categories
    pub fn module_count(&self) -> usize {
        RouteCategory::ALL
            .into_iter()
            .map(|category| self.table(category).len())
            .sum()
    }

    /// Directory `root` points at inside the project
    pub fn routes_dir(&self) -> PathBuf {
        self.project_root.join(self.root.trim_start_matches('/'))
    }

    /// URL path for a route file (`.../blog/post.mdx` → `/blog/post`)
    ///
    /// `None` when the file is outside [`ResolvedConfiguration::routes_dir`].
    pub fn route_path(&self, file: &Path) -> Option<String> {
        route_path_for(&self.routes_dir(), file)
    }

    /// URL paths of every regular route, in file order
    pub fn route_paths(&self) -> Vec<String> {
        let routes_dir = self.routes_dir();
        self.routes
            .paths()
            .filter_map(|file| route_path_for(&routes_dir, file))
            .collect()
    }
}

/// Convert a file below `routes_dir` into its route path
/// (e.g., `routes/index.ts` -> "/", `routes/users/index.tsx` -> "/users")
fn route_path_for(routes_dir: &Path, file: &Path) -> Option<String> {
    let relative = file.strip_prefix(routes_dir).ok()?;

    let route = relative
        .with_extension("")
        .to_string_lossy()
        .replace('\\', "/");

    if route == "index" || route.is_empty() {
        Some("/".to_string())
    } else if let Some(parent) = route.strip_suffix("/index") {
        Some(format!("/{}", parent))
    } else {
        Some(format!("/{}", route))
    }
}

impl<M: fmt::Debug, A: fmt::Debug> fmt::Debug for ResolvedConfiguration<M, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedConfiguration")
            .field("root", &self.root)
            .field("project_root", &self.project_root)
            .field("app", &self.app)
            .field("init", &self.init.is_some())
            .field("trailing_slash", &self.trailing_slash)
            .field("not_found", &self.not_found)
            .field("error", &self.error)
            .field("renderer", &self.renderer)
            .field("middleware", &self.middleware)
            .field("routes", &self.routes)
            .finish()
    }
}
