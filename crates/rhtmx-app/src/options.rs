// File: src/options.rs
// Purpose: Caller-supplied partial configuration for route resolution

use crate::category::RouteCategory;
use crate::config::ResolverConfig;
use rhtmx_glob::ModuleTable;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Hook run by the assembler against the application instance
pub type InitHook<A> = Arc<dyn Fn(&mut A) + Send + Sync>;

/// Partial configuration for [`crate::Resolver::resolve`]
///
/// Every field is optional. A module table supplied here replaces discovery
/// for its category completely; it is never merged with discovered files.
///
/// # Examples
///
/// ```
/// use rhtmx_app::{AppOptions, RouteCategory};
/// use rhtmx_glob::ModuleTable;
///
/// let options: AppOptions<&str> = AppOptions::new()
///     .with_project_root("/srv/site")
///     .with_trailing_slash(true)
///     .with_modules(RouteCategory::NotFound, ModuleTable::new());
///
/// assert!(options.supplied(RouteCategory::NotFound).is_some());
/// assert!(options.supplied(RouteCategory::Routes).is_none());
/// ```
#[derive(Clone)]
pub struct AppOptions<M, A = ()> {
    pub root: Option<String>,
    pub project_root: Option<PathBuf>,
    pub app: Option<A>,
    pub init: Option<InitHook<A>>,
    pub trailing_slash: Option<bool>,
    pub not_found: Option<ModuleTable<M>>,
    pub error: Option<ModuleTable<M>>,
    pub renderer: Option<ModuleTable<M>>,
    pub middleware: Option<ModuleTable<M>>,
    pub routes: Option<ModuleTable<M>>,
}

impl<M, A> AppOptions<M, A> {
    /// Nothing supplied: every category is discovered
    pub fn new() -> Self {
        Self {
            root: None,
            project_root: None,
            app: None,
            init: None,
            trailing_slash: None,
            not_found: None,
            error: None,
            renderer: None,
            middleware: None,
            routes: None,
        }
    }

    /// Seeds the pass-through fields from a config file
    pub fn from_config(config: &ResolverConfig) -> Self {
        Self {
            root: Some(config.routing.root.clone()),
            project_root: config.routing.project_root.clone(),
            trailing_slash: config.routing.trailing_slash,
            ..Self::new()
        }
    }

    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn with_project_root(mut self, project_root: impl Into<PathBuf>) -> Self {
        self.project_root = Some(project_root.into());
        self
    }

    pub fn with_app(mut self, app: A) -> Self {
        self.app = Some(app);
        self
    }

    pub fn with_init<F>(mut self, init: F) -> Self
    where
        F: Fn(&mut A) + Send + Sync + 'static,
    {
        self.init = Some(Arc::new(init));
        self
    }

    pub fn with_trailing_slash(mut self, trailing_slash: bool) -> Self {
        self.trailing_slash = Some(trailing_slash);
        self
    }

    /// Supplies the module table for one category, disabling its discovery
    pub fn with_modules(mut self, category: RouteCategory, modules: ModuleTable<M>) -> Self {
        *self.slot_mut(category) = Some(modules);
        self
    }

    pub fn with_not_found(self, modules: ModuleTable<M>) -> Self {
        self.with_modules(RouteCategory::NotFound, modules)
    }

    pub fn with_error(self, modules: ModuleTable<M>) -> Self {
        self.with_modules(RouteCategory::Error, modules)
    }

    pub fn with_renderer(self, modules: ModuleTable<M>) -> Self {
        self.with_modules(RouteCategory::Renderer, modules)
    }

    pub fn with_middleware(self, modules: ModuleTable<M>) -> Self {
        self.with_modules(RouteCategory::Middleware, modules)
    }

    pub fn with_routes(self, modules: ModuleTable<M>) -> Self {
        self.with_modules(RouteCategory::Routes, modules)
    }

    /// The caller-supplied table for a category, if any
    pub fn supplied(&self, category: RouteCategory) -> Option<&ModuleTable<M>> {
        match category {
            RouteCategory::NotFound => self.not_found.as_ref(),
            RouteCategory::Error => self.error.as_ref(),
            RouteCategory::Renderer => self.renderer.as_ref(),
            RouteCategory::Middleware => self.middleware.as_ref(),
            RouteCategory::Routes => self.routes.as_ref(),
        }
    }

    fn slot_mut(&mut self, category: RouteCategory) -> &mut Option<ModuleTable<M>> {
        match category {
            RouteCategory::NotFound => &mut self.not_found,
            RouteCategory::Error => &mut self.error,
            RouteCategory::Renderer => &mut self.renderer,
            RouteCategory::Middleware => &mut self.middleware,
            RouteCategory::Routes => &mut self.routes,
        }
    }
}

impl<M, A> Default for AppOptions<M, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M, A: fmt::Debug> fmt::Debug for AppOptions<M, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let supplied: Vec<&str> = RouteCategory::ALL
            .into_iter()
            .filter(|category| self.supplied(*category).is_some())
            .map(RouteCategory::name)
            .collect();

        f.debug_struct("AppOptions")
            .field("root", &self.root)
            .field("project_root", &self.project_root)
            .field("app", &self.app)
            .field("init", &self.init.is_some())
            .field("trailing_slash", &self.trailing_slash)
            .field("supplied", &supplied)
            .finish()
    }
}
