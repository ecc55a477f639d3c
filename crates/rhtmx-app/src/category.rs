// File: src/category.rs
// Purpose: Route categories and their canonical discovery patterns

use std::fmt;

/// Directory route modules live under, relative to the project root
pub const ROUTES_ROOT: &str = "/app/routes";

/// Kind of module a file provides, decided by its name and location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RouteCategory {
    /// `_404.ts` / `_404.tsx`
    NotFound,
    /// `_error.ts` / `_error.tsx`
    Error,
    /// `_renderer.tsx`
    Renderer,
    /// `_middleware.ts` / `_middleware.tsx`
    Middleware,
    /// Every other page or content file
    Routes,
}

impl RouteCategory {
    pub const ALL: [RouteCategory; 5] = [
        RouteCategory::NotFound,
        RouteCategory::Error,
        RouteCategory::Renderer,
        RouteCategory::Middleware,
        RouteCategory::Routes,
    ];

    /// Upper-case option key (`NOT_FOUND`, `ROUTES`, ...)
    pub fn name(self) -> &'static str {
        match self {
            RouteCategory::NotFound => "NOT_FOUND",
            RouteCategory::Error => "ERROR",
            RouteCategory::Renderer => "RENDERER",
            RouteCategory::Middleware => "MIDDLEWARE",
            RouteCategory::Routes => "ROUTES",
        }
    }

    /// Discovery patterns, rooted at [`ROUTES_ROOT`]
    ///
    /// Regular routes exclude `_`/`$` prefixed files and `.test`/`.spec`
    /// files through glob negation. `**` does not enter dot-directories, so
    /// `.well-known` gets its own pattern.
    pub fn patterns(self) -> &'static [&'static str] {
        match self {
            RouteCategory::NotFound => &["/app/routes/**/_404.(ts|tsx)"],
            RouteCategory::Error => &["/app/routes/**/_error.(ts|tsx)"],
            RouteCategory::Renderer => &["/app/routes/**/_renderer.tsx"],
            RouteCategory::Middleware => &["/app/routes/**/_middleware.(ts|tsx)"],
            RouteCategory::Routes => &[
                "/app/routes/**/!(_*|$*|*.test|*.spec).(ts|tsx|md|mdx)",
                "/app/routes/.well-known/**/!(_*|$*|*.test|*.spec).(ts|tsx|md|mdx)",
            ],
        }
    }
}

impl fmt::Display for RouteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
