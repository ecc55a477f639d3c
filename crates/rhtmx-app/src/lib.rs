// RHTMX App - convention-based route module resolution
// Discovers route modules under app/routes and hands them to an assembler

//! Files under `app/routes` are sorted into five categories by name:
//!
//! | Category | Files |
//! |---|---|
//! | `NOT_FOUND` | `_404.ts`, `_404.tsx` at any depth |
//! | `ERROR` | `_error.ts`, `_error.tsx` at any depth |
//! | `RENDERER` | `_renderer.tsx` at any depth |
//! | `MIDDLEWARE` | `_middleware.ts`, `_middleware.tsx` at any depth |
//! | `ROUTES` | every other `.ts`/`.tsx`/`.md`/`.mdx` file, except names starting with `_` or `$` and `*.test`/`*.spec` files, plus the same under `.well-known` |
//!
//! [`Resolver::resolve`] discovers and eagerly loads each category the
//! caller did not supply, and [`create_app`] hands the result to an
//! [`AppAssembler`].

pub mod app;
pub mod category;
pub mod config;
pub mod options;
pub mod resolved;
pub mod resolver;

// Re-export framework types
pub use app::{create_app, AppAssembler, AppError};
pub use category::{RouteCategory, ROUTES_ROOT};
pub use config::{ResolverConfig, RoutingConfig};
pub use options::{AppOptions, InitHook};
pub use resolved::ResolvedConfiguration;
pub use resolver::{ResolveError, Resolver};

// Re-export the discovery layer
pub use rhtmx_glob;
pub use rhtmx_glob::{ModuleLoader, ModuleRegistry, ModuleTable, SourceLoader, SourceModule};
