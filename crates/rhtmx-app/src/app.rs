// File: src/app.rs
// Purpose: Single entry point: resolve route modules, then assemble the app

use crate::options::AppOptions;
use crate::resolved::ResolvedConfiguration;
use crate::resolver::{ResolveError, Resolver};
use async_trait::async_trait;
use rhtmx_glob::{GlobMatcher, ModuleLoader};
use std::future::Future;
use tracing::debug;

/// Errors surfaced by [`create_app`]
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The assembler rejected the configuration
    #[error("application assembly failed")]
    Assemble(#[source] anyhow::Error),
}

/// Turns a resolved configuration into an application instance
///
/// This is where routes become handlers; resolution does not interpret the
/// modules it hands over. Plain async closures implement it too.
#[async_trait]
pub trait AppAssembler<M, A>: Send + Sync {
    type App;

    async fn assemble(&self, config: ResolvedConfiguration<M, A>) -> anyhow::Result<Self::App>;
}

#[async_trait]
impl<M, A, F, Fut, T> AppAssembler<M, A> for F
where
    M: Send + 'static,
    A: Send + 'static,
    F: Fn(ResolvedConfiguration<M, A>) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<T>> + Send + 'static,
    T: Send + 'static,
{
    type App = T;

    async fn assemble(&self, config: ResolvedConfiguration<M, A>) -> anyhow::Result<T> {
        (self)(config).await
    }
}

/// Resolves every route category and passes the result to `assembler`
///
/// # Examples
///
/// ```no_run
/// use rhtmx_app::{create_app, AppOptions, ResolvedConfiguration, Resolver};
/// use rhtmx_glob::{SourceLoader, SourceModule};
///
/// # async fn run() -> Result<(), rhtmx_app::AppError> {
/// let resolver = Resolver::new(SourceLoader);
/// let route_count = create_app(
///     AppOptions::<SourceModule>::new().with_project_root("/srv/site"),
///     &resolver,
///     &|config: ResolvedConfiguration<SourceModule>| async move {
///         Ok::<_, anyhow::Error>(config.routes.len())
///     },
/// )
/// .await?;
/// println!("{route_count} routes");
/// # Ok(())
/// # }
/// ```
pub async fn create_app<G, L, A, S>(
    options: AppOptions<L::Module, A>,
    resolver: &Resolver<G, L>,
    assembler: &S,
) -> Result<S::App, AppError>
where
    G: GlobMatcher,
    L: ModuleLoader,
    S: AppAssembler<L::Module, A> + ?Sized,
{
    let config = resolver.resolve(options).await?;
    debug!(modules = config.module_count(), root = %config.root, "assembling application");

    assembler.assemble(config).await.map_err(AppError::Assemble)
}
