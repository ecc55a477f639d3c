//! Integration tests for rhtmx-app
//!
//! Each test builds a throwaway project tree and resolves it end to end:
//! - Category discovery and exclusion rules
//! - Caller overrides
//! - Pass-through fields
//! - Failure atomicity
//! - Assembly through create_app

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use rhtmx_app::rhtmx_glob::{FsMatcher, GlobError, GlobImportError, GlobMatcher, GlobOptions, LoadError};
use rhtmx_app::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Route test logs through the harness so they only show on failure
fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn project(files: &[&str]) -> TempDir {
    init_tracing();
    let temp = TempDir::new().unwrap();
    for file in files {
        let path = temp.path().join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, format!("// {file}")).unwrap();
    }
    temp
}

fn keys<M>(table: &ModuleTable<M>, root: &Path) -> Vec<String> {
    table
        .paths()
        .map(|path| path.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
        .collect()
}

/// Wraps the filesystem matcher and records every pattern set it receives
#[derive(Default)]
struct RecordingMatcher {
    inner: FsMatcher,
    calls: Mutex<Vec<Vec<String>>>,
}

impl RecordingMatcher {
    fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GlobMatcher for RecordingMatcher {
    async fn glob(&self, patterns: &[String], options: &GlobOptions) -> Result<Vec<PathBuf>, GlobError> {
        self.calls.lock().unwrap().push(patterns.to_vec());
        self.inner.glob(patterns, options).await
    }
}

/// Typed route modules, the way an application registers them
#[derive(Debug, Clone, PartialEq)]
enum RouteModule {
    Page(&'static str),
    NotFound,
    Middleware,
}

#[tokio::test]
async fn test_resolves_each_category() {
    let temp = project(&["app/routes/_404.ts", "app/routes/blog/post.mdx"]);
    let resolver = Resolver::new(SourceLoader);

    let config = resolver
        .resolve(AppOptions::<SourceModule>::new().with_project_root(temp.path()))
        .await
        .unwrap();

    assert_eq!(keys(&config.not_found, temp.path()), vec!["app/routes/_404.ts"]);
    assert_eq!(keys(&config.routes, temp.path()), vec!["app/routes/blog/post.mdx"]);
    assert!(config.middleware.is_empty());
    assert!(config.error.is_empty());
    assert!(config.renderer.is_empty());

    let not_found = config.not_found.get(temp.path().join("app/routes/_404.ts")).unwrap();
    assert_eq!(not_found.source, "// app/routes/_404.ts");

    assert_eq!(config.root, "/app/routes");
    assert_eq!(config.project_root, temp.path());
    assert_eq!(config.route_paths(), vec!["/blog/post"]);
}

#[tokio::test]
async fn test_special_and_excluded_files() {
    let temp = project(&[
        "app/routes/_middleware.ts",
        "app/routes/admin/_middleware.tsx",
        "app/routes/_renderer.tsx",
        "app/routes/_error.tsx",
        "app/routes/about.mdx",
        "app/routes/about.test.ts",
        "app/routes/about.spec.tsx",
        "app/routes/$counter.tsx",
        "app/routes/notes.txt",
        "app/routes/.well-known/security.txt.ts",
        "app/components/button.tsx",
    ]);
    let resolver = Resolver::new(SourceLoader);

    let config = resolver
        .resolve(AppOptions::<SourceModule>::new().with_project_root(temp.path()))
        .await
        .unwrap();

    assert_eq!(
        keys(&config.routes, temp.path()),
        vec!["app/routes/.well-known/security.txt.ts", "app/routes/about.mdx"]
    );
    assert_eq!(
        keys(&config.middleware, temp.path()),
        vec!["app/routes/_middleware.ts", "app/routes/admin/_middleware.tsx"]
    );
    assert_eq!(keys(&config.renderer, temp.path()), vec!["app/routes/_renderer.tsx"]);
    assert_eq!(keys(&config.error, temp.path()), vec!["app/routes/_error.tsx"]);
    assert!(config.not_found.is_empty());
}

#[tokio::test]
async fn test_empty_project_resolves_to_empty_tables() {
    let temp = TempDir::new().unwrap();
    let resolver = Resolver::new(SourceLoader);

    let config = resolver
        .resolve(AppOptions::<SourceModule>::new().with_project_root(temp.path()))
        .await
        .unwrap();

    assert_eq!(config.module_count(), 0);
}

#[tokio::test]
async fn test_supplied_categories_are_never_searched() {
    let temp = project(&["app/routes/_404.ts", "app/routes/index.ts", "app/routes/_error.ts"]);
    let resolver = Resolver::with_matcher(RecordingMatcher::default(), SourceLoader);

    let custom_not_found: ModuleTable<SourceModule> = vec![(
        PathBuf::from("/virtual/404.ts"),
        SourceModule {
            path: PathBuf::from("/virtual/404.ts"),
            source: "custom".to_string(),
        },
    )]
    .into_iter()
    .collect();

    let options = AppOptions::<SourceModule>::new()
        .with_project_root(temp.path())
        .with_not_found(custom_not_found.clone())
        .with_routes(ModuleTable::new());

    let config = resolver.resolve(options).await.unwrap();

    // Override is total: nothing discovered is merged in
    assert_eq!(config.not_found, custom_not_found);
    assert!(config.routes.is_empty());
    assert_eq!(keys(&config.error, temp.path()), vec!["app/routes/_error.ts"]);

    let calls = resolver.matcher().calls();
    assert_eq!(calls.len(), 3);
    for patterns in &calls {
        for pattern in patterns {
            assert!(!pattern.contains("_404"), "{pattern}");
            assert!(!pattern.contains("md|mdx"), "{pattern}");
        }
    }
}

#[tokio::test]
async fn test_fully_supplied_options_skip_discovery() {
    let temp = TempDir::new().unwrap();
    let resolver = Resolver::with_matcher(RecordingMatcher::default(), SourceLoader);

    let mut options = AppOptions::<SourceModule>::new().with_project_root(temp.path());
    for category in RouteCategory::ALL {
        options = options.with_modules(category, ModuleTable::<SourceModule>::new());
    }

    let config = resolver.resolve(options).await.unwrap();
    assert_eq!(config.module_count(), 0);
    assert!(resolver.matcher().calls().is_empty());
}

#[tokio::test]
async fn test_matcher_receives_patterns_anchored_at_project_root() {
    let temp = TempDir::new().unwrap();
    let resolver = Resolver::with_matcher(RecordingMatcher::default(), SourceLoader);

    resolver
        .discover(RouteCategory::Routes, temp.path())
        .await
        .unwrap();

    let base = temp.path().to_string_lossy();
    assert_eq!(
        resolver.matcher().calls(),
        vec![vec![
            format!("{base}/app/routes/**/!(_*|$*|*.test|*.spec).(ts|tsx|md|mdx)"),
            format!("{base}/app/routes/.well-known/**/!(_*|$*|*.test|*.spec).(ts|tsx|md|mdx)"),
        ]]
    );
}

#[tokio::test]
async fn test_registry_modules_are_typed() {
    let temp = project(&["app/routes/_404.ts", "app/routes/_middleware.ts", "app/routes/index.ts"]);
    let registry = ModuleRegistry::new(temp.path())
        .with_module("app/routes/_404.ts", || Ok(RouteModule::NotFound))
        .with_module("app/routes/_middleware.ts", || Ok(RouteModule::Middleware))
        .with_module("app/routes/index.ts", || Ok(RouteModule::Page("home")));
    let resolver = Resolver::new(registry);

    let config = resolver
        .resolve(AppOptions::<RouteModule>::new().with_project_root(temp.path()))
        .await
        .unwrap();

    assert_eq!(
        config.routes.get(temp.path().join("app/routes/index.ts")),
        Some(&RouteModule::Page("home"))
    );
    assert_eq!(config.not_found.iter().next().map(|(_, m)| m), Some(&RouteModule::NotFound));
    assert_eq!(config.middleware.iter().next().map(|(_, m)| m), Some(&RouteModule::Middleware));
}

#[tokio::test]
async fn test_one_failing_module_fails_resolution() {
    let temp = project(&["app/routes/_404.ts", "app/routes/index.ts", "app/routes/broken.ts"]);
    let registry = ModuleRegistry::new(temp.path())
        .with_module("app/routes/_404.ts", || Ok(RouteModule::NotFound))
        .with_module("app/routes/index.ts", || Ok(RouteModule::Page("home")))
        .with_module("app/routes/broken.ts", || anyhow::bail!("threw during initialization"));
    let resolver = Resolver::new(registry);

    let err = resolver
        .resolve(AppOptions::<RouteModule>::new().with_project_root(temp.path()))
        .await
        .unwrap_err();

    match err {
        ResolveError::Category {
            category,
            source: GlobImportError::Load(LoadError::Init { path, .. }),
        } => {
            assert_eq!(category, RouteCategory::Routes);
            assert_eq!(path, temp.path().join("app/routes/broken.ts"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_project_root_fails() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing");
    let resolver = Resolver::new(SourceLoader);

    let err = resolver
        .resolve(AppOptions::<SourceModule>::new().with_project_root(&missing))
        .await
        .unwrap_err();

    assert!(matches!(err, ResolveError::ProjectRoot { path, .. } if path == missing));
}

#[tokio::test]
async fn test_project_root_that_is_a_file_fails() {
    let temp = project(&["rhtmx.toml"]);
    let file = temp.path().join("rhtmx.toml");
    let resolver = Resolver::new(SourceLoader);

    let err = resolver
        .resolve(AppOptions::<SourceModule>::new().with_project_root(&file))
        .await
        .unwrap_err();

    assert!(matches!(err, ResolveError::ProjectRoot { path, .. } if path == file));
}

#[tokio::test]
async fn test_project_root_with_glob_characters() {
    let temp = TempDir::new().unwrap();
    let site = temp.path().join("site (copy)");
    for file in ["app/routes/_404.ts", "app/routes/blog/post.mdx", "app/routes/_middleware.ts"] {
        let path = site.join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, format!("// {file}")).unwrap();
    }
    let resolver = Resolver::new(SourceLoader);

    let config = resolver
        .resolve(AppOptions::<SourceModule>::new().with_project_root(&site))
        .await
        .unwrap();

    assert_eq!(keys(&config.not_found, &site), vec!["app/routes/_404.ts"]);
    assert_eq!(keys(&config.middleware, &site), vec!["app/routes/_middleware.ts"]);
    assert_eq!(keys(&config.routes, &site), vec!["app/routes/blog/post.mdx"]);
    assert_eq!(config.route_paths(), vec!["/blog/post"]);
}

#[tokio::test]
async fn test_pass_through_fields() {
    let temp = TempDir::new().unwrap();
    let resolver = Resolver::new(SourceLoader);

    let options = AppOptions::<SourceModule, Vec<String>>::new()
        .with_project_root(temp.path())
        .with_root("/pages")
        .with_app(vec!["existing".to_string()])
        .with_init(|app: &mut Vec<String>| app.push("initialized".to_string()))
        .with_trailing_slash(true);

    let config = resolver.resolve(options).await.unwrap();

    assert_eq!(config.root, "/pages");
    assert_eq!(config.trailing_slash, Some(true));

    let mut app = config.app.clone().unwrap();
    (config.init.as_ref().unwrap())(&mut app);
    assert_eq!(app, vec!["existing", "initialized"]);
}

#[tokio::test]
async fn test_options_from_config_file() {
    let temp = project(&["app/routes/index.ts"]);
    let config_path = temp.path().join("rhtmx.toml");
    fs::write(
        &config_path,
        format!(
            "[routing]\nproject_root = {:?}\ntrailing_slash = false\n",
            temp.path().to_string_lossy()
        ),
    )
    .unwrap();

    let file_config = ResolverConfig::load(&config_path).unwrap();
    let resolver = Resolver::new(SourceLoader);
    let config = resolver
        .resolve(AppOptions::<SourceModule>::from_config(&file_config))
        .await
        .unwrap();

    assert_eq!(config.project_root, temp.path());
    assert_eq!(config.trailing_slash, Some(false));
    assert_eq!(config.route_paths(), vec!["/"]);
}

/// Application built by the test assembler
#[derive(Debug)]
struct App {
    routes: Vec<String>,
    has_not_found: bool,
}

struct RouteListAssembler;

#[async_trait]
impl AppAssembler<SourceModule, ()> for RouteListAssembler {
    type App = App;

    async fn assemble(&self, config: ResolvedConfiguration<SourceModule>) -> anyhow::Result<App> {
        Ok(App {
            routes: config.route_paths(),
            has_not_found: !config.not_found.is_empty(),
        })
    }
}

#[tokio::test]
async fn test_create_app_with_assembler() {
    let temp = project(&["app/routes/index.ts", "app/routes/users/index.tsx", "app/routes/_404.tsx"]);
    let resolver = Resolver::new(SourceLoader);

    let app = create_app(
        AppOptions::<SourceModule>::new().with_project_root(temp.path()),
        &resolver,
        &RouteListAssembler,
    )
    .await
    .unwrap();

    assert_eq!(app.routes, vec!["/", "/users"]);
    assert!(app.has_not_found);
}

#[tokio::test]
async fn test_create_app_with_closure() {
    let temp = project(&["app/routes/about.md"]);
    let resolver = Resolver::new(Arc::new(SourceLoader));
    let assembled = Arc::new(Mutex::new(0usize));

    let counter = assembled.clone();
    let routes = create_app(
        AppOptions::<SourceModule>::new().with_project_root(temp.path()),
        &resolver,
        &move |config: ResolvedConfiguration<SourceModule>| {
            *counter.lock().unwrap() += 1;
            async move { Ok::<_, anyhow::Error>(config.routes.len()) }
        },
    )
    .await
    .unwrap();

    assert_eq!(routes, 1);
    assert_eq!(*assembled.lock().unwrap(), 1);
}

#[tokio::test]
async fn test_assembler_failure_is_propagated() {
    let temp = TempDir::new().unwrap();
    let resolver = Resolver::new(SourceLoader);

    let err = create_app(
        AppOptions::<SourceModule>::new().with_project_root(temp.path()),
        &resolver,
        &|_config: ResolvedConfiguration<SourceModule>| async move {
            Err::<(), _>(anyhow::anyhow!("rejected"))
        },
    )
    .await
    .unwrap_err();

    match err {
        AppError::Assemble(source) => assert_eq!(source.to_string(), "rejected"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_resolution_failure_skips_assembly() {
    let temp = TempDir::new().unwrap();
    let resolver = Resolver::new(SourceLoader);
    let called = Arc::new(Mutex::new(false));

    let flag = called.clone();
    let err = create_app(
        AppOptions::<SourceModule>::new().with_project_root(temp.path().join("missing")),
        &resolver,
        &move |_config: ResolvedConfiguration<SourceModule>| {
            *flag.lock().unwrap() = true;
            async move { Ok::<_, anyhow::Error>(()) }
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::Resolve(ResolveError::ProjectRoot { .. })));
    assert!(!*called.lock().unwrap());
}
