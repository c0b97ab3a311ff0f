use metrics_exporter_prometheus::PrometheusHandle;
use scam_score::calculator::ScamScoreEngine;
use scam_score::catalog;
use scam_score::config::CatalogConfig;
use scam_score::error::AppError;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// CSV override from the command line, else `APP_PATHS_CSV`.
pub(crate) fn catalog_source(paths_csv: Option<PathBuf>) -> Option<PathBuf> {
    paths_csv.or_else(|| CatalogConfig::from_env().paths_csv)
}

/// Build the engine from `paths_csv`, or the built-in tables when it is `None`.
pub(crate) fn load_engine(paths_csv: Option<PathBuf>) -> Result<Arc<ScamScoreEngine>, AppError> {
    let catalog = catalog::load(paths_csv.as_deref())?;
    if let Some(path) = &paths_csv {
        info!(path = %path.display(), "using imported path catalog");
    }

    Ok(Arc::new(ScamScoreEngine::new(Arc::new(catalog))))
}
