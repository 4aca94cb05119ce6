use metrics_exporter_prometheus::PrometheusHandle;
use plan_advisor::advisor::{PlanCatalog, PlanCatalogImporter};
use plan_advisor::error::AppError;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load the CSV catalog at `path`, or the built-in reference plans when no path is configured.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<PlanCatalog, AppError> {
    match path {
        Some(path) => {
            let catalog = PlanCatalogImporter::from_path(path)?;
            info!(path = %path.display(), plans = catalog.len(), "loaded plan catalog export");
            Ok(catalog)
        }
        None => Ok(PlanCatalog::standard()),
    }
}
