use metrics_exporter_prometheus::PrometheusHandle;
use purchase_advisor::advisor::PurchaseScorer;
use purchase_advisor::config::ScoringSource;
use purchase_advisor::error::AppError;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds a scorer from an explicit policy file, falling back to
/// `APP_SCORING_CONFIG` and then the reference calibration.
pub(crate) fn load_scorer(override_path: Option<PathBuf>) -> Result<PurchaseScorer, AppError> {
    let source = match override_path {
        Some(path) => ScoringSource { path: Some(path) },
        None => ScoringSource::from_env(),
    };
    scorer_from(&source)
}

pub(crate) fn scorer_from(source: &ScoringSource) -> Result<PurchaseScorer, AppError> {
    let config = source.load()?;
    Ok(PurchaseScorer::new(config))
}
