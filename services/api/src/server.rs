use crate::cli::ServeArgs;
use crate::infra::{scorer_from, AppState};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use purchase_advisor::config::AppConfig;
use purchase_advisor::error::AppError;
use purchase_advisor::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(path) = args.scoring_config.take() {
        config.scoring.path = Some(path);
    }

    telemetry::init(&config.telemetry)?;

    let scorer = Arc::new(scorer_from(&config.scoring)?);
    let thresholds = scorer.config().thresholds.clone();

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_service_routes(scorer)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        buy_threshold = thresholds.buy,
        wait_threshold = thresholds.wait,
        scoring_config = ?config.scoring.path,
        "purchase advisor ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
