use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use condo_inspect::config::AppConfig;
use condo_inspect::error::AppError;
use condo_inspect::inspection::PendingPolicy;
use condo_inspect::telemetry;
use tracing::info;

use crate::cli::ServeArgs;
use crate::infra::{build_services, AppState};
use crate::routes::api_router;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let policy = if args.rank_policy {
        PendingPolicy::BySeverityRank
    } else {
        PendingPolicy::by_name(config.report.clear_state.clone())
    };
    let services = build_services(policy);

    let app = api_router(&services)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(environment = config.environment.as_str(), %addr, "inspection service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
