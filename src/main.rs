use std::sync::Arc;

use chartview::source::MockApi;
use chartview::{api, config};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    chartview::init_tracing();
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let source = Arc::new(MockApi::with_seed_data());
    for patient in source.patients() {
        tracing::info!(id = %patient.id, name = %patient.name, "seeded patient");
    }

    let bind = std::env::args().nth(1).unwrap_or_else(|| config::DEFAULT_BIND.to_string());
    let app = api::records_router(source);

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!(%bind, "viewer API listening");
    axum::serve(listener, app).await
}
