use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use mesero_api::application::http::server::http_server::{router, state};
use mesero_api::application::telemetry::init_tracing;
use mesero_api::args::Args;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_tracing(&args.log);

    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port)
        .parse()
        .with_context(|| {
            format!(
                "invalid listen address {}:{}",
                args.server.host, args.server.port
            )
        })?;

    let app_state = state(args.clone()).await?;
    let app = router(app_state)?;

    info!("mesero-api listening on {}", addr);

    axum_server::bind(addr)
        .serve(app.into_make_service())
        .await
        .context("server terminated unexpectedly")?;

    Ok(())
}
