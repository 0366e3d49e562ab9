use std::{net::SocketAddr, sync::Arc};

use clap::Parser;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use foodsense_api::application::http::server::http_server::{router, state};
use foodsense_api::args::Args;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();
    let args = Arc::new(Args::parse());

    init_logging(&args);

    if args.llm.gemini_api_key.is_none() {
        tracing::warn!(
            "GEMINI_API_KEY not found in environment; analysis calls will fail until it is set"
        );
    }

    let state = state(args.clone())?;
    let router = router(state)?;

    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port).parse()?;
    tracing::info!("listening on {addr}");

    axum_server::bind(addr)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}

fn init_logging(args: &Args) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if args.server.log_json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
