mod store;
mod v1;


use std::{env, net::SocketAddr, sync::Arc};

use clap::Parser;
use eyre::WrapErr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::store::MongoStore;

/// Todo-list HTTP backend.
#[derive(Parser)]
struct Args {
    /// Address to bind the HTTP server to.
    #[arg(long, default_value = "0.0.0.0:8000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let uri = env::var("MONGODB_CONNECTION_STRING")
        .wrap_err("MONGODB_CONNECTION_STRING must be set")?;

    // The client is opened once here and shared for the process lifetime.
    let store = Arc::new(MongoStore::connect(&uri).await?);

    // Wide-open CORS, this backend is meant for development use.
    let app = v1::router()
        .with_state(store)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive());

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
