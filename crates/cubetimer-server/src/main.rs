use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use cubetimer_server::db;
use cubetimer_server::routes;
use cubetimer_server::state::AppState;

#[derive(Parser)]
struct Args {
    #[arg(long, default_value = "sqlite://cubetimer.db")]
    db: String,

    #[arg(long, default_value_t = 8000)]
    port: u16,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    info!("🧊 cubetimer is initializing...");

    let pool = db::init_db(&args.db).await;
    let state = Arc::new(AppState::new(pool));

    let app = routes::app(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    info!("🚀 cubetimer listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
