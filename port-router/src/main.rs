use std::net::SocketAddr;

use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use port_router::loader::load_graph;
use port_router::planner::SearchConfig;
use port_router::web::{AppState, create_router};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

fn init_logger() {
    let default_level = LevelFilter::INFO;
    let rust_log =
        std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| default_level.to_string());
    let filter = EnvFilter::try_new(rust_log).unwrap_or_else(|err| {
        eprintln!(
            "invalid {}, falling back to level '{}' - {}",
            EnvFilter::DEFAULT_ENV,
            default_level,
            err,
        );
        EnvFilter::new(default_level.to_string())
    });
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();

    let ports_file = env_or("PORTS_FILE", "ports.txt");
    let routes_file = env_or("ROUTES_FILE", "routes.txt");
    let addr: SocketAddr = env_or("BIND_ADDR", DEFAULT_BIND_ADDR).parse()?;

    let (graph, report) = load_graph(&ports_file, &routes_file)?;
    if !report.is_clean() {
        warn!(
            skipped = report.skipped.len(),
            "some data lines were not loaded"
        );
    }
    if graph.is_empty() {
        warn!(%ports_file, "network has no ports");
    }
    println!("{graph}");

    let state = AppState::new(graph, SearchConfig::default());
    let app = create_router(state);

    info!(%addr, "port router listening");
    info!("endpoints: GET /health /ports /companies /companies/stats /route, POST /journey/plan");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
