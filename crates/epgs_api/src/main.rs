// crates/epgs_api/src/main.rs
//
// EPGS HTTP adapter entrypoint. Binds a TCP listener and serves the router
// built in `lib.rs`. Like `epgs_cli`, this binary installs the process-wide
// tracing subscriber — library crates never do that themselves.

use epgs_api::{app, Config};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();

    let config = Config::from_env();
    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!(%addr, "epgs_api listening");

    let listener = tokio::net::TcpListener::bind(&addr).await.expect("bind address");
    axum::serve(listener, app(config)).await.expect("serve");
}
