use tracing_subscriber::EnvFilter;

use greenside_server::build_app;
use greenside_server::config::ServerConfig;

#[tokio::main]
async fn main() {
    let (config, source) = ServerConfig::load();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
    source.log();

    if let Err(e) = config.validate() {
        tracing::error!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    tracing::info!("Greenside server starting");

    let listen_addr = config.listen_addr.clone();
    let (app, _state) = match build_app(config) {
        Ok(built) => built,
        Err(e) => {
            tracing::error!("Failed to load records: {e}");
            std::process::exit(1);
        },
    };

    let listener = match tokio::net::TcpListener::bind(&listen_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {listen_addr}: {e}");
            std::process::exit(1);
        },
    };
    tracing::info!("Listening on {listen_addr}");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {e}");
    }
}
