use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use stringscope::construct::ContentStore;
use stringscope::server;
use stringscope::settings::Settings;

#[tokio::main]
async fn main() {
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // the store only lives as long as the process
    let store = Arc::new(ContentStore::new());
    let address = settings.address();
    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%address, error = %e, "unable to bind");
            std::process::exit(1);
        }
    };
    info!(%address, "server starting");
    if let Err(e) = axum::serve(listener, server::router(store)).await {
        error!(error = %e, "server stopped");
        std::process::exit(1);
    }
}
