//! Server startup utilities.

use folio_config::AppConfig;
use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r#"
    ______      ___
   / ____/___  / (_)___
  / /_  / __ \/ / / __ \
 / __/ / /_/ / / / /_/ /
/_/    \____/_/_/\____/
    "#
    );
}

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    let addr = config.server.addr();
    info!("{}", separator);
    info!("REST API:  http://{}/api/v1/members", addr);
    info!("Display:   http://{}/api/v1/members/display", addr);
    info!("Health:    http://{}/health", addr);
    info!(
        "Paging:    default size {}, max size {}, one-indexed input {}",
        config.paging.default_page_size,
        config.paging.max_page_size,
        config.paging.one_indexed_parameters
    );
    info!("{}", separator);
}
