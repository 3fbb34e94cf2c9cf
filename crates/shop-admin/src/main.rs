use admin_framework::tracing::setup_tracing;
use clap::Parser;
use shop_admin::cli::{self, Cli};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let cli = Cli::parse();
    info!("Starting shop-admin");

    cli::run(cli).await
}
