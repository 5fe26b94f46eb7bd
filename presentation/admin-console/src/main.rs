use dotenvy::dotenv;

mod config;
mod console;
mod controller;
mod setup;
mod view;

use config::app_config::AppConfig;
use console::Console;
use setup::dependency_injection::DependencyContainer;

/// Admin Console Entry Point
///
/// Initializes the application, wires dependencies, and starts the command
/// loop against the remote catalog API.
///
/// The runtime is single-threaded: every network call suspends the command
/// that triggered it, and nothing else is scheduled in between.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config);

    // 5. Run the console loop
    Console::new(container).run().await?;

    Ok(())
}
