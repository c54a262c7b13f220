use breed_vote::{
    config::Config,
    error::StartupError,
    routes::AppState,
    server::rocket,
};
use sqlx::postgres::PgPoolOptions;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[rocket::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        error!("✗ Startup failed: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    info!("🔌 Attempting to connect to db");
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect_with(config.connect_options())
        .await?;
    info!("✓ Connected to db!");

    info!("🚀 Server starting on port {}. Let's go!", config.port);
    rocket(AppState::new(pool.clone()), config.port)
        .launch()
        .await?;

    pool.close().await;
    Ok(())
}
