use planetary_server::{AppState, build_router, error::Result as ServerErrorResult, logger};

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // .env is optional; real environment variables win
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = planetary_config::Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(parent) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(parent)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting planetary-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = planetary_db::connect(&database_path, true).await?;

    info!("Running database migrations...");
    planetary_db::create_schema(&pool).await?;

    let mailer = planetary_mail::build_mailer(&config.mail)?;

    let jwt_secret = config.auth.jwt_secret.as_deref().unwrap_or_default();
    let app_state = AppState::new(
        pool.clone(),
        jwt_secret.as_bytes(),
        config.auth.token_ttl(),
        mailer,
    );

    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
