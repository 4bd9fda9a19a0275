use clap::Parser;
use log::{error, info};
use tokio::net::TcpListener;
use todo_server::{Config, StartupError};

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    let db = todo_server::db::connect(&config.database_url).await?;
    info!("database ready at {}", config.database_url);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("listening on {}", listener.local_addr()?);

    todo_server::run(listener, db, shutdown_signal()).await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
