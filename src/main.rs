mod calendar;
mod config;
mod data;
mod graph;
mod rooms;
mod server;
mod solver;
mod timeslots;
mod validation;

use config::ServerConfig;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = ServerConfig::from_env();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_filter))
        .init();

    server::run_server(&config).await
}
