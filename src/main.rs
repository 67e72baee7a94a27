use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use crate::config::Config;

pub mod config;
pub mod controller;
pub mod helpers;
pub mod models;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();
    info!("Starting inventory service in {} environment", config.environment);

    controller::serve(&config).await
}
