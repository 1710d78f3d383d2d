pub mod config;
pub mod controllers;
pub mod enums;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

use std::sync::Arc;
use crate::config::AppConfig;
use clap::Parser;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize environment
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let app_config = Arc::new(AppConfig::parse());

    controllers::server::serve(app_config).await
}
