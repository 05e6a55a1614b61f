pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod loader;
pub mod presenter;
pub mod reliability;
pub mod render;
pub mod services;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::render::RenderService;
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_render(output: &Path) -> Result<()> {
    let config = AppConfig::new();
    let service = RenderService::new(config);
    service.run(output)
}
