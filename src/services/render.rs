use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::config::settings::AppConfig;
use crate::loader;
use crate::presenter::{self, Leaderboard};
use crate::render;

/// One render cycle: load the sheet, classify and style, emit HTML.
/// Each cycle reloads from disk, so sheet edits show up on the next view.
pub struct RenderService {
    config: AppConfig,
}

impl RenderService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    fn data_file(&self) -> PathBuf {
        std::env::var("RANKING_FILE")
            .unwrap_or_else(|_| self.config.loader.data_file.to_string())
            .into()
    }

    /// Load and present the current ranking.
    pub fn build(&self) -> Result<Leaderboard> {
        let table = loader::load_table(&self.data_file(), &self.config.loader)?;
        let board = presenter::present(&table)?;
        Ok(board)
    }

    /// Full cycle to an HTML string.
    pub fn render_html(&self) -> Result<String> {
        let board = self.build()?;
        Ok(render::render_page(&board, self.config.display.page_title))
    }

    /// Full cycle to a static HTML file.
    pub fn run(&self, output: &Path) -> Result<()> {
        let html = self.render_html()?;
        std::fs::write(output, html)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        info!("Leaderboard written to {}", output.display());
        Ok(())
    }
}
