use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/tui.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    /// Directory exported statements are written to.
    pub export_dir: String,
    /// Directory holding the TTF files the PDF renderer loads.
    pub fonts_dir: String,
    pub log_dir: String,
    pub level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
            export_dir: ".".to_string(),
            fonts_dir: "fonts".to_string(),
            log_dir: "logs".to_string(),
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "paysheet_tui", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override base URL (e.g. http://127.0.0.1:3000).
    #[arg(long)]
    base_url: Option<String>,
    /// Override the export directory.
    #[arg(long)]
    export_dir: Option<String>,
    /// Override the fonts directory used for PDF export.
    #[arg(long)]
    fonts_dir: Option<String>,
    /// Override the log level filter.
    #[arg(long)]
    level: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("PAYSHEET_TUI"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(base_url) = args.base_url {
        settings.base_url = base_url;
    }
    if let Some(export_dir) = args.export_dir {
        settings.export_dir = export_dir;
    }
    if let Some(fonts_dir) = args.fonts_dir {
        settings.fonts_dir = fonts_dir;
    }
    if let Some(level) = args.level {
        settings.level = level;
    }

    Ok(settings)
}
