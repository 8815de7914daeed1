use paysheet_tui::{app, config, error::Result};

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()?;

    // The TUI owns the terminal, so logs go to a file.
    std::fs::create_dir_all(&config.log_dir)?;
    let file_appender = tracing_appender::rolling::never(&config.log_dir, "paysheet_tui.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "paysheet_tui={level},engine={level},report={level}",
            level = config.level
        ))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    let mut app = app::App::new(config)?;
    app.run().await?;
    Ok(())
}
