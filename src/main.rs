// src/main.rs

use clap::Parser;

use amr_catalog::cli::Cli;
use amr_catalog::config::{AppConfig, LoggingConfig};

/// Подписчик tracing по секции `logging` (логи идут в stderr)
fn init_logging(logging: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(logging.max_level())
        .with_writer(std::io::stderr);

    if logging.enable_json_output {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = AppConfig::resolve(cli.config.as_deref())?;
    init_logging(&config.logging);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = cli.run(&config, &mut out) {
        tracing::error!(error = %e, "amr command failed");
        return Err(e);
    }

    Ok(())
}
