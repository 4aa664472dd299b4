use anyhow::{Context, Result};

use question_pairs::app;
use question_pairs::config::{Config, ConfigSource};

fn main() -> Result<()> {
    env_logger::init();

    let (config, source) = Config::load().context("loading configuration")?;
    match &source {
        ConfigSource::File(path) => log::info!("using config {}", path.display()),
        ConfigSource::Default => log::info!("no config file found, using defaults"),
    }

    let stdout = std::io::stdout();
    app::run(&config, &config.default_user, &mut stdout.lock())?;
    Ok(())
}
