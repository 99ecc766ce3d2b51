use std::env;

use anyhow::Result;
use predictor::{AppConfig, ModelCache};

mod app;
mod state;
mod ui;

fn main() -> Result<()> {
    app::logging::init()?;

    let config = match env::args().nth(1) {
        Some(path) => AppConfig::resolve(Some(path)),
        None => AppConfig::from_env(),
    };
    let cache = ModelCache::new(config.model_path);
    app::run::run(&cache)
}
