use std::path::PathBuf;

use mandelbrot_zoom::ExplorerConfig;

/// Opens the interactive explorer.
///
/// Click to zoom into the boxed region, `+`/`-` resize the box, arrow keys pan.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = ExplorerConfig::load(config_path.as_deref())?;

    mandelbrot_zoom::run_gui(&config)?;

    Ok(())
}
