use std::path::PathBuf;

use mandelbrot_zoom::{ExplorerConfig, ExplorerSession, PpmFileSink};

/// Renders the configured view once and saves it as a PPM file.
///
/// Usage: `mandelbrot_zoom [config.toml]`
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = ExplorerConfig::load(config_path.as_deref())?;

    let mut session = ExplorerSession::from_config(&config)?;
    let mut sink = PpmFileSink::new(config.output_dir());
    let frame_id = session.start(&mut sink)?;

    log::info!("wrote {}", sink.frame_path(frame_id).display());

    Ok(())
}
