//! Interactive sorting visualizer.
//!
//! # Usage
//!
//! ```text
//! cargo run -p sortscope-viewer --example visualize
//! cargo run -p sortscope-viewer --example visualize -- sortscope.toml
//! RUST_LOG=debug cargo run -p sortscope-viewer --example visualize
//! ```
//!
//! With no argument the defaults are used: 50 values in `5..=100`, bubble
//! sort, one step every 100 ms. Pass a TOML file to change any of these
//! (see `sortscope_playback::config` for the format).

use std::error::Error;

use sortscope_playback::config::SessionConfig;
use sortscope_viewer::{ShowConfig, palette_from_hex};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let config = match std::env::args().nth(1) {
        Some(path) => SessionConfig::load(path)?,
        None => SessionConfig::default(),
    };
    let palette = palette_from_hex(config.palette.clone())?;
    let session = config.into_session()?;

    sortscope_viewer::show(session, ShowConfig::new().title("sortscope").palette(palette))?;
    Ok(())
}
