//! An egui window that animates a sortscope [`Session`].
//!
//! The window shows the current snapshot as a bar chart colored by a
//! [`Palette`], the playback controls, and the selected algorithm's
//! pseudo-code with the active line highlighted.
//!
//! # Example
//!
//! ```ignore
//! let session = SessionConfig::load("sortscope.toml")?.into_session()?;
//! sortscope_viewer::show(session, ShowConfig::new().title("sortscope"))?;
//! ```

mod app;
mod color;

use eframe::egui::{self, Color32};
use sortscope_core::Palette;
use sortscope_playback::Session;
use tracing::debug;

pub use color::{ColorError, palette_from_hex, parse_hex};

use app::SortApp;

/// Configuration for the viewer window.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
pub struct ShowConfig {
    title: Option<String>,
    palette: Palette<Color32>,
    pseudo_code: bool,
    size: [f32; 2],
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with the default palette, the pseudo-code
    /// panel shown, and no title.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            palette: color::default_palette(),
            pseudo_code: true,
            size: [960.0, 540.0],
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the bar colors.
    #[must_use]
    pub fn palette(mut self, palette: Palette<Color32>) -> Self {
        self.palette = palette;
        self
    }

    /// Hides the pseudo-code panel.
    #[must_use]
    pub fn hide_pseudo_code(mut self) -> Self {
        self.pseudo_code = false;
        self
    }

    /// Sets the initial window size in points.
    #[must_use]
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = [width, height];
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Opens a blocking egui window driving `session`.
///
/// Blocks until the window is closed by the user.
///
/// # Errors
///
/// Returns an error if the native window cannot be created.
pub fn show(session: Session, config: ShowConfig) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(config.size),
        ..Default::default()
    };
    let title = config.title.unwrap_or_default();
    debug!(%title, len = session.values().len(), "opening viewer");

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(SortApp::new(
                session,
                config.palette,
                config.pseudo_code,
            )))
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_show_pseudo_code() {
        let config = ShowConfig::default();

        assert!(config.title.is_none());
        assert!(config.pseudo_code);
        assert_eq!(config.size, [960.0, 540.0]);
        assert_eq!(config.palette, color::default_palette());
    }

    #[test]
    fn builder_overrides_defaults() {
        let palette = Palette::new(Color32::BLACK, Color32::RED, Color32::GREEN);
        let config = ShowConfig::new()
            .title("sortscope")
            .palette(palette.clone())
            .hide_pseudo_code()
            .size(1280.0, 720.0);

        assert_eq!(config.title.as_deref(), Some("sortscope"));
        assert!(!config.pseudo_code);
        assert_eq!(config.size, [1280.0, 720.0]);
        assert_eq!(config.palette, palette);
    }
}
