use eframe::egui::Color32;
use sortscope_core::Palette;
use thiserror::Error;

/// Errors that can occur when converting palette colors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex color `{0}`, expected `#rrggbb`")]
    InvalidHex(String),
}

/// Parses a `#rrggbb` (or `rrggbb`) hex string.
///
/// # Errors
///
/// Returns [`ColorError::InvalidHex`] if `text` is not six hex digits with an
/// optional leading `#`.
pub fn parse_hex(text: &str) -> Result<Color32, ColorError> {
    let invalid = || ColorError::InvalidHex(text.to_owned());

    let digits = text.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).map_err(|_| invalid());
    Ok(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Converts a palette of hex strings, as loaded from config, to GUI colors.
///
/// # Errors
///
/// Returns the first marker that fails to parse.
pub fn palette_from_hex(palette: Palette<String>) -> Result<Palette<Color32>, ColorError> {
    palette.try_map(|hex| parse_hex(&hex))
}

/// The default palette in GUI colors.
pub(crate) fn default_palette() -> Palette<Color32> {
    // Known-good values, unwrap is safe
    palette_from_hex(Palette::default()).unwrap()
}
