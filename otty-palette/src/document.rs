//! Text form of a palette.
//!
//! A document is a JSON object with two fields:
//!
//! ```json
//! {"colors":"[-16777216, 16711680, 0]","index":1}
//! ```
//!
//! `colors` is a string, not a JSON array. Its contents use a fixed
//! `[v0, v1, ...]` layout with exactly one space after each comma, and
//! files written by earlier releases rely on it, so the format is kept
//! byte for byte.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::{Color, ColorPalette, DocumentError};

const COLORS_FIELD: &str = "colors";
const INDEX_FIELD: &str = "index";

/// Two-field persisted form of a [`ColorPalette`].
///
/// `index` is stored as written and only clamped when the document is
/// turned back into a palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteDocument {
    index: i64,
    colors: String,
}

impl PaletteDocument {
    pub fn new(index: i64, colors: String) -> Self {
        Self { index, colors }
    }

    pub fn from_palette(palette: &ColorPalette) -> Self {
        Self {
            index: i64::try_from(palette.cursor()).unwrap_or(i64::MAX),
            colors: format_colors(palette.colors()),
        }
    }

    /// Decode the color list and apply `index` through the clamping cursor
    /// setter. Bad color tokens are rejected, an out-of-range index is not.
    pub fn to_palette(&self) -> Result<ColorPalette, DocumentError> {
        let colors = parse_colors(&self.colors)?;
        Ok(ColorPalette::from_colors(&colors, self.index)?)
    }

    pub fn index(&self) -> i64 {
        self.index
    }

    pub fn colors(&self) -> &str {
        &self.colors
    }

    pub fn to_json_value(&self) -> Value {
        json!({
            COLORS_FIELD: self.colors,
            INDEX_FIELD: self.index,
        })
    }

    pub fn from_json_value(value: &Value) -> Result<Self, DocumentError> {
        let object = value.as_object().ok_or(DocumentError::NotAnObject)?;

        let colors = object
            .get(COLORS_FIELD)
            .ok_or(DocumentError::MissingField(COLORS_FIELD))?
            .as_str()
            .ok_or(DocumentError::InvalidColors)?;
        let index = object
            .get(INDEX_FIELD)
            .ok_or(DocumentError::MissingField(INDEX_FIELD))?
            .as_i64()
            .ok_or(DocumentError::InvalidIndex)?;

        Ok(Self::new(index, colors.to_string()))
    }

    /// Render as compact JSON text.
    pub fn to_text(&self) -> String {
        self.to_json_value().to_string()
    }

    pub fn parse_text(text: &str) -> Result<Self, DocumentError> {
        let value = serde_json::from_str::<Value>(text)?;
        Self::from_json_value(&value)
    }
}

impl From<&ColorPalette> for PaletteDocument {
    fn from(palette: &ColorPalette) -> Self {
        Self::from_palette(palette)
    }
}

/// Render `palette` straight to document text.
pub fn encode_string(palette: &ColorPalette) -> String {
    PaletteDocument::from_palette(palette).to_text()
}

/// Parse document text straight into a palette.
pub fn decode_str(text: &str) -> Result<ColorPalette, DocumentError> {
    PaletteDocument::parse_text(text)?.to_palette()
}

/// Render colors as `[v0, v1, ..., vn]`.
pub fn format_colors(colors: &[Color]) -> String {
    let body = colors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{body}]")
}

/// Parse the output of [`format_colors`].
///
/// The list is split on commas only. Plain spaces inside a token are
/// dropped, any other whitespace makes the token invalid.
pub fn parse_colors(text: &str) -> Result<Vec<Color>, DocumentError> {
    let body = text
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| DocumentError::Unbracketed(text.to_string()))?;

    body.split(',').map(parse_color).collect()
}

fn parse_color(token: &str) -> Result<Color, DocumentError> {
    let invalid = || DocumentError::InvalidToken {
        token: token.to_string(),
    };

    let compact = token.replace(' ', "");
    let (negative, digits) = match compact.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, compact.as_str()),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    // Parsed wide so that `-2147483648` survives the negation.
    let magnitude = digits.parse::<i64>().map_err(|_| invalid())?;
    let value = if negative { -magnitude } else { magnitude };
    Color::try_from(value).map_err(|_| invalid())
}
