//! Fixed-size color palettes with a clamped cursor, and their JSON
//! persistence.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use otty_palette::{ColorPalette, load_palette, save_palette};
//!
//! let mut palette = ColorPalette::new(16, 0, 0)?;
//! palette.set_cursor(3);
//! palette.set_current(0x00ff_00ff);
//!
//! let path = Path::new("/tmp/palette.json");
//! save_palette(path, &palette, true)?;
//! assert_eq!(load_palette(path).into_palette(), Some(palette));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod document;
mod errors;
mod palette;
mod storage;

pub use crate::document::{
    PaletteDocument, decode_str, encode_string, format_colors, parse_colors,
};
pub use crate::errors::{DocumentError, PaletteError, StorageError};
pub use crate::palette::{Color, ColorPalette};
pub use crate::storage::{
    LocalFs, PaletteFs, PaletteLoad, PaletteLoadStatus, WriteOutcome,
    default_palette_path, load_palette, read_palette, save_palette,
    write_palette,
};
