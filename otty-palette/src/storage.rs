use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use crate::document::{PaletteDocument, encode_string};
use crate::{ColorPalette, StorageError};

/// Filesystem operations used to persist palettes.
pub trait PaletteFs {
    fn exists(&self, path: &Path) -> bool;

    fn is_readable(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Whether `path` is a regular file, the only kind of target that may
    /// be overwritten.
    fn is_file(&self, path: &Path) -> bool;

    /// Create an empty file at `path`. Returns `false` when it already
    /// existed.
    fn create_if_absent(&self, path: &Path) -> io::Result<bool>;

    fn read_all(&self, path: &Path) -> io::Result<Vec<u8>>;

    fn write_all(&self, path: &Path, payload: &[u8]) -> io::Result<()>;
}

/// [`PaletteFs`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl PaletteFs for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_readable(&self, path: &Path) -> bool {
        File::open(path).is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn create_if_absent(&self, path: &Path) -> io::Result<bool> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(_) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                Ok(false)
            },
            Err(err) => Err(err),
        }
    }

    fn read_all(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write_all(&self, path: &Path, payload: &[u8]) -> io::Result<()> {
        write_atomic(path, payload)
    }
}

/// How a palette write ended when no I/O error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The target did not exist and was created.
    Created,
    /// An existing file was replaced.
    Overwritten,
    /// The target exists and was left untouched.
    AlreadyExists { is_directory: bool },
}

impl WriteOutcome {
    /// Whether the palette ended up on disk.
    pub fn is_written(self) -> bool {
        matches!(self, Self::Created | Self::Overwritten)
    }
}

/// Status describing how a palette was loaded.
#[derive(Debug)]
pub enum PaletteLoadStatus {
    Loaded,
    Missing,
    Unreadable,
    Failed(StorageError),
}

/// Result of loading a palette. Holds a palette only when the status is
/// [`PaletteLoadStatus::Loaded`].
#[derive(Debug)]
pub struct PaletteLoad {
    palette: Option<ColorPalette>,
    status: PaletteLoadStatus,
}

impl PaletteLoad {
    fn loaded(palette: ColorPalette) -> Self {
        Self {
            palette: Some(palette),
            status: PaletteLoadStatus::Loaded,
        }
    }

    fn empty(status: PaletteLoadStatus) -> Self {
        Self {
            palette: None,
            status,
        }
    }

    pub fn palette(&self) -> Option<&ColorPalette> {
        self.palette.as_ref()
    }

    pub fn status(&self) -> &PaletteLoadStatus {
        &self.status
    }

    pub fn into_palette(self) -> Option<ColorPalette> {
        self.palette
    }

    /// Consume the value and return both payload and status.
    pub fn into_parts(self) -> (Option<ColorPalette>, PaletteLoadStatus) {
        (self.palette, self.status)
    }
}

/// Write `palette` to `path` on the local filesystem.
pub fn save_palette(
    path: &Path,
    palette: &ColorPalette,
    overwrite: bool,
) -> Result<WriteOutcome, StorageError> {
    write_palette(&LocalFs, path, palette, overwrite)
}

/// Read a palette from `path` on the local filesystem.
pub fn load_palette(path: &Path) -> PaletteLoad {
    read_palette(&LocalFs, path)
}

/// Serialize `palette` and write it through `backend`.
///
/// Only an existing regular file is ever replaced, and only when
/// `overwrite` is set. Directories and special files are left alone. Refusals are reported as
/// [`WriteOutcome::AlreadyExists`], I/O failures as errors.
pub fn write_palette<F: PaletteFs + ?Sized>(
    backend: &F,
    path: &Path,
    palette: &ColorPalette,
    overwrite: bool,
) -> Result<WriteOutcome, StorageError> {
    if backend.exists(path) {
        let is_directory = backend.is_dir(path);
        if !(overwrite && backend.is_file(path)) {
            log::warn!(
                "palette target already exists: path={} is_directory={is_directory}",
                path.display()
            );
            return Ok(WriteOutcome::AlreadyExists { is_directory });
        }
    }

    let created = backend.create_if_absent(path)?;
    let payload = encode_string(palette);
    backend.write_all(path, payload.as_bytes())?;

    let outcome = if created {
        WriteOutcome::Created
    } else {
        WriteOutcome::Overwritten
    };
    log::debug!(
        "palette written: path={} outcome={outcome:?}",
        path.display()
    );

    Ok(outcome)
}

/// Read and decode a palette through `backend`.
///
/// Never fails: a missing or unreadable source yields no palette, and so
/// does any read or decode error, which is logged and kept in the status.
pub fn read_palette<F: PaletteFs + ?Sized>(
    backend: &F,
    path: &Path,
) -> PaletteLoad {
    if !backend.exists(path) {
        return PaletteLoad::empty(PaletteLoadStatus::Missing);
    }
    if !backend.is_readable(path) {
        return PaletteLoad::empty(PaletteLoadStatus::Unreadable);
    }

    match read_existing(backend, path) {
        Ok(palette) => PaletteLoad::loaded(palette),
        Err(err) => {
            log::warn!("palette read failed: path={} {err}", path.display());
            PaletteLoad::empty(PaletteLoadStatus::Failed(err))
        },
    }
}

fn read_existing<F: PaletteFs + ?Sized>(
    backend: &F,
    path: &Path,
) -> Result<ColorPalette, StorageError> {
    let bytes = backend.read_all(path)?;
    let text = String::from_utf8(bytes)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    let document = PaletteDocument::parse_text(&text)?;
    Ok(document.to_palette()?)
}

/// Default location for a named palette under the user config directory.
pub fn default_palette_path(name: &str) -> PathBuf {
    let file_name = format!("{name}.json");
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("otty")
            .join("palettes")
            .join(file_name);
    }

    std::env::temp_dir()
        .join("otty")
        .join("palettes")
        .join(file_name)
}

fn write_atomic(path: &Path, payload: &[u8]) -> Result<(), io::Error> {
    let tmp_path = tmp_path_for(path);
    let result = fs::write(&tmp_path, payload)
        .and_then(|()| fs::rename(&tmp_path, path));
    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
