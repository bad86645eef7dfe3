use std::ops::{Index, IndexMut};

use crate::PaletteError;

/// Opaque 32-bit color value. Channel layout is up to the caller.
pub type Color = i32;

/// Fixed-length sequence of colors with a cursor that always points at a
/// valid slot.
///
/// The slot count is chosen at construction and never changes. Writes to
/// the cursor are clamped into `0..len`, while direct indexed access is
/// checked and reports [`PaletteError::IndexOutOfBounds`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorPalette {
    colors: Box<[Color]>,
    cursor: usize,
}

impl ColorPalette {
    /// Build a palette of `size` slots, all set to `color`.
    pub fn new(
        size: usize,
        color: Color,
        cursor: i64,
    ) -> Result<Self, PaletteError> {
        if size < 1 {
            return Err(PaletteError::InvalidArgument("size cannot be < 1"));
        }

        Ok(Self::from_boxed(vec![color; size].into_boxed_slice(), cursor))
    }

    /// Build a palette of `size` slots set to `0` with the cursor at `0`.
    pub fn with_size(size: usize) -> Result<Self, PaletteError> {
        Self::new(size, 0, 0)
    }

    /// Build a palette holding its own copy of `colors`.
    pub fn from_colors(
        colors: &[Color],
        cursor: i64,
    ) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::InvalidArgument(
                "color list cannot be empty",
            ));
        }

        Ok(Self::from_boxed(colors.into(), cursor))
    }

    /// Copy this palette into a new one of `size` slots.
    ///
    /// Extra slots are truncated, missing ones are filled with `0`.
    pub fn resized(
        &self,
        size: usize,
        cursor: i64,
    ) -> Result<Self, PaletteError> {
        if size < 1 {
            return Err(PaletteError::InvalidArgument("size cannot be < 1"));
        }

        let mut colors = vec![0; size];
        let shared = size.min(self.colors.len());
        colors[..shared].copy_from_slice(&self.colors[..shared]);

        Ok(Self::from_boxed(colors.into_boxed_slice(), cursor))
    }

    /// Copy all colors and place the cursor at `cursor`.
    pub fn with_cursor(&self, cursor: i64) -> Self {
        Self::from_boxed(self.colors.clone(), cursor)
    }

    fn from_boxed(colors: Box<[Color]>, cursor: i64) -> Self {
        let mut palette = Self { colors, cursor: 0 };
        palette.set_cursor(cursor);
        palette
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`, a palette has at least one slot.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn color(&self, index: usize) -> Result<Color, PaletteError> {
        self.colors
            .get(index)
            .copied()
            .ok_or_else(|| self.out_of_bounds(index))
    }

    pub fn set_color(
        &mut self,
        index: usize,
        color: Color,
    ) -> Result<(), PaletteError> {
        let size = self.colors.len();
        let Some(slot) = self.colors.get_mut(index) else {
            return Err(PaletteError::IndexOutOfBounds { index, size });
        };
        *slot = color;
        Ok(())
    }

    /// Set slot `index` back to `0`.
    pub fn reset_color(&mut self, index: usize) -> Result<(), PaletteError> {
        self.set_color(index, 0)
    }

    pub fn set_all(&mut self, color: Color) {
        self.colors.fill(color);
    }

    /// Set every slot to `0`.
    pub fn clear(&mut self) {
        self.set_all(0);
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor, clamping `index` into `0..len`.
    ///
    /// Never fails: negative values land on the first slot and values past
    /// the end land on the last one.
    pub fn set_cursor(&mut self, index: i64) {
        let last = self.colors.len() - 1;
        self.cursor = match usize::try_from(index) {
            Ok(index) => index.min(last),
            Err(_) if index < 0 => 0,
            Err(_) => last,
        };
    }

    /// Color under the cursor.
    pub fn current(&self) -> Color {
        self.colors[self.cursor]
    }

    pub fn set_current(&mut self, color: Color) {
        self.colors[self.cursor] = color;
    }

    /// Backing slots in order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Mutable view over the slots. The slot count stays fixed.
    pub fn colors_mut(&mut self) -> &mut [Color] {
        &mut self.colors
    }

    fn out_of_bounds(&self, index: usize) -> PaletteError {
        PaletteError::IndexOutOfBounds {
            index,
            size: self.colors.len(),
        }
    }
}

impl Index<usize> for ColorPalette {
    type Output = Color;

    fn index(&self, index: usize) -> &Color {
        &self.colors[index]
    }
}

impl IndexMut<usize> for ColorPalette {
    fn index_mut(&mut self, index: usize) -> &mut Color {
        &mut self.colors[index]
    }
}
