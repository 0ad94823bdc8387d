use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::PictureError;

/// Side length of a tile in pixels
pub const TILE_SIZE: usize = 8;

/// A cell coordinate on the picture.
///
/// Signed so tool geometry can describe cells left of or above the picture;
/// those are rejected when they reach [`Picture::pixel`] or [`Picture::draw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// One cell overwritten by [`Picture::draw`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelChange {
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl PixelChange {
    pub fn at(pos: Position, color: Color) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            color,
        }
    }
}

/// Canvas size measured in 8x8 tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileDimensions {
    pub tiles_x: usize,
    pub tiles_y: usize,
}

impl TileDimensions {
    pub const fn new(tiles_x: usize, tiles_y: usize) -> Self {
        Self { tiles_x, tiles_y }
    }

    pub fn width(&self) -> usize {
        self.tiles_x.saturating_mul(TILE_SIZE)
    }

    pub fn height(&self) -> usize {
        self.tiles_y.saturating_mul(TILE_SIZE)
    }

    /// Checks that both counts lie in `1..=max_tiles`
    pub fn check(&self, max_tiles: usize) -> Result<(), PictureError> {
        if self.tiles_x == 0 || self.tiles_y == 0 {
            return Err(PictureError::EmptyDimensions {
                width: self.width(),
                height: self.height(),
            });
        }
        if self.tiles_x > max_tiles || self.tiles_y > max_tiles {
            return Err(PictureError::TooManyTiles {
                tiles_x: self.tiles_x,
                tiles_y: self.tiles_y,
                max_tiles,
            });
        }
        Ok(())
    }
}

impl Default for TileDimensions {
    fn default() -> Self {
        Self::new(12, 6)
    }
}

// Immutable picture for sharing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    width: usize,
    height: usize,
    pixels: Vec<Color>, // row-major, index = x + y * width
}

// Pictures are shared between the editor state, the undo stack and the canvas
pub type PictureRef = Arc<Picture>;

impl Picture {
    /// Creates a picture from a row-major pixel buffer
    pub fn new(width: usize, height: usize, pixels: Vec<Color>) -> Result<Self, PictureError> {
        if width == 0 || height == 0 {
            return Err(PictureError::EmptyDimensions { width, height });
        }
        let expected = width * height;
        if pixels.len() != expected {
            return Err(PictureError::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Creates a picture covering `dimensions` with every cell set to `color`.
    ///
    /// Zero tile counts are bumped to one so the picture is never empty.
    pub fn empty(dimensions: TileDimensions, color: Color) -> Self {
        let width = dimensions.width().max(TILE_SIZE);
        let height = dimensions.height().max(TILE_SIZE);
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    pub fn into_ref(self) -> PictureRef {
        Arc::new(self)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Result<usize, PictureError> {
        if self.contains(Position::new(x, y)) {
            Ok(x as usize + y as usize * self.width)
        } else {
            Err(PictureError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn pixel(&self, pos: Position) -> Result<Color, PictureError> {
        self.index(pos.x, pos.y).map(|i| self.pixels[i])
    }

    /// Returns a copy of this picture with `changes` applied in order.
    ///
    /// Later changes to the same cell win. Any out-of-bounds change rejects
    /// the whole batch.
    pub fn draw(&self, changes: &[PixelChange]) -> Result<Picture, PictureError> {
        let mut pixels = self.pixels.clone();
        for change in changes {
            let i = self.index(change.x, change.y)?;
            pixels[i] = change.color;
        }
        Ok(Picture {
            width: self.width,
            height: self.height,
            pixels,
        })
    }

    /// Iterates over the cells row by row
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks_exact(self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_uses_tile_dimensions() {
        let picture = Picture::empty(TileDimensions::new(3, 2), Color::BACKGROUND);
        assert_eq!(picture.width(), 24);
        assert_eq!(picture.height(), 16);
        assert!(picture.pixels().iter().all(|&c| c == Color::BACKGROUND));
    }

    #[test]
    fn test_new_validates_buffer() {
        assert_eq!(
            Picture::new(2, 2, vec![Color::BLACK; 3]),
            Err(PictureError::PixelCountMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert!(matches!(
            Picture::new(0, 2, Vec::new()),
            Err(PictureError::EmptyDimensions { .. })
        ));
    }

    #[test]
    fn test_row_major_layout() {
        let red = Color::rgb(255, 0, 0);
        let picture = Picture::new(3, 2, vec![Color::BLACK; 6])
            .unwrap()
            .draw(&[PixelChange { x: 2, y: 1, color: red }])
            .unwrap();
        assert_eq!(picture.pixels()[2 + 3], red);
        assert_eq!(picture.rows().count(), 2);
    }

    #[test]
    fn test_out_of_bounds_access_fails_fast() {
        let picture = Picture::empty(TileDimensions::new(1, 1), Color::BLACK);
        for pos in [Position::new(-1, 0), Position::new(8, 0), Position::new(0, 8)] {
            assert!(matches!(picture.pixel(pos), Err(PictureError::OutOfBounds { .. })));
        }
        let change = PixelChange { x: 0, y: 9, color: Color::WHITE };
        assert!(picture.draw(&[change]).is_err());
    }

    #[test]
    fn test_tile_check_bounds_both_axes() {
        assert_eq!(TileDimensions::new(64, 1).check(64), Ok(()));
        assert!(matches!(
            TileDimensions::new(0, 3).check(64),
            Err(PictureError::EmptyDimensions { .. })
        ));
        assert_eq!(
            TileDimensions::new(2, 65).check(64),
            Err(PictureError::TooManyTiles {
                tiles_x: 2,
                tiles_y: 65,
                max_tiles: 64
            })
        );
        // huge counts saturate instead of overflowing
        let huge = TileDimensions::new(usize::MAX / 2, 1);
        assert_eq!(huge.width(), usize::MAX);
        assert!(huge.check(64).is_err());
    }
}
