use std::sync::Arc;

use egui::{Color32, ColorImage, Painter, Rect, Stroke, TextureHandle, TextureOptions, pos2};

use crate::input::CanvasGeometry;
use crate::picture::{Picture, PictureRef, TILE_SIZE};
use crate::state::EditorState;

const GRID_COLOR: Color32 = Color32::BLACK;

/// Converts a picture into an egui image, one texel per cell
pub fn to_color_image(picture: &Picture) -> ColorImage {
    let rgb: Vec<u8> = picture
        .pixels()
        .iter()
        .flat_map(|&color| <[u8; 3]>::from(color))
        .collect();
    ColorImage::from_rgb([picture.width(), picture.height()], &rgb)
}

/// Shows the editor's picture.
///
/// The canvas remembers which picture it last uploaded and compares by
/// reference, so states that only change the tool or color cost nothing.
#[derive(Default)]
pub struct PictureCanvas {
    picture: Option<PictureRef>,
    grid: bool,
    texture: Option<TextureHandle>,
    /// Number of texture uploads so far
    uploads: u64,
}

impl PictureCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Brings the canvas up to date with `state`.
    ///
    /// Returns true when the picture or the grid flag changed, i.e. when what
    /// is on screen needs to change.
    pub fn sync_state(&mut self, ctx: &egui::Context, state: &EditorState) -> bool {
        let same_picture = self
            .picture
            .as_ref()
            .is_some_and(|p| Arc::ptr_eq(p, &state.picture));
        if same_picture && self.grid == state.grid {
            return false;
        }

        if !same_picture {
            let image = to_color_image(&state.picture);
            match &mut self.texture {
                Some(texture) => texture.set(image, TextureOptions::NEAREST),
                None => {
                    self.texture = Some(ctx.load_texture("picture", image, TextureOptions::NEAREST));
                }
            }
            self.uploads += 1;
            self.picture = Some(state.picture.clone());
        }
        self.grid = state.grid;
        true
    }

    pub fn uploads(&self) -> u64 {
        self.uploads
    }

    /// Screen layout of the picture with its top-left corner at `origin`
    pub fn geometry(&self, origin: egui::Pos2, scale: f32) -> Option<CanvasGeometry> {
        self.picture.as_ref().map(|picture| CanvasGeometry {
            origin,
            scale,
            width: picture.width(),
            height: picture.height(),
        })
    }

    /// Draws the last synced picture and, if enabled, the tile grid
    pub fn paint(&self, painter: &Painter, geometry: &CanvasGeometry) {
        let Some(texture) = &self.texture else {
            return;
        };
        let rect = geometry.rect();
        let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
        painter.image(texture.id(), rect, uv, Color32::WHITE);

        if self.grid {
            for [a, b] in grid_lines(geometry) {
                painter.line_segment([a, b], Stroke::new(1.0, GRID_COLOR));
            }
        }
    }
}

/// Tile boundaries to draw: one line at the start of every whole tile
pub fn grid_lines(geometry: &CanvasGeometry) -> Vec<[egui::Pos2; 2]> {
    let rect = geometry.rect();
    let step = TILE_SIZE as f32 * geometry.scale;
    let columns = geometry.width / TILE_SIZE;
    let rows = geometry.height / TILE_SIZE;

    let vertical = (0..columns).map(|t| {
        let x = rect.min.x + t as f32 * step;
        [pos2(x, rect.min.y), pos2(x, rect.max.y - 1.0)]
    });
    let horizontal = (0..rows).map(|t| {
        let y = rect.min.y + t as f32 * step;
        [pos2(rect.min.x, y), pos2(rect.max.x - 1.0, y)]
    });
    vertical.chain(horizontal).collect()
}
