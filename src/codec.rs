use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};

use crate::color::Color;
use crate::error::CodecError;
use crate::picture::Picture;

/// File name used when exporting
pub const EXPORT_FILE_NAME: &str = "pixelart.png";

/// Decodes a raster image into a picture, one cell per source pixel.
///
/// Images larger than `max_side` in either direction are cropped to their
/// top-left `max_side`x`max_side` corner. Colors are not quantized. Fully
/// transparent pixels read back as black.
pub fn picture_from_image_bytes(bytes: &[u8], max_side: u32) -> Result<Picture, CodecError> {
    let img = image::load_from_memory(bytes).map_err(CodecError::Decode)?;
    log::debug!("Decoded image: {}x{}", img.width(), img.height());

    let rgba = img.to_rgba8();
    let width = rgba.width().min(max_side);
    let height = rgba.height().min(max_side);
    if width == 0 || height == 0 {
        return Err(CodecError::Empty);
    }

    let mut pixels = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            let [r, g, b, a] = rgba.get_pixel(x, y).0;
            pixels.push(if a == 0 { Color::BLACK } else { Color::rgb(r, g, b) });
        }
    }

    Ok(Picture::new(width as usize, height as usize, pixels)?)
}

/// Encodes a picture as PNG, one image pixel per cell and no grid
pub fn picture_to_png(picture: &Picture) -> Result<Vec<u8>, CodecError> {
    let width = u32::try_from(picture.width()).map_err(|_| CodecError::Empty)?;
    let height = u32::try_from(picture.height()).map_err(|_| CodecError::Empty)?;

    let mut img = RgbImage::new(width, height);
    for (dst, &color) in img.pixels_mut().zip(picture.pixels()) {
        *dst = Rgb(color.into());
    }

    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(CodecError::Encode)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picture::{PixelChange, TileDimensions};
    use image::{Rgba, RgbaImage};

    fn png_bytes(img: &RgbaImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png).unwrap();
        bytes
    }

    #[test]
    fn test_export_then_import_keeps_cells() {
        let red = Color::rgb(0xff, 0, 0);
        let picture = Picture::empty(TileDimensions::new(2, 1), Color::BACKGROUND)
            .draw(&[PixelChange { x: 15, y: 7, color: red }])
            .unwrap();

        let bytes = picture_to_png(&picture).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");

        let back = picture_from_image_bytes(&bytes, 100).unwrap();
        assert_eq!(back, picture);
    }

    #[test]
    fn test_import_crops_large_images() {
        let img = RgbaImage::from_pixel(130, 40, Rgba([1, 2, 3, 255]));
        let picture = picture_from_image_bytes(&png_bytes(&img), 100).unwrap();
        assert_eq!((picture.width(), picture.height()), (100, 40));
        assert!(picture.pixels().iter().all(|&c| c == Color::rgb(1, 2, 3)));
    }

    #[test]
    fn test_transparent_pixels_become_black() {
        let mut img = RgbaImage::from_pixel(2, 1, Rgba([200, 100, 50, 255]));
        img.put_pixel(1, 0, Rgba([200, 100, 50, 0]));
        let picture = picture_from_image_bytes(&png_bytes(&img), 100).unwrap();
        assert_eq!(picture.pixels(), &[Color::rgb(200, 100, 50), Color::BLACK]);
    }

    #[test]
    fn test_garbage_is_a_decode_error() {
        let err = picture_from_image_bytes(b"definitely not an image", 100).unwrap_err();
        assert!(matches!(err, CodecError::Decode(_)));
    }
}
