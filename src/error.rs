use thiserror::Error;

/// Errors raised by picture construction and access
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PictureError {
    #[error("pixel ({x}, {y}) is outside the {width}x{height} picture")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    #[error("picture dimensions must be non-zero, got {width}x{height}")]
    EmptyDimensions { width: usize, height: usize },

    #[error("expected {expected} pixels for the picture, got {actual}")]
    PixelCountMismatch { expected: usize, actual: usize },

    #[error("{tiles_x}x{tiles_y} tiles exceeds the limit of {max_tiles} tiles per side")]
    TooManyTiles {
        tiles_x: usize,
        tiles_y: usize,
        max_tiles: usize,
    },
}

/// Error returned when a string is not a `#rrggbb` or `#rgb` color
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color {input:?}: expected #rrggbb or #rgb")]
pub struct ColorParseError {
    pub input: String,
}

/// Errors that can occur while importing or exporting raster images
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("failed to encode image: {0}")]
    Encode(#[source] image::ImageError),

    #[error("image has no pixels")]
    Empty,

    #[error(transparent)]
    Picture(#[from] PictureError),
}

/// Errors that can occur while loading the editor configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Any error the editor can surface to the user
#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Picture(#[from] PictureError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
