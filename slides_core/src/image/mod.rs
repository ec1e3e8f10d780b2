//! Minimal image generation for slide backgrounds.
//!
//! The pipeline is rasterize -> PNG framing -> stored-block zlib. No real
//! compression is attempted: the images are tiny and are stretched by Slides
//! to cover the page anyway.

pub mod checksum;
pub mod gradient;
pub mod png;
pub mod zlib;

use std::fmt;

pub use gradient::{GRADIENT_SIZE, GradientDirection, rasterize_gradient};
pub use png::encode_png;

use crate::Color;

/// MIME type of everything this module produces.
pub const PNG_MIME_TYPE: &str = "image/png";

/// Errors raised while producing an image.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageError {
    /// A color string was not `#RRGGBB`.
    InvalidColor(String),
    /// The encoder refused its input instead of emitting a corrupt file.
    Encoding(String),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::InvalidColor(input) => {
                write!(f, "Invalid color '{}'. Expected hex format like #FF0000", input)
            }
            ImageError::Encoding(reason) => write!(f, "Failed to encode PNG: {}", reason),
        }
    }
}

impl std::error::Error for ImageError {}

/// Renders a two-color linear gradient and returns it as PNG bytes.
pub fn generate_gradient_image(
    start: Color,
    end: Color,
    angle_degrees: f64,
) -> Result<Vec<u8>, ImageError> {
    let pixels = rasterize_gradient(start, end, angle_degrees);
    encode_png(GRADIENT_SIZE, GRADIENT_SIZE, &pixels)
}

/// Like [`generate_gradient_image`], parsing both colors from hex strings first.
pub fn generate_gradient_from_hex(
    start: &str,
    end: &str,
    angle_degrees: f64,
) -> Result<Vec<u8>, ImageError> {
    let start_color =
        Color::from_hex(start).ok_or_else(|| ImageError::InvalidColor(start.to_string()))?;
    let end_color = Color::from_hex(end).ok_or_else(|| ImageError::InvalidColor(end.to_string()))?;
    generate_gradient_image(start_color, end_color, angle_degrees)
}
