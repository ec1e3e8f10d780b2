//! Two-color linear gradients snapped to the nearest cardinal direction.

use serde::Serialize;

use crate::Color;
use crate::color::truncate_channel;

/// Width and height of every rasterized gradient.
///
/// Slides stretches the image over the page, so the pixel size does not need
/// to match the rendered size.
pub const GRADIENT_SIZE: u32 = 100;

/// Direction the gradient runs from the start color to the end color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientDirection {
    LeftToRight,
    RightToLeft,
    TopToBottom,
    BottomToTop,
}

impl GradientDirection {
    /// Buckets an angle in degrees into a direction.
    ///
    /// Diagonal angles are not rendered diagonally; they snap to the nearest
    /// axis.
    pub fn from_angle(angle_degrees: f64) -> Self {
        let angle = normalize_angle(angle_degrees);
        if (45.0..135.0).contains(&angle) {
            GradientDirection::TopToBottom
        } else if (135.0..225.0).contains(&angle) {
            GradientDirection::RightToLeft
        } else if (225.0..315.0).contains(&angle) {
            GradientDirection::BottomToTop
        } else {
            GradientDirection::LeftToRight
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(
            self,
            GradientDirection::LeftToRight | GradientDirection::RightToLeft
        )
    }

    pub fn is_reversed(self) -> bool {
        matches!(
            self,
            GradientDirection::RightToLeft | GradientDirection::BottomToTop
        )
    }
}

/// Maps any finite angle into `[0, 360)`.
pub fn normalize_angle(angle_degrees: f64) -> f64 {
    let angle = angle_degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if angle >= 360.0 { 0.0 } else { angle }
}

/// Rasterizes a `GRADIENT_SIZE` square gradient into RGBA bytes.
pub fn rasterize_gradient(start: Color, end: Color, angle_degrees: f64) -> Vec<u8> {
    rasterize(
        GRADIENT_SIZE,
        GRADIENT_SIZE,
        start,
        end,
        GradientDirection::from_angle(angle_degrees),
    )
}

/// Rasterizes a gradient of arbitrary size.
pub fn rasterize(
    width: u32,
    height: u32,
    start: Color,
    end: Color,
    direction: GradientDirection,
) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
    let horizontal = direction.is_horizontal();

    for y in 0..height {
        for x in 0..width {
            let mut t = if horizontal {
                fraction(x, width)
            } else {
                fraction(y, height)
            };
            if direction.is_reversed() {
                t = 1.0 - t;
            }

            pixels.extend_from_slice(&[
                lerp_channel(start.red, end.red, t),
                lerp_channel(start.green, end.green, t),
                lerp_channel(start.blue, end.blue, t),
                255,
            ]);
        }
    }

    pixels
}

fn fraction(position: u32, extent: u32) -> f64 {
    if extent <= 1 {
        0.0
    } else {
        position as f64 / (extent - 1) as f64
    }
}

/// Interpolates one channel and truncates to a byte.
fn lerp_channel(start: f64, end: f64, t: f64) -> u8 {
    truncate_channel(start * (1.0 - t) + end * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const RED: Color = Color::new(1.0, 0.0, 0.0);
    const BLUE: Color = Color::new(0.0, 0.0, 1.0);

    fn pixel(pixels: &[u8], x: u32, y: u32) -> [u8; 4] {
        let i = ((y * GRADIENT_SIZE + x) * 4) as usize;
        [pixels[i], pixels[i + 1], pixels[i + 2], pixels[i + 3]]
    }

    #[test]
    fn test_bucket_boundaries() {
        use GradientDirection::*;

        assert_eq!(GradientDirection::from_angle(0.0), LeftToRight);
        assert_eq!(GradientDirection::from_angle(44.999), LeftToRight);
        assert_eq!(GradientDirection::from_angle(45.0), TopToBottom);
        assert_eq!(GradientDirection::from_angle(134.9), TopToBottom);
        assert_eq!(GradientDirection::from_angle(135.0), RightToLeft);
        assert_eq!(GradientDirection::from_angle(224.9), RightToLeft);
        assert_eq!(GradientDirection::from_angle(225.0), BottomToTop);
        assert_eq!(GradientDirection::from_angle(314.9), BottomToTop);
        assert_eq!(GradientDirection::from_angle(315.0), LeftToRight);
        assert_eq!(GradientDirection::from_angle(359.9), LeftToRight);
    }

    #[test]
    fn test_negative_and_large_angles() {
        use GradientDirection::*;

        assert_eq!(GradientDirection::from_angle(-90.0), BottomToTop);
        assert_eq!(GradientDirection::from_angle(-270.0), TopToBottom);
        assert_eq!(GradientDirection::from_angle(450.0), TopToBottom);
        assert_eq!(GradientDirection::from_angle(720.0), LeftToRight);
        assert_eq!(normalize_angle(-1e-20), 0.0);
    }

    #[test]
    fn test_horizontal_endpoints() {
        for angle in [0.0, 10.0, 330.0] {
            let pixels = rasterize_gradient(RED, BLUE, angle);
            assert_eq!(pixels.len(), 100 * 100 * 4);
            for y in [0, 50, 99] {
                assert_eq!(pixel(&pixels, 0, y), [255, 0, 0, 255]);
                assert_eq!(pixel(&pixels, 99, y), [0, 0, 255, 255]);
            }
        }
    }

    #[test]
    fn test_reversed_directions_swap_endpoints() {
        let right_to_left = rasterize_gradient(RED, BLUE, 180.0);
        assert_eq!(pixel(&right_to_left, 0, 0), [0, 0, 255, 255]);
        assert_eq!(pixel(&right_to_left, 99, 0), [255, 0, 0, 255]);

        let bottom_to_top = rasterize_gradient(RED, BLUE, 270.0);
        assert_eq!(pixel(&bottom_to_top, 0, 0), [0, 0, 255, 255]);
        assert_eq!(pixel(&bottom_to_top, 0, 99), [255, 0, 0, 255]);
    }

    #[test]
    fn test_channels_truncate() {
        // Halfway between 0 and 1 is 127.5, which truncates to 127.
        assert_eq!(lerp_channel(0.0, 1.0, 0.5), 127);
        assert_eq!(lerp_channel(1.0, 0.0, 0.0), 255);
    }

    #[test]
    fn test_endpoints_match_color_bytes() {
        let start = Color::new(0.5, 0.25, 0.75);
        let end = Color::new(0.1, 0.9, 0.3);
        let pixels = rasterize(4, 1, start, end, GradientDirection::LeftToRight);

        let [r, g, b] = start.to_rgb_bytes();
        assert_eq!(&pixels[..4], &[r, g, b, 255]);
        let [r, g, b] = end.to_rgb_bytes();
        assert_eq!(&pixels[12..], &[r, g, b, 255]);
    }

    #[test]
    fn test_single_pixel_extent() {
        let pixels = rasterize(1, 1, RED, BLUE, GradientDirection::LeftToRight);
        assert_eq!(pixels, vec![255, 0, 0, 255]);
    }

    proptest! {
        #[test]
        fn prop_classification_is_periodic(degrees in -720i32..=720, k in -20i32..=20) {
            let angle = degrees as f64;
            let shifted = angle + 360.0 * k as f64;
            prop_assert_eq!(
                GradientDirection::from_angle(angle),
                GradientDirection::from_angle(shifted)
            );
        }

        #[test]
        fn prop_alpha_is_opaque(r in 0.0f64..=1.0, b in 0.0f64..=1.0, angle in -1000.0f64..1000.0) {
            let pixels = rasterize_gradient(Color::new(r, 0.0, 0.0), Color::new(0.0, 0.0, b), angle);
            prop_assert!(pixels.chunks_exact(4).all(|p| p[3] == 255));
        }
    }
}
