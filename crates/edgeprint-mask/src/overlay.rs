//! Overlay compositor: apply a coverage buffer as a colored overlay.
//!
//! The coverage buffer becomes the transparency channel of a solid
//! color layer, which is then alpha-composited over the source image.
//! Where the buffer is 255 the overlay color wins; where it is 0 the
//! source shows through untouched.

use image::imageops::{self, FilterType};
use image::{GrayImage, Pixel, Rgba, RgbaImage};

/// Composite a solid-color overlay over the source, masked by the
/// coverage buffer.
///
/// The overlay layer's per-pixel alpha is the coverage value; the alpha
/// channel of `color` itself is superseded by the buffer. A coverage
/// buffer whose dimensions differ from the source is resampled with
/// nearest-neighbor first, which keeps mask edges hard instead of
/// feathering them.
///
/// Returns a new image; `source` is not mutated.
#[must_use = "returns the composited image"]
pub fn composite_overlay(source: &RgbaImage, coverage: &GrayImage, color: Rgba<u8>) -> RgbaImage {
    let resized;
    let coverage = if coverage.dimensions() == source.dimensions() {
        coverage
    } else {
        resized = imageops::resize(
            coverage,
            source.width(),
            source.height(),
            FilterType::Nearest,
        );
        &resized
    };

    let mut output = source.clone();
    for (x, y, pixel) in output.enumerate_pixels_mut() {
        let alpha = coverage.get_pixel(x, y).0[0];
        pixel.blend(&Rgba([color.0[0], color.0[1], color.0[2], alpha]));
    }
    output
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn checker_source(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([200, 40, 40, 255])
            } else {
                Rgba([40, 40, 200, 255])
            }
        })
    }

    #[test]
    fn zero_coverage_leaves_the_source_unchanged() {
        let source = checker_source(16, 12);
        let coverage = GrayImage::new(16, 12);
        let result = composite_overlay(&source, &coverage, Rgba([0, 0, 0, 255]));
        assert_eq!(result.as_raw(), source.as_raw());
    }

    #[test]
    fn full_coverage_yields_the_overlay_color() {
        let source = checker_source(16, 12);
        let coverage = GrayImage::from_pixel(16, 12, image::Luma([255]));
        let color = Rgba([10, 220, 30, 255]);
        let result = composite_overlay(&source, &coverage, color);
        assert!(result.pixels().all(|p| *p == color));
    }

    #[test]
    fn overlay_color_alpha_is_superseded_by_coverage() {
        // A fully transparent color still paints where coverage is 255.
        let source = checker_source(8, 8);
        let coverage = GrayImage::from_pixel(8, 8, image::Luma([255]));
        let result = composite_overlay(&source, &coverage, Rgba([50, 60, 70, 0]));
        assert!(result.pixels().all(|p| *p == Rgba([50, 60, 70, 255])));
    }

    #[test]
    fn partial_coverage_blends_toward_the_overlay() {
        let source = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        let coverage = GrayImage::from_pixel(4, 4, image::Luma([128]));
        let result = composite_overlay(&source, &coverage, Rgba([255, 255, 255, 255]));
        let pixel = result.get_pixel(0, 0);
        // alpha 128/255 of white over black: channels near 128.
        for channel in 0..3 {
            let value = i32::from(pixel.0[channel]);
            assert!((126..=130).contains(&value), "channel {channel} = {value}");
        }
        assert_eq!(pixel.0[3], 255);
    }

    #[test]
    fn undersized_coverage_is_resampled_to_the_source() {
        // 8x8 coverage, left half 255, applied to a 16x16 source.
        let coverage = GrayImage::from_fn(8, 8, |x, _| {
            if x < 4 {
                image::Luma([255])
            } else {
                image::Luma([0])
            }
        });
        let source = RgbaImage::from_pixel(16, 16, Rgba([9, 9, 9, 255]));
        let color = Rgba([250, 250, 250, 255]);
        let result = composite_overlay(&source, &coverage, color);
        assert_eq!(*result.get_pixel(0, 0), color);
        assert_eq!(*result.get_pixel(15, 15), Rgba([9, 9, 9, 255]));
    }

    #[test]
    fn source_is_not_mutated() {
        let source = checker_source(6, 6);
        let snapshot = source.clone();
        let coverage = GrayImage::from_pixel(6, 6, image::Luma([255]));
        let _ = composite_overlay(&source, &coverage, Rgba([1, 2, 3, 255]));
        assert_eq!(source.as_raw(), snapshot.as_raw());
    }
}
