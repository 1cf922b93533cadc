//! Zone mask: concentric rectangular bands along the image edges.
//!
//! The zone mask is the foundation both cutout generators start from.
//! Each enabled edge carries `band_count` bands of `thickness` pixels,
//! offset inward band by band; band pixels are 255 (overlay visible),
//! everything else 0.

use image::{GrayImage, Luma};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use crate::types::{Dimensions, Edge, MaskError, ZoneSpec};

/// Coverage value for pixels inside a band.
pub(crate) const COVERED: Luma<u8> = Luma([255]);

/// Coverage value for cutout pixels.
pub(crate) const OPEN: Luma<u8> = Luma([0]);

/// An axis-aligned rectangle in signed pixel coordinates.
///
/// Footprints are computed unclipped: a band deeper than the image
/// produces negative origins or overruns, which [`clip_to_image`]
/// resolves at paint time. Keeping the unclipped extent matters for the
/// grid generator, whose row/column counts derive from the footprint
/// size, not the visible portion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Footprint {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

/// The unclipped rectangle covered by one band on one edge.
///
/// Bands count outward-in: band 0 touches the edge, band `i` sits
/// `i * thickness` pixels further inward.
pub(crate) fn band_footprint(
    edge: Edge,
    band: u32,
    thickness: u32,
    dimensions: Dimensions,
) -> Footprint {
    let start = i64::from(band) * i64::from(thickness);
    let depth = i64::from(thickness);
    let width = i64::from(dimensions.width);
    let height = i64::from(dimensions.height);
    match edge {
        Edge::Top => Footprint {
            x: 0,
            y: start,
            width: dimensions.width,
            height: thickness,
        },
        Edge::Bottom => Footprint {
            x: 0,
            y: height - (start + depth),
            width: dimensions.width,
            height: thickness,
        },
        Edge::Left => Footprint {
            x: start,
            y: 0,
            width: thickness,
            height: dimensions.height,
        },
        Edge::Right => Footprint {
            x: width - (start + depth),
            y: 0,
            width: thickness,
            height: dimensions.height,
        },
    }
}

/// Intersect a signed rectangle with the image bounds.
///
/// Returns `None` when nothing remains visible. This is where the
/// degenerate cases land: bands or cutouts larger than the image are
/// silently trimmed, never an error.
pub(crate) fn clip_to_image(
    x: i64,
    y: i64,
    width: u32,
    height: u32,
    dimensions: Dimensions,
) -> Option<Rect> {
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + i64::from(width)).min(i64::from(dimensions.width));
    let y1 = (y + i64::from(height)).min(i64::from(dimensions.height));
    if x1 <= x0 || y1 <= y0 {
        return None;
    }
    // Bounds are now inside [0, u32::MAX] so the narrowing casts are
    // exact.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rect = Rect::at(x0 as i32, y0 as i32).of_size((x1 - x0) as u32, (y1 - y0) as u32);
    Some(rect)
}

/// Paint a signed rectangle onto the buffer, clipped to the image.
pub(crate) fn fill_rect(buffer: &mut GrayImage, footprint: Footprint, value: Luma<u8>) {
    let dimensions = Dimensions::of(buffer);
    if let Some(rect) = clip_to_image(
        footprint.x,
        footprint.y,
        footprint.width,
        footprint.height,
        dimensions,
    ) {
        draw_filled_rect_mut(buffer, rect, value);
    }
}

/// Build the banded zone mask.
///
/// Overlapping fills (bands deeper than half the image, or crossing
/// bands from perpendicular edges) are idempotent; painting 255 twice
/// changes nothing. An empty edge set yields an all-zero buffer.
///
/// # Errors
///
/// Returns [`MaskError::InvalidDimension`] if either image dimension,
/// the thickness, or the band count is zero.
pub fn zone_mask(dimensions: Dimensions, spec: &ZoneSpec) -> Result<GrayImage, MaskError> {
    dimensions.validate()?;
    spec.validate()?;

    let mut mask = GrayImage::new(dimensions.width, dimensions.height);
    for band in 0..spec.band_count {
        for edge in spec.edges.iter() {
            let footprint = band_footprint(edge, band, spec.thickness, dimensions);
            fill_rect(&mut mask, footprint, COVERED);
        }
    }
    Ok(mask)
}
