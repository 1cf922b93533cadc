//! Ring-path cutouts: random holes centered on the image perimeter.
//!
//! A single scalar `t` in `[0, perimeter)` parameterizes a closed path
//! that runs parallel to the image boundary at the middle of the banded
//! zone. Placing cutout centers on this path lets holes wrap naturally
//! around corners instead of clustering per edge.

use image::GrayImage;
use rand::Rng;

use crate::types::{Dimensions, MaskError, RingCutoutSpec, ZoneSpec};
use crate::zone::{Footprint, OPEN, fill_rect};

/// Map a ring parameter to a point on the mid-band line.
///
/// The four segments cover, in order: top (left to right), right (top
/// to bottom), bottom (right to left), left (bottom to top) — a
/// clockwise traversal starting at the top-left corner. `ring_mid` is
/// the inward offset of the line from each edge.
pub(crate) fn ring_point(t: f64, ring_mid: f64, dimensions: Dimensions) -> (f64, f64) {
    let width = f64::from(dimensions.width);
    let height = f64::from(dimensions.height);
    if t < width {
        (t, ring_mid)
    } else if t < width + height {
        (width - ring_mid, t - width)
    } else if t < 2.0 * width + height {
        (width - (t - (width + height)), height - ring_mid)
    } else {
        (ring_mid, height - (t - (2.0 * width + height)))
    }
}

/// Punch `spec.count` random rectangles out of a zone mask.
///
/// Per hole the stream is drawn in a fixed order: position `t`, then
/// width, then height. Reordering the draws would change every seeded
/// render, so the order is part of the reproducibility contract.
///
/// Rectangles are centered on the ring path, rounded to integer
/// coordinates, and clamped so they stay inside the image. A rectangle
/// larger than the image in an axis degenerates to a clamp at 0 with
/// the overrun clipped at the far border; that is accepted behavior,
/// not an error.
///
/// # Errors
///
/// Returns [`MaskError::InvalidDimension`] if a minimum size is zero,
/// or [`MaskError::InvalidRange`] if a min exceeds its max. Validation
/// happens before the first draw, so a failed call consumes nothing
/// from the stream.
pub fn apply_ring_cutouts<R: Rng>(
    mut base: GrayImage,
    zone: &ZoneSpec,
    spec: &RingCutoutSpec,
    rng: &mut R,
) -> Result<GrayImage, MaskError> {
    spec.validate()?;

    let dimensions = Dimensions::of(&base);
    let ring_mid = zone.ring_mid();
    let perimeter = 2.0 * f64::from(dimensions.width + dimensions.height);

    for _ in 0..spec.count {
        let t = rng.gen_range(0.0..perimeter);
        let (cx, cy) = ring_point(t, ring_mid, dimensions);
        let rect_width = rng.gen_range(spec.min_width..=spec.max_width);
        let rect_height = rng.gen_range(spec.min_height..=spec.max_height);

        #[allow(clippy::cast_possible_truncation)]
        let x0 = (cx - f64::from(rect_width) / 2.0).round() as i64;
        #[allow(clippy::cast_possible_truncation)]
        let y0 = (cy - f64::from(rect_height) / 2.0).round() as i64;

        // Keep the full rectangle inside the image; an oversized
        // rectangle clamps to 0 and gets clipped at the far border.
        let x0 = x0
            .min(i64::from(dimensions.width) - i64::from(rect_width))
            .max(0);
        let y0 = y0
            .min(i64::from(dimensions.height) - i64::from(rect_height))
            .max(0);

        fill_rect(
            &mut base,
            Footprint {
                x: x0,
                y: y0,
                width: rect_width,
                height: rect_height,
            },
            OPEN,
        );
    }
    Ok(base)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::rng;
    use crate::types::EdgeSet;
    use crate::zone::zone_mask;
    use rand::RngCore;

    fn zone_spec() -> ZoneSpec {
        ZoneSpec {
            thickness: 10,
            band_count: 1,
            edges: EdgeSet::all(),
        }
    }

    fn cutout_spec(count: u32) -> RingCutoutSpec {
        RingCutoutSpec {
            min_width: 8,
            max_width: 24,
            min_height: 8,
            max_height: 24,
            count,
        }
    }

    #[test]
    fn ring_point_walks_the_perimeter_clockwise() {
        let dims = Dimensions::new(200, 100);
        let mid = 5.0;
        // Top segment, left to right.
        assert_eq!(ring_point(0.0, mid, dims), (0.0, 5.0));
        assert_eq!(ring_point(150.0, mid, dims), (150.0, 5.0));
        // Right segment, top to bottom.
        assert_eq!(ring_point(200.0, mid, dims), (195.0, 0.0));
        assert_eq!(ring_point(260.0, mid, dims), (195.0, 60.0));
        // Bottom segment, right to left.
        assert_eq!(ring_point(300.0, mid, dims), (200.0, 95.0));
        assert_eq!(ring_point(350.0, mid, dims), (150.0, 95.0));
        // Left segment, bottom to top.
        assert_eq!(ring_point(500.0, mid, dims), (5.0, 100.0));
        assert_eq!(ring_point(560.0, mid, dims), (5.0, 40.0));
    }

    #[test]
    fn zero_count_leaves_the_zone_mask_untouched() {
        let dims = Dimensions::new(120, 80);
        let base = zone_mask(dims, &zone_spec()).unwrap();
        let mut stream = rng::seeded(42);
        let result =
            apply_ring_cutouts(base.clone(), &zone_spec(), &cutout_spec(0), &mut stream).unwrap();
        assert_eq!(result.as_raw(), base.as_raw());
    }

    #[test]
    fn same_seed_reproduces_the_buffer() {
        let dims = Dimensions::new(120, 80);
        let build = |seed: u64| {
            let base = zone_mask(dims, &zone_spec()).unwrap();
            let mut stream = rng::seeded(seed);
            apply_ring_cutouts(base, &zone_spec(), &cutout_spec(12), &mut stream).unwrap()
        };
        assert_eq!(build(42).as_raw(), build(42).as_raw());
        assert_ne!(build(42).as_raw(), build(7).as_raw());
    }

    #[test]
    fn cutouts_change_the_mask() {
        let dims = Dimensions::new(120, 80);
        let base = zone_mask(dims, &zone_spec()).unwrap();
        let mut stream = rng::seeded(1);
        let result =
            apply_ring_cutouts(base.clone(), &zone_spec(), &cutout_spec(20), &mut stream).unwrap();
        assert_ne!(result.as_raw(), base.as_raw());
    }

    #[test]
    fn oversized_cutouts_clamp_to_the_image() {
        // Cutouts wider and taller than the whole image: the clamp
        // degenerates to 0 and painting clips, so this must not panic
        // and must clear the entire buffer.
        let dims = Dimensions::new(30, 20);
        let base = zone_mask(dims, &zone_spec()).unwrap();
        let spec = RingCutoutSpec {
            min_width: 100,
            max_width: 100,
            min_height: 100,
            max_height: 100,
            count: 1,
        };
        let mut stream = rng::seeded(3);
        let result = apply_ring_cutouts(base, &zone_spec(), &spec, &mut stream).unwrap();
        assert!(result.pixels().all(|p| p.0[0] == 0));
    }

    #[test]
    fn inverted_range_fails_before_drawing() {
        let dims = Dimensions::new(60, 60);
        let base = zone_mask(dims, &zone_spec()).unwrap();
        let spec = RingCutoutSpec {
            min_width: 20,
            max_width: 10,
            min_height: 5,
            max_height: 5,
            count: 4,
        };
        let mut stream = rng::seeded(9);
        let result = apply_ring_cutouts(base, &zone_spec(), &spec, &mut stream);
        assert!(matches!(result, Err(MaskError::InvalidRange(_))));
        // Validation must not have consumed anything from the stream.
        let mut fresh = rng::seeded(9);
        assert_eq!(stream.next_u64(), fresh.next_u64());
    }
}
