//! Grid cutouts: a deterministic lattice of holes per band, with
//! per-cell probabilistic omission.
//!
//! Where the ring generator scatters holes along the perimeter, the
//! grid generator tiles each band-edge footprint with fixed-size cells
//! and cuts each one out unless a per-cell draw says to skip it.

use image::GrayImage;
use rand::Rng;

use crate::types::{Dimensions, GridCutoutSpec, MaskError, ZoneSpec};
use crate::zone::{Footprint, OPEN, band_footprint, fill_rect};

/// Punch a grid of cutout cells into every band of a zone mask.
///
/// Each band-edge footprint holds `floor(height / cell_height)` rows by
/// `floor(width / cell_width)` columns of cells, laid out row-major
/// from the footprint's top-left corner. A remainder strip narrower
/// than one cell stays covered. One uniform draw in `[0, 1)` is made
/// per cell; the cell is skipped when `omit_probability` is positive
/// and the draw falls below it.
///
/// Bands are processed in increasing index order, edges in canonical
/// `Top -> Right -> Bottom -> Left` order, cells row-major. That
/// traversal fixes the sequence of draws, so seeded renders are
/// bit-reproducible.
///
/// # Errors
///
/// Returns [`MaskError::InvalidDimension`] if a cell size is zero, or
/// [`MaskError::InvalidRange`] if the omit probability is outside
/// `[0, 1]`. Validation happens before the first draw.
pub fn apply_grid_cutouts<R: Rng>(
    mut base: GrayImage,
    zone: &ZoneSpec,
    spec: &GridCutoutSpec,
    rng: &mut R,
) -> Result<GrayImage, MaskError> {
    spec.validate()?;

    let dimensions = Dimensions::of(&base);
    for band in 0..zone.band_count {
        for edge in zone.edges.iter() {
            let footprint = band_footprint(edge, band, zone.thickness, dimensions);
            let rows = footprint.height / spec.cell_height;
            let cols = footprint.width / spec.cell_width;
            for row in 0..rows {
                let y = footprint.y + i64::from(row) * i64::from(spec.cell_height);
                for col in 0..cols {
                    let x = footprint.x + i64::from(col) * i64::from(spec.cell_width);
                    let draw = rng.gen_range(0.0..1.0);
                    if spec.omit_probability > 0.0 && draw < spec.omit_probability {
                        continue;
                    }
                    fill_rect(
                        &mut base,
                        Footprint {
                            x,
                            y,
                            width: spec.cell_width,
                            height: spec.cell_height,
                        },
                        OPEN,
                    );
                }
            }
        }
    }
    Ok(base)
}
