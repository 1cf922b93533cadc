//! edgeprint-mask: procedural border masks for branded images (sans-IO).
//!
//! Computes which pixels of a border region are "open" (showing the
//! underlying content) versus "covered" (showing an overlay color),
//! using three strategies that share one output contract: a
//! single-channel coverage buffer the size of the target image, 255 for
//! overlay-visible pixels and 0 for source-visible ones.
//!
//! 1. Zone mask -- concentric rectangular bands along the enabled edges.
//! 2. Ring cutouts -- random holes centered on a path tracing the
//!    perimeter, so holes wrap around corners.
//! 3. Grid cutouts -- a per-band lattice of holes, each cell
//!    probabilistically omitted.
//!
//! The coverage buffer then masks a solid-color overlay composited over
//! the source image.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! buffers and byte slices. Configuration files, palettes, and output
//! encoding live in `edgeprint-cli`.

pub mod grid;
pub mod overlay;
pub mod ring;
pub mod rng;
pub mod source;
pub mod types;
pub mod zone;

pub use rng::MaskRng;
pub use types::{
    CutoutStrategy, Dimensions, Edge, EdgeSet, GrayImage, GridCutoutSpec, MaskError, MaskSpec,
    Rgba, RgbaImage, RingCutoutSpec, ZoneSpec,
};

use rand::Rng;

/// Build the banded zone mask.
///
/// # Errors
///
/// Returns [`MaskError::InvalidDimension`] for zero dimensions,
/// thickness, or band count.
pub fn build_zone_mask(dimensions: Dimensions, zone: &ZoneSpec) -> Result<GrayImage, MaskError> {
    zone::zone_mask(dimensions, zone)
}

/// Build a zone mask and punch ring-path cutouts into it.
///
/// # Errors
///
/// Returns [`MaskError::InvalidDimension`] or [`MaskError::InvalidRange`]
/// if the zone or cutout spec is invalid; validation happens before any
/// random draw.
pub fn build_ring_cutout_mask<R: Rng>(
    dimensions: Dimensions,
    zone: &ZoneSpec,
    cutouts: &RingCutoutSpec,
    rng: &mut R,
) -> Result<GrayImage, MaskError> {
    cutouts.validate()?;
    let base = zone::zone_mask(dimensions, zone)?;
    ring::apply_ring_cutouts(base, zone, cutouts, rng)
}

/// Build a zone mask and punch grid cutouts into it.
///
/// # Errors
///
/// Returns [`MaskError::InvalidDimension`] or [`MaskError::InvalidRange`]
/// if the zone or cutout spec is invalid; validation happens before any
/// random draw.
pub fn build_grid_cutout_mask<R: Rng>(
    dimensions: Dimensions,
    zone: &ZoneSpec,
    cutouts: &GridCutoutSpec,
    rng: &mut R,
) -> Result<GrayImage, MaskError> {
    cutouts.validate()?;
    let base = zone::zone_mask(dimensions, zone)?;
    grid::apply_grid_cutouts(base, zone, cutouts, rng)
}

/// Composite a solid-color overlay over the source, masked by the
/// coverage buffer. See [`overlay::composite_overlay`].
#[must_use = "returns the composited image"]
pub fn composite_overlay(
    source: &RgbaImage,
    coverage: &GrayImage,
    color: Rgba<u8>,
) -> RgbaImage {
    overlay::composite_overlay(source, coverage, color)
}

/// Render a masked overlay over raw image bytes in one call.
///
/// Decodes the source, builds the coverage buffer for the spec's cutout
/// strategy at the source's dimensions, and composites the overlay
/// color through it. The random stream is seeded from `spec.seed` when
/// present, so seeded renders are bit-reproducible; an absent seed uses
/// ambient entropy.
///
/// # Errors
///
/// Returns [`MaskError::EmptyInput`] or [`MaskError::ImageDecode`] if
/// the source bytes cannot be decoded, and the zone/cutout validation
/// errors of the mask builders.
pub fn render_masked_overlay(image_bytes: &[u8], spec: &MaskSpec) -> Result<RgbaImage, MaskError> {
    let image = source::decode_rgba(image_bytes)?;
    let dimensions = Dimensions::new(image.width(), image.height());

    let mut stream = rng::from_seed_option(spec.seed);
    let coverage = match spec.cutout {
        CutoutStrategy::Ring(ref cutouts) => {
            build_ring_cutout_mask(dimensions, &spec.zone, cutouts, &mut stream)?
        }
        CutoutStrategy::Grid(ref cutouts) => {
            build_grid_cutout_mask(dimensions, &spec.zone, cutouts, &mut stream)?
        }
    };

    Ok(composite_overlay(&image, &coverage, Rgba(spec.overlay_color)))
}
