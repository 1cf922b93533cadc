//! Shared types for the edgeprint mask pipeline.

use serde::{Deserialize, Serialize};

/// Re-export `GrayImage` so downstream crates can reference coverage
/// buffers without depending on `image` directly.
///
/// A coverage buffer is a single-channel image the size of the target:
/// 255 means the overlay is visible at that pixel, 0 means the original
/// content shows through.
pub use image::GrayImage;

/// Re-export `RgbaImage` so downstream crates can reference the decoded
/// source image without depending on `image` directly.
pub use image::RgbaImage;

/// Re-export `Rgba` for overlay colors.
pub use image::Rgba;

/// One side of the image rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    /// Top edge, traversed left to right on the ring path.
    Top,
    /// Right edge, traversed top to bottom.
    Right,
    /// Bottom edge, traversed right to left.
    Bottom,
    /// Left edge, traversed bottom to top.
    Left,
}

impl Edge {
    /// All four edges in canonical traversal order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];
}

/// A set of enabled image edges.
///
/// Insertion order and duplicates are irrelevant: iteration always
/// yields edges in the canonical `Top -> Right -> Bottom -> Left` order.
/// A fixed order keeps the grid generator's sequence of random draws
/// reproducible for a given seed no matter how the set was built.
///
/// Serializes as a list of edge names (`["top", "left"]`), matching the
/// `enabled_sides` field of the JSON configuration format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Edge>", into = "Vec<Edge>")]
pub struct EdgeSet {
    top: bool,
    right: bool,
    bottom: bool,
    left: bool,
}

impl EdgeSet {
    /// The empty set. Legal everywhere; a zone mask built from it is
    /// all zeros.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            top: false,
            right: false,
            bottom: false,
            left: false,
        }
    }

    /// All four edges enabled.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            top: true,
            right: true,
            bottom: true,
            left: true,
        }
    }

    /// Enable an edge. Inserting an already-present edge is a no-op.
    pub const fn insert(&mut self, edge: Edge) {
        match edge {
            Edge::Top => self.top = true,
            Edge::Right => self.right = true,
            Edge::Bottom => self.bottom = true,
            Edge::Left => self.left = true,
        }
    }

    /// Whether an edge is enabled.
    #[must_use]
    pub const fn contains(&self, edge: Edge) -> bool {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }

    /// Returns `true` if no edge is enabled.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.top || self.right || self.bottom || self.left)
    }

    /// Enabled edges in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Edge> + '_ {
        Edge::ALL.into_iter().filter(|e| self.contains(*e))
    }
}

impl FromIterator<Edge> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        let mut set = Self::empty();
        for edge in iter {
            set.insert(edge);
        }
        set
    }
}

impl From<Vec<Edge>> for EdgeSet {
    fn from(edges: Vec<Edge>) -> Self {
        edges.into_iter().collect()
    }
}

impl From<EdgeSet> for Vec<Edge> {
    fn from(set: EdgeSet) -> Self {
        set.iter().collect()
    }
}

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Create new dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Dimensions of an existing coverage buffer or image.
    #[must_use]
    pub fn of(image: &GrayImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
        }
    }

    pub(crate) fn validate(self) -> Result<(), MaskError> {
        if self.width == 0 || self.height == 0 {
            return Err(MaskError::InvalidDimension(format!(
                "image dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Concentric band layout along the enabled edges of an image.
///
/// `thickness * band_count` exceeding half the smaller image dimension
/// makes bands overlap or overrun the far edge. That is accepted: fills
/// are idempotent and rectangles are clipped to the image, so the mask
/// degrades gracefully rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneSpec {
    /// Width of each band in pixels.
    pub thickness: u32,
    /// Number of concentric bands per enabled edge.
    pub band_count: u32,
    /// Which edges carry bands.
    pub edges: EdgeSet,
}

impl ZoneSpec {
    pub(crate) fn validate(&self) -> Result<(), MaskError> {
        if self.thickness == 0 {
            return Err(MaskError::InvalidDimension(
                "zone thickness must be positive".into(),
            ));
        }
        if self.band_count == 0 {
            return Err(MaskError::InvalidDimension(
                "band count must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Distance from an edge to the middle of the banded zone; the ring
    /// path runs parallel to each edge at this offset.
    pub(crate) fn ring_mid(&self) -> f64 {
        f64::from(self.thickness) * f64::from(self.band_count) / 2.0
    }
}

/// Randomly sized, randomly placed cutout rectangles along the ring path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingCutoutSpec {
    /// Minimum cutout width in pixels.
    pub min_width: u32,
    /// Maximum cutout width in pixels (inclusive).
    pub max_width: u32,
    /// Minimum cutout height in pixels.
    pub min_height: u32,
    /// Maximum cutout height in pixels (inclusive).
    pub max_height: u32,
    /// Number of cutouts to punch. Zero leaves the zone mask untouched.
    pub count: u32,
}

impl RingCutoutSpec {
    pub(crate) fn validate(&self) -> Result<(), MaskError> {
        if self.min_width == 0 || self.min_height == 0 {
            return Err(MaskError::InvalidDimension(
                "cutout sizes must be positive".into(),
            ));
        }
        if self.min_width > self.max_width {
            return Err(MaskError::InvalidRange(format!(
                "min_width {} exceeds max_width {}",
                self.min_width, self.max_width
            )));
        }
        if self.min_height > self.max_height {
            return Err(MaskError::InvalidRange(format!(
                "min_height {} exceeds max_height {}",
                self.min_height, self.max_height
            )));
        }
        Ok(())
    }
}

/// A per-band grid of cutout cells, each independently and
/// probabilistically omitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCutoutSpec {
    /// Cell width in pixels.
    pub cell_width: u32,
    /// Cell height in pixels.
    pub cell_height: u32,
    /// Probability in `[0, 1]` that a cell is skipped (left covered).
    pub omit_probability: f64,
}

impl GridCutoutSpec {
    pub(crate) fn validate(&self) -> Result<(), MaskError> {
        if self.cell_width == 0 || self.cell_height == 0 {
            return Err(MaskError::InvalidDimension(
                "grid cell sizes must be positive".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.omit_probability) {
            return Err(MaskError::InvalidRange(format!(
                "omit probability must be in [0, 1], got {}",
                self.omit_probability
            )));
        }
        Ok(())
    }
}

/// Which cutout strategy to apply on top of the zone mask.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum CutoutStrategy {
    /// Random rectangles centered on the perimeter ring path.
    Ring(RingCutoutSpec),
    /// A deterministic per-band grid with probabilistic omissions.
    Grid(GridCutoutSpec),
}

/// Fully resolved parameters for one masked-overlay render.
///
/// Configuration defaults live at the caller's boundary; by the time a
/// spec reaches the mask core every field is concrete.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaskSpec {
    /// Band layout along the enabled edges.
    pub zone: ZoneSpec,
    /// Cutout strategy punched into the zone mask.
    pub cutout: CutoutStrategy,
    /// Overlay color as `[r, g, b, a]`.
    pub overlay_color: [u8; 4],
    /// Seed for the random stream. `None` uses ambient entropy, which
    /// makes the render non-reproducible.
    pub seed: Option<u64>,
}

/// Errors from the mask pipeline.
#[derive(Debug, thiserror::Error)]
pub enum MaskError {
    /// An image or shape dimension was zero.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// A min/max size range was inverted, or a probability was out of
    /// bounds.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// The input image bytes were empty.
    #[error("input image data is empty")]
    EmptyInput,

    /// Failed to decode the input image.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),
}
