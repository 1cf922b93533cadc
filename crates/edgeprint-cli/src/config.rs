//! JSON configuration for one masked-overlay render.
//!
//! The file format mirrors the fingerprint configs the generator has
//! always consumed: a required `base_size` drives the zone thickness
//! and the grid cell dimensions in one place, optional fields fall back
//! to the historical defaults (three bands, all four sides, 30% grid
//! omissions, white background). Defaults are resolved here, once; the
//! mask core only ever sees fully concrete specs.

use std::fs;
use std::path::{Path, PathBuf};

use edgeprint_mask::{
    CutoutStrategy, EdgeSet, GridCutoutSpec, MaskSpec, RingCutoutSpec, ZoneSpec,
};
use serde::Deserialize;

/// Errors while loading or resolving a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON or misses required fields.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A color value could not be interpreted.
    #[error("invalid color {0:?}: expected \"#RRGGBB\", \"#RRGGBBAA\", or 3/4 channel values")]
    Color(String),

    /// `"mode": "ring"` without a `ring` section.
    #[error("mode \"ring\" requires a \"ring\" section with rectangle sizes and count")]
    MissingRingSection,
}

/// Which cutout strategy the config selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Grid cutouts (the default, matching historical configs).
    #[default]
    Grid,
    /// Ring-path cutouts.
    Ring,
}

/// Grid parameters. Cell sizes come from `base_size`, so only the omit
/// chance lives here.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GridConfig {
    /// Probability that a grid cell is skipped.
    #[serde(default = "default_omit_chance")]
    pub omit_chance: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            omit_chance: default_omit_chance(),
        }
    }
}

/// Ring parameters; required when `mode` is `ring`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RingConfig {
    /// Minimum cutout width in pixels.
    pub min_rect_width: u32,
    /// Maximum cutout width in pixels.
    pub max_rect_width: u32,
    /// Minimum cutout height in pixels.
    pub min_rect_height: u32,
    /// Maximum cutout height in pixels.
    pub max_rect_height: u32,
    /// Number of cutouts to punch.
    pub count: u32,
}

/// A color, either a hex string or explicit channel values.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    /// `"#RRGGBB"` or `"#RRGGBBAA"`.
    Hex(String),
    /// `[r, g, b]` or `[r, g, b, a]`.
    Channels(Vec<u8>),
}

impl ColorValue {
    fn to_rgba(&self) -> Result<[u8; 4], ConfigError> {
        match self {
            Self::Hex(text) => {
                parse_hex(text).ok_or_else(|| ConfigError::Color(text.clone()))
            }
            Self::Channels(values) => match values.as_slice() {
                [r, g, b] => Ok([*r, *g, *b, 255]),
                [r, g, b, a] => Ok([*r, *g, *b, *a]),
                _ => Err(ConfigError::Color(format!("{values:?}"))),
            },
        }
    }
}

fn parse_hex(text: &str) -> Option<[u8; 4]> {
    let hex = text.strip_prefix('#')?;
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        6 => Some([channel(0)?, channel(2)?, channel(4)?, 255]),
        8 => Some([channel(0)?, channel(2)?, channel(4)?, channel(6)?]),
        _ => None,
    }
}

const fn default_zone_count() -> u32 {
    3
}

const fn default_omit_chance() -> f64 {
    0.3
}

fn default_background() -> ColorValue {
    ColorValue::Channels(vec![255, 255, 255])
}

/// One fingerprint render configuration, as stored on disk.
///
/// Unknown fields are ignored: the same files carry text and layout
/// settings for the composition stage this tool does not run.
#[derive(Debug, Deserialize)]
pub struct FingerprintConfig {
    /// Path to the source image.
    pub input_image: PathBuf,

    /// Master dimension: sets the zone thickness and the grid cell
    /// width and height.
    pub base_size: u32,

    /// Number of concentric bands per side.
    #[serde(default = "default_zone_count")]
    pub zone_count: u32,

    /// Which sides carry bands. All four when absent.
    #[serde(default = "EdgeSet::all")]
    pub enabled_sides: EdgeSet,

    /// Overlay color. White when absent.
    #[serde(default = "default_background")]
    pub background_color: ColorValue,

    /// Seed for reproducible renders.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Cutout strategy selection.
    #[serde(default)]
    pub mode: Mode,

    /// Grid strategy parameters.
    #[serde(default)]
    pub grid: GridConfig,

    /// Ring strategy parameters.
    #[serde(default)]
    pub ring: Option<RingConfig>,
}

/// A config with every default applied and every value validated at
/// this boundary.
#[derive(Debug)]
pub struct ResolvedConfig {
    /// Path to the source image.
    pub input_image: PathBuf,
    /// The fully concrete mask spec handed to the core.
    pub spec: MaskSpec,
}

impl FingerprintConfig {
    /// Load a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not a valid config document
    /// (including a missing `base_size`).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Resolve defaults and produce the concrete mask spec.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Color`] for an unparseable color and
    /// [`ConfigError::MissingRingSection`] when ring mode lacks its
    /// parameters.
    pub fn resolve(self) -> Result<ResolvedConfig, ConfigError> {
        let overlay_color = self.background_color.to_rgba()?;

        let cutout = match self.mode {
            Mode::Grid => CutoutStrategy::Grid(GridCutoutSpec {
                cell_width: self.base_size,
                cell_height: self.base_size,
                omit_probability: self.grid.omit_chance,
            }),
            Mode::Ring => {
                let ring = self.ring.ok_or(ConfigError::MissingRingSection)?;
                CutoutStrategy::Ring(RingCutoutSpec {
                    min_width: ring.min_rect_width,
                    max_width: ring.max_rect_width,
                    min_height: ring.min_rect_height,
                    max_height: ring.max_rect_height,
                    count: ring.count,
                })
            }
        };

        Ok(ResolvedConfig {
            input_image: self.input_image,
            spec: MaskSpec {
                zone: ZoneSpec {
                    thickness: self.base_size,
                    band_count: self.zone_count,
                    edges: self.enabled_sides,
                },
                cutout,
                overlay_color,
                seed: self.random_seed,
            },
        })
    }
}
