use crate::error::AtlasError;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Per-step displacement between successive copies of a repeated region.
///
/// Each axis is independently optional: a missing `x` falls back to one
/// full cell width, a missing `y` falls back to zero, so tiling defaults
/// to a horizontal strip.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RepeatOffset {
    /// Horizontal step, in cells (relative mode) or pixels (absolute mode)
    #[serde(default)]
    pub x: Option<f64>,
    /// Vertical step, in cells (relative mode) or pixels (absolute mode)
    #[serde(default)]
    pub y: Option<f64>,
}

/// One named rectangular sub-area of the atlas.
///
/// All coordinates share the unit system selected by
/// [`AtlasOptions::relative`]: cell units in relative mode, pixel units in
/// absolute mode.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSpec {
    /// X-offset of the region origin, measured in cells or pixels
    pub x: f64,

    /// Y-offset of the region origin, measured in cells or pixels
    pub y: f64,

    /// Width of the region, measured in cells or pixels.
    ///
    /// If not defined:
    /// - in relative mode this defaults to 1 cell
    /// - in absolute mode the remaining width of the image is used
    #[serde(default)]
    pub width: Option<f64>,

    /// Height of the region, measured in cells or pixels.
    ///
    /// If not defined:
    /// - in relative mode this defaults to 1 cell
    /// - in absolute mode the remaining height of the image is used
    #[serde(default)]
    pub height: Option<f64>,

    /// If set to an integer greater than 0, the region is tiled that many
    /// times and only the generated copies appear in the output, named
    /// after [`RegionSpec::repeat_name_format`]. Zero or absent produce a
    /// single region under the plain name.
    #[serde(default)]
    pub repeat: Option<u32>,

    /// Offset between each repetition's rectangle; see [`RepeatOffset`]
    /// for the per-axis defaults.
    #[serde(default)]
    pub repeat_offset: Option<RepeatOffset>,

    /// Name template for repeated copies. `{name}` is replaced with the
    /// region's name and `{n}` with the 1-based repetition index; each
    /// placeholder is substituted once. Default is `"{name}-{n}"`.
    #[serde(default)]
    pub repeat_name_format: Option<String>,
}

impl RegionSpec {
    /// A region at the given origin with every other field defaulted.
    pub fn new(x: f64, y: f64) -> Self {
        RegionSpec {
            x,
            y,
            ..Default::default()
        }
    }
}

/// Declarative description of how to slice an atlas image.
///
/// Any missing field falls back to a documented default, so a layout file
/// only has to spell out what differs from
/// `{relative: true, gridWidth: 1, gridHeight: 1, cellMargin: 0,
/// regions: {"default": {x: 0, y: 0}}}`.
///
/// Unit system summary:
///
/// | Mode | grid meaning | region x/y | default width/height |
/// |---|---|---|---|
/// | relative | cells spanning the image | cell index | 1 cell |
/// | absolute | unused (no grid) | pixel offset | remaining extent to the image edge |
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtlasOptions {
    /// In relative mode region coordinates are measured in grid cells;
    /// in absolute mode they are pixel values taken as-is
    #[serde(default = "default_true")]
    pub relative: bool,

    /// Number of cells spanning the image horizontally. Ignored in
    /// absolute mode but must always be greater than 0
    #[serde(default = "one")]
    pub grid_width: f64,

    /// Number of cells spanning the image vertically. Ignored in
    /// absolute mode but must always be greater than 0
    #[serde(default = "one")]
    pub grid_height: f64,

    /// Pixel gap collapsed between adjacent cells (relative mode only).
    /// Whole pixels; fractional margins are rejected at parse time
    #[serde(default)]
    pub cell_margin: u32,

    /// Named regions to extract. Must be non-empty; insertion order does
    /// not matter
    #[serde(default = "default_regions")]
    pub regions: HashMap<String, RegionSpec>,
}

fn default_true() -> bool {
    true
}

fn one() -> f64 {
    1.0
}

fn default_regions() -> HashMap<String, RegionSpec> {
    let mut regions = HashMap::new();
    regions.insert("default".to_string(), RegionSpec::new(0.0, 0.0));
    regions
}

impl Default for AtlasOptions {
    fn default() -> Self {
        AtlasOptions {
            relative: true,
            grid_width: 1.0,
            grid_height: 1.0,
            cell_margin: 0,
            regions: default_regions(),
        }
    }
}

impl AtlasOptions {
    /// Parse atlas options from a JSON string. Missing fields take their
    /// defaults, unknown fields are ignored.
    pub fn load_from_str(json: &str) -> Result<Self, AtlasError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load atlas options from a layout file, only supporting JSON for now.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, AtlasError> {
        let path_ref = path.as_ref();
        let path_str = path_ref.display().to_string();

        match path_ref.extension().and_then(|e| e.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path_ref)?;
                Self::load_from_str(&content)
            }
            // Anything that is not a .json file is unsupported, including
            // extensionless paths
            _ => Err(AtlasError::UnsupportedFormat(path_str)),
        }
    }
}
