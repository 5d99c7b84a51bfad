use crate::config::AtlasOptions;
use crate::error::AtlasError;
use macroquad::math::Rect;

/// Name format used for repeated regions when none is configured.
pub const DEFAULT_REPEAT_NAME_FORMAT: &str = "{name}-{n}";

/// An absolute pixel rectangle resolved from a region spec.
///
/// The origin may be negative and a dimension may come out negative when a
/// cell margin exceeds the cell size; whether such a rectangle is croppable
/// is decided by the cropper, not here. Values beyond the i32 range clamp
/// to its limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRect {
    /// X-coordinate of the top-left corner in pixels
    pub x: i32,
    /// Y-coordinate of the top-left corner in pixels
    pub y: i32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl ResolvedRect {
    /// Create a new resolved rectangle.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        ResolvedRect {
            x,
            y,
            width,
            height,
        }
    }

    /// Convert to a macroquad [`Rect`], e.g. for use as a draw source.
    pub fn to_rect(self) -> Rect {
        Rect::new(
            self.x as f32,
            self.y as f32,
            self.width as f32,
            self.height as f32,
        )
    }
}

/// Resolve every region of `options` against an image of the given size,
/// returning `(name, rectangle)` pairs with repeats already expanded.
///
/// This is the pure geometry step: no pixels are touched, which makes it
/// the place to test layouts or to feed a custom cropper. Repetitions of
/// one region appear in step order; distinct regions appear in no
/// particular order.
pub fn resolve_regions(
    image_width: u32,
    image_height: u32,
    options: &AtlasOptions,
) -> Result<Vec<(String, ResolvedRect)>, AtlasError> {
    if options.grid_width <= 0.0 || options.grid_height <= 0.0 {
        return Err(AtlasError::InvalidGridSize {
            width: options.grid_width,
            height: options.grid_height,
        });
    }
    if options.regions.is_empty() {
        return Err(AtlasError::NoRegions);
    }

    let (cell_width, cell_height) = if options.relative {
        let mut usable_width = image_width as f64;
        let mut usable_height = image_height as f64;
        // The margin is taken off the total extent once, not per cell gap.
        if options.cell_margin > 0 {
            usable_width -= options.cell_margin as f64;
            usable_height -= options.cell_margin as f64;
        }
        (
            (usable_width / options.grid_width).ceil(),
            (usable_height / options.grid_height).ceil(),
        )
    } else {
        // Absolute mode: region coordinates are already pixels, the grid
        // is never consulted.
        (1.0, 1.0)
    };

    let mut resolved = Vec::new();

    for (name, region) in &options.regions {
        let mut x = (region.x * cell_width).floor();
        let mut y = (region.y * cell_height).floor();

        let width_units = match region.width {
            Some(width) if options.relative => width * cell_width,
            Some(width) => width,
            None if options.relative => cell_width,
            None => image_width as f64 - x,
        };
        let mut width = width_units.ceil();

        let height_units = match region.height {
            Some(height) if options.relative => height * cell_height,
            Some(height) => height,
            None if options.relative => cell_height,
            None => image_height as f64 - y,
        };
        let mut height = height_units.ceil();

        // Shrink each cell inward so a gap opens between neighbours. This
        // runs after width/height defaulting, so a defaulted full-cell
        // size shrinks too.
        if options.relative && options.cell_margin > 0 {
            let margin = options.cell_margin as f64;
            x += margin;
            y += margin;
            width -= margin;
            height -= margin;
        }

        match region.repeat {
            Some(repeat) if repeat > 0 => {
                let offset_x = match region.repeat_offset.as_ref().and_then(|offset| offset.x) {
                    Some(value) if options.relative => (value * cell_width).floor(),
                    Some(value) => value.floor(),
                    // Default stride along x is one full cell width.
                    None => cell_width.floor(),
                };
                let offset_y = match region.repeat_offset.as_ref().and_then(|offset| offset.y) {
                    Some(value) if options.relative => (value * cell_height).floor(),
                    Some(value) => value.floor(),
                    // No default stride along y: tiling is a horizontal strip.
                    None => 0.0,
                };

                for i in 0..repeat {
                    let step = i as f64;
                    resolved.push((
                        repeat_region_name(name, i + 1, region.repeat_name_format.as_deref()),
                        to_pixel_rect(x + offset_x * step, y + offset_y * step, width, height),
                    ));
                }
            }
            _ => resolved.push((name.clone(), to_pixel_rect(x, y, width, height))),
        }
    }

    Ok(resolved)
}

/// Final f64 to i32 boundary. The casts saturate, so positions beyond the
/// i32 range clamp to its limits instead of wrapping.
fn to_pixel_rect(x: f64, y: f64, width: f64, height: f64) -> ResolvedRect {
    ResolvedRect::new(x as i32, y as i32, width as i32, height as i32)
}

/// Expand the name template for one repetition. Placeholders are replaced
/// once each, `{name}` before `{n}`, like a plain string substitution.
fn repeat_region_name(region_name: &str, repetition: u32, format: Option<&str>) -> String {
    format
        .unwrap_or(DEFAULT_REPEAT_NAME_FORMAT)
        .replacen("{name}", region_name, 1)
        .replacen("{n}", &repetition.to_string(), 1)
}
