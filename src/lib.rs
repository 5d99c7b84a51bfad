#![warn(missing_docs)]

//! Texture atlas slicing for Macroquad.
//!
//! Takes one packed sprite sheet [`Image`](macroquad::texture::Image) plus
//! a JSON description of the regions inside it and produces a map of named
//! sub-images. Regions can be addressed in grid cells or in pixels, declare
//! just an origin and inherit sensible sizes, and expand into numbered
//! animation frames via `repeat`.
//!
//! ```
//! use macroquad::prelude::*;
//! use macroquad_atlas::{texture_atlas, AtlasOptions, RegionSpec};
//!
//! let sheet = Image::gen_image_color(32, 16, WHITE);
//!
//! let mut options = AtlasOptions::default();
//! options.grid_width = 2.0;
//! options.grid_height = 1.0;
//! options.regions = [
//!     ("hero".to_string(), RegionSpec::new(0.0, 0.0)),
//!     ("slime".to_string(), RegionSpec::new(1.0, 0.0)),
//! ]
//! .into_iter()
//! .collect();
//!
//! let sprites = texture_atlas(&sheet, &options)?;
//! assert_eq!(sprites["hero"].width(), 16);
//! assert_eq!(sprites["slime"].width(), 16);
//! # Ok::<(), macroquad_atlas::AtlasError>(())
//! ```

mod atlas;
mod config;
mod content;
mod crop;
mod error;
mod resolve;

pub use atlas::{load_texture_atlas, texture_atlas, texture_atlas_textures, texture_atlas_with};
pub use config::{AtlasOptions, RegionSpec, RepeatOffset};
pub use content::{texture_atlas_content_processor, ContentItem, ContentRegistry, ContentStatus};
pub use crop::chop_region;
pub use error::AtlasError;
pub use resolve::{resolve_regions, ResolvedRect, DEFAULT_REPEAT_NAME_FORMAT};
