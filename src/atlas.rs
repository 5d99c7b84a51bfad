use crate::config::AtlasOptions;
use crate::crop::chop_region;
use crate::error::AtlasError;
use crate::resolve::{resolve_regions, ResolvedRect};
use anyhow::{Context, Result};
use macroquad::texture::{load_image, FilterMode, Image, Texture2D};
use std::collections::HashMap;

/// Slice a packed source image into named sub-images.
///
/// Regions are resolved to pixel rectangles first, so an invalid layout
/// fails before any pixels are copied. When two expanded regions end up
/// with the same name the one resolved later wins.
pub fn texture_atlas(
    image: &Image,
    options: &AtlasOptions,
) -> Result<HashMap<String, Image>, AtlasError> {
    texture_atlas_with(image, options, chop_region)
}

/// Slice an atlas with a caller-supplied cropper.
///
/// `crop` is invoked once per resolved rectangle and its output becomes
/// the map value, which makes it possible to extract something other than
/// [`Image`]s, e.g. plain rectangles for a sprite sheet viewer, or to
/// stub the pixel work out in tests.
pub fn texture_atlas_with<T, F>(
    image: &Image,
    options: &AtlasOptions,
    mut crop: F,
) -> Result<HashMap<String, T>, AtlasError>
where
    F: FnMut(&Image, &ResolvedRect) -> Result<T, AtlasError>,
{
    let resolved = resolve_regions(image.width() as u32, image.height() as u32, options)?;

    let mut output = HashMap::new();
    for (name, rect) in resolved {
        let slice = crop(image, &rect)?;
        output.insert(name, slice);
    }

    Ok(output)
}

/// Slice an atlas and upload every sub-image to the GPU.
///
/// Textures are created with nearest-neighbour filtering, which is what
/// pixel-art sprite sheets almost always want.
pub fn texture_atlas_textures(
    image: &Image,
    options: &AtlasOptions,
) -> Result<HashMap<String, Texture2D>, AtlasError> {
    texture_atlas_with(image, options, |source, rect| {
        let slice = chop_region(source, rect)?;
        let texture = Texture2D::from_image(&slice);
        texture.set_filter(FilterMode::Nearest);
        Ok(texture)
    })
}

/// Load a source image and a JSON layout from disk and slice the atlas.
///
/// Convenience wrapper for the common case of a sheet shipped alongside
/// its layout file.
pub async fn load_texture_atlas(
    image_path: &str,
    layout_path: &str,
) -> Result<HashMap<String, Image>> {
    let options = AtlasOptions::load_from_file(layout_path)
        .with_context(|| format!("Failed to load atlas layout {layout_path}"))?;
    let image = load_image(image_path)
        .await
        .with_context(|| format!("Failed to load atlas image {image_path}"))?;
    let atlas = texture_atlas(&image, &options)
        .with_context(|| format!("Failed to slice atlas image {image_path}"))?;
    Ok(atlas)
}
