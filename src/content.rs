//! Adapter for slicing atlases inside a content-loading pipeline.
//!
//! A game usually keeps loaded assets in some name-keyed store. The
//! processor here reads a source image out of such a store, slices it,
//! and writes every sub-image back as a ready item, so later lookups can
//! ask for `"player-walk-3"` without knowing it came from an atlas.

use crate::atlas::texture_atlas;
use crate::config::AtlasOptions;
use crate::error::AtlasError;
use macroquad::texture::Image;
use std::collections::HashMap;

/// Lifecycle of an item in a content store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentStatus {
    /// Registered but not started loading
    Pending,
    /// Currently being read from disk or network
    Loading,
    /// Raw bytes loaded, not yet processed
    Loaded,
    /// Processed and usable
    Ready,
}

/// A named asset held in a content store.
#[derive(Debug, Clone)]
pub struct ContentItem {
    /// Key the item is looked up by
    pub name: String,
    /// The decoded image
    pub image: Image,
    /// Where the item is in its lifecycle
    pub status: ContentStatus,
}

impl ContentItem {
    /// Create an item that is already processed and usable.
    pub fn ready(name: String, image: Image) -> Self {
        ContentItem {
            name,
            image,
            status: ContentStatus::Ready,
        }
    }
}

/// The two store operations the atlas processor needs.
///
/// Implemented for `HashMap<String, ContentItem>` out of the box; a real
/// asset manager can implement it on its own store type instead.
pub trait ContentRegistry {
    /// Look up an item by name.
    fn get(&self, name: &str) -> Option<&ContentItem>;
    /// Insert an item under its own name, replacing any previous entry.
    fn put(&mut self, item: ContentItem);
}

impl ContentRegistry for HashMap<String, ContentItem> {
    fn get(&self, name: &str) -> Option<&ContentItem> {
        HashMap::get(self, name)
    }

    fn put(&mut self, item: ContentItem) {
        self.insert(item.name.clone(), item);
    }
}

/// Slice an already-loaded image from `registry` and store every
/// sub-image back into it as a [`ContentStatus::Ready`] item.
///
/// The source item is left in place. Nothing is written if resolution or
/// cropping fails. Async so it can slot into a loading pipeline next to
/// processors that do await.
pub async fn texture_atlas_content_processor<R: ContentRegistry>(
    registry: &mut R,
    options: &AtlasOptions,
    image_name: &str,
) -> Result<(), AtlasError> {
    let image = registry
        .get(image_name)
        .map(|item| item.image.clone())
        .ok_or_else(|| AtlasError::MissingImage(image_name.to_string()))?;

    let atlas = texture_atlas(&image, options)?;
    for (name, slice) in atlas {
        registry.put(ContentItem::ready(name, slice));
    }

    Ok(())
}
