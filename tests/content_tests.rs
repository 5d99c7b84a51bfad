// tests/content_tests.rs

use macroquad::prelude::*;
use macroquad_atlas::{
    texture_atlas_content_processor, AtlasError, AtlasOptions, ContentItem, ContentRegistry,
    ContentStatus, RegionSpec,
};
use std::collections::HashMap;

const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

fn registry_with_sheet() -> HashMap<String, ContentItem> {
    // 16x8 sheet, left half red, right half blue.
    let mut sheet = Image::gen_image_color(16, 8, RED);
    for y in 0..8u32 {
        for x in 8..16u32 {
            sheet.set_pixel(x, y, BLUE);
        }
    }

    let mut registry = HashMap::new();
    registry.put(ContentItem::ready("sheet".to_string(), sheet));
    registry
}

fn two_cell_options() -> AtlasOptions {
    AtlasOptions {
        grid_width: 2.0,
        grid_height: 1.0,
        regions: [
            ("left".to_string(), RegionSpec::new(0.0, 0.0)),
            ("right".to_string(), RegionSpec::new(1.0, 0.0)),
        ]
        .into_iter()
        .collect(),
        ..Default::default()
    }
}

#[tokio::test]
async fn processor_stores_ready_slices() {
    let mut registry = registry_with_sheet();

    texture_atlas_content_processor(&mut registry, &two_cell_options(), "sheet")
        .await
        .expect("sheet should process");

    // Source stays put, slices are added next to it.
    assert_eq!(registry.len(), 3);
    assert!(registry.contains_key("sheet"));

    let left = &registry["left"];
    assert_eq!(left.status, ContentStatus::Ready);
    assert_eq!(left.name, "left");
    assert_eq!(left.image.width(), 8);
    assert_eq!(left.image.get_pixel(0, 0), RED);

    assert_eq!(registry["right"].image.get_pixel(0, 0), BLUE);
}

#[tokio::test]
async fn statuses_walk_the_full_lifecycle() {
    // What a loader does around the processor: register the sheet, mark it
    // while it loads, then hand the loaded item over for slicing.
    let mut item = ContentItem {
        name: "sheet".to_string(),
        image: Image::gen_image_color(4, 4, RED),
        status: ContentStatus::Pending,
    };
    assert_eq!(item.status, ContentStatus::Pending);

    item.status = ContentStatus::Loading;
    assert_eq!(item.status, ContentStatus::Loading);

    item.status = ContentStatus::Loaded;
    let mut registry: HashMap<String, ContentItem> = HashMap::new();
    registry.put(item);

    texture_atlas_content_processor(&mut registry, &AtlasOptions::default(), "sheet")
        .await
        .expect("sheet should process");

    // Slicing promotes the outputs to Ready without touching the source.
    assert_eq!(registry["sheet"].status, ContentStatus::Loaded);
    assert_eq!(registry["default"].status, ContentStatus::Ready);
}

#[tokio::test]
async fn error_when_source_image_is_missing() {
    let mut registry: HashMap<String, ContentItem> = HashMap::new();

    let err = texture_atlas_content_processor(&mut registry, &two_cell_options(), "ghost")
        .await
        .unwrap_err();

    match err {
        AtlasError::MissingImage(name) => assert_eq!(name, "ghost"),
        other => panic!("expected MissingImage, got {:?}", other),
    }
    assert!(registry.is_empty());
}

#[tokio::test]
async fn failed_slice_leaves_registry_untouched() {
    let mut registry = registry_with_sheet();
    let options = AtlasOptions {
        regions: HashMap::new(),
        ..Default::default()
    };

    let err = texture_atlas_content_processor(&mut registry, &options, "sheet")
        .await
        .unwrap_err();

    assert!(matches!(err, AtlasError::NoRegions));
    assert_eq!(registry.len(), 1);
}

#[test]
fn missing_image_message_names_the_image() {
    let err = AtlasError::MissingImage("ghost".to_string());
    assert_eq!(err.to_string(), "Image 'ghost' not found");
}
