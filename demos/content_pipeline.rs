use macroquad::prelude::*;
use macroquad_atlas::{
    texture_atlas_content_processor, AtlasOptions, ContentItem, ContentRegistry, RegionSpec,
};
use std::collections::HashMap;

fn window_conf() -> Conf {
    Conf {
        window_title: "Content Pipeline".into(),
        window_width: 960,
        window_height: 540,
        ..Default::default()
    }
}

// Checkerboard strip of four 16px frames.
fn build_strip() -> Image {
    let mut strip = Image::gen_image_color(64, 16, BLACK);
    for y in 0..16u32 {
        for x in 0..64u32 {
            if (x / 4 + y / 4) % 2 == 0 {
                let frame = x / 16;
                let color = [RED, GOLD, GREEN, SKYBLUE][frame as usize];
                strip.set_pixel(x, y, color);
            }
        }
    }
    strip
}

#[macroquad::main(window_conf)]
async fn main() {
    // Stand-in for a game's asset store: one loaded sheet, keyed by name.
    let mut registry: HashMap<String, ContentItem> = HashMap::new();
    registry.put(ContentItem::ready("player-walk".to_string(), build_strip()));

    let options = AtlasOptions {
        grid_width: 4.0,
        grid_height: 1.0,
        regions: [(
            "frame".to_string(),
            RegionSpec {
                x: 0.0,
                y: 0.0,
                repeat: Some(4),
                ..Default::default()
            },
        )]
        .into_iter()
        .collect(),
        ..Default::default()
    };

    texture_atlas_content_processor(&mut registry, &options, "player-walk")
        .await
        .expect("Failed to process atlas");

    for (name, item) in &registry {
        println!("{name}: {}x{} ({:?})", item.image.width(), item.image.height(), item.status);
    }

    // Animation frames are now plain registry entries.
    let frames: Vec<Texture2D> = (1..=4)
        .map(|n| {
            let item = &registry[&format!("frame-{n}")];
            let texture = Texture2D::from_image(&item.image);
            texture.set_filter(FilterMode::Nearest);
            texture
        })
        .collect();

    loop {
        clear_background(DARKGRAY);

        draw_text("frames sliced via the content registry", 40.0, 40.0, 24.0, WHITE);
        for (i, frame) in frames.iter().enumerate() {
            draw_texture_ex(
                frame,
                40.0 + (i as f32) * 100.0,
                80.0,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(80.0, 80.0)),
                    ..Default::default()
                },
            );
        }

        // Play them back as a looping animation.
        let current = (get_time() * 8.0) as usize % frames.len();
        draw_texture_ex(
            &frames[current],
            40.0,
            220.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(160.0, 160.0)),
                ..Default::default()
            },
        );

        next_frame().await;
    }
}
