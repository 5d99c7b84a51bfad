use macroquad::prelude::*;
use macroquad_atlas::{texture_atlas_textures, AtlasOptions, RegionSpec};

fn window_conf() -> Conf {
    Conf {
        window_title: "Atlas Viewer".into(),
        window_width: 960,
        window_height: 540,
        ..Default::default()
    }
}

// A 4x2 sheet of 32px cells, each painted a flat color with a white border,
// so no asset files are needed.
fn build_sheet() -> Image {
    let colors = [RED, ORANGE, GOLD, GREEN, SKYBLUE, BLUE, PURPLE, PINK];
    let mut sheet = Image::gen_image_color(128, 64, WHITE);
    for (i, color) in colors.iter().enumerate() {
        let cell_x = (i % 4) as u32 * 32;
        let cell_y = (i / 4) as u32 * 32;
        for y in 2..30 {
            for x in 2..30 {
                sheet.set_pixel(cell_x + x, cell_y + y, *color);
            }
        }
    }
    sheet
}

fn layout() -> AtlasOptions {
    AtlasOptions {
        grid_width: 4.0,
        grid_height: 2.0,
        regions: [
            ("hero".to_string(), RegionSpec::new(0.0, 0.0)),
            (
                "chest".to_string(),
                RegionSpec {
                    x: 1.0,
                    y: 0.0,
                    width: Some(2.0),
                    height: Some(1.0),
                    ..Default::default()
                },
            ),
            (
                "walk".to_string(),
                RegionSpec {
                    x: 0.0,
                    y: 1.0,
                    repeat: Some(4),
                    ..Default::default()
                },
            ),
        ]
        .into_iter()
        .collect(),
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let sheet = build_sheet();
    let sheet_texture = Texture2D::from_image(&sheet);
    sheet_texture.set_filter(FilterMode::Nearest);

    let sprites = texture_atlas_textures(&sheet, &layout()).expect("Failed to slice atlas");

    // Stable display order for the hash map.
    let mut names: Vec<String> = sprites.keys().cloned().collect();
    names.sort();

    loop {
        clear_background(DARKGRAY);

        draw_text("source sheet", 40.0, 40.0, 24.0, WHITE);
        draw_texture_ex(
            &sheet_texture,
            40.0,
            60.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(256.0, 128.0)),
                ..Default::default()
            },
        );

        draw_text("sliced regions", 40.0, 240.0, 24.0, WHITE);
        for (i, name) in names.iter().enumerate() {
            let texture = &sprites[name];
            let x = 40.0 + (i as f32) * 120.0;
            let scale = 64.0 / texture.height();
            draw_texture_ex(
                texture,
                x,
                260.0,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(texture.width() * scale, 64.0)),
                    ..Default::default()
                },
            );
            draw_text(name, x, 350.0, 20.0, WHITE);
        }

        next_frame().await;
    }
}
