use crate::error::AtlasError;
use crate::resolve::ResolvedRect;
use macroquad::color::BLANK;
use macroquad::texture::Image;

/// Copy one resolved rectangle out of `source` into a fresh image.
///
/// The output is always exactly `rect.width` by `rect.height`. Parts of the
/// rectangle lying outside the source are left transparent rather than
/// clipped away, so a region hanging off the edge of the sheet still slices
/// to its full declared size.
pub fn chop_region(source: &Image, rect: &ResolvedRect) -> Result<Image, AtlasError> {
    if rect.width < 0
        || rect.height < 0
        || rect.width > u16::MAX as i32
        || rect.height > u16::MAX as i32
    {
        return Err(AtlasError::Surface {
            width: rect.width,
            height: rect.height,
        });
    }

    let mut out = Image::gen_image_color(rect.width as u16, rect.height as u16, BLANK);
    if rect.width == 0 || rect.height == 0 {
        return Ok(out);
    }

    let src_width = source.width() as i64;
    let src_height = source.height() as i64;

    // Intersection of the rectangle with the source, in source coordinates.
    let left = (rect.x as i64).max(0);
    let top = (rect.y as i64).max(0);
    let right = (rect.x as i64 + rect.width as i64).min(src_width);
    let bottom = (rect.y as i64 + rect.height as i64).min(src_height);
    if left >= right || top >= bottom {
        return Ok(out);
    }

    let row_len = ((right - left) * 4) as usize;
    let out_width = rect.width as usize;
    for src_row in top..bottom {
        let dst_row = (src_row - rect.y as i64) as usize;
        let dst_col = (left - rect.x as i64) as usize;
        let src_start = ((src_row * src_width + left) * 4) as usize;
        let dst_start = (dst_row * out_width + dst_col) * 4;
        out.bytes[dst_start..dst_start + row_len]
            .copy_from_slice(&source.bytes[src_start..src_start + row_len]);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::color::Color;

    // Channel values of 0 or 255 survive the f32 round trip exactly.
    const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);

    fn two_tone_source() -> Image {
        // 8x8, left half red, right half blue.
        let mut image = Image::gen_image_color(8, 8, RED);
        for y in 0..8 {
            for x in 4..8 {
                image.set_pixel(x, y, BLUE);
            }
        }
        image
    }

    #[test]
    fn copies_interior_rect_verbatim() {
        let source = two_tone_source();
        let out = chop_region(&source, &ResolvedRect::new(2, 2, 4, 4)).unwrap();

        assert_eq!(out.width(), 4);
        assert_eq!(out.height(), 4);
        assert_eq!(out.get_pixel(0, 0), RED);
        assert_eq!(out.get_pixel(3, 0), BLUE);
        assert_eq!(out.get_pixel(3, 3), BLUE);
    }

    #[test]
    fn out_of_bounds_area_stays_transparent() {
        let source = two_tone_source();
        let out = chop_region(&source, &ResolvedRect::new(6, 6, 4, 4)).unwrap();

        assert_eq!(out.width(), 4);
        assert_eq!(out.height(), 4);
        // Overlapping corner keeps source pixels.
        assert_eq!(out.get_pixel(0, 0), BLUE);
        assert_eq!(out.get_pixel(1, 1), BLUE);
        // The rest was never written.
        assert_eq!(out.get_pixel(2, 2), BLANK);
        assert_eq!(out.get_pixel(3, 0), BLANK);
        assert_eq!(out.get_pixel(0, 3), BLANK);
    }

    #[test]
    fn negative_origin_pads_top_left() {
        let source = two_tone_source();
        let out = chop_region(&source, &ResolvedRect::new(-2, -2, 4, 4)).unwrap();

        assert_eq!(out.get_pixel(0, 0), BLANK);
        assert_eq!(out.get_pixel(1, 1), BLANK);
        assert_eq!(out.get_pixel(2, 2), RED);
        assert_eq!(out.get_pixel(3, 3), RED);
    }

    #[test]
    fn fully_disjoint_rect_is_all_transparent() {
        let source = two_tone_source();
        let out = chop_region(&source, &ResolvedRect::new(100, 100, 2, 2)).unwrap();

        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(out.get_pixel(x, y), BLANK);
            }
        }
    }

    #[test]
    fn zero_size_rect_is_valid_and_empty() {
        let source = two_tone_source();
        let out = chop_region(&source, &ResolvedRect::new(3, 3, 0, 0)).unwrap();

        assert_eq!(out.width(), 0);
        assert_eq!(out.height(), 0);
        assert!(out.bytes.is_empty());
    }

    #[test]
    fn negative_size_is_a_surface_error() {
        let source = two_tone_source();
        let err = chop_region(&source, &ResolvedRect::new(0, 0, -1, 4)).unwrap_err();
        assert!(matches!(
            err,
            AtlasError::Surface {
                width: -1,
                height: 4
            }
        ));
    }
}
