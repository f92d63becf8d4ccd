//! Embedded 5x7 bitmap font: the last tier of the font chain. It needs no files
//! and never fails.

use image::{GrayImage, Luma};

const GLYPH_W: u32 = 5;
const GLYPH_H: u32 = 7;
/// Glyph width plus one column of spacing.
const ADVANCE: u32 = GLYPH_W + 1;

/// Rows top to bottom; bit 4 is the leftmost column.
fn glyph(c: char) -> [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        ' ' => [0x00; 7],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '_' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        ',' => [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        '!' => [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
        '?' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04],
        '+' => [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00],
        '/' => [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00],
        '&' => [0x0C, 0x12, 0x14, 0x08, 0x15, 0x12, 0x0D],
        '#' => [0x0A, 0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x0A],
        '(' => [0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02],
        ')' => [0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08],
        '\'' => [0x04, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00],
        // Hollow box for anything without a glyph.
        _ => [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1F],
    }
}

/// Render `text` into a `canvas x canvas` coverage mask, centered, then shifted
/// vertically by `vertical_offset` pixels.
///
/// One font pixel becomes a square module sized so the cap height is about 70%
/// of `font_px`, shrunk if needed so the whole line fits the canvas width.
pub fn rasterize(text: &str, font_px: u32, canvas: u32, vertical_offset: i32) -> GrayImage {
    let mut mask = GrayImage::new(canvas, canvas);
    let glyphs: Vec<[u8; 7]> = text.chars().map(glyph).collect();
    if glyphs.is_empty() || canvas == 0 {
        return mask;
    }

    // u64 so oversized font_px or text length cannot overflow before clamping.
    let cols = glyphs.len() as u64 * ADVANCE as u64 - 1;
    let wanted = (font_px as u64 * 7 / 10 / GLYPH_H as u64).max(1);
    let module = wanted
        .min(canvas as u64 / cols)
        .min((canvas / GLYPH_H) as u64)
        .max(1) as u32;

    let ink_w = cols as i64 * module as i64;
    let ink_h = (GLYPH_H * module) as i64;
    let x0 = (canvas as i64 - ink_w) / 2;
    let y0 = (canvas as i64 - ink_h) / 2 + vertical_offset as i64;

    for (i, rows) in glyphs.iter().enumerate() {
        let gx = x0 + i as i64 * (ADVANCE * module) as i64;
        if gx >= canvas as i64 {
            break;
        }
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_W {
                if bits & (0x10 >> col) == 0 {
                    continue;
                }
                let px = gx + (col * module) as i64;
                let py = y0 + (row as u32 * module) as i64;
                fill_module(&mut mask, px, py, module);
            }
        }
    }
    mask
}

fn fill_module(mask: &mut GrayImage, x: i64, y: i64, module: u32) {
    let (w, h) = mask.dimensions();
    for dy in 0..module as i64 {
        for dx in 0..module as i64 {
            let (px, py) = (x + dx, y + dy);
            if px >= 0 && py >= 0 && (px as u32) < w && (py as u32) < h {
                mask.put_pixel(px as u32, py as u32, Luma([255]));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::ink_bounds;

    #[test]
    fn lowercase_maps_to_uppercase() {
        assert_eq!(glyph('s'), glyph('S'));
        assert_eq!(glyph('r'), glyph('R'));
    }

    #[test]
    fn unknown_glyph_is_hollow_box() {
        let g = glyph('•');
        assert_eq!(g[0], 0x1F);
        assert_eq!(g[3], 0x11);
    }

    #[test]
    fn label_is_centered_and_lifted() {
        let mask = rasterize("S-RD", 400, 1024, -50);
        let b = ink_bounds(&mask).expect("ink");
        // module = 400*7/10/7 = 40; 4 glyphs -> 23 columns -> 920 px wide.
        assert_eq!(b.width(), 920);
        assert_eq!(b.height(), 280);
        assert_eq!(b.left, (1024 - 920) / 2);
        assert_eq!(b.top, (1024 - 280) / 2 - 50);
    }

    #[test]
    fn long_text_shrinks_to_fit() {
        let mask = rasterize("A VERY LONG LABEL", 400, 256, 0);
        let b = ink_bounds(&mask).expect("ink");
        assert!(b.right < 256);
        assert!(b.width() <= 256);
    }

    #[test]
    fn oversized_font_px_clamps_to_canvas() {
        let mask = rasterize("S-RD", 700_000_000, 256, 0);
        let b = ink_bounds(&mask).expect("ink");
        // 23 columns on 256 px -> module 11 -> 253 px wide.
        assert_eq!(b.width(), 253);
        assert_eq!(b.height(), 77);
    }

    #[test]
    fn text_longer_than_canvas_does_not_panic() {
        let text = "X".repeat(10_000);
        let mask = rasterize(&text, u32::MAX, 64, i32::MIN / 2);
        assert_eq!(mask.dimensions(), (64, 64));
    }

    #[test]
    fn empty_text_yields_blank_mask() {
        let mask = rasterize("", 400, 64, 0);
        assert!(ink_bounds(&mask).is_none());
    }
}
