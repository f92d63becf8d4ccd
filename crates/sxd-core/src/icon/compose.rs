//! Composite a text coverage mask onto the output canvases.

use image::{GrayImage, Rgb, RgbImage, Rgba, RgbaImage};

/// Inclusive pixel bounds of the non-zero area of a mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InkBounds {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl InkBounds {
    pub fn width(&self) -> u32 {
        self.right - self.left + 1
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top + 1
    }
}

/// Bounds of all pixels with non-zero coverage, or `None` for a blank mask.
pub fn ink_bounds(mask: &GrayImage) -> Option<InkBounds> {
    let mut bounds: Option<InkBounds> = None;
    for (x, y, p) in mask.enumerate_pixels() {
        if p.0[0] == 0 {
            continue;
        }
        bounds = Some(match bounds {
            None => InkBounds {
                left: x,
                top: y,
                right: x,
                bottom: y,
            },
            Some(b) => InkBounds {
                left: b.left.min(x),
                top: b.top.min(y),
                right: b.right.max(x),
                bottom: b.bottom.max(y),
            },
        });
    }
    bounds
}

/// Blend `text` over a solid `background` by coverage. No alpha channel.
pub fn compose_opaque(mask: &GrayImage, background: Rgb<u8>, text: Rgb<u8>) -> RgbImage {
    RgbImage::from_fn(mask.width(), mask.height(), |x, y| {
        let a = mask.get_pixel(x, y).0[0];
        let mut out = [0u8; 3];
        for (i, o) in out.iter_mut().enumerate() {
            *o = blend(background.0[i], text.0[i], a);
        }
        Rgb(out)
    })
}

/// `text` colored pixels with alpha = coverage; zero coverage is `(0, 0, 0, 0)`.
pub fn compose_transparent(mask: &GrayImage, text: Rgb<u8>) -> RgbaImage {
    RgbaImage::from_fn(mask.width(), mask.height(), |x, y| {
        let a = mask.get_pixel(x, y).0[0];
        if a == 0 {
            Rgba([0, 0, 0, 0])
        } else {
            let [r, g, b] = text.0;
            Rgba([r, g, b, a])
        }
    })
}

fn blend(bg: u8, fg: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((fg as u32 * a + bg as u32 * (255 - a) + 127) / 255) as u8
}
