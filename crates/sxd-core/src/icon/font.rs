//! Font fallback chain: configured font files in priority order, then the
//! embedded bitmap font.
//!
//! TrueType/OpenType files are loaded into an isolated font database and the
//! label is laid out as SVG text by usvg, rasterized by resvg, and reduced to a
//! coverage mask from the alpha channel.

use anyhow::{anyhow, bail, Context, Result};
use image::{GrayImage, Luma};
use std::fmt;
use std::path::{Path, PathBuf};
use usvg::fontdb;

use super::builtin;

/// The resource that actually rendered a mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    File(PathBuf),
    Builtin,
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSource::File(p) => write!(f, "{}", p.display()),
            FontSource::Builtin => write!(f, "built-in bitmap font"),
        }
    }
}

/// Centered text coverage for a square canvas.
#[derive(Debug, Clone)]
pub struct TextMask {
    pub mask: GrayImage,
    pub source: FontSource,
}

/// Ordered font files to try before falling back to the built-in font.
#[derive(Debug, Clone, Default)]
pub struct FontChain {
    paths: Vec<PathBuf>,
}

impl FontChain {
    pub fn new(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            paths: paths.into_iter().collect(),
        }
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Render `text` at `font_px` into a `canvas x canvas` mask using the first
    /// tier that produces ink. Never fails: the built-in font is the last resort.
    pub fn rasterize(&self, text: &str, font_px: u32, canvas: u32, vertical_offset: i32) -> TextMask {
        for path in &self.paths {
            match rasterize_font_file(path, text, font_px, canvas, vertical_offset) {
                Ok(mask) => {
                    tracing::debug!(path = %path.display(), font_px, "rendered text with font file");
                    return TextMask {
                        mask,
                        source: FontSource::File(path.clone()),
                    };
                }
                Err(e) => {
                    tracing::debug!(path = %path.display(), "font tier skipped: {:#}", e);
                }
            }
        }
        if !self.paths.is_empty() {
            tracing::warn!("no usable font file in chain; using built-in bitmap font");
        }
        TextMask {
            mask: builtin::rasterize(text, font_px, canvas, vertical_offset),
            source: FontSource::Builtin,
        }
    }
}

fn rasterize_font_file(
    path: &Path,
    text: &str,
    font_px: u32,
    canvas: u32,
    vertical_offset: i32,
) -> Result<GrayImage> {
    let mut opt = usvg::Options::default();
    let db = opt.fontdb_mut();
    db.load_font_file(path)
        .with_context(|| format!("load font {}", path.display()))?;
    let face = db
        .faces()
        .next()
        .ok_or_else(|| anyhow!("no usable face in {}", path.display()))?;
    let family = face
        .families
        .first()
        .map(|(name, _)| name.clone())
        .ok_or_else(|| anyhow!("font face has no family name"))?;
    let weight = face.weight.0;
    let style = match face.style {
        fontdb::Style::Normal => "normal",
        fontdb::Style::Italic => "italic",
        fontdb::Style::Oblique => "oblique",
    };
    opt.font_family = family.clone();

    let svg = text_svg(text, &family, weight, style, font_px, canvas);
    let tree = usvg::Tree::from_str(&svg, &opt).context("lay out text")?;
    if !tree.root().has_children() {
        bail!("font produced no glyphs for {text:?}");
    }

    // Text sits at the origin baseline; measure its ink and translate so the ink
    // box is centered on the canvas.
    let bbox = tree.root().abs_bounding_box();
    if !(bbox.width() > 0.0 && bbox.height() > 0.0) {
        bail!("font produced empty ink for {text:?}");
    }
    let dx = (canvas as f32 - bbox.width()) / 2.0 - bbox.x();
    let dy = (canvas as f32 - bbox.height()) / 2.0 - bbox.y() + vertical_offset as f32;

    let mut pixmap =
        tiny_skia::Pixmap::new(canvas, canvas).ok_or_else(|| anyhow!("allocate {canvas}px pixmap"))?;
    resvg::render(&tree, tiny_skia::Transform::from_translate(dx, dy), &mut pixmap.as_mut());

    let mask = GrayImage::from_fn(canvas, canvas, |x, y| {
        let idx = (y * canvas + x) as usize;
        Luma([pixmap.pixels()[idx].alpha()])
    });
    Ok(mask)
}

fn text_svg(text: &str, family: &str, weight: u16, style: &str, font_px: u32, canvas: u32) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{canvas}" height="{canvas}" viewBox="0 0 {canvas} {canvas}"><text x="0" y="{font_px}" xml:space="preserve" font-family="{family}" font-size="{font_px}" font-weight="{weight}" font-style="{style}" fill="#FFFFFF">{text}</text></svg>"##,
        family = escape_xml(family),
        text = escape_xml(text),
    )
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
