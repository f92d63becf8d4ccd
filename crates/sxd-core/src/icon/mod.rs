//! Placeholder app-icon generation: a text label on a colored square.
//!
//! Two PNGs are produced: an opaque app icon (RGB) and a transparent adaptive
//! icon foreground (RGBA) with a slightly smaller label.

mod builtin;
mod color;
mod compose;
mod error;
mod font;

pub use color::HexColor;
pub use compose::{compose_opaque, compose_transparent, ink_bounds, InkBounds};
pub use error::IconError;
pub use font::{FontChain, FontSource, TextMask};

use crate::config::IconConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Validated icon parameters.
#[derive(Debug, Clone)]
pub struct IconSpec {
    pub size: u32,
    pub background: HexColor,
    pub text_color: HexColor,
    pub text: String,
    pub font_px: u32,
    pub foreground_font_px: u32,
    /// Added to the centered y position; negative moves the label up.
    pub vertical_offset: i32,
    pub fonts: FontChain,
    pub output_dir: PathBuf,
    pub app_icon_name: String,
    pub foreground_name: String,
}

impl IconSpec {
    pub fn from_config(cfg: &IconConfig) -> Result<Self, IconError> {
        if cfg.size == 0 {
            return Err(IconError::ZeroSize);
        }
        if cfg.font_px == 0 || cfg.foreground_font_px == 0 {
            return Err(IconError::ZeroFontSize);
        }
        if cfg.text.trim().is_empty() {
            return Err(IconError::EmptyText);
        }
        Ok(Self {
            size: cfg.size,
            background: cfg.background,
            text_color: cfg.text_color,
            text: cfg.text.clone(),
            font_px: cfg.font_px,
            foreground_font_px: cfg.foreground_font_px,
            vertical_offset: cfg.vertical_offset,
            fonts: FontChain::new(cfg.font_paths.iter().cloned()),
            output_dir: cfg.output_dir.clone(),
            app_icon_name: cfg.app_icon_name.clone(),
            foreground_name: cfg.foreground_name.clone(),
        })
    }
}

/// One written image and the font that rendered its label.
#[derive(Debug, Clone)]
pub struct WrittenIcon {
    pub path: PathBuf,
    pub font: FontSource,
}

#[derive(Debug, Clone)]
pub struct IconOutputs {
    pub app_icon: WrittenIcon,
    pub foreground: WrittenIcon,
}

/// Render both icons and save them as PNG under `spec.output_dir`.
pub fn generate_icons(spec: &IconSpec) -> Result<IconOutputs, IconError> {
    fs::create_dir_all(&spec.output_dir).map_err(|source| IconError::CreateDir {
        path: spec.output_dir.clone(),
        source,
    })?;

    let main = spec
        .fonts
        .rasterize(&spec.text, spec.font_px, spec.size, spec.vertical_offset);
    let app_icon = compose_opaque(&main.mask, spec.background.rgb(), spec.text_color.rgb());
    let app_icon_path = spec.output_dir.join(&spec.app_icon_name);
    save_png(image::DynamicImage::ImageRgb8(app_icon), &app_icon_path)?;
    tracing::info!(path = %app_icon_path.display(), font = %main.source, "wrote app icon");

    let fg = spec.fonts.rasterize(
        &spec.text,
        spec.foreground_font_px,
        spec.size,
        spec.vertical_offset,
    );
    let foreground = compose_transparent(&fg.mask, spec.text_color.rgb());
    let foreground_path = spec.output_dir.join(&spec.foreground_name);
    save_png(image::DynamicImage::ImageRgba8(foreground), &foreground_path)?;
    tracing::info!(path = %foreground_path.display(), font = %fg.source, "wrote foreground icon");

    Ok(IconOutputs {
        app_icon: WrittenIcon {
            path: app_icon_path,
            font: main.source,
        },
        foreground: WrittenIcon {
            path: foreground_path,
            font: fg.source,
        },
    })
}

fn save_png(img: image::DynamicImage, path: &Path) -> Result<(), IconError> {
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|source| IconError::Save {
            path: path.to_path_buf(),
            source,
        })
}
