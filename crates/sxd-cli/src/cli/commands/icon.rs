//! `sxd icon` – render the app icon and adaptive icon foreground.

use anyhow::{Context, Result};
use std::path::PathBuf;
use sxd_core::config::IconConfig;
use sxd_core::icon::{self, IconSpec, WrittenIcon};

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default)]
pub struct IconOverrides {
    pub out_dir: Option<PathBuf>,
    pub text: Option<String>,
    pub size: Option<u32>,
    /// Tried before the configured font chain.
    pub fonts: Vec<PathBuf>,
}

impl IconOverrides {
    pub fn apply(self, mut cfg: IconConfig) -> IconConfig {
        if let Some(dir) = self.out_dir {
            cfg.output_dir = dir;
        }
        if let Some(text) = self.text {
            cfg.text = text;
        }
        if let Some(size) = self.size {
            // Font sizes and offset are tuned for the configured canvas; keep their proportions.
            if cfg.size > 0 && size != cfg.size {
                let scale = |v: i64| v * size as i64 / cfg.size as i64;
                cfg.font_px = scale(cfg.font_px as i64).max(1) as u32;
                cfg.foreground_font_px = scale(cfg.foreground_font_px as i64).max(1) as u32;
                cfg.vertical_offset = scale(cfg.vertical_offset as i64) as i32;
            }
            cfg.size = size;
        }
        if !self.fonts.is_empty() {
            let mut chain = self.fonts;
            chain.append(&mut cfg.font_paths);
            cfg.font_paths = chain;
        }
        cfg
    }
}

fn print_written(icon: &WrittenIcon, size: u32) {
    let name = icon
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| icon.path.display().to_string());
    println!("✅ Created {name} ({size}x{size})");
    println!("   font: {}", icon.font);
}

pub fn run_icon(cfg: IconConfig, overrides: IconOverrides) -> Result<()> {
    let cfg = overrides.apply(cfg);
    let spec = IconSpec::from_config(&cfg).context("invalid icon settings")?;
    let out = icon::generate_icons(&spec).context("generate icons")?;

    print_written(&out.app_icon, spec.size);
    print_written(&out.foreground, spec.size);

    println!();
    println!("🎉 Icon files created successfully!");
    println!();
    println!("Next steps:");
    println!("1. Run: flutter pub get");
    println!("2. Run: dart run flutter_launcher_icons");
    println!("3. Rebuild your app: flutter run");
    Ok(())
}
