use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::checksum::AttributionEntry;
use crate::icon::HexColor;

/// Icon generator settings (`[icon]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Square canvas size in pixels.
    pub size: u32,
    pub background: HexColor,
    pub text_color: HexColor,
    pub text: String,
    /// Font size in pixels for the app icon label.
    pub font_px: u32,
    /// Font size in pixels for the adaptive icon foreground label.
    pub foreground_font_px: u32,
    /// Vertical nudge applied after centering; negative moves the label up.
    pub vertical_offset: i32,
    /// Font files tried in order before the built-in bitmap font.
    pub font_paths: Vec<PathBuf>,
    pub output_dir: PathBuf,
    pub app_icon_name: String,
    pub foreground_name: String,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            size: 1024,
            background: HexColor::new(0x48, 0x6A, 0xFF),
            text_color: HexColor::new(0xFF, 0xFF, 0xFF),
            text: "S-RD".to_string(),
            font_px: 400,
            foreground_font_px: 350,
            vertical_offset: -50,
            font_paths: vec![
                PathBuf::from("/System/Library/Fonts/Helvetica.ttc"),
                PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"),
            ],
            output_dir: PathBuf::from("."),
            app_icon_name: "app_icon.png".to_string(),
            foreground_name: "app_icon_foreground.png".to_string(),
        }
    }
}

/// Checksum generator settings (`[checksums]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecksumConfig {
    pub master_key: String,
    /// Hashed and printed in this order.
    pub entries: Vec<AttributionEntry>,
}

impl Default for ChecksumConfig {
    fn default() -> Self {
        Self {
            master_key: "RD-2025-SCREENX-7d4a9f2e".to_string(),
            entries: vec![
                AttributionEntry::new("_S1", "rajdeep-das"),
                AttributionEntry::new("_S2", "rajdeepdas.india@gmail.com"),
                AttributionEntry::new("_S3", "v1.0 • Built by RD"),
                AttributionEntry::new("_S4", "© 2025 • RD"),
                AttributionEntry::new("_S5", "https://github.com/rajdeep-das"),
            ],
        }
    }
}

/// Global configuration loaded from `~/.config/sxd/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SxdConfig {
    pub icon: IconConfig,
    pub checksums: ChecksumConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sxd")?;
    Ok(xdg_dirs.get_config_home().join("sxd").join("config.toml"))
}

/// Load configuration from `path`, or built-in defaults if the file does not exist.
/// Never writes to disk.
pub fn load(path: &Path) -> Result<SxdConfig> {
    if !path.exists() {
        tracing::debug!("no config at {}; using defaults", path.display());
        return Ok(SxdConfig::default());
    }
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SxdConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

/// Write the default configuration to `path` unless a file is already there.
/// Returns true if a file was created.
pub fn init(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    let toml = toml::to_string_pretty(&SxdConfig::default())?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
    tracing::info!("created default config at {}", path.display());
    Ok(true)
}
