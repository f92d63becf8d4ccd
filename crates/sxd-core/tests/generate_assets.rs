//! Integration test: public API end to end for both tools.
//!
//! Icons are generated with a font chain that has no usable files, so the
//! built-in font must carry the whole run.

use sxd_core::checksum::{self, parse_byte_array_literal, ChecksumReport};
use sxd_core::config::{ChecksumConfig, IconConfig};
use sxd_core::icon::{generate_icons, ink_bounds, FontSource, IconSpec};
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn icons_complete_with_no_usable_fonts() {
    let out_dir = tempdir().unwrap();
    let cfg = IconConfig {
        font_paths: vec![
            PathBuf::from("/nonexistent/a.ttc"),
            PathBuf::from("/nonexistent/b.ttf"),
        ],
        output_dir: out_dir.path().to_path_buf(),
        ..IconConfig::default()
    };
    let spec = IconSpec::from_config(&cfg).unwrap();
    let out = generate_icons(&spec).expect("generate_icons");

    assert_eq!(out.app_icon.font, FontSource::Builtin);
    assert_eq!(out.foreground.font, FontSource::Builtin);

    let entries: Vec<_> = std::fs::read_dir(out_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(entries.len(), 2, "exactly two files: {entries:?}");

    let main = image::open(&out.app_icon.path).unwrap();
    assert_eq!(main.color(), image::ColorType::Rgb8);
    assert_eq!((main.width(), main.height()), (1024, 1024));

    let fg = image::open(&out.foreground.path).unwrap().to_rgba8();
    assert_eq!(fg.dimensions(), (1024, 1024));
    assert_eq!(fg.get_pixel(0, 0).0, [0, 0, 0, 0]);
    assert_eq!(fg.get_pixel(1023, 1023).0, [0, 0, 0, 0]);

    let alpha = image::GrayImage::from_fn(1024, 1024, |x, y| image::Luma([fg.get_pixel(x, y).0[3]]));
    let b = ink_bounds(&alpha).expect("foreground has text");
    // Label sits above center by the configured offset.
    let center_y = (b.top + b.bottom) / 2;
    assert!(center_y < 512, "label center {center_y} should be lifted");
}

#[test]
fn default_report_properties() {
    let cfg = ChecksumConfig::default();
    let report = ChecksumReport::build(&cfg.entries, &cfg.master_key);
    assert_eq!(report.records.len(), 5);

    for r in &report.records {
        let hex = r.hex();
        assert_eq!(hex.len(), 64);
        assert_eq!(hex, checksum::sha256_hex(&r.value));
        let bytes = parse_byte_array_literal(&r.byte_array_literal()).unwrap();
        assert_eq!(hex::encode(bytes), hex);
    }

    let text = report.to_string();
    assert!(text.contains("_S1: 'rajdeep-das'"));
    assert!(text.contains(
        "  SHA-256: 72b16d8df2a13d1f2f9d1ba5c19fe0f3a66a5b3be9ba7c79692f18e5b20e2895"
    ));
    assert!(text.contains(
        "Master Key SHA-256: c6c98b1758b89093d17d27e66dbd8e01f4206da2b44fe79c148e90817fe9ee5d"
    ));
}
