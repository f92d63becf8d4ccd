use assert_cmd::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;

/// `sxd` with XDG dirs pointed into `home` so tests never touch the real config or logs.
fn sxd(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sxd"));
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_STATE_HOME", home.join("state"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn checksums_prints_report_and_writes_no_config() {
    let home = tempfile::tempdir().expect("tempdir");
    let output = sxd(home.path())
        .arg("checksums")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).expect("utf8");

    assert!(stdout.starts_with("Generating SHA-256 checksums for attribution strings...\n"));
    assert!(stdout.contains("_S3: 'v1.0 • Built by RD'\n"));
    assert!(stdout.contains(
        "  SHA-256: 5ca4ac215e37164eb6526157d9a7fc6811b8ba698f95b4f825fd98776de719dd\n"
    ));
    assert!(stdout.contains("  Dart array: [0x5c, 0xa4, 0xac, 0x21, "));
    assert!(stdout.contains("=== MASTER KEY ===\nMaster Key: RD-2025-SCREENX-7d4a9f2e\n"));
    assert!(!home.path().join("config").join("sxd").join("config.toml").exists());
}

#[test]
fn verify_accepts_matching_and_rejects_mismatched_digest() {
    let home = tempfile::tempdir().expect("tempdir");
    sxd(home.path())
        .args([
            "verify",
            "rajdeep-das",
            "72B16D8DF2A13D1F2F9D1BA5C19FE0F3A66A5B3BE9BA7C79692F18E5B20E2895",
        ])
        .assert()
        .success();

    sxd(home.path())
        .args([
            "verify",
            "rajdeep-das",
            "[0x72, 0xb1, 0x6d, 0x8d, 0xf2, 0xa1, 0x3d, 0x1f, 0x2f, 0x9d, 0x1b, 0xa5, 0xc1, 0x9f, 0xe0, 0xf3, \
             0xa6, 0x6a, 0x5b, 0x3b, 0xe9, 0xba, 0x7c, 0x79, 0x69, 0x2f, 0x18, 0xe5, 0xb2, 0x0e, 0x28, 0x95]",
        ])
        .assert()
        .success();

    sxd(home.path())
        .args([
            "verify",
            "rajdeep-das!",
            "72b16d8df2a13d1f2f9d1ba5c19fe0f3a66a5b3be9ba7c79692f18e5b20e2895",
        ])
        .assert()
        .failure();
}

#[test]
fn icon_writes_two_pngs_into_out_dir() {
    let home = tempfile::tempdir().expect("tempdir");
    let out = home.path().join("icons");

    // A config whose only font is missing keeps the run on the built-in font.
    let cfg = home.path().join("sxd.toml");
    fs::write(
        &cfg,
        "[icon]\nsize = 128\nfont_px = 48\nforeground_font_px = 40\nvertical_offset = -6\nfont_paths = [\"/nonexistent/font.ttf\"]\n",
    )
    .expect("write config");

    let output = sxd(home.path())
        .args(["--config", cfg.to_string_lossy().as_ref()])
        .args(["icon", "--out-dir", out.to_string_lossy().as_ref()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).expect("utf8");
    assert!(stdout.contains("✅ Created app_icon.png (128x128)"));
    assert!(stdout.contains("✅ Created app_icon_foreground.png (128x128)"));
    assert!(stdout.contains("built-in bitmap font"));
    assert!(stdout.contains("Next steps:"));

    let main = image::open(out.join("app_icon.png")).expect("app icon");
    assert_eq!(main.color(), image::ColorType::Rgb8);
    assert_eq!((main.width(), main.height()), (128, 128));

    let fg = image::open(out.join("app_icon_foreground.png")).expect("foreground");
    assert_eq!(fg.color(), image::ColorType::Rgba8);
    assert_eq!((fg.width(), fg.height()), (128, 128));
}

#[test]
fn invalid_config_fails_with_message() {
    let home = tempfile::tempdir().expect("tempdir");
    let cfg = home.path().join("bad.toml");
    fs::write(&cfg, "[icon]\nbackground = \"nope\"\n").expect("write config");

    let output = sxd(home.path())
        .args(["--config", cfg.to_string_lossy().as_ref(), "icon"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8_lossy(&output);
    assert!(stderr.contains("sxd error:"), "stderr: {stderr}");
}

#[test]
fn config_init_creates_file_once() {
    let home = tempfile::tempdir().expect("tempdir");
    let cfg = home.path().join("conf").join("sxd.toml");

    sxd(home.path())
        .args(["--config", cfg.to_string_lossy().as_ref(), "config", "--init"])
        .assert()
        .success();
    assert!(cfg.exists());
    let first = fs::read_to_string(&cfg).expect("read config");
    assert!(first.contains("master_key = \"RD-2025-SCREENX-7d4a9f2e\""));

    sxd(home.path())
        .args(["--config", cfg.to_string_lossy().as_ref(), "config", "--init"])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&cfg).expect("read config"), first);
}
