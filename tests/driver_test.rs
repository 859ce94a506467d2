use anyhow::Result;
use ext_icons::{IconConfig, IconEngine, LocalStorage, Settings, WritePolicy};
use std::process::Command;
use tempfile::TempDir;

const EXPECTED_FILES: [(&str, u32); 4] = [
    ("icon16.png", 16),
    ("icon32.png", 32),
    ("icon48.png", 48),
    ("icon128.png", 128),
];

fn assert_icons(dir: &std::path::Path) -> Result<()> {
    for (name, size) in EXPECTED_FILES {
        let img = image::open(dir.join(name))?;
        assert_eq!((img.width(), img.height()), (size, size), "{}", name);
        assert_eq!(img.color(), image::ColorType::Rgba8);
    }
    Ok(())
}

/// 預設設定輸出四個檔案與五行訊息
#[test]
fn test_engine_writes_default_icon_set() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let settings = Settings {
        output_dir: temp_dir.path().to_path_buf(),
        ..Settings::default()
    };

    let engine = IconEngine::from_config(LocalStorage::new(temp_dir.path()), &settings);
    let mut out = Vec::new();
    let summary = engine.run(&mut out)?;

    assert_eq!(summary.created.len(), 4);
    assert!(summary.skipped.is_empty());

    let text = String::from_utf8(out)?;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    for (line, (name, _)) in lines.iter().zip(EXPECTED_FILES) {
        assert!(line.starts_with("Created "));
        assert!(line.ends_with(name), "{}", line);
    }
    assert_eq!(lines[4], "All icons created successfully!");

    assert_icons(temp_dir.path())
}

#[test]
fn test_engine_from_toml_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let out_dir = temp_dir.path().join("assets");
    let toml_content = format!(
        r#"
[output]
dir = "{}"
file_name = "badge-{{size}}.png"
sizes = [24, 64]
on_write_error = "skip"

[glyph]
text = "V"
fonts = []
"#,
        out_dir.to_string_lossy().replace('\\', "/")
    );

    let config = IconConfig::from_toml_str(&toml_content)?;
    let settings = Settings::default().apply_toml(&config)?;
    assert_eq!(settings.on_write_error, WritePolicy::Skip);

    let engine = IconEngine::from_config(LocalStorage::new(&settings.output_dir), &settings);
    let summary = engine.run(&mut Vec::<u8>::new())?;

    assert_eq!(summary.created.len(), 2);
    // 64/3 = 21 gives the built-in font three pixels per cell
    assert!(!summary.created[1].glyph.is_placeholder());
    assert!(out_dir.join("badge-24.png").exists());
    assert!(out_dir.join("badge-64.png").exists());
    Ok(())
}

/// 不帶參數執行，在目前目錄產生四個圖示
#[test]
fn test_binary_without_arguments() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = Command::new(env!("CARGO_BIN_EXE_ext-icons"))
        .current_dir(temp_dir.path())
        .env_remove("RUST_LOG")
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec![
            "Created icon16.png",
            "Created icon32.png",
            "Created icon48.png",
            "Created icon128.png",
            "All icons created successfully!",
        ]
    );

    assert_icons(temp_dir.path())
}

#[test]
fn test_binary_dry_run_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = Command::new(env!("CARGO_BIN_EXE_ext-icons"))
        .current_dir(temp_dir.path())
        .args(["--dry-run", "--sizes", "16,32"])
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout.lines().count(), 2);
    assert!(stdout.contains("icon16.png"));
    assert_eq!(std::fs::read_dir(temp_dir.path())?.count(), 0);
    Ok(())
}

#[test]
fn test_binary_rejects_invalid_size() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let output = Command::new(env!("CARGO_BIN_EXE_ext-icons"))
        .current_dir(temp_dir.path())
        .args(["--sizes", "0"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    Ok(())
}

/// 寫入失敗時預設中止，並以非零碼結束
#[test]
fn test_binary_write_failure_fails_run() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, b"")?;

    let output = Command::new(env!("CARGO_BIN_EXE_ext-icons"))
        .current_dir(temp_dir.path())
        .args(["--output-dir", "blocker"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    Ok(())
}
