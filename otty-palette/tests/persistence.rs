use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use otty_palette::{
    ColorPalette, PaletteDocument, PaletteLoadStatus, WriteOutcome,
    decode_str, load_palette, save_palette,
};

#[test]
fn given_edited_palette_when_persisted_and_reloaded_then_state_survives() {
    init_logging();
    let root = test_temp_dir("edit_cycle");
    let path = root.join("theme.json");

    let mut palette = ColorPalette::new(8, -16_777_216, 0)
        .expect("palette should be created");
    palette.set_cursor(5);
    palette.set_current(-65_536);
    palette.set_color(0, 255).expect("index 0 is in range");

    let outcome = save_palette(&path, &palette, false)
        .expect("palette should save successfully");
    assert_eq!(outcome, WriteOutcome::Created);

    let mut loaded = load_palette(&path)
        .into_palette()
        .expect("saved palette should load");
    assert_eq!(loaded, palette);
    assert_eq!(loaded.current(), -65_536);

    loaded.set_cursor(i64::MAX);
    loaded.set_current(1);
    let outcome = save_palette(&path, &loaded, true)
        .expect("palette should overwrite successfully");
    assert_eq!(outcome, WriteOutcome::Overwritten);

    let reloaded = load_palette(&path)
        .into_palette()
        .expect("overwritten palette should load");
    assert_eq!(reloaded.cursor(), 7);
    assert_eq!(reloaded.colors()[7], 1);

    fs::remove_dir_all(&root).expect("temporary directory should be removed");
}

#[test]
fn given_hand_written_file_with_stale_index_when_loaded_then_cursor_is_clamped()
{
    init_logging();
    let root = test_temp_dir("stale_index");
    let path = root.join("theme.json");
    fs::write(&path, "{\"index\": 12, \"colors\": \"[1, -2, 3]\"}")
        .expect("test payload should be written");

    let loaded = load_palette(&path);

    assert!(matches!(loaded.status(), PaletteLoadStatus::Loaded));
    let palette = loaded.into_palette().expect("palette should load");
    assert_eq!(palette.colors(), &[1, -2, 3]);
    assert_eq!(palette.cursor(), 2);

    fs::remove_dir_all(&root).expect("temporary directory should be removed");
}

#[test]
fn given_resized_copy_when_encoded_then_text_reflects_new_size() {
    let palette = ColorPalette::from_colors(&[1, 2, 3, 4, 5], 4)
        .expect("palette should be created");

    let grown = palette.resized(7, 6).expect("resize should succeed");
    let document = PaletteDocument::from_palette(&grown);

    assert_eq!(document.colors(), "[1, 2, 3, 4, 5, 0, 0]");
    assert_eq!(document.index(), 6);
    assert_eq!(
        PaletteDocument::parse_text(&document.to_text())
            .expect("text should parse"),
        document
    );
    assert_eq!(decode_str(&document.to_text()).expect("decode"), grown);
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn test_temp_dir(test_name: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be monotonic")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "otty-palette-it-{test_name}-{stamp}-{}",
        std::process::id()
    ));

    fs::create_dir_all(&dir).expect("temporary directory should be created");
    dir
}
