use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn storage_clones_share_entries() {
    let storage = MemoryStorage::new();
    let mut writer = storage.clone();
    writer.set("theme", "dark").unwrap();
    assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn storage_with_entry_is_readable() {
    let storage = MemoryStorage::new().with_entry("theme", "light");
    assert_eq!(storage.get("theme").unwrap().as_deref(), Some("light"));
    assert_eq!(storage.get("other").unwrap(), None);
}

#[test]
fn unavailable_storage_fails_both_ways() {
    let mut storage = MemoryStorage::unavailable();
    assert_eq!(storage.get("theme"), Err(HostError::Unavailable("storage")));
    assert!(storage.set("theme", "dark").is_err());
}

#[test]
fn read_only_storage_rejects_writes() {
    let mut storage = MemoryStorage::new().with_entry("theme", "dark").read_only();
    let err = storage.set("theme", "light").unwrap_err();
    assert_eq!(err.to_string(), "storage write failed: quota exceeded");
    assert_eq!(storage.value("theme").as_deref(), Some("dark"));
}

// =============================================================
// MemoryDocument / FixedColorScheme
// =============================================================

#[test]
fn document_attribute_round_trips() {
    let mut document = MemoryDocument::new();
    assert_eq!(document.attribute("data-theme").unwrap(), None);
    document.set_attribute("data-theme", "dark").unwrap();
    assert_eq!(document.attribute_value("data-theme").as_deref(), Some("dark"));
}

#[test]
fn fixed_color_scheme_answers() {
    assert!(FixedColorScheme::dark().prefers_dark("q").unwrap());
    assert!(!FixedColorScheme::light().prefers_dark("q").unwrap());
    let err = FixedColorScheme::unavailable().prefers_dark("q").unwrap_err();
    assert_eq!(err.to_string(), "matchMedia is unavailable");
}

// =============================================================
// MemoryControl
// =============================================================

#[test]
fn control_starts_blank() {
    let control = MemoryControl::new();
    assert_eq!(control.icon(), "");
    assert_eq!(control.title(), "");
    assert_eq!(control.updates(), 0);
}

#[test]
fn control_records_opposite_action() {
    let control = MemoryControl::new();
    let mut handle = control.clone();
    handle.show(Theme::Dark).unwrap();
    assert_eq!(control.icon(), "\u{2600}\u{FE0F}");
    assert_eq!(control.title(), "Switch to light mode");
    handle.show(Theme::Light).unwrap();
    assert_eq!(control.title(), "Switch to dark mode");
    assert_eq!(control.updates(), 2);
}
