use super::*;

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_accepts_exact_names() {
    assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
}

#[test]
fn parse_rejects_other_values() {
    for raw in ["", "Dark", "LIGHT", " dark", "auto", "system"] {
        let err = raw.parse::<Theme>().unwrap_err();
        assert_eq!(err, ParseThemeError(raw.to_owned()));
    }
}

#[test]
fn parse_error_message_quotes_value() {
    let err = "sepia".parse::<Theme>().unwrap_err();
    assert_eq!(err.to_string(), "unknown theme: \"sepia\"");
}

#[test]
fn display_matches_as_str() {
    assert_eq!(Theme::Light.to_string(), "light");
    assert_eq!(Theme::Dark.to_string(), "dark");
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn toggled_flips_between_members() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

#[test]
fn default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn prefers_dark_maps_to_dark() {
    assert_eq!(Theme::from_prefers_dark(true), Theme::Dark);
    assert_eq!(Theme::from_prefers_dark(false), Theme::Light);
}

// =============================================================
// Toggle presentation
// =============================================================

#[test]
fn dark_theme_offers_light_mode() {
    assert_eq!(Theme::Dark.toggle_icon(), "\u{2600}\u{FE0F}");
    assert_eq!(Theme::Dark.toggle_title(), "Switch to light mode");
}

#[test]
fn light_theme_offers_dark_mode() {
    assert_eq!(Theme::Light.toggle_icon(), "\u{1F319}");
    assert_eq!(Theme::Light.toggle_title(), "Switch to dark mode");
}

// =============================================================
// Serde
// =============================================================

#[test]
fn serializes_as_lowercase_string() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    let theme: Theme = serde_json::from_str("\"light\"").unwrap();
    assert_eq!(theme, Theme::Light);
}
