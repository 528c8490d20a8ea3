use super::*;

#[test]
fn blank_until_theme_applied() {
    assert_eq!(toggle_icon(None), "");
    assert_eq!(toggle_label(None), "");
}

#[test]
fn label_describes_next_action() {
    assert_eq!(toggle_label(Some(Theme::Dark)), "Switch to light mode");
    assert_eq!(toggle_label(Some(Theme::Light)), "Switch to dark mode");
    assert_eq!(toggle_icon(Some(Theme::Dark)), "\u{2600}\u{FE0F}");
    assert_eq!(toggle_icon(Some(Theme::Light)), "\u{1F319}");
}

#[test]
fn signal_control_publishes_active_theme() {
    let shown = RwSignal::new(None);
    let mut control = SignalControl::new(shown);
    control.show(Theme::Dark).unwrap();
    assert_eq!(shown.get_untracked(), Some(Theme::Dark));
    control.show(Theme::Light).unwrap();
    assert_eq!(control.signal().get_untracked(), Some(Theme::Light));
}

#[test]
fn signal_control_reports_disposed_signal() {
    let shown = RwSignal::new(None);
    shown.dispose();
    let mut control = SignalControl::new(shown);
    assert_eq!(control.show(Theme::Dark), Err(HostError::Unavailable("toggle control")));
}
