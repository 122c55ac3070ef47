use super::*;

#[test]
fn attr_values_round_trip_through_parse() {
    assert_eq!(Theme::parse(Theme::Light.attr_value()), Some(Theme::Light));
    assert_eq!(Theme::parse(Theme::Dark.attr_value()), Some(Theme::Dark));
}

#[test]
fn unrecognized_stored_values_parse_as_no_choice() {
    assert_eq!(Theme::parse("true"), None);
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("DARK"), None);
}

#[test]
fn flipping_alternates_between_the_two_palettes() {
    assert_eq!(Theme::Light.flipped(), Theme::Dark);
    assert_eq!(Theme::Dark.flipped(), Theme::Light);
    assert!(Theme::Dark.is_dark());
    assert!(!Theme::Light.is_dark());
}

#[test]
fn stored_choice_wins_over_the_os_hint() {
    assert_eq!(choose(Some("light"), true), Theme::Light);
    assert_eq!(choose(Some("dark"), false), Theme::Dark);
}

#[test]
fn os_hint_decides_when_nothing_is_stored() {
    assert_eq!(choose(None, true), Theme::Dark);
    assert_eq!(choose(None, false), Theme::Light);
}

#[test]
fn corrupted_slot_falls_back_to_the_os_hint() {
    assert_eq!(choose(Some("solarized"), true), Theme::Dark);
    assert_eq!(choose(Some("solarized"), false), Theme::Light);
}

#[test]
fn each_theme_advertises_the_other_on_the_toggle() {
    assert_ne!(Theme::Light.toggle_glyph(), Theme::Dark.toggle_glyph());
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_initial_theme_is_light() {
    assert_eq!(initial_theme(), Theme::Light);
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_switch_still_flips() {
    assert_eq!(switch_theme(Theme::Light), Theme::Dark);
}
