use ratatui::style::Color;
use test_utils::theme_css_fixture;

use super::custom_properties;
use super::parse_color;
use super::Palette;

#[test]
fn it_parses_hex_colors() {
    assert_eq!(parse_color("#ff5555"), Some(Color::Rgb(255, 85, 85)));
    assert_eq!(parse_color("#888"), Some(Color::Rgb(136, 136, 136)));
    assert_eq!(parse_color("#ff555580"), Some(Color::Rgb(255, 85, 85)));
    assert_eq!(parse_color("#ff55"), None);
    assert_eq!(parse_color("#gggggg"), None);
}

#[test]
fn it_parses_rgb_colors() {
    assert_eq!(parse_color("rgb(162, 0, 255)"), Some(Color::Rgb(162, 0, 255)));
    assert_eq!(
        parse_color("rgba(14, 14, 14, 0.85)"),
        Some(Color::Rgb(14, 14, 14))
    );
    assert_eq!(parse_color("rgb(1 2 3 / 50%)"), Some(Color::Rgb(1, 2, 3)));
    assert_eq!(parse_color("rgb(1, 2)"), None);
}

#[test]
fn it_skips_unsupported_color_spaces() {
    assert_eq!(parse_color("oklch(0.5 0.1 200)"), None);
    assert_eq!(parse_color("hsl(120, 50%, 50%)"), None);
}

#[test]
fn it_collects_custom_properties() {
    let props = custom_properties(theme_css_fixture());
    assert_eq!(props.get("bg"), Some(&"rgb(20, 20, 24)".to_string()));
    assert_eq!(props.get("bg-dark"), Some(&"rgb(10, 10, 12)".to_string()));
    assert!(!props.contains_key("root"));
}

#[test]
fn it_builds_palette_from_css() {
    let palette = Palette::from_css(theme_css_fixture());
    assert_eq!(palette.background, Color::Rgb(20, 20, 24));
    assert_eq!(palette.text, Color::Rgb(224, 224, 224));
    assert_eq!(palette.text_muted, Color::Rgb(136, 136, 136));
    assert_eq!(palette.highlight, Color::Rgb(162, 0, 255));
    assert_eq!(palette.danger, Color::Rgb(255, 85, 85));
    assert_eq!(palette.success, Color::Rgb(80, 250, 123));
    // oklch isn't representable, keep the default.
    assert_eq!(palette.border, Palette::default().border);
}

#[test]
fn it_falls_back_to_defaults_for_garbage() {
    assert_eq!(Palette::from_css("not css at all"), Palette::default());
}
