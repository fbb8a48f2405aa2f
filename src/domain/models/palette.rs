#[cfg(test)]
#[path = "palette_test.rs"]
mod tests;

use std::collections::HashMap;

use ratatui::style::Color;

/// Terminal colours taken from a backend theme stylesheet. Themes are sent as
/// CSS custom properties on `:root`; only the sRGB forms can be mapped onto a
/// terminal, anything else keeps the default colour for that slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub text_muted: Color,
    pub highlight: Color,
    pub border: Color,
    pub danger: Color,
    pub warning: Color,
    pub success: Color,
}

impl Default for Palette {
    fn default() -> Palette {
        return Palette {
            background: Color::Reset,
            text: Color::Reset,
            text_muted: Color::DarkGray,
            highlight: Color::Rgb(162, 0, 255),
            border: Color::Gray,
            danger: Color::Red,
            warning: Color::Rgb(255, 165, 0),
            success: Color::Green,
        };
    }
}

fn parse_hex(text: &str) -> Option<Color> {
    let hex = text.strip_prefix('#')?;
    let channel = |s: &str| return u8::from_str_radix(s, 16).ok();

    match hex.len() {
        3 => {
            let mut chars = hex.chars().map(|c| return c.to_string().repeat(2));
            let r = channel(&chars.next()?)?;
            let g = channel(&chars.next()?)?;
            let b = channel(&chars.next()?)?;
            return Some(Color::Rgb(r, g, b));
        }
        6 | 8 => {
            let r = channel(hex.get(0..2)?)?;
            let g = channel(hex.get(2..4)?)?;
            let b = channel(hex.get(4..6)?)?;
            return Some(Color::Rgb(r, g, b));
        }
        _ => return None,
    }
}

fn parse_rgb(text: &str) -> Option<Color> {
    let inner = text
        .strip_prefix("rgba(")
        .or_else(|| return text.strip_prefix("rgb("))?
        .strip_suffix(')')?;

    let channels = inner
        .split(|c: char| return c == ',' || c.is_whitespace() || c == '/')
        .filter(|e| return !e.is_empty())
        .take(3)
        .map(|e| return e.parse::<f32>().ok().map(|v| return v.round().clamp(0.0, 255.0) as u8))
        .collect::<Option<Vec<u8>>>()?;

    if channels.len() != 3 {
        return None;
    }

    return Some(Color::Rgb(channels[0], channels[1], channels[2]));
}

pub fn parse_color(text: &str) -> Option<Color> {
    let trimmed = text.trim();
    if trimmed.starts_with('#') {
        return parse_hex(trimmed);
    }
    return parse_rgb(trimmed);
}

/// Collects `--name: value;` declarations from a stylesheet.
pub fn custom_properties(css: &str) -> HashMap<String, String> {
    return css
        .split(|c| return c == ';' || c == '{' || c == '}')
        .filter_map(|declaration| {
            let (name, value) = declaration.split_once(':')?;
            let name = name.trim().strip_prefix("--")?;
            return Some((name.to_string(), value.trim().to_string()));
        })
        .collect();
}

impl Palette {
    pub fn from_css(css: &str) -> Palette {
        let props = custom_properties(css);
        let mut palette = Palette::default();

        let slots: [(&str, &mut Color); 8] = [
            ("bg", &mut palette.background),
            ("text", &mut palette.text),
            ("text-muted", &mut palette.text_muted),
            ("highlight", &mut palette.highlight),
            ("border", &mut palette.border),
            ("danger", &mut palette.danger),
            ("warning", &mut palette.warning),
            ("success", &mut palette.success),
        ];

        for (name, slot) in slots {
            if let Some(color) = props.get(name).and_then(|e| return parse_color(e)) {
                *slot = color;
            }
        }

        return palette;
    }
}
