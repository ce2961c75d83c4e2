//! Parsers for the CSS-like values stored in layer styles.
//!
//! Built on `winnow` 0.7. Every entry point is total: malformed input falls
//! back to a neutral value instead of failing, because style records come
//! straight from persisted editor state.

use crate::model::Color;
use winnow::ascii::{digit0, space0};
use winnow::combinator::{alt, delimited, opt, separated};
use winnow::prelude::*;
use winnow::token::{one_of, take_till};

/// Font size used when a text format carries no usable size.
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// A parsed length: absolute pixels or a percentage of the containing slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f32),
    Percent(f32),
}

impl Default for Length {
    fn default() -> Self {
        Length::Px(0.0)
    }
}

/// Parse `"12"`, `"12px"` or `"12.5%"`. Anything else (including `auto`) is `0px`.
pub fn parse_length(input: &str) -> Length {
    length.parse(input.trim()).unwrap_or_default()
}

/// Parse a font size, stripping `px` / `em` / `rem` / `pt` suffixes.
/// Unparsable or non-positive sizes yield `default`.
pub fn parse_font_size(input: &str, default: f32) -> f32 {
    (number, opt(alt(("px", "rem", "em", "pt"))))
        .map(|(value, _)| value)
        .parse(input.trim())
        .ok()
        .filter(|size| *size > 0.0 && size.is_finite())
        .unwrap_or(default)
}

/// Parse a CSS color: hex forms, `rgb()`, `rgba()` and a few keywords.
pub fn parse_color(input: &str) -> Option<Color> {
    let input = input.trim();
    match input.to_ascii_lowercase().as_str() {
        "" => None,
        "transparent" => Some(Color::rgba(0.0, 0.0, 0.0, 0.0)),
        "white" => Some(Color::rgba(1.0, 1.0, 1.0, 1.0)),
        "black" => Some(Color::rgba(0.0, 0.0, 0.0, 1.0)),
        _ if input.starts_with('#') => Color::from_hex(input),
        _ => rgb_function.parse(input).ok(),
    }
}

/// Strip a `url(...)` wrapper (with optional quotes) from a background-image value.
pub fn unwrap_url(input: &str) -> &str {
    let trimmed = input.trim();
    url_function.parse(trimmed).unwrap_or(trimmed).trim()
}

// ─── Low-level parsers ──────────────────────────────────────────────────

fn number(input: &mut &str) -> ModalResult<f32> {
    (opt(one_of(['-', '+'])), digit0, opt(('.', digit0)))
        .take()
        .verify(|s: &str| s.bytes().any(|b| b.is_ascii_digit()))
        .try_map(str::parse::<f32>)
        .parse_next(input)
}

fn length(input: &mut &str) -> ModalResult<Length> {
    let value = number.parse_next(input)?;
    let unit = opt(alt(("px", "%"))).parse_next(input)?;
    Ok(match unit {
        Some("%") => Length::Percent(value),
        _ => Length::Px(value),
    })
}

fn rgb_function(input: &mut &str) -> ModalResult<Color> {
    let channels: Vec<f32> = delimited(
        (alt(("rgba", "rgb")), space0, '('),
        separated(3..=4, delimited(space0, number, space0), ','),
        ')',
    )
    .parse_next(input)?;

    let channel = |v: f32| (v / 255.0).clamp(0.0, 1.0);
    let alpha = channels.get(3).copied().unwrap_or(1.0).clamp(0.0, 1.0);
    Ok(Color::rgba(
        channel(channels[0]),
        channel(channels[1]),
        channel(channels[2]),
        alpha,
    ))
}

fn url_function<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    delimited(
        ("url(", space0, opt(one_of(['\'', '"']))),
        take_till(0.., ['\'', '"', ')']),
        (opt(one_of(['\'', '"'])), space0, ')'),
    )
    .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_units() {
        assert_eq!(parse_length("20px"), Length::Px(20.0));
        assert_eq!(parse_length("20"), Length::Px(20.0));
        assert_eq!(parse_length(" 12.5px "), Length::Px(12.5));
        assert_eq!(parse_length("50%"), Length::Percent(50.0));
        assert_eq!(parse_length("-4px"), Length::Px(-4.0));
        assert_eq!(parse_length(".5"), Length::Px(0.5));
    }

    #[test]
    fn length_garbage_is_zero() {
        assert_eq!(parse_length("auto"), Length::Px(0.0));
        assert_eq!(parse_length(""), Length::Px(0.0));
        assert_eq!(parse_length("px"), Length::Px(0.0));
        assert_eq!(parse_length("10vw"), Length::Px(0.0));
    }

    #[test]
    fn font_size_suffixes() {
        assert_eq!(parse_font_size("24px", DEFAULT_FONT_SIZE), 24.0);
        assert_eq!(parse_font_size("1.5em", DEFAULT_FONT_SIZE), 1.5);
        assert_eq!(parse_font_size("18", DEFAULT_FONT_SIZE), 18.0);
        assert_eq!(parse_font_size("large", DEFAULT_FONT_SIZE), 12.0);
        assert_eq!(parse_font_size("0px", DEFAULT_FONT_SIZE), 12.0);
    }

    #[test]
    fn colors() {
        let white = parse_color("#ffffff").unwrap();
        assert_eq!(white.to_hex(), "#FFFFFF");
        assert!(!white.is_transparent());

        let red = parse_color("rgb(255, 0, 0)").unwrap();
        assert_eq!(red.to_hex(), "#FF0000");

        let clear = parse_color("rgba(10,20,30,0)").unwrap();
        assert!(clear.is_transparent());
        assert!(parse_color("transparent").unwrap().is_transparent());
        assert!(parse_color("not-a-color").is_none());
    }

    #[test]
    fn url_unwrapping() {
        assert_eq!(unwrap_url("url(https://x.test/a.png)"), "https://x.test/a.png");
        assert_eq!(unwrap_url("url('bg.jpg')"), "bg.jpg");
        assert_eq!(unwrap_url("url(\"bg.jpg\")"), "bg.jpg");
        assert_eq!(unwrap_url("plain.png"), "plain.png");
    }
}
