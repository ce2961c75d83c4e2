//! Output element model: what one exported slide is made of.
//!
//! Independent of the package format. The serializer produces it from the
//! slide/layer model, the PPTX writer consumes it.

use sg_core::TextAlign;

/// One output slide.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExportSlide {
    pub background: Option<Background>,
    pub elements: Vec<Element>,
}

/// Whole-slide background.
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    /// `RRGGBB`
    Color(String),
    Image(ImageSource),
}

/// A coordinate on the output canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coord {
    Inches(f64),
    /// Percentage of the canvas dimension along the same axis.
    Percent(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: Coord,
    pub y: Coord,
    pub w: Coord,
    pub h: Coord,
}

/// A positioned element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub frame: Frame,
    /// Solid fill `RRGGBB`, from the layer's background color.
    pub fill: Option<String>,
    pub content: ElementContent,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElementContent {
    Text(TextRun),
    Image(ImageSource),
    /// Media referenced by URL, not embedded.
    LinkedMedia { url: String },
    /// Labeled box standing in for content that is not serialized.
    Placeholder { label: String },
}

/// A text box with uniform formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    /// Points.
    pub font_size: f32,
    /// `RRGGBB`
    pub color: Option<String>,
    pub bold: bool,
    pub italic: bool,
    pub align: TextAlign,
    pub font_family: Option<String>,
}

impl TextRun {
    pub fn plain(text: impl Into<String>, font_size: f32) -> Self {
        Self {
            text: text.into(),
            font_size,
            color: None,
            bold: false,
            italic: false,
            align: TextAlign::Left,
            font_family: None,
        }
    }
}

/// Embedded image bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSource {
    pub data: Vec<u8>,
    pub format: ImageFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Svg,
}

impl ImageFormat {
    /// Detect the format from the leading bytes.
    pub fn sniff(data: &[u8]) -> Option<Self> {
        match data {
            [0x89, b'P', b'N', b'G', ..] => Some(Self::Png),
            [0xFF, 0xD8, 0xFF, ..] => Some(Self::Jpeg),
            [b'G', b'I', b'F', b'8', ..] => Some(Self::Gif),
            [b'B', b'M', ..] => Some(Self::Bmp),
            _ => {
                let head = &data[..data.len().min(256)];
                let text = String::from_utf8_lossy(head);
                let text = text.trim_start();
                (text.starts_with("<svg") || (text.starts_with("<?xml") && text.contains("<svg")))
                    .then_some(Self::Svg)
            }
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Gif => "gif",
            Self::Bmp => "bmp",
            Self::Svg => "svg",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::Bmp => "image/bmp",
            Self::Svg => "image/svg+xml",
        }
    }

    pub const ALL: [ImageFormat; 5] = [Self::Png, Self::Jpeg, Self::Gif, Self::Bmp, Self::Svg];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniff_formats() {
        assert_eq!(ImageFormat::sniff(b"\x89PNG\r\n\x1a\n"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::sniff(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::sniff(b"GIF89a"), Some(ImageFormat::Gif));
        assert_eq!(ImageFormat::sniff(b"  <svg xmlns='x'/>"), Some(ImageFormat::Svg));
        assert_eq!(ImageFormat::sniff(b"hello"), None);
        assert_eq!(ImageFormat::sniff(b""), None);
    }
}
