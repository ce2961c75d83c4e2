//! Core data model for slide decks.
//!
//! A deck is a set of `SlideNode`s placed on an editing canvas plus a list
//! of directed `Edge`s meaning "this slide is followed by that slide".
//! Each slide exclusively owns an ordered list of `Layer`s. Array order is
//! insertion order; paint order comes from `LayerStyle::z_index`.
//!
//! Field names on the wire follow the editor's JSON (`zIndex`,
//! `textFormat`, `mediaType`, ...) so stored documents load unchanged.

use crate::css::{self, Length};
use crate::id::{LayerId, SlideId};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};
use serde_json::{Map, Value};

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Helper to parse a single hex digit.
pub fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex color string: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    /// The string may optionally start with `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();
        let short = |i: usize| hex_val(bytes[i]).map(|v| (v * 17) as f32 / 255.0);
        let long =
            |i: usize| Some((hex_val(bytes[i])? << 4 | hex_val(bytes[i + 1])?) as f32 / 255.0);

        match bytes.len() {
            3 => Some(Self::rgba(short(0)?, short(1)?, short(2)?, 1.0)),
            4 => Some(Self::rgba(short(0)?, short(1)?, short(2)?, short(3)?)),
            6 => Some(Self::rgba(long(0)?, long(2)?, long(4)?, 1.0)),
            8 => Some(Self::rgba(long(0)?, long(2)?, long(4)?, long(6)?)),
            _ => None,
        }
    }

    /// `RRGGBB` without the leading `#`, as OOXML `srgbClr` expects.
    pub fn to_rgb_hex(&self) -> String {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "{:02X}{:02X}{:02X}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }

    /// Emit as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let a = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
        if a == 255 {
            format!("#{}", self.to_rgb_hex())
        } else {
            format!("#{}{a:02X}", self.to_rgb_hex())
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }
}

// ─── Canvas geometry & deck settings ─────────────────────────────────────

/// Nominal slide width on the editing canvas, in canvas units.
pub const NOMINAL_SLIDE_WIDTH: f32 = 600.0;

/// Top-left position of a slide on the editing canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Slide aspect ratio selected for the whole deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "16:9")]
    Widescreen,
    #[serde(rename = "4:3")]
    Standard,
}

impl AspectRatio {
    /// Nominal slide size in canvas units: 600 × 337.5 or 600 × 450.
    pub fn nominal_size(self) -> (f32, f32) {
        match self {
            AspectRatio::Widescreen => (NOMINAL_SLIDE_WIDTH, NOMINAL_SLIDE_WIDTH * 9.0 / 16.0),
            AspectRatio::Standard => (NOMINAL_SLIDE_WIDTH, NOMINAL_SLIDE_WIDTH * 3.0 / 4.0),
        }
    }
}

/// Editor color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Deck-wide settings persisted next to the slides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeckSettings {
    pub theme: Theme,
    pub aspect_ratio: AspectRatio,
    /// Presenter autoplay interval in seconds.
    pub autoplay_interval: u32,
}

impl Default for DeckSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            aspect_ratio: AspectRatio::Widescreen,
            autoplay_interval: 3,
        }
    }
}

// ─── Text formatting ─────────────────────────────────────────────────────

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// Text formatting of title/text/footer layers. Raw CSS values, every
/// field optional so partial updates can be merged field-by-field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFormat {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// `"bold"`, `"700"` or a bare JSON number.
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, deserialize_with = "lenient_align", skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
}

impl TextFormat {
    /// Merge `src` into `self`, overwriting only `Some` fields.
    pub fn merge(&mut self, src: &TextFormat) {
        if src.font_size.is_some() {
            self.font_size = src.font_size.clone();
        }
        if src.color.is_some() {
            self.color = src.color.clone();
        }
        if src.font_weight.is_some() {
            self.font_weight = src.font_weight.clone();
        }
        if src.font_style.is_some() {
            self.font_style = src.font_style.clone();
        }
        if src.font_family.is_some() {
            self.font_family = src.font_family.clone();
        }
        if src.text_align.is_some() {
            self.text_align = src.text_align;
        }
    }
}

// ─── Lenient wire values ─────────────────────────────────────────────────
//
// Stored decks come from a loosely typed editor. A style or format value of
// an unexpected JSON type is dropped on its own instead of failing the
// whole document.

fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(v) => v.to_string(),
        None => n.to_string(),
    }
}

/// Strings kept, numbers stringified, anything else dropped.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(number_text(&n)),
        _ => None,
    })
}

fn lenient_length<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<CssLength>, D::Error> {
    Ok(lenient_text(deserializer)?.map(CssLength))
}

/// A finite number, or a string holding one.
fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let n = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(n.filter(|v| v.is_finite()))
}

fn lenient_z_index<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
    Ok(lenient_number(deserializer)?
        .map(|v| v.round().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32))
}

fn lenient_opacity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f32>, D::Error> {
    Ok(lenient_number(deserializer)?.map(|v| v as f32))
}

fn lenient_align<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<TextAlign>, D::Error> {
    let Value::String(s) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    Ok(match s.trim().to_ascii_lowercase().as_str() {
        "left" | "start" => Some(TextAlign::Left),
        "center" => Some(TextAlign::Center),
        "right" | "end" => Some(TextAlign::Right),
        "justify" => Some(TextAlign::Justify),
        _ => None,
    })
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

// ─── Layer style ─────────────────────────────────────────────────────────

/// A CSS length as written by the editor (`"20px"`, `"50%"`, `"120"`).
///
/// Stored verbatim; JSON numbers are accepted and kept as their decimal text.
#[derive(Debug, Clone, PartialEq)]
pub struct CssLength(String);

impl CssLength {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn px(value: f32) -> Self {
        Self(format!("{value}px"))
    }

    pub fn percent(value: f32) -> Self {
        Self(format!("{value}%"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse into a typed length; unparsable text is `0px`.
    pub fn length(&self) -> Length {
        css::parse_length(&self.0)
    }
}

impl From<&str> for CssLength {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl Serialize for CssLength {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CssLength {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(f64),
        }
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => CssLength(s),
            Raw::Number(n) => CssLength(n.to_string()),
        })
    }
}

/// The closed set of style attributes a layer may carry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerStyle {
    // Position & size
    #[serde(default, deserialize_with = "lenient_length", skip_serializing_if = "Option::is_none")]
    pub left: Option<CssLength>,
    #[serde(default, deserialize_with = "lenient_length", skip_serializing_if = "Option::is_none")]
    pub top: Option<CssLength>,
    #[serde(default, deserialize_with = "lenient_length", skip_serializing_if = "Option::is_none")]
    pub width: Option<CssLength>,
    #[serde(default, deserialize_with = "lenient_length", skip_serializing_if = "Option::is_none")]
    pub height: Option<CssLength>,

    /// Paint order among sibling layers; absent or non-numeric counts as 0.
    #[serde(default, deserialize_with = "lenient_z_index", skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,

    // Background
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub background_size: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub background_position: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub background_repeat: Option<String>,

    #[serde(default, deserialize_with = "lenient_opacity", skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
}

impl LayerStyle {
    /// Position/size box in one go.
    pub fn with_box(left: &str, top: &str, width: &str, height: &str) -> Self {
        Self {
            left: Some(left.into()),
            top: Some(top.into()),
            width: Some(width.into()),
            height: Some(height.into()),
            ..Default::default()
        }
    }

    pub fn z(&self) -> i32 {
        self.z_index.unwrap_or(0)
    }

    /// The background color, if set, parsable and not fully transparent.
    pub fn visible_background(&self) -> Option<Color> {
        self.background_color
            .as_deref()
            .and_then(css::parse_color)
            .filter(|c| !c.is_transparent())
    }

    /// Merge `src` into `self`, overwriting only `Some` fields.
    pub fn merge(&mut self, src: &LayerStyle) {
        if src.left.is_some() {
            self.left = src.left.clone();
        }
        if src.top.is_some() {
            self.top = src.top.clone();
        }
        if src.width.is_some() {
            self.width = src.width.clone();
        }
        if src.height.is_some() {
            self.height = src.height.clone();
        }
        if src.z_index.is_some() {
            self.z_index = src.z_index;
        }
        if src.background_color.is_some() {
            self.background_color = src.background_color.clone();
        }
        if src.background_image.is_some() {
            self.background_image = src.background_image.clone();
        }
        if src.background_size.is_some() {
            self.background_size = src.background_size.clone();
        }
        if src.background_position.is_some() {
            self.background_position = src.background_position.clone();
        }
        if src.background_repeat.is_some() {
            self.background_repeat = src.background_repeat.clone();
        }
        if src.opacity.is_some() {
            self.opacity = src.opacity;
        }
    }
}

// ─── Layers ──────────────────────────────────────────────────────────────

/// Media kind of a media layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
}

/// How media is fitted into its box (CSS `object-fit`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectFit {
    #[default]
    Contain,
    Cover,
    Fill,
    None,
    ScaleDown,
}

/// Type tag of a layer: the closed set the editor knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerType {
    Background,
    Title,
    ContentArea,
    Footer,
    Text,
    Media,
    Table,
    Chart,
    Unsupported,
}

impl LayerType {
    pub fn as_str(self) -> &'static str {
        match self {
            LayerType::Background => "background",
            LayerType::Title => "title",
            LayerType::ContentArea => "content-area",
            LayerType::Footer => "footer",
            LayerType::Text => "text",
            LayerType::Media => "media",
            LayerType::Table => "table",
            LayerType::Chart => "chart",
            LayerType::Unsupported => "unsupported",
        }
    }
}

/// Type-specific layer payload, tagged by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum LayerKind {
    /// Whole-slide background; never positioned.
    Background,

    Title {
        #[serde(default, deserialize_with = "lenient_string")]
        content: String,
        #[serde(rename = "textFormat", default)]
        text_format: TextFormat,
    },

    /// Layout guide only. Shown in the editor, never exported.
    ContentArea,

    Footer {
        #[serde(default, deserialize_with = "lenient_string")]
        content: String,
        #[serde(rename = "textFormat", default)]
        text_format: TextFormat,
    },

    Text {
        #[serde(default, deserialize_with = "lenient_string")]
        content: String,
        #[serde(rename = "textFormat", default)]
        text_format: TextFormat,
    },

    Media {
        #[serde(default)]
        url: String,
        #[serde(rename = "mediaType", default)]
        media_type: MediaType,
        #[serde(rename = "objectFit", default, skip_serializing_if = "Option::is_none")]
        object_fit: Option<ObjectFit>,
    },

    Table {
        #[serde(rename = "tableData", default, skip_serializing_if = "Option::is_none")]
        table_data: Option<TableData>,
    },

    Chart {
        #[serde(rename = "chartType", default, skip_serializing_if = "Option::is_none")]
        chart_type: Option<String>,
    },

    /// A layer this build cannot interpret: an unknown `type` tag, or a
    /// known one whose payload does not parse. The tag and every field
    /// other than `id`/`name`/`style` are kept and written back verbatim.
    #[serde(skip)]
    Unsupported {
        kind: String,
        extra: Map<String, Value>,
    },
}

/// Payload of a table layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl LayerKind {
    pub fn layer_type(&self) -> LayerType {
        match self {
            LayerKind::Background => LayerType::Background,
            LayerKind::Title { .. } => LayerType::Title,
            LayerKind::ContentArea => LayerType::ContentArea,
            LayerKind::Footer { .. } => LayerType::Footer,
            LayerKind::Text { .. } => LayerType::Text,
            LayerKind::Media { .. } => LayerType::Media,
            LayerKind::Table { .. } => LayerType::Table,
            LayerKind::Chart { .. } => LayerType::Chart,
            LayerKind::Unsupported { .. } => LayerType::Unsupported,
        }
    }

    /// Text content and formatting for text-bearing layers.
    pub fn text(&self) -> Option<(&str, &TextFormat)> {
        match self {
            LayerKind::Title {
                content,
                text_format,
            }
            | LayerKind::Footer {
                content,
                text_format,
            }
            | LayerKind::Text {
                content,
                text_format,
            } => Some((content.as_str(), text_format)),
            _ => None,
        }
    }
}

/// One visual element on a slide.
///
/// On the wire the kind's `type` tag and payload sit next to `id`, `name`
/// and `style` in one flat object.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub id: LayerId,
    pub name: String,
    pub style: LayerStyle,
    pub kind: LayerKind,
}

impl Serialize for Layer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("style", &self.style)?;
        match &self.kind {
            LayerKind::Unsupported { kind, extra } => {
                if !kind.is_empty() {
                    map.serialize_entry("type", kind)?;
                }
                for (key, value) in extra {
                    map.serialize_entry(key, value)?;
                }
            }
            known => {
                let Value::Object(fields) = serde_json::to_value(known).map_err(ser::Error::custom)?
                else {
                    return Err(ser::Error::custom("layer payload is not an object"));
                };
                for (key, value) in &fields {
                    map.serialize_entry(key, value)?;
                }
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Layer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut fields = Map::<String, Value>::deserialize(deserializer)?;
        let id = match fields.remove("id") {
            Some(Value::String(s)) => LayerId::intern(&s),
            Some(Value::Number(n)) => LayerId::intern(&n.to_string()),
            _ => return Err(de::Error::missing_field("id")),
        };
        let name = match fields.remove("name") {
            Some(Value::String(s)) => s,
            _ => String::new(),
        };
        let style = match fields.remove("style") {
            None | Some(Value::Null) => LayerStyle::default(),
            Some(raw) => LayerStyle::deserialize(raw).unwrap_or_else(|e| {
                log::warn!("layer {id}: unreadable style dropped: {e}");
                LayerStyle::default()
            }),
        };

        let kind = match LayerKind::deserialize(Value::Object(fields.clone())) {
            Ok(kind) => kind,
            Err(e) => {
                let kind = match fields.remove("type") {
                    Some(Value::String(tag)) => tag,
                    _ => String::new(),
                };
                log::debug!("layer {id}: keeping `{kind}` layer verbatim: {e}");
                LayerKind::Unsupported {
                    kind,
                    extra: fields,
                }
            }
        };

        Ok(Self {
            id,
            name,
            style,
            kind,
        })
    }
}

impl Layer {
    pub fn new(id: LayerId, name: impl Into<String>, kind: LayerKind, style: LayerStyle) -> Self {
        Self {
            id,
            name: name.into(),
            style,
            kind,
        }
    }

    pub fn background(color: &str) -> Self {
        Self::new(
            LayerId::with_prefix("background"),
            "Background",
            LayerKind::Background,
            LayerStyle {
                background_color: Some(color.to_string()),
                z_index: Some(0),
                ..LayerStyle::with_box("0px", "0px", "100%", "100%")
            },
        )
    }

    pub fn title(content: &str, style: LayerStyle) -> Self {
        Self::new(
            LayerId::with_prefix("title"),
            "Title",
            LayerKind::Title {
                content: content.to_string(),
                text_format: TextFormat {
                    font_size: Some("32px".into()),
                    font_weight: Some("bold".into()),
                    ..Default::default()
                },
            },
            style,
        )
    }

    pub fn text(content: &str, style: LayerStyle) -> Self {
        Self::new(
            LayerId::with_prefix("text"),
            "Text",
            LayerKind::Text {
                content: content.to_string(),
                text_format: TextFormat::default(),
            },
            style,
        )
    }

    pub fn media(url: &str, media_type: MediaType, style: LayerStyle) -> Self {
        Self::new(
            LayerId::with_prefix("media"),
            "Media",
            LayerKind::Media {
                url: url.to_string(),
                media_type,
                object_fit: Some(ObjectFit::Contain),
            },
            style,
        )
    }

    pub fn layer_type(&self) -> LayerType {
        self.kind.layer_type()
    }

    /// Apply a partial update. `style` and `text_format` merge field-by-field;
    /// every other `Some` field replaces the current value. Fields that do
    /// not apply to this layer's type are ignored.
    pub fn apply_patch(&mut self, patch: &LayerPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(style) = &patch.style {
            self.style.merge(style);
        }
        match &mut self.kind {
            LayerKind::Title {
                content,
                text_format,
            }
            | LayerKind::Footer {
                content,
                text_format,
            }
            | LayerKind::Text {
                content,
                text_format,
            } => {
                if let Some(new_content) = &patch.content {
                    *content = new_content.clone();
                }
                if let Some(fmt) = &patch.text_format {
                    text_format.merge(fmt);
                }
            }
            LayerKind::Media {
                url,
                media_type,
                object_fit,
            } => {
                if let Some(new_url) = &patch.url {
                    *url = new_url.clone();
                }
                if let Some(kind) = patch.media_type {
                    *media_type = kind;
                }
                if patch.object_fit.is_some() {
                    *object_fit = patch.object_fit;
                }
            }
            LayerKind::Table { table_data } => {
                if let Some(data) = &patch.table_data {
                    *table_data = Some(data.clone());
                }
            }
            LayerKind::Background
            | LayerKind::ContentArea
            | LayerKind::Chart { .. }
            | LayerKind::Unsupported { .. } => {}
        }
    }
}

/// A partial layer update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayerPatch {
    pub name: Option<String>,
    pub style: Option<LayerStyle>,
    pub content: Option<String>,
    pub text_format: Option<TextFormat>,
    pub url: Option<String>,
    pub media_type: Option<MediaType>,
    pub object_fit: Option<ObjectFit>,
    pub table_data: Option<TableData>,
}

// ─── Slides & edges ──────────────────────────────────────────────────────

/// The `data` payload of a slide node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlideData {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub layers: Vec<Layer>,
}

/// One slide: a node on the editing canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideNode {
    pub id: SlideId,
    #[serde(default)]
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(default)]
    pub data: SlideData,
}

impl SlideNode {
    /// A bare slide with no layers.
    pub fn empty(id: SlideId, label: impl Into<String>, position: Position) -> Self {
        Self {
            id,
            position,
            width: None,
            height: None,
            data: SlideData {
                label: label.into(),
                layers: Vec::new(),
            },
        }
    }

    /// A slide with the editor's default layer set: white background,
    /// title and content-area guide.
    pub fn new(id: SlideId, label: &str, position: Position) -> Self {
        let mut slide = Self::empty(id, label, position);
        slide.data.layers = vec![
            Layer::background("#ffffff"),
            Layer::title(
                label,
                LayerStyle {
                    z_index: Some(1),
                    ..LayerStyle::with_box("20px", "20px", "560px", "60px")
                },
            ),
            Layer::new(
                LayerId::with_prefix("content"),
                "Content Area",
                LayerKind::ContentArea,
                LayerStyle {
                    z_index: Some(2),
                    ..LayerStyle::with_box("20px", "100px", "560px", "217px")
                },
            ),
        ];
        slide
    }

    pub fn label(&self) -> &str {
        &self.data.label
    }

    /// Explicit width/height, or the nominal size for `aspect`.
    pub fn effective_size(&self, aspect: AspectRatio) -> (f32, f32) {
        let (w, h) = aspect.nominal_size();
        (
            self.width.filter(|v| *v > 0.0).unwrap_or(w),
            self.height.filter(|v| *v > 0.0).unwrap_or(h),
        )
    }

    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.data.layers.iter().find(|l| l.id == id)
    }

    pub fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.data.layers.iter_mut().find(|l| l.id == id)
    }

    /// Highest z-index among the layers, if any.
    pub fn max_z(&self) -> Option<i32> {
        self.data.layers.iter().map(|l| l.style.z()).max()
    }

    /// Layers in paint order: ascending z-index, ties keep insertion order.
    pub fn layers_by_z(&self) -> Vec<&Layer> {
        let mut layers: Vec<&Layer> = self.data.layers.iter().collect();
        layers.sort_by_key(|l| l.style.z());
        layers
    }
}

/// A directed "followed-by" connection between two slides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub source: SlideId,
    pub target: SlideId,
}

impl Edge {
    pub fn new(source: SlideId, target: SlideId) -> Self {
        Self {
            id: Some(format!("e{source}-{target}")),
            source,
            target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn color_hex_roundtrip() {
        let c = Color::from_hex("#6C5CE7").unwrap();
        assert_eq!(c.to_hex(), "#6C5CE7");
        assert_eq!(c.to_rgb_hex(), "6C5CE7");

        let c2 = Color::from_hex("#FF000080").unwrap();
        assert!((c2.a - 128.0 / 255.0).abs() < 0.01);
        assert_eq!(c2.to_hex().len(), 9);

        let short = Color::from_hex("#fff").unwrap();
        assert_eq!(short.to_hex(), "#FFFFFF");
        assert!(Color::from_hex("#12345").is_none());
    }

    #[test]
    fn nominal_sizes() {
        assert_eq!(AspectRatio::Widescreen.nominal_size(), (600.0, 337.5));
        assert_eq!(AspectRatio::Standard.nominal_size(), (600.0, 450.0));

        let mut slide = SlideNode::empty(SlideId::intern("s"), "S", Position::default());
        assert_eq!(slide.effective_size(AspectRatio::Widescreen), (600.0, 337.5));
        slide.width = Some(800.0);
        assert_eq!(slide.effective_size(AspectRatio::Standard), (800.0, 450.0));
    }

    #[test]
    fn layers_by_z_is_stable() {
        let mut slide = SlideNode::empty(SlideId::intern("z"), "Z", Position::default());
        let mk = |name: &str, z: Option<i32>| {
            Layer::new(
                LayerId::intern(name),
                name,
                LayerKind::ContentArea,
                LayerStyle {
                    z_index: z,
                    ..Default::default()
                },
            )
        };
        slide.data.layers = vec![
            mk("top", Some(5)),
            mk("a", Some(1)),
            mk("unset", None),
            mk("b", Some(1)),
        ];
        let order: Vec<&str> = slide.layers_by_z().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(order, vec!["unset", "a", "b", "top"]);
        assert_eq!(slide.max_z(), Some(5));
    }

    #[test]
    fn patch_merges_style_and_text_format() {
        let mut layer = Layer::title(
            "Hello",
            LayerStyle {
                background_color: Some("#eeeeee".into()),
                ..LayerStyle::with_box("20px", "20px", "100px", "40px")
            },
        );
        layer.apply_patch(&LayerPatch {
            style: Some(LayerStyle {
                left: Some("50px".into()),
                ..Default::default()
            }),
            text_format: Some(TextFormat {
                color: Some("#ff0000".into()),
                ..Default::default()
            }),
            ..Default::default()
        });

        assert_eq!(layer.style.left.as_ref().map(CssLength::as_str), Some("50px"));
        assert_eq!(layer.style.top.as_ref().map(CssLength::as_str), Some("20px"));
        assert_eq!(layer.style.background_color.as_deref(), Some("#eeeeee"));

        let (content, fmt) = layer.kind.text().unwrap();
        assert_eq!(content, "Hello");
        assert_eq!(fmt.color.as_deref(), Some("#ff0000"));
        assert_eq!(fmt.font_size.as_deref(), Some("32px"));
        assert_eq!(fmt.font_weight.as_deref(), Some("bold"));
    }

    #[test]
    fn patch_ignores_fields_of_other_types() {
        let mut layer = Layer::background("#000000");
        layer.apply_patch(&LayerPatch {
            content: Some("nope".into()),
            url: Some("x.png".into()),
            ..Default::default()
        });
        assert_eq!(layer.kind, LayerKind::Background);
    }

    #[test]
    fn layer_json_shape() {
        let json = r#"{
            "id": "l1",
            "type": "media",
            "name": "Logo",
            "style": { "left": 10, "top": "5%", "zIndex": 3 },
            "url": "https://example.test/logo.png",
            "mediaType": "image",
            "objectFit": "scale-down"
        }"#;
        let layer: Layer = serde_json::from_str(json).unwrap();
        assert_eq!(layer.layer_type(), LayerType::Media);
        assert_eq!(layer.style.left.as_ref().unwrap().length(), Length::Px(10.0));
        assert_eq!(layer.style.top.as_ref().unwrap().length(), Length::Percent(5.0));
        assert_eq!(layer.style.z(), 3);
        assert_eq!(
            layer.kind,
            LayerKind::Media {
                url: "https://example.test/logo.png".into(),
                media_type: MediaType::Image,
                object_fit: Some(ObjectFit::ScaleDown),
            }
        );

        let back = serde_json::to_value(&layer).unwrap();
        assert_eq!(back["type"], "media");
        assert_eq!(back["style"]["zIndex"], 3);
        assert_eq!(back["mediaType"], "image");
    }

    #[test]
    fn unknown_layer_survives_roundtrip() {
        let json = r#"{ "id": "w", "type": "widget", "name": "?", "config": { "speed": 2, "tags": ["a"] } }"#;
        let layer: Layer = serde_json::from_str(json).unwrap();
        assert_eq!(layer.layer_type(), LayerType::Unsupported);

        let back = serde_json::to_value(&layer).unwrap();
        assert_eq!(back["type"], "widget");
        assert_eq!(back["name"], "?");
        assert_eq!(back["config"]["speed"], 2);
        assert_eq!(back["config"]["tags"][0], "a");
    }

    #[test]
    fn malformed_known_payload_is_kept_verbatim() {
        let json = r#"{ "id": "m", "type": "media", "url": "x.png", "mediaType": "hologram" }"#;
        let layer: Layer = serde_json::from_str(json).unwrap();
        assert_eq!(layer.layer_type(), LayerType::Unsupported);

        let back = serde_json::to_value(&layer).unwrap();
        assert_eq!(back["type"], "media");
        assert_eq!(back["mediaType"], "hologram");
        assert_eq!(back["url"], "x.png");
    }

    #[test]
    fn off_type_style_and_format_values_are_tolerated() {
        let json = r#"{
            "id": "t",
            "type": "text",
            "content": "Hi",
            "textFormat": { "fontWeight": 700, "fontSize": 18, "textAlign": 3, "color": null },
            "style": { "left": 12, "top": true, "zIndex": "auto", "opacity": "0.5" }
        }"#;
        let layer: Layer = serde_json::from_str(json).unwrap();
        let (content, fmt) = layer.kind.text().unwrap();
        assert_eq!(content, "Hi");
        assert_eq!(fmt.font_weight.as_deref(), Some("700"));
        assert_eq!(fmt.font_size.as_deref(), Some("18"));
        assert_eq!(fmt.text_align, None);
        assert_eq!(fmt.color, None);
        assert_eq!(layer.style.left.as_ref().map(CssLength::as_str), Some("12"));
        assert_eq!(layer.style.top, None);
        assert_eq!(layer.style.z_index, None);
        assert_eq!(layer.style.opacity, Some(0.5));

        let z: LayerStyle = serde_json::from_str(r#"{ "zIndex": 2.6 }"#).unwrap();
        assert_eq!(z.z(), 3);
    }

    #[test]
    fn table_data_shape() {
        let json = r#"{ "id": "tb", "type": "table", "tableData": { "headers": ["h1", "h2"], "rows": [["a", "b"]] } }"#;
        let mut layer: Layer = serde_json::from_str(json).unwrap();
        let expected = TableData {
            headers: vec!["h1".into(), "h2".into()],
            rows: vec![vec!["a".into(), "b".into()]],
        };
        assert_eq!(
            layer.kind,
            LayerKind::Table {
                table_data: Some(expected.clone())
            }
        );
        let back = serde_json::to_value(&layer).unwrap();
        assert_eq!(back["tableData"]["headers"][1], "h2");
        assert_eq!(back["tableData"]["rows"][0][0], "a");

        let patch: LayerPatch =
            serde_json::from_str(r#"{ "tableData": { "headers": ["only"] } }"#).unwrap();
        layer.apply_patch(&patch);
        let LayerKind::Table { table_data: Some(data) } = &layer.kind else {
            panic!("expected table, got {:?}", layer.kind);
        };
        assert_eq!(data.headers, vec!["only".to_string()]);
        assert!(data.rows.is_empty());
    }

    #[test]
    fn content_area_tag() {
        let json = r#"{ "id": "c", "type": "content-area" }"#;
        let layer: Layer = serde_json::from_str(json).unwrap();
        assert_eq!(layer.layer_type(), LayerType::ContentArea);
    }

    #[test]
    fn visible_background_skips_transparent() {
        let mut style = LayerStyle {
            background_color: Some("transparent".into()),
            ..Default::default()
        };
        assert!(style.visible_background().is_none());
        style.background_color = Some("#336699".into());
        assert_eq!(style.visible_background().unwrap().to_rgb_hex(), "336699");
    }
}
