use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ColorRgba8 {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
    Justified,
    Natural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    UltraLight,
    Thin,
    Light,
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Line,
    Rect,
    Circle,
    Dot,
    Text,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub content: String,
    pub color: ColorRgba8,
    pub font_size: f32,
    pub alignment: TextAlignment,
    pub weight: FontWeight,
}

/// One primitive queued on the overlay for the current frame.
///
/// `p1`/`p2` are interpreted per kind:
/// line endpoints, rect corners, circle/dot center plus a point one radius
/// to the right of it, and the text origin (`p2 == p1`).
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    pub p1: Point,
    pub p2: Point,
    pub stroke: Option<ColorRgba8>,
    pub fill: Option<ColorRgba8>,
    pub line_width: f32,

    // Only populated for `ShapeKind::Text`.
    pub text: Option<TextRun>,
}

impl Shape {
    pub(crate) fn new(kind: ShapeKind, p1: Point, p2: Point) -> Self {
        Self {
            kind,
            p1,
            p2,
            stroke: None,
            fill: None,
            line_width: 0.0,
            text: None,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }
}
