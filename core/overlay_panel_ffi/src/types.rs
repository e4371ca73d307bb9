use overlay_panel_core::{
    ColorRgba8, ConfigError, Control, ControlInput, DrawCommand, FontWeight,
    LabelStyle, MenuComponent, MenuDelegate, MenuError, MenuTab, Point, Rect, Shape, ShapeKind,
    Size, StrokeParams, TextAlignment, TextRun, Theme, ThemeIdentifier,
};
use std::sync::Arc;

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, uniffi::Record)]
pub struct FfiColorRgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<FfiColorRgba8> for ColorRgba8 {
    fn from(value: FfiColorRgba8) -> Self {
        ColorRgba8::rgba(value.r, value.g, value.b, value.a)
    }
}

impl From<ColorRgba8> for FfiColorRgba8 {
    fn from(value: ColorRgba8) -> Self {
        Self {
            r: value.r,
            g: value.g,
            b: value.b,
            a: value.a,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, uniffi::Record)]
pub struct FfiPoint {
    pub x: f32,
    pub y: f32,
}

impl From<FfiPoint> for Point {
    fn from(value: FfiPoint) -> Self {
        Point::new(value.x, value.y)
    }
}

impl From<Point> for FfiPoint {
    fn from(value: Point) -> Self {
        Self {
            x: value.x,
            y: value.y,
        }
    }
}

/// Origin plus size, matching the host's rect type.
#[derive(Debug, Clone, Copy, PartialEq, uniffi::Record)]
pub struct FfiRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl From<FfiRect> for Rect {
    fn from(value: FfiRect) -> Self {
        Rect::from_origin_size(
            Point::new(value.x, value.y),
            Size {
                width: value.width,
                height: value.height,
            },
        )
    }
}

impl From<Rect> for FfiRect {
    fn from(value: Rect) -> Self {
        Self {
            x: value.min_x,
            y: value.min_y,
            width: value.width(),
            height: value.height(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiShapeKind {
    Line,
    Rect,
    Circle,
    Dot,
    Text,
}

impl From<ShapeKind> for FfiShapeKind {
    fn from(value: ShapeKind) -> Self {
        match value {
            ShapeKind::Line => FfiShapeKind::Line,
            ShapeKind::Rect => FfiShapeKind::Rect,
            ShapeKind::Circle => FfiShapeKind::Circle,
            ShapeKind::Dot => FfiShapeKind::Dot,
            ShapeKind::Text => FfiShapeKind::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiTextAlignment {
    Left,
    Center,
    Right,
    Justified,
    Natural,
}

impl From<FfiTextAlignment> for TextAlignment {
    fn from(value: FfiTextAlignment) -> Self {
        match value {
            FfiTextAlignment::Left => TextAlignment::Left,
            FfiTextAlignment::Center => TextAlignment::Center,
            FfiTextAlignment::Right => TextAlignment::Right,
            FfiTextAlignment::Justified => TextAlignment::Justified,
            FfiTextAlignment::Natural => TextAlignment::Natural,
        }
    }
}

impl From<TextAlignment> for FfiTextAlignment {
    fn from(value: TextAlignment) -> Self {
        match value {
            TextAlignment::Left => FfiTextAlignment::Left,
            TextAlignment::Center => FfiTextAlignment::Center,
            TextAlignment::Right => FfiTextAlignment::Right,
            TextAlignment::Justified => FfiTextAlignment::Justified,
            TextAlignment::Natural => FfiTextAlignment::Natural,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiFontWeight {
    UltraLight,
    Thin,
    Light,
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
    Black,
}

impl From<FfiFontWeight> for FontWeight {
    fn from(value: FfiFontWeight) -> Self {
        match value {
            FfiFontWeight::UltraLight => FontWeight::UltraLight,
            FfiFontWeight::Thin => FontWeight::Thin,
            FfiFontWeight::Light => FontWeight::Light,
            FfiFontWeight::Regular => FontWeight::Regular,
            FfiFontWeight::Medium => FontWeight::Medium,
            FfiFontWeight::Semibold => FontWeight::Semibold,
            FfiFontWeight::Bold => FontWeight::Bold,
            FfiFontWeight::Heavy => FontWeight::Heavy,
            FfiFontWeight::Black => FontWeight::Black,
        }
    }
}

impl From<FontWeight> for FfiFontWeight {
    fn from(value: FontWeight) -> Self {
        match value {
            FontWeight::UltraLight => FfiFontWeight::UltraLight,
            FontWeight::Thin => FfiFontWeight::Thin,
            FontWeight::Light => FfiFontWeight::Light,
            FontWeight::Regular => FfiFontWeight::Regular,
            FontWeight::Medium => FfiFontWeight::Medium,
            FontWeight::Semibold => FfiFontWeight::Semibold,
            FontWeight::Bold => FfiFontWeight::Bold,
            FontWeight::Heavy => FfiFontWeight::Heavy,
            FontWeight::Black => FfiFontWeight::Black,
        }
    }
}

#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiTextRun {
    pub content: String,
    pub color: FfiColorRgba8,
    pub font_size: f32,
    pub alignment: FfiTextAlignment,
    pub weight: FfiFontWeight,
}

impl From<TextRun> for FfiTextRun {
    fn from(value: TextRun) -> Self {
        Self {
            content: value.content,
            color: value.color.into(),
            font_size: value.font_size,
            alignment: value.alignment.into(),
            weight: value.weight.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiShape {
    pub kind: FfiShapeKind,
    pub p1: FfiPoint,
    pub p2: FfiPoint,
    pub stroke: Option<FfiColorRgba8>,
    pub fill: Option<FfiColorRgba8>,
    pub line_width: f32,
    pub text: Option<FfiTextRun>,
}

impl From<Shape> for FfiShape {
    fn from(value: Shape) -> Self {
        Self {
            kind: value.kind().into(),
            p1: value.p1.into(),
            p2: value.p2.into(),
            stroke: value.stroke.map(Into::into),
            fill: value.fill.map(Into::into),
            line_width: value.line_width,
            text: value.text.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, uniffi::Record)]
pub struct FfiStroke {
    pub color: FfiColorRgba8,
    pub width: f32,
}

impl From<StrokeParams> for FfiStroke {
    fn from(value: StrokeParams) -> Self {
        Self {
            color: value.color.into(),
            width: value.width,
        }
    }
}

#[derive(Debug, Clone, PartialEq, uniffi::Enum)]
pub enum FfiDrawCommand {
    Line {
        from: FfiPoint,
        to: FfiPoint,
        stroke: FfiStroke,
    },
    Rect {
        rect: FfiRect,
        stroke: Option<FfiStroke>,
        fill: Option<FfiColorRgba8>,
    },
    Circle {
        center: FfiPoint,
        radius: f32,
        stroke: Option<FfiStroke>,
        fill: Option<FfiColorRgba8>,
    },
    Dot {
        center: FfiPoint,
        radius: f32,
        color: FfiColorRgba8,
    },
    Text {
        origin: FfiPoint,
        run: FfiTextRun,
    },
}

impl From<DrawCommand> for FfiDrawCommand {
    fn from(value: DrawCommand) -> Self {
        match value {
            DrawCommand::Line { from, to, stroke } => FfiDrawCommand::Line {
                from: from.into(),
                to: to.into(),
                stroke: stroke.into(),
            },
            DrawCommand::Rect { rect, stroke, fill } => FfiDrawCommand::Rect {
                rect: rect.into(),
                stroke: stroke.map(Into::into),
                fill: fill.map(Into::into),
            },
            DrawCommand::Circle {
                center,
                radius,
                stroke,
                fill,
            } => FfiDrawCommand::Circle {
                center: center.into(),
                radius,
                stroke: stroke.map(Into::into),
                fill: fill.map(Into::into),
            },
            DrawCommand::Dot {
                center,
                radius,
                color,
            } => FfiDrawCommand::Dot {
                center: center.into(),
                radius,
                color: color.into(),
            },
            DrawCommand::Text { origin, run } => FfiDrawCommand::Text {
                origin: origin.into(),
                run: run.into(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiThemeIdentifier {
    Default,
    Blue,
    Pink,
}

impl From<FfiThemeIdentifier> for ThemeIdentifier {
    fn from(value: FfiThemeIdentifier) -> Self {
        match value {
            FfiThemeIdentifier::Default => ThemeIdentifier::Default,
            FfiThemeIdentifier::Blue => ThemeIdentifier::Blue,
            FfiThemeIdentifier::Pink => ThemeIdentifier::Pink,
        }
    }
}

impl From<ThemeIdentifier> for FfiThemeIdentifier {
    fn from(value: ThemeIdentifier) -> Self {
        match value {
            ThemeIdentifier::Default => FfiThemeIdentifier::Default,
            ThemeIdentifier::Blue => FfiThemeIdentifier::Blue,
            ThemeIdentifier::Pink => FfiThemeIdentifier::Pink,
        }
    }
}

#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiTheme {
    pub identifier: FfiThemeIdentifier,
    pub background: FfiColorRgba8,
    pub header: FfiColorRgba8,
    pub accent: FfiColorRgba8,
    pub text: FfiColorRgba8,
    pub secondary_text: FfiColorRgba8,
    pub track: FfiColorRgba8,
}

impl From<Theme> for FfiTheme {
    fn from(value: Theme) -> Self {
        Self {
            identifier: value.identifier.into(),
            background: value.background.into(),
            header: value.header.into(),
            accent: value.accent.into(),
            text: value.text.into(),
            secondary_text: value.secondary_text.into(),
            track: value.track.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, uniffi::Enum)]
pub enum FfiControl {
    Slider {
        min: f32,
        max: f32,
        value: f32,
    },
    Switch {
        on: bool,
    },
    SliderWithSwitch {
        min: f32,
        max: f32,
        value: f32,
        on: bool,
    },
    Label {
        font_size: f32,
        alignment: FfiTextAlignment,
        weight: FfiFontWeight,
    },
    Dropdown {
        options: Vec<String>,
        selected: Option<u32>,
    },
    ThemeSelector {
        selected: FfiThemeIdentifier,
    },
}

#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiMenuComponent {
    pub title: String,
    pub key: Option<String>,
    pub control: FfiControl,
}

impl From<&MenuComponent> for FfiMenuComponent {
    fn from(value: &MenuComponent) -> Self {
        let control = match value.control() {
            Control::Slider(slider) => FfiControl::Slider {
                min: slider.min(),
                max: slider.max(),
                value: slider.value(),
            },
            Control::Switch { on } => FfiControl::Switch { on: *on },
            Control::SliderWithSwitch { slider, on } => FfiControl::SliderWithSwitch {
                min: slider.min(),
                max: slider.max(),
                value: slider.value(),
                on: *on,
            },
            Control::Label(style) => FfiControl::Label {
                font_size: style.font_size,
                alignment: style.alignment.into(),
                weight: style.weight.into(),
            },
            Control::Dropdown(dropdown) => FfiControl::Dropdown {
                options: dropdown.options().to_vec(),
                selected: dropdown.selected().map(to_u32),
            },
            Control::ThemeSelector { selected } => FfiControl::ThemeSelector {
                selected: (*selected).into(),
            },
        };
        Self {
            title: value.title().to_owned(),
            key: value.key().map(str::to_owned),
            control,
        }
    }
}

impl TryFrom<FfiMenuComponent> for MenuComponent {
    type Error = MenuError;

    /// Goes through the validating constructors; a record the host built by
    /// hand gets the same checks as one built in Rust.
    fn try_from(value: FfiMenuComponent) -> Result<Self, Self::Error> {
        let key = value.key.unwrap_or_default();
        match value.control {
            FfiControl::Slider { min, max, value: v } => {
                MenuComponent::slider(value.title, key, min, max, v)
            }
            FfiControl::Switch { on } => MenuComponent::switch(value.title, key, on),
            FfiControl::SliderWithSwitch {
                min,
                max,
                value: v,
                on,
            } => MenuComponent::slider_with_switch(value.title, key, min, max, v, on),
            FfiControl::Label {
                font_size,
                alignment,
                weight,
            } => Ok(MenuComponent::styled_label(
                value.title,
                LabelStyle {
                    font_size,
                    alignment: alignment.into(),
                    weight: weight.into(),
                },
            )),
            FfiControl::Dropdown { options, selected } => MenuComponent::dropdown(
                value.title,
                key,
                options,
                selected.map(|i| i as usize),
            ),
            FfiControl::ThemeSelector { selected } => {
                MenuComponent::theme_selector(value.title, key, selected.into())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiMenuTab {
    pub title: String,
    pub components: Vec<FfiMenuComponent>,
}

impl From<&MenuTab> for FfiMenuTab {
    fn from(value: &MenuTab) -> Self {
        Self {
            title: value.title().to_owned(),
            components: value.components().iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, uniffi::Enum)]
pub enum FfiControlInput {
    Slider { value: f32 },
    Switch { on: bool },
    Dropdown { index: u32 },
    Theme { theme: FfiThemeIdentifier },
}

impl From<FfiControlInput> for ControlInput {
    fn from(value: FfiControlInput) -> Self {
        match value {
            FfiControlInput::Slider { value } => ControlInput::Slider(value),
            FfiControlInput::Switch { on } => ControlInput::Switch(on),
            FfiControlInput::Dropdown { index } => ControlInput::Dropdown(index as usize),
            FfiControlInput::Theme { theme } => ControlInput::Theme(theme.into()),
        }
    }
}

#[derive(Debug, thiserror::Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum FfiMenuError {
    #[error("{0}")]
    Construction(String),
    #[error("{0}")]
    OutOfRange(String),
    #[error("{0}")]
    Input(String),
    #[error("{0}")]
    Config(String),
}

impl From<MenuError> for FfiMenuError {
    fn from(value: MenuError) -> Self {
        let message = value.to_string();
        match value {
            MenuError::InvalidRange { .. }
            | MenuError::ValueOutOfRange { .. }
            | MenuError::SelectionOutOfBounds { .. }
            | MenuError::MissingKey { .. } => FfiMenuError::Construction(message),
            MenuError::TabOutOfRange { .. } | MenuError::ComponentOutOfRange { .. } => {
                FfiMenuError::OutOfRange(message)
            }
            MenuError::InputMismatch { .. }
            | MenuError::OptionOutOfRange { .. }
            | MenuError::NotVisible => FfiMenuError::Input(message),
        }
    }
}

impl From<ConfigError> for FfiMenuError {
    fn from(value: ConfigError) -> Self {
        FfiMenuError::Config(value.to_string())
    }
}

/// Value-change observer implemented by the host.
///
/// Foreign traits cannot carry default bodies, so a host that only cares
/// about some callbacks implements the rest as empty methods.
#[uniffi::export(with_foreign)]
pub trait FfiMenuDelegate: Send + Sync {
    fn switch_value_changed(&self, on: bool, key: String);
    fn slider_value_changed(&self, value: f32, key: String);
    fn dropdown_value_changed(&self, index: u32, value: String, key: String);
    fn theme_changed(&self, theme: FfiThemeIdentifier);
}

/// Bridges the host's delegate onto the core's callback trait.
pub(crate) struct ForeignDelegate(pub(crate) Arc<dyn FfiMenuDelegate>);

impl MenuDelegate for ForeignDelegate {
    fn switch_value_changed(&self, on: bool, key: &str) {
        self.0.switch_value_changed(on, key.to_owned());
    }

    fn slider_value_changed(&self, value: f32, key: &str) {
        self.0.slider_value_changed(value, key.to_owned());
    }

    fn dropdown_value_changed(&self, index: usize, value: &str, key: &str) {
        self.0
            .dropdown_value_changed(to_u32(index), value.to_owned(), key.to_owned());
    }

    fn theme_changed(&self, theme: ThemeIdentifier) {
        self.0.theme_changed(theme.into());
    }
}
