pub mod canvas;
pub mod component;
pub mod config;
pub mod geometry;
pub mod model;
pub mod panel;
pub mod render;
pub mod theme;

pub use canvas::ShapeCanvas;
pub use component::{
    ComponentKind, Control, DropdownState, LabelStyle, MenuComponent, MenuDelegate, MenuError,
    SliderState,
};
pub use config::{ComponentConfig, ConfigError, PanelConfig, TabConfig};
pub use geometry::Rect;
pub use model::{ColorRgba8, FontWeight, Point, Shape, ShapeKind, Size, TextAlignment, TextRun};
pub use panel::{
    ComponentPath, ControlInput, GestureConfig, MenuTab, SettingsPanel, ValueChange,
    DEFAULT_CREDITS_TEXT,
};
pub use render::{render_frame, DrawCommand, Painter, StrokeParams};
pub use theme::{Theme, ThemeIdentifier};
