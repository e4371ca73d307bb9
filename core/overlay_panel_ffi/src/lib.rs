uniffi::setup_scaffolding!();

mod logging;
mod objects;
mod types;

pub use logging::init_logging;
pub use objects::{CoreCanvas, CoreSettingsPanel};
pub use types::{
    FfiColorRgba8, FfiControl, FfiControlInput, FfiDrawCommand, FfiFontWeight, FfiMenuComponent,
    FfiMenuDelegate, FfiMenuError, FfiMenuTab, FfiPoint, FfiRect, FfiShape, FfiShapeKind,
    FfiStroke, FfiTextAlignment, FfiTextRun, FfiTheme, FfiThemeIdentifier,
};
