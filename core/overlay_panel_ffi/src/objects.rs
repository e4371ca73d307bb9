use crate::types::{
    FfiColorRgba8, FfiControlInput, FfiDrawCommand, FfiFontWeight, FfiMenuComponent,
    FfiMenuDelegate, FfiMenuError, FfiMenuTab, FfiPoint, FfiRect, FfiShape, FfiTextAlignment,
    FfiTheme, FfiThemeIdentifier, ForeignDelegate,
};
use overlay_panel_core::{
    render_frame, ComponentPath, MenuComponent, PanelConfig, SettingsPanel, ShapeCanvas,
};
use std::sync::{Arc, Mutex};

/// The overlay's shape list, shared between the producer that queues
/// annotations and the host's redraw pass.
#[derive(uniffi::Object)]
pub struct CoreCanvas {
    canvas: Mutex<ShapeCanvas>,
}

impl Default for CoreCanvas {
    fn default() -> Self {
        Self::new()
    }
}

#[uniffi::export]
impl CoreCanvas {
    #[uniffi::constructor]
    pub fn new() -> Self {
        Self {
            canvas: Mutex::new(ShapeCanvas::new()),
        }
    }

    pub fn add_line(&self, from: FfiPoint, to: FfiPoint, color: FfiColorRgba8, width: f32) {
        self.canvas.lock().expect("mutex poisoned").add_line(
            from.into(),
            to.into(),
            color.into(),
            width,
        );
    }

    pub fn add_rect(
        &self,
        rect: FfiRect,
        stroke: Option<FfiColorRgba8>,
        width: f32,
        fill: Option<FfiColorRgba8>,
    ) {
        self.canvas.lock().expect("mutex poisoned").add_rect(
            rect.into(),
            stroke.map(Into::into),
            width,
            fill.map(Into::into),
        );
    }

    pub fn add_circle(
        &self,
        center: FfiPoint,
        radius: f32,
        stroke: Option<FfiColorRgba8>,
        width: f32,
        fill: Option<FfiColorRgba8>,
    ) {
        self.canvas.lock().expect("mutex poisoned").add_circle(
            center.into(),
            radius,
            stroke.map(Into::into),
            width,
            fill.map(Into::into),
        );
    }

    pub fn add_dot(&self, center: FfiPoint, radius: f32, color: FfiColorRgba8) {
        self.canvas
            .lock()
            .expect("mutex poisoned")
            .add_dot(center.into(), radius, color.into());
    }

    pub fn add_text(
        &self,
        text: String,
        origin: FfiPoint,
        color: FfiColorRgba8,
        font_size: f32,
        alignment: FfiTextAlignment,
        weight: FfiFontWeight,
    ) {
        self.canvas.lock().expect("mutex poisoned").add_text(
            text,
            origin.into(),
            color.into(),
            font_size,
            alignment.into(),
            weight.into(),
        );
    }

    pub fn clear_shapes(&self) {
        self.canvas.lock().expect("mutex poisoned").clear_shapes();
    }

    pub fn shapes(&self) -> Vec<FfiShape> {
        self.canvas
            .lock()
            .expect("mutex poisoned")
            .shapes()
            .iter()
            .cloned()
            .map(Into::into)
            .collect()
    }

    /// Resolved draw calls for the current frame, in paint order.
    pub fn draw_commands(&self) -> Vec<FfiDrawCommand> {
        let canvas = self.canvas.lock().expect("mutex poisoned");
        render_frame(canvas.shapes())
            .into_iter()
            .map(Into::into)
            .collect()
    }
}

/// The settings panel as seen by the host.
///
/// The host's delegate is held strongly here because nothing else on the
/// Rust side owns the foreign handle; `set_delegate(None)` releases it.
/// Callbacks run after the panel lock is released, so a delegate may read
/// values back from the panel.
#[derive(uniffi::Object)]
pub struct CoreSettingsPanel {
    panel: Mutex<SettingsPanel>,
    delegate: Mutex<Option<Arc<dyn FfiMenuDelegate>>>,
}

impl Default for CoreSettingsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreSettingsPanel {
    fn with_panel(panel: SettingsPanel) -> Self {
        Self {
            panel: Mutex::new(panel),
            delegate: Mutex::new(None),
        }
    }
}

#[uniffi::export]
impl CoreSettingsPanel {
    #[uniffi::constructor]
    pub fn new() -> Self {
        Self::with_panel(SettingsPanel::new())
    }

    #[uniffi::constructor]
    pub fn from_config_json(json: String) -> Result<Arc<Self>, FfiMenuError> {
        let panel = PanelConfig::from_json(&json)?.build()?;
        Ok(Arc::new(Self::with_panel(panel)))
    }

    /// Holds `delegate` strongly. A delegate that keeps a reference back to
    /// this panel forms a cycle; pass `None` before dropping either side.
    pub fn set_delegate(&self, delegate: Option<Arc<dyn FfiMenuDelegate>>) {
        *self.delegate.lock().expect("mutex poisoned") = delegate;
    }

    pub fn add_tab(&self, title: String) -> u32 {
        let index = self.panel.lock().expect("mutex poisoned").add_tab(title);
        u32::try_from(index).unwrap_or(u32::MAX)
    }

    pub fn add_component(
        &self,
        component: FfiMenuComponent,
        tab_index: u32,
    ) -> Result<(), FfiMenuError> {
        let component = MenuComponent::try_from(component)?;
        self.panel
            .lock()
            .expect("mutex poisoned")
            .add_component(component, tab_index as usize)?;
        Ok(())
    }

    pub fn tabs(&self) -> Vec<FfiMenuTab> {
        self.panel
            .lock()
            .expect("mutex poisoned")
            .tabs()
            .iter()
            .map(Into::into)
            .collect()
    }

    pub fn selected_tab_index(&self) -> u32 {
        let index = self
            .panel
            .lock()
            .expect("mutex poisoned")
            .selected_tab_index();
        u32::try_from(index).unwrap_or(u32::MAX)
    }

    pub fn select_tab(&self, index: u32) -> Result<(), FfiMenuError> {
        self.panel
            .lock()
            .expect("mutex poisoned")
            .select_tab(index as usize)?;
        Ok(())
    }

    pub fn bool_value(&self, key: String) -> bool {
        self.panel.lock().expect("mutex poisoned").bool_value(&key)
    }

    pub fn float_value(&self, key: String) -> f32 {
        self.panel.lock().expect("mutex poisoned").float_value(&key)
    }

    pub fn int_value(&self, key: String) -> u32 {
        let value = self.panel.lock().expect("mutex poisoned").int_value(&key);
        u32::try_from(value).unwrap_or(u32::MAX)
    }

    pub fn string_value(&self, key: String) -> Option<String> {
        self.panel.lock().expect("mutex poisoned").string_value(&key)
    }

    /// Applies a user interaction, then notifies the host's delegate.
    pub fn handle_input(
        &self,
        tab_index: u32,
        component_index: u32,
        input: FfiControlInput,
    ) -> Result<(), FfiMenuError> {
        let path = ComponentPath::new(tab_index as usize, component_index as usize);
        let change = self
            .panel
            .lock()
            .expect("mutex poisoned")
            .handle_input(path, input.into())?;

        let delegate = self.delegate.lock().expect("mutex poisoned").clone();
        if let Some(delegate) = delegate {
            change.dispatch(&ForeignDelegate(delegate));
        }
        Ok(())
    }

    pub fn apply_theme(&self, theme: FfiThemeIdentifier) {
        self.panel
            .lock()
            .expect("mutex poisoned")
            .apply_theme(theme.into());
    }

    pub fn current_theme_identifier(&self) -> FfiThemeIdentifier {
        self.panel
            .lock()
            .expect("mutex poisoned")
            .current_theme_identifier()
            .into()
    }

    pub fn theme(&self) -> FfiTheme {
        self.panel.lock().expect("mutex poisoned").theme().into()
    }

    pub fn show(&self) {
        self.panel.lock().expect("mutex poisoned").show();
    }

    pub fn hide(&self) {
        self.panel.lock().expect("mutex poisoned").hide();
    }

    pub fn is_visible(&self) -> bool {
        self.panel.lock().expect("mutex poisoned").is_visible()
    }

    pub fn setup_custom_gesture_to_show(&self) {
        self.panel
            .lock()
            .expect("mutex poisoned")
            .setup_custom_gesture_to_show();
    }

    pub fn handle_gesture(&self) -> bool {
        self.panel.lock().expect("mutex poisoned").handle_gesture()
    }

    pub fn credits_text(&self) -> String {
        self.panel
            .lock()
            .expect("mutex poisoned")
            .credits_text()
            .to_owned()
    }

    pub fn set_credits_text(&self, text: Option<String>) {
        self.panel
            .lock()
            .expect("mutex poisoned")
            .set_credits_text(text);
    }
}
