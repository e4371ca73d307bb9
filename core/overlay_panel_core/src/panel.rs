use crate::component::{Control, MenuComponent, MenuDelegate, MenuError};
use crate::theme::{Theme, ThemeIdentifier};
use std::fmt;
use std::sync::Weak;

pub const DEFAULT_CREDITS_TEXT: &str = "Made by Doan Tien";

#[derive(Debug, Clone)]
pub struct MenuTab {
    title: String,
    components: Vec<MenuComponent>,
}

impl MenuTab {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn components(&self) -> &[MenuComponent] {
        &self.components
    }
}

/// Position of a component: tab index, then index within that tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentPath {
    pub tab: usize,
    pub index: usize,
}

impl ComponentPath {
    pub fn new(tab: usize, index: usize) -> Self {
        Self { tab, index }
    }
}

/// A user interaction delivered by the host (drag, tap, pick).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlInput {
    Slider(f32),
    Switch(bool),
    Dropdown(usize),
    Theme(ThemeIdentifier),
}

impl ControlInput {
    fn name(&self) -> &'static str {
        match self {
            ControlInput::Slider(_) => "slider",
            ControlInput::Switch(_) => "switch",
            ControlInput::Dropdown(_) => "dropdown",
            ControlInput::Theme(_) => "theme",
        }
    }
}

/// The stored result of an interaction, after clamping.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueChange {
    Switch {
        key: String,
        on: bool,
    },
    Slider {
        key: String,
        value: f32,
    },
    Dropdown {
        key: String,
        index: usize,
        value: String,
    },
    Theme {
        key: String,
        theme: ThemeIdentifier,
    },
}

impl ValueChange {
    pub fn key(&self) -> &str {
        match self {
            ValueChange::Switch { key, .. }
            | ValueChange::Slider { key, .. }
            | ValueChange::Dropdown { key, .. }
            | ValueChange::Theme { key, .. } => key,
        }
    }

    pub fn dispatch(&self, delegate: &dyn MenuDelegate) {
        match self {
            ValueChange::Switch { key, on } => delegate.switch_value_changed(*on, key),
            ValueChange::Slider { key, value } => delegate.slider_value_changed(*value, key),
            ValueChange::Dropdown { key, index, value } => {
                delegate.dropdown_value_changed(*index, value, key)
            }
            ValueChange::Theme { theme, .. } => delegate.theme_changed(*theme),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureConfig {
    pub touches: u32,
    pub taps: u32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touches: 3,
            taps: 2,
        }
    }
}

pub struct SettingsPanel {
    tabs: Vec<MenuTab>,
    selected_tab_index: usize,
    delegate: Option<Weak<dyn MenuDelegate>>,
    theme: ThemeIdentifier,
    visible: bool,
    gesture: Option<GestureConfig>,
    credits: Option<String>,
}

impl fmt::Debug for SettingsPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsPanel")
            .field("tabs", &self.tabs)
            .field("selected_tab_index", &self.selected_tab_index)
            .field("has_delegate", &self.delegate.is_some())
            .field("theme", &self.theme)
            .field("visible", &self.visible)
            .field("gesture", &self.gesture)
            .field("credits", &self.credits)
            .finish()
    }
}

impl Default for SettingsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsPanel {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            selected_tab_index: 0,
            delegate: None,
            theme: ThemeIdentifier::Default,
            visible: false,
            gesture: None,
            credits: None,
        }
    }

    pub fn set_delegate(&mut self, delegate: Option<Weak<dyn MenuDelegate>>) {
        self.delegate = delegate;
    }

    pub fn add_tab(&mut self, title: impl Into<String>) -> usize {
        let title = title.into();
        tracing::debug!(%title, index = self.tabs.len(), "adding settings tab");
        self.tabs.push(MenuTab {
            title,
            components: Vec::new(),
        });
        self.tabs.len() - 1
    }

    pub fn add_component(
        &mut self,
        component: MenuComponent,
        tab_index: usize,
    ) -> Result<(), MenuError> {
        let len = self.tabs.len();
        if tab_index >= len {
            return Err(MenuError::TabOutOfRange {
                index: tab_index,
                len,
            });
        }
        if let Some(key) = component.key() {
            if self.find_component(key).is_some() {
                // Lookups keep answering from the first component with this key.
                tracing::warn!(key, "duplicate settings key; later component is shadowed");
            }
        }
        tracing::debug!(
            title = component.title(),
            kind = ?component.kind(),
            tab_index,
            "adding settings component"
        );
        self.tabs[tab_index].components.push(component);
        Ok(())
    }

    pub fn tabs(&self) -> &[MenuTab] {
        &self.tabs
    }

    pub fn component(&self, path: ComponentPath) -> Option<&MenuComponent> {
        self.tabs.get(path.tab)?.components.get(path.index)
    }

    pub fn selected_tab_index(&self) -> usize {
        self.selected_tab_index
    }

    pub fn select_tab(&mut self, index: usize) -> Result<(), MenuError> {
        if index >= self.tabs.len() {
            return Err(MenuError::TabOutOfRange {
                index,
                len: self.tabs.len(),
            });
        }
        self.selected_tab_index = index;
        Ok(())
    }

    fn components(&self) -> impl Iterator<Item = &MenuComponent> {
        self.tabs.iter().flat_map(|tab| tab.components.iter())
    }

    fn find_component(&self, key: &str) -> Option<&MenuComponent> {
        self.components().find(|c| c.key() == Some(key))
    }

    fn lookup<T>(&self, key: &str, read: impl Fn(&MenuComponent) -> Option<T>) -> Option<T> {
        self.components()
            .filter(|c| c.key() == Some(key))
            .find_map(read)
    }

    /// Switch state for `key`; `false` when the key is unknown or not a switch.
    pub fn bool_value(&self, key: &str) -> bool {
        self.lookup(key, MenuComponent::switch_on).unwrap_or(false)
    }

    pub fn float_value(&self, key: &str) -> f32 {
        self.lookup(key, MenuComponent::slider_value).unwrap_or(0.0)
    }

    pub fn int_value(&self, key: &str) -> usize {
        self.lookup(key, MenuComponent::selected_index).unwrap_or(0)
    }

    pub fn string_value(&self, key: &str) -> Option<String> {
        self.lookup(key, |c| c.selected_option().map(str::to_owned))
    }

    /// Stores the interaction's value, then notifies the component's delegate,
    /// falling back to the panel's. Theme picks also apply the theme.
    /// A hidden panel rejects input without touching any value.
    pub fn handle_input(
        &mut self,
        path: ComponentPath,
        input: ControlInput,
    ) -> Result<ValueChange, MenuError> {
        if !self.accepts_input() {
            return Err(MenuError::NotVisible);
        }
        let component = self.component_mut(path)?;
        let change = apply_input(component, input)?;
        let delegate = component
            .delegate()
            .cloned()
            .or_else(|| self.delegate.clone());

        if let ValueChange::Theme { theme, .. } = &change {
            self.apply_theme(*theme);
        }

        match delegate {
            Some(weak) => match weak.upgrade() {
                Some(delegate) => change.dispatch(delegate.as_ref()),
                None => tracing::warn!(key = change.key(), "settings delegate was dropped"),
            },
            None => tracing::trace!(key = change.key(), "no settings delegate"),
        }
        Ok(change)
    }

    fn component_mut(&mut self, path: ComponentPath) -> Result<&mut MenuComponent, MenuError> {
        let tabs = self.tabs.len();
        let tab = self.tabs.get_mut(path.tab).ok_or(MenuError::TabOutOfRange {
            index: path.tab,
            len: tabs,
        })?;
        let len = tab.components.len();
        tab.components
            .get_mut(path.index)
            .ok_or(MenuError::ComponentOutOfRange {
                tab: path.tab,
                index: path.index,
                len,
            })
    }

    pub fn apply_theme(&mut self, theme: ThemeIdentifier) {
        if self.theme != theme {
            tracing::debug!(?theme, "applying settings theme");
        }
        self.theme = theme;
        for tab in &mut self.tabs {
            for component in &mut tab.components {
                if let Control::ThemeSelector { selected } = component.control_mut() {
                    *selected = theme;
                }
            }
        }
    }

    pub fn current_theme_identifier(&self) -> ThemeIdentifier {
        self.theme
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    pub fn show(&mut self) {
        tracing::debug!("showing settings panel");
        self.visible = true;
    }

    pub fn hide(&mut self) {
        tracing::debug!("hiding settings panel");
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Input is routed to the panel only while it is on screen.
    pub fn accepts_input(&self) -> bool {
        self.visible
    }

    pub fn setup_custom_gesture_to_show(&mut self) {
        self.setup_gesture(GestureConfig::default());
    }

    pub fn setup_gesture(&mut self, gesture: GestureConfig) {
        tracing::debug!(touches = gesture.touches, taps = gesture.taps, "registering show gesture");
        self.gesture = Some(gesture);
    }

    pub fn gesture(&self) -> Option<GestureConfig> {
        self.gesture
    }

    /// Toggles visibility when the registered gesture fires. Returns the new
    /// visibility; without a registered gesture nothing changes.
    pub fn handle_gesture(&mut self) -> bool {
        if self.gesture.is_some() {
            if self.visible {
                self.hide();
            } else {
                self.show();
            }
        }
        self.visible
    }

    pub fn credits_text(&self) -> &str {
        self.credits.as_deref().unwrap_or(DEFAULT_CREDITS_TEXT)
    }

    pub fn set_credits_text(&mut self, text: Option<String>) {
        self.credits = text;
    }
}

fn apply_input(
    component: &mut MenuComponent,
    input: ControlInput,
) -> Result<ValueChange, MenuError> {
    let kind = component.kind();
    let key = component.key().unwrap_or_default().to_owned();
    match (component.control_mut(), input) {
        (
            Control::Slider(slider) | Control::SliderWithSwitch { slider, .. },
            ControlInput::Slider(value),
        ) => Ok(ValueChange::Slider {
            key,
            value: slider.set_value(value),
        }),
        (
            Control::Switch { on } | Control::SliderWithSwitch { on, .. },
            ControlInput::Switch(value),
        ) => {
            *on = value;
            Ok(ValueChange::Switch { key, on: value })
        }
        (Control::Dropdown(dropdown), ControlInput::Dropdown(index)) => {
            let value = dropdown.select(index)?.to_owned();
            Ok(ValueChange::Dropdown { key, index, value })
        }
        (Control::ThemeSelector { selected }, ControlInput::Theme(theme)) => {
            *selected = theme;
            Ok(ValueChange::Theme { key, theme })
        }
        (Control::ThemeSelector { selected }, ControlInput::Dropdown(index)) => {
            let theme =
                ThemeIdentifier::from_index(index).ok_or(MenuError::OptionOutOfRange {
                    index,
                    len: ThemeIdentifier::ALL.len(),
                })?;
            *selected = theme;
            Ok(ValueChange::Theme { key, theme })
        }
        (_, input) => Err(MenuError::InputMismatch {
            kind,
            input: input.name(),
        }),
    }
}
