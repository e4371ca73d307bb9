use crate::model::{FontWeight, TextAlignment};
use crate::theme::{theme_option_names, ThemeIdentifier};
use std::fmt;
use std::sync::Weak;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Slider,
    Switch,
    SliderWithSwitch,
    Label,
    Dropdown,
    ThemeSelector,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MenuError {
    #[error("slider range is empty: min {min} must be below max {max}")]
    InvalidRange { min: f32, max: f32 },
    #[error("initial value {value} is outside [{min}, {max}]")]
    ValueOutOfRange { value: f32, min: f32, max: f32 },
    #[error("selection {index} is out of bounds for {len} options")]
    SelectionOutOfBounds { index: usize, len: usize },
    #[error("component {title:?} needs a non-empty key")]
    MissingKey { title: String },
    #[error("tab index {index} is out of range ({len} tabs)")]
    TabOutOfRange { index: usize, len: usize },
    #[error("component {index} is out of range in tab {tab} ({len} components)")]
    ComponentOutOfRange { tab: usize, index: usize, len: usize },
    #[error("{input} input does not apply to a {kind:?} component")]
    InputMismatch {
        kind: ComponentKind,
        input: &'static str,
    },
    #[error("picked option {index} but only {len} exist")]
    OptionOutOfRange { index: usize, len: usize },
    #[error("settings panel is hidden")]
    NotVisible,
}

/// Observer of value changes. Every callback defaults to a no-op so an
/// implementor only overrides what it cares about.
pub trait MenuDelegate: Send + Sync {
    fn switch_value_changed(&self, _on: bool, _key: &str) {}

    fn slider_value_changed(&self, _value: f32, _key: &str) {}

    fn dropdown_value_changed(&self, _index: usize, _value: &str, _key: &str) {}

    fn theme_changed(&self, _theme: ThemeIdentifier) {}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderState {
    min: f32,
    max: f32,
    value: f32,
}

impl SliderState {
    fn new(min: f32, max: f32, initial: f32) -> Result<Self, MenuError> {
        // Also rejects NaN bounds.
        if !(min < max) {
            return Err(MenuError::InvalidRange { min, max });
        }
        if !(min..=max).contains(&initial) {
            return Err(MenuError::ValueOutOfRange {
                value: initial,
                min,
                max,
            });
        }
        Ok(Self {
            min,
            max,
            value: initial,
        })
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Clamps into `[min, max]` and returns the stored value. NaN is ignored.
    pub fn set_value(&mut self, value: f32) -> f32 {
        if !value.is_nan() {
            self.value = value.clamp(self.min, self.max);
        }
        self.value
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    pub font_size: f32,
    pub alignment: TextAlignment,
    pub weight: FontWeight,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            alignment: TextAlignment::Left,
            weight: FontWeight::Regular,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DropdownState {
    options: Vec<String>,
    selected: Option<usize>,
}

impl DropdownState {
    fn new(options: Vec<String>, initial: Option<usize>) -> Result<Self, MenuError> {
        let selected = match initial {
            Some(index) if index >= options.len() => {
                return Err(MenuError::SelectionOutOfBounds {
                    index,
                    len: options.len(),
                })
            }
            Some(index) => Some(index),
            None if options.is_empty() => None,
            None => Some(0),
        };
        Ok(Self { options, selected })
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_option(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }

    pub fn select(&mut self, index: usize) -> Result<&str, MenuError> {
        let Some(option) = self.options.get(index) else {
            return Err(MenuError::OptionOutOfRange {
                index,
                len: self.options.len(),
            });
        };
        self.selected = Some(index);
        Ok(option)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    Slider(SliderState),
    Switch { on: bool },
    SliderWithSwitch { slider: SliderState, on: bool },
    Label(LabelStyle),
    Dropdown(DropdownState),
    ThemeSelector { selected: ThemeIdentifier },
}

impl Control {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Control::Slider(_) => ComponentKind::Slider,
            Control::Switch { .. } => ComponentKind::Switch,
            Control::SliderWithSwitch { .. } => ComponentKind::SliderWithSwitch,
            Control::Label(_) => ComponentKind::Label,
            Control::Dropdown(_) => ComponentKind::Dropdown,
            Control::ThemeSelector { .. } => ComponentKind::ThemeSelector,
        }
    }
}

/// One control on the settings panel. Built only through the constructors
/// below, so the stored state always matches the component kind.
#[derive(Clone)]
pub struct MenuComponent {
    title: String,
    key: Option<String>,
    control: Control,
    delegate: Option<Weak<dyn MenuDelegate>>,
}

impl fmt::Debug for MenuComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuComponent")
            .field("title", &self.title)
            .field("key", &self.key)
            .field("control", &self.control)
            .field("has_delegate", &self.delegate.is_some())
            .finish()
    }
}

fn required_key(title: &str, key: String) -> Result<String, MenuError> {
    if key.is_empty() {
        return Err(MenuError::MissingKey {
            title: title.to_owned(),
        });
    }
    Ok(key)
}

impl MenuComponent {
    fn keyed(title: String, key: String, control: Control) -> Result<Self, MenuError> {
        let key = required_key(&title, key)?;
        Ok(Self {
            title,
            key: Some(key),
            control,
            delegate: None,
        })
    }

    pub fn slider(
        title: impl Into<String>,
        key: impl Into<String>,
        min: f32,
        max: f32,
        initial: f32,
    ) -> Result<Self, MenuError> {
        let slider = SliderState::new(min, max, initial)?;
        Self::keyed(title.into(), key.into(), Control::Slider(slider))
    }

    pub fn switch(
        title: impl Into<String>,
        key: impl Into<String>,
        initial: bool,
    ) -> Result<Self, MenuError> {
        Self::keyed(title.into(), key.into(), Control::Switch { on: initial })
    }

    pub fn slider_with_switch(
        title: impl Into<String>,
        key: impl Into<String>,
        min: f32,
        max: f32,
        initial: f32,
        switch_initial: bool,
    ) -> Result<Self, MenuError> {
        let slider = SliderState::new(min, max, initial)?;
        Self::keyed(
            title.into(),
            key.into(),
            Control::SliderWithSwitch {
                slider,
                on: switch_initial,
            },
        )
    }

    pub fn label(text: impl Into<String>) -> Self {
        Self::styled_label(text, LabelStyle::default())
    }

    pub fn styled_label(text: impl Into<String>, style: LabelStyle) -> Self {
        Self {
            title: text.into(),
            key: None,
            control: Control::Label(style),
            delegate: None,
        }
    }

    /// `initial_selected` must index into `options`; `None` picks the first
    /// option, or leaves an empty dropdown unset.
    pub fn dropdown(
        title: impl Into<String>,
        key: impl Into<String>,
        options: Vec<String>,
        initial_selected: Option<usize>,
    ) -> Result<Self, MenuError> {
        let dropdown = DropdownState::new(options, initial_selected)?;
        Self::keyed(title.into(), key.into(), Control::Dropdown(dropdown))
    }

    pub fn theme_selector(
        title: impl Into<String>,
        key: impl Into<String>,
        initial_selected: ThemeIdentifier,
    ) -> Result<Self, MenuError> {
        Self::keyed(
            title.into(),
            key.into(),
            Control::ThemeSelector {
                selected: initial_selected,
            },
        )
    }

    /// Routes this component's callbacks to `delegate` instead of the panel's.
    pub fn with_delegate(mut self, delegate: Weak<dyn MenuDelegate>) -> Self {
        self.delegate = Some(delegate);
        self
    }

    pub fn delegate(&self) -> Option<&Weak<dyn MenuDelegate>> {
        self.delegate.as_ref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn kind(&self) -> ComponentKind {
        self.control.kind()
    }

    pub fn control(&self) -> &Control {
        &self.control
    }

    pub(crate) fn control_mut(&mut self) -> &mut Control {
        &mut self.control
    }

    pub fn switch_on(&self) -> Option<bool> {
        match &self.control {
            Control::Switch { on } | Control::SliderWithSwitch { on, .. } => Some(*on),
            _ => None,
        }
    }

    pub fn slider_value(&self) -> Option<f32> {
        match &self.control {
            Control::Slider(slider) | Control::SliderWithSwitch { slider, .. } => {
                Some(slider.value())
            }
            _ => None,
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        match &self.control {
            Control::Dropdown(dropdown) => dropdown.selected(),
            Control::ThemeSelector { selected } => Some(selected.index()),
            _ => None,
        }
    }

    pub fn selected_option(&self) -> Option<&str> {
        match &self.control {
            Control::Dropdown(dropdown) => dropdown.selected_option(),
            Control::ThemeSelector { selected } => Some(selected.name()),
            _ => None,
        }
    }

    /// Option labels for dropdowns and theme selectors; empty otherwise.
    pub fn options(&self) -> Vec<String> {
        match &self.control {
            Control::Dropdown(dropdown) => dropdown.options().to_vec(),
            Control::ThemeSelector { .. } => theme_option_names(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_rejects_bad_construction() {
        assert_eq!(
            MenuComponent::slider("FOV", "fov", 120.0, 10.0, 90.0).unwrap_err(),
            MenuError::InvalidRange {
                min: 120.0,
                max: 10.0
            }
        );
        assert!(matches!(
            MenuComponent::slider("FOV", "fov", 10.0, 10.0, 10.0),
            Err(MenuError::InvalidRange { .. })
        ));
        assert!(matches!(
            MenuComponent::slider("FOV", "fov", 10.0, 120.0, 150.0),
            Err(MenuError::ValueOutOfRange { .. })
        ));
        assert!(matches!(
            MenuComponent::slider("FOV", "fov", f32::NAN, 120.0, 90.0),
            Err(MenuError::InvalidRange { .. })
        ));
    }

    #[test]
    fn slider_updates_always_clamp() {
        let mut c = MenuComponent::slider_with_switch("Smooth", "smooth", 0.0, 1.0, 0.5, true)
            .unwrap();
        let Control::SliderWithSwitch { slider, .. } = c.control_mut() else {
            panic!("expected slider with switch");
        };
        for attempt in [-3.0, 0.25, 7.0, f32::INFINITY, f32::NEG_INFINITY, f32::NAN] {
            let stored = slider.set_value(attempt);
            assert!((0.0..=1.0).contains(&stored), "{attempt} stored as {stored}");
        }
        assert_eq!(c.switch_on(), Some(true));
    }

    #[test]
    fn keyed_components_require_a_key() {
        assert!(matches!(
            MenuComponent::switch("Box", "", true),
            Err(MenuError::MissingKey { .. })
        ));
        let label = MenuComponent::label("Visuals");
        assert_eq!(label.key(), None);
        assert_eq!(label.kind(), ComponentKind::Label);
        assert_eq!(label.control(), &Control::Label(LabelStyle::default()));
    }

    #[test]
    fn dropdown_selection_rules() {
        let opts = || vec!["Head".to_owned(), "Neck".to_owned(), "Chest".to_owned()];

        let d = MenuComponent::dropdown("Bone", "bone", opts(), Some(2)).unwrap();
        assert_eq!(d.selected_index(), Some(2));
        assert_eq!(d.selected_option(), Some("Chest"));

        let d = MenuComponent::dropdown("Bone", "bone", opts(), None).unwrap();
        assert_eq!(d.selected_index(), Some(0));

        assert_eq!(
            MenuComponent::dropdown("Bone", "bone", opts(), Some(3)).unwrap_err(),
            MenuError::SelectionOutOfBounds { index: 3, len: 3 }
        );

        let empty = MenuComponent::dropdown("Bone", "bone", Vec::new(), None).unwrap();
        assert_eq!(empty.selected_index(), None);
        assert_eq!(empty.selected_option(), None);
        assert!(MenuComponent::dropdown("Bone", "bone", Vec::new(), Some(0)).is_err());
    }

    #[test]
    fn dropdown_select_keeps_index_valid() {
        let mut state = DropdownState::new(vec!["a".into(), "b".into()], Some(0)).unwrap();
        assert_eq!(state.select(1).unwrap(), "b");
        assert_eq!(
            state.select(5).unwrap_err(),
            MenuError::OptionOutOfRange { index: 5, len: 2 }
        );
        assert_eq!(state.selected(), Some(1));
    }

    #[test]
    fn theme_selector_exposes_theme_names() {
        let t = MenuComponent::theme_selector("Theme", "theme", ThemeIdentifier::Pink).unwrap();
        assert_eq!(t.options(), vec!["Default", "Blue", "Pink"]);
        assert_eq!(t.selected_index(), Some(2));
        assert_eq!(t.selected_option(), Some("Pink"));
    }
}
