use crate::component::{LabelStyle, MenuComponent, MenuError};
use crate::model::{FontWeight, TextAlignment};
use crate::panel::SettingsPanel;
use crate::theme::ThemeIdentifier;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid panel config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("tab {tab:?}: {source}")]
    Component {
        tab: String,
        #[source]
        source: MenuError,
    },
    #[error("key {0:?} is used by more than one component")]
    DuplicateKey(String),
}

fn default_label_size() -> f32 {
    LabelStyle::default().font_size
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ComponentConfig {
    Slider {
        title: String,
        key: String,
        min: f32,
        max: f32,
        initial: f32,
    },
    Switch {
        title: String,
        key: String,
        #[serde(default)]
        initial: bool,
    },
    SliderWithSwitch {
        title: String,
        key: String,
        min: f32,
        max: f32,
        initial: f32,
        #[serde(default)]
        switch_initial: bool,
    },
    Label {
        text: String,
        #[serde(default = "default_label_size")]
        font_size: f32,
        #[serde(default)]
        alignment: TextAlignment,
        #[serde(default)]
        weight: FontWeight,
    },
    Dropdown {
        title: String,
        key: String,
        options: Vec<String>,
        #[serde(default)]
        initial_selected: Option<usize>,
    },
    ThemeSelector {
        title: String,
        key: String,
        #[serde(default)]
        initial_selected: ThemeIdentifier,
    },
}

impl ComponentConfig {
    pub fn build(self) -> Result<MenuComponent, MenuError> {
        match self {
            ComponentConfig::Slider {
                title,
                key,
                min,
                max,
                initial,
            } => MenuComponent::slider(title, key, min, max, initial),
            ComponentConfig::Switch {
                title,
                key,
                initial,
            } => MenuComponent::switch(title, key, initial),
            ComponentConfig::SliderWithSwitch {
                title,
                key,
                min,
                max,
                initial,
                switch_initial,
            } => MenuComponent::slider_with_switch(title, key, min, max, initial, switch_initial),
            ComponentConfig::Label {
                text,
                font_size,
                alignment,
                weight,
            } => Ok(MenuComponent::styled_label(
                text,
                LabelStyle {
                    font_size,
                    alignment,
                    weight,
                },
            )),
            ComponentConfig::Dropdown {
                title,
                key,
                options,
                initial_selected,
            } => MenuComponent::dropdown(title, key, options, initial_selected),
            ComponentConfig::ThemeSelector {
                title,
                key,
                initial_selected,
            } => MenuComponent::theme_selector(title, key, initial_selected),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabConfig {
    pub title: String,
    #[serde(default)]
    pub components: Vec<ComponentConfig>,
}

/// Layout and initial values of a settings panel, read from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PanelConfig {
    #[serde(default)]
    pub theme: ThemeIdentifier,
    #[serde(default)]
    pub credits: Option<String>,
    #[serde(default)]
    pub tabs: Vec<TabConfig>,
}

impl PanelConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds a panel, validating every component. Unlike
    /// `SettingsPanel::add_component`, repeated keys are an error here.
    pub fn build(self) -> Result<SettingsPanel, ConfigError> {
        let mut panel = SettingsPanel::new();
        let mut seen = HashSet::new();

        for tab in self.tabs {
            let index = panel.add_tab(tab.title.clone());
            for entry in tab.components {
                let component = entry.build().map_err(|source| ConfigError::Component {
                    tab: tab.title.clone(),
                    source,
                })?;
                if let Some(key) = component.key() {
                    if !seen.insert(key.to_owned()) {
                        return Err(ConfigError::DuplicateKey(key.to_owned()));
                    }
                }
                panel
                    .add_component(component, index)
                    .map_err(|source| ConfigError::Component {
                        tab: tab.title.clone(),
                        source,
                    })?;
            }
        }

        panel.apply_theme(self.theme);
        panel.set_credits_text(self.credits);
        tracing::debug!(tabs = panel.tabs().len(), "built settings panel from config");
        Ok(panel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentKind;

    const LAYOUT: &str = r#"{
        "theme": "blue",
        "tabs": [
            {
                "title": "Aim",
                "components": [
                    { "type": "slider", "title": "FOV", "key": "fov", "min": 10, "max": 120, "initial": 90 },
                    { "type": "switch", "title": "Enabled", "key": "aim", "initial": true },
                    { "type": "dropdown", "title": "Bone", "key": "bone", "options": ["Head", "Neck"], "initial_selected": 1 }
                ]
            },
            {
                "title": "Misc",
                "components": [
                    { "type": "label", "text": "Style", "weight": "bold" },
                    { "type": "theme_selector", "title": "Theme", "key": "theme" }
                ]
            }
        ]
    }"#;

    #[test]
    fn builds_panel_from_json() {
        let panel = PanelConfig::from_json(LAYOUT).unwrap().build().unwrap();

        assert_eq!(panel.tabs().len(), 2);
        assert_eq!(panel.tabs()[0].title(), "Aim");
        assert_eq!(panel.float_value("fov"), 90.0);
        assert!(panel.bool_value("aim"));
        assert_eq!(panel.string_value("bone").as_deref(), Some("Neck"));
        assert_eq!(panel.current_theme_identifier(), ThemeIdentifier::Blue);
        assert_eq!(panel.string_value("theme").as_deref(), Some("Blue"));
        assert_eq!(panel.credits_text(), crate::panel::DEFAULT_CREDITS_TEXT);

        let label = &panel.tabs()[1].components()[0];
        assert_eq!(label.kind(), ComponentKind::Label);
        assert_eq!(label.title(), "Style");
    }

    #[test]
    fn duplicate_keys_are_a_config_error() {
        let json = r#"{ "tabs": [ { "title": "A", "components": [
            { "type": "switch", "title": "One", "key": "box" },
            { "type": "switch", "title": "Two", "key": "box" }
        ] } ] }"#;
        let err = PanelConfig::from_json(json).unwrap().build().unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateKey(ref k) if k == "box"));
    }

    #[test]
    fn invalid_component_reports_its_tab() {
        let json = r#"{ "tabs": [ { "title": "Aim", "components": [
            { "type": "slider", "title": "FOV", "key": "fov", "min": 10, "max": 120, "initial": 200 }
        ] } ] }"#;
        let err = PanelConfig::from_json(json).unwrap().build().unwrap_err();
        match err {
            ConfigError::Component { tab, source } => {
                assert_eq!(tab, "Aim");
                assert!(matches!(source, MenuError::ValueOutOfRange { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            PanelConfig::from_json("{ \"tabs\": 3 }"),
            Err(ConfigError::Parse(_))
        ));
    }
}
