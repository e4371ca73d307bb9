use crate::model::ColorRgba8;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeIdentifier {
    #[default]
    Default,
    Blue,
    Pink,
}

impl ThemeIdentifier {
    /// Selector order: a theme selector's option index maps onto this list.
    pub const ALL: [ThemeIdentifier; 3] = [
        ThemeIdentifier::Default,
        ThemeIdentifier::Blue,
        ThemeIdentifier::Pink,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ThemeIdentifier::Default => "Default",
            ThemeIdentifier::Blue => "Blue",
            ThemeIdentifier::Pink => "Pink",
        }
    }

    pub fn index(self) -> usize {
        match self {
            ThemeIdentifier::Default => 0,
            ThemeIdentifier::Blue => 1,
            ThemeIdentifier::Pink => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn theme(self) -> Theme {
        match self {
            ThemeIdentifier::Default => Theme {
                identifier: self,
                background: ColorRgba8::rgba(28, 28, 30, 235),
                header: ColorRgba8::rgb(44, 44, 46),
                accent: ColorRgba8::rgb(10, 132, 255),
                text: ColorRgba8::rgb(255, 255, 255),
                secondary_text: ColorRgba8::rgb(152, 152, 157),
                track: ColorRgba8::rgb(72, 72, 74),
            },
            ThemeIdentifier::Blue => Theme {
                identifier: self,
                background: ColorRgba8::rgba(12, 24, 48, 235),
                header: ColorRgba8::rgb(20, 40, 80),
                accent: ColorRgba8::rgb(64, 156, 255),
                text: ColorRgba8::rgb(225, 236, 255),
                secondary_text: ColorRgba8::rgb(130, 155, 200),
                track: ColorRgba8::rgb(40, 62, 104),
            },
            ThemeIdentifier::Pink => Theme {
                identifier: self,
                background: ColorRgba8::rgba(48, 16, 36, 235),
                header: ColorRgba8::rgb(82, 26, 60),
                accent: ColorRgba8::rgb(255, 105, 180),
                text: ColorRgba8::rgb(255, 232, 244),
                secondary_text: ColorRgba8::rgb(210, 150, 185),
                track: ColorRgba8::rgb(110, 52, 86),
            },
        }
    }
}

/// Colors the host uses to style the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub identifier: ThemeIdentifier,
    pub background: ColorRgba8,
    pub header: ColorRgba8,
    pub accent: ColorRgba8,
    pub text: ColorRgba8,
    pub secondary_text: ColorRgba8,
    pub track: ColorRgba8,
}

impl Default for Theme {
    fn default() -> Self {
        ThemeIdentifier::Default.theme()
    }
}

pub fn theme_option_names() -> Vec<String> {
    ThemeIdentifier::ALL
        .iter()
        .map(|id| id.name().to_owned())
        .collect()
}
