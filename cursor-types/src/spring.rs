use serde::{Deserialize, Serialize};

use crate::CursorState;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub damping: f32,
    pub stiffness: f32,
    pub mass: f32,
    pub rest_speed: f32,
    pub rest_delta: f32,
}

impl SpringConfig {
    /// Heavy and slow, used while a label is shown.
    pub const TEXT: Self = Self {
        damping: 30.0,
        stiffness: 200.0,
        mass: 1.2,
        rest_speed: 0.01,
        rest_delta: 0.01,
    };

    /// Light and snappy, used while pressed.
    pub const CLICK: Self = Self {
        damping: 25.0,
        stiffness: 500.0,
        mass: 0.6,
        rest_speed: 0.01,
        rest_delta: 0.01,
    };

    pub const DEFAULT: Self = Self {
        damping: 18.0,
        stiffness: 280.0,
        mass: 0.9,
        rest_speed: 0.01,
        rest_delta: 0.01,
    };
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpringPreset {
    Text,
    Click,
    Default,
}

impl SpringPreset {
    pub fn for_state(state: &CursorState) -> Self {
        if state.shows_label() {
            Self::Text
        } else if state.cursor_variant == crate::CursorVariant::Click {
            Self::Click
        } else {
            Self::Default
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringPresets {
    pub text: SpringConfig,
    pub click: SpringConfig,
    pub default: SpringConfig,
}

impl Default for SpringPresets {
    fn default() -> Self {
        Self {
            text: SpringConfig::TEXT,
            click: SpringConfig::CLICK,
            default: SpringConfig::DEFAULT,
        }
    }
}

impl SpringPresets {
    pub fn get(&self, preset: SpringPreset) -> SpringConfig {
        match preset {
            SpringPreset::Text => self.text,
            SpringPreset::Click => self.click,
            SpringPreset::Default => self.default,
        }
    }

    pub fn for_state(&self, state: &CursorState) -> SpringConfig {
        self.get(SpringPreset::for_state(state))
    }
}
