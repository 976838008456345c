use serde::Serialize;

use crate::{RippleId, RippleKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    Normal,
    Difference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorFill {
    Solid,
    Outline,
}

/// Everything the overlay needs to paint the pointer indicator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CursorVisual {
    pub width: f32,
    pub height: f32,
    pub fill: CursorFill,
    pub background_color: &'static str,
    pub text_color: &'static str,
    pub font_size: f32,
    pub font_weight: u16,
    pub blend_mode: BlendMode,
    pub label: Option<String>,
}

impl std::fmt::Display for CursorVisual {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fill = match self.fill {
            CursorFill::Solid => "solid",
            CursorFill::Outline => "outline",
        };
        let blend = match self.blend_mode {
            BlendMode::Normal => "normal",
            BlendMode::Difference => "difference",
        };
        write!(
            f,
            "{}x{} {} bg={} fg={} font={}/{} blend={}",
            self.width,
            self.height,
            fill,
            self.background_color,
            self.text_color,
            self.font_size,
            self.font_weight,
            blend
        )?;
        if let Some(label) = &self.label {
            write!(f, " label={label}")?;
        }
        Ok(())
    }
}

/// One frame of a ripple ring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RippleVisual {
    pub id: RippleId,
    pub kind: RippleKind,
    pub x: f32,
    pub y: f32,
    /// Linear animation progress in `0.0..=1.0`.
    pub progress: f32,
    pub size: f32,
    pub opacity: f32,
}
