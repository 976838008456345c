use cursor_types::{
    BlendMode, CursorFill, CursorState, CursorVariant, CursorVisual, Ripple, RippleKind,
    RippleVisual,
};
use std::time::Duration;

pub const LABEL_SIZE: f32 = 115.0;
pub const HOVER_SIZE: f32 = 50.0;
pub const CLICK_SIZE: f32 = 20.0;
pub const DEFAULT_SIZE: f32 = 32.0;

const RIPPLE_START_OPACITY: f32 = 0.6;

/// Maps the store onto the indicator's appearance. A shown label overrides the
/// variant; otherwise each variant has exactly one preset.
pub fn cursor_visual(state: &CursorState) -> CursorVisual {
    if state.shows_label() {
        return CursorVisual {
            width: LABEL_SIZE,
            height: LABEL_SIZE,
            fill: CursorFill::Solid,
            background_color: "#ffffff",
            text_color: "#000000",
            font_size: 14.0,
            font_weight: 600,
            blend_mode: BlendMode::Normal,
            label: Some(state.cursor_text.clone()),
        };
    }

    let (size, fill, background_color) = match state.cursor_variant {
        CursorVariant::Hover => (HOVER_SIZE, CursorFill::Outline, "transparent"),
        CursorVariant::Click => (CLICK_SIZE, CursorFill::Solid, "#ffffff"),
        CursorVariant::Default => (DEFAULT_SIZE, CursorFill::Solid, "#ffffff"),
    };

    CursorVisual {
        width: size,
        height: size,
        fill,
        background_color,
        text_color: "transparent",
        font_size: 0.0,
        font_weight: 400,
        blend_mode: BlendMode::Difference,
        label: None,
    }
}

pub fn ripple_visual(ripple: &Ripple, now: Duration) -> RippleVisual {
    let animation = ripple.kind.animation().as_secs_f32();
    let progress = (ripple.age(now).as_secs_f32() / animation).clamp(0.0, 1.0);
    let eased = match ripple.kind {
        RippleKind::Click => ease_out_cubic(progress),
        RippleKind::Navigation => ease_out_expo(progress),
    };

    RippleVisual {
        id: ripple.id,
        kind: ripple.kind,
        x: ripple.x,
        y: ripple.y,
        progress,
        size: ripple.kind.max_size() * eased,
        opacity: RIPPLE_START_OPACITY * (1.0 - eased),
    }
}

pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

pub fn ease_out_expo(t: f32) -> f32 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2f32.powf(-10.0 * t)
    }
}
