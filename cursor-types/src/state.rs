use serde::{Deserialize, Serialize};

/// Appearance preset requested by the interaction layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CursorVariant {
    #[default]
    Default,
    Hover,
    Click,
}

impl CursorVariant {
    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Hover => "hover",
            Self::Click => "click",
        }
    }
}

/// The three fields every cursor consumer agrees on.
///
/// `cursor_text` is only ever shown while `is_hovering` is set, see
/// [`CursorState::shows_label`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorState {
    pub is_hovering: bool,
    pub cursor_text: String,
    pub cursor_variant: CursorVariant,
}

impl CursorState {
    pub fn new(is_hovering: bool, cursor_text: impl Into<String>, cursor_variant: CursorVariant) -> Self {
        Self {
            is_hovering,
            cursor_text: cursor_text.into(),
            cursor_variant,
        }
    }

    pub fn shows_label(&self) -> bool {
        self.is_hovering && !self.cursor_text.is_empty()
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_requires_hover_and_text() {
        assert!(CursorState::new(true, "View", CursorVariant::Hover).shows_label());
        assert!(!CursorState::new(false, "View", CursorVariant::Hover).shows_label());
        assert!(!CursorState::new(true, "", CursorVariant::Hover).shows_label());
    }

    #[test]
    fn variants_serialize_as_their_labels() {
        #[derive(Serialize)]
        struct Wrapper {
            variant: CursorVariant,
        }
        for variant in [CursorVariant::Default, CursorVariant::Hover, CursorVariant::Click] {
            let encoded = toml::to_string(&Wrapper { variant }).unwrap();
            assert_eq!(encoded.trim(), format!("variant = \"{}\"", variant.label()));
        }
    }
}
