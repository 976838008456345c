use serde::{Deserialize, Serialize};

/// Stable identity of a node for as long as the host keeps it mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub u64);

/// The parts of a document node the cursor cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementInfo {
    pub id: ElementId,
    pub tag: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub class_name: String,
    /// Value of the explicit cursor label attribute, if present.
    #[serde(default)]
    pub cursor_text: Option<String>,
    /// Explicit "treat as interactive" marker.
    #[serde(default)]
    pub interactive: bool,
    #[serde(default)]
    pub content_editable: bool,
}

impl ElementInfo {
    pub fn new(id: u64, tag: impl Into<String>) -> Self {
        Self {
            id: ElementId(id),
            tag: tag.into(),
            href: None,
            role: None,
            class_name: String::new(),
            cursor_text: None,
            interactive: false,
            content_editable: false,
        }
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_cursor_text(mut self, text: impl Into<String>) -> Self {
        self.cursor_text = Some(text.into());
        self
    }

    pub fn marked_interactive(mut self) -> Self {
        self.interactive = true;
        self
    }

    pub fn editable(mut self) -> Self {
        self.content_editable = true;
        self
    }

    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    fn has_role(&self, role: &str) -> bool {
        self.role
            .as_deref()
            .is_some_and(|r| r.eq_ignore_ascii_case(role))
    }
}

/// Capabilities an element can be matched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementPredicate {
    /// Links, buttons, link/button roles and explicitly marked nodes.
    Interactive,
    /// Inputs and anything else that takes typed text.
    FormField,
    Hyperlink,
    Button,
    CursorLabelled,
}

impl ElementPredicate {
    pub fn matches(self, element: &ElementInfo) -> bool {
        match self {
            Self::Interactive => {
                element.is_tag("a")
                    || element.is_tag("button")
                    || element.has_role("button")
                    || element.has_role("link")
                    || element.interactive
                    || element.cursor_text.is_some()
            }
            Self::FormField => {
                element.is_tag("input")
                    || element.is_tag("textarea")
                    || element.is_tag("select")
                    || element.is_tag("option")
                    || element.content_editable
            }
            Self::Hyperlink => element.is_tag("a"),
            Self::Button => element.is_tag("button") || element.has_role("button"),
            Self::CursorLabelled => element.cursor_text.is_some(),
        }
    }
}

/// An event target followed by its ancestors, nearest first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementPath(Vec<ElementInfo>);

impl ElementPath {
    pub fn new(nodes: Vec<ElementInfo>) -> Self {
        Self(nodes)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn target(&self) -> Option<&ElementInfo> {
        self.0.first()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Nearest node (the target itself included) matching any of `predicates`.
    pub fn closest(&self, predicates: &[ElementPredicate]) -> Option<&ElementInfo> {
        self.0
            .iter()
            .find(|el| predicates.iter().any(|p| p.matches(el)))
    }
}

impl From<Vec<ElementInfo>> for ElementPath {
    fn from(nodes: Vec<ElementInfo>) -> Self {
        Self(nodes)
    }
}
