use cursor_types::{RippleKind, RouteRules};

use crate::{ElementInfo, ElementPath, ElementPredicate};

const PREVIEW_CLASS_MARKERS: [&str; 2] = ["project-card", "portfolio-item"];
const PREVIEW_LABEL: &str = "view";

/// Result of looking at one event target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification<'a> {
    pub interactive: Option<&'a ElementInfo>,
    pub over_form_field: bool,
    pub portfolio: bool,
}

impl Classification<'_> {
    pub fn nothing() -> Self {
        Self {
            interactive: None,
            over_form_field: false,
            portfolio: false,
        }
    }
}

pub fn classify<'a>(path: &'a ElementPath, rules: &RouteRules) -> Classification<'a> {
    if path.is_empty() {
        return Classification::nothing();
    }

    let interactive = path.closest(&[ElementPredicate::Interactive]);
    let over_form_field = path.closest(&[ElementPredicate::FormField]).is_some();
    let portfolio = interactive.is_some_and(|el| is_portfolio_target(el, rules));

    Classification {
        interactive,
        over_form_field,
        portfolio,
    }
}

/// Whether activating `element` is expected to open a content preview.
/// The first matching rule decides.
pub fn is_portfolio_target(element: &ElementInfo, rules: &RouteRules) -> bool {
    if let Some(href) = element.href.as_deref() {
        if is_content_preview_href(href, rules) {
            return true;
        }
        if href.contains(rules.admin_marker.as_str()) {
            return false;
        }
    }

    if element
        .cursor_text
        .as_deref()
        .is_some_and(|text| text.eq_ignore_ascii_case(PREVIEW_LABEL))
    {
        return true;
    }

    PREVIEW_CLASS_MARKERS
        .iter()
        .any(|marker| element.class_name.contains(marker))
}

/// `/projects/{id}` or `/projects/{id}/`, nothing deeper and nothing shallower.
pub fn is_content_preview_href(href: &str, rules: &RouteRules) -> bool {
    let path = path_of(href);
    let route = rules.content_route.trim_end_matches('/');

    let Some(rest) = path.strip_prefix(route) else {
        return false;
    };
    let Some(segment) = rest.strip_prefix('/') else {
        return false;
    };
    let segment = segment.strip_suffix('/').unwrap_or(segment);

    !segment.is_empty() && !segment.contains('/')
}

pub fn ripple_kind_for(element: &ElementInfo) -> RippleKind {
    if ElementPredicate::Hyperlink.matches(element) || ElementPredicate::CursorLabelled.matches(element) {
        RippleKind::Navigation
    } else {
        RippleKind::Click
    }
}

// Drops scheme, authority, query and fragment.
fn path_of(href: &str) -> &str {
    let without_origin = match href.find("://") {
        Some(idx) => {
            let after = &href[idx + 3..];
            after.find('/').map_or("", |slash| &after[slash..])
        }
        None => href,
    };
    let end = without_origin
        .find(['?', '#'])
        .unwrap_or(without_origin.len());
    &without_origin[..end]
}
