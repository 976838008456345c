mod classifier;
mod element;
mod events;
mod tracker;

pub use classifier::{Classification, classify, is_content_preview_href, is_portfolio_target, ripple_kind_for};
pub use element::{ElementId, ElementInfo, ElementPath, ElementPredicate};
pub use events::{DocumentEvent, PointerInput, PointerKind};
pub use tracker::{PointerSample, PointerTracker};
