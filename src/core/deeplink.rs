//! # Deep-Link Codec
//!
//! Bidirectional mapping between a navigation position and a URL-style
//! fragment: `#/<categoryId>` or `#/<categoryId>/<itemId>`.
//!
//! Parsing is total: anything that isn't a well-formed fragment naming a
//! known category is simply "no deep link" (`None`), never an error. The
//! TUI side publishes formatted fragments to the terminal title (replace
//! semantics — see `tui::link`).

use crate::core::catalog::CategoryId;

/// A parsed deep link. Transient — derived from/to the fragment on demand,
/// never stored as state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    pub category_id: CategoryId,
    pub item_id: Option<String>,
    /// Set when the fragment names an item: landing on a shared item link
    /// opens its detail panel.
    pub open_detail: bool,
}

/// Parse a fragment into a deep link.
///
/// Accepts `#/category`, `#/category/item`, and the same without the
/// leading `#` or `/`. Empty, `#`, `#/`, and unknown-category fragments
/// all yield `None`. Path segments beyond the item id are ignored.
pub fn parse(fragment: &str) -> Option<DeepLink> {
    let path = fragment.strip_prefix('#').unwrap_or(fragment);
    let mut parts = path.split('/').filter(|p| !p.is_empty());

    let category_id = CategoryId::parse(parts.next()?)?;

    match parts.next() {
        None => Some(DeepLink {
            category_id,
            item_id: None,
            open_detail: false,
        }),
        Some(item) => Some(DeepLink {
            category_id,
            item_id: Some(item.to_string()),
            open_detail: true,
        }),
    }
}

/// Format a position as a fragment. Omitting `item_id` yields the
/// category-only form.
pub fn format(category_id: CategoryId, item_id: Option<&str>) -> String {
    match item_id {
        Some(item) => format!("#/{}/{}", category_id.as_str(), item),
        None => format!("#/{}", category_id.as_str()),
    }
}
