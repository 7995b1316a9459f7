//! # Navigation Core
//!
//! Single source of truth for "where the cursor is" and "is the detail
//! panel open". All input sources — keyboard, mouse clicks, wheel, drag
//! gestures — funnel into the same operations, so the transition rules
//! live in exactly one place and the core performs no I/O.
//!
//! ```text
//! input event ──► Navigator op ──► Option<NavSignal>
//!                                      │
//!                        Some ⇒ one committed transition:
//!                          • audio cue (tui::audio)
//!                          • title sync (tui::link, via resolved())
//! ```
//!
//! Every operation is total. Out-of-range requests, boundary bumps, and
//! moves while the panel is open are absorbed as no-ops (`None`) — rapid
//! repeated key presses mid-animation must never surface an error.

use log::debug;

use crate::core::catalog::{Catalog, CategoryId};
use crate::core::deeplink::DeepLink;

/// Signal describing a committed transition, consumed by subscribers
/// (audio cues, title sync). Exactly one is produced per externally
/// observable state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSignal {
    /// The cursor moved (category or item).
    Navigated,
    /// The detail panel opened for the addressed item.
    Selected,
    /// The detail panel closed.
    Back,
}

/// The `(category, item, detail)` projection collaborators read.
/// `item_id` is `None` only when the selected category has no items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPosition {
    pub category_id: CategoryId,
    pub item_id: Option<String>,
    pub detail_open: bool,
}

/// The 2D cursor plus modal flag.
///
/// Item positions are remembered independently per category — keyed by the
/// closed [`CategoryId`] set in a fixed-size array, not a growable map —
/// so switching away and back restores the previous row.
pub struct Navigator {
    category_index: usize,
    remembered: [usize; CategoryId::COUNT],
    detail_open: bool,
    /// Catalog order and item counts, captured at construction and on
    /// `sync()`. The catalog itself stays outside the core.
    order: Vec<CategoryId>,
    counts: Vec<usize>,
}

impl Navigator {
    /// Cursor at the first category, first item of every category.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            category_index: 0,
            remembered: [0; CategoryId::COUNT],
            detail_open: false,
            order: catalog.categories().iter().map(|c| c.id).collect(),
            counts: catalog.categories().iter().map(|c| c.items.len()).collect(),
        }
    }

    /// Like [`new`](Self::new), optionally seeded from a parsed deep link.
    ///
    /// A link naming an unknown item falls back to the category alone; the
    /// detail panel only opens when the item actually resolves.
    pub fn seeded(catalog: &Catalog, link: Option<&DeepLink>) -> Self {
        let mut nav = Self::new(catalog);
        let Some(link) = link else {
            return nav;
        };
        let Some(category_index) = catalog.position_of(link.category_id) else {
            return nav;
        };
        nav.category_index = category_index;
        if let Some(item_id) = &link.item_id
            && let Some(item_index) = catalog.item_position(category_index, item_id)
        {
            nav.remembered[link.category_id.index()] = item_index;
            nav.detail_open = link.open_detail;
        }
        debug!(
            "navigator seeded at {}[{}] detail={}",
            link.category_id.as_str(),
            nav.item_index(),
            nav.detail_open
        );
        nav
    }

    /// Re-capture order/counts after a catalog rebuild and clamp every
    /// remembered index back into range.
    pub fn sync(&mut self, catalog: &Catalog) {
        self.order = catalog.categories().iter().map(|c| c.id).collect();
        self.counts = catalog.categories().iter().map(|c| c.items.len()).collect();
        self.category_index = self.category_index.min(self.order.len().saturating_sub(1));
        for (pos, id) in self.order.iter().enumerate() {
            let slot = &mut self.remembered[id.index()];
            *slot = (*slot).min(self.counts[pos].saturating_sub(1));
        }
        if self.detail_open && self.current_count() == 0 {
            self.detail_open = false;
        }
    }

    pub fn category_index(&self) -> usize {
        self.category_index
    }

    /// Remembered item index for the currently selected category.
    pub fn item_index(&self) -> usize {
        self.remembered[self.current_id().index()]
    }

    pub fn detail_open(&self) -> bool {
        self.detail_open
    }

    fn current_id(&self) -> CategoryId {
        self.order[self.category_index]
    }

    fn current_count(&self) -> usize {
        self.counts[self.category_index]
    }

    /// Step one category left. Item positions are untouched — each
    /// category keeps its own remembered row.
    pub fn navigate_left(&mut self) -> Option<NavSignal> {
        if self.detail_open || self.category_index == 0 {
            return None;
        }
        self.category_index -= 1;
        Some(NavSignal::Navigated)
    }

    /// Step one category right.
    pub fn navigate_right(&mut self) -> Option<NavSignal> {
        if self.detail_open || self.category_index + 1 >= self.order.len() {
            return None;
        }
        self.category_index += 1;
        Some(NavSignal::Navigated)
    }

    /// Move the item cursor up by `count`, clamped at the first item.
    /// Signals only when the position actually changed.
    pub fn navigate_up(&mut self, count: usize) -> Option<NavSignal> {
        if self.detail_open {
            return None;
        }
        let slot = &mut self.remembered[self.order[self.category_index].index()];
        if *slot == 0 {
            return None;
        }
        *slot = slot.saturating_sub(count);
        Some(NavSignal::Navigated)
    }

    /// Move the item cursor down by `count`, clamped at the last item.
    /// Never wraps, never overshoots.
    pub fn navigate_down(&mut self, count: usize) -> Option<NavSignal> {
        if self.detail_open {
            return None;
        }
        let max = self.current_count().saturating_sub(1);
        let slot = &mut self.remembered[self.order[self.category_index].index()];
        if *slot >= max {
            return None;
        }
        *slot = (*slot + count).min(max);
        Some(NavSignal::Navigated)
    }

    /// Jump straight to a category (mouse/tap path), bypassing stepping.
    pub fn go_to_category(&mut self, index: usize) -> Option<NavSignal> {
        if self.detail_open || index >= self.order.len() || index == self.category_index {
            return None;
        }
        self.category_index = index;
        Some(NavSignal::Navigated)
    }

    /// Jump straight to an item. Targeting the already-selected item is a
    /// confirm: it opens the detail panel instead of moving.
    pub fn go_to_item(&mut self, index: usize) -> Option<NavSignal> {
        if self.detail_open || index >= self.current_count() {
            return None;
        }
        let slot = &mut self.remembered[self.order[self.category_index].index()];
        if index == *slot {
            self.detail_open = true;
            Some(NavSignal::Selected)
        } else {
            *slot = index;
            Some(NavSignal::Navigated)
        }
    }

    /// Open the detail panel for the addressed item. No-op when the
    /// category is empty — `detail_open` implies the item exists.
    pub fn select(&mut self) -> Option<NavSignal> {
        if self.detail_open || self.current_count() == 0 {
            return None;
        }
        self.detail_open = true;
        Some(NavSignal::Selected)
    }

    /// Close the detail panel. No-op when it's already closed.
    pub fn back(&mut self) -> Option<NavSignal> {
        if !self.detail_open {
            return None;
        }
        self.detail_open = false;
        Some(NavSignal::Back)
    }

    /// The projection collaborators consume after each committed change.
    pub fn resolved(&self, catalog: &Catalog) -> ResolvedPosition {
        let item_id = catalog
            .get(self.category_index)
            .and_then(|c| c.items.get(self.item_index()))
            .map(|item| item.id.clone());
        ResolvedPosition {
            category_id: self.current_id(),
            item_id,
            detail_open: self.detail_open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{Category, Item};
    use crate::core::deeplink;

    fn item(id: &str) -> Item {
        Item {
            id: id.into(),
            label: id.into(),
            subtitle: None,
            icon: None,
            payload: None,
        }
    }

    fn category(id: CategoryId, label: &'static str, item_count: usize) -> Category {
        Category {
            id,
            label,
            icon: "folder",
            items: (0..item_count).map(|i| item(&format!("{label}-{i}"))).collect(),
        }
    }

    /// Two categories, as in the spec scenario: Profile(3), Experience(2).
    fn two_category_catalog() -> Catalog {
        Catalog::new(vec![
            category(CategoryId::Profile, "profile", 3),
            category(CategoryId::Experience, "experience", 2),
        ])
    }

    #[test]
    fn scenario_step_remember_and_clamp() {
        let catalog = two_category_catalog();
        let mut nav = Navigator::new(&catalog);
        assert_eq!((nav.category_index(), nav.item_index()), (0, 0));

        assert_eq!(nav.navigate_down(1), Some(NavSignal::Navigated));
        assert_eq!((nav.category_index(), nav.item_index()), (0, 1));

        assert_eq!(nav.navigate_right(), Some(NavSignal::Navigated));
        // Experience never visited: its remembered index defaults to 0.
        assert_eq!((nav.category_index(), nav.item_index()), (1, 0));

        assert_eq!(nav.navigate_down(1), Some(NavSignal::Navigated));
        assert_eq!((nav.category_index(), nav.item_index()), (1, 1));

        // Already at the last item: stays put, reports no movement.
        assert_eq!(nav.navigate_down(1), None);
        assert_eq!((nav.category_index(), nav.item_index()), (1, 1));
    }

    #[test]
    fn per_category_memory_survives_switching() {
        let catalog = two_category_catalog();
        let mut nav = Navigator::new(&catalog);
        nav.navigate_down(2);
        assert_eq!(nav.item_index(), 2);
        nav.navigate_right();
        assert_eq!(nav.item_index(), 0);
        nav.navigate_left();
        assert_eq!(nav.item_index(), 2); // not reset to 0
    }

    #[test]
    fn down_clamps_and_never_overshoots() {
        let catalog = two_category_catalog();
        let mut nav = Navigator::new(&catalog);
        assert_eq!(nav.navigate_down(99), Some(NavSignal::Navigated));
        assert_eq!(nav.item_index(), 2); // exactly the last item
        assert_eq!(nav.navigate_down(99), None);
        assert_eq!(nav.item_index(), 2);
    }

    #[test]
    fn up_clamps_at_first_item() {
        let catalog = two_category_catalog();
        let mut nav = Navigator::new(&catalog);
        nav.navigate_down(2);
        assert_eq!(nav.navigate_up(99), Some(NavSignal::Navigated));
        assert_eq!(nav.item_index(), 0);
        assert_eq!(nav.navigate_up(1), None);
    }

    #[test]
    fn left_right_stop_at_the_rails() {
        let catalog = two_category_catalog();
        let mut nav = Navigator::new(&catalog);
        assert_eq!(nav.navigate_left(), None);
        assert_eq!(nav.navigate_right(), Some(NavSignal::Navigated));
        assert_eq!(nav.navigate_right(), None);
        assert_eq!(nav.category_index(), 1);
    }

    #[test]
    fn detail_open_freezes_movement() {
        let catalog = two_category_catalog();
        let mut nav = Navigator::new(&catalog);
        nav.navigate_down(1);
        assert_eq!(nav.select(), Some(NavSignal::Selected));
        assert!(nav.detail_open());

        assert_eq!(nav.navigate_left(), None);
        assert_eq!(nav.navigate_right(), None);
        assert_eq!(nav.navigate_up(1), None);
        assert_eq!(nav.navigate_down(1), None);
        assert_eq!(nav.go_to_category(1), None);
        assert_eq!(nav.go_to_item(0), None);
        assert_eq!(nav.select(), None);
        assert_eq!((nav.category_index(), nav.item_index()), (0, 1));

        assert_eq!(nav.back(), Some(NavSignal::Back));
        assert_eq!(nav.navigate_left(), None); // still at category 0
        assert_eq!(nav.navigate_right(), Some(NavSignal::Navigated));
    }

    #[test]
    fn back_is_idempotent_when_closed() {
        let catalog = two_category_catalog();
        let mut nav = Navigator::new(&catalog);
        assert_eq!(nav.back(), None);
        assert_eq!(nav.back(), None);
        assert_eq!((nav.category_index(), nav.item_index(), nav.detail_open()), (0, 0, false));
    }

    #[test]
    fn go_to_item_navigates_or_confirms() {
        let catalog = two_category_catalog();
        let mut nav = Navigator::new(&catalog);

        // A different index never opens the panel.
        assert_eq!(nav.go_to_item(2), Some(NavSignal::Navigated));
        assert!(!nav.detail_open());

        // The already-selected index does.
        assert_eq!(nav.go_to_item(2), Some(NavSignal::Selected));
        assert!(nav.detail_open());

        nav.back();
        assert_eq!(nav.go_to_item(3), None); // out of range
    }

    #[test]
    fn go_to_category_jumps_directly() {
        let catalog = two_category_catalog();
        let mut nav = Navigator::new(&catalog);
        assert_eq!(nav.go_to_category(1), Some(NavSignal::Navigated));
        assert_eq!(nav.go_to_category(1), None); // already there
        assert_eq!(nav.go_to_category(7), None); // out of range
    }

    #[test]
    fn select_on_empty_category_is_a_noop() {
        let catalog = Catalog::new(vec![
            category(CategoryId::Profile, "profile", 0),
            category(CategoryId::Experience, "experience", 2),
        ]);
        let mut nav = Navigator::new(&catalog);
        assert_eq!(nav.select(), None);
        assert!(!nav.detail_open());
        assert_eq!(nav.resolved(&catalog).item_id, None);
    }

    #[test]
    fn seeded_from_item_link_opens_detail() {
        let catalog = two_category_catalog();
        let link = deeplink::parse("#/experience/experience-1").unwrap();
        let nav = Navigator::seeded(&catalog, Some(&link));
        assert_eq!(nav.category_index(), 1);
        assert_eq!(nav.item_index(), 1);
        assert!(nav.detail_open());
    }

    #[test]
    fn seeded_from_category_link_keeps_detail_closed() {
        let catalog = two_category_catalog();
        let link = deeplink::parse("#/experience").unwrap();
        let nav = Navigator::seeded(&catalog, Some(&link));
        assert_eq!(nav.category_index(), 1);
        assert!(!nav.detail_open());
    }

    #[test]
    fn seeded_with_unknown_item_falls_back_to_category() {
        let catalog = two_category_catalog();
        let link = deeplink::parse("#/experience/no-such-item").unwrap();
        let nav = Navigator::seeded(&catalog, Some(&link));
        assert_eq!(nav.category_index(), 1);
        assert_eq!(nav.item_index(), 0);
        assert!(!nav.detail_open());
    }

    #[test]
    fn no_link_starts_at_origin() {
        let catalog = two_category_catalog();
        let nav = Navigator::seeded(&catalog, None);
        assert_eq!((nav.category_index(), nav.item_index(), nav.detail_open()), (0, 0, false));
    }

    #[test]
    fn resolved_projects_ids() {
        let catalog = two_category_catalog();
        let mut nav = Navigator::new(&catalog);
        nav.navigate_down(1);
        let pos = nav.resolved(&catalog);
        assert_eq!(pos.category_id, CategoryId::Profile);
        assert_eq!(pos.item_id.as_deref(), Some("profile-1"));
        assert!(!pos.detail_open);
    }

    #[test]
    fn sync_clamps_remembered_indices() {
        let catalog = two_category_catalog();
        let mut nav = Navigator::new(&catalog);
        nav.navigate_down(2);
        assert_eq!(nav.item_index(), 2);

        // Rebuild with a shorter profile list; the cursor clamps in.
        let rebuilt = Catalog::new(vec![
            category(CategoryId::Profile, "profile", 2),
            category(CategoryId::Experience, "experience", 2),
        ]);
        nav.sync(&rebuilt);
        assert_eq!(nav.item_index(), 1);
    }
}
