//! # Catalog Structure
//!
//! The navigable shape of the portfolio: a fixed, ordered set of categories,
//! each holding an ordered list of items. The structure is immutable for a
//! session (the settings category is rebuilt with fresh subtitles when a
//! setting changes, but its shape never varies).
//!
//! Item payloads are opaque to everything in `core`: the navigation layer
//! moves a cursor over ids and counts, and only the detail renderer in the
//! TUI ever looks inside a [`Payload`].

use crate::content::types::{
    ContactLinks, Education, Experience, OpenSourceProject, Profile, Project, Skill,
};
use crate::content::writings::WritingPost;

/// The closed set of category ids. Order here is presentation order in the
/// horizontal bar, and `index()` keys the per-category remembered-cursor
/// array in the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryId {
    Profile,
    Experience,
    Projects,
    OpenSource,
    Writing,
    Settings,
}

impl CategoryId {
    pub const COUNT: usize = 6;

    pub const ALL: [CategoryId; Self::COUNT] = [
        CategoryId::Profile,
        CategoryId::Experience,
        CategoryId::Projects,
        CategoryId::OpenSource,
        CategoryId::Writing,
        CategoryId::Settings,
    ];

    /// Stable string form, used by the deep-link fragment grammar.
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryId::Profile => "profile",
            CategoryId::Experience => "experience",
            CategoryId::Projects => "projects",
            CategoryId::OpenSource => "opensource",
            CategoryId::Writing => "writing",
            CategoryId::Settings => "settings",
        }
    }

    /// Inverse of [`as_str`](Self::as_str). Anything outside the closed set
    /// is `None` — unknown ids are ignored, never errors.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.as_str() == s)
    }

    /// Position in [`ALL`](Self::ALL), for fixed-size per-category arrays.
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|id| *id == self)
            .expect("CategoryId::ALL covers every variant")
    }
}

/// Which settings entry an item stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Theme,
    Sound,
    Credits,
}

/// Item payload, one variant per content class. `core` never inspects these.
#[derive(Debug, Clone)]
pub enum Payload {
    Profile(Profile),
    Philosophy(Vec<String>),
    Education(Vec<Education>),
    Contact(ContactLinks),
    Skill(Skill),
    Experience(Experience),
    Project(Project),
    OpenSource(OpenSourceProject),
    Writing(WritingPost),
    Setting(SettingKind),
}

/// A leaf entry in the vertical list.
#[derive(Debug, Clone)]
pub struct Item {
    /// Unique within its category; appears in deep-link fragments.
    pub id: String,
    pub label: String,
    pub subtitle: Option<String>,
    /// Icon key resolved at render time; `None` falls back to the category icon.
    pub icon: Option<String>,
    pub payload: Option<Payload>,
}

/// A top-level navigable group in the horizontal bar.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub label: &'static str,
    pub icon: &'static str,
    pub items: Vec<Item>,
}

/// Ordered categories for one session.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    /// Position of a category id in this catalog's order.
    pub fn position_of(&self, id: CategoryId) -> Option<usize> {
        self.categories.iter().position(|c| c.id == id)
    }

    /// Position of an item id within the category at `category_index`.
    pub fn item_position(&self, category_index: usize, item_id: &str) -> Option<usize> {
        self.categories
            .get(category_index)?
            .items
            .iter()
            .position(|item| item.id == item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_id_round_trips_through_str() {
        for id in CategoryId::ALL {
            assert_eq!(CategoryId::parse(id.as_str()), Some(id));
        }
    }

    #[test]
    fn unknown_category_id_is_rejected() {
        assert_eq!(CategoryId::parse("not-a-real-category"), None);
        assert_eq!(CategoryId::parse(""), None);
        assert_eq!(CategoryId::parse("Profile"), None); // case-sensitive
    }

    #[test]
    fn index_matches_all_order() {
        for (i, id) in CategoryId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn item_position_finds_by_id() {
        let catalog = Catalog::new(vec![Category {
            id: CategoryId::Projects,
            label: "Projects",
            icon: "folder",
            items: vec![
                Item {
                    id: "proj-1".into(),
                    label: "One".into(),
                    subtitle: None,
                    icon: None,
                    payload: None,
                },
                Item {
                    id: "proj-2".into(),
                    label: "Two".into(),
                    subtitle: None,
                    icon: None,
                    payload: None,
                },
            ],
        }]);
        assert_eq!(catalog.item_position(0, "proj-2"), Some(1));
        assert_eq!(catalog.item_position(0, "proj-9"), None);
        assert_eq!(catalog.item_position(3, "proj-1"), None);
    }
}
