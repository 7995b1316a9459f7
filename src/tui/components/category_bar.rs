//! # Category Bar
//!
//! The horizontal rail. The selected category sits pinned at the
//! intersection column (a quarter of the way across, PS3-style) and the
//! rest of the rail slides under it: category `i` renders at
//! `intersection + (i - selected) × spacing`.
//!
//! Hit testing inverts the same arithmetic so mouse clicks and gesture
//! taps resolve to the category they landed on.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

use crate::core::catalog::Category;
use crate::core::settings::ThemeColor;
use crate::tui::component::Component;
use crate::tui::{icons, theme};

/// Columns from the left edge to the selected slot, as a percentage.
pub const INTERSECTION_X_PERCENT: u16 = 25;
/// Columns between category slots.
pub const CATEGORY_SPACING: u16 = 14;
/// Rows from the top to the icon row, as a percentage.
pub const BAR_Y_PERCENT: u16 = 22;

/// Column of the selected category's icon.
pub fn intersection_col(area: Rect) -> u16 {
    area.x + area.width * INTERSECTION_X_PERCENT / 100
}

/// Row of the category icon rail.
pub fn bar_row(area: Rect) -> u16 {
    area.y + area.height * BAR_Y_PERCENT / 100
}

pub struct CategoryBar<'a> {
    pub categories: &'a [Category],
    pub selected: usize,
    pub theme: ThemeColor,
}

impl Component for CategoryBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let row = bar_row(area);
        let center = intersection_col(area);

        for (i, category) in self.categories.iter().enumerate() {
            let offset = i as i32 - self.selected as i32;
            let col = i32::from(center) + offset * i32::from(CATEGORY_SPACING);
            if col < i32::from(area.x) || col >= i32::from(area.right()) {
                continue;
            }
            let col = col as u16;
            let is_selected = i == self.selected;

            let icon_style = if is_selected {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)
            };
            let icon = icons::glyph(category.icon);
            frame.render_widget(
                Span::styled(icon, icon_style),
                Rect::new(col, row, icon.width() as u16, 1),
            );

            // Only the selected category shows its label, centered below.
            if is_selected {
                let label = category.label;
                let label_col = col
                    .saturating_sub(label.width() as u16 / 2)
                    .max(area.x);
                let width = (label.width() as u16).min(area.right().saturating_sub(label_col));
                frame.render_widget(
                    Span::styled(
                        label,
                        Style::default()
                            .fg(theme::accent(self.theme))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Rect::new(label_col, row + 1, width, 1),
                );
            }
        }
    }
}

/// Which category slot a click at `(column, row)` lands on, if any.
pub fn hit_test(
    area: Rect,
    column: u16,
    row: u16,
    category_count: usize,
    selected: usize,
) -> Option<usize> {
    let bar = bar_row(area);
    // Icon row plus the label row below it.
    if row < bar || row > bar + 1 {
        return None;
    }
    let center = i32::from(intersection_col(area));
    let spacing = i32::from(CATEGORY_SPACING);
    let delta = i32::from(column) - center;
    // Round to the nearest slot.
    let offset = (delta + spacing / 2).div_euclid(spacing);
    let index = selected as i32 + offset;
    if index >= 0 && (index as usize) < category_count {
        Some(index as usize)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::CategoryId;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn categories() -> Vec<Category> {
        [
            (CategoryId::Profile, "Profile", "user"),
            (CategoryId::Experience, "Experience", "briefcase"),
            (CategoryId::Projects, "Projects", "folder"),
        ]
        .into_iter()
        .map(|(id, label, icon)| Category {
            id,
            label,
            icon,
            items: vec![],
        })
        .collect()
    }

    #[test]
    fn renders_selected_label_only() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let cats = categories();
        let mut bar = CategoryBar {
            categories: &cats,
            selected: 1,
            theme: ThemeColor::Blue,
        };
        terminal.draw(|f| bar.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Experience"));
        assert!(!text.contains("Profile"));
        assert!(!text.contains("Projects"));
    }

    #[test]
    fn hit_test_resolves_the_selected_slot() {
        let area = Rect::new(0, 0, 80, 24);
        let row = bar_row(area);
        let col = intersection_col(area);
        assert_eq!(hit_test(area, col, row, 3, 1), Some(1));
    }

    #[test]
    fn hit_test_resolves_neighbors() {
        let area = Rect::new(0, 0, 80, 24);
        let row = bar_row(area);
        let col = intersection_col(area);
        assert_eq!(hit_test(area, col + CATEGORY_SPACING, row, 3, 1), Some(2));
        assert_eq!(hit_test(area, col - CATEGORY_SPACING, row, 3, 1), Some(0));
    }

    #[test]
    fn hit_test_rejects_out_of_rail_positions() {
        let area = Rect::new(0, 0, 80, 24);
        let row = bar_row(area);
        let col = intersection_col(area);
        // Two slots left of a selected first category: off the rail.
        assert_eq!(hit_test(area, col.saturating_sub(2 * CATEGORY_SPACING), row, 3, 0), None);
        // Wrong row entirely.
        assert_eq!(hit_test(area, col, row + 5, 3, 1), None);
    }
}
