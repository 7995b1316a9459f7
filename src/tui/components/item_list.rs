//! # Item List
//!
//! The vertical rail for the selected category. The selected item sits in
//! a fixed slot just below the category bar; items before it stack above
//! the bar, items after it run down the screen. Label and subtitle render
//! beside the icon, with the selected entry brightened and enlarged in
//! the only way a terminal can: bold.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

use crate::core::catalog::Item;
use crate::core::settings::ThemeColor;
use crate::tui::component::Component;
use crate::tui::components::category_bar::{bar_row, intersection_col};
use crate::tui::{icons, theme};

/// Rows per item slot (icon/label row, subtitle row, blank).
pub const ITEM_SPACING: u16 = 3;
/// Rows between the category bar and the selected item slot.
pub const BELOW_BAR_GAP: u16 = 3;
/// Columns between the icon and the label.
const TEXT_OFFSET: u16 = 3;

/// Row of the slot for `index` given the selected index, or `None` when it
/// falls outside the area. Items at or after the selection render below
/// the bar; earlier items stack upward above it.
fn item_row(area: Rect, index: usize, selected: usize) -> Option<u16> {
    let bar = i32::from(bar_row(area));
    let offset = index as i32 - selected as i32;
    let spacing = i32::from(ITEM_SPACING);
    let row = if offset >= 0 {
        bar + i32::from(BELOW_BAR_GAP) + offset * spacing
    } else {
        // One slot above the bar for offset −1, stacking upward.
        bar - 2 + (offset + 1) * spacing
    };
    if row >= i32::from(area.y) && row + 1 < i32::from(area.bottom()) {
        Some(row as u16)
    } else {
        None
    }
}

pub struct ItemList<'a> {
    pub items: &'a [Item],
    pub selected: usize,
    /// Fallback icon for items without one of their own.
    pub category_icon: &'static str,
    pub theme: ThemeColor,
}

impl Component for ItemList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let icon_col = intersection_col(area);
        let text_col = icon_col + TEXT_OFFSET;
        let max_text = area.right().saturating_sub(text_col) as usize;

        for (i, item) in self.items.iter().enumerate() {
            let Some(row) = item_row(area, i, self.selected) else {
                continue;
            };
            let is_selected = i == self.selected;

            let icon_key = item.icon.as_deref().unwrap_or(self.category_icon);
            let icon_style = if is_selected {
                Style::default().fg(theme::accent(self.theme))
            } else {
                Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)
            };
            frame.render_widget(
                Span::styled(icons::glyph(icon_key), icon_style),
                Rect::new(icon_col, row, 1, 1),
            );

            let label = truncate(&item.label, max_text);
            let label_style = if is_selected {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            frame.render_widget(
                Span::styled(label.clone(), label_style),
                Rect::new(text_col, row, label.width() as u16, 1),
            );

            if let Some(subtitle) = &item.subtitle {
                let subtitle = truncate(subtitle, max_text);
                let subtitle_style = if is_selected {
                    Style::default().fg(Color::Gray)
                } else {
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
                };
                frame.render_widget(
                    Span::styled(subtitle.clone(), subtitle_style),
                    Rect::new(text_col, row + 1, subtitle.width() as u16, 1),
                );
            }
        }
    }
}

/// Which item slot a click at `(column, row)` lands on, if any.
pub fn hit_test(
    area: Rect,
    column: u16,
    row: u16,
    item_count: usize,
    selected: usize,
) -> Option<usize> {
    // Anywhere horizontally from the icon column rightward counts as the
    // rail; clicks left of it belong to nothing.
    if column < intersection_col(area) {
        return None;
    }
    for index in 0..item_count {
        if let Some(slot_row) = item_row(area, index, selected)
            && (slot_row..slot_row + 2).contains(&row)
        {
            return Some(index);
        }
    }
    None
}

/// Truncate a string to fit within `max_width` display columns, adding
/// "..." if needed.
fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.to_string().width();
        if used + w > max_width - 3 {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn items(n: usize) -> Vec<Item> {
        (0..n)
            .map(|i| Item {
                id: format!("item-{i}"),
                label: format!("Item {i}"),
                subtitle: Some(format!("Subtitle {i}")),
                icon: None,
                payload: None,
            })
            .collect()
    }

    #[test]
    fn renders_labels_and_subtitles() {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let list_items = items(3);
        let mut list = ItemList {
            items: &list_items,
            selected: 0,
            category_icon: "folder",
            theme: ThemeColor::Blue,
        };
        terminal.draw(|f| list.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Item 0"));
        assert!(text.contains("Subtitle 0"));
        assert!(text.contains("Item 1"));
    }

    #[test]
    fn hit_test_round_trips_item_rows() {
        let area = Rect::new(0, 0, 80, 30);
        let col = intersection_col(area) + 2;
        for selected in [0, 1, 2] {
            for index in 0..3 {
                if let Some(row) = item_row(area, index, selected) {
                    assert_eq!(
                        hit_test(area, col, row, 3, selected),
                        Some(index),
                        "index {index} selected {selected}"
                    );
                }
            }
        }
    }

    #[test]
    fn hit_test_ignores_clicks_left_of_the_rail() {
        let area = Rect::new(0, 0, 80, 30);
        let row = item_row(area, 0, 0).unwrap();
        assert_eq!(hit_test(area, 0, row, 3, 0), None);
    }

    #[test]
    fn hit_test_ignores_blank_rows() {
        let area = Rect::new(0, 0, 80, 30);
        let col = intersection_col(area) + 2;
        let row = item_row(area, 0, 0).unwrap();
        // The third row of each slot is the gap between entries.
        assert_eq!(hit_test(area, col, row + 2, 1, 0), None);
    }

    #[test]
    fn truncate_respects_display_width() {
        assert_eq!(truncate("short", 20), "short");
        assert_eq!(truncate("a very long label indeed", 10), "a very ...");
        assert_eq!(truncate("abcdef", 2), "..");
    }
}
