//! Frame composition: backdrop first, then either the boot overlay or the
//! menu rails, then the detail panel on top of everything.

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::components::{CategoryBar, DetailPanel, ItemList};
use crate::tui::{App, TuiState};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, now: Instant) {
    let area = frame.area();
    let ctx = tui.backdrop(app);
    tui.background.render(frame.buffer_mut(), area, &ctx);

    if !tui.boot.is_complete() {
        tui.boot
            .render(frame, area, now, &app.profile_name, &app.profile_title);
        return;
    }

    let selected_category = app.navigator.category_index();
    if let Some(category) = app.catalog.get(selected_category) {
        let mut bar = CategoryBar {
            categories: app.catalog.categories(),
            selected: selected_category,
            theme: app.settings.theme,
        };
        bar.render(frame, area);

        let mut list = ItemList {
            items: &category.items,
            selected: app.navigator.item_index(),
            category_icon: category.icon,
            theme: app.settings.theme,
        };
        list.render(frame, area);
    }

    draw_hint_bar(frame, area);

    if let Some(state) = tui.detail.as_mut() {
        let item = app
            .catalog
            .get(selected_category)
            .and_then(|c| c.items.get(app.navigator.item_index()));
        if let Some(item) = item {
            DetailPanel::new(state, item, &app.settings).render(frame, area);
        }
    }
}

fn draw_hint_bar(frame: &mut Frame, area: Rect) {
    if area.height < 4 {
        return;
    }
    let hint = "← → Categories   ↑ ↓ Items   Enter Select   Esc Back   q Quit";
    let [bottom] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::End)
        .areas(area);
    frame.render_widget(
        Paragraph::new(hint)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)),
        bottom,
    );
}
