//! # Detail Panel
//!
//! The modal overlay for the selected item: the right half of the screen
//! (full width on narrow terminals), cleared over the menu, scrollable
//! when the content outgrows it.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `DetailPanelState` lives in `TuiState` while the panel is open
//! - `DetailPanel` is created each frame with borrowed state
//!
//! While the panel is open the navigator is frozen (its own invariant);
//! every event routes here instead. Arrow keys scroll content, or drive
//! the swatch grid when the theme setting is showing.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::catalog::{Item, Payload, SettingKind};
use crate::core::settings::{Settings, ThemeColor};
use crate::tui::component::EventHandler;
use crate::tui::components::content_view;
use crate::tui::components::theme_selector::{ThemeSelector, ThemeSelectorState};
use crate::tui::event::TuiEvent;

/// Terminals narrower than this get a full-width panel.
const SPLIT_MIN_WIDTH: u16 = 80;

/// What the open panel is showing, which decides event routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelKind {
    Content,
    Theme,
    Sound,
}

/// Events emitted by the panel for the main loop to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailEvent {
    Close,
    ApplyTheme(ThemeColor),
    ToggleSound,
}

/// Persistent state for the open panel.
pub struct DetailPanelState {
    kind: PanelKind,
    pub scroll: ScrollViewState,
    pub theme_grid: Option<ThemeSelectorState>,
}

impl DetailPanelState {
    pub fn open_for(item: &Item, current_theme: ThemeColor) -> Self {
        let kind = match &item.payload {
            Some(Payload::Setting(SettingKind::Theme)) => PanelKind::Theme,
            Some(Payload::Setting(SettingKind::Sound)) => PanelKind::Sound,
            _ => PanelKind::Content,
        };
        let theme_grid = match kind {
            PanelKind::Theme => Some(ThemeSelectorState::new(current_theme)),
            _ => None,
        };
        Self {
            kind,
            scroll: ScrollViewState::default(),
            theme_grid,
        }
    }
}

impl EventHandler for DetailPanelState {
    type Event = DetailEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DetailEvent> {
        // Closing always works the same way, whatever is showing.
        if matches!(event, TuiEvent::Escape | TuiEvent::RightClick) {
            return Some(DetailEvent::Close);
        }

        // The swatch grid captures arrows and confirm.
        if let Some(grid) = self.theme_grid.as_mut() {
            return grid.handle_event(event).map(DetailEvent::ApplyTheme);
        }

        if self.kind == PanelKind::Sound && matches!(event, TuiEvent::Confirm) {
            return Some(DetailEvent::ToggleSound);
        }

        match event {
            TuiEvent::NavUp | TuiEvent::ScrollUp => self.scroll.scroll_up(),
            TuiEvent::NavDown | TuiEvent::ScrollDown => self.scroll.scroll_down(),
            TuiEvent::PageUp => self.scroll.scroll_page_up(),
            TuiEvent::PageDown => self.scroll.scroll_page_down(),
            _ => {}
        }
        None
    }
}

/// Transient render wrapper.
pub struct DetailPanel<'a> {
    state: &'a mut DetailPanelState,
    item: &'a Item,
    settings: &'a Settings,
}

impl<'a> DetailPanel<'a> {
    pub fn new(state: &'a mut DetailPanelState, item: &'a Item, settings: &'a Settings) -> Self {
        Self {
            state,
            item,
            settings,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = panel_rect(area);
        frame.render_widget(Clear, overlay);

        let help = match self.state.kind {
            PanelKind::Theme => " Arrows Move  Enter Apply  Esc Close ",
            PanelKind::Sound => " Enter Toggle  Esc Close ",
            PanelKind::Content => " ↑ ↓ Scroll  Esc Close ",
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .style(Style::default().bg(Color::Rgb(10, 10, 16)))
            .title(format!(" {} ", self.item.label))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help).centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        if let Some(grid) = &self.state.theme_grid {
            ThemeSelector::new(grid, self.settings.theme).render(frame, inner);
            return;
        }

        let text = content_view::render(self.item, self.settings);
        let content_width = inner.width.saturating_sub(1); // scrollbar column
        let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
        let height = (paragraph.line_count(content_width) as u16).max(1);

        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, height));
        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll);
    }
}

/// Right half of the screen, or everything when narrow.
fn panel_rect(area: Rect) -> Rect {
    if area.width < SPLIT_MIN_WIDTH {
        area
    } else {
        let width = area.width / 2;
        Rect::new(area.right() - width, area.y, width, area.height)
    }
}
