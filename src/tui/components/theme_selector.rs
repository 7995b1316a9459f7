//! # Theme Selector
//!
//! The 3×2 swatch grid shown inside the detail panel for the theme
//! setting. Arrow keys move the cursor (wrapping, like the original
//! grid), Enter applies the highlighted theme. The grid owns only its
//! cursor; the applied theme lives in `Settings`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::settings::ThemeColor;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;
use crate::tui::theme;

const COLS: usize = 3;
const ROWS: usize = 2;
const SWATCH_WIDTH: u16 = 14;
const SWATCH_HEIGHT: u16 = 4;

pub struct ThemeSelectorState {
    pub cursor: usize,
}

impl ThemeSelectorState {
    pub fn new(current: ThemeColor) -> Self {
        let cursor = ThemeColor::ALL
            .iter()
            .position(|t| *t == current)
            .unwrap_or(0);
        Self { cursor }
    }

    pub fn highlighted(&self) -> ThemeColor {
        ThemeColor::ALL[self.cursor]
    }
}

impl EventHandler for ThemeSelectorState {
    type Event = ThemeColor;

    /// Arrows move with wraparound; Enter emits the highlighted theme.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<ThemeColor> {
        let len = ThemeColor::ALL.len();
        match event {
            TuiEvent::NavLeft => {
                self.cursor = if self.cursor > 0 { self.cursor - 1 } else { len - 1 };
                None
            }
            TuiEvent::NavRight => {
                self.cursor = if self.cursor + 1 < len { self.cursor + 1 } else { 0 };
                None
            }
            TuiEvent::NavUp => {
                self.cursor = if self.cursor >= COLS {
                    self.cursor - COLS
                } else {
                    self.cursor + COLS * (ROWS - 1)
                };
                None
            }
            TuiEvent::NavDown => {
                self.cursor = if self.cursor < COLS {
                    self.cursor + COLS
                } else {
                    self.cursor - COLS * (ROWS - 1)
                };
                None
            }
            TuiEvent::Confirm => Some(self.highlighted()),
            _ => None,
        }
    }
}

/// Transient render wrapper, created each frame with borrowed state.
pub struct ThemeSelector<'a> {
    state: &'a ThemeSelectorState,
    current: ThemeColor,
}

impl<'a> ThemeSelector<'a> {
    pub fn new(state: &'a ThemeSelectorState, current: ThemeColor) -> Self {
        Self { state, current }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let intro = Paragraph::new(
            "Choose a color theme for the background.\nArrows to move, Enter to apply.",
        )
        .style(Style::default().fg(Color::Gray));
        frame.render_widget(intro, Rect::new(area.x, area.y, area.width, 2));

        let grid_top = area.y + 3;
        for (i, swatch_theme) in ThemeColor::ALL.iter().enumerate() {
            let col = (i % COLS) as u16;
            let row = (i / COLS) as u16;
            let x = area.x + col * (SWATCH_WIDTH + 1);
            let y = grid_top + row * (SWATCH_HEIGHT + 1);
            if x + SWATCH_WIDTH > area.right() || y + SWATCH_HEIGHT > area.bottom() {
                continue;
            }
            self.render_swatch(frame, Rect::new(x, y, SWATCH_WIDTH, SWATCH_HEIGHT), *swatch_theme, i);
        }
    }

    fn render_swatch(&self, frame: &mut Frame, area: Rect, swatch_theme: ThemeColor, index: usize) {
        let is_cursor = index == self.state.cursor;
        let is_current = swatch_theme == self.current;

        let border_style = if is_cursor {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let marker = if is_current { " ✓" } else { "" };
        let title = format!("{}{}", swatch_theme.label(), marker);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // A band of the theme's ribbon colors as the preview.
        let ribbons = &theme::palette(swatch_theme).ribbons;
        let band: Vec<Span> = ribbons
            .iter()
            .map(|(r, g, b)| Span::styled("██", Style::default().fg(Color::Rgb(*r, *g, *b))))
            .collect();
        frame.render_widget(Paragraph::new(Line::from(band)), inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_starts_on_the_current_theme() {
        let state = ThemeSelectorState::new(ThemeColor::Orange);
        assert_eq!(state.highlighted(), ThemeColor::Orange);
    }

    #[test]
    fn horizontal_movement_wraps() {
        let mut state = ThemeSelectorState::new(ThemeColor::Blue);
        assert_eq!(state.handle_event(&TuiEvent::NavLeft), None);
        assert_eq!(state.highlighted(), ThemeColor::Pink); // wrapped to the end
        state.handle_event(&TuiEvent::NavRight);
        assert_eq!(state.highlighted(), ThemeColor::Blue);
    }

    #[test]
    fn vertical_movement_crosses_rows() {
        let mut state = ThemeSelectorState::new(ThemeColor::Blue);
        state.handle_event(&TuiEvent::NavDown);
        assert_eq!(state.highlighted(), ThemeColor::Purple); // directly below
        state.handle_event(&TuiEvent::NavUp);
        assert_eq!(state.highlighted(), ThemeColor::Blue);
        state.handle_event(&TuiEvent::NavUp);
        assert_eq!(state.highlighted(), ThemeColor::Purple); // wrapped
    }

    #[test]
    fn confirm_emits_the_highlighted_theme() {
        let mut state = ThemeSelectorState::new(ThemeColor::Blue);
        state.handle_event(&TuiEvent::NavRight);
        assert_eq!(state.handle_event(&TuiEvent::Confirm), Some(ThemeColor::Red));
    }
}
