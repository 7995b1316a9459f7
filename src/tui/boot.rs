//! # Boot Sequence
//!
//! The console-style splash shown before the menu: black → warning →
//! logo → loading → profile select. The timed phases live in one `const`
//! schedule table and a single owned struct walks it on main-loop ticks —
//! no chained timers, so dropping the struct cancels everything pending
//! at once.
//!
//! Any key during the timed phases jumps ahead to the profile screen;
//! Enter (or a click) there completes the sequence. `--skip-boot` starts
//! in the completed state.

use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootPhase {
    Black,
    Warning,
    Logo,
    Loading,
    /// Untimed: waits for the user to confirm.
    Profile,
}

/// Timed phases, in order. `Profile` follows and has no duration.
const SCHEDULE: [(BootPhase, Duration); 4] = [
    (BootPhase::Black, Duration::from_millis(500)),
    (BootPhase::Warning, Duration::from_millis(3000)),
    (BootPhase::Logo, Duration::from_millis(3000)),
    (BootPhase::Loading, Duration::from_millis(2000)),
];

pub struct BootSequence {
    /// Index into [`SCHEDULE`]; `SCHEDULE.len()` = profile, beyond = done.
    stage: usize,
    phase_started: Instant,
    complete: bool,
}

impl BootSequence {
    pub fn new(now: Instant) -> Self {
        Self {
            stage: 0,
            phase_started: now,
            complete: false,
        }
    }

    /// Already-finished sequence, for `--skip-boot`.
    pub fn completed(now: Instant) -> Self {
        Self {
            stage: SCHEDULE.len(),
            phase_started: now,
            complete: true,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn phase(&self) -> Option<BootPhase> {
        if self.complete {
            None
        } else if self.stage < SCHEDULE.len() {
            Some(SCHEDULE[self.stage].0)
        } else {
            Some(BootPhase::Profile)
        }
    }

    /// Advance through any timed phases whose duration has elapsed.
    pub fn tick(&mut self, now: Instant) {
        while self.stage < SCHEDULE.len() {
            let (_, duration) = SCHEDULE[self.stage];
            let elapsed = now.duration_since(self.phase_started);
            if elapsed < duration {
                break;
            }
            self.stage += 1;
            self.phase_started = now;
        }
    }

    /// User pressed a key or clicked. Timed phases skip ahead to the
    /// profile screen; the profile screen completes the boot.
    pub fn confirm(&mut self, now: Instant) {
        if self.complete {
            return;
        }
        if self.stage < SCHEDULE.len() {
            self.stage = SCHEDULE.len();
            self.phase_started = now;
        } else {
            self.complete = true;
        }
    }

    /// Seconds into the current phase, for the loading animation.
    fn phase_elapsed(&self, now: Instant) -> f32 {
        now.duration_since(self.phase_started).as_secs_f32()
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        now: Instant,
        profile_name: &str,
        profile_title: &str,
    ) {
        match self.phase() {
            None | Some(BootPhase::Black) => {}
            Some(BootPhase::Warning) => self.render_warning(frame, area),
            Some(BootPhase::Logo) => self.render_logo(frame, area, profile_name),
            Some(BootPhase::Loading) => self.render_loading(frame, area, now),
            Some(BootPhase::Profile) => self.render_profile(frame, area, profile_name, profile_title),
        }
    }

    fn render_warning(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(
                "This portfolio is an homage to the PlayStation 3's XrossMediaBar interface.",
            ),
            Line::default(),
            Line::from(Span::styled(
                "Navigate with arrow keys or mouse. Enter selects, Esc goes back.",
                Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
            )),
        ];
        let [center] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::White)),
            center,
        );
    }

    fn render_logo(&self, frame: &mut Frame, area: Rect, profile_name: &str) {
        let shapes = Line::from(Span::styled(
            "△  ○  ✕  □",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
        let lines = vec![
            shapes,
            Line::default(),
            Line::from(Span::styled(
                profile_name.to_uppercase(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Portfolio Experience",
                Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
            )),
        ];
        let [center] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), center);
    }

    fn render_loading(&self, frame: &mut Frame, area: Rect, now: Instant) {
        // Five bars pulsing in a travelling wave.
        let t = self.phase_elapsed(now);
        let spans: Vec<Span> = (0..5)
            .map(|i| {
                let phase = t * 6.0 - i as f32 * 0.8;
                let lit = phase.sin() > 0.0;
                Span::styled(
                    "▇ ",
                    if lit {
                        Style::default().fg(Color::White)
                    } else {
                        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
                    },
                )
            })
            .collect();
        let lines = vec![
            Line::from(spans),
            Line::default(),
            Line::from(Span::styled(
                "Loading...",
                Style::default().fg(Color::Gray),
            )),
        ];
        let [center] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), center);
    }

    fn render_profile(
        &self,
        frame: &mut Frame,
        area: Rect,
        profile_name: &str,
        profile_title: &str,
    ) {
        let [center_v] = Layout::vertical([Constraint::Length(9)])
            .flex(Flex::Center)
            .areas(area);
        let [card] = Layout::horizontal([Constraint::Length(36)])
            .flex(Flex::Center)
            .areas(center_v);

        let [title_area, card_area, hint_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(5),
            Constraint::Length(2),
        ])
        .areas(card);

        frame.render_widget(
            Paragraph::new("Select User")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            title_area,
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .padding(Padding::horizontal(1));
        let card_lines = vec![
            Line::from(Span::styled(
                profile_name,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                profile_title,
                Style::default().fg(Color::Gray),
            )),
        ];
        frame.render_widget(
            Paragraph::new(card_lines)
                .alignment(Alignment::Center)
                .block(block),
            card_area,
        );

        frame.render_widget(
            Paragraph::new("Press Enter to continue")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)),
            hint_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_advance_on_schedule() {
        let start = Instant::now();
        let mut boot = BootSequence::new(start);
        assert_eq!(boot.phase(), Some(BootPhase::Black));

        boot.tick(start + Duration::from_millis(600));
        assert_eq!(boot.phase(), Some(BootPhase::Warning));

        boot.tick(start + Duration::from_millis(600) + Duration::from_millis(3100));
        assert_eq!(boot.phase(), Some(BootPhase::Logo));
    }

    #[test]
    fn a_long_stall_walks_through_every_phase() {
        let start = Instant::now();
        let mut boot = BootSequence::new(start);
        boot.tick(start + Duration::from_secs(60));
        // Catches up one phase per observed elapsed duration; repeated
        // ticks land on the profile screen, which never times out.
        for _ in 0..SCHEDULE.len() {
            boot.tick(start + Duration::from_secs(600));
        }
        assert_eq!(boot.phase(), Some(BootPhase::Profile));
        assert!(!boot.is_complete());
    }

    #[test]
    fn confirm_skips_timed_phases_to_profile() {
        let start = Instant::now();
        let mut boot = BootSequence::new(start);
        boot.confirm(start);
        assert_eq!(boot.phase(), Some(BootPhase::Profile));
        assert!(!boot.is_complete());
    }

    #[test]
    fn confirm_on_profile_completes() {
        let start = Instant::now();
        let mut boot = BootSequence::new(start);
        boot.confirm(start);
        boot.confirm(start);
        assert!(boot.is_complete());
        assert_eq!(boot.phase(), None);
    }

    #[test]
    fn skip_boot_starts_complete() {
        let boot = BootSequence::completed(Instant::now());
        assert!(boot.is_complete());
        assert_eq!(boot.phase(), None);
    }
}
