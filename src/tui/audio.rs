//! # Audio Cues
//!
//! Subscriber for [`NavSignal`]s. Each signal class maps to a named cue;
//! when sound is enabled the cue rings the terminal bell and is logged,
//! when muted nothing happens. The decision (which cue, if any) is
//! separated from the emission so it stays testable.

use std::io::{Write, stdout};

use log::debug;

use crate::core::navigation::NavSignal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Navigate,
    Select,
    Back,
}

impl Cue {
    pub fn from_signal(signal: NavSignal) -> Self {
        match signal {
            NavSignal::Navigated => Cue::Navigate,
            NavSignal::Selected => Cue::Select,
            NavSignal::Back => Cue::Back,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Cue::Navigate => "navigate",
            Cue::Select => "select",
            Cue::Back => "back",
        }
    }
}

pub struct CuePlayer {
    enabled: bool,
}

impl CuePlayer {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Play the cue for a committed transition. Returns the cue that was
    /// emitted, `None` when muted.
    pub fn play(&self, signal: NavSignal) -> Option<Cue> {
        if !self.enabled {
            return None;
        }
        let cue = Cue::from_signal(signal);
        debug!("cue: {}", cue.name());
        ring_bell();
        Some(cue)
    }
}

/// BEL is the one sound a terminal is guaranteed to have.
fn ring_bell() {
    let mut out = stdout();
    let _ = out.write_all(b"\x07");
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signals_map_to_distinct_cues() {
        assert_eq!(Cue::from_signal(NavSignal::Navigated), Cue::Navigate);
        assert_eq!(Cue::from_signal(NavSignal::Selected), Cue::Select);
        assert_eq!(Cue::from_signal(NavSignal::Back), Cue::Back);
    }

    #[test]
    fn muted_player_emits_nothing() {
        let player = CuePlayer::new(false);
        assert_eq!(player.play(NavSignal::Selected), None);
    }

    #[test]
    fn enabled_player_reports_the_cue() {
        let player = CuePlayer::new(true);
        assert_eq!(player.play(NavSignal::Back), Some(Cue::Back));
    }

    #[test]
    fn toggling_takes_effect() {
        let mut player = CuePlayer::new(true);
        player.set_enabled(false);
        assert_eq!(player.play(NavSignal::Navigated), None);
        player.set_enabled(true);
        assert_eq!(player.play(NavSignal::Navigated), Some(Cue::Navigate));
    }
}
