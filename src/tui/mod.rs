//! # TUI Adapter
//!
//! The ratatui-specific layer: terminal setup/teardown, the poll-driven
//! main loop, and the translation of terminal events into navigation
//! operations. This is the only place that knows about crossterm, and the
//! only place that calls the side-effect subscribers (audio cues, title
//! sync) — the core stays pure.
//!
//! ## Loop shape
//!
//! The backdrop animates continuously, so every iteration ticks the boot
//! schedule and the background driver, draws one frame, then drains every
//! pending input event before the next draw. Each input event produces at
//! most one committed navigation transition; each committed transition
//! dispatches exactly one cue and one title update.
//!
//! ## Modal routing
//!
//! Events route to exactly one consumer, checked in order: the boot
//! screen while it's running, the detail panel while one is open, the
//! menu otherwise. The navigator's own freeze-while-open invariant backs
//! this up — even a stray call while the panel is open is a no-op.

pub mod audio;
pub mod boot;
pub mod component;
pub mod components;
pub mod event;
pub mod icons;
pub mod link;
pub mod markdown;
pub mod theme;
mod ui;

use std::io;
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use log::info;

use crate::content;
use crate::core::catalog::{Catalog, Payload, SettingKind};
use crate::core::deeplink::DeepLink;
use crate::core::gesture::{GestureIntent, GestureInterpreter, SwipeDirection};
use crate::core::navigation::{NavSignal, Navigator};
use crate::core::settings::{self, Settings, ThemeColor};
use crate::tui::audio::CuePlayer;
use crate::tui::boot::BootSequence;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    BackdropContext, DetailEvent, DetailPanelState, WaveBackground, category_bar, item_list,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Draw cadence; the backdrop is always animating, so the poll timeout is
/// the frame interval (~12fps, plenty for cell-sized motion).
const FRAME_INTERVAL: Duration = Duration::from_millis(80);

/// Items a PageUp/PageDown jump moves.
const PAGE_STEP: usize = 3;

/// Everything `main` resolves before the terminal is touched.
pub struct RunConfig {
    pub settings: Settings,
    pub deep_link: Option<DeepLink>,
    pub skip_boot: bool,
}

/// Application state: the catalog, the cursor over it, and the session
/// settings with their cue player.
pub struct App {
    pub catalog: Catalog,
    pub navigator: Navigator,
    pub settings: Settings,
    pub cues: CuePlayer,
    pub profile_name: String,
    pub profile_title: String,
}

impl App {
    fn new(config: &RunConfig) -> Self {
        let profile = content::load_profile();
        let catalog = content::build_catalog(&config.settings);
        let navigator = Navigator::seeded(&catalog, config.deep_link.as_ref());
        Self {
            catalog,
            navigator,
            settings: config.settings,
            cues: CuePlayer::new(config.settings.sound_enabled),
            profile_name: profile.name,
            profile_title: profile.title,
        }
    }
}

/// Presentation state owned by the loop.
pub struct TuiState {
    pub background: WaveBackground,
    pub boot: BootSequence,
    /// `Some` while the detail panel is open; dropped on close.
    pub detail: Option<DetailPanelState>,
    pub gesture: GestureInterpreter,
    started: Instant,
}

impl TuiState {
    fn new(skip_boot: bool, now: Instant) -> Self {
        Self {
            background: WaveBackground::new(),
            boot: if skip_boot {
                BootSequence::completed(now)
            } else {
                BootSequence::new(now)
            },
            detail: None,
            gesture: GestureInterpreter::default(),
            started: now,
        }
    }

    /// The context the backdrop reads each frame: current theme, and the
    /// ribbon overlay fading in once boot finishes.
    pub fn backdrop(&self, app: &App) -> BackdropContext {
        BackdropContext {
            theme: app.settings.theme,
            ribbons_visible: self.boot.is_complete(),
        }
    }

    fn elapsed_ms(&self, now: Instant) -> u64 {
        now.duration_since(self.started).as_millis() as u64
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(config: RunConfig) -> io::Result<()> {
    let mut app = App::new(&config);
    let mut tui = TuiState::new(config.skip_boot, Instant::now());

    // A deep link to an item arrives with the panel already open.
    if app.navigator.detail_open() {
        open_detail_panel(&app, &mut tui);
    }

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    link::publish(&app.navigator.resolved(&app.catalog));

    let mut should_quit = false;
    loop {
        let now = Instant::now();
        tui.boot.tick(now);
        let ctx = tui.backdrop(&app);
        tui.background.tick(&ctx);

        terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, now))?;

        let first_event = poll_event_timeout(FRAME_INTERVAL);
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                TuiEvent::ForceQuit => {
                    should_quit = true;
                    continue;
                }
                // The next draw reads the new size; backdrop state survives
                // resizes by construction (normalized sparkles, own clock).
                TuiEvent::Resize => continue,
                _ => {}
            }

            // Boot screen consumes everything until it completes.
            if !tui.boot.is_complete() {
                match event {
                    TuiEvent::Quit | TuiEvent::Escape => should_quit = true,
                    TuiEvent::Confirm | TuiEvent::MousePress(..) => tui.boot.confirm(now),
                    // Any other key skips the timed phases.
                    TuiEvent::NavLeft
                    | TuiEvent::NavRight
                    | TuiEvent::NavUp
                    | TuiEvent::NavDown => tui.boot.confirm(now),
                    _ => {}
                }
                continue;
            }

            // Detail panel is modal while open.
            if let Some(panel) = tui.detail.as_mut() {
                if let Some(panel_event) = panel.handle_event(&event) {
                    match panel_event {
                        DetailEvent::Close => {
                            if let Some(signal) = app.navigator.back() {
                                commit(&mut app, &mut tui, signal);
                            }
                        }
                        DetailEvent::ApplyTheme(new_theme) => apply_theme(&mut app, new_theme),
                        DetailEvent::ToggleSound => toggle_sound(&mut app),
                    }
                }
                continue;
            }

            // Menu routing.
            match event {
                TuiEvent::Quit => should_quit = true,
                // Esc steps back out of the panel; with nothing open it
                // leaves the app (the web original had nowhere to go).
                TuiEvent::Escape => should_quit = true,
                TuiEvent::NavLeft => {
                    if let Some(signal) = app.navigator.navigate_left() {
                        commit(&mut app, &mut tui, signal);
                    }
                }
                TuiEvent::NavRight => {
                    if let Some(signal) = app.navigator.navigate_right() {
                        commit(&mut app, &mut tui, signal);
                    }
                }
                TuiEvent::NavUp | TuiEvent::ScrollUp => {
                    if let Some(signal) = app.navigator.navigate_up(1) {
                        commit(&mut app, &mut tui, signal);
                    }
                }
                TuiEvent::NavDown | TuiEvent::ScrollDown => {
                    if let Some(signal) = app.navigator.navigate_down(1) {
                        commit(&mut app, &mut tui, signal);
                    }
                }
                TuiEvent::PageUp => {
                    if let Some(signal) = app.navigator.navigate_up(PAGE_STEP) {
                        commit(&mut app, &mut tui, signal);
                    }
                }
                TuiEvent::PageDown => {
                    if let Some(signal) = app.navigator.navigate_down(PAGE_STEP) {
                        commit(&mut app, &mut tui, signal);
                    }
                }
                TuiEvent::Confirm => {
                    if let Some(signal) = app.navigator.select() {
                        commit(&mut app, &mut tui, signal);
                    }
                }
                TuiEvent::RightClick => {
                    if let Some(signal) = app.navigator.back() {
                        commit(&mut app, &mut tui, signal);
                    }
                }
                TuiEvent::MousePress(column, row) => {
                    tui.gesture.press(column, row, tui.elapsed_ms(now));
                }
                TuiEvent::MouseDrag(column, row) => {
                    tui.gesture.movement(column, row);
                }
                TuiEvent::MouseRelease(column, row) => {
                    let intent = tui.gesture.release(column, row, tui.elapsed_ms(now));
                    if let Some(intent) = intent {
                        let area = terminal.get_frame().area();
                        apply_gesture(&mut app, &mut tui, intent, area);
                    }
                }
                _ => {}
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// One committed transition: cue, panel bookkeeping, title sync.
fn commit(app: &mut App, tui: &mut TuiState, signal: NavSignal) {
    app.cues.play(signal);
    match signal {
        NavSignal::Selected => {
            // Confirming the sound item toggles it as the panel opens,
            // like the original's select handler.
            if selected_setting(app) == Some(SettingKind::Sound) {
                toggle_sound(app);
            }
            open_detail_panel(app, tui);
        }
        NavSignal::Back => {
            tui.detail = None;
        }
        NavSignal::Navigated => {}
    }
    link::publish(&app.navigator.resolved(&app.catalog));
}

/// The `SettingKind` of the currently addressed item, if it is one.
fn selected_setting(app: &App) -> Option<SettingKind> {
    let item = app
        .catalog
        .get(app.navigator.category_index())?
        .items
        .get(app.navigator.item_index())?;
    match item.payload {
        Some(Payload::Setting(kind)) => Some(kind),
        _ => None,
    }
}

fn open_detail_panel(app: &App, tui: &mut TuiState) {
    let item = app
        .catalog
        .get(app.navigator.category_index())
        .and_then(|c| c.items.get(app.navigator.item_index()));
    if let Some(item) = item {
        tui.detail = Some(DetailPanelState::open_for(item, app.settings.theme));
    }
}

/// Taps hit-test against the rails; swipes map to the navigator with the
/// rail following the pointer (drag right reveals the category to the
/// left). Categories move one step per gesture; the repeat count only
/// scales vertical item movement.
fn apply_gesture(
    app: &mut App,
    tui: &mut TuiState,
    intent: GestureIntent,
    area: ratatui::layout::Rect,
) {
    let signal = match intent {
        GestureIntent::Tap { column, row } => {
            let categories = app.catalog.len();
            let selected = app.navigator.category_index();
            if let Some(index) = category_bar::hit_test(area, column, row, categories, selected) {
                app.navigator.go_to_category(index)
            } else {
                let items = app
                    .catalog
                    .get(selected)
                    .map(|c| c.items.len())
                    .unwrap_or(0);
                item_list::hit_test(area, column, row, items, app.navigator.item_index())
                    .and_then(|index| app.navigator.go_to_item(index))
            }
        }
        GestureIntent::Swipe { direction, count } => match direction {
            SwipeDirection::Right => app.navigator.navigate_left(),
            SwipeDirection::Left => app.navigator.navigate_right(),
            SwipeDirection::Down => app.navigator.navigate_up(usize::from(count)),
            SwipeDirection::Up => app.navigator.navigate_down(usize::from(count)),
        },
    };
    if let Some(signal) = signal {
        commit(app, tui, signal);
    }
}

fn apply_theme(app: &mut App, new_theme: ThemeColor) {
    if app.settings.theme == new_theme {
        return;
    }
    info!("theme changed to {}", new_theme.as_str());
    app.settings.theme = new_theme;
    settings::save(&app.settings);
    rebuild_catalog(app);
}

fn toggle_sound(app: &mut App) {
    app.settings.sound_enabled = !app.settings.sound_enabled;
    app.cues.set_enabled(app.settings.sound_enabled);
    info!(
        "sound {}",
        if app.settings.sound_enabled { "enabled" } else { "disabled" }
    );
    settings::save(&app.settings);
    rebuild_catalog(app);
}

/// Settings subtitles mirror live values, so the catalog is rebuilt after
/// a change and the navigator re-clamped against it (same shape, so this
/// never actually moves the cursor).
fn rebuild_catalog(app: &mut App) {
    app.catalog = content::build_catalog(&app.settings);
    app.navigator.sync(&app.catalog);
}
