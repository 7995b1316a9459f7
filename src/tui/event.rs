use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseButton, MouseEventKind};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Keyboard surface of the navigation core
    NavLeft,
    NavRight,
    NavUp,
    NavDown,
    Confirm,
    Escape,
    Quit,      // 'q'
    ForceQuit, // Ctrl+C

    // Wheel maps to single-step vertical navigation (or panel scroll)
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,

    // Raw pointer surface, fed to the gesture interpreter
    MousePress(u16, u16),
    MouseDrag(u16, u16),
    MouseRelease(u16, u16),
    /// Non-primary button acts as "back", like the web original's
    /// right-click handler.
    RightClick,

    Resize,
}

/// Poll for an event with timeout (blocks up to `timeout`)
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        translate(event::read().unwrap())
    } else {
        None
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

fn translate(raw: Event) -> Option<TuiEvent> {
    match raw {
        Event::Key(key_event) => {
            log::debug!(
                "key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Left) => Some(TuiEvent::NavLeft),
                (_, KeyCode::Right) => Some(TuiEvent::NavRight),
                (_, KeyCode::Up) => Some(TuiEvent::NavUp),
                (_, KeyCode::Down) => Some(TuiEvent::NavDown),
                (_, KeyCode::Enter) => Some(TuiEvent::Confirm),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
                (_, KeyCode::PageUp) => Some(TuiEvent::PageUp),
                (_, KeyCode::PageDown) => Some(TuiEvent::PageDown),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MousePress(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                Some(TuiEvent::MouseDrag(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::Up(MouseButton::Left) => {
                Some(TuiEvent::MouseRelease(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::Down(MouseButton::Right) => Some(TuiEvent::RightClick),
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}
