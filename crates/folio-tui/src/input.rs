use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::{App, Mode};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    /// Mouse wheel, positive is down
    ScrollLines(i32),
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    NextSection,
    PrevSection,
    NextPost,
    PrevPost,
    /// Dot navigation, 1-based
    JumpToPost(usize),
    OpenPost,
    EditContact,
    ShowHelp,
    // Contact form
    NextField,
    PrevField,
    Submit,
    InputChar(char),
    Backspace,
    // Pointer
    PointerDown(u16, u16),
    PointerDrag(u16),
    PointerUp(u16, u16),
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    if app.is_input_mode() {
        return handle_input_mode(key);
    }
    if app.mode == Mode::Help {
        // Any key exits help
        return Action::ExitMode;
    }

    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Line scrolling
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Down, KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Up, KeyModifiers::NONE) => Action::ScrollUp,

        // Page scrolling
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::ScrollHalfPageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ScrollHalfPageUp,
        (KeyCode::Char('f'), KeyModifiers::CONTROL) => Action::ScrollPageDown,
        (KeyCode::Char('b'), KeyModifiers::CONTROL) => Action::ScrollPageUp,
        (KeyCode::PageDown, _) => Action::ScrollPageDown,
        (KeyCode::PageUp, _) => Action::ScrollPageUp,
        (KeyCode::Char(' '), KeyModifiers::NONE) => Action::ScrollPageDown,

        // Jump to top/bottom
        (KeyCode::Char('g'), KeyModifiers::NONE) => {
            // gg requires double press
            if app.pending_key == Some('g') {
                Action::JumpToTop
            } else {
                Action::PendingG
            }
        }
        (KeyCode::Char('G'), _) => Action::JumpToBottom,
        (KeyCode::Home, _) => Action::JumpToTop,
        (KeyCode::End, _) => Action::JumpToBottom,

        // Sections
        (KeyCode::Tab, KeyModifiers::NONE) => Action::NextSection,
        (KeyCode::BackTab, _) => Action::PrevSection,

        // Carousel
        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::NextPost,
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::PrevPost,
        (KeyCode::Right, KeyModifiers::NONE) => Action::NextPost,
        (KeyCode::Left, KeyModifiers::NONE) => Action::PrevPost,
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::JumpToPost(c as usize - '0' as usize)
        }
        (KeyCode::Char('o'), KeyModifiers::NONE) => Action::OpenPost,
        (KeyCode::Enter, KeyModifiers::NONE) => Action::OpenPost,

        // Contact form
        (KeyCode::Char('c'), KeyModifiers::NONE) => Action::EditContact,
        (KeyCode::Char('i'), KeyModifiers::NONE) => Action::EditContact,

        (KeyCode::Char('?'), _) => Action::ShowHelp,
        (KeyCode::Esc, _) => Action::ExitMode,

        _ => Action::None,
    }
}

/// Handle key events while typing into the contact form
fn handle_input_mode(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Esc, _) => Action::ExitMode,
        (KeyCode::Tab, _) | (KeyCode::Down, _) => Action::NextField,
        (KeyCode::BackTab, _) | (KeyCode::Up, _) => Action::PrevField,
        (KeyCode::Backspace, _) => Action::Backspace,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::InputChar(c),
        _ => Action::None,
    }
}

/// Map wheel and left-button events; everything else is ignored
pub fn handle_mouse_event(mouse: MouseEvent, app: &App) -> Action {
    if app.mode == Mode::Help {
        return match mouse.kind {
            MouseEventKind::Down(_) => Action::ExitMode,
            _ => Action::None,
        };
    }

    match mouse.kind {
        MouseEventKind::ScrollDown => Action::ScrollLines(3),
        MouseEventKind::ScrollUp => Action::ScrollLines(-3),
        MouseEventKind::Down(MouseButton::Left) => Action::PointerDown(mouse.column, mouse.row),
        MouseEventKind::Drag(MouseButton::Left) => Action::PointerDrag(mouse.column),
        MouseEventKind::Up(MouseButton::Left) => Action::PointerUp(mouse.column, mouse.row),
        _ => Action::None,
    }
}
