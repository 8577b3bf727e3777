//! Keyboard input dispatch. Overlays first, then global keys, then content keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Overlay};

/// Handle a key event, mutating `app` in place.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    if app.overlay == Overlay::Help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter
        ) {
            app.overlay = Overlay::None;
        }
        return;
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        KeyCode::Char(c @ '1'..='9') => {
            app.choose_view_at(c as usize - '1' as usize);
            return;
        }
        KeyCode::Char(']') => {
            app.next_view();
            return;
        }
        KeyCode::Char('[') => {
            app.prev_view();
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.prev_tab();
            } else {
                app.next_tab();
            }
            return;
        }
        KeyCode::BackTab => {
            app.prev_tab();
            return;
        }
        _ => {}
    }

    // 3. Content panel keys.
    match key.code {
        KeyCode::Char('l') | KeyCode::Right => app.next_tab(),
        KeyCode::Char('h') | KeyCode::Left => app.prev_tab(),
        KeyCode::Char('j') | KeyCode::Down => app.cursor_down(),
        KeyCode::Char('k') | KeyCode::Up => app.cursor_up(),
        KeyCode::Char('g') | KeyCode::Home => app.cursor_first(),
        KeyCode::Char('G') | KeyCode::End => app.cursor_last(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_focused(),
        _ => {}
    }
}
