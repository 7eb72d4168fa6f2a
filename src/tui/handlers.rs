// File: ./src/tui/handlers.rs
// Maps key events to UiRequests and applies requests to the task list.
use crate::store::ListEdit;
use crate::tui::action::UiRequest;
use crate::tui::state::{AppState, InputMode};
use crossterm::event::{KeyCode, KeyEvent};

/// Translates a key press into a request, per input mode. Returns None
/// when the key only touched UI state (navigation, editing the buffer).
pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Option<UiRequest> {
    // --- SANITY CHECK ---
    // Prevent out-of-bounds panics if cursor drift happened
    let char_count = state.input_buffer.chars().count();
    if state.cursor_position > char_count {
        state.cursor_position = char_count;
    }

    match state.mode {
        InputMode::Adding => match key.code {
            KeyCode::Enter => {
                // Forward the raw buffer; trimming and the blank check
                // are the store's responsibility, not the dialog's.
                Some(UiRequest::Add(state.input_buffer.clone()))
            }
            KeyCode::Esc => {
                state.mode = InputMode::Normal;
                state.reset_input();
                state.message = "Add cancelled.".to_string();
                None
            }
            KeyCode::Char(c) => {
                if !c.is_control() {
                    state.enter_char(c);
                }
                None
            }
            KeyCode::Backspace => {
                state.delete_char();
                None
            }
            KeyCode::Left => {
                state.move_cursor_left();
                None
            }
            KeyCode::Right => {
                state.move_cursor_right();
                None
            }
            _ => None,
        },
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiRequest::Quit),
            KeyCode::Char('a') => {
                state.mode = InputMode::Adding;
                state.reset_input();
                state.message.clear();
                None
            }
            KeyCode::Char('j') | KeyCode::Down => {
                state.next();
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.previous();
                None
            }
            // Swipe analog: delete the selected row by position.
            KeyCode::Char('d') | KeyCode::Delete => {
                state.list_state.selected().map(UiRequest::DeleteAt)
            }
            // Tap analog: delete the selected row by title, first match.
            KeyCode::Enter => state
                .selected_title()
                .map(|t| UiRequest::DeleteValue(t.to_string())),
            _ => None,
        },
    }
}

/// Runs a request against the list and folds the outcome back into the
/// UI state. Every store call completes synchronously before this
/// returns; a successful mutation yields exactly one ListEdit.
pub fn apply_request(state: &mut AppState, request: UiRequest) {
    match request {
        UiRequest::Add(raw) => match state.tasks.add(&raw) {
            Ok(idx) => {
                state.apply_edit(ListEdit::Inserted(idx));
                state.mode = InputMode::Normal;
                state.reset_input();
                state.message = "Task added.".to_string();
            }
            Err(e) => {
                // Keep the dialog open so the user can correct the input.
                state.message = format!("{}.", capitalize(&e.to_string()));
            }
        },
        UiRequest::DeleteAt(idx) => match state.tasks.remove_at(idx) {
            Ok(title) => {
                state.apply_edit(ListEdit::Removed(idx));
                state.message = format!("Deleted: {}", title);
            }
            Err(e) => {
                // Stale position from the view layer. Not user-visible.
                log::warn!("delete request ignored: {}", e);
            }
        },
        UiRequest::DeleteValue(title) => match state.tasks.remove_value(&title) {
            Ok(idx) => {
                state.apply_edit(ListEdit::Removed(idx));
                state.message = format!("Deleted: {}", title);
            }
            Err(e) => {
                log::warn!("delete request ignored: {}", e);
            }
        },
        UiRequest::Quit => {}
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
