// File: ./src/tui/state.rs
// Manages the application state for the TUI.
use crate::store::{ListEdit, TaskList};
use ratatui::widgets::ListState;

#[derive(PartialEq, Clone, Copy)]
pub enum InputMode {
    Normal,
    Adding,
}

pub struct AppState {
    // Data
    pub tasks: TaskList,

    // UI State
    pub list_state: ListState,
    pub mode: InputMode,
    pub message: String,

    // Input Buffers
    pub input_buffer: String,
    pub cursor_position: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TaskList::new())
    }
}

impl AppState {
    /// Creates the screen state around an injected task list. The list
    /// lives exactly as long as this state; nothing is saved on drop.
    pub fn new(tasks: TaskList) -> Self {
        let mut list_state = ListState::default();
        if !tasks.is_empty() {
            list_state.select(Some(0));
        }

        Self {
            tasks,
            list_state,
            mode: InputMode::Normal,
            message: String::new(),
            input_buffer: String::new(),
            cursor_position: 0,
        }
    }

    pub fn selected_title(&self) -> Option<&str> {
        let idx = self.list_state.selected()?;
        self.tasks.get(idx).ok()
    }

    /// Applies a successful mutation to the selection incrementally,
    /// without recomputing the view from scratch.
    pub fn apply_edit(&mut self, edit: ListEdit) {
        match edit {
            ListEdit::Inserted(idx) => {
                self.list_state.select(Some(idx));
            }
            ListEdit::Removed(idx) => {
                if self.tasks.is_empty() {
                    self.list_state.select(None);
                    return;
                }
                let last = self.tasks.len() - 1;
                match self.list_state.selected() {
                    Some(sel) if sel > idx => self.list_state.select(Some(sel - 1)),
                    Some(sel) if sel > last => self.list_state.select(Some(last)),
                    Some(_) => {}
                    None => self.list_state.select(Some(0)),
                }
            }
        }
    }

    // --- INPUT HELPERS ---
    pub fn move_cursor_left(&mut self) {
        let cursor_moved_left = self.cursor_position.saturating_sub(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_left);
    }
    pub fn move_cursor_right(&mut self) {
        let cursor_moved_right = self.cursor_position.saturating_add(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_right);
    }
    pub fn enter_char(&mut self, new_char: char) {
        // Safe insertion for UTF-8 strings
        let byte_index = self
            .input_buffer
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor_position)
            .unwrap_or(self.input_buffer.len());

        self.input_buffer.insert(byte_index, new_char);
        self.move_cursor_right();
    }
    pub fn delete_char(&mut self) {
        if self.cursor_position != 0 {
            let current_index = self.cursor_position;
            let before = self.input_buffer.chars().take(current_index - 1);
            let after = self.input_buffer.chars().skip(current_index);
            self.input_buffer = before.chain(after).collect();
            self.move_cursor_left();
        }
    }
    pub fn reset_input(&mut self) {
        self.input_buffer.clear();
        self.cursor_position = 0;
    }
    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.clamp(0, self.input_buffer.chars().count())
    }

    // --- NAVIGATION ---
    pub fn next(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= self.tasks.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }
    pub fn previous(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.tasks.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }
}
