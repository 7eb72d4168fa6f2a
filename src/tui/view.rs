// File: src/tui/view.rs
use crate::tui::state::{AppState, InputMode};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthChar;

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    // --- 1. Task List ---
    let task_items: Vec<ListItem> = state
        .tasks
        .titles()
        .iter()
        .map(|t| ListItem::new(t.as_str()))
        .collect();

    let title = format!(" Tasks ({}) ", state.tasks.len());

    let task_list = List::new(task_items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::Green)
                .fg(Color::Black),
        );
    f.render_stateful_widget(task_list, v_chunks[0], &mut state.list_state);

    // --- 2. Footer: Status + Actions ---
    let footer_area = v_chunks[1];
    f.render_widget(Clear, footer_area);

    let status = Paragraph::new(state.message.clone())
        .style(Style::default().fg(Color::Cyan))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
                .title(" Status "),
        );
    let help = Paragraph::new("a:Add  Enter:Remove  d:Delete Row  j/k:Move  q:Quit")
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
                .title(" Actions "),
        );

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(footer_area);
    f.render_widget(status, chunks[0]);
    f.render_widget(help, chunks[1]);

    // --- 3. Add-Task Dialog ---
    if state.mode == InputMode::Adding {
        let area = centered_rect(60, f.area());

        let prefix = "> ";
        let input_text = Line::from(vec![
            Span::styled(prefix, Style::default().fg(Color::Yellow)),
            Span::raw(state.input_buffer.as_str()),
        ]);

        let hint = if state.message.is_empty() {
            " New Task (Enter:Add  Esc:Cancel) ".to_string()
        } else {
            format!(" New Task ({}) ", state.message)
        };

        let input = Paragraph::new(input_text).block(
            Block::default()
                .borders(Borders::ALL)
                .title(hint)
                .border_style(Style::default().fg(Color::Yellow)),
        );

        f.render_widget(Clear, area);
        f.render_widget(input, area);

        // Cursor rendering: display-width aware so wide glyphs line up.
        let typed_width: usize = state
            .input_buffer
            .chars()
            .take(state.cursor_position)
            .map(|c| c.width().unwrap_or(0))
            .sum();
        let cursor_x = area.x + 1 + prefix.chars().count() as u16 + typed_width as u16;
        f.set_cursor_position((cursor_x.min(area.x + area.width.saturating_sub(2)), area.y + 1));
    }
}

/// Centers a 3-row dialog horizontally at `percent_x` of the frame.
fn centered_rect(percent_x: u16, r: Rect) -> Rect {
    let height = 3.min(r.height);
    let y = r.y + (r.height.saturating_sub(height)) / 2;

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(Rect { y, height, ..r });
    h_chunks[1]
}
