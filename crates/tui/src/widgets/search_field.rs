//! Search field widget with autocomplete suggestions.
//!
//! This widget provides a text input for product queries. Its state lives in
//! a [`QueryCoordinator`]; the widget adds cursor editing, keyboard
//! navigation through the suggestion panel, and rendering.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use sf_core::coordinator::{HideTicket, QueryCoordinator};

use crate::event::EventStatus;

/// Maximum rows of the suggestion popup, borders excluded.
const MAX_POPUP_ROWS: u16 = 8;

/// Search field state.
#[derive(Debug)]
pub struct SearchField {
    coordinator: QueryCoordinator,
    /// Cursor position in characters.
    cursor_pos: usize,
    /// Highlighted suggestion, if any.
    selected_index: Option<usize>,
    focused: bool,
    placeholder: String,
}

impl SearchField {
    /// Create a field around a mounted coordinator, cursor at the end of the text.
    pub fn new(coordinator: QueryCoordinator, placeholder: impl Into<String>) -> Self {
        let cursor_pos = coordinator.query().chars().count();
        Self {
            coordinator,
            cursor_pos,
            selected_index: None,
            focused: false,
            placeholder: placeholder.into(),
        }
    }

    pub fn query(&self) -> &str {
        self.coordinator.query()
    }

    pub fn coordinator(&self) -> &QueryCoordinator {
        &self.coordinator
    }

    pub fn coordinator_mut(&mut self) -> &mut QueryCoordinator {
        &mut self.coordinator
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    /// Suggestions currently shown in the panel.
    pub fn suggestions(&self) -> &[String] {
        self.coordinator.visible_suggestions()
    }

    pub fn should_show_popup(&self) -> bool {
        !self.suggestions().is_empty()
    }

    /// Get the currently highlighted suggestion.
    pub fn selected_suggestion(&self) -> Option<&str> {
        self.selected_index
            .and_then(|i| self.suggestions().get(i))
            .map(String::as_str)
    }

    /// The field gained focus.
    pub fn focus(&mut self) {
        self.focused = true;
        self.coordinator.on_focus();
    }

    /// The field lost focus. The caller schedules the returned hide.
    pub fn blur(&mut self) -> HideTicket {
        self.focused = false;
        self.selected_index = None;
        self.coordinator.on_blur()
    }

    /// Deliver suggestion results; resets the highlight when they are kept.
    pub fn on_suggestions(&mut self, seq: u64, keyword: &str, items: Vec<String>) -> bool {
        let kept = self.coordinator.on_suggestions(seq, keyword, items);
        if kept {
            self.selected_index = None;
        }
        kept
    }

    /// Handle a key press.
    ///
    /// Tab and unmodified keys the field has no use for are not consumed.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> EventStatus {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('u') if ctrl => self.clear(),
            KeyCode::Char(_) if ctrl => return EventStatus::NotConsumed,
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.delete_char(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => self.cursor_pos = 0,
            KeyCode::End => self.cursor_pos = self.char_len(),
            KeyCode::Up => self.move_selection_up(),
            KeyCode::Down => self.move_selection_down(),
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => self.clear(),
            _ => return EventStatus::NotConsumed,
        }
        EventStatus::Consumed
    }

    /// Insert a character at the cursor position.
    pub fn insert_char(&mut self, c: char) {
        let mut text = self.query().to_string();
        text.insert(self.byte_offset(self.cursor_pos), c);
        self.cursor_pos += 1;
        self.set_text(text);
    }

    /// Insert pasted text at the cursor position. Line breaks become spaces.
    pub fn insert_str(&mut self, s: &str) {
        let pasted: String = s
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        let mut text = self.query().to_string();
        text.insert_str(self.byte_offset(self.cursor_pos), &pasted);
        self.cursor_pos += pasted.chars().count();
        self.set_text(text);
    }

    /// Delete the character before the cursor (backspace).
    pub fn delete_char(&mut self) {
        if self.cursor_pos == 0 {
            return;
        }
        let mut text = self.query().to_string();
        text.remove(self.byte_offset(self.cursor_pos - 1));
        self.cursor_pos -= 1;
        self.set_text(text);
    }

    /// Delete the character under the cursor.
    pub fn delete_forward(&mut self) {
        if self.cursor_pos >= self.char_len() {
            return;
        }
        let mut text = self.query().to_string();
        text.remove(self.byte_offset(self.cursor_pos));
        self.set_text(text);
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.char_len() {
            self.cursor_pos += 1;
        }
    }

    /// Move the highlight up; moving above the first suggestion removes it.
    pub fn move_selection_up(&mut self) {
        self.selected_index = match self.selected_index {
            Some(0) | None => None,
            Some(i) => Some(i - 1),
        };
    }

    /// Move the highlight down, stopping at the last suggestion.
    pub fn move_selection_down(&mut self) {
        let count = self.suggestions().len();
        if count == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            None => 0,
            Some(i) => (i + 1).min(count - 1),
        });
    }

    /// Enter: pick the highlighted suggestion, or submit the typed text.
    pub fn submit(&mut self) {
        match self.selected_suggestion().map(str::to_string) {
            Some(suggestion) => self.coordinator.on_suggestion_selected(suggestion),
            None => {
                self.coordinator.on_submit();
            }
        }
        self.selected_index = None;
        self.cursor_pos = self.char_len();
    }

    /// Clear the text and reset any filtered view.
    pub fn clear(&mut self) {
        self.coordinator.on_clear();
        self.cursor_pos = 0;
        self.selected_index = None;
    }

    fn set_text(&mut self, text: String) {
        self.coordinator.on_text_change(text);
        self.selected_index = None;
    }

    fn char_len(&self) -> usize {
        self.query().chars().count()
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.query()
            .char_indices()
            .nth(char_pos)
            .map_or(self.query().len(), |(i, _)| i)
    }

    fn block(&self) -> Block<'static> {
        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Search");
        if !self.query().is_empty() {
            block = block.title_top(Line::from("Esc ✕").right_aligned());
        }
        block
    }

    /// Render the input field.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        let line = if self.query().is_empty() && !self.focused {
            Line::from(Span::styled(
                self.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(Span::styled(
                self.query().to_string(),
                Style::default().fg(Color::Yellow),
            ))
        };
        Paragraph::new(line).render(inner, buf);
    }

    /// Terminal cursor position for a field rendered in `area`.
    pub fn cursor_position(&self, area: Rect) -> Position {
        let inner = self.block().inner(area);
        let before: String = self.query().chars().take(self.cursor_pos).collect();
        let offset = u16::try_from(Span::raw(before).width()).unwrap_or(u16::MAX);
        Position::new(
            inner.x.saturating_add(offset).min(inner.right().saturating_sub(1)),
            inner.y,
        )
    }

    /// Area of the popup when anchored below a field rendered in `field_area`,
    /// clipped to `bounds`.
    pub fn popup_area(&self, field_area: Rect, bounds: Rect) -> Rect {
        let rows = u16::try_from(self.suggestions().len())
            .unwrap_or(u16::MAX)
            .min(MAX_POPUP_ROWS);
        let top = field_area.bottom();
        let height = (rows + 2).min(bounds.bottom().saturating_sub(top));
        Rect::new(field_area.x, top, field_area.width, height)
    }

    /// Render the autocomplete popup.
    pub fn render_popup(&self, area: Rect, buf: &mut Buffer) {
        let suggestions = self.suggestions();
        if suggestions.is_empty() || area.height < 3 {
            return;
        }

        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Suggestions")
            .style(Style::default().bg(Color::Black));

        let inner = block.inner(area);
        block.render(area, buf);

        for (i, suggestion) in suggestions.iter().enumerate() {
            let Ok(row) = u16::try_from(i) else { break };
            if row >= inner.height {
                break;
            }

            let style = if Some(i) == self.selected_index {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let line = Line::from(Span::styled(suggestion.clone(), style));
            buf.set_line(inner.x, inner.y + row, &line, inner.width);
        }
    }
}
