//! Single-line search box backed by `tui-textarea`.

use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use tui_textarea::TextArea;

/// Text box holding the free-text part of the filter.
#[derive(Debug, Clone)]
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	pub fn new(initial: &str) -> Self {
		let mut textarea = TextArea::new(vec![initial.to_string()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(tui_textarea::CursorMove::End);
		Self { textarea }
	}

	/// Current contents of the box.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Replace the contents, keeping styles and placeholder.
	pub fn set_text(&mut self, text: &str) {
		if self.text() == text {
			return;
		}
		let mut textarea = TextArea::new(vec![text.to_string()]);
		textarea.set_style(self.textarea.style());
		textarea.set_cursor_line_style(Style::default());
		textarea.set_placeholder_text(self.textarea.placeholder_text().to_string());
		textarea.set_placeholder_style(self.textarea.placeholder_style().unwrap_or_default());
		textarea.move_cursor(tui_textarea::CursorMove::End);
		self.textarea = textarea;
	}

	pub fn set_placeholder(&mut self, text: &str, style: Style) {
		self.textarea.set_placeholder_text(text.to_string());
		self.textarea.set_placeholder_style(style);
	}

	pub fn set_style(&mut self, style: Style) {
		self.textarea.set_style(style);
	}

	/// Feed a key press to the box. Returns `true` when the text changed.
	///
	/// Keys `tui-textarea` turns into a line break (Enter, Ctrl-M and raw
	/// `\n`/`\r` characters) are swallowed. Every other key goes to the
	/// textarea.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		let newline = match key.code {
			KeyCode::Enter => true,
			KeyCode::Char('m') => ctrl,
			KeyCode::Char('\n' | '\r') => !ctrl,
			_ => false,
		};
		if newline {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	pub fn render(&self, area: Rect, buf: &mut Buffer) {
		(&self.textarea).render(area, buf);
	}
}

impl Default for SearchInput<'_> {
	fn default() -> Self {
		Self::new("")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_appends_at_the_end() {
		let mut input = SearchInput::new("ap");
		assert!(input.input(key(KeyCode::Char('i'))));
		assert_eq!(input.text(), "api");
	}

	#[test]
	fn backspace_on_empty_reports_no_change() {
		let mut input = SearchInput::default();
		assert!(!input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "");
	}

	#[test]
	fn enter_never_adds_a_line() {
		let mut input = SearchInput::new("css");
		assert!(!input.input(key(KeyCode::Enter)));
		assert!(!input.input(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL)));
		assert!(!input.input(key(KeyCode::Char('\n'))));
		assert_eq!(input.text(), "css");
		assert_eq!(input.textarea.lines().len(), 1);
	}

	#[test]
	fn ctrl_j_deletes_to_the_line_head() {
		let mut input = SearchInput::new("css");
		assert!(input.input(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::CONTROL)));
		assert_eq!(input.text(), "");
	}

	#[test]
	fn set_text_replaces_contents() {
		let mut input = SearchInput::new("old");
		input.set_text("new");
		assert_eq!(input.text(), "new");
		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "ne");
	}
}
