use ratatui::style::{Color, Modifier, Style};

/// A theme containing styles for the filter bar and request table.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
	/// Style for the selected tab and the table header.
	pub header: Style,
	/// Style for the highlighted table row.
	pub row_highlight: Style,
	/// Style for the search box text.
	pub prompt: Style,
	/// Style for placeholders and empty states.
	pub empty: Style,
	/// Style for the "More" affordance.
	pub highlight: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	/// Returns the style for the selected tab.
	#[must_use]
	pub fn tab_selected_style(&self) -> Style {
		self.header.add_modifier(Modifier::BOLD)
	}

	/// Returns the style for inactive tabs.
	#[must_use]
	pub fn tab_inactive_style(&self) -> Style {
		Style::new()
			.fg(self.header.fg.unwrap_or(Color::Reset))
			.bg(self.row_highlight.bg.unwrap_or(Color::Reset))
	}

	/// Returns the style for the "More" affordance.
	#[must_use]
	pub fn more_style(&self) -> Style {
		self.highlight
	}
}

/// A bundled theme together with the name it is selected by.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self { name, theme }
	}
}
