use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Table, TableState};

use crate::requests::RequestEntry;
use crate::tui::theme::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
const HEADERS: [&str; 4] = ["Method", "Status", "Type", "URL"];

/// Rows of the request list that survived the current filter.
pub struct RequestTable<'a> {
	pub entries: &'a [RequestEntry],
	/// Indices into `entries`, in display order.
	pub filtered: &'a [usize],
	pub title: Option<String>,
}

/// Render the filtered request list inside a rounded border.
pub fn render_request_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	table: RequestTable<'_>,
	theme: &Theme,
) {
	let border_fg = theme.header.fg.unwrap_or(Color::Reset);
	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(Style::default().fg(border_fg));
	if let Some(title) = table.title.clone() {
		block = block.title(title);
	}

	let inner = block.inner(area);
	frame.render_widget(block, area);

	if table.filtered.is_empty() {
		let empty = Paragraph::new(Line::from("No requests match the current filter"))
			.style(theme.empty_style());
		frame.render_widget(empty, inner);
		return;
	}

	let header = Row::new(HEADERS.map(Cell::from))
		.style(theme.header_style())
		.height(1)
		.bottom_margin(1);

	let rows = table
		.filtered
		.iter()
		.filter_map(|index| table.entries.get(*index))
		.map(request_row);

	let widths = [
		Constraint::Length(7),
		Constraint::Length(6),
		Constraint::Length(24),
		Constraint::Fill(1),
	];

	let widget = Table::new(rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::WhenSelected)
		.row_highlight_style(theme.row_highlight_style())
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(widget, inner, table_state);
}

fn request_row(entry: &RequestEntry) -> Row<'static> {
	let status = if entry.status == 0 {
		"-".to_string()
	} else {
		entry.status.to_string()
	};
	Row::new([
		Cell::from(entry.method.clone()),
		Cell::from(status),
		Cell::from(entry.essence()),
		Cell::from(entry.url.clone()),
	])
}
