use std::cell::RefCell;
use std::rc::Rc;

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::TableState;
use serde::Serialize;

use crate::filter::FilterState;
use crate::requests::{RequestEntry, filter_requests};
use crate::tui::components::{
	FilterBar, FilterBarOptions, FilterBarState, RequestTable, render_request_table,
};
use crate::tui::theme::Theme;

/// Final filter and how many requests it matched when the user quit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FilterOutcome {
	pub filter: FilterState,
	pub matched: usize,
	pub total: usize,
}

pub struct App {
	entries: Vec<RequestEntry>,
	filtered: Vec<usize>,
	pub(crate) filter_bar: FilterBarState,
	pending: Rc<RefCell<Option<FilterState>>>,
	table_state: TableState,
	theme: Theme,
}

impl App {
	pub fn new(
		entries: Vec<RequestEntry>,
		filter: FilterState,
		options: FilterBarOptions,
		theme: Theme,
	) -> Self {
		let pending = Rc::new(RefCell::new(None));
		let mut filter_bar = FilterBarState::with_options(filter, options);
		let sink = Rc::clone(&pending);
		filter_bar.on_change(move |filter| {
			*sink.borrow_mut() = Some(filter.clone());
		});

		let mut app = Self {
			entries,
			filtered: Vec::new(),
			filter_bar,
			pending,
			table_state: TableState::default(),
			theme,
		};
		app.refilter();
		app
	}

	#[must_use]
	pub fn filter_state(&self) -> &FilterState {
		self.filter_bar.filter_state()
	}

	/// Indices of the requests shown in the table.
	#[must_use]
	pub fn filtered(&self) -> &[usize] {
		&self.filtered
	}

	#[must_use]
	pub fn outcome(&self) -> FilterOutcome {
		FilterOutcome {
			filter: self.filter_state().clone(),
			matched: self.filtered.len(),
			total: self.entries.len(),
		}
	}

	pub fn draw(&mut self, frame: &mut Frame) {
		let [bar_area, _, table_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Min(0),
		])
		.areas(frame.area());

		frame.render_stateful_widget(FilterBar::new(&self.theme), bar_area, &mut self.filter_bar);

		let title = format!(" Network {}/{} ", self.filtered.len(), self.entries.len());
		render_request_table(
			frame,
			table_area,
			&mut self.table_state,
			RequestTable {
				entries: &self.entries,
				filtered: &self.filtered,
				title: Some(title),
			},
			&self.theme,
		);
	}

	/// Handle a key press, returning the outcome once the user quits.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<FilterOutcome> {
		match key.code {
			KeyCode::Esc => return Some(self.outcome()),
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return Some(self.outcome());
			}
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			_ => {
				self.filter_bar.handle_key(key);
			}
		}
		self.apply_pending_filter();
		None
	}

	pub fn handle_mouse(&mut self, mouse: MouseEvent) {
		match mouse.kind {
			MouseEventKind::ScrollUp => self.move_selection_up(),
			MouseEventKind::ScrollDown => self.move_selection_down(),
			_ => {
				self.filter_bar.handle_mouse(mouse);
			}
		}
		self.apply_pending_filter();
	}

	fn apply_pending_filter(&mut self) {
		if self.pending.borrow_mut().take().is_some() {
			self.refilter();
		}
	}

	fn refilter(&mut self) {
		self.filtered = filter_requests(&self.entries, self.filter_bar.filter_state());
		let selection = if self.filtered.is_empty() { None } else { Some(0) };
		self.table_state.select(selection);
		log::debug!(
			"{} of {} requests match",
			self.filtered.len(),
			self.entries.len()
		);
	}

	fn move_selection_up(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected > 0
		{
			self.table_state.select(Some(selected - 1));
		}
	}

	fn move_selection_down(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected + 1 < self.filtered.len()
		{
			self.table_state.select(Some(selected + 1));
		}
	}
}
