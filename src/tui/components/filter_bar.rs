//! The network filter bar: a search box followed by the resource tab row.

use std::fmt;

use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::Style;
use ratatui::widgets::StatefulWidget;
use unicode_width::UnicodeWidthStr;

use crate::filter::FilterState;
use crate::overflow::{OverflowCache, TabLayout};
use crate::resource_type::ResourceType;
use crate::tui::input::SearchInput;
use crate::tui::theme::Theme;

pub const DEFAULT_MORE_LABEL: &str = "More ▼";
pub const DEFAULT_PLACEHOLDER: &str = "Filter network";
pub const DEFAULT_SEARCH_WIDTH: u16 = 24;

/// Presentation knobs for the filter bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterBarOptions {
	pub more_label: String,
	pub placeholder: String,
	/// Columns given to the search box before the tab row starts.
	pub search_width: u16,
}

impl Default for FilterBarOptions {
	fn default() -> Self {
		Self {
			more_label: DEFAULT_MORE_LABEL.to_string(),
			placeholder: DEFAULT_PLACEHOLDER.to_string(),
			search_width: DEFAULT_SEARCH_WIDTH,
		}
	}
}

/// What a click on the tab row landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabHit {
	Tab(ResourceType),
	More,
}

#[derive(Clone, Copy, Debug)]
struct HitRegion {
	area: Rect,
	hit: TabHit,
}

type ChangeCallback = Box<dyn FnMut(&FilterState)>;

/// Mutable state behind [`FilterBar`].
pub struct FilterBarState {
	filter: FilterState,
	input: SearchInput<'static>,
	overflow: OverflowCache,
	regions: Vec<HitRegion>,
	options: FilterBarOptions,
	on_change: Option<ChangeCallback>,
}

impl fmt::Debug for FilterBarState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FilterBarState")
			.field("filter", &self.filter)
			.field("hidden", &self.overflow.layout().hidden())
			.field("options", &self.options)
			.finish_non_exhaustive()
	}
}

impl FilterBarState {
	pub fn new(filter: FilterState) -> Self {
		Self::with_options(filter, FilterBarOptions::default())
	}

	pub fn with_options(filter: FilterState, options: FilterBarOptions) -> Self {
		let input = SearchInput::new(&filter.search_value);
		Self {
			filter,
			input,
			overflow: OverflowCache::default(),
			regions: Vec::new(),
			options,
			on_change: None,
		}
	}

	/// Register the callback invoked after every user edit of the filter.
	pub fn on_change(&mut self, callback: impl FnMut(&FilterState) + 'static) {
		self.on_change = Some(Box::new(callback));
	}

	#[must_use]
	pub fn filter_state(&self) -> &FilterState {
		&self.filter
	}

	/// Replace the filter from the host side. The change callback is not
	/// invoked.
	pub fn set_filter_state(&mut self, filter: FilterState) {
		self.input.set_text(&filter.search_value);
		self.filter = filter;
	}

	/// Tabs collapsed behind "More" as of the last render.
	#[must_use]
	pub fn hidden_tabs(&self) -> &[ResourceType] {
		self.overflow.layout().hidden()
	}

	/// Handle a key press. Returns `true` when the filter changed.
	pub fn handle_key(&mut self, key: KeyEvent) -> bool {
		match key.code {
			KeyCode::Tab => self.select(self.filter.resource_type.next()),
			KeyCode::BackTab => self.select(self.filter.resource_type.previous()),
			_ => {
				if !self.input.input(key) {
					return false;
				}
				let next = self.filter.with_search_value(self.input.text());
				self.commit(next)
			}
		}
	}

	/// Handle a mouse event. Returns `true` when the filter changed.
	pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
		if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
			return false;
		}
		match self.hit_test(mouse.column, mouse.row) {
			Some(TabHit::Tab(resource_type)) => self.select(resource_type),
			Some(TabHit::More) => match self.hidden_tabs().first().copied() {
				Some(resource_type) => self.select(resource_type),
				None => false,
			},
			None => false,
		}
	}

	/// Find the tab or "More" affordance drawn at the given cell.
	#[must_use]
	pub fn hit_test(&self, column: u16, row: u16) -> Option<TabHit> {
		let position = Position::new(column, row);
		self.regions
			.iter()
			.find(|region| region.area.contains(position))
			.map(|region| region.hit)
	}

	fn select(&mut self, resource_type: ResourceType) -> bool {
		let next = self.filter.with_resource_type(resource_type);
		self.commit(next)
	}

	fn commit(&mut self, next: FilterState) -> bool {
		if next == self.filter {
			return false;
		}
		self.filter = next;
		log::debug!(
			"filter changed: type={} search={:?}",
			self.filter.resource_type,
			self.filter.search_value
		);
		if let Some(callback) = self.on_change.as_mut() {
			callback(&self.filter);
		}
		true
	}
}

/// Rendered width of a tab, including one cell of padding on each side.
#[must_use]
pub fn tab_width(label: &str) -> u16 {
	u16::try_from(label.width())
		.unwrap_or(u16::MAX)
		.saturating_add(2)
}

fn measured_widths() -> [u16; 7] {
	ResourceType::ALL.map(|resource_type| tab_width(resource_type.label()))
}

/// Widget drawing the search box and the responsive tab row on one line.
#[derive(Clone, Copy, Debug)]
pub struct FilterBar<'t> {
	theme: &'t Theme,
}

impl<'t> FilterBar<'t> {
	pub fn new(theme: &'t Theme) -> Self {
		Self { theme }
	}
}

impl StatefulWidget for FilterBar<'_> {
	type State = FilterBarState;

	fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
		state.regions.clear();
		if area.width == 0 || area.height == 0 {
			return;
		}
		let row = Rect { height: 1, ..area };

		let [search_area, _, tabs_area] = Layout::default()
			.direction(Direction::Horizontal)
			.constraints(layout_constraints(state.options.search_width, row.width))
			.areas(row);

		state.input.set_style(self.theme.prompt_style());
		state
			.input
			.set_placeholder(&state.options.placeholder, self.theme.empty_style());
		state.input.render(search_area, buf);

		let more_reserve = tab_width(&state.options.more_label);
		let layout = state
			.overflow
			.measure(
				&measured_widths(),
				tabs_area.width,
				more_reserve,
				state.filter.resource_type,
			)
			.clone();

		state.regions = draw_tabs(
			buf,
			tabs_area,
			&layout,
			state.filter.resource_type,
			&state.options.more_label,
			self.theme,
		);
	}
}

fn layout_constraints(search_width: u16, total: u16) -> [Constraint; 3] {
	let search = search_width.min(total);
	let gap = u16::from(total > search);
	[
		Constraint::Length(search),
		Constraint::Length(gap),
		Constraint::Min(0),
	]
}

fn draw_tabs(
	buf: &mut Buffer,
	area: Rect,
	layout: &TabLayout,
	selected: ResourceType,
	more_label: &str,
	theme: &Theme,
) -> Vec<HitRegion> {
	let mut regions = Vec::new();
	let mut x = area.x;
	let right = area.right();

	let mut place = |label: &str, style: Style, hit: TabHit| {
		if x >= right {
			return;
		}
		let text = format!(" {label} ");
		let available = usize::from(right - x);
		let (end_x, _) = buf.set_stringn(x, area.y, &text, available, style);
		if end_x > x {
			regions.push(HitRegion {
				area: Rect::new(x, area.y, end_x - x, 1),
				hit,
			});
		}
		x = end_x;
	};

	for resource_type in layout.visible() {
		let style = if resource_type == selected {
			theme.tab_selected_style()
		} else {
			theme.tab_inactive_style()
		};
		place(resource_type.label(), style, TabHit::Tab(resource_type));
	}
	if layout.has_overflow() {
		place(more_label, theme.more_style(), TabHit::More);
	}

	regions
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::rc::Rc;

	use ratatui::crossterm::event::KeyModifiers;

	use super::*;

	fn render(state: &mut FilterBarState, width: u16) -> Buffer {
		let area = Rect::new(0, 0, width, 1);
		let mut buf = Buffer::empty(area);
		let theme = Theme::default();
		FilterBar::new(&theme).render(area, &mut buf, state);
		buf
	}

	fn row_text(buf: &Buffer, from: u16) -> String {
		(from..buf.area.width)
			.map(|x| buf[(x, 0)].symbol())
			.collect()
	}

	fn click(column: u16) -> MouseEvent {
		MouseEvent {
			kind: MouseEventKind::Down(MouseButton::Left),
			column,
			row: 0,
			modifiers: KeyModifiers::NONE,
		}
	}

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	fn recorder(state: &mut FilterBarState) -> Rc<RefCell<Vec<FilterState>>> {
		let seen = Rc::new(RefCell::new(Vec::new()));
		let sink = Rc::clone(&seen);
		state.on_change(move |filter| sink.borrow_mut().push(filter.clone()));
		seen
	}

	#[test]
	fn tab_width_pads_labels() {
		assert_eq!(tab_width("JS"), 4);
		assert_eq!(tab_width(DEFAULT_MORE_LABEL), 8);
	}

	#[test]
	fn layout_constraints_leave_a_gap_before_tabs() {
		assert_eq!(
			layout_constraints(24, 60),
			[
				Constraint::Length(24),
				Constraint::Length(1),
				Constraint::Min(0)
			]
		);
		assert_eq!(
			layout_constraints(24, 10),
			[
				Constraint::Length(10),
				Constraint::Length(0),
				Constraint::Min(0)
			]
		);
	}

	#[test]
	fn wide_row_shows_every_tab() {
		let mut state = FilterBarState::new(FilterState::default());
		let buf = render(&mut state, 80);

		insta::assert_snapshot!(
			format!("|{}|", row_text(&buf, 25).trim_end()),
			@"| All  Fetch  HTML  JS  CSS  Font  Image|"
		);
		assert!(state.hidden_tabs().is_empty());
	}

	#[test]
	fn narrow_row_collapses_trailing_tabs_behind_more() {
		let mut state = FilterBarState::new(FilterState::default());
		let buf = render(&mut state, 60);

		insta::assert_snapshot!(
			format!("|{}|", row_text(&buf, 25)),
			@"| All  Fetch  HTML  JS  CSS  More ▼ |"
		);
		assert_eq!(
			state.hidden_tabs(),
			&[ResourceType::Font, ResourceType::Image]
		);
	}

	#[test]
	fn selected_tab_survives_narrowing() {
		let filter = FilterState::default().with_resource_type(ResourceType::Image);
		let mut state = FilterBarState::new(filter);
		let mut previous_hidden = 0;
		for width in (0..=80).rev() {
			let buf = render(&mut state, width);
			assert!(!state.hidden_tabs().contains(&ResourceType::Image));
			assert!(state.hidden_tabs().len() >= previous_hidden);
			previous_hidden = state.hidden_tabs().len();
			if width >= 25 + 7 {
				assert!(
					row_text(&buf, 25).contains("Image"),
					"Image missing at width {width}"
				);
			}
		}
	}

	#[test]
	fn search_box_shows_the_query() {
		let mut state = FilterBarState::new(FilterState::new("api", ResourceType::All));
		let buf = render(&mut state, 60);
		let search: String = (0..24).map(|x| buf[(x, 0)].symbol()).collect();
		assert!(search.starts_with("api"));
	}

	#[test]
	fn clicking_tabs_selects_and_notifies() {
		let mut state = FilterBarState::new(FilterState::default());
		let seen = recorder(&mut state);
		render(&mut state, 60);

		assert_eq!(state.hit_test(25, 0), Some(TabHit::Tab(ResourceType::All)));
		assert_eq!(state.hit_test(31, 0), Some(TabHit::Tab(ResourceType::Fetch)));
		assert_eq!(state.hit_test(52, 0), Some(TabHit::More));
		assert_eq!(state.hit_test(10, 0), None);

		assert!(state.handle_mouse(click(38)));
		assert_eq!(state.filter_state().resource_type, ResourceType::Html);
		// clicking the already selected tab is not an edit
		render(&mut state, 60);
		assert!(!state.handle_mouse(click(38)));
		assert_eq!(seen.borrow().len(), 1);
	}

	#[test]
	fn more_selects_the_first_hidden_tab() {
		let mut state = FilterBarState::new(FilterState::default());
		let seen = recorder(&mut state);
		render(&mut state, 60);

		assert!(state.handle_mouse(click(55)));
		assert_eq!(state.filter_state().resource_type, ResourceType::Font);
		assert_eq!(
			seen.borrow().last().map(|filter| filter.resource_type),
			Some(ResourceType::Font)
		);

		let buf = render(&mut state, 60);
		assert!(row_text(&buf, 25).contains("Font"));
		assert!(!state.hidden_tabs().contains(&ResourceType::Font));
	}

	#[test]
	fn right_clicks_are_ignored() {
		let mut state = FilterBarState::new(FilterState::default());
		render(&mut state, 60);
		let mut event = click(38);
		event.kind = MouseEventKind::Down(MouseButton::Right);
		assert!(!state.handle_mouse(event));
	}

	#[test]
	fn keys_edit_search_and_cycle_tabs() {
		let mut state = FilterBarState::new(FilterState::default());
		let seen = recorder(&mut state);

		assert!(state.handle_key(key(KeyCode::Char('j'))));
		assert!(state.handle_key(key(KeyCode::Char('s'))));
		assert!(state.handle_key(key(KeyCode::Tab)));
		assert!(state.handle_key(key(KeyCode::BackTab)));
		assert!(state.handle_key(key(KeyCode::BackTab)));
		assert!(!state.handle_key(key(KeyCode::Enter)));

		assert_eq!(
			state.filter_state(),
			&FilterState::new("js", ResourceType::Image)
		);
		let seen = seen.borrow();
		assert_eq!(seen.len(), 5);
		assert_eq!(seen[0].search_value, "j");
		assert_eq!(seen[2].resource_type, ResourceType::Fetch);
	}

	#[test]
	fn host_updates_do_not_notify() {
		let mut state = FilterBarState::new(FilterState::default());
		let seen = recorder(&mut state);

		state.set_filter_state(FilterState::new("css", ResourceType::Css));
		assert!(seen.borrow().is_empty());
		assert!(state.handle_key(key(KeyCode::Backspace)));
		assert_eq!(state.filter_state().search_value, "cs");
	}

	#[test]
	fn custom_more_label_changes_the_reserve() {
		let options = FilterBarOptions {
			more_label: "…".to_string(),
			..FilterBarOptions::default()
		};
		let mut state = FilterBarState::with_options(FilterState::default(), options);
		let buf = render(&mut state, 60);
		// budget 35 - 3 - 5 = 27 keeps Fetch, HTML, JS, CSS, and Font would reach 28
		assert_eq!(
			state.hidden_tabs(),
			&[ResourceType::Font, ResourceType::Image]
		);
		assert!(row_text(&buf, 25).contains(" … "));
	}
}
