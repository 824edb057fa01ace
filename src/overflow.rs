//! Responsive overflow for the resource tab row.
//!
//! Given the measured width of every tab and the width of the container, the
//! pass decides which tabs collapse behind the "More" affordance. The selected
//! tab is accounted for before any other tab so it can never be hidden, and
//! the remaining tabs are kept in display order until the first one that does
//! not fit; that tab and every later one are hidden. Keeping the hidden set a
//! suffix makes the hidden count monotone in the container width.

use crate::resource_type::ResourceType;

/// Outcome of one overflow pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TabLayout {
	hidden: Vec<ResourceType>,
}

impl TabLayout {
	/// Tabs collapsed behind "More", in display order.
	#[must_use]
	pub fn hidden(&self) -> &[ResourceType] {
		&self.hidden
	}

	#[must_use]
	pub fn is_hidden(&self, resource_type: ResourceType) -> bool {
		self.hidden.contains(&resource_type)
	}

	#[must_use]
	pub fn has_overflow(&self) -> bool {
		!self.hidden.is_empty()
	}

	/// Tabs that stay in the row, in display order.
	pub fn visible(&self) -> impl Iterator<Item = ResourceType> + '_ {
		ResourceType::ALL
			.into_iter()
			.filter(|resource_type| !self.is_hidden(*resource_type))
	}
}

/// Decide which tabs to hide.
///
/// `widths` holds the rendered width of each tab in [`ResourceType::ALL`]
/// order; a missing entry counts as zero. `more_reserve` is the width kept
/// free for the "More" affordance once anything overflows.
#[must_use]
pub fn compute_layout(
	widths: &[u16],
	container: u16,
	more_reserve: u16,
	selected: ResourceType,
) -> TabLayout {
	let width_of = |resource_type: ResourceType| -> u32 {
		u32::from(widths.get(resource_type.index()).copied().unwrap_or(0))
	};

	let total: u32 = ResourceType::ALL.into_iter().map(width_of).sum();
	let container = u32::from(container);
	if total <= container {
		return TabLayout::default();
	}

	let budget = container
		.saturating_sub(u32::from(more_reserve))
		.saturating_sub(width_of(selected));

	let mut used = 0u32;
	let mut overflowed = false;
	let mut hidden = Vec::new();
	for resource_type in ResourceType::ALL {
		if resource_type == selected {
			continue;
		}
		let width = width_of(resource_type);
		if overflowed || used + width > budget {
			overflowed = true;
			hidden.push(resource_type);
		} else {
			used += width;
		}
	}

	TabLayout { hidden }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct MeasureKey {
	container: u16,
	more_reserve: u16,
	selected: ResourceType,
}

/// Re-runs [`compute_layout`] only when the inputs of the last measurement
/// changed.
#[derive(Clone, Debug, Default)]
pub struct OverflowCache {
	key: Option<MeasureKey>,
	layout: TabLayout,
}

impl OverflowCache {
	pub fn measure(
		&mut self,
		widths: &[u16],
		container: u16,
		more_reserve: u16,
		selected: ResourceType,
	) -> &TabLayout {
		let key = MeasureKey {
			container,
			more_reserve,
			selected,
		};
		if self.key != Some(key) {
			self.layout = compute_layout(widths, container, more_reserve, selected);
			self.key = Some(key);
			log::debug!(
				"tab overflow recomputed: width={container} selected={selected} hidden={:?}",
				self.layout.hidden()
			);
		}
		&self.layout
	}

	/// The layout from the most recent measurement.
	#[must_use]
	pub fn layout(&self) -> &TabLayout {
		&self.layout
	}

	/// Forget the last measurement so the next call recomputes.
	pub fn invalidate(&mut self) {
		self.key = None;
	}
}
