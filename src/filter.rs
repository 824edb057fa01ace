use serde::{Deserialize, Serialize};

use crate::requests::RequestEntry;
use crate::resource_type::ResourceType;

/// The value object the filter bar edits: free-text search plus the selected
/// resource tab.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
	pub search_value: String,
	pub resource_type: ResourceType,
}

impl FilterState {
	pub fn new(search_value: impl Into<String>, resource_type: ResourceType) -> Self {
		Self {
			search_value: search_value.into(),
			resource_type,
		}
	}

	#[must_use]
	pub fn with_search_value(&self, search_value: impl Into<String>) -> Self {
		Self {
			search_value: search_value.into(),
			..self.clone()
		}
	}

	#[must_use]
	pub fn with_resource_type(&self, resource_type: ResourceType) -> Self {
		Self {
			resource_type,
			..self.clone()
		}
	}

	/// Whether `entry` passes both the search text and the resource tab.
	#[must_use]
	pub fn matches(&self, entry: &RequestEntry) -> bool {
		self.matches_search(entry) && matches_type(self.resource_type, entry)
	}

	fn matches_search(&self, entry: &RequestEntry) -> bool {
		if self.search_value.is_empty() {
			return true;
		}
		entry
			.url
			.to_lowercase()
			.contains(&self.search_value.to_lowercase())
	}
}

fn matches_type(resource_type: ResourceType, entry: &RequestEntry) -> bool {
	let essence = entry.essence();
	match resource_type {
		ResourceType::All => true,
		ResourceType::Fetch => {
			let kind = entry.kind.to_ascii_lowercase();
			kind == "fetch" || kind == "xhr"
		}
		ResourceType::Html => essence == "text/html",
		ResourceType::Js => essence.contains("javascript"),
		ResourceType::Css => essence == "text/css",
		ResourceType::Font => essence.starts_with("font/") || essence.contains("font"),
		ResourceType::Image => essence.starts_with("image/"),
	}
}
