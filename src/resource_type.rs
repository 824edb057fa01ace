use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Resource categories offered as filter tabs, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResourceType {
	#[default]
	All,
	Fetch,
	Html,
	Js,
	Css,
	Font,
	Image,
}

/// Returned when a label does not name any [`ResourceType`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown resource type '{label}' (expected one of: {expected})")]
pub struct UnknownResourceType {
	pub label: String,
	expected: String,
}

impl ResourceType {
	/// Every resource type in the order the tabs are drawn.
	pub const ALL: [ResourceType; 7] = [
		ResourceType::All,
		ResourceType::Fetch,
		ResourceType::Html,
		ResourceType::Js,
		ResourceType::Css,
		ResourceType::Font,
		ResourceType::Image,
	];

	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			ResourceType::All => "All",
			ResourceType::Fetch => "Fetch",
			ResourceType::Html => "HTML",
			ResourceType::Js => "JS",
			ResourceType::Css => "CSS",
			ResourceType::Font => "Font",
			ResourceType::Image => "Image",
		}
	}

	/// Position of this type within [`ResourceType::ALL`].
	#[must_use]
	pub fn index(self) -> usize {
		Self::ALL
			.iter()
			.position(|candidate| *candidate == self)
			.unwrap_or(0)
	}

	/// The following type in display order, wrapping around.
	#[must_use]
	pub fn next(self) -> Self {
		Self::ALL[(self.index() + 1) % Self::ALL.len()]
	}

	/// The preceding type in display order, wrapping around.
	#[must_use]
	pub fn previous(self) -> Self {
		let len = Self::ALL.len();
		Self::ALL[(self.index() + len - 1) % len]
	}
}

impl fmt::Display for ResourceType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

impl FromStr for ResourceType {
	type Err = UnknownResourceType;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let trimmed = value.trim();
		Self::ALL
			.into_iter()
			.find(|candidate| candidate.label().eq_ignore_ascii_case(trimmed))
			.ok_or_else(|| UnknownResourceType {
				label: trimmed.to_string(),
				expected: Self::ALL.map(ResourceType::label).join(", "),
			})
	}
}

impl Serialize for ResourceType {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.label())
	}
}

impl<'de> Deserialize<'de> for ResourceType {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let label = String::deserialize(deserializer)?;
		label.parse().map_err(serde::de::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_order_matches_tab_row() {
		let labels: Vec<_> = ResourceType::ALL.iter().map(|rt| rt.label()).collect();
		assert_eq!(
			labels,
			["All", "Fetch", "HTML", "JS", "CSS", "Font", "Image"]
		);
	}

	#[test]
	fn parsing_ignores_case_and_whitespace() {
		assert_eq!(" html ".parse::<ResourceType>(), Ok(ResourceType::Html));
		assert_eq!("image".parse::<ResourceType>(), Ok(ResourceType::Image));
	}

	#[test]
	fn unknown_labels_list_the_expected_values() {
		let err = "media".parse::<ResourceType>().unwrap_err();
		assert_eq!(err.label, "media");
		assert!(err.to_string().contains("All, Fetch, HTML, JS, CSS, Font, Image"));
	}

	#[test]
	fn navigation_wraps_around() {
		assert_eq!(ResourceType::Image.next(), ResourceType::All);
		assert_eq!(ResourceType::All.previous(), ResourceType::Image);
		assert_eq!(ResourceType::Html.next(), ResourceType::Js);
	}

	#[test]
	fn serde_uses_labels() {
		let json = serde_json::to_string(&ResourceType::Css).unwrap();
		assert_eq!(json, "\"CSS\"");
		let parsed: ResourceType = serde_json::from_str("\"fetch\"").unwrap();
		assert_eq!(parsed, ResourceType::Fetch);
	}
}
