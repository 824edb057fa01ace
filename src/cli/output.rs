use anyhow::Result;
use netfilters::FilterOutcome;

/// Print a plain-text representation of the final filter.
pub(crate) fn print_plain(outcome: &FilterOutcome) {
	println!("Type: {}", outcome.filter.resource_type);
	if outcome.filter.search_value.is_empty() {
		println!("Search: (none)");
	} else {
		println!("Search: {}", outcome.filter.search_value);
	}
	println!("Matched: {}/{}", outcome.matched, outcome.total);
}

/// Format the final filter as a JSON string.
pub(crate) fn format_outcome_json(outcome: &FilterOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the final filter.
pub(crate) fn print_json(outcome: &FilterOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use netfilters::{FilterState, ResourceType};
	use serde_json::Value;

	use super::*;

	#[test]
	fn json_format_includes_filter_and_counts() {
		let outcome = FilterOutcome {
			filter: FilterState::new("api", ResourceType::Fetch),
			matched: 3,
			total: 10,
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["filter"]["resource_type"], "Fetch");
		assert_eq!(value["filter"]["search_value"], "api");
		assert_eq!(value["matched"], 3);
		assert_eq!(value["total"], 10);
	}
}
