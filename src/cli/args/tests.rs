use clap::{CommandFactory, FromArgMatches, Parser};

use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["netfilters"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.initial_type.is_none());
}

#[test]
fn filter_flags_are_captured() {
	let parsed = CliArgs::parse_from([
		"netfilters",
		"--query",
		"api",
		"--type",
		"fetch",
		"--search-width",
		"30",
		"--output",
		"json",
	]);
	assert_eq!(parsed.initial_query.as_deref(), Some("api"));
	assert_eq!(parsed.initial_type.as_deref(), Some("fetch"));
	assert_eq!(parsed.search_width, Some(30));
	assert_eq!(parsed.output, OutputFormat::Json);
}

#[test]
fn version_banner_names_the_log_file() {
	let version = CliArgs::command().render_long_version();
	assert!(version.contains("user config:"));
	assert!(version.contains("log file:"));
}
