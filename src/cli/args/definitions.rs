use std::path::PathBuf;
use std::sync::OnceLock;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{ArgAction, ColorChoice, Parser};
use netfilters::{app_dirs, logging};

use super::options::OutputFormat;

/// `--version` output: where the user config file is read from and where the
/// log file goes.
fn version_banner() -> &'static str {
	static BANNER: OnceLock<String> = OnceLock::new();
	BANNER.get_or_init(|| {
		let describe = |path: anyhow::Result<PathBuf>| match path {
			Ok(path) => path.display().to_string(),
			Err(err) => format!("unavailable ({err})"),
		};
		let config_file = describe(app_dirs::get_config_dir().map(|dir| dir.join("config.toml")));
		let log_file = describe(logging::default_log_path());
		format!(
			"{}\nuser config: {config_file}\nlog file: {log_file}",
			env!("CARGO_PKG_VERSION")
		)
	})
}

fn help_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Command-line arguments accepted by the `netfilters` binary.
#[derive(Parser, Debug)]
#[command(
	name = "netfilters",
	version,
	long_version = version_banner(),
	about = "Filter a network request list by resource type and URL text",
	color = ColorChoice::Auto,
	styles = help_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "NETFILTERS_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'r',
		long = "requests",
		value_name = "FILE",
		help = "JSON file with the request list (default: built-in sample)"
	)]
	pub(crate) requests: Option<PathBuf>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "TEXT",
		help = "Initial search text (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		short = 't',
		long = "type",
		value_name = "TYPE",
		help = "Initially selected resource tab: All, Fetch, HTML, JS, CSS, Font or Image (default: All)"
	)]
	pub(crate) initial_type: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "more-label",
		value_name = "TEXT",
		help = "Label of the overflow affordance (default: \"More ▼\")"
	)]
	pub(crate) more_label: Option<String>,
	#[arg(
		long = "placeholder",
		value_name = "TEXT",
		help = "Placeholder shown in the empty search box (default: \"Filter network\")"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		short = 'w',
		long = "search-width",
		value_name = "COLUMNS",
		help = "Columns given to the search box (default: 24)"
	)]
	pub(crate) search_width: Option<u16>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the final filter"
	)]
	pub(crate) output: OutputFormat,
}
