mod cli;
mod settings;

use anyhow::{Context, Result};
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use netfilters::{App, load_requests, sample_requests};
use settings::ResolvedConfig;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in netfilters::tui::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	if let Err(err) = netfilters::logging::initialize() {
		eprintln!("logging disabled: {err:#}");
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_filters(cli.output, resolved)
}

/// Run the interactive filter view and print the final filter in the chosen
/// format.
fn run_filters(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let entries = match &settings.requests_file {
		Some(path) => load_requests(path)
			.with_context(|| format!("unable to load requests from {}", path.display()))?,
		None => sample_requests(),
	};

	let app = App::new(entries, settings.filter, settings.bar, settings.theme);
	let outcome = netfilters::run(app)?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
