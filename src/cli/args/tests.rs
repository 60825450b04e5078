use clap::{CommandFactory, FromArgMatches, Parser};

use super::options::PageRefreshArg;
use super::{CliArgs, OutputFormat};

#[test]
fn command_has_about_text() {
	let command = CliArgs::command();
	assert!(command.get_about().is_some());
	command.debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["vitrine"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.base_url.is_none());
	assert!(!parsed.no_config);
}

#[test]
fn parse_cli_reads_search_options() {
	let parsed = CliArgs::parse_from([
		"vitrine",
		"--base-url",
		"http://shop.test",
		"--debounce-ms",
		"250",
		"--page-refresh",
		"immediate",
		"-q",
		"mesa",
		"--output",
		"json",
	]);
	assert_eq!(parsed.base_url.as_deref(), Some("http://shop.test"));
	assert_eq!(parsed.debounce_ms, Some(250));
	assert_eq!(parsed.page_refresh, Some(PageRefreshArg::Immediate));
	assert_eq!(parsed.initial_query.as_deref(), Some("mesa"));
	assert_eq!(parsed.output, OutputFormat::Json);
}

#[test]
fn config_flag_can_repeat() {
	let parsed = CliArgs::parse_from(["vitrine", "-c", "a.toml", "-c", "b.toml"]);
	assert_eq!(parsed.config.len(), 2);
}
