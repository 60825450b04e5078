use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{LogLevelArg, OutputFormat, PageRefreshArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `vitrine` binary.
#[derive(Parser, Debug)]
#[command(
	name = "vitrine",
	version,
	long_version = long_version(),
	about = "Browse a remote product catalogue with debounced search and pagination",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "VITRINE_CONFIG",
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
		short = 'b',
		long = "base-url",
		value_name = "URL",
		help = "Base URL of the product API (default: http://127.0.0.1:8000)"
	)]
	pub(crate) base_url: Option<String>,
	#[arg(
		long = "timeout-ms",
		value_name = "MS",
		help = "Request timeout in milliseconds (default: 10000)"
	)]
	pub(crate) timeout_ms: Option<u64>,
	#[arg(
		short = 'd',
		long = "debounce-ms",
		value_name = "MS",
		help = "Quiet period before a search or page change is fetched (default: 500)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		long = "page-refresh",
		value_enum,
		help = "Whether page changes wait for the debounce delay (default: debounced)"
	)]
	pub(crate) page_refresh: Option<PageRefreshArg>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the prompt and table title (default: Products)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "log-level",
		value_enum,
		help = "Minimum level recorded in the log console (default: info)"
	)]
	pub(crate) log_level: Option<LogLevelArg>,
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
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
