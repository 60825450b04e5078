use anyhow::{Context, Result};
use log::info;
use vitrine_query::{FetchWorker, HttpProductSource};
use vitrine_tui::{App, SelectionOutcome, default_theme};

use crate::settings::ResolvedConfig;

/// Builds the HTTP transport and fetch worker, then runs the browser.
pub(crate) struct BrowseWorkflow {
	config: ResolvedConfig,
	source: HttpProductSource,
}

impl BrowseWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let source = HttpProductSource::with_timeout(config.base_url.clone(), config.timeout)
			.context("failed to build the HTTP client")?;
		Ok(Self { config, source })
	}

	pub(crate) fn run(self) -> Result<SelectionOutcome> {
		let Self { config, source } = self;
		info!("browsing products at {}", source.base_url());

		let theme = vitrine_tui::style::by_name(&config.theme).unwrap_or_else(default_theme);
		let (worker, completions) = FetchWorker::spawn(source);
		let app = App::new(config.coordinator_options(), worker)
			.with_completions(completions)
			.with_title(config.title)
			.with_theme(theme)
			.with_initial_query(config.initial_query);

		vitrine_tui::run(app)
	}
}
