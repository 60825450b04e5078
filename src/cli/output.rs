use anyhow::Result;
use vitrine_query::format_price;
use vitrine_tui::SelectionOutcome;

/// Format the outcome as a single tab-separated line, if a product was chosen.
pub(crate) fn format_plain(outcome: &SelectionOutcome) -> Option<String> {
	if !outcome.accepted {
		return None;
	}
	outcome
		.product
		.as_ref()
		.map(|product| format!("{}\t{}", product.name, format_price(product.price)))
}

/// Print a plain-text representation of the selection outcome.
pub(crate) fn print_plain(outcome: &SelectionOutcome) {
	if let Some(line) = format_plain(outcome) {
		println!("{line}");
	}
}

/// Format the outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SelectionOutcome) -> Result<String> {
	Ok(serde_json::to_string_pretty(outcome)?)
}

/// Print the JSON representation of the selection outcome.
pub(crate) fn print_json(outcome: &SelectionOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
