//! Default preview panels.
//!
//! The data context the deferred fields read:
//!
//! - `examples`: array of objects with optional `source` and `notes` strings.
//! - `preview.params`: array (or object) of preview parameters.

use serde_json::Value;

use crate::deferred::{PanelData, is_present};
use crate::definition::PanelOptions;
use crate::registry::PanelRegistry;

/// Group that panels land in when the host does not name one.
pub const DEFAULT_PANEL_GROUP: &str = "drawer";

/// Group holding the primary preview/output panels.
pub const MAIN_PANEL_GROUP: &str = "main";

/// Registers the default panels into `registry`, skipping names already taken.
pub fn register_all(registry: &mut PanelRegistry) {
	for (name, group, options) in defaults() {
		if registry.contains(name) {
			tracing::debug!(panel = name, "builtin panel shadowed");
			continue;
		}
		if let Err(e) = registry.add(name, group, options) {
			tracing::error!("Builtin panel registration failed: {}", e);
		}
	}
}

fn defaults() -> Vec<(&'static str, &'static str, PanelOptions)> {
	vec![
		(
			"preview",
			MAIN_PANEL_GROUP,
			PanelOptions::with_partial("folio/previews/panels/preview")
				.hotkey("v")
				.extra("panel_classes", "overflow-hidden"),
		),
		(
			"output",
			MAIN_PANEL_GROUP,
			PanelOptions::with_partial("folio/previews/panels/output").label("HTML").hotkey("h"),
		),
		(
			"source",
			DEFAULT_PANEL_GROUP,
			PanelOptions::with_partial("folio/previews/panels/source")
				.label("Source")
				.hotkey("s")
				.copy_with(example_sources),
		),
		(
			"notes",
			DEFAULT_PANEL_GROUP,
			PanelOptions::with_partial("folio/previews/panels/notes")
				.label("Notes")
				.hotkey("n")
				.disabled_with(|data| !examples(data).any(|e| e.get("notes").is_some_and(is_present))),
		),
		(
			"params",
			DEFAULT_PANEL_GROUP,
			PanelOptions::with_partial("folio/previews/panels/params")
				.label("Params")
				.hotkey("p")
				.disabled_with(|data| !data.is_present("preview.params")),
		),
	]
}

fn examples(data: &PanelData) -> impl Iterator<Item = &Value> {
	data.get("examples").and_then(Value::as_array).into_iter().flatten()
}

fn example_sources(data: &PanelData) -> Option<String> {
	let sources: Vec<&str> = examples(data).filter_map(|e| e.get("source").and_then(Value::as_str)).collect();
	(!sources.is_empty()).then(|| sources.join("\n"))
}
