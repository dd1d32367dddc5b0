//! Cross-module scenarios: config loading, builtins, and resolution together.

use serde_json::json;

use crate::{DEFAULT_PANEL_GROUP, DataContext, PanelError, PanelOptions, PanelRegistry, PanelsConfig};

#[test]
fn source_panel_end_to_end() {
	let mut registry = PanelRegistry::new();
	registry
		.add("source", "drawer", PanelOptions::with_partial("panels/source").hotkey("s"))
		.expect("add");

	let panel = registry.resolve("source", &DataContext::new()).expect("resolve");
	assert_eq!(panel.hotkey(), Some("s"));
	assert!(!panel.disabled());
	assert!(panel.show());
	assert_eq!(panel.label(), "Source");
	assert_eq!(panel.partial(), "panels/source");
	assert_eq!(panel.dom_id(), "folio-panel-source");
}

#[test]
fn config_extends_builtins() {
	let config = PanelsConfig::from_json_str(
		r#"{
			"drawer": [
				{ "name": "a11y", "partial": "panels/a11y", "label": "Accessibility", "position": 2, "icon": "eye" }
			]
		}"#,
	)
	.expect("valid json");

	let mut registry = PanelRegistry::with_builtins();
	registry.load_config(&config).expect("load");

	let drawer: Vec<_> = registry
		.resolve_group(DEFAULT_PANEL_GROUP, &DataContext::new())
		.into_iter()
		.map(|p| (p.name().to_string(), p.label().to_string()))
		.collect();
	assert_eq!(
		drawer,
		[
			("source".to_string(), "Source".to_string()),
			("a11y".to_string(), "Accessibility".to_string()),
			("notes".to_string(), "Notes".to_string()),
			("params".to_string(), "Params".to_string()),
		]
	);

	let a11y = registry.resolve("a11y", &DataContext::new()).expect("resolve");
	assert_eq!(a11y.extras().get("icon"), Some(&json!("eye")));
}

#[test]
fn config_cannot_redefine_builtin() {
	let config = PanelsConfig::from_toml_str(
		r#"
		[[main]]
		name = "preview"
		partial = "custom/preview"
		"#,
	)
	.expect("valid toml");

	let mut registry = PanelRegistry::with_builtins();
	let err = registry.load_config(&config).expect_err("duplicate");
	assert_eq!(err, PanelError::DuplicateName { name: "preview".into() });
	assert_eq!(registry.find("preview", None).map(|d| d.partial()), Some("folio/previews/panels/preview"));
}

#[test]
fn update_then_resolve_reflects_merge() {
	let mut registry = PanelRegistry::with_builtins();
	registry
		.update("params", PanelOptions::new().label_with(|data| format!("{} ({})", data.name(), data.lookup("preview.count").map_or(0, |c| c.as_u64().unwrap_or(0)))))
		.expect("update");

	let data = json!({ "preview": { "count": 3, "params": [1, 2, 3] } });
	let panel = registry.resolve("params", data.as_object().expect("object")).expect("resolve");
	assert_eq!(panel.label(), "params (3)");
	assert!(!panel.disabled());
}
