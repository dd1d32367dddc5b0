//! Resolved panels, produced fresh for every render.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::deferred::{DataContext, PanelData};
use crate::definition::PanelDefinition;
use crate::text::{slugify, titleize};

/// Prefix keeping DOM ids from starting with a digit.
pub const ID_PREFIX: &str = "folio-panel";

/// A [`PanelDefinition`] with every deferred field evaluated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
	name: String,
	group: String,
	dom_id: String,
	partial: String,
	label: String,
	hotkey: Option<String>,
	disabled: bool,
	show: bool,
	copy: Option<String>,
	locals: Map<String, Value>,
	#[serde(flatten)]
	extras: Map<String, Value>,
}

impl Panel {
	/// Evaluates `def` against `data` with the panel's name merged in.
	///
	/// Each deferred field is invoked exactly once.
	pub fn resolve(def: &PanelDefinition, data: &DataContext) -> Self {
		let ctx = PanelData::new(def.name(), data);

		Self {
			name: def.name().to_string(),
			group: def.group().to_string(),
			dom_id: dom_id(def.name()),
			partial: def.partial().to_string(),
			label: def.label().resolve(&ctx).unwrap_or_else(|| titleize(def.name())),
			hotkey: def.hotkey().resolve(&ctx),
			disabled: def.disabled().resolve(&ctx),
			show: def.show().resolve(&ctx),
			copy: def.copy().resolve(&ctx),
			locals: def.locals().clone(),
			extras: def.extras().clone(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn group(&self) -> &str {
		&self.group
	}

	/// Identifier safe for use as a UI element id.
	pub fn dom_id(&self) -> &str {
		&self.dom_id
	}

	pub fn partial(&self) -> &str {
		&self.partial
	}

	pub fn label(&self) -> &str {
		&self.label
	}

	pub fn hotkey(&self) -> Option<&str> {
		self.hotkey.as_deref()
	}

	pub fn disabled(&self) -> bool {
		self.disabled
	}

	pub fn show(&self) -> bool {
		self.show
	}

	pub fn copy(&self) -> Option<&str> {
		self.copy.as_deref()
	}

	pub fn locals(&self) -> &Map<String, Value> {
		&self.locals
	}

	pub fn extras(&self) -> &Map<String, Value> {
		&self.extras
	}
}

/// `"{ID_PREFIX}-{slug}"`, or just the prefix for names without alphanumerics.
pub fn dom_id(name: &str) -> String {
	let slug = slugify(name);
	if slug.is_empty() { ID_PREFIX.to_string() } else { format!("{ID_PREFIX}-{slug}") }
}
