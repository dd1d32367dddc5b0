//! Bulk-load input for [`crate::PanelRegistry::load_config`].
//!
//! The input is a mapping of group name to a list of panel entries:
//!
//! ```toml
//! [[drawer]]
//! name = "source"
//! partial = "folio/previews/panels/source"
//! hotkey = "s"
//!
//! [[drawer]]
//! name = "notes"
//! partial = "folio/previews/panels/notes"
//! position = 1
//! ```
//!
//! Values read from text are always literal; deferred fields can only be supplied
//! from code.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::deferred::Deferred;
use crate::definition::PanelOptions;

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("JSON parse error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("failed to read {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("unsupported config format: {0} (expected .toml or .json)")]
	UnsupportedFormat(PathBuf),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// One panel entry as written in a config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelEntry {
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default)]
	pub partial: Option<String>,
	#[serde(default)]
	pub label: Option<String>,
	#[serde(default)]
	pub hotkey: Option<String>,
	#[serde(default)]
	pub disabled: Option<bool>,
	#[serde(default)]
	pub show: Option<bool>,
	#[serde(default)]
	pub copy: Option<String>,
	#[serde(default)]
	pub locals: Map<String, Value>,
	#[serde(default)]
	pub position: Option<usize>,
	/// Unrecognized keys, carried through to the resolved panel. Keys naming a
	/// resolved panel field (`group`, `dom_id`, ...) are dropped on registration.
	#[serde(flatten)]
	pub extras: Map<String, Value>,
}

impl PanelEntry {
	/// Converts this entry into registry options. `name` is carried but not required here.
	pub fn to_options(&self) -> PanelOptions {
		PanelOptions {
			name: self.name.clone(),
			partial: self.partial.clone(),
			label: self.label.clone().map(|l| Deferred::Value(Some(l))),
			hotkey: self.hotkey.clone().map(|h| Deferred::Value(Some(h))),
			disabled: self.disabled.map(Deferred::Value),
			show: self.show.map(Deferred::Value),
			copy: self.copy.clone().map(|c| Deferred::Value(Some(c))),
			locals: self.locals.clone(),
			extras: self.extras.clone(),
			position: self.position,
		}
	}
}

/// Group name → ordered panel entries. Groups keep their source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelsConfig {
	groups: IndexMap<String, Vec<PanelEntry>>,
}

impl PanelsConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_toml_str(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	pub fn from_json_str(input: &str) -> Result<Self> {
		Ok(serde_json::from_str(input)?)
	}

	/// Reads a config file, choosing the parser from its extension.
	pub fn from_path(path: &Path) -> Result<Self> {
		let parse: fn(&str) -> Result<Self> = match path.extension().and_then(|e| e.to_str()) {
			Some("toml") => Self::from_toml_str,
			Some("json") => Self::from_json_str,
			_ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
		};
		let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		parse(&content)
	}

	/// Appends an entry to `group`.
	pub fn push(&mut self, group: impl Into<String>, entry: PanelEntry) {
		self.groups.entry(group.into()).or_default().push(entry);
	}

	pub fn groups(&self) -> impl Iterator<Item = (&String, &Vec<PanelEntry>)> {
		self.groups.iter()
	}

	/// Total number of entries across groups.
	pub fn len(&self) -> usize {
		self.groups.values().map(Vec::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
