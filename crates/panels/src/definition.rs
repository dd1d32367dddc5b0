//! Stored panel definitions and the options used to build and update them.

use serde_json::{Map, Value};

use crate::deferred::{Deferred, PanelData};
use crate::error::{PanelError, Result};
use crate::text::titleize;

/// Structured options for [`crate::PanelRegistry::add`] and [`crate::PanelRegistry::update`].
///
/// Every field is optional; `None` means "keep the default" on add and "leave
/// untouched" on update. `name` is only read by bulk loading and is never merged
/// into an existing definition.
#[derive(Debug, Clone, Default)]
pub struct PanelOptions {
	pub name: Option<String>,
	pub partial: Option<String>,
	pub label: Option<Deferred<Option<String>>>,
	pub hotkey: Option<Deferred<Option<String>>>,
	pub disabled: Option<Deferred<bool>>,
	pub show: Option<Deferred<bool>>,
	pub copy: Option<Deferred<Option<String>>>,
	pub locals: Map<String, Value>,
	pub extras: Map<String, Value>,
	/// 1-based insertion position; `0` means front. Never stored.
	pub position: Option<usize>,
}

impl PanelOptions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Options carrying only a partial reference.
	pub fn with_partial(partial: impl Into<String>) -> Self {
		Self {
			partial: Some(partial.into()),
			..Self::default()
		}
	}

	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	pub fn partial(mut self, partial: impl Into<String>) -> Self {
		self.partial = Some(partial.into());
		self
	}

	pub fn label(mut self, label: impl Into<Deferred<Option<String>>>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Label computed per render. Returning `None` falls back to the title-cased name.
	pub fn label_with<F, L>(mut self, f: F) -> Self
	where
		F: Fn(&PanelData) -> L + Send + Sync + 'static,
		L: Into<Option<String>>,
	{
		self.label = Some(Deferred::resolver(move |data| f(data).into()));
		self
	}

	pub fn hotkey(mut self, hotkey: impl Into<Deferred<Option<String>>>) -> Self {
		self.hotkey = Some(hotkey.into());
		self
	}

	pub fn hotkey_with<F>(mut self, f: F) -> Self
	where
		F: Fn(&PanelData) -> Option<String> + Send + Sync + 'static,
	{
		self.hotkey = Some(Deferred::resolver(f));
		self
	}

	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = Some(Deferred::Value(disabled));
		self
	}

	pub fn disabled_with<F>(mut self, f: F) -> Self
	where
		F: Fn(&PanelData) -> bool + Send + Sync + 'static,
	{
		self.disabled = Some(Deferred::resolver(f));
		self
	}

	pub fn show(mut self, show: bool) -> Self {
		self.show = Some(Deferred::Value(show));
		self
	}

	pub fn show_with<F>(mut self, f: F) -> Self
	where
		F: Fn(&PanelData) -> bool + Send + Sync + 'static,
	{
		self.show = Some(Deferred::resolver(f));
		self
	}

	pub fn copy(mut self, copy: impl Into<Deferred<Option<String>>>) -> Self {
		self.copy = Some(copy.into());
		self
	}

	pub fn copy_with<F>(mut self, f: F) -> Self
	where
		F: Fn(&PanelData) -> Option<String> + Send + Sync + 'static,
	{
		self.copy = Some(Deferred::resolver(f));
		self
	}

	pub fn local(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.locals.insert(key.into(), value.into());
		self
	}

	/// Adds a pass-through option. Keys naming a resolved panel field are ignored.
	pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		let key = key.into();
		if !is_reserved(&key) {
			self.extras.insert(key, value.into());
		}
		self
	}

	pub fn position(mut self, position: usize) -> Self {
		self.position = Some(position);
		self
	}

	/// Non-empty partial carried by these options, if any.
	fn effective_partial(&self) -> Option<&str> {
		self.partial.as_deref().filter(|p| !p.trim().is_empty())
	}
}

impl From<&str> for PanelOptions {
	fn from(partial: &str) -> Self {
		Self::with_partial(partial)
	}
}

impl From<String> for PanelOptions {
	fn from(partial: String) -> Self {
		Self::with_partial(partial)
	}
}

/// A partial reference paired with further options; the string wins the `partial` key.
impl<S: Into<String>> From<(S, PanelOptions)> for PanelOptions {
	fn from((partial, options): (S, PanelOptions)) -> Self {
		options.partial(partial)
	}
}

/// A registered panel's static configuration.
#[derive(Debug, Clone)]
pub struct PanelDefinition {
	name: String,
	group: String,
	partial: String,
	label: Deferred<Option<String>>,
	hotkey: Deferred<Option<String>>,
	disabled: Deferred<bool>,
	show: Deferred<bool>,
	copy: Deferred<Option<String>>,
	locals: Map<String, Value>,
	extras: Map<String, Value>,
}

impl PanelDefinition {
	/// Layers `options` over the registry defaults.
	///
	/// Returns the definition and the transient insertion position.
	pub(crate) fn build(name: &str, group: &str, options: PanelOptions) -> Result<(Self, Option<usize>)> {
		if name.trim().is_empty() {
			return Err(PanelError::missing_name(name));
		}
		let partial = options.effective_partial().ok_or_else(|| PanelError::missing_partial(name))?.to_string();

		let definition = Self {
			name: name.to_string(),
			group: group.to_string(),
			partial,
			label: options.label.unwrap_or_else(default_label),
			hotkey: options.hotkey.unwrap_or(Deferred::Value(None)),
			disabled: options.disabled.unwrap_or(Deferred::Value(false)),
			show: options.show.unwrap_or(Deferred::Value(true)),
			copy: options.copy.unwrap_or(Deferred::Value(None)),
			locals: options.locals,
			extras: without_reserved(name, options.extras),
		};
		Ok((definition, options.position))
	}

	/// Checks that `options` can be merged without breaking stored invariants.
	pub(crate) fn validate_update(&self, options: &PanelOptions) -> Result<()> {
		match &options.partial {
			Some(partial) if partial.trim().is_empty() => Err(PanelError::missing_partial(&self.name)),
			_ => Ok(()),
		}
	}

	/// Merges `options` into this definition. `name` and `position` are ignored.
	pub(crate) fn merge(&mut self, options: PanelOptions) {
		let PanelOptions {
			name: _,
			partial,
			label,
			hotkey,
			disabled,
			show,
			copy,
			locals,
			extras,
			position: _,
		} = options;

		if let Some(partial) = partial {
			self.partial = partial;
		}
		if let Some(label) = label {
			self.label = label;
		}
		if let Some(hotkey) = hotkey {
			self.hotkey = hotkey;
		}
		if let Some(disabled) = disabled {
			self.disabled = disabled;
		}
		if let Some(show) = show {
			self.show = show;
		}
		if let Some(copy) = copy {
			self.copy = copy;
		}
		self.locals.extend(locals);
		self.extras.extend(without_reserved(&self.name, extras));
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn group(&self) -> &str {
		&self.group
	}

	pub fn partial(&self) -> &str {
		&self.partial
	}

	pub fn label(&self) -> &Deferred<Option<String>> {
		&self.label
	}

	pub fn hotkey(&self) -> &Deferred<Option<String>> {
		&self.hotkey
	}

	pub fn disabled(&self) -> &Deferred<bool> {
		&self.disabled
	}

	pub fn show(&self) -> &Deferred<bool> {
		&self.show
	}

	pub fn copy(&self) -> &Deferred<Option<String>> {
		&self.copy
	}

	pub fn locals(&self) -> &Map<String, Value> {
		&self.locals
	}

	pub fn extras(&self) -> &Map<String, Value> {
		&self.extras
	}
}

fn default_label() -> Deferred<Option<String>> {
	Deferred::resolver(|data: &PanelData| Some(titleize(data.name())))
}

/// Field names of a resolved [`crate::Panel`]; extras may not shadow them.
pub const RESERVED_KEYS: &[&str] = &["name", "group", "dom_id", "partial", "label", "hotkey", "disabled", "show", "copy", "locals", "position"];

fn is_reserved(key: &str) -> bool {
	RESERVED_KEYS.contains(&key)
}

fn without_reserved(panel: &str, mut extras: Map<String, Value>) -> Map<String, Value> {
	extras.retain(|key, _| {
		let keep = !is_reserved(key);
		if !keep {
			tracing::warn!(panel, key = %key, "reserved panel option ignored");
		}
		keep
	});
	extras
}
