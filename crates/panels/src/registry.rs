//! The panel registry: the mutation and query surface over [`PanelGroups`].
//!
//! # Invariants
//!
//! - At most one definition per name across all groups.
//!   - Enforced in: [`PanelRegistry::add`] (checked against `by_name` before insertion).
//! - Every stored definition has a non-empty partial.
//!   - Enforced in: [`PanelDefinition::build`], [`PanelDefinition::validate_update`].
//! - `by_name` maps exactly the names held by `groups` to their group.
//!   - Enforced in: [`PanelRegistry::add`], [`PanelRegistry::remove`], [`PanelRegistry::clear`].
//!
//! Every single-panel mutation validates before touching state, so a failed call
//! leaves the registry as it was.

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::builtins::DEFAULT_PANEL_GROUP;
use crate::config::PanelsConfig;
use crate::deferred::DataContext;
use crate::definition::{PanelDefinition, PanelOptions};
use crate::error::{PanelError, Result};
use crate::panel::Panel;
use crate::store::PanelGroups;

/// Named, grouped, ordered panel definitions.
#[derive(Debug, Clone, Default)]
pub struct PanelRegistry {
	groups: PanelGroups,
	by_name: FxHashMap<String, String>,
}

impl PanelRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a registry holding the default preview panels.
	pub fn with_builtins() -> Self {
		let mut registry = Self::new();
		crate::builtins::register_all(&mut registry);
		registry
	}

	/// Registers a new panel in `group`.
	///
	/// `options` may be a bare partial (`"path/to/partial"`), a [`PanelOptions`], or a
	/// `(partial, PanelOptions)` pair.
	///
	/// # Errors
	///
	/// - [`PanelError::DuplicateName`] if `name` exists in any group.
	/// - [`PanelError::InvalidDefinition`] if no non-empty partial is given.
	pub fn add(&mut self, name: impl Into<String>, group: impl Into<String>, options: impl Into<PanelOptions>) -> Result<()> {
		let name = name.into();
		let group = group.into();

		if self.by_name.contains_key(&name) {
			return Err(PanelError::DuplicateName { name });
		}
		let (def, position) = PanelDefinition::build(&name, &group, options.into())?;

		let index = self.groups.insert(&group, position, def);
		debug!(target: "folio_registry", panel = %name, group = %group, index, "panel added");
		self.by_name.insert(name, group);
		Ok(())
	}

	/// Registers a new panel in [`DEFAULT_PANEL_GROUP`].
	///
	/// # Errors
	///
	/// As for [`PanelRegistry::add`].
	pub fn define(&mut self, name: impl Into<String>, options: impl Into<PanelOptions>) -> Result<()> {
		self.add(name, DEFAULT_PANEL_GROUP, options)
	}

	/// Merges `options` into an existing panel.
	///
	/// The `name` carried by `options` is ignored. A `position` moves the panel
	/// within its own group, normalized against the group size after detaching it.
	///
	/// # Errors
	///
	/// - [`PanelError::NotFound`] if no panel is named `name`.
	/// - [`PanelError::InvalidDefinition`] if `options` carries an empty partial.
	pub fn update(&mut self, name: &str, options: impl Into<PanelOptions>) -> Result<()> {
		let options = options.into();
		let def = self.groups.find_by_name_mut(name).ok_or_else(|| PanelError::not_found(name))?;
		def.validate_update(&options)?;

		let position = options.position;
		def.merge(options);

		if position.is_some()
			&& let Some(index) = self.groups.reposition(name, position)
		{
			debug!(target: "folio_registry", panel = %name, index, "panel moved");
		}
		debug!(target: "folio_registry", panel = %name, "panel updated");
		Ok(())
	}

	/// Removes a panel, returning its definition.
	///
	/// # Errors
	///
	/// [`PanelError::NotFound`] if no panel is named `name`.
	pub fn remove(&mut self, name: &str) -> Result<PanelDefinition> {
		let (def, index) = self.groups.remove_by_name(name).ok_or_else(|| PanelError::not_found(name))?;
		self.by_name.remove(name);
		debug!(target: "folio_registry", panel = %name, group = %def.group(), index, "panel removed");
		Ok(def)
	}

	/// Removes every panel and group.
	pub fn clear(&mut self) {
		self.groups.clear();
		self.by_name.clear();
		debug!(target: "folio_registry", "panel registry cleared");
	}

	/// Finds a definition by name, optionally only within `group`.
	pub fn find(&self, name: &str, group: Option<&str>) -> Option<&PanelDefinition> {
		match (self.by_name.get(name), group) {
			(None, _) => None,
			(Some(owner), Some(group)) if owner != group => None,
			(Some(owner), _) => self.groups.find_by_name(name, Some(owner.as_str())),
		}
	}

	pub fn contains(&self, name: &str) -> bool {
		self.by_name.contains_key(name)
	}

	/// Number of panels in `group`, or in the whole registry.
	pub fn count(&self, group: Option<&str>) -> usize {
		self.groups.count_in(group)
	}

	/// Definitions in `group` (or all groups), in display order.
	pub fn list(&self, group: Option<&str>) -> Vec<&PanelDefinition> {
		self.groups.members(group).collect()
	}

	/// Members of `group` in display order; empty for unknown groups.
	pub fn in_group(&self, group: &str) -> &[PanelDefinition] {
		self.groups.all_in_group(group)
	}

	/// Names of groups that currently have members, in first-use order.
	pub fn groups(&self) -> impl Iterator<Item = &str> {
		self.groups.group_names()
	}

	pub fn is_empty(&self) -> bool {
		self.by_name.is_empty()
	}

	/// Resolves one panel against `data`.
	///
	/// # Errors
	///
	/// [`PanelError::NotFound`] if no panel is named `name`.
	pub fn resolve(&self, name: &str, data: &DataContext) -> Result<Panel> {
		let def = self.find(name, None).ok_or_else(|| PanelError::not_found(name))?;
		trace!(target: "folio_registry", panel = %name, "resolving panel");
		Ok(Panel::resolve(def, data))
	}

	/// Resolves every member of `group` in order. Unknown groups yield nothing.
	pub fn resolve_group(&self, group: &str, data: &DataContext) -> Vec<Panel> {
		self.in_group(group).iter().map(|def| Panel::resolve(def, data)).collect()
	}

	/// Resolves every panel, group order then member order.
	pub fn resolve_all(&self, data: &DataContext) -> Vec<Panel> {
		self.groups.members(None).map(|def| Panel::resolve(def, data)).collect()
	}

	/// Adds every entry of `config`, group by group.
	///
	/// Entries are applied until the first failure, which is returned. Entries added
	/// before the failure stay registered; nothing is rolled back.
	pub fn load_config(&mut self, config: &PanelsConfig) -> Result<()> {
		let before = self.count(None);
		for (group, entries) in config.groups() {
			for entry in entries {
				let name = entry.name.clone().unwrap_or_default();
				if name.trim().is_empty() {
					return Err(PanelError::missing_name(&name));
				}
				self.add(name, group.as_str(), entry.to_options())?;
			}
		}
		debug!(target: "folio_registry", added = self.count(None) - before, "panel config loaded");
		Ok(())
	}
}
