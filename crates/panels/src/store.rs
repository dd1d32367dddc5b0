//! Group-partitioned, insertion-ordered definition storage.
//!
//! # Invariants
//!
//! - Members of a group keep the order produced by [`normalize_position`]; nothing
//!   here sorts.
//! - A group exists only while it has at least one member. Reads never create groups.
//! - Name uniqueness is NOT enforced here. [`crate::PanelRegistry`] checks it before
//!   calling [`PanelGroups::insert`].

use indexmap::IndexMap;

use crate::definition::PanelDefinition;

/// Converts a 1-based position (`0` = front) into an insertion index.
///
/// An absent position appends; any position past the end clamps to append.
pub fn normalize_position(position: Option<usize>, count: usize) -> usize {
	let index = match position {
		None => count,
		Some(0) => 0,
		Some(n) => n - 1,
	};
	index.min(count)
}

/// Mapping from group name to its ordered member definitions.
///
/// Groups iterate in first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct PanelGroups {
	groups: IndexMap<String, Vec<PanelDefinition>>,
}

impl PanelGroups {
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts `def` into `group` at the normalized index, creating the group if needed.
	///
	/// Returns the index the definition landed at.
	pub fn insert(&mut self, group: &str, position: Option<usize>, def: PanelDefinition) -> usize {
		let members = self.groups.entry(group.to_string()).or_default();
		let index = normalize_position(position, members.len());
		members.insert(index, def);
		index
	}

	/// Removes the first definition named `name`, returning it with its former index.
	///
	/// Stops at the first group that held a match. A group left empty is dropped.
	pub fn remove_by_name(&mut self, name: &str) -> Option<(PanelDefinition, usize)> {
		let (group_idx, index) = self
			.groups
			.values()
			.enumerate()
			.find_map(|(g, members)| members.iter().position(|d| d.name() == name).map(|i| (g, i)))?;

		let members = &mut self.groups[group_idx];
		let def = members.remove(index);
		if members.is_empty() {
			self.groups.shift_remove_index(group_idx);
		}
		Some((def, index))
	}

	/// Moves the definition named `name` within its own group.
	///
	/// The new index is normalized against the group size after detaching the
	/// definition. Returns the new index, or `None` if no such definition exists.
	pub fn reposition(&mut self, name: &str, position: Option<usize>) -> Option<usize> {
		let (members, current) = self
			.groups
			.values_mut()
			.find_map(|members| members.iter().position(|d| d.name() == name).map(|i| (members, i)))?;

		let def = members.remove(current);
		let index = normalize_position(position, members.len());
		members.insert(index, def);
		Some(index)
	}

	/// Finds a definition by name, optionally restricted to one group.
	pub fn find_by_name(&self, name: &str, group: Option<&str>) -> Option<&PanelDefinition> {
		self.members(group).find(|d| d.name() == name)
	}

	pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut PanelDefinition> {
		self.groups.values_mut().flat_map(|members| members.iter_mut()).find(|d| d.name() == name)
	}

	/// Members of `group` in order; empty for unknown groups.
	pub fn all_in_group(&self, group: &str) -> &[PanelDefinition] {
		self.groups.get(group).map(Vec::as_slice).unwrap_or_default()
	}

	/// Number of definitions in `group`, or in all groups.
	pub fn count_in(&self, group: Option<&str>) -> usize {
		match group {
			Some(group) => self.all_in_group(group).len(),
			None => self.groups.values().map(Vec::len).sum(),
		}
	}

	/// Every definition, group order then member order, optionally restricted to one group.
	pub fn members<'a>(&'a self, group: Option<&str>) -> impl Iterator<Item = &'a PanelDefinition> + use<'a> {
		let range = match group {
			Some(group) => self.groups.get_index_of(group).map_or(0..0, |i| i..i + 1),
			None => 0..self.groups.len(),
		};
		self.groups.get_range(range).into_iter().flat_map(|slice| slice.values()).flatten()
	}

	/// Names of the groups that currently have members.
	pub fn group_names(&self) -> impl Iterator<Item = &str> {
		self.groups.keys().map(String::as_str)
	}

	pub fn is_empty(&self) -> bool {
		self.groups.is_empty()
	}

	pub fn clear(&mut self) {
		self.groups.clear();
	}
}

#[cfg(test)]
mod tests;
