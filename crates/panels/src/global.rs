//! Process-wide shared registry.
//!
//! Lifecycle: the host calls [`install`] once at startup with a fully built
//! [`PanelRegistry`]. Afterwards every thread reaches it through [`read`] and
//! [`write`]. [`clear`] empties it in place (test harnesses); there is no way to
//! uninstall or replace the instance.
//!
//! Mutations take the write lock. Resolution holds the read lock for the whole
//! call, so it never observes a half-applied mutation.

use std::sync::OnceLock;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::deferred::DataContext;
use crate::error::{PanelError, Result};
use crate::panel::Panel;
use crate::registry::PanelRegistry;

static PANELS: OnceLock<RwLock<PanelRegistry>> = OnceLock::new();

/// Installs the shared registry.
///
/// # Errors
///
/// [`PanelError::AlreadyInstalled`] if a registry was installed before.
pub fn install(registry: PanelRegistry) -> Result<()> {
	PANELS.set(RwLock::new(registry)).map_err(|_| PanelError::AlreadyInstalled)?;
	tracing::debug!("global panel registry installed");
	Ok(())
}

/// Returns `true` once [`install`] has succeeded.
pub fn is_installed() -> bool {
	PANELS.get().is_some()
}

/// Shared read access, or `None` before [`install`].
pub fn read() -> Option<RwLockReadGuard<'static, PanelRegistry>> {
	PANELS.get().map(RwLock::read)
}

/// Exclusive write access, or `None` before [`install`].
pub fn write() -> Option<RwLockWriteGuard<'static, PanelRegistry>> {
	PANELS.get().map(RwLock::write)
}

/// Resolves `name` under the read lock.
///
/// # Errors
///
/// [`PanelError::NotFound`] if the registry is not installed or has no such panel.
pub fn resolve(name: &str, data: &DataContext) -> Result<Panel> {
	read().ok_or_else(|| PanelError::not_found(name))?.resolve(name, data)
}

/// Resolves every member of `group` under the read lock.
pub fn resolve_group(group: &str, data: &DataContext) -> Vec<Panel> {
	read().map(|registry| registry.resolve_group(group, data)).unwrap_or_default()
}

/// Empties the shared registry in place.
pub fn clear() {
	if let Some(mut registry) = write() {
		registry.clear();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::definition::PanelOptions;

	// The static is process-wide, so one test drives the whole lifecycle.
	#[test]
	fn install_mutate_resolve_clear() {
		install(PanelRegistry::new()).expect("first install");
		assert!(is_installed());
		assert_eq!(install(PanelRegistry::new()), Err(PanelError::AlreadyInstalled));

		write()
			.expect("installed")
			.add("source", "drawer", PanelOptions::with_partial("panels/source").hotkey("s"))
			.expect("add");

		let panel = resolve("source", &DataContext::new()).expect("resolve");
		assert_eq!(panel.hotkey(), Some("s"));
		assert_eq!(resolve_group("drawer", &DataContext::new()).len(), 1);

		std::thread::scope(|s| {
			for i in 0..4 {
				s.spawn(move || {
					write()
						.expect("installed")
						.add(format!("panel_{i}"), "threads", "panels/thread")
						.expect("add from thread");
				});
			}
		});
		assert_eq!(read().expect("installed").count(Some("threads")), 4);

		clear();
		assert!(read().expect("installed").is_empty());
		assert!(matches!(resolve("source", &DataContext::new()), Err(PanelError::NotFound { .. })));
	}
}
