#![cfg_attr(doc, allow(rustdoc::private_intra_doc_links))]
//! Panel registry for component previews.
//!
//! Panels are the named tabs and sections shown around a previewed component.
//! Calling code registers [`PanelDefinition`]s into groups, reorders and updates
//! them at any time, and resolves them per render into [`Panel`] values whose
//! deferred fields have been evaluated against a [`DataContext`].
//!
//! # Modules
//!
//! - [`registry`] - [`PanelRegistry`], the mutation and query surface
//! - [`store`] - group-partitioned ordered storage and position normalization
//! - [`definition`] - stored definitions and [`PanelOptions`]
//! - [`deferred`] - [`Deferred`] values and the [`PanelData`] resolvers see
//! - [`panel`] - resolved [`Panel`]s
//! - [`config`] - TOML/JSON bulk-load input
//! - [`builtins`] - the default preview panels
//! - [`global`] - the explicitly installed process-wide registry
//!
//! ```
//! use folio_panels::{DataContext, PanelOptions, PanelRegistry};
//!
//! let mut panels = PanelRegistry::new();
//! panels.add("source", "drawer", PanelOptions::with_partial("panels/source").hotkey("s"))?;
//!
//! let panel = panels.resolve("source", &DataContext::new())?;
//! assert_eq!(panel.label(), "Source");
//! assert_eq!(panel.hotkey(), Some("s"));
//! # Ok::<(), folio_panels::PanelError>(())
//! ```

pub mod builtins;
pub mod config;
pub mod deferred;
pub mod definition;
mod error;
pub mod global;
pub mod panel;
pub mod registry;
pub mod store;
pub mod text;

pub use builtins::{DEFAULT_PANEL_GROUP, MAIN_PANEL_GROUP};
pub use config::{ConfigError, PanelEntry, PanelsConfig};
pub use deferred::{DataContext, Deferred, PanelData};
pub use definition::{PanelDefinition, PanelOptions};
pub use error::{PanelError, Result};
pub use panel::Panel;
pub use registry::PanelRegistry;
pub use store::{PanelGroups, normalize_position};

#[cfg(test)]
mod tests;
