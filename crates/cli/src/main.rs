//! Folio panel inspector.
//!
//! Loads a panels config file into a registry and prints either the stored
//! definitions or the panels resolved against a JSON data context.

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use folio_panels::{DataContext, Panel, PanelRegistry, PanelsConfig};
use tracing::info;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Inspect and resolve preview panel configurations")]
#[command(version)]
struct Cli {
	/// Verbose logging
	#[arg(short, long, global = true)]
	verbose: bool,

	#[command(subcommand)]
	command: Command,
}

/// Options shared by every subcommand.
#[derive(clap::Args, Debug)]
struct Source {
	/// Panels config file (.toml or .json)
	config: PathBuf,

	/// Register the default preview panels before loading the config
	#[arg(long)]
	builtins: bool,

	/// Only consider panels in this group
	#[arg(short, long)]
	group: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Print stored definitions, one JSON object per line
	List {
		#[command(flatten)]
		source: Source,
	},
	/// Print resolved panels as pretty JSON
	Resolve {
		#[command(flatten)]
		source: Source,

		/// Resolve a single panel by name
		name: Option<String>,

		/// Data context as a JSON object
		#[arg(short, long, value_name = "JSON")]
		data: Option<String>,
	},
}

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	match cli.command {
		Command::List { source } => {
			let registry = load(&source)?;
			for def in registry.list(source.group.as_deref()) {
				let index = registry.in_group(def.group()).iter().position(|d| d.name() == def.name()).unwrap_or_default();
				let line = serde_json::json!({
					"name": def.name(),
					"group": def.group(),
					"partial": def.partial(),
					"position": index + 1,
				});
				println!("{line}");
			}
		}
		Command::Resolve { source, name, data } => {
			let registry = load(&source)?;
			let data = parse_data(data.as_deref())?;
			let panels: Vec<Panel> = match (name, source.group.as_deref()) {
				(Some(name), _) => vec![registry.resolve(&name, &data)?],
				(None, Some(group)) => registry.resolve_group(group, &data),
				(None, None) => registry.resolve_all(&data),
			};
			println!("{}", serde_json::to_string_pretty(&panels)?);
		}
	}

	Ok(())
}

fn load(source: &Source) -> anyhow::Result<PanelRegistry> {
	let config = PanelsConfig::from_path(&source.config).with_context(|| format!("loading {}", source.config.display()))?;

	let mut registry = if source.builtins { PanelRegistry::with_builtins() } else { PanelRegistry::new() };
	registry.load_config(&config).with_context(|| format!("registering panels from {}", source.config.display()))?;

	info!(path = %source.config.display(), panels = registry.count(None), "panels loaded");
	Ok(registry)
}

fn parse_data(raw: Option<&str>) -> anyhow::Result<DataContext> {
	let Some(raw) = raw else {
		return Ok(DataContext::new());
	};
	match serde_json::from_str::<serde_json::Value>(raw).context("parsing --data")? {
		serde_json::Value::Object(map) => Ok(map),
		other => bail!("--data must be a JSON object, got {other}"),
	}
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("folio_registry=trace,folio_panels=trace,folio=debug,info")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(true).init();
}

#[cfg(test)]
mod tests;
