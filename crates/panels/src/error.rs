/// Registry misuse errors.
///
/// None of these are transient; retrying the same call yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PanelError {
	/// The definition cannot be stored (missing partial or name).
	#[error("invalid panel '{name}': {reason}")]
	InvalidDefinition { name: String, reason: &'static str },

	/// A panel with this name already exists in some group.
	#[error("panel with name '{name}' already exists")]
	DuplicateName { name: String },

	/// No panel with this name is registered.
	#[error("could not find panel named '{name}'")]
	NotFound { name: String },

	/// The process-wide registry was installed twice.
	#[error("global panel registry is already installed")]
	AlreadyInstalled,
}

impl PanelError {
	pub(crate) fn missing_partial(name: &str) -> Self {
		Self::InvalidDefinition {
			name: name.to_string(),
			reason: "panels must provide a partial path",
		}
	}

	pub(crate) fn missing_name(name: &str) -> Self {
		Self::InvalidDefinition {
			name: name.to_string(),
			reason: "panels must provide a name",
		}
	}

	pub(crate) fn not_found(name: &str) -> Self {
		Self::NotFound { name: name.to_string() }
	}
}

pub type Result<T, E = PanelError> = std::result::Result<T, E>;
