//! Deferred field values and the data context they are resolved against.
//!
//! A panel field is either fixed at registration time ([`Deferred::Value`]) or
//! computed per render from a [`PanelData`] ([`Deferred::Resolver`]). Resolution
//! never fails; a resolver returns the field's concrete value directly.

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

/// Caller-supplied mapping handed to [`crate::PanelRegistry::resolve`].
pub type DataContext = Map<String, Value>;

/// Resolver function for a deferred field.
pub type Resolver<T> = Arc<dyn Fn(&PanelData) -> T + Send + Sync>;

/// A field value that is either concrete or computed from the data context.
pub enum Deferred<T> {
	/// Used as-is.
	Value(T),
	/// Invoked with the data context on every resolution.
	Resolver(Resolver<T>),
}

impl<T> Deferred<T> {
	/// Wraps a resolver function.
	pub fn resolver<F>(f: F) -> Self
	where
		F: Fn(&PanelData) -> T + Send + Sync + 'static,
	{
		Self::Resolver(Arc::new(f))
	}

	/// Returns `true` if this value is computed at resolution time.
	pub fn is_deferred(&self) -> bool {
		matches!(self, Self::Resolver(_))
	}

	/// Returns the concrete value, if this is not a resolver.
	pub fn as_value(&self) -> Option<&T> {
		match self {
			Self::Value(v) => Some(v),
			Self::Resolver(_) => None,
		}
	}
}

impl<T: Clone> Deferred<T> {
	/// Produces the concrete value for one render.
	pub fn resolve(&self, data: &PanelData) -> T {
		match self {
			Self::Value(v) => v.clone(),
			Self::Resolver(f) => f(data),
		}
	}
}

impl<T: Clone> Clone for Deferred<T> {
	fn clone(&self) -> Self {
		match self {
			Self::Value(v) => Self::Value(v.clone()),
			Self::Resolver(f) => Self::Resolver(Arc::clone(f)),
		}
	}
}

impl<T: fmt::Debug> fmt::Debug for Deferred<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
			Self::Resolver(_) => f.write_str("Resolver(..)"),
		}
	}
}

impl<T: PartialEq> PartialEq<T> for Deferred<T> {
	fn eq(&self, other: &T) -> bool {
		self.as_value().is_some_and(|v| v == other)
	}
}

impl<T> From<T> for Deferred<T> {
	fn from(value: T) -> Self {
		Self::Value(value)
	}
}

impl From<&str> for Deferred<String> {
	fn from(value: &str) -> Self {
		Self::Value(value.to_string())
	}
}

impl From<&str> for Deferred<Option<String>> {
	fn from(value: &str) -> Self {
		Self::Value(Some(value.to_string()))
	}
}

impl From<String> for Deferred<Option<String>> {
	fn from(value: String) -> Self {
		Self::Value(Some(value))
	}
}

/// Data context seen by resolvers: the caller's mapping with `name` merged over it.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelData {
	fields: Map<String, Value>,
}

impl PanelData {
	/// Builds the context for the panel `name`, overriding any `name` key in `data`.
	pub fn new(name: &str, data: &DataContext) -> Self {
		let mut fields = data.clone();
		fields.insert("name".to_string(), Value::String(name.to_string()));
		Self { fields }
	}

	/// The name of the panel being resolved.
	pub fn name(&self) -> &str {
		self.get_str("name").unwrap_or_default()
	}

	/// Returns a top-level field.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.fields.get(key)
	}

	/// Returns a top-level field if it is a string.
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.get(key).and_then(Value::as_str)
	}

	/// Reads a dotted path (`"preview.params"`) through nested objects.
	///
	/// Numeric segments index into arrays.
	pub fn lookup(&self, path: &str) -> Option<&Value> {
		let mut segments = path.split('.');
		let mut current = self.fields.get(segments.next()?)?;
		for segment in segments {
			current = match current {
				Value::Object(map) => map.get(segment)?,
				Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
				_ => return None,
			};
		}
		Some(current)
	}

	/// Returns `true` if `path` holds a value that is not null, false, or empty.
	pub fn is_present(&self, path: &str) -> bool {
		self.lookup(path).is_some_and(is_present)
	}

	/// The full merged mapping.
	pub fn as_map(&self) -> &Map<String, Value> {
		&self.fields
	}
}

/// Presence check over JSON values: null, `false`, and empty strings/arrays/objects are blank.
pub fn is_present(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::String(s) => !s.trim().is_empty(),
		Value::Array(items) => !items.is_empty(),
		Value::Object(map) => !map.is_empty(),
		Value::Number(_) => true,
	}
}
