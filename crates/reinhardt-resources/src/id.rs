//! Resource identity
//!
//! JSON:API requires every resource `id` to be a string on the wire, while
//! models usually carry integer primary keys. `ResourceId` keeps the source
//! form and renders it as a string at the document boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a resource instance
///
/// # Examples
///
/// ```
/// use reinhardt_resources::ResourceId;
///
/// assert_eq!(ResourceId::from(2).to_string(), "2");
/// assert_eq!(ResourceId::from("grackle").to_string(), "grackle");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
	/// Signed integer primary key
	Int(i64),
	/// Unsigned integer primary key
	Uint(u64),
	/// String key (slug, UUID text, natural key)
	Str(String),
}

impl ResourceId {
	/// Wire representation of this id
	pub fn as_wire(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for ResourceId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ResourceId::Int(value) => write!(f, "{}", value),
			ResourceId::Uint(value) => write!(f, "{}", value),
			ResourceId::Str(value) => f.write_str(value),
		}
	}
}

impl From<i32> for ResourceId {
	fn from(value: i32) -> Self {
		ResourceId::Int(i64::from(value))
	}
}

impl From<i64> for ResourceId {
	fn from(value: i64) -> Self {
		ResourceId::Int(value)
	}
}

impl From<u32> for ResourceId {
	fn from(value: u32) -> Self {
		ResourceId::Uint(u64::from(value))
	}
}

impl From<u64> for ResourceId {
	fn from(value: u64) -> Self {
		ResourceId::Uint(value)
	}
}

impl From<usize> for ResourceId {
	fn from(value: usize) -> Self {
		ResourceId::Uint(value as u64)
	}
}

impl From<&str> for ResourceId {
	fn from(value: &str) -> Self {
		ResourceId::Str(value.to_string())
	}
}

impl From<String> for ResourceId {
	fn from(value: String) -> Self {
		ResourceId::Str(value)
	}
}
