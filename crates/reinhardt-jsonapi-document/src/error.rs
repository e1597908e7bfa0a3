use reinhardt_resources::{Cardinality, DescriptorError};
use thiserror::Error;

/// Errors that can occur while producing a document
///
/// Serialization is all-or-nothing: when any of these is returned, no
/// partial document exists.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SerializeError {
	/// Inclusion request names a relationship the primary type does not declare
	#[error("Resource type '{type_name}' has no relationship named '{relationship}'")]
	UnknownRelationship {
		type_name: String,
		relationship: String,
	},

	/// A resource type has no registered descriptor
	#[error("No descriptor registered for resource type '{0}'")]
	MissingDescriptor(String),

	/// Accessor produced a collection for a to-one relationship
	#[error(
		"Relationship '{relationship}' on '{type_name}' is declared {expected:?} but resolved to many resources"
	)]
	CardinalityMismatch {
		type_name: String,
		relationship: String,
		expected: Cardinality,
	},

	/// Descriptor configuration error
	#[error(transparent)]
	Descriptor(#[from] DescriptorError),

	/// JSON encoding or decoding error
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

/// Errors that can occur while loading serializer settings
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SettingsError {
	/// Settings file could not be read
	#[error("Failed to read settings file '{path}': {source}")]
	Io {
		path: String,
		#[source]
		source: std::io::Error,
	},

	/// Settings are not valid TOML for this schema
	#[error("Invalid serializer settings: {0}")]
	Parse(#[from] toml::de::Error),

	/// Declared resources do not form a valid registry
	#[error(transparent)]
	Descriptor(#[from] DescriptorError),
}

/// Result type for serialization operations
pub type Result<T> = std::result::Result<T, SerializeError>;
