use thiserror::Error;

/// Errors raised while building resource descriptors and registries
///
/// All of these are configuration errors: they surface at startup, before
/// any document is serialized.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
	/// Descriptor was built without a type name
	#[error("Resource type name must not be empty")]
	EmptyTypeName,

	/// Descriptor lists an attribute the resource type cannot provide
	#[error("Resource type '{type_name}' does not expose attribute '{attribute}'")]
	UnknownAttribute {
		type_name: String,
		attribute: String,
	},

	/// Relationship accessor is not resolvable on the resource type
	#[error(
		"Resource type '{type_name}' has no accessor '{accessor}' for relationship '{relationship}'"
	)]
	UnknownAccessor {
		type_name: String,
		relationship: String,
		accessor: String,
	},

	/// Attribute listed more than once
	#[error("Attribute '{attribute}' is declared twice on resource type '{type_name}'")]
	DuplicateAttribute {
		type_name: String,
		attribute: String,
	},

	/// Relationship declared more than once
	#[error("Relationship '{relationship}' is declared twice on resource type '{type_name}'")]
	DuplicateRelationship {
		type_name: String,
		relationship: String,
	},

	/// Two descriptors registered for the same type
	#[error("A descriptor for resource type '{0}' is already registered")]
	DuplicateDescriptor(String),

	/// Relationship points at a type with no registered descriptor
	#[error(
		"Relationship '{relationship}' on '{type_name}' targets unregistered resource type '{target_type}'"
	)]
	UnresolvedTarget {
		type_name: String,
		relationship: String,
		target_type: String,
	},

	/// Schema validation requested for a type that was never registered
	#[error("No descriptor registered for resource type '{0}'")]
	NotRegistered(String),
}

/// Result type for descriptor operations
pub type Result<T> = std::result::Result<T, DescriptorError>;
