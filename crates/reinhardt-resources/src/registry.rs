//! Descriptor registry
//!
//! Maps resource type names to their descriptors so the serializer can
//! render related resources with their own configuration.

use crate::descriptor::ResourceDescriptor;
use crate::error::{DescriptorError, Result};
use crate::resource::ResourceSchema;
use indexmap::IndexMap;

/// Immutable lookup of descriptors by type name
///
/// # Examples
///
/// ```
/// use reinhardt_resources::{DescriptorRegistry, ResourceDescriptor};
///
/// let registry = DescriptorRegistry::builder()
///     .register(
///         ResourceDescriptor::builder("sighting")
///             .with_attribute("created_at")
///             .belongs_to("bird", "bird")
///             .build()
///             .unwrap(),
///     )
///     .register(
///         ResourceDescriptor::builder("bird")
///             .with_attributes(["name", "species"])
///             .build()
///             .unwrap(),
///     )
///     .build()
///     .unwrap();
///
/// assert!(registry.get("bird").is_some());
/// assert_eq!(registry.type_names().collect::<Vec<_>>(), ["sighting", "bird"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DescriptorRegistry {
	descriptors: IndexMap<String, ResourceDescriptor>,
}

impl DescriptorRegistry {
	/// Start assembling a registry
	pub fn builder() -> DescriptorRegistryBuilder {
		DescriptorRegistryBuilder::default()
	}

	/// Descriptor registered for `type_name`
	pub fn get(&self, type_name: &str) -> Option<&ResourceDescriptor> {
		self.descriptors.get(type_name)
	}

	/// Whether a descriptor is registered for `type_name`
	pub fn contains(&self, type_name: &str) -> bool {
		self.descriptors.contains_key(type_name)
	}

	/// Registered type names, in registration order
	pub fn type_names(&self) -> impl Iterator<Item = &str> {
		self.descriptors.keys().map(String::as_str)
	}

	/// Number of registered descriptors
	pub fn len(&self) -> usize {
		self.descriptors.len()
	}

	/// Whether the registry is empty
	pub fn is_empty(&self) -> bool {
		self.descriptors.is_empty()
	}
}

type SchemaCheck = fn(&ResourceDescriptor) -> Result<()>;

/// Builder for `DescriptorRegistry`
#[derive(Debug, Default)]
pub struct DescriptorRegistryBuilder {
	descriptors: Vec<ResourceDescriptor>,
	schema_checks: Vec<(&'static str, SchemaCheck)>,
}

impl DescriptorRegistryBuilder {
	/// Add a descriptor
	pub fn register(mut self, descriptor: ResourceDescriptor) -> Self {
		self.descriptors.push(descriptor);
		self
	}

	/// Add several descriptors
	pub fn register_all(mut self, descriptors: impl IntoIterator<Item = ResourceDescriptor>) -> Self {
		self.descriptors.extend(descriptors);
		self
	}

	/// Require the descriptor for `T::TYPE_NAME` to match `T`'s capabilities
	///
	/// Checked in `build`. Useful when descriptors come from configuration
	/// files rather than `ResourceDescriptor::for_schema`.
	pub fn validate_against<T: ResourceSchema>(mut self) -> Self {
		self.schema_checks
			.push((T::TYPE_NAME, ResourceDescriptor::validate_against::<T>));
		self
	}

	/// Validate cross-type references and freeze the registry
	pub fn build(self) -> Result<DescriptorRegistry> {
		let mut descriptors = IndexMap::with_capacity(self.descriptors.len());
		for descriptor in self.descriptors {
			let type_name = descriptor.type_name().to_string();
			if descriptors.contains_key(&type_name) {
				return Err(DescriptorError::DuplicateDescriptor(type_name));
			}
			descriptors.insert(type_name, descriptor);
		}

		for descriptor in descriptors.values() {
			for relationship in descriptor.relationships() {
				if relationship.is_polymorphic() {
					continue;
				}
				if !descriptors.contains_key(relationship.target_type()) {
					return Err(DescriptorError::UnresolvedTarget {
						type_name: descriptor.type_name().to_string(),
						relationship: relationship.name().to_string(),
						target_type: relationship.target_type().to_string(),
					});
				}
			}
		}

		for (type_name, check) in &self.schema_checks {
			let descriptor = descriptors
				.get(*type_name)
				.ok_or_else(|| DescriptorError::NotRegistered((*type_name).to_string()))?;
			check(descriptor)?;
		}

		tracing::debug!(
			count = descriptors.len(),
			"resource descriptor registry built"
		);
		Ok(DescriptorRegistry { descriptors })
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::id::ResourceId;
	use crate::resource::{Related, Resource};
	use rstest::{fixture, rstest};
	use serde_json::Value;

	struct Location;

	impl Resource for Location {
		fn resource_type(&self) -> &str {
			Self::TYPE_NAME
		}

		fn resource_id(&self) -> ResourceId {
			2.into()
		}

		fn attribute(&self, _name: &str) -> Option<Value> {
			None
		}

		fn related(&self, _accessor: &str) -> Related<'_> {
			Related::None
		}
	}

	impl ResourceSchema for Location {
		const TYPE_NAME: &'static str = "location";
		const ATTRIBUTES: &'static [&'static str] = &["latitude", "longitude"];
		const RELATIONSHIPS: &'static [&'static str] = &[];
	}

	#[fixture]
	fn location() -> ResourceDescriptor {
		ResourceDescriptor::builder("location")
			.with_attributes(["latitude", "longitude"])
			.build()
			.unwrap()
	}

	#[fixture]
	fn sighting() -> ResourceDescriptor {
		ResourceDescriptor::builder("sighting")
			.with_attribute("created_at")
			.belongs_to("location", "location")
			.build()
			.unwrap()
	}

	#[rstest]
	fn test_build_resolves_targets(location: ResourceDescriptor, sighting: ResourceDescriptor) {
		// Arrange & Act
		let registry = DescriptorRegistry::builder()
			.register(sighting)
			.register(location)
			.build()
			.unwrap();

		// Assert
		assert_eq!(registry.len(), 2);
		assert!(registry.contains("sighting"));
		assert!(registry.contains("location"));
		assert!(!registry.is_empty());
	}

	#[rstest]
	fn test_unresolved_target_rejected(sighting: ResourceDescriptor) {
		let result = DescriptorRegistry::builder().register(sighting).build();

		assert!(matches!(
			result,
			Err(DescriptorError::UnresolvedTarget { target_type, .. }) if target_type == "location"
		));
	}

	#[rstest]
	fn test_polymorphic_target_not_required() {
		let comment = ResourceDescriptor::builder("comment")
			.with_relationship(
				crate::descriptor::RelationshipDescriptor::new(
					"subject",
					"commentable",
					crate::descriptor::Cardinality::One,
				)
				.polymorphic(),
			)
			.build()
			.unwrap();

		let result = DescriptorRegistry::builder().register(comment).build();

		assert!(result.is_ok());
	}

	#[rstest]
	fn test_duplicate_descriptor_rejected(location: ResourceDescriptor) {
		let result = DescriptorRegistry::builder()
			.register_all([location.clone(), location])
			.build();

		assert!(matches!(
			result,
			Err(DescriptorError::DuplicateDescriptor(name)) if name == "location"
		));
	}

	#[rstest]
	fn test_validate_against_schema(location: ResourceDescriptor) {
		let result = DescriptorRegistry::builder()
			.register(location)
			.validate_against::<Location>()
			.build();

		assert!(result.is_ok());
	}

	#[rstest]
	fn test_validate_against_schema_rejects_extra_attribute() {
		let location = ResourceDescriptor::builder("location")
			.with_attributes(["latitude", "altitude"])
			.build()
			.unwrap();

		let result = DescriptorRegistry::builder()
			.register(location)
			.validate_against::<Location>()
			.build();

		assert!(matches!(
			result,
			Err(DescriptorError::UnknownAttribute { attribute, .. }) if attribute == "altitude"
		));
	}

	#[rstest]
	fn test_validate_against_unregistered_schema() {
		let result = DescriptorRegistry::builder()
			.validate_against::<Location>()
			.build();

		assert_eq!(
			result.unwrap_err(),
			DescriptorError::NotRegistered("location".to_string())
		);
	}
}
