//! Resource descriptors
//!
//! A descriptor is the per-type serialization configuration: which
//! attributes to expose, in which order, and which relationships to link.
//! Descriptors are plain values built once at startup and shared
//! read-only afterwards. They replace the mixin style found in dynamic
//! serializer libraries with explicit configuration that is validated
//! before first use.

use crate::error::{DescriptorError, Result};
use crate::resource::{Resource, ResourceSchema};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Whether a relationship links one or many resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
	/// `belongs_to` / `has_one`
	One,
	/// `has_many`
	Many,
}

/// Declaration of a single relationship on a resource type
///
/// # Examples
///
/// ```
/// use reinhardt_resources::{Cardinality, RelationshipDescriptor};
///
/// let bird = RelationshipDescriptor::new("bird", "bird", Cardinality::One);
/// assert_eq!(bird.accessor(), "bird");
///
/// let watcher = RelationshipDescriptor::new("watcher", "person", Cardinality::One)
///     .with_accessor("observer");
/// assert_eq!(watcher.accessor(), "observer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipDescriptor {
	name: String,
	target_type: String,
	cardinality: Cardinality,
	accessor: Option<String>,
	polymorphic: bool,
}

impl RelationshipDescriptor {
	/// Declare a relationship whose accessor matches its name
	pub fn new(
		name: impl Into<String>,
		target_type: impl Into<String>,
		cardinality: Cardinality,
	) -> Self {
		Self {
			name: name.into(),
			target_type: target_type.into(),
			cardinality,
			accessor: None,
			polymorphic: false,
		}
	}

	/// Resolve related instances through a differently named accessor
	pub fn with_accessor(mut self, accessor: impl Into<String>) -> Self {
		self.accessor = Some(accessor.into());
		self
	}

	/// Take the linkage type from each related instance
	///
	/// Used when a relationship can point at more than one resource type.
	pub fn polymorphic(mut self) -> Self {
		self.polymorphic = true;
		self
	}

	/// Relationship member name
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Declared target type
	pub fn target_type(&self) -> &str {
		&self.target_type
	}

	/// Declared cardinality
	pub fn cardinality(&self) -> Cardinality {
		self.cardinality
	}

	/// Accessor passed to `Resource::related`
	pub fn accessor(&self) -> &str {
		self.accessor.as_deref().unwrap_or(&self.name)
	}

	/// Whether the linkage type follows the related instance
	pub fn is_polymorphic(&self) -> bool {
		self.polymorphic
	}

	/// Type name used in linkage for a related instance
	pub fn linkage_type<'a>(&'a self, related: &'a dyn Resource) -> &'a str {
		if self.polymorphic {
			related.resource_type()
		} else {
			&self.target_type
		}
	}
}

/// Immutable serialization configuration for one resource type
///
/// # Examples
///
/// ```
/// use reinhardt_resources::ResourceDescriptor;
///
/// let sighting = ResourceDescriptor::builder("sighting")
///     .with_attribute("created_at")
///     .belongs_to("bird", "bird")
///     .belongs_to("location", "location")
///     .build()
///     .unwrap();
///
/// assert_eq!(sighting.type_name(), "sighting");
/// assert_eq!(sighting.attribute_names(), ["created_at"]);
/// assert!(sighting.relationship("bird").is_some());
/// assert!(sighting.relationship("watcher").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDescriptor {
	type_name: String,
	attribute_names: Vec<String>,
	relationships: Vec<RelationshipDescriptor>,
}

impl ResourceDescriptor {
	/// Start configuring a descriptor for `type_name`
	pub fn builder(type_name: impl Into<String>) -> ResourceDescriptorBuilder {
		ResourceDescriptorBuilder::new(type_name)
	}

	/// Start configuring a descriptor validated against a schema type
	pub fn for_schema<T: ResourceSchema>() -> ResourceDescriptorBuilder {
		ResourceDescriptorBuilder::new(T::TYPE_NAME)
			.with_capabilities(T::ATTRIBUTES.iter().copied(), T::RELATIONSHIPS.iter().copied())
	}

	/// Resource type name
	pub fn type_name(&self) -> &str {
		&self.type_name
	}

	/// Exposed attributes, in declaration order
	pub fn attribute_names(&self) -> &[String] {
		&self.attribute_names
	}

	/// Declared relationships, in declaration order
	pub fn relationships(&self) -> &[RelationshipDescriptor] {
		&self.relationships
	}

	/// Look up a relationship by member name
	pub fn relationship(&self, name: &str) -> Option<&RelationshipDescriptor> {
		self.relationships.iter().find(|r| r.name == name)
	}

	/// Check this descriptor against a type's static capabilities
	pub fn validate_against<T: ResourceSchema>(&self) -> Result<()> {
		let capabilities = Capabilities::new(
			T::ATTRIBUTES.iter().copied(),
			T::RELATIONSHIPS.iter().copied(),
		);
		capabilities.check(self)
	}
}

#[derive(Debug, Clone, Default)]
struct Capabilities {
	attributes: HashSet<String>,
	accessors: HashSet<String>,
}

impl Capabilities {
	fn new<'a>(
		attributes: impl IntoIterator<Item = &'a str>,
		accessors: impl IntoIterator<Item = &'a str>,
	) -> Self {
		Self {
			attributes: attributes.into_iter().map(str::to_string).collect(),
			accessors: accessors.into_iter().map(str::to_string).collect(),
		}
	}

	fn check(&self, descriptor: &ResourceDescriptor) -> Result<()> {
		if let Some(missing) = descriptor
			.attribute_names
			.iter()
			.find(|name| !self.attributes.contains(*name))
		{
			return Err(DescriptorError::UnknownAttribute {
				type_name: descriptor.type_name.clone(),
				attribute: missing.clone(),
			});
		}
		if let Some(missing) = descriptor
			.relationships
			.iter()
			.find(|r| !self.accessors.contains(r.accessor()))
		{
			return Err(DescriptorError::UnknownAccessor {
				type_name: descriptor.type_name.clone(),
				relationship: missing.name.clone(),
				accessor: missing.accessor().to_string(),
			});
		}
		Ok(())
	}
}

/// Builder for `ResourceDescriptor`
#[derive(Debug, Clone)]
pub struct ResourceDescriptorBuilder {
	type_name: String,
	attribute_names: Vec<String>,
	relationships: Vec<RelationshipDescriptor>,
	capabilities: Option<Capabilities>,
}

impl ResourceDescriptorBuilder {
	fn new(type_name: impl Into<String>) -> Self {
		Self {
			type_name: type_name.into(),
			attribute_names: Vec::new(),
			relationships: Vec::new(),
			capabilities: None,
		}
	}

	/// Expose one attribute
	pub fn with_attribute(mut self, name: impl Into<String>) -> Self {
		self.attribute_names.push(name.into());
		self
	}

	/// Expose several attributes, in order
	pub fn with_attributes<I, S>(mut self, names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.attribute_names
			.extend(names.into_iter().map(Into::into));
		self
	}

	/// Declare a to-one relationship held by this resource
	pub fn belongs_to(self, name: impl Into<String>, target_type: impl Into<String>) -> Self {
		self.with_relationship(RelationshipDescriptor::new(
			name,
			target_type,
			Cardinality::One,
		))
	}

	/// Declare a to-one relationship held by the other side
	pub fn has_one(self, name: impl Into<String>, target_type: impl Into<String>) -> Self {
		self.with_relationship(RelationshipDescriptor::new(
			name,
			target_type,
			Cardinality::One,
		))
	}

	/// Declare a to-many relationship
	pub fn has_many(self, name: impl Into<String>, target_type: impl Into<String>) -> Self {
		self.with_relationship(RelationshipDescriptor::new(
			name,
			target_type,
			Cardinality::Many,
		))
	}

	/// Declare a fully configured relationship
	pub fn with_relationship(mut self, relationship: RelationshipDescriptor) -> Self {
		self.relationships.push(relationship);
		self
	}

	/// Restrict attributes and accessors to what the resource type provides
	pub fn with_capabilities<'a>(
		mut self,
		attributes: impl IntoIterator<Item = &'a str>,
		accessors: impl IntoIterator<Item = &'a str>,
	) -> Self {
		self.capabilities = Some(Capabilities::new(attributes, accessors));
		self
	}

	/// Validate and freeze the descriptor
	pub fn build(self) -> Result<ResourceDescriptor> {
		if self.type_name.trim().is_empty() {
			return Err(DescriptorError::EmptyTypeName);
		}

		let mut seen = HashSet::new();
		for name in &self.attribute_names {
			if !seen.insert(name.as_str()) {
				return Err(DescriptorError::DuplicateAttribute {
					type_name: self.type_name.clone(),
					attribute: name.clone(),
				});
			}
		}

		let mut seen = HashSet::new();
		for relationship in &self.relationships {
			if !seen.insert(relationship.name()) {
				return Err(DescriptorError::DuplicateRelationship {
					type_name: self.type_name.clone(),
					relationship: relationship.name.clone(),
				});
			}
		}

		let descriptor = ResourceDescriptor {
			type_name: self.type_name,
			attribute_names: self.attribute_names,
			relationships: self.relationships,
		};
		if let Some(capabilities) = &self.capabilities {
			capabilities.check(&descriptor)?;
		}
		Ok(descriptor)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::id::ResourceId;
	use crate::resource::Related;
	use rstest::rstest;
	use serde_json::Value;

	struct Bird;

	impl Resource for Bird {
		fn resource_type(&self) -> &str {
			Self::TYPE_NAME
		}

		fn resource_id(&self) -> ResourceId {
			1.into()
		}

		fn attribute(&self, _name: &str) -> Option<Value> {
			None
		}

		fn related(&self, _accessor: &str) -> Related<'_> {
			Related::None
		}
	}

	impl ResourceSchema for Bird {
		const TYPE_NAME: &'static str = "bird";
		const ATTRIBUTES: &'static [&'static str] = &["name", "species", "wingspan_cm"];
		const RELATIONSHIPS: &'static [&'static str] = &["family"];
	}

	#[rstest]
	fn test_attribute_order_is_preserved() {
		// Arrange & Act
		let descriptor = ResourceDescriptor::builder("bird")
			.with_attributes(["species", "name"])
			.build()
			.unwrap();

		// Assert
		assert_eq!(descriptor.attribute_names(), ["species", "name"]);
	}

	#[rstest]
	fn test_for_schema_accepts_subset() {
		let descriptor = ResourceDescriptor::for_schema::<Bird>()
			.with_attributes(["name", "species"])
			.belongs_to("family", "family")
			.build()
			.unwrap();

		assert_eq!(descriptor.type_name(), "bird");
		assert_eq!(descriptor.relationships().len(), 1);
	}

	#[rstest]
	fn test_for_schema_rejects_unknown_attribute() {
		let result = ResourceDescriptor::for_schema::<Bird>()
			.with_attributes(["name", "plumage"])
			.build();

		assert_eq!(
			result,
			Err(DescriptorError::UnknownAttribute {
				type_name: "bird".to_string(),
				attribute: "plumage".to_string(),
			})
		);
	}

	#[rstest]
	fn test_for_schema_rejects_unknown_accessor() {
		let result = ResourceDescriptor::for_schema::<Bird>()
			.with_relationship(
				RelationshipDescriptor::new("family", "family", Cardinality::One)
					.with_accessor("genus"),
			)
			.build();

		assert_eq!(
			result,
			Err(DescriptorError::UnknownAccessor {
				type_name: "bird".to_string(),
				relationship: "family".to_string(),
				accessor: "genus".to_string(),
			})
		);
	}

	#[rstest]
	fn test_duplicate_attribute_rejected() {
		let result = ResourceDescriptor::builder("bird")
			.with_attributes(["name", "name"])
			.build();

		assert!(matches!(
			result,
			Err(DescriptorError::DuplicateAttribute { attribute, .. }) if attribute == "name"
		));
	}

	#[rstest]
	fn test_duplicate_relationship_rejected() {
		let result = ResourceDescriptor::builder("sighting")
			.belongs_to("bird", "bird")
			.has_many("bird", "bird")
			.build();

		assert!(matches!(
			result,
			Err(DescriptorError::DuplicateRelationship { relationship, .. }) if relationship == "bird"
		));
	}

	#[rstest]
	#[case("")]
	#[case("   ")]
	fn test_empty_type_name_rejected(#[case] type_name: &str) {
		let result = ResourceDescriptor::builder(type_name).build();

		assert_eq!(result, Err(DescriptorError::EmptyTypeName));
	}

	#[rstest]
	fn test_validate_against_after_build() {
		let descriptor = ResourceDescriptor::builder("bird")
			.with_attribute("colour")
			.build()
			.unwrap();

		let result = descriptor.validate_against::<Bird>();

		assert!(matches!(
			result,
			Err(DescriptorError::UnknownAttribute { attribute, .. }) if attribute == "colour"
		));
	}

	#[rstest]
	fn test_relationship_cardinality_helpers() {
		let descriptor = ResourceDescriptor::builder("person")
			.has_one("profile", "profile")
			.has_many("sightings", "sighting")
			.build()
			.unwrap();

		assert_eq!(
			descriptor.relationship("profile").map(|r| r.cardinality()),
			Some(Cardinality::One)
		);
		assert_eq!(
			descriptor.relationship("sightings").map(|r| r.cardinality()),
			Some(Cardinality::Many)
		);
	}

	#[rstest]
	fn test_polymorphic_linkage_type_follows_instance() {
		let relationship =
			RelationshipDescriptor::new("subject", "animal", Cardinality::One).polymorphic();
		let fixed = RelationshipDescriptor::new("subject", "animal", Cardinality::One);

		assert_eq!(relationship.linkage_type(&Bird), "bird");
		assert_eq!(fixed.linkage_type(&Bird), "animal");
	}
}
