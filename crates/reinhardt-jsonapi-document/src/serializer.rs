//! Compound document serializer
//!
//! Walks a caller supplied object graph and renders a JSON:API document:
//! primary `data` shaped like the input, plus an `included` member holding
//! each requested related resource exactly once.

use crate::document::{
	Document, JsonApiObject, Linkage, Links, PrimaryData, Relationship, ResourceIdentifier,
	ResourceObject,
};
use crate::error::{Result, SerializeError};
use crate::inclusion::InclusionRequest;
use crate::options::DocumentOptions;
use indexmap::IndexMap;
use reinhardt_resources::{
	Cardinality, DescriptorRegistry, Related, RelationshipDescriptor, Resource, ResourceDescriptor,
};
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;

/// Primary input of a serialization call
///
/// The variant chosen here decides the shape of the document's `data`
/// member: `null`, a single object, or an array.
#[derive(Default)]
pub enum Primary<'a> {
	/// No primary resource
	#[default]
	None,
	/// A single resource
	Single(&'a dyn Resource),
	/// A collection of resources, rendered in this order
	Collection(Vec<&'a dyn Resource>),
}

impl<'a> Primary<'a> {
	/// Build a collection input from any iterator of resources
	pub fn collection<T, I>(resources: I) -> Self
	where
		T: Resource + 'a,
		I: IntoIterator<Item = &'a T>,
	{
		Primary::Collection(
			resources
				.into_iter()
				.map(|r| r as &dyn Resource)
				.collect(),
		)
	}

	fn resources(&self) -> Vec<&'a dyn Resource> {
		match self {
			Primary::None => Vec::new(),
			Primary::Single(resource) => vec![*resource],
			Primary::Collection(resources) => resources.clone(),
		}
	}
}

impl<'a, T: Resource> From<&'a T> for Primary<'a> {
	fn from(value: &'a T) -> Self {
		Primary::Single(value)
	}
}

impl<'a, T: Resource> From<Option<&'a T>> for Primary<'a> {
	fn from(value: Option<&'a T>) -> Self {
		match value {
			Some(resource) => Primary::Single(resource),
			None => Primary::None,
		}
	}
}

/// Renders resources into JSON:API documents
///
/// A serializer holds only immutable configuration, so one instance can be
/// shared across threads and used for any number of concurrent calls. Each
/// call builds its own document and deduplication state.
///
/// # Examples
///
/// ```
/// use reinhardt_jsonapi_document::{DocumentSerializer, InclusionRequest, Primary};
/// use reinhardt_resources::{DescriptorRegistry, DynamicResource, ResourceDescriptor};
/// use serde_json::json;
/// use std::sync::Arc;
///
/// let registry = DescriptorRegistry::builder()
///     .register(
///         ResourceDescriptor::builder("sighting")
///             .with_attribute("created_at")
///             .build()
///             .unwrap(),
///     )
///     .build()
///     .unwrap();
/// let serializer = DocumentSerializer::new(Arc::new(registry));
///
/// let sighting = DynamicResource::new("sighting", 2)
///     .with_field("created_at", json!("2019-05-14T16:39:37.011Z"))
///     .with_field("notes", json!("not exposed"));
///
/// let document = serializer
///     .serialize_as(Primary::from(&sighting), "sighting", &InclusionRequest::none())
///     .unwrap();
///
/// assert_eq!(
///     document.to_json_string().unwrap(),
///     r#"{"data":{"id":"2","type":"sighting","attributes":{"created_at":"2019-05-14T16:39:37.011Z"}}}"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct DocumentSerializer {
	registry: Arc<DescriptorRegistry>,
	options: DocumentOptions,
}

impl DocumentSerializer {
	/// Create a serializer over a descriptor registry
	pub fn new(registry: Arc<DescriptorRegistry>) -> Self {
		Self {
			registry,
			options: DocumentOptions::default(),
		}
	}

	/// Replace the document options
	pub fn with_options(mut self, options: DocumentOptions) -> Self {
		self.options = options;
		self
	}

	/// Registry used to render related resources
	pub fn registry(&self) -> &DescriptorRegistry {
		&self.registry
	}

	/// Active document options
	pub fn options(&self) -> &DocumentOptions {
		&self.options
	}

	/// Serialize `primary` with `descriptor`, expanding `inclusion`
	///
	/// Every inclusion name is checked against `descriptor` before anything
	/// is rendered. Related resources placed in `included` are rendered with
	/// the descriptor registered for their own type.
	pub fn serialize(
		&self,
		primary: Primary<'_>,
		descriptor: &ResourceDescriptor,
		inclusion: &InclusionRequest,
	) -> Result<Document> {
		let requested = inclusion.resolve(descriptor)?;
		let resources = primary.resources();

		let data = match &primary {
			Primary::None => PrimaryData::Null,
			Primary::Single(resource) => {
				PrimaryData::Single(Box::new(self.resource_object(descriptor, *resource)?))
			}
			Primary::Collection(items) => PrimaryData::Collection(
				items
					.iter()
					.map(|resource| self.resource_object(descriptor, *resource))
					.collect::<Result<Vec<_>>>()?,
			),
		};

		let mut seen = HashSet::new();
		if self.options.exclude_primary_from_included() {
			for resource in &resources {
				seen.insert((
					descriptor.type_name().to_string(),
					resource.resource_id().as_wire(),
				));
			}
		}
		let included = self.collect_included(&resources, &requested, &mut seen)?;

		tracing::debug!(
			resource_type = descriptor.type_name(),
			primary = resources.len(),
			included = included.len(),
			"serialized JSON:API document"
		);

		Ok(Document {
			data,
			included: if included.is_empty() {
				None
			} else {
				Some(included)
			},
			meta: self.options.meta().cloned(),
			links: self.options.links().cloned(),
			jsonapi: self
				.options
				.jsonapi_version()
				.map(|version| JsonApiObject {
					version: version.to_string(),
				}),
		})
	}

	/// Serialize using the descriptor registered for `type_name`
	pub fn serialize_as(
		&self,
		primary: Primary<'_>,
		type_name: &str,
		inclusion: &InclusionRequest,
	) -> Result<Document> {
		let descriptor = self.descriptor(type_name)?;
		self.serialize(primary, descriptor, inclusion)
	}

	/// Serialize a single resource using its own type's descriptor
	pub fn serialize_one(
		&self,
		resource: &dyn Resource,
		inclusion: &InclusionRequest,
	) -> Result<Document> {
		let descriptor = self.descriptor(resource.resource_type())?;
		self.serialize(Primary::Single(resource), descriptor, inclusion)
	}

	/// Serialize a collection of `type_name` resources
	///
	/// The type is given explicitly so empty collections still resolve a
	/// descriptor and validate the inclusion request.
	pub fn serialize_many<'a, T, I>(
		&self,
		type_name: &str,
		resources: I,
		inclusion: &InclusionRequest,
	) -> Result<Document>
	where
		T: Resource + 'a,
		I: IntoIterator<Item = &'a T>,
	{
		let descriptor = self.descriptor(type_name)?;
		self.serialize(Primary::collection(resources), descriptor, inclusion)
	}

	fn descriptor(&self, type_name: &str) -> Result<&ResourceDescriptor> {
		self.registry
			.get(type_name)
			.ok_or_else(|| SerializeError::MissingDescriptor(type_name.to_string()))
	}

	fn collect_included(
		&self,
		primary: &[&dyn Resource],
		requested: &[&RelationshipDescriptor],
		seen: &mut HashSet<(String, String)>,
	) -> Result<Vec<ResourceObject>> {
		let mut included = Vec::new();

		for relationship in requested {
			for parent in primary {
				for target in parent.related(relationship.accessor()).into_vec() {
					let type_name = relationship.linkage_type(target);
					let key = (type_name.to_string(), target.resource_id().as_wire());
					if seen.contains(&key) {
						tracing::trace!(
							resource_type = %key.0,
							id = %key.1,
							relationship = relationship.name(),
							"skipping already included resource"
						);
						continue;
					}
					let descriptor = self.descriptor(type_name)?;
					included.push(self.resource_object(descriptor, target)?);
					seen.insert(key);
				}
			}
		}

		Ok(included)
	}

	fn resource_object(
		&self,
		descriptor: &ResourceDescriptor,
		resource: &dyn Resource,
	) -> Result<ResourceObject> {
		let transform = self.options.key_transform();

		let attributes = if descriptor.attribute_names().is_empty() {
			None
		} else {
			let mut attributes = IndexMap::with_capacity(descriptor.attribute_names().len());
			for name in descriptor.attribute_names() {
				let value = resource.attribute(name).unwrap_or_else(|| {
					tracing::warn!(
						resource_type = descriptor.type_name(),
						attribute = %name,
						"resource has no value for declared attribute, rendering null"
					);
					Value::Null
				});
				attributes.insert(transform.apply(name), value);
			}
			Some(attributes)
		};

		let relationships = if descriptor.relationships().is_empty() {
			None
		} else {
			let mut relationships = IndexMap::with_capacity(descriptor.relationships().len());
			for relationship in descriptor.relationships() {
				let data = self.linkage(descriptor, relationship, resource)?;
				relationships.insert(transform.apply(relationship.name()), Relationship { data });
			}
			Some(relationships)
		};

		let id = resource.resource_id();
		let links = self
			.options
			.link_resolver()
			.and_then(|resolver| resolver.resource_link(descriptor.type_name(), &id))
			.map(|href| Links::from([("self".to_string(), href)]));

		Ok(ResourceObject {
			id: id.as_wire(),
			kind: transform.apply(descriptor.type_name()),
			attributes,
			relationships,
			links,
		})
	}

	fn linkage(
		&self,
		owner: &ResourceDescriptor,
		relationship: &RelationshipDescriptor,
		resource: &dyn Resource,
	) -> Result<Linkage> {
		let related = resource.related(relationship.accessor());
		match relationship.cardinality() {
			Cardinality::One => match related {
				Related::None => Ok(Linkage::Null),
				Related::One(target) => Ok(Linkage::One(self.identifier(relationship, target))),
				Related::Many(_) => Err(SerializeError::CardinalityMismatch {
					type_name: owner.type_name().to_string(),
					relationship: relationship.name().to_string(),
					expected: Cardinality::One,
				}),
			},
			Cardinality::Many => Ok(Linkage::Many(
				related
					.into_vec()
					.into_iter()
					.map(|target| self.identifier(relationship, target))
					.collect(),
			)),
		}
	}

	fn identifier(
		&self,
		relationship: &RelationshipDescriptor,
		target: &dyn Resource,
	) -> ResourceIdentifier {
		ResourceIdentifier::new(
			target.resource_id().as_wire(),
			self.options
				.key_transform()
				.apply(relationship.linkage_type(target)),
		)
	}
}
