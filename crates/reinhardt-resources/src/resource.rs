//! Resource instance traits
//!
//! A resource is any in-memory object the caller hands to the serializer.
//! The serializer only reads through these traits; instances are never
//! mutated and no data is fetched on their behalf.

use crate::id::ResourceId;
use serde_json::Value;
use std::fmt;

/// Read-only view of a single resource instance
///
/// This trait is object safe so heterogeneous object graphs can be walked
/// through `&dyn Resource`.
///
/// # Examples
///
/// ```
/// use reinhardt_resources::{Related, Resource, ResourceId};
/// use serde_json::{Value, json};
///
/// struct Bird {
///     id: i64,
///     name: String,
/// }
///
/// impl Resource for Bird {
///     fn resource_type(&self) -> &str {
///         "bird"
///     }
///
///     fn resource_id(&self) -> ResourceId {
///         self.id.into()
///     }
///
///     fn attribute(&self, name: &str) -> Option<Value> {
///         match name {
///             "name" => Some(json!(self.name)),
///             _ => None,
///         }
///     }
///
///     fn related(&self, _accessor: &str) -> Related<'_> {
///         Related::None
///     }
/// }
///
/// let bird = Bird { id: 2, name: "Grackle".to_string() };
/// assert_eq!(bird.resource_id().to_string(), "2");
/// assert_eq!(bird.attribute("name"), Some(json!("Grackle")));
/// ```
pub trait Resource {
	/// Type name of this instance, as registered with a descriptor
	fn resource_type(&self) -> &str;

	/// Stable identity of this instance
	fn resource_id(&self) -> ResourceId;

	/// Value of a named field, `None` if the instance has no such field
	fn attribute(&self, name: &str) -> Option<Value>;

	/// Resolve the related instance(s) behind a relationship accessor
	fn related(&self, accessor: &str) -> Related<'_>;
}

/// Result of resolving a relationship accessor
#[derive(Default)]
pub enum Related<'a> {
	/// No related object
	#[default]
	None,
	/// Exactly one related object
	One(&'a dyn Resource),
	/// Zero or more related objects, in accessor order
	Many(Vec<&'a dyn Resource>),
}

impl<'a> Related<'a> {
	/// Build a to-many result from any iterator of resources
	pub fn many<T, I>(items: I) -> Self
	where
		T: Resource + 'a,
		I: IntoIterator<Item = &'a T>,
	{
		Related::Many(items.into_iter().map(|r| r as &dyn Resource).collect())
	}

	/// Whether the accessor produced a collection
	pub fn is_many(&self) -> bool {
		matches!(self, Related::Many(_))
	}

	/// Flatten into the list of related instances
	pub fn into_vec(self) -> Vec<&'a dyn Resource> {
		match self {
			Related::None => Vec::new(),
			Related::One(resource) => vec![resource],
			Related::Many(resources) => resources,
		}
	}
}

impl<'a, T: Resource> From<Option<&'a T>> for Related<'a> {
	fn from(value: Option<&'a T>) -> Self {
		match value {
			Some(resource) => Related::One(resource),
			None => Related::None,
		}
	}
}

impl<'a, T: Resource> From<&'a T> for Related<'a> {
	fn from(value: &'a T) -> Self {
		Related::One(value)
	}
}

impl fmt::Debug for Related<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let key = |r: &&dyn Resource| format!("{}:{}", r.resource_type(), r.resource_id());
		match self {
			Related::None => f.write_str("None"),
			Related::One(resource) => f.debug_tuple("One").field(&key(resource)).finish(),
			Related::Many(resources) => f
				.debug_tuple("Many")
				.field(&resources.iter().map(key).collect::<Vec<_>>())
				.finish(),
		}
	}
}

/// Static capabilities of a concrete resource type
///
/// Descriptors are checked against these lists before first use, so a
/// descriptor that names a field the type cannot provide fails at startup
/// instead of producing `null` at request time.
///
/// # Examples
///
/// ```
/// use reinhardt_resources::{Related, Resource, ResourceId, ResourceSchema};
/// use serde_json::Value;
///
/// struct Location;
///
/// impl Resource for Location {
///     fn resource_type(&self) -> &str { Self::TYPE_NAME }
///     fn resource_id(&self) -> ResourceId { 1.into() }
///     fn attribute(&self, _name: &str) -> Option<Value> { None }
///     fn related(&self, _accessor: &str) -> Related<'_> { Related::None }
/// }
///
/// impl ResourceSchema for Location {
///     const TYPE_NAME: &'static str = "location";
///     const ATTRIBUTES: &'static [&'static str] = &["latitude", "longitude"];
///     const RELATIONSHIPS: &'static [&'static str] = &[];
/// }
/// ```
pub trait ResourceSchema: Resource {
	/// Registered type name
	const TYPE_NAME: &'static str;

	/// Field names `Resource::attribute` can answer
	const ATTRIBUTES: &'static [&'static str];

	/// Accessor names `Resource::related` can resolve
	const RELATIONSHIPS: &'static [&'static str];
}
