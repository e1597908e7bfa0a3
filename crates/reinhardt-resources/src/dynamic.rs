//! Map-backed resources
//!
//! `DynamicResource` lets callers serialize rows that never had a dedicated
//! Rust type, such as records decoded from a query result into JSON.

use crate::id::ResourceId;
use crate::resource::{Related, Resource};
use indexmap::IndexMap;
use serde_json::Value;
use std::sync::Arc;

/// Relation slot on a `DynamicResource`
#[derive(Debug, Clone)]
pub enum DynamicRelation {
	/// To-one relation, `None` when the foreign key is null
	One(Option<Arc<DynamicResource>>),
	/// To-many relation
	Many(Vec<Arc<DynamicResource>>),
}

/// A resource whose fields and relations live in ordered maps
///
/// # Examples
///
/// ```
/// use reinhardt_resources::{DynamicResource, Resource};
/// use serde_json::json;
/// use std::sync::Arc;
///
/// let bird = Arc::new(
///     DynamicResource::new("bird", 2)
///         .with_field("name", json!("Grackle"))
///         .with_field("species", json!("Quiscalus Quiscula")),
/// );
/// let sighting = DynamicResource::new("sighting", 2)
///     .with_field("created_at", json!("2019-05-14T16:39:37.011Z"))
///     .with_one("bird", Some(bird));
///
/// assert_eq!(sighting.attribute("created_at"), Some(json!("2019-05-14T16:39:37.011Z")));
/// assert_eq!(sighting.related("bird").into_vec().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct DynamicResource {
	type_name: String,
	id: ResourceId,
	fields: IndexMap<String, Value>,
	relations: IndexMap<String, DynamicRelation>,
}

impl DynamicResource {
	/// Create an instance with no fields and no relations
	pub fn new(type_name: impl Into<String>, id: impl Into<ResourceId>) -> Self {
		Self {
			type_name: type_name.into(),
			id: id.into(),
			fields: IndexMap::new(),
			relations: IndexMap::new(),
		}
	}

	/// Set a field value
	pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
		self.fields.insert(name.into(), value);
		self
	}

	/// Set a to-one relation
	pub fn with_one(mut self, name: impl Into<String>, target: Option<Arc<DynamicResource>>) -> Self {
		self.relations
			.insert(name.into(), DynamicRelation::One(target));
		self
	}

	/// Set a to-many relation
	pub fn with_many(
		mut self,
		name: impl Into<String>,
		targets: impl IntoIterator<Item = Arc<DynamicResource>>,
	) -> Self {
		self.relations.insert(
			name.into(),
			DynamicRelation::Many(targets.into_iter().collect()),
		);
		self
	}

	/// Names of all fields held by this instance, in insertion order
	pub fn field_names(&self) -> impl Iterator<Item = &str> {
		self.fields.keys().map(String::as_str)
	}

	/// Names of all relations held by this instance, in insertion order
	pub fn relation_names(&self) -> impl Iterator<Item = &str> {
		self.relations.keys().map(String::as_str)
	}
}

impl Resource for DynamicResource {
	fn resource_type(&self) -> &str {
		&self.type_name
	}

	fn resource_id(&self) -> ResourceId {
		self.id.clone()
	}

	fn attribute(&self, name: &str) -> Option<Value> {
		self.fields.get(name).cloned()
	}

	fn related(&self, accessor: &str) -> Related<'_> {
		match self.relations.get(accessor) {
			Some(DynamicRelation::One(Some(target))) => Related::One(&**target),
			Some(DynamicRelation::One(None)) => Related::None,
			Some(DynamicRelation::Many(targets)) => {
				Related::Many(targets.iter().map(|t| &**t as &dyn Resource).collect())
			}
			None => {
				tracing::trace!(
					resource_type = %self.type_name,
					accessor,
					"dynamic resource has no relation slot"
				);
				Related::None
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};
	use serde_json::json;

	#[fixture]
	fn author() -> Arc<DynamicResource> {
		Arc::new(DynamicResource::new("person", 9).with_field("name", json!("Dan")))
	}

	#[rstest]
	fn test_fields_keep_insertion_order() {
		// Arrange
		let resource = DynamicResource::new("bird", 1)
			.with_field("species", json!("Quiscalus Quiscula"))
			.with_field("name", json!("Grackle"));

		// Act
		let names: Vec<&str> = resource.field_names().collect();

		// Assert
		assert_eq!(names, vec!["species", "name"]);
	}

	#[rstest]
	fn test_missing_field_is_none() {
		let resource = DynamicResource::new("bird", 1);

		assert_eq!(resource.attribute("name"), None);
	}

	#[rstest]
	fn test_to_one_relation(author: Arc<DynamicResource>) {
		let article = DynamicResource::new("article", 1).with_one("author", Some(author));

		let related = article.related("author").into_vec();

		assert_eq!(related.len(), 1);
		assert_eq!(related[0].resource_type(), "person");
		assert_eq!(related[0].resource_id().to_string(), "9");
	}

	#[rstest]
	fn test_null_to_one_relation_resolves_to_none() {
		let article = DynamicResource::new("article", 1).with_one("author", None);

		assert!(matches!(article.related("author"), Related::None));
	}

	#[rstest]
	fn test_empty_to_many_relation_is_many(author: Arc<DynamicResource>) {
		let article = DynamicResource::new("article", 1)
			.with_many("comments", Vec::new())
			.with_many("editors", vec![author.clone(), author]);

		assert!(article.related("comments").is_many());
		assert_eq!(article.related("editors").into_vec().len(), 2);
		assert_eq!(
			article.relation_names().collect::<Vec<_>>(),
			vec!["comments", "editors"]
		);
	}

	#[rstest]
	fn test_unknown_relation_resolves_to_none() {
		let article = DynamicResource::new("article", 1);

		assert!(matches!(article.related("tags"), Related::None));
	}
}
