//! JSON:API wire types
//!
//! These types mirror the document structure one-to-one, so encoding a
//! `Document` with serde produces the JSON:API wire format directly. Member
//! order on the wire follows field order here.

use crate::error::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level links object (`self`, `related`, ...)
pub type Links = IndexMap<String, String>;

/// Minimal `{id, type}` reference to a resource
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceIdentifier {
	pub id: String,
	#[serde(rename = "type")]
	pub kind: String,
}

impl ResourceIdentifier {
	/// Create an identifier
	pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			kind: kind.into(),
		}
	}
}

/// Resource linkage inside a relationship object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Linkage {
	/// Empty to-one relationship, encoded as `null`
	Null,
	/// To-one relationship
	One(ResourceIdentifier),
	/// To-many relationship, possibly empty
	Many(Vec<ResourceIdentifier>),
}

impl Linkage {
	/// Identifiers in this linkage, in order
	pub fn identifiers(&self) -> Vec<&ResourceIdentifier> {
		match self {
			Linkage::Null => Vec::new(),
			Linkage::One(identifier) => vec![identifier],
			Linkage::Many(identifiers) => identifiers.iter().collect(),
		}
	}
}

/// Relationship object; only linkage is emitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
	pub data: Linkage,
}

/// A single rendered resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceObject {
	pub id: String,
	#[serde(rename = "type")]
	pub kind: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub attributes: Option<IndexMap<String, Value>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub relationships: Option<IndexMap<String, Relationship>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub links: Option<Links>,
}

impl ResourceObject {
	/// `{id, type}` of this resource
	pub fn identifier(&self) -> ResourceIdentifier {
		ResourceIdentifier::new(self.id.clone(), self.kind.clone())
	}

	/// Attribute value by wire key
	pub fn attribute(&self, key: &str) -> Option<&Value> {
		self.attributes.as_ref().and_then(|a| a.get(key))
	}

	/// Relationship by wire key
	pub fn relationship(&self, key: &str) -> Option<&Relationship> {
		self.relationships.as_ref().and_then(|r| r.get(key))
	}
}

/// Primary `data` member; its shape mirrors the serializer input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimaryData {
	/// No primary resource, encoded as `null`
	Null,
	/// One primary resource
	Single(Box<ResourceObject>),
	/// Collection of primary resources, in input order
	Collection(Vec<ResourceObject>),
}

impl PrimaryData {
	/// Primary resources as a slice-like list
	pub fn resources(&self) -> Vec<&ResourceObject> {
		match self {
			PrimaryData::Null => Vec::new(),
			PrimaryData::Single(resource) => vec![&**resource],
			PrimaryData::Collection(resources) => resources.iter().collect(),
		}
	}
}

/// `jsonapi` member describing the implemented version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonApiObject {
	pub version: String,
}

/// A complete JSON:API document
///
/// # Examples
///
/// ```
/// use reinhardt_jsonapi_document::{Document, PrimaryData};
///
/// let document = Document::new(PrimaryData::Null);
/// assert_eq!(document.to_json_string().unwrap(), r#"{"data":null}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
	pub data: PrimaryData,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub included: Option<Vec<ResourceObject>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub meta: Option<Map<String, Value>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub links: Option<Links>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub jsonapi: Option<JsonApiObject>,
}

impl Document {
	/// Document with primary data only
	pub fn new(data: PrimaryData) -> Self {
		Self {
			data,
			included: None,
			meta: None,
			links: None,
			jsonapi: None,
		}
	}

	/// Included resources, empty when the member is absent
	pub fn included(&self) -> &[ResourceObject] {
		self.included.as_deref().unwrap_or_default()
	}

	/// Find an included resource by wire type and id
	pub fn find_included(&self, kind: &str, id: &str) -> Option<&ResourceObject> {
		self.included().iter().find(|r| r.kind == kind && r.id == id)
	}

	/// Encode as compact JSON
	pub fn to_json_string(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}

	/// Encode as a JSON value
	///
	/// Object members keep document order, so attributes appear as their
	/// descriptor declares them.
	pub fn to_json_value(&self) -> Result<Value> {
		Ok(serde_json::to_value(self)?)
	}

	/// Decode a document from its wire form
	pub fn from_json_str(raw: &str) -> Result<Self> {
		Ok(serde_json::from_str(raw)?)
	}
}
