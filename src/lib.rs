//! # Reinhardt JSON:API
//!
//! JSON:API compound document serialization for Reinhardt applications.
//!
//! Models stay plain structs: instead of inheriting serializer behavior,
//! each resource type gets a `ResourceDescriptor` configured once at
//! startup, and a `DocumentSerializer` renders instances through it.
//!
//! ## Crates
//!
//! - [`resources`]: resource traits, descriptors and the descriptor registry
//! - [`document`]: wire types, inclusion requests, options and the serializer
//!
//! ## Quick Example
//!
//! ```rust
//! use reinhardt_jsonapi::prelude::*;
//! use serde_json::{Value, json};
//! use std::sync::Arc;
//!
//! struct Sighting {
//!     id: i64,
//!     created_at: String,
//! }
//!
//! impl Resource for Sighting {
//!     fn resource_type(&self) -> &str { Self::TYPE_NAME }
//!     fn resource_id(&self) -> ResourceId { self.id.into() }
//!     fn attribute(&self, name: &str) -> Option<Value> {
//!         match name {
//!             "created_at" => Some(json!(self.created_at)),
//!             _ => None,
//!         }
//!     }
//!     fn related(&self, _accessor: &str) -> Related<'_> { Related::None }
//! }
//!
//! impl ResourceSchema for Sighting {
//!     const TYPE_NAME: &'static str = "sighting";
//!     const ATTRIBUTES: &'static [&'static str] = &["created_at"];
//!     const RELATIONSHIPS: &'static [&'static str] = &[];
//! }
//!
//! let registry = DescriptorRegistry::builder()
//!     .register(
//!         ResourceDescriptor::for_schema::<Sighting>()
//!             .with_attribute("created_at")
//!             .build()
//!             .unwrap(),
//!     )
//!     .build()
//!     .unwrap();
//! let serializer = DocumentSerializer::new(Arc::new(registry));
//!
//! let sighting = Sighting { id: 2, created_at: "2019-05-14T16:39:37.011Z".to_string() };
//! let document = serializer.serialize_one(&sighting, &InclusionRequest::none()).unwrap();
//!
//! assert_eq!(
//!     document.to_json_string().unwrap(),
//!     r#"{"data":{"id":"2","type":"sighting","attributes":{"created_at":"2019-05-14T16:39:37.011Z"}}}"#
//! );
//! ```

pub use reinhardt_jsonapi_document as document;
pub use reinhardt_resources as resources;

pub use reinhardt_jsonapi_document::{
	Document, DocumentOptions, DocumentSerializer, InclusionRequest, LinkResolver, Linkage,
	Primary, PrimaryData, Relationship, ResourceIdentifier, ResourceObject, SerializeError,
	SerializerSettings, SettingsError,
};
pub use reinhardt_resources::{
	Cardinality, DescriptorError, DescriptorRegistry, DynamicResource, KeyTransform, Related,
	RelationshipDescriptor, Resource, ResourceDescriptor, ResourceId, ResourceSchema,
};

/// Prelude module for convenient imports
pub mod prelude {
	pub use reinhardt_jsonapi_document::{
		Document, DocumentOptions, DocumentSerializer, InclusionRequest, LinkResolver, Primary,
		SerializeError, SerializerSettings,
	};
	pub use reinhardt_resources::{
		Cardinality, DescriptorError, DescriptorRegistry, DynamicResource, KeyTransform, Related,
		RelationshipDescriptor, Resource, ResourceDescriptor, ResourceId, ResourceSchema,
	};
}
