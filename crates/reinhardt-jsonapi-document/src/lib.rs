//! # reinhardt-jsonapi-document
//!
//! JSON:API compound document serialization for Reinhardt resources.
//!
//! Given resource instances, the descriptor of their type and an inclusion
//! request, `DocumentSerializer` produces a document with a `data` member
//! shaped like the input and an optional `included` member holding each
//! requested related resource exactly once, in first-discovered order.
//!
//! ## Features
//!
//! - **Compound documents**: relationship linkage on every resource, full
//!   related resources in `included` on request
//! - **Deduplication**: a resource reachable through several parents or
//!   relationships is included once, which also makes cyclic graphs safe
//! - **Options**: top-level `meta`, `links` and `jsonapi` members, key
//!   casing, per-resource `self` links
//! - **Settings**: resource declarations and options loaded from TOML
//!
//! ## Examples
//!
//! ```rust
//! use reinhardt_jsonapi_document::{DocumentSerializer, InclusionRequest};
//! use reinhardt_resources::{DescriptorRegistry, DynamicResource, ResourceDescriptor};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let registry = DescriptorRegistry::builder()
//!     .register(
//!         ResourceDescriptor::builder("sighting")
//!             .with_attribute("created_at")
//!             .belongs_to("bird", "bird")
//!             .build()
//!             .unwrap(),
//!     )
//!     .register(
//!         ResourceDescriptor::builder("bird")
//!             .with_attributes(["name", "species"])
//!             .build()
//!             .unwrap(),
//!     )
//!     .build()
//!     .unwrap();
//! let serializer = DocumentSerializer::new(Arc::new(registry));
//!
//! let bird = Arc::new(
//!     DynamicResource::new("bird", 2)
//!         .with_field("name", json!("Grackle"))
//!         .with_field("species", json!("Quiscalus Quiscula")),
//! );
//! let sighting = DynamicResource::new("sighting", 2)
//!     .with_field("created_at", json!("2019-05-14T16:39:37.011Z"))
//!     .with_one("bird", Some(bird));
//!
//! let document = serializer
//!     .serialize_one(&sighting, &InclusionRequest::parse("bird"))
//!     .unwrap();
//!
//! assert_eq!(document.included().len(), 1);
//! assert!(document.find_included("bird", "2").is_some());
//! ```

pub mod document;
pub mod error;
pub mod inclusion;
pub mod options;
pub mod serializer;
pub mod settings;

pub use document::{
	Document, JsonApiObject, Linkage, Links, PrimaryData, Relationship, ResourceIdentifier,
	ResourceObject,
};
pub use error::{Result, SerializeError, SettingsError};
pub use inclusion::InclusionRequest;
pub use options::{DocumentOptions, LinkResolver};
pub use serializer::{DocumentSerializer, Primary};
pub use settings::{RelationshipConfig, ResourceConfig, SerializerSettings};
