//! # reinhardt-resources
//!
//! Resource model for JSON:API serialization in Reinhardt.
//!
//! This crate describes *what* gets serialized: resource instances, the
//! per-type descriptors that choose their attributes and relationships, and
//! the registry that ties type names to descriptors. Rendering documents is
//! the job of `reinhardt-jsonapi-document`.
//!
//! ## Features
//!
//! - **Resource traits**: object-safe `Resource` view over any model, plus
//!   `ResourceSchema` for compile-time capability lists
//! - **Descriptors**: validated, immutable attribute and relationship
//!   configuration built once at startup
//! - **Registry**: type name lookup with cross-type reference checks
//! - **Dynamic resources**: map-backed instances for untyped rows
//!
//! ## Examples
//!
//! ```rust
//! use reinhardt_resources::{DescriptorRegistry, ResourceDescriptor};
//!
//! let registry = DescriptorRegistry::builder()
//!     .register(
//!         ResourceDescriptor::builder("bird")
//!             .with_attributes(["name", "species"])
//!             .build()
//!             .unwrap(),
//!     )
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(registry.get("bird").unwrap().attribute_names(), ["name", "species"]);
//! ```

pub mod descriptor;
pub mod dynamic;
pub mod error;
pub mod id;
pub mod key_transform;
pub mod registry;
pub mod resource;

pub use descriptor::{
	Cardinality, RelationshipDescriptor, ResourceDescriptor, ResourceDescriptorBuilder,
};
pub use dynamic::{DynamicRelation, DynamicResource};
pub use error::{DescriptorError, Result};
pub use id::ResourceId;
pub use key_transform::KeyTransform;
pub use registry::{DescriptorRegistry, DescriptorRegistryBuilder};
pub use resource::{Related, Resource, ResourceSchema};
