//! Document rendering options

use crate::document::Links;
use reinhardt_resources::{KeyTransform, ResourceId};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Produces per-resource `links.self` URLs
///
/// Implement this to tie documents to your router. Returning `None` omits
/// the `links` member for that resource.
///
/// # Examples
///
/// ```
/// use reinhardt_jsonapi_document::LinkResolver;
/// use reinhardt_resources::ResourceId;
///
/// struct ApiLinks;
///
/// impl LinkResolver for ApiLinks {
///     fn resource_link(&self, type_name: &str, id: &ResourceId) -> Option<String> {
///         Some(format!("/api/{}s/{}", type_name, id))
///     }
/// }
///
/// let links = ApiLinks;
/// assert_eq!(links.resource_link("bird", &2.into()).as_deref(), Some("/api/birds/2"));
/// ```
pub trait LinkResolver: Send + Sync {
	/// `self` link for a resource of `type_name` with `id`
	fn resource_link(&self, type_name: &str, id: &ResourceId) -> Option<String>;
}

/// Options applied to every document a serializer produces
///
/// # Examples
///
/// ```
/// use reinhardt_jsonapi_document::DocumentOptions;
/// use reinhardt_resources::KeyTransform;
///
/// let options = DocumentOptions::new()
///     .with_key_transform(KeyTransform::CamelLower)
///     .with_jsonapi_version("1.0");
///
/// assert_eq!(options.key_transform(), KeyTransform::CamelLower);
/// ```
#[non_exhaustive]
#[derive(Clone, Default)]
pub struct DocumentOptions {
	meta: Option<Map<String, Value>>,
	links: Option<Links>,
	jsonapi_version: Option<String>,
	key_transform: KeyTransform,
	link_resolver: Option<Arc<dyn LinkResolver>>,
	exclude_primary_from_included: bool,
}

impl DocumentOptions {
	/// Create default options
	pub fn new() -> Self {
		Self::default()
	}

	/// Attach a top-level `meta` object
	pub fn with_meta(mut self, meta: Map<String, Value>) -> Self {
		self.meta = Some(meta);
		self
	}

	/// Attach a top-level link
	pub fn with_link(mut self, name: impl Into<String>, href: impl Into<String>) -> Self {
		self.links
			.get_or_insert_with(Links::new)
			.insert(name.into(), href.into());
		self
	}

	/// Emit a `jsonapi` member with the given version
	pub fn with_jsonapi_version(mut self, version: impl Into<String>) -> Self {
		self.jsonapi_version = Some(version.into());
		self
	}

	/// Change the casing of member names
	pub fn with_key_transform(mut self, transform: KeyTransform) -> Self {
		self.key_transform = transform;
		self
	}

	/// Emit `links.self` for every resource object
	pub fn with_link_resolver(mut self, resolver: Arc<dyn LinkResolver>) -> Self {
		self.link_resolver = Some(resolver);
		self
	}

	/// Keep primary resources out of `included`
	///
	/// Off by default: a resource that is both primary data and the target of
	/// an included relationship is rendered in both places.
	pub fn with_exclude_primary_from_included(mut self, exclude: bool) -> Self {
		self.exclude_primary_from_included = exclude;
		self
	}

	/// Top-level meta
	pub fn meta(&self) -> Option<&Map<String, Value>> {
		self.meta.as_ref()
	}

	/// Top-level links
	pub fn links(&self) -> Option<&Links> {
		self.links.as_ref()
	}

	/// Version advertised in the `jsonapi` member
	pub fn jsonapi_version(&self) -> Option<&str> {
		self.jsonapi_version.as_deref()
	}

	/// Member name casing
	pub fn key_transform(&self) -> KeyTransform {
		self.key_transform
	}

	/// Resolver for per-resource links
	pub fn link_resolver(&self) -> Option<&dyn LinkResolver> {
		self.link_resolver.as_deref()
	}

	/// Whether primary resources are kept out of `included`
	pub fn exclude_primary_from_included(&self) -> bool {
		self.exclude_primary_from_included
	}
}

impl fmt::Debug for DocumentOptions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DocumentOptions")
			.field("meta", &self.meta)
			.field("links", &self.links)
			.field("jsonapi_version", &self.jsonapi_version)
			.field("key_transform", &self.key_transform)
			.field("link_resolver", &self.link_resolver.is_some())
			.field(
				"exclude_primary_from_included",
				&self.exclude_primary_from_included,
			)
			.finish()
	}
}
