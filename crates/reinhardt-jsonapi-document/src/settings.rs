//! Declarative serializer settings
//!
//! Settings let an application describe its resource types and document
//! options in TOML, loaded once at startup:
//!
//! ```toml
//! key_transform = "unaltered"
//! jsonapi_version = "1.0"
//!
//! [[resources]]
//! type = "sighting"
//! attributes = ["created_at"]
//! relationships = [
//!     { name = "bird", target = "bird" },
//!     { name = "location", target = "location" },
//! ]
//!
//! [[resources]]
//! type = "bird"
//! attributes = ["name", "species"]
//! ```

use crate::error::SettingsError;
use crate::options::DocumentOptions;
use crate::serializer::DocumentSerializer;
use reinhardt_resources::{
	Cardinality, DescriptorError, DescriptorRegistryBuilder, KeyTransform, RelationshipDescriptor,
	ResourceDescriptor,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// One relationship entry under `[[resources]]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelationshipConfig {
	pub name: String,
	pub target: String,
	#[serde(default = "default_cardinality")]
	pub cardinality: Cardinality,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub accessor: Option<String>,
	#[serde(default)]
	pub polymorphic: bool,
}

fn default_cardinality() -> Cardinality {
	Cardinality::One
}

/// One `[[resources]]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceConfig {
	#[serde(rename = "type")]
	pub type_name: String,
	#[serde(default)]
	pub attributes: Vec<String>,
	#[serde(default)]
	pub relationships: Vec<RelationshipConfig>,
}

impl TryFrom<&ResourceConfig> for ResourceDescriptor {
	type Error = DescriptorError;

	fn try_from(config: &ResourceConfig) -> Result<Self, Self::Error> {
		let mut builder = ResourceDescriptor::builder(config.type_name.clone())
			.with_attributes(config.attributes.iter().cloned());
		for relationship in &config.relationships {
			let mut declared = RelationshipDescriptor::new(
				relationship.name.clone(),
				relationship.target.clone(),
				relationship.cardinality,
			);
			if let Some(accessor) = &relationship.accessor {
				declared = declared.with_accessor(accessor.clone());
			}
			if relationship.polymorphic {
				declared = declared.polymorphic();
			}
			builder = builder.with_relationship(declared);
		}
		builder.build()
	}
}

/// Serializer configuration loaded from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SerializerSettings {
	pub key_transform: KeyTransform,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub jsonapi_version: Option<String>,
	pub exclude_primary_from_included: bool,
	pub resources: Vec<ResourceConfig>,
}

impl SerializerSettings {
	/// Parse settings from a TOML string
	pub fn from_toml_str(raw: &str) -> Result<Self, SettingsError> {
		Ok(toml::from_str(raw)?)
	}

	/// Read and parse a TOML settings file
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let path = path.as_ref();
		let raw = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
			path: path.display().to_string(),
			source,
		})?;
		let settings = Self::from_toml_str(&raw)?;
		tracing::debug!(
			path = %path.display(),
			resources = settings.resources.len(),
			"loaded serializer settings"
		);
		Ok(settings)
	}

	/// Registry builder holding every declared resource
	///
	/// Returned unbuilt so callers can add descriptors or schema checks
	/// before validation.
	pub fn registry_builder(&self) -> Result<DescriptorRegistryBuilder, DescriptorError> {
		let descriptors = self
			.resources
			.iter()
			.map(ResourceDescriptor::try_from)
			.collect::<Result<Vec<_>, _>>()?;
		Ok(reinhardt_resources::DescriptorRegistry::builder().register_all(descriptors))
	}

	/// Document options described by these settings
	pub fn document_options(&self) -> DocumentOptions {
		let mut options = DocumentOptions::new()
			.with_key_transform(self.key_transform)
			.with_exclude_primary_from_included(self.exclude_primary_from_included);
		if let Some(version) = &self.jsonapi_version {
			options = options.with_jsonapi_version(version.clone());
		}
		options
	}
}

impl DocumentSerializer {
	/// Build a serializer entirely from settings
	pub fn from_settings(settings: &SerializerSettings) -> Result<Self, SettingsError> {
		let registry = settings.registry_builder()?.build()?;
		Ok(DocumentSerializer::new(Arc::new(registry)).with_options(settings.document_options()))
	}
}
