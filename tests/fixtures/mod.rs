//! Shared fixtures for reinhardt-jsonapi tests
//!
//! Models the bird-watching domain: sightings of birds at locations, plus
//! a self-referential `person` type for cyclic graphs.

#![allow(dead_code)]

use reinhardt_jsonapi::prelude::*;
use rstest::fixture;
use serde_json::{Value, json};
use std::sync::{Arc, OnceLock};

#[derive(Debug, Clone)]
pub struct Bird {
	pub id: i64,
	pub name: String,
	pub species: String,
}

impl Resource for Bird {
	fn resource_type(&self) -> &str {
		Self::TYPE_NAME
	}

	fn resource_id(&self) -> ResourceId {
		self.id.into()
	}

	fn attribute(&self, name: &str) -> Option<Value> {
		match name {
			"name" => Some(json!(self.name)),
			"species" => Some(json!(self.species)),
			_ => None,
		}
	}

	fn related(&self, _accessor: &str) -> Related<'_> {
		Related::None
	}
}

impl ResourceSchema for Bird {
	const TYPE_NAME: &'static str = "bird";
	const ATTRIBUTES: &'static [&'static str] = &["name", "species"];
	const RELATIONSHIPS: &'static [&'static str] = &[];
}

#[derive(Debug, Clone)]
pub struct Location {
	pub id: i64,
	pub latitude: f64,
	pub longitude: f64,
}

impl Resource for Location {
	fn resource_type(&self) -> &str {
		Self::TYPE_NAME
	}

	fn resource_id(&self) -> ResourceId {
		self.id.into()
	}

	fn attribute(&self, name: &str) -> Option<Value> {
		match name {
			"latitude" => Some(json!(self.latitude)),
			"longitude" => Some(json!(self.longitude)),
			_ => None,
		}
	}

	fn related(&self, _accessor: &str) -> Related<'_> {
		Related::None
	}
}

impl ResourceSchema for Location {
	const TYPE_NAME: &'static str = "location";
	const ATTRIBUTES: &'static [&'static str] = &["latitude", "longitude"];
	const RELATIONSHIPS: &'static [&'static str] = &[];
}

#[derive(Debug, Clone)]
pub struct Sighting {
	pub id: i64,
	pub created_at: String,
	pub updated_at: String,
	pub bird: Option<Arc<Bird>>,
	pub location: Option<Arc<Location>>,
}

impl Resource for Sighting {
	fn resource_type(&self) -> &str {
		Self::TYPE_NAME
	}

	fn resource_id(&self) -> ResourceId {
		self.id.into()
	}

	fn attribute(&self, name: &str) -> Option<Value> {
		match name {
			"created_at" => Some(json!(self.created_at)),
			"updated_at" => Some(json!(self.updated_at)),
			_ => None,
		}
	}

	fn related(&self, accessor: &str) -> Related<'_> {
		match accessor {
			"bird" => self.bird.as_deref().into(),
			"location" => self.location.as_deref().into(),
			_ => Related::None,
		}
	}
}

impl ResourceSchema for Sighting {
	const TYPE_NAME: &'static str = "sighting";
	const ATTRIBUTES: &'static [&'static str] = &["created_at", "updated_at"];
	const RELATIONSHIPS: &'static [&'static str] = &["bird", "location"];
}

/// Person with friends; friends are set after construction so cycles can form
#[derive(Debug)]
pub struct Person {
	pub id: i64,
	pub name: String,
	pub friends: OnceLock<Vec<Arc<Person>>>,
}

impl Person {
	pub fn new(id: i64, name: &str) -> Arc<Self> {
		Arc::new(Self {
			id,
			name: name.to_string(),
			friends: OnceLock::new(),
		})
	}

	pub fn befriend(&self, friends: Vec<Arc<Person>>) {
		self.friends
			.set(friends)
			.expect("friends are assigned once per fixture");
	}
}

impl Resource for Person {
	fn resource_type(&self) -> &str {
		Self::TYPE_NAME
	}

	fn resource_id(&self) -> ResourceId {
		self.id.into()
	}

	fn attribute(&self, name: &str) -> Option<Value> {
		match name {
			"name" => Some(json!(self.name)),
			_ => None,
		}
	}

	fn related(&self, accessor: &str) -> Related<'_> {
		match (accessor, self.friends.get()) {
			("friends", Some(friends)) => Related::many(friends.iter().map(|friend| &**friend)),
			_ => Related::None,
		}
	}
}

impl ResourceSchema for Person {
	const TYPE_NAME: &'static str = "person";
	const ATTRIBUTES: &'static [&'static str] = &["name"];
	const RELATIONSHIPS: &'static [&'static str] = &["friends"];
}

pub const CREATED_AT: &str = "2019-05-14T16:39:37.011Z";

pub fn grackle() -> Arc<Bird> {
	Arc::new(Bird {
		id: 2,
		name: "Grackle".to_string(),
		species: "Quiscalus Quiscula".to_string(),
	})
}

pub fn austin() -> Arc<Location> {
	Arc::new(Location {
		id: 2,
		latitude: 30.26715,
		longitude: -97.74306,
	})
}

pub fn sighting(id: i64, bird: Option<Arc<Bird>>, location: Option<Arc<Location>>) -> Sighting {
	Sighting {
		id,
		created_at: CREATED_AT.to_string(),
		updated_at: "2019-05-15T08:00:00.000Z".to_string(),
		bird,
		location,
	}
}

/// Descriptor registry for the bird-watching domain
#[fixture]
pub fn registry() -> Arc<DescriptorRegistry> {
	let registry = DescriptorRegistry::builder()
		.register(
			ResourceDescriptor::for_schema::<Sighting>()
				.with_attribute("created_at")
				.belongs_to("bird", "bird")
				.belongs_to("location", "location")
				.build()
				.unwrap(),
		)
		.register(
			ResourceDescriptor::for_schema::<Bird>()
				.with_attributes(["name", "species"])
				.build()
				.unwrap(),
		)
		.register(
			ResourceDescriptor::for_schema::<Location>()
				.with_attributes(["latitude", "longitude"])
				.build()
				.unwrap(),
		)
		.register(
			ResourceDescriptor::for_schema::<Person>()
				.with_attribute("name")
				.has_many("friends", "person")
				.build()
				.unwrap(),
		)
		.build()
		.unwrap();
	Arc::new(registry)
}

#[fixture]
pub fn serializer(registry: Arc<DescriptorRegistry>) -> DocumentSerializer {
	DocumentSerializer::new(registry)
}

/// Sighting descriptor without relationships
pub fn plain_sighting_descriptor() -> ResourceDescriptor {
	ResourceDescriptor::for_schema::<Sighting>()
		.with_attribute("created_at")
		.build()
		.unwrap()
}
