//! Inclusion requests
//!
//! An inclusion request lists the relationships whose targets should be
//! expanded into the `included` member of a compound document.

use crate::error::{Result, SerializeError};
use reinhardt_resources::{RelationshipDescriptor, ResourceDescriptor};

/// Ordered set of relationship names to include
///
/// Duplicates collapse onto their first position, so processing order is
/// the order in which names were first requested.
///
/// # Examples
///
/// ```
/// use reinhardt_jsonapi_document::InclusionRequest;
///
/// let request = InclusionRequest::parse("bird, location,bird,");
/// assert_eq!(request.names(), ["bird", "location"]);
/// assert!(InclusionRequest::none().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InclusionRequest {
	names: Vec<String>,
}

impl InclusionRequest {
	/// Request the given relationship names, in order
	pub fn new<I, S>(names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut request = Self::default();
		for name in names {
			request.push(name.into());
		}
		request
	}

	/// Request nothing
	pub fn none() -> Self {
		Self::default()
	}

	/// Parse a comma separated `include` query parameter value
	pub fn parse(raw: &str) -> Self {
		Self::new(
			raw.split(',')
				.map(str::trim)
				.filter(|segment| !segment.is_empty()),
		)
	}

	fn push(&mut self, name: String) {
		if !self.names.contains(&name) {
			self.names.push(name);
		}
	}

	/// Requested names, in processing order
	pub fn names(&self) -> &[String] {
		&self.names
	}

	/// Whether nothing was requested
	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}

	/// Resolve every requested name against `descriptor`
	///
	/// Fails on the first name the descriptor does not declare. Names are
	/// matched exactly, so multi-level paths such as `bird.family` are
	/// reported as unknown.
	pub fn resolve<'d>(
		&self,
		descriptor: &'d ResourceDescriptor,
	) -> Result<Vec<&'d RelationshipDescriptor>> {
		self.names
			.iter()
			.map(|name| {
				descriptor
					.relationship(name)
					.ok_or_else(|| SerializeError::UnknownRelationship {
						type_name: descriptor.type_name().to_string(),
						relationship: name.clone(),
					})
			})
			.collect()
	}
}

impl<S: Into<String>> FromIterator<S> for InclusionRequest {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self::new(iter)
	}
}
