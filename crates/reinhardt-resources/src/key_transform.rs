//! Member name casing for the wire format

use heck::{ToKebabCase, ToLowerCamelCase, ToSnakeCase, ToUpperCamelCase};
use serde::{Deserialize, Serialize};

/// Casing applied to attribute keys, relationship keys and type names
///
/// # Examples
///
/// ```
/// use reinhardt_resources::KeyTransform;
///
/// assert_eq!(KeyTransform::CamelLower.apply("created_at"), "createdAt");
/// assert_eq!(KeyTransform::Dash.apply("created_at"), "created-at");
/// assert_eq!(KeyTransform::Unaltered.apply("created_at"), "created_at");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyTransform {
	/// Keys are emitted as declared
	#[default]
	Unaltered,
	/// `created_at` becomes `CreatedAt`
	Camel,
	/// `created_at` becomes `createdAt`
	CamelLower,
	/// `created_at` becomes `created-at`
	Dash,
	/// `createdAt` becomes `created_at`
	Underscore,
}

impl KeyTransform {
	/// Apply the transform to a single key
	pub fn apply(self, key: &str) -> String {
		match self {
			KeyTransform::Unaltered => key.to_string(),
			KeyTransform::Camel => key.to_upper_camel_case(),
			KeyTransform::CamelLower => key.to_lower_camel_case(),
			KeyTransform::Dash => key.to_kebab_case(),
			KeyTransform::Underscore => key.to_snake_case(),
		}
	}
}
