// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Request and response shapes of the authentik API.
//!
//! Field conventions:
//! - `Option<T>` with `skip_serializing_if` is omitted from the request when unset.
//! - `Option<T>` without it is sent as an explicit `null`, which clears the
//!   value on the server.

use thiserror::Error;

/// A string did not name a known variant of an API enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} '{value}', expected one of: {}", .expected.join(", "))]
pub struct UnknownVariant {
	pub kind: &'static str,
	pub value: String,
	pub expected: &'static [&'static str],
}

/// Declares a string-valued API enum with serde, `Display` and `FromStr`.
macro_rules! string_enum {
	(
		$(#[$meta:meta])*
		$name:ident {
			$( $variant:ident => $value:literal ),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
		pub enum $name {
			$(
				#[serde(rename = $value)]
				$variant,
			)+
		}

		impl $name {
			pub const VALUES: &'static [&'static str] = &[$($value),+];

			pub fn as_str(&self) -> &'static str {
				match self {
					$( $name::$variant => $value, )+
				}
			}
		}

		impl std::fmt::Display for $name {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.write_str(self.as_str())
			}
		}

		impl std::str::FromStr for $name {
			type Err = $crate::models::UnknownVariant;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				match s {
					$( $value => Ok($name::$variant), )+
					other => Err($crate::models::UnknownVariant {
						kind: stringify!($name),
						value: other.to_string(),
						expected: Self::VALUES,
					}),
				}
			}
		}
	};
}

pub mod groups;
pub mod policies;
pub mod propertymappings;
pub mod providers;
pub mod sources;
pub mod stages;

pub use groups::{Group, GroupListQuery, GroupMember, GroupRequest};
pub use policies::{PolicyBinding, PolicyBindingRequest};
pub use propertymappings::{
	LdapPropertyMapping, LdapPropertyMappingListQuery, SamlPropertyMapping,
	SamlPropertyMappingRequest,
};
pub use providers::{ScimProvider, ScimProviderRequest};
pub use sources::{OAuthSource, OAuthSourceRequest, PolicyEngineMode, UserMatchingMode};
pub use stages::{
	AuthenticatorStaticStage, AuthenticatorStaticStageRequest, AuthenticatorValidateStage,
	AuthenticatorValidateStageRequest, DeviceClass, NotConfiguredAction, UserVerification,
};

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unknown_variant_lists_expected_values() {
		let err = "maybe".parse::<PolicyEngineMode>().unwrap_err();
		assert_eq!(
			err.to_string(),
			"invalid PolicyEngineMode 'maybe', expected one of: all, any"
		);
	}

	#[test]
	fn variants_round_trip_through_strings() {
		for value in DeviceClass::VALUES {
			let parsed: DeviceClass = value.parse().unwrap();
			assert_eq!(parsed.as_str(), *value);
			assert_eq!(
				serde_json::to_value(parsed).unwrap(),
				serde_json::json!(value)
			);
		}
	}
}
