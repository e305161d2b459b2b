// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared pieces of the resource handlers.

use std::str::FromStr;

use authentik_api::models::UnknownVariant;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{ProviderError, Result};
use crate::plugin::ResourceData;

/// Unwrap an API result, treating `404 Not Found` as "the object is gone":
/// the id is cleared and `None` returned.
pub(crate) fn found<T>(data: &mut ResourceData, result: authentik_api::Result<T>) -> Result<Option<T>> {
	match result {
		Ok(value) => Ok(Some(value)),
		Err(e) if e.is_not_found() => {
			debug!(id = data.id(), "object no longer exists, removing from state");
			data.set_id("");
			Ok(None)
		}
		Err(e) => Err(e.into()),
	}
}

/// Two JSON documents that parse to the same value are the same.
pub fn diff_suppress_json(_key: &str, old: &str, new: &str) -> bool {
	match (
		serde_json::from_str::<Value>(old),
		serde_json::from_str::<Value>(new),
	) {
		(Ok(old), Ok(new)) => old == new,
		_ => false,
	}
}

/// Expressions differing only in leading or trailing whitespace are the same.
pub fn diff_suppress_expression(_key: &str, old: &str, new: &str) -> bool {
	old.trim() == new.trim()
}

/// Decode a JSON object held in a string attribute. Empty means `{}`.
pub(crate) fn json_object(data: &ResourceData, key: &str) -> Result<Map<String, Value>> {
	let text = data.get_string(key);
	if text.trim().is_empty() {
		return Ok(Map::new());
	}
	serde_json::from_str(&text).map_err(|e| ProviderError::json(key, e))
}

/// Encode a JSON object for a string attribute.
pub(crate) fn json_string(key: &str, value: &Map<String, Value>) -> Result<String> {
	serde_json::to_string(value).map_err(|e| ProviderError::json(key, e))
}

/// Parse a string attribute into one of the API's enums.
pub(crate) fn enum_value<T>(data: &ResourceData, key: &str) -> Result<T>
where
	T: FromStr<Err = UnknownVariant>,
{
	data
		.get_string(key)
		.parse()
		.map_err(|e: UnknownVariant| ProviderError::invalid_attribute(key, e.to_string()))
}
