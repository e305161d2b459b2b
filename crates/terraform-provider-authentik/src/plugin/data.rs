// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The flat attribute map handed to every resource and data-source handler.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;

use super::schema::Block;

/// `null`, `""`, `0`, `false`, `[]` and `{}` count as unset for `get_ok*`.
pub fn is_zero(value: &Value) -> bool {
	match value {
		Value::Null => true,
		Value::Bool(b) => !b,
		Value::Number(n) => n.as_f64() == Some(0.0),
		Value::String(s) => s.is_empty(),
		Value::Array(items) => items.is_empty(),
		Value::Object(items) => items.is_empty(),
	}
}

/// Attribute values of one resource instance plus its id.
///
/// An empty id means the object does not exist (anymore).
#[derive(Debug, Clone)]
pub struct ResourceData {
	id: String,
	schema: Block,
	values: Map<String, Value>,
}

impl ResourceData {
	pub fn new(schema: Block, values: Map<String, Value>) -> Self {
		Self {
			id: String::new(),
			schema,
			values,
		}
	}

	pub fn with_id(mut self, id: impl Into<String>) -> Self {
		self.id = id.into();
		self
	}

	pub fn id(&self) -> &str {
		&self.id
	}

	pub fn set_id(&mut self, id: impl Into<String>) {
		self.id = id.into();
	}

	pub fn schema(&self) -> &Block {
		&self.schema
	}

	pub fn values(&self) -> &Map<String, Value> {
		&self.values
	}

	/// The stored value, else the schema default, else the zero value.
	pub fn get(&self, key: &str) -> Value {
		match self.values.get(key) {
			Some(value) if !value.is_null() => value.clone(),
			_ => match self.schema.get(key) {
				Some(attr) => attr.fallback(),
				None => {
					warn!(key, "read of attribute not declared in schema");
					Value::Null
				}
			},
		}
	}

	/// The stored value if it is set and not the zero value.
	pub fn get_ok(&self, key: &str) -> Option<Value> {
		self
			.values
			.get(key)
			.filter(|value| !is_zero(value))
			.cloned()
	}

	pub fn get_string(&self, key: &str) -> String {
		match self.get(key) {
			Value::String(s) => s,
			_ => String::new(),
		}
	}

	pub fn get_int(&self, key: &str) -> i64 {
		self.get(key).as_i64().unwrap_or_default()
	}

	pub fn get_bool(&self, key: &str) -> bool {
		self.get(key).as_bool().unwrap_or_default()
	}

	pub fn get_string_list(&self, key: &str) -> Vec<String> {
		match self.get(key) {
			Value::Array(items) => items
				.into_iter()
				.filter_map(|v| match v {
					Value::String(s) => Some(s),
					_ => None,
				})
				.collect(),
			_ => Vec::new(),
		}
	}

	pub fn get_int_list(&self, key: &str) -> Vec<i64> {
		match self.get(key) {
			Value::Array(items) => items.iter().filter_map(Value::as_i64).collect(),
			_ => Vec::new(),
		}
	}

	pub fn get_ok_string(&self, key: &str) -> Option<String> {
		match self.get_ok(key)? {
			Value::String(s) => Some(s),
			_ => None,
		}
	}

	pub fn get_ok_int(&self, key: &str) -> Option<i64> {
		self.get_ok(key)?.as_i64()
	}

	pub fn get_ok_bool(&self, key: &str) -> Option<bool> {
		self.get_ok(key)?.as_bool()
	}

	pub fn get_ok_string_list(&self, key: &str) -> Option<Vec<String>> {
		self.get_ok(key)?;
		Some(self.get_string_list(key))
	}

	pub fn get_ok_int_list(&self, key: &str) -> Option<Vec<i64>> {
		self.get_ok(key)?;
		Some(self.get_int_list(key))
	}

	/// Store `value` under `key`. Failures are logged and the old value kept.
	pub fn set<T: Serialize>(&mut self, key: &str, value: T) {
		let Some(attr) = self.schema.get(key) else {
			warn!(key, "failed to set attribute: not declared in schema");
			return;
		};
		let value = match serde_json::to_value(value) {
			Ok(value) => value,
			Err(e) => {
				warn!(key, error = %e, "failed to set attribute");
				return;
			}
		};
		if !attr.ty.accepts(&value) {
			warn!(key, ty = ?attr.ty, "failed to set attribute: value has the wrong type");
			return;
		}
		self.values.insert(key.to_string(), value);
	}

	/// The state to hand back to the host, or `None` once the object is gone.
	pub fn to_state(&self) -> Option<Value> {
		if self.id.is_empty() {
			return None;
		}
		let mut state = self.values.clone();
		state.insert("id".to_string(), Value::String(self.id.clone()));
		Some(Value::Object(state))
	}
}
