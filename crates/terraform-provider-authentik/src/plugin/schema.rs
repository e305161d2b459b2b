// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Schema declarations for the provider, its resources and data sources.
//!
//! ```
//! use terraform_provider_authentik::plugin::{Attribute, Block};
//!
//! let schema = Block::new()
//! 	.attribute("name", Attribute::string().required())
//! 	.attribute("enabled", Attribute::bool().optional().default(true));
//! assert!(schema.get("name").unwrap().required);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Value type of an attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
	String,
	Int,
	Bool,
	List(Box<AttributeType>),
	Map(Box<AttributeType>),
	/// A list of nested objects sharing one schema.
	Nested(Block),
}

impl AttributeType {
	/// The value `get` falls back to when neither a value nor a default exists.
	pub fn zero_value(&self) -> Value {
		match self {
			AttributeType::String => Value::String(String::new()),
			AttributeType::Int => Value::from(0),
			AttributeType::Bool => Value::Bool(false),
			AttributeType::List(_) | AttributeType::Nested(_) => Value::Array(Vec::new()),
			AttributeType::Map(_) => Value::Object(Map::new()),
		}
	}

	/// Whether `value` has the JSON shape of this type. `null` always matches.
	pub fn accepts(&self, value: &Value) -> bool {
		match (self, value) {
			(_, Value::Null) => true,
			(AttributeType::String, Value::String(_)) => true,
			(AttributeType::Int, Value::Number(n)) => n.is_i64() || n.is_u64(),
			(AttributeType::Bool, Value::Bool(_)) => true,
			(AttributeType::List(elem), Value::Array(items)) => items.iter().all(|v| elem.accepts(v)),
			(AttributeType::Map(elem), Value::Object(items)) => items.values().all(|v| elem.accepts(v)),
			(AttributeType::Nested(_), Value::Array(items)) => items.iter().all(Value::is_object),
			_ => false,
		}
	}
}

/// Decides whether a change from `old` to `new` of attribute `key` is noise.
#[derive(Clone, Copy)]
pub struct DiffSuppressFn(pub fn(key: &str, old: &str, new: &str) -> bool);

impl fmt::Debug for DiffSuppressFn {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("DiffSuppressFn")
	}
}

impl PartialEq for DiffSuppressFn {
	fn eq(&self, other: &Self) -> bool {
		self.0 as usize == other.0 as usize
	}
}

fn serialize_diff_suppress<S: Serializer>(
	value: &Option<DiffSuppressFn>,
	serializer: S,
) -> Result<S::Ok, S::Error> {
	serializer.serialize_bool(value.is_some())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
	#[serde(rename = "type")]
	pub ty: AttributeType,
	pub required: bool,
	pub optional: bool,
	pub computed: bool,
	pub sensitive: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub default: Option<Value>,
	#[serde(skip_serializing_if = "String::is_empty")]
	pub description: String,
	#[serde(serialize_with = "serialize_diff_suppress")]
	pub diff_suppress: Option<DiffSuppressFn>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub conflicts_with: Vec<&'static str>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub exactly_one_of: Vec<&'static str>,
}

impl Attribute {
	pub fn new(ty: AttributeType) -> Self {
		Self {
			ty,
			required: false,
			optional: false,
			computed: false,
			sensitive: false,
			default: None,
			description: String::new(),
			diff_suppress: None,
			conflicts_with: Vec::new(),
			exactly_one_of: Vec::new(),
		}
	}

	pub fn string() -> Self {
		Self::new(AttributeType::String)
	}

	pub fn int() -> Self {
		Self::new(AttributeType::Int)
	}

	pub fn bool() -> Self {
		Self::new(AttributeType::Bool)
	}

	pub fn list(elem: AttributeType) -> Self {
		Self::new(AttributeType::List(Box::new(elem)))
	}

	pub fn map(elem: AttributeType) -> Self {
		Self::new(AttributeType::Map(Box::new(elem)))
	}

	pub fn nested(block: Block) -> Self {
		Self::new(AttributeType::Nested(block))
	}

	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	pub fn optional(mut self) -> Self {
		self.optional = true;
		self
	}

	pub fn computed(mut self) -> Self {
		self.computed = true;
		self
	}

	pub fn sensitive(mut self) -> Self {
		self.sensitive = true;
		self
	}

	pub fn default(mut self, value: impl Into<Value>) -> Self {
		self.default = Some(value.into());
		self
	}

	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	pub fn diff_suppress(mut self, f: fn(&str, &str, &str) -> bool) -> Self {
		self.diff_suppress = Some(DiffSuppressFn(f));
		self
	}

	pub fn conflicts_with(mut self, keys: &[&'static str]) -> Self {
		self.conflicts_with = keys.to_vec();
		self
	}

	pub fn exactly_one_of(mut self, keys: &[&'static str]) -> Self {
		self.exactly_one_of = keys.to_vec();
		self
	}

	/// Only the server sets this attribute.
	pub fn is_computed_only(&self) -> bool {
		self.computed && !self.optional && !self.required
	}

	/// The value read when the attribute is unset.
	pub fn fallback(&self) -> Value {
		self
			.default
			.clone()
			.unwrap_or_else(|| self.ty.zero_value())
	}
}

/// An ordered set of named attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Block {
	#[serde(skip_serializing_if = "String::is_empty")]
	pub description: String,
	pub attributes: BTreeMap<&'static str, Attribute>,
}

impl Block {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	pub fn attribute(mut self, name: &'static str, attribute: Attribute) -> Self {
		self.attributes.insert(name, attribute);
		self
	}

	pub fn get(&self, name: &str) -> Option<&Attribute> {
		self.attributes.get(name)
	}

	/// A copy where every attribute is computed-only and carries no defaults
	/// or cross-attribute constraints.
	pub fn as_computed(&self) -> Block {
		let attributes = self
			.attributes
			.iter()
			.map(|(name, attr)| {
				let ty = match &attr.ty {
					AttributeType::Nested(inner) => AttributeType::Nested(inner.as_computed()),
					other => other.clone(),
				};
				let computed = Attribute {
					ty,
					required: false,
					optional: false,
					computed: true,
					sensitive: attr.sensitive,
					default: None,
					description: attr.description.clone(),
					diff_suppress: attr.diff_suppress,
					conflicts_with: Vec::new(),
					exactly_one_of: Vec::new(),
				};
				(*name, computed)
			})
			.collect();
		Block {
			description: self.description.clone(),
			attributes,
		}
	}

	/// Resolve a flat attribute path such as `groups.0.attributes`.
	pub fn lookup(&self, key: &str) -> Option<&Attribute> {
		let mut parts = key.split('.');
		let mut attr = self.get(parts.next()?)?;
		let mut rest = parts.peekable();
		while rest.peek().is_some() {
			let AttributeType::Nested(block) = &attr.ty else {
				return None;
			};
			let index = rest.next()?;
			if index.parse::<usize>().is_err() {
				return None;
			}
			attr = block.get(rest.next()?)?;
		}
		Some(attr)
	}

	/// Whether the host should ignore a change of `key` from `old` to `new`.
	pub fn suppresses_diff(&self, key: &str, old: &str, new: &str) -> bool {
		self
			.lookup(key)
			.and_then(|attr| attr.diff_suppress)
			.is_some_and(|f| (f.0)(key, old, new))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn always(_: &str, _: &str, _: &str) -> bool {
		true
	}

	fn member() -> Block {
		Block::new()
			.attribute("pk", Attribute::int().computed())
			.attribute("attributes", Attribute::string().computed().diff_suppress(always))
	}

	#[test]
	fn fallback_prefers_default_over_zero() {
		assert_eq!(Attribute::int().optional().default(30).fallback(), json!(30));
		assert_eq!(Attribute::int().optional().fallback(), json!(0));
		assert_eq!(Attribute::list(AttributeType::String).fallback(), json!([]));
		assert_eq!(Attribute::map(AttributeType::String).fallback(), json!({}));
	}

	#[test]
	fn as_computed_strips_constraints() {
		let block = Block::new()
			.attribute("name", Attribute::string().optional().exactly_one_of(&["name", "pk"]))
			.attribute("include_users", Attribute::bool().optional().default(true))
			.attribute("users_obj", Attribute::nested(member()));
		let computed = block.as_computed();
		for attr in computed.attributes.values() {
			assert!(attr.is_computed_only());
			assert!(attr.default.is_none());
			assert!(attr.exactly_one_of.is_empty());
		}
	}

	#[test]
	fn lookup_walks_nested_indexes() {
		let block = Block::new().attribute("users_obj", Attribute::nested(member()));
		assert!(block.lookup("users_obj.0.pk").is_some());
		assert!(block.lookup("users_obj.x.pk").is_none());
		assert!(block.lookup("users_obj.0.missing").is_none());
		assert!(block.suppresses_diff("users_obj.3.attributes", "a", "b"));
		assert!(!block.suppresses_diff("users_obj.3.pk", "1", "2"));
	}

	#[test]
	fn type_shape_checks() {
		let list = AttributeType::List(Box::new(AttributeType::Int));
		assert!(list.accepts(&json!([1, 2])));
		assert!(!list.accepts(&json!(["1"])));
		assert!(AttributeType::String.accepts(&Value::Null));
		assert!(!AttributeType::Bool.accepts(&json!("true")));
	}

	#[test]
	fn schema_serializes_without_function_pointers() {
		let block = Block::new().attribute(
			"expression",
			Attribute::string().required().diff_suppress(always),
		);
		let value = serde_json::to_value(&block).unwrap();
		assert_eq!(value["attributes"]["expression"]["diff_suppress"], json!(true));
		assert_eq!(value["attributes"]["expression"]["type"], json!("string"));
	}
}
