// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Checks a configuration against a schema before any API call is made.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use super::data::is_zero;
use super::diagnostics::{Diagnostic, Diagnostics};
use super::schema::{AttributeType, Block};

/// Validate `config` against `block`: unknown and server-only attributes,
/// missing required attributes, value types, `conflicts_with` and
/// `exactly_one_of`.
pub fn validate(block: &Block, config: &Map<String, Value>) -> Diagnostics {
	let mut diags = Diagnostics::new();
	validate_at(block, config, "", &mut diags);
	diags
}

fn is_set(config: &Map<String, Value>, key: &str) -> bool {
	config.get(key).is_some_and(|v| !v.is_null())
}

fn validate_at(block: &Block, config: &Map<String, Value>, prefix: &str, diags: &mut Diagnostics) {
	for key in config.keys() {
		if block.get(key).is_none() {
			diags.push(
				Diagnostic::error("Unsupported argument")
					.with_detail(format!("An argument named \"{key}\" is not expected here."))
					.with_attribute(format!("{prefix}{key}")),
			);
		}
	}

	let mut checked_groups = BTreeSet::new();

	for (name, attr) in &block.attributes {
		let value = config.get(*name).filter(|v| !v.is_null());

		if attr.required && value.is_none() {
			diags.push(
				Diagnostic::error("Missing required argument")
					.with_detail(format!("The argument \"{name}\" is required, but no definition was found."))
					.with_attribute(format!("{prefix}{name}")),
			);
		}

		let Some(value) = value else {
			continue;
		};

		if attr.is_computed_only() {
			diags.push(
				Diagnostic::error("Value for unconfigurable attribute")
					.with_detail(format!("Can't configure a value for \"{name}\": its value will be decided automatically."))
					.with_attribute(format!("{prefix}{name}")),
			);
			continue;
		}

		if !attr.ty.accepts(value) {
			diags.push(
				Diagnostic::error("Incorrect attribute value type")
					.with_detail(format!("Inappropriate value for attribute \"{name}\"."))
					.with_attribute(format!("{prefix}{name}")),
			);
			continue;
		}

		if let (AttributeType::Nested(inner), Value::Array(items)) = (&attr.ty, value) {
			for (i, item) in items.iter().enumerate() {
				if let Value::Object(item) = item {
					validate_at(inner, item, &format!("{prefix}{name}.{i}."), diags);
				}
			}
		}

		for other in &attr.conflicts_with {
			if is_set(config, other) {
				diags.push(
					Diagnostic::error("Conflicting configuration arguments")
						.with_detail(format!("\"{name}\": conflicts with {other}"))
						.with_attribute(format!("{prefix}{name}")),
				);
			}
		}
	}

	for attr in block.attributes.values() {
		if attr.exactly_one_of.is_empty() {
			continue;
		}
		let mut group = attr.exactly_one_of.clone();
		group.sort_unstable();
		if !checked_groups.insert(group.clone()) {
			continue;
		}
		let set = group
			.iter()
			.filter(|key| config.get(**key).is_some_and(|v| !is_zero(v)))
			.count();
		if set != 1 {
			let keys = group.join(",");
			let detail = if set == 0 {
				format!("one of `{keys}` must be specified")
			} else {
				format!("only one of `{keys}` can be specified")
			};
			diags.push(Diagnostic::error("Invalid combination of arguments").with_detail(detail));
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::plugin::schema::Attribute;
	use serde_json::json;

	fn config(value: Value) -> Map<String, Value> {
		match value {
			Value::Object(map) => map,
			_ => panic!("object expected"),
		}
	}

	fn summaries(diags: &Diagnostics) -> Vec<&str> {
		diags.iter().map(|d| d.summary.as_str()).collect()
	}

	#[test]
	fn reports_missing_required_and_unknown() {
		let block = Block::new().attribute("name", Attribute::string().required());
		let diags = validate(&block, &config(json!({"nmae": "x"})));
		assert_eq!(
			summaries(&diags),
			vec!["Unsupported argument", "Missing required argument"]
		);
	}

	#[test]
	fn rejects_computed_only_and_wrong_types() {
		let block = Block::new()
			.attribute("callback_uri", Attribute::string().computed())
			.attribute("order", Attribute::int().required());
		let diags = validate(&block, &config(json!({"callback_uri": "x", "order": "10"})));
		assert_eq!(
			summaries(&diags),
			vec!["Value for unconfigurable attribute", "Incorrect attribute value type"]
		);
	}

	#[test]
	fn conflicts_with_fires_when_both_set() {
		let block = Block::new()
			.attribute("name", Attribute::string().optional().conflicts_with(&["managed_list"]))
			.attribute("managed_list", Attribute::list(AttributeType::String).optional());
		assert!(validate(&block, &config(json!({"name": "x"}))).is_empty());
		let diags = validate(&block, &config(json!({"name": "x", "managed_list": ["a"]})));
		assert_eq!(summaries(&diags), vec!["Conflicting configuration arguments"]);
	}

	#[test]
	fn exactly_one_of_reports_once_per_group() {
		let block = Block::new()
			.attribute("name", Attribute::string().optional().exactly_one_of(&["name", "pk"]))
			.attribute("pk", Attribute::string().optional().exactly_one_of(&["name", "pk"]));
		assert!(validate(&block, &config(json!({"pk": "g-1"}))).is_empty());
		assert_eq!(validate(&block, &config(json!({}))).len(), 1);
		assert_eq!(validate(&block, &config(json!({"name": "a", "pk": "b"}))).len(), 1);
	}

	#[test]
	fn nested_items_are_validated_with_paths() {
		let inner = Block::new().attribute("pk", Attribute::int().required());
		let block = Block::new().attribute("items", Attribute::nested(inner).optional());
		let diags = validate(&block, &config(json!({"items": [{"pk": 1}, {}]})));
		assert_eq!(diags.len(), 1);
		assert_eq!(
			diags.iter().next().unwrap().attribute.as_deref(),
			Some("items.1.pk")
		);
	}
}
