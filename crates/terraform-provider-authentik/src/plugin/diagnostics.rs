// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Structured errors and warnings reported back to the host.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
	Error,
	Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub severity: Severity,
	pub summary: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub detail: Option<String>,
	/// Attribute path the diagnostic refers to, such as `users_obj.0.pk`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub attribute: Option<String>,
}

impl Diagnostic {
	pub fn error(summary: impl Into<String>) -> Self {
		Self {
			severity: Severity::Error,
			summary: summary.into(),
			detail: None,
			attribute: None,
		}
	}

	pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
		self.detail = Some(detail.into());
		self
	}

	pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
		self.attribute = Some(attribute.into());
		self
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, diagnostic: Diagnostic) {
		self.0.push(diagnostic);
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn has_error(&self) -> bool {
		self.0.iter().any(|d| d.severity == Severity::Error)
	}

	pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
		self.0.iter()
	}
}

impl From<Diagnostic> for Diagnostics {
	fn from(diagnostic: Diagnostic) -> Self {
		Self(vec![diagnostic])
	}
}

impl FromIterator<Diagnostic> for Diagnostics {
	fn from_iter<I: IntoIterator<Item = Diagnostic>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl IntoIterator for Diagnostics {
	type Item = Diagnostic;
	type IntoIter = std::vec::IntoIter<Diagnostic>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}
