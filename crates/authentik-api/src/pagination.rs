// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Paginated list envelopes.

use serde::{Deserialize, Serialize};

/// Page cursor block returned by every list endpoint.
///
/// authentik reports absent neighbours as `0` rather than `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
	pub next: i64,
	pub previous: i64,
	pub count: i64,
	pub current: i64,
	pub total_pages: i64,
	pub start_index: i64,
	pub end_index: i64,
}

impl Pagination {
	pub fn has_next(&self) -> bool {
		self.next != 0
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
	#[serde(default)]
	pub pagination: Pagination,
	#[serde(default = "Vec::new")]
	pub results: Vec<T>,
}
