// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! TOML file loading.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::ConfigError;

/// Read and deserialize a TOML file, attaching the path to any error.
pub fn load_toml_file<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
	let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
		path: path.to_path_buf(),
		source,
	})?;

	tracing::debug!(path = %path.display(), "loaded config file");

	toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
		path: path.to_path_buf(),
		source,
	})
}
