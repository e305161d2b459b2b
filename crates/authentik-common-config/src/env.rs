// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Environment variable helpers.
//!
//! Secrets support the `*_FILE` convention used by Docker and Kubernetes
//! secret mounts: `AUTHENTIK_TOKEN_FILE=/run/secrets/token` wins over
//! `AUTHENTIK_TOKEN`.

use std::path::PathBuf;
use std::{env, fs};

use thiserror::Error;

use crate::secret::Secret;

#[derive(Debug, Error)]
pub enum SecretEnvError {
	#[error("{var} points at {path}, which could not be read: {source}")]
	Unreadable {
		var: String,
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("{var} is set but empty")]
	EmptyPath { var: String },
}

/// Load a secret from the file named by `{var}_FILE`, else from `{var}`.
///
/// Trailing line breaks are stripped from file contents. An empty `{var}`
/// counts as unset.
pub fn load_secret_env(var: &str) -> Result<Option<Secret<String>>, SecretEnvError> {
	let file_var = format!("{var}_FILE");

	let Some(path) = env::var_os(&file_var) else {
		return Ok(env_string(var).map(Secret::new));
	};
	if path.is_empty() {
		return Err(SecretEnvError::EmptyPath { var: file_var });
	}

	let path = PathBuf::from(path);
	let raw = fs::read_to_string(&path).map_err(|source| SecretEnvError::Unreadable {
		var: file_var.clone(),
		path: path.clone(),
		source,
	})?;
	tracing::debug!(var = %file_var, path = %path.display(), "secret read from file");

	Ok(Some(Secret::new(raw.trim_end_matches(['\r', '\n']).to_string())))
}

/// Read a non-empty string variable.
pub fn env_string(var: &str) -> Option<String> {
	env::var(var).ok().filter(|v| !v.is_empty())
}

/// Read a boolean variable. Accepts `1/0`, `true/false`, `yes/no`, `on/off`
/// in any case; anything else is treated as unset.
pub fn env_bool(var: &str) -> Option<bool> {
	let raw = env::var(var).ok()?;
	match raw.trim().to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Some(true),
		"0" | "false" | "no" | "off" => Some(false),
		other => {
			tracing::warn!(var, value = other, "ignoring unparseable boolean");
			None
		}
	}
}
