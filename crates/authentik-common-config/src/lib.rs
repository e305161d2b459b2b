// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration primitives shared by the authentik provider crates.
//!
//! - [`Secret<T>`]: a wrapper that keeps tokens and client secrets out of logs
//! - [`load_secret_env`]: reads a secret from `VAR` or the file named by `VAR_FILE`
//! - [`env_bool`]: lenient boolean parsing for environment overrides
//! - [`load_toml_file`]: typed TOML file loading with path-aware errors

pub mod env;
pub mod error;
pub mod file;
pub mod secret;

pub use env::{env_bool, env_string, load_secret_env, SecretEnvError};
pub use error::ConfigError;
pub use file::load_toml_file;
pub use secret::{Secret, SecretString, REDACTED};
