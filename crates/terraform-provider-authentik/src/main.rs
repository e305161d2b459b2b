// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use terraform_provider_authentik::{AuthentikProvider, Operation, Request, Target};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Run authentik provider operations with JSON on stdin and stdout.
#[derive(Parser, Debug)]
#[command(name = "terraform-provider-authentik", version)]
struct Args {
	/// TOML file with provider defaults (url, token, insecure, headers)
	#[arg(long, env = "AUTHENTIK_CONFIG_FILE")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Print the provider, resource and data-source schemas
	Schema,
	/// Run a lifecycle operation on a managed resource
	Resource {
		type_name: String,
		#[arg(value_enum)]
		operation: Operation,
	},
	/// Read a data source
	DataSource { type_name: String },
}

fn read_request() -> anyhow::Result<Request> {
	let mut input = String::new();
	std::io::stdin()
		.read_to_string(&mut input)
		.context("failed to read request from stdin")?;
	if input.trim().is_empty() {
		return Ok(Request::default());
	}
	serde_json::from_str(&input).context("request is not valid JSON")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	// stdout carries the protocol, so logs go to stderr
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_writer(std::io::stderr)
		.init();

	let args = Args::parse();
	let provider = AuthentikProvider::new();

	let target = match args.command {
		Command::Schema => {
			println!("{}", serde_json::to_string_pretty(&provider.schemas())?);
			return Ok(());
		}
		Command::Resource {
			type_name,
			operation,
		} => Target::Resource {
			type_name,
			operation,
		},
		Command::DataSource { type_name } => Target::DataSource { type_name },
	};

	let request = read_request()?;
	debug!(?target, "invoking provider");
	let response = provider
		.invoke(&target, request, args.config.as_deref())
		.await;

	println!("{}", serde_json::to_string_pretty(&response)?);
	if response.diagnostics.has_error() {
		std::process::exit(1);
	}
	Ok(())
}
