// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP plumbing shared by every endpoint.

use authentik_common_http::{retry, RetryConfig};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, trace};
use url::Url;

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::pagination::Paginated;

/// Query string pairs. Repeated keys encode multi-value filters.
pub type Query = Vec<(&'static str, String)>;

/// Client for the authentik REST API.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
	http: Client,
	base_url: Url,
	retry_config: RetryConfig,
}

impl ApiClient {
	pub fn new(config: &ApiConfig) -> Result<Self> {
		let mut headers = HeaderMap::new();

		let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token()))
			.map_err(|_| ApiError::config("API token contains characters not allowed in a header"))?;
		auth.set_sensitive(true);
		headers.insert(AUTHORIZATION, auth);

		for (name, value) in &config.headers {
			let name = HeaderName::from_bytes(name.as_bytes())
				.map_err(|e| ApiError::config(format!("invalid header name '{name}': {e}")))?;
			let value = HeaderValue::from_str(value)
				.map_err(|e| ApiError::config(format!("invalid value for header '{name}': {e}")))?;
			headers.insert(name, value);
		}

		let http = authentik_common_http::builder()
			.default_headers(headers)
			.timeout(config.timeout)
			.danger_accept_invalid_certs(config.insecure)
			.build()
			.map_err(|e| ApiError::config(format!("failed to build HTTP client: {e}")))?;

		let base_url = config.api_base();
		debug!(base_url = %base_url, insecure = config.insecure, "authentik API client initialized");

		Ok(Self {
			http,
			base_url,
			retry_config: config.retry_config.clone(),
		})
	}

	fn url(&self, path: &str) -> Result<Url> {
		self
			.base_url
			.join(path)
			.map_err(|e| ApiError::config(format!("invalid request path '{path}': {e}")))
	}

	/// GET with retries on transient failures.
	pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str, query: &Query) -> Result<T> {
		let body = retry(&self.retry_config, || {
			self.send::<()>(Method::GET, path, query, None)
		})
		.await?;
		self.decode(Method::GET, path, &body)
	}

	pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
	where
		B: Serialize + ?Sized,
		T: DeserializeOwned,
	{
		let text = self.send(Method::POST, path, &Query::new(), Some(body)).await?;
		self.decode(Method::POST, path, &text)
	}

	pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
	where
		B: Serialize + ?Sized,
		T: DeserializeOwned,
	{
		let text = self.send(Method::PUT, path, &Query::new(), Some(body)).await?;
		self.decode(Method::PUT, path, &text)
	}

	pub(crate) async fn delete(&self, path: &str) -> Result<()> {
		self
			.send::<()>(Method::DELETE, path, &Query::new(), None)
			.await
			.map(|_| ())
	}

	/// Fetch every page of a list endpoint, starting at page 1 and stopping
	/// once the server reports no next page.
	pub(crate) async fn list_all<T: DeserializeOwned>(
		&self,
		path: &str,
		query: &Query,
	) -> Result<Vec<T>> {
		let mut rows = Vec::new();
		let mut page: u32 = 1;

		loop {
			let mut paged = query.clone();
			paged.push(("page", page.to_string()));

			let res: Paginated<T> = self.get(path, &paged).await?;
			rows.extend(res.results);

			if !res.pagination.has_next() {
				break;
			}
			page += 1;
		}

		debug!(path, pages = page, rows = rows.len(), "listed all pages");
		Ok(rows)
	}

	async fn send<B>(
		&self,
		method: Method,
		path: &str,
		query: &Query,
		body: Option<&B>,
	) -> Result<String>
	where
		B: Serialize + ?Sized,
	{
		let url = self.url(path)?;
		let url_path = url.path().to_string();

		let mut request = self.http.request(method.clone(), url);
		if !query.is_empty() {
			request = request.query(query);
		}
		if let Some(body) = body {
			request = request.json(body);
		}

		debug!(method = %method, path = %url_path, "sending request to authentik");

		let response = request.send().await.map_err(|e| {
			error!(method = %method, path = %url_path, error = %e, "request failed without response");
			ApiError::Network(e)
		})?;

		let status = response.status();
		let text = response.text().await.map_err(|e| {
			error!(method = %method, path = %url_path, status = %status, error = %e, "failed to read response body");
			ApiError::InvalidResponse {
				method: method.to_string(),
				path: url_path.clone(),
				message: format!("failed to read body of '{status}' response: {e}"),
			}
		})?;
		debug!(method = %method, path = %url_path, status = %status, "received response");
		trace!(body = %text, "response body");

		if !status.is_success() {
			return Err(ApiError::Status {
				status,
				method: method.to_string(),
				path: url_path,
				body: text,
			});
		}

		Ok(text)
	}

	fn decode<T: DeserializeOwned>(&self, method: Method, path: &str, body: &str) -> Result<T> {
		serde_json::from_str(body).map_err(|e| {
			error!(method = %method, path, error = %e, "failed to decode response");
			ApiError::InvalidResponse {
				method: method.to_string(),
				path: self
					.url(path)
					.map(|u| u.path().to_string())
					.unwrap_or_else(|_| path.to_string()),
				message: e.to_string(),
			}
		})
	}
}

/// Percent-encode a path segment such as a slug or primary key.
pub(crate) fn segment(id: &str) -> String {
	urlencoding::encode(id).into_owned()
}
