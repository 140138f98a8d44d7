// This file is part of the terraform-provider-pingdirectory project
//
// Copyright (C) ANEO, 2024-2024. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License")
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Client for the configuration API of the directory server
//!
//! Every object lives under `/config/v1/{collection}/{name}`. Requests are authenticated
//! with HTTP basic auth and carry the `X-Xsrf-Header` expected by the server.

use std::{
    fmt::Debug,
    sync::{Arc, OnceLock},
};

use anyhow::anyhow;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Method, Url,
};
use serde::Serialize;
use serde_json::Value as Json;
use tf_provider::Diagnostics;
use tracing::debug;

use crate::operations::{Operation, UpdateRequest};
use crate::version::ProductVersion;

mod error;

pub use error::ApiError;

/// Settings needed to build a [`ConfigurationApi`]
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub https_host: String,
    pub username: String,
    pub password: String,
    pub insecure_trust_all_tls: bool,
    pub product_version: ProductVersion,
}

impl Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("https_host", &self.https_host)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("insecure_trust_all_tls", &self.insecure_trust_all_tls)
            .field("product_version", &self.product_version)
            .finish()
    }
}

/// Typed access to the configuration API
#[derive(Clone)]
pub struct ConfigurationApi {
    http: reqwest::Client,
    base_url: Url,
    username: String,
    password: String,
    product_version: ProductVersion,
}

impl Debug for ConfigurationApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigurationApi")
            .field("base_url", &self.base_url.as_str())
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("product_version", &self.product_version)
            .finish_non_exhaustive()
    }
}

impl ConfigurationApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut base_url = Url::parse(&config.https_host)
            .map_err(|_| ApiError::InvalidUrl(config.https_host.clone()))?;
        base_url
            .path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(config.https_host.clone()))?
            .pop_if_empty()
            .extend(["config", "v1"]);

        let mut headers = HeaderMap::new();
        headers.insert("X-Xsrf-Header", HeaderValue::from_static("PingDirectory"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .danger_accept_invalid_certs(config.insecure_trust_all_tls)
            .build()?;

        Ok(Self {
            http,
            base_url,
            username: config.username.clone(),
            password: config.password.clone(),
            product_version: config.product_version,
        })
    }

    /// Version of the server this client was configured for
    pub fn product_version(&self) -> ProductVersion {
        self.product_version
    }

    fn url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .extend(segments);
        Ok(url)
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<String, ApiError> {
        let mut request = self
            .http
            .request(method.clone(), url.clone())
            .basic_auth(&self.username, Some(&self.password));
        if let Some(body) = body {
            request = request.json(body);
        }

        debug!(%method, %url, "configuration API request");
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(%method, %url, %status, body = %text, "configuration API response");

        if status.is_success() {
            Ok(text)
        } else {
            Err(ApiError::Status {
                method,
                url: url.to_string(),
                status,
                body: text,
            })
        }
    }

    /// Fetch a single object
    pub async fn get(&self, collection: &str, name: &str) -> Result<Json, ApiError> {
        let url = self.url(&[collection, name])?;
        let body = self.send::<()>(Method::GET, url, None).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// List every object of a collection, optionally filtered server side
    pub async fn list(
        &self,
        collection: &str,
        filter: Option<&str>,
    ) -> Result<Vec<Json>, ApiError> {
        let mut url = self.url(&[collection])?;
        if let Some(filter) = filter {
            url.query_pairs_mut().append_pair("filter", filter);
        }
        let body = self.send::<()>(Method::GET, url, None).await?;
        let mut body: Json = serde_json::from_str(&body)?;
        match body.get_mut("resources").map(Json::take) {
            Some(Json::Array(resources)) => Ok(resources),
            _ => Ok(Vec::new()),
        }
    }

    /// Create an object from an add request
    pub async fn add(&self, collection: &str, request: &Json) -> Result<Json, ApiError> {
        let url = self.url(&[collection])?;
        let body = self.send(Method::POST, url, Some(request)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Apply PATCH operations on an object
    pub async fn update(
        &self,
        collection: &str,
        name: &str,
        operations: Vec<Operation>,
    ) -> Result<Json, ApiError> {
        let url = self.url(&[collection, name])?;
        let request = UpdateRequest { operations };
        let body = self.send(Method::PATCH, url, Some(&request)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Delete an object
    pub async fn delete(&self, collection: &str, name: &str) -> Result<(), ApiError> {
        let url = self.url(&[collection, name])?;
        self.send::<()>(Method::DELETE, url, None).await?;
        Ok(())
    }
}

/// Shared handle to the API client, filled once the provider is configured
///
/// Resources and data sources are built before the provider configuration is known,
/// so they all receive a clone of the same handle.
#[derive(Clone, Debug, Default)]
pub struct ApiHandle(Arc<OnceLock<ConfigurationApi>>);

impl ApiHandle {
    /// Handle already holding a client
    pub fn configured(api: ConfigurationApi) -> Self {
        let handle = Self::default();
        _ = handle.0.set(api);
        handle
    }

    pub fn set(&self, api: ConfigurationApi) -> anyhow::Result<()> {
        self.0
            .set(api)
            .map_err(|_| anyhow!("the configuration API client is already set"))
    }

    /// Client if the provider is configured
    pub fn try_get(&self) -> Option<&ConfigurationApi> {
        self.0.get()
    }

    /// Client, or an error diagnostic if the provider is not configured yet
    pub fn get(&self, diags: &mut Diagnostics) -> Option<&ConfigurationApi> {
        let api = self.0.get();
        if api.is_none() {
            diags.root_error(
                "Provider not configured",
                "The configuration API client is not available before the provider is configured.",
            );
        }
        api
    }
}
