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

use reqwest::{Method, StatusCode};
use thiserror::Error;
use tf_provider::{AttributePath, Diagnostics};

/// Errors returned by the configuration API client
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid configuration API url `{0}`")]
    InvalidUrl(String),

    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{method} {url} failed with status {status}")]
    Status {
        method: Method,
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("unexpected configuration API response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status of the response, if the server answered
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// Check if the requested object does not exist on the server
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Body of the HTTP response, if any
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Status { body, .. } if !body.is_empty() => Some(body),
            _ => None,
        }
    }

    /// Detailed message with the HTTP response body
    pub fn detail(&self) -> String {
        match self.body() {
            Some(body) => format!("{self}\nHTTP response body: {body}"),
            None => self.to_string(),
        }
    }

    /// Record the error as a diagnostic
    pub fn report(&self, diags: &mut Diagnostics, summary: String, attribute: AttributePath) {
        tracing::debug!(error = %self, "{summary}");
        diags.error(summary, self.detail(), attribute);
    }
}
