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

use serde_json::Value as Json;
use tf_provider::{value::ValueAny, AttributePath, Diagnostics};
use tracing::{debug, warn};

use crate::client::ConfigurationApi;
use crate::model::{add_request, check_type, create_operations, decode, Family, Flavor, Model};
use crate::operations::log_operations;

/// Decode a response, recording decoding failures as diagnostics
pub(super) fn decode_response<F: Family>(
    diags: &mut Diagnostics,
    response: &Json,
    expected: &Model,
    flavor: Flavor,
) -> Option<Model> {
    match decode::<F>(response, expected, flavor) {
        Ok(model) => Some(model),
        Err(err) => {
            diags.root_error(
                format!("Unexpected {} returned by the configuration API", F::DISPLAY),
                err.to_string(),
            );
            None
        }
    }
}

/// Create the object with an add request
pub(super) async fn add<F: Family>(
    diags: &mut Diagnostics,
    api: &ConfigurationApi,
    planned: &Model,
) -> Option<Model> {
    let request = match add_request::<F>(planned) {
        Ok(request) => request,
        Err(err) => {
            diags.root_error(format!("Invalid {} configuration", F::DISPLAY), format!("{err:#}"));
            return None;
        }
    };
    debug!(resource = F::NAME, request = %request, "add request");

    match api.add(F::COLLECTION, &request).await {
        Ok(response) => decode_response::<F>(diags, &response, planned, Flavor::Standalone),
        Err(err) => {
            err.report(
                diags,
                format!("An error occurred while creating the {}", F::DISPLAY),
                AttributePath::root(),
            );
            None
        }
    }
}

/// Adopt an object that already exists on the server, and align it with the plan
pub(super) async fn adopt<F: Family>(
    diags: &mut Diagnostics,
    api: &ConfigurationApi,
    planned: &Model,
    id: &str,
) -> Option<Model> {
    let response = match api.get(F::COLLECTION, id).await {
        Ok(response) => response,
        Err(err) => {
            err.report(
                diags,
                format!("An error occurred while reading the existing {}", F::DISPLAY),
                AttributePath::new(F::ID_ATTRIBUTE),
            );
            return None;
        }
    };
    // Sensitive values are not returned by the server and must always be sent
    let mut expected = planned.clone();
    for attr in F::attributes().iter().filter(|attr| attr.sensitive) {
        expected.set(attr.name, ValueAny::Null);
    }
    let current = decode_response::<F>(diags, &response, &expected, Flavor::Default)?;

    if !check_type::<F>(&current, planned, diags) {
        return None;
    }

    patch::<F>(diags, api, planned, &current, Flavor::Default)
        .await
        .map(|state| state.unwrap_or(current))
}

/// Send the operations turning `current` into `planned`
///
/// Returns `Some(None)` when there is nothing to change.
pub(super) async fn patch<F: Family>(
    diags: &mut Diagnostics,
    api: &ConfigurationApi,
    planned: &Model,
    current: &Model,
    flavor: Flavor,
) -> Option<Option<Model>> {
    let id = current.id::<F>().or(planned.id::<F>()).unwrap_or_default();
    let operations = create_operations::<F>(planned, current);
    if operations.is_empty() {
        warn!(resource = F::NAME, %id, "No configuration API operations created for update");
        return Some(None);
    }
    log_operations(&operations, F::NAME, id);

    match api.update(F::COLLECTION, id, operations).await {
        Ok(response) => decode_response::<F>(diags, &response, planned, flavor).map(Some),
        Err(err) => {
            err.report(
                diags,
                format!("An error occurred while updating the {}", F::DISPLAY),
                AttributePath::root(),
            );
            None
        }
    }
}
