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

use anyhow::{anyhow, Result};
use serde_json::{Map, Value as Json};
use tf_provider::value::ValueAny;

use crate::internaltypes::{json_value, string_set};

use super::{EnumError, Family, Model};

/// Check the value of an attribute against its enumeration
pub fn check_enumeration(
    attribute: &'static str,
    enumeration: &'static [&'static str],
    value: &ValueAny,
) -> Result<(), EnumError> {
    match value {
        ValueAny::String(s) if !s.is_empty() => EnumError::check(attribute, s, enumeration),
        ValueAny::List(_) => string_set(value)
            .unwrap_or_default()
            .iter()
            .try_for_each(|s| EnumError::check(attribute, s, enumeration)),
        _ => Ok(()),
    }
}

/// Build the add request of a plan
///
/// Only the defined, non-empty attributes of the planned variant are sent.
pub fn add_request<F: Family>(plan: &Model) -> Result<Json> {
    let id = plan
        .id::<F>()
        .ok_or_else(|| anyhow!("`{}` must be known to create a {}", F::ID_ATTRIBUTE, F::DISPLAY))?;
    let variant = plan
        .variant::<F>()
        .ok_or_else(|| anyhow!("`type` must be a known {} type", F::DISPLAY))?;
    let spec = F::describe(variant);

    let mut request = Map::new();
    request.insert(
        "schemas".into(),
        Json::Array(vec![Json::String(format!("{}{}", F::URN_PREFIX, spec.name))]),
    );
    request.insert(F::NAME_FIELD.into(), Json::String(id.to_owned()));

    for attr in F::attributes().iter().filter(|attr| spec.contains(attr.name)) {
        let value = plan.get(attr.name);
        if let Some(enumeration) = attr.enumeration {
            check_enumeration(attr.name, enumeration, value)?;
        }
        if let Some(json) = json_value(value) {
            request.insert(attr.json.into(), json);
        }
    }

    Ok(Json::Object(request))
}
