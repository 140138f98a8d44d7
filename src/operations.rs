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

//! PATCH operations sent to the configuration API
//!
//! Every `add_*_operation_if_necessary` helper compares a planned value with the value
//! currently stored in the Terraform state, and pushes an operation only when they differ.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tf_provider::value::ValueAny;

use crate::internaltypes::{is_empty_string, string_set};

/// Kind of a PATCH operation
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Add,
    Remove,
    Replace,
}

/// Single PATCH primitive applied on a configuration property
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Operation {
    pub op: OperationKind,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl Operation {
    pub fn remove<P: Into<String>>(path: P) -> Self {
        Self {
            op: OperationKind::Remove,
            path: path.into(),
            value: None,
            values: None,
        }
    }

    pub fn replace<P: Into<String>, V: Into<String>>(path: P, value: V) -> Self {
        Self {
            op: OperationKind::Replace,
            path: path.into(),
            value: Some(value.into()),
            values: None,
        }
    }

    pub fn replace_values<P: Into<String>>(path: P, values: Vec<String>) -> Self {
        Self {
            op: OperationKind::Replace,
            path: path.into(),
            value: None,
            values: Some(values),
        }
    }

    pub fn add_values<P: Into<String>>(path: P, values: Vec<String>) -> Self {
        Self {
            op: OperationKind::Add,
            path: path.into(),
            value: None,
            values: Some(values),
        }
    }
}

/// Body of a PATCH request
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct UpdateRequest {
    pub operations: Vec<Operation>,
}

/// Add a string operation if the plan differs from the state
///
/// An empty string is equivalent to null in both directions.
pub fn add_string_operation_if_necessary(
    operations: &mut Vec<Operation>,
    plan: &ValueAny,
    state: &ValueAny,
    path: &str,
) {
    let state = match state {
        ValueAny::String(s) if !s.is_empty() => Some(s.as_str()),
        _ => None,
    };
    match plan {
        ValueAny::Unknown => (),
        ValueAny::String(plan) if !plan.is_empty() => {
            if state != Some(plan.as_str()) {
                operations.push(Operation::replace(path, plan.as_str()));
            }
        }
        plan if plan == &ValueAny::Null || is_empty_string(plan) => {
            if state.is_some() {
                operations.push(Operation::remove(path));
            }
        }
        _ => (),
    }
}

/// Add a bool operation if the plan differs from the state
pub fn add_bool_operation_if_necessary(
    operations: &mut Vec<Operation>,
    plan: &ValueAny,
    state: &ValueAny,
    path: &str,
) {
    match (plan, state) {
        (ValueAny::Bool(plan), ValueAny::Bool(state)) if plan == state => (),
        (ValueAny::Bool(plan), _) => operations.push(Operation::replace(path, plan.to_string())),
        (ValueAny::Null, ValueAny::Bool(_)) => operations.push(Operation::remove(path)),
        _ => (),
    }
}

/// Add an int64 operation if the plan differs from the state
pub fn add_int64_operation_if_necessary(
    operations: &mut Vec<Operation>,
    plan: &ValueAny,
    state: &ValueAny,
    path: &str,
) {
    match (plan, state) {
        (ValueAny::Number(plan), ValueAny::Number(state)) if plan == state => (),
        (ValueAny::Number(plan), _) => {
            operations.push(Operation::replace(path, plan.to_string()))
        }
        (ValueAny::Null, ValueAny::Number(_)) => operations.push(Operation::remove(path)),
        _ => (),
    }
}

/// Add set operations if the plan differs from the state
///
/// Pure additions are sent as `add`, an emptied set as `remove`,
/// and any other change replaces the whole set.
pub fn add_string_set_operations_if_necessary(
    operations: &mut Vec<Operation>,
    plan: &ValueAny,
    state: &ValueAny,
    path: &str,
) {
    if plan == &ValueAny::Unknown {
        return;
    }
    let plan = string_set(plan).unwrap_or_default();
    let state = string_set(state).unwrap_or_default();
    if plan == state {
        return;
    }
    if plan.is_empty() {
        operations.push(Operation::remove(path));
        return;
    }

    let added: BTreeSet<_> = plan.difference(&state).cloned().collect();
    if state.is_subset(&plan) {
        operations.push(Operation::add_values(path, added.into_iter().collect()));
    } else {
        operations.push(Operation::replace_values(path, plan.into_iter().collect()));
    }
}

/// Log the operations of an update at debug level
///
/// Serialization failures are ignored: logging is best effort.
pub fn log_operations(operations: &[Operation], resource: &str, name: &str) {
    if let Ok(json) = serde_json::to_string(operations) {
        tracing::debug!(resource, name, operations = %json, "configuration API update operations");
    }
}
