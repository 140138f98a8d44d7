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

//! Conversions between Terraform values and configuration API JSON values

use std::collections::BTreeSet;

use serde_json::Value as Json;
use tf_provider::value::ValueAny;
use time::{macros::format_description, OffsetDateTime};

/// Check if the value is the empty string
pub fn is_empty_string(value: &ValueAny) -> bool {
    matches!(value, ValueAny::String(s) if s.is_empty())
}

/// Check if the value is known and not null
pub fn is_defined(value: &ValueAny) -> bool {
    !matches!(value, ValueAny::Null | ValueAny::Unknown)
}

/// Check if the value is known, not null, not empty string and not empty set
pub fn is_set(value: &ValueAny) -> bool {
    match value {
        ValueAny::Null | ValueAny::Unknown => false,
        ValueAny::String(s) => !s.is_empty(),
        ValueAny::List(l) => !l.is_empty(),
        _ => true,
    }
}

/// Extract the string elements of a set value
///
/// Returns `None` if the value is not a known collection.
pub fn string_set(value: &ValueAny) -> Option<BTreeSet<String>> {
    match value {
        ValueAny::List(values) => Some(
            values
                .iter()
                .filter_map(|value| match value {
                    ValueAny::String(s) => Some(s.clone()),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    }
}

/// Build a set value from strings
pub fn set_value<I, S>(values: I) -> ValueAny
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let values: BTreeSet<String> = values.into_iter().map(Into::into).collect();
    ValueAny::List(values.into_iter().map(ValueAny::String).collect())
}

/// Decode a server string
///
/// An absent or empty server string becomes `""` when `""` is expected, and null otherwise.
pub fn string_value(json: Option<&Json>, expected: &ValueAny) -> ValueAny {
    let value = match json {
        Some(Json::String(s)) => s.clone(),
        Some(Json::Null) | None => String::new(),
        Some(other) => other.to_string(),
    };
    if value.is_empty() {
        if is_empty_string(expected) {
            ValueAny::String(value)
        } else {
            ValueAny::Null
        }
    } else {
        ValueAny::String(value)
    }
}

/// Decode a server bool, accepting the `"true"`/`"false"` string forms
pub fn bool_value(json: Option<&Json>) -> ValueAny {
    match json {
        Some(Json::Bool(b)) => ValueAny::Bool(*b),
        Some(Json::String(s)) => match s.as_str() {
            "true" => ValueAny::Bool(true),
            "false" => ValueAny::Bool(false),
            _ => ValueAny::Null,
        },
        _ => ValueAny::Null,
    }
}

/// Decode a server integer, accepting its string form
pub fn int64_value(json: Option<&Json>) -> ValueAny {
    match json {
        Some(Json::Number(n)) => n.as_i64().map_or(ValueAny::Null, ValueAny::Number),
        Some(Json::String(s)) => s.parse().map_or(ValueAny::Null, ValueAny::Number),
        _ => ValueAny::Null,
    }
}

/// Decode a server string array
///
/// An absent array becomes the empty set.
pub fn string_set_value(json: Option<&Json>) -> ValueAny {
    match json {
        Some(Json::Array(values)) => set_value(values.iter().map(|value| match value {
            Json::String(s) => s.clone(),
            other => other.to_string(),
        })),
        Some(Json::String(s)) => set_value([s.as_str()]),
        _ => set_value(Vec::<String>::new()),
    }
}

/// Encode a Terraform value into JSON
///
/// Returns `None` for null, unknown and empty values that must not be sent to the server.
pub fn json_value(value: &ValueAny) -> Option<Json> {
    match value {
        ValueAny::String(s) if !s.is_empty() => Some(Json::String(s.clone())),
        ValueAny::Number(n) => Some(Json::from(*n)),
        ValueAny::Bool(b) => Some(Json::Bool(*b)),
        ValueAny::List(_) => {
            let values = string_set(value)?;
            if values.is_empty() {
                None
            } else {
                Some(Json::Array(values.into_iter().map(Json::String).collect()))
            }
        }
        _ => None,
    }
}

/// Current time in RFC 850 format, as stored in `last_updated`
pub fn last_updated_now() -> String {
    let format = format_description!(
        "[weekday], [day]-[month repr:short]-[year repr:last_two] [hour]:[minute]:[second] UTC"
    );
    OffsetDateTime::now_utc().format(&format).unwrap_or_default()
}
