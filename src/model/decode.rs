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

use std::collections::BTreeMap;

use serde_json::Value as Json;
use tf_provider::value::ValueAny;

use crate::internaltypes::{
    bool_value, int64_value, is_defined, set_value, string_set_value, string_value,
};

use super::{
    variant_from_urn, AttrKind, DecodeError, Family, Flavor, Model, LAST_UPDATED, MESSAGES_URN,
    NOTIFICATIONS, REQUIRED_ACTIONS, TYPE,
};

fn schema_urn<F: Family>(response: &Json) -> Result<&str, DecodeError> {
    response
        .get("schemas")
        .and_then(Json::as_array)
        .into_iter()
        .flatten()
        .filter_map(Json::as_str)
        .find(|urn| urn.starts_with(F::URN_PREFIX))
        .ok_or(DecodeError::MissingSchema {
            prefix: F::URN_PREFIX,
        })
}

fn required_action(action: &Json) -> ValueAny {
    let field = |name: &str| {
        action
            .get(name)
            .and_then(Json::as_str)
            .map_or(ValueAny::Null, |s| ValueAny::String(s.to_owned()))
    };
    ValueAny::Map(BTreeMap::from([
        ("property".to_owned(), field("property")),
        ("type".to_owned(), field("type")),
        ("synopsis".to_owned(), field("synopsis")),
    ]))
}

/// Decode server messages into `notifications` and `required_actions`
fn messages(response: &Json) -> (ValueAny, ValueAny) {
    let messages = response.get(MESSAGES_URN);
    let notifications = string_set_value(messages.and_then(|m| m.get("notifications")));
    let actions: Vec<ValueAny> = messages
        .and_then(|m| m.get("requiredActions"))
        .and_then(Json::as_array)
        .map(|actions| actions.iter().map(required_action).collect())
        .unwrap_or_default();
    (notifications, ValueAny::List(actions))
}

/// Decode a configuration API response into a model
///
/// The variant is resolved from the `schemas` URN of the response. Attributes of that
/// variant are copied from the response, every other attribute is null. `expected`
/// holds the values known to Terraform (the plan, or the prior state): it decides
/// whether an empty string is kept, and provides the sensitive values the server
/// never returns.
pub fn decode<F: Family>(
    response: &Json,
    expected: &Model,
    flavor: Flavor,
) -> Result<Model, DecodeError> {
    let urn = schema_urn::<F>(response)?;
    let variant =
        variant_from_urn::<F>(urn).ok_or_else(|| DecodeError::UnknownVariant(urn.to_owned()))?;
    let spec = F::describe(variant);

    let mut model = Model::empty::<F>(flavor);

    let id = match expected.id::<F>() {
        Some(id) => ValueAny::String(id.to_owned()),
        None => response
            .get(F::NAME_FIELD)
            .or_else(|| response.get("id"))
            .and_then(Json::as_str)
            .map_or(ValueAny::Null, |id| ValueAny::String(id.to_owned())),
    };
    model.set(F::ID_ATTRIBUTE, id);
    model.set(TYPE, ValueAny::String(spec.name.to_owned()));

    for attr in F::attributes().iter().filter(|attr| spec.contains(attr.name)) {
        let expected = expected.get(attr.name);
        let json = response.get(attr.json);
        let value = if attr.sensitive {
            if is_defined(expected) {
                expected.clone()
            } else {
                ValueAny::Null
            }
        } else {
            match attr.kind {
                AttrKind::String => string_value(json, expected),
                AttrKind::Bool => bool_value(json),
                AttrKind::Int64 => int64_value(json),
                AttrKind::StringSet => string_set_value(json),
            }
        };
        model.set(attr.name, value);
    }

    if flavor.is_resource() {
        let last_updated = expected.get(LAST_UPDATED);
        if is_defined(last_updated) {
            model.set(LAST_UPDATED, last_updated.clone());
        }
    }

    let (notifications, required_actions) = messages(response);
    model.set(NOTIFICATIONS, notifications);
    model.set(REQUIRED_ACTIONS, required_actions);

    Ok(model)
}

/// Names of the objects of a list response
pub fn names<F: Family>(resources: &[Json]) -> ValueAny {
    set_value(resources.iter().filter_map(|resource| {
        resource
            .get("id")
            .or_else(|| resource.get(F::NAME_FIELD))
            .and_then(Json::as_str)
    }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::super::testing::*;
    use super::*;

    #[test]
    fn the_urn_selects_the_variant() {
        let expected = model(Flavor::Default, &[("id", string("w"))]);
        let response = json!({
            "schemas": ["urn:test:widget:plain"],
            "id": "w",
            "enabled": true,
            "host": "not in plain",
        });
        let decoded = decode::<WidgetFamily>(&response, &expected, Flavor::Default).unwrap();

        assert_eq!(decoded.get("type"), &string("plain"));
        assert_eq!(decoded.get("enabled"), &ValueAny::Bool(true));
        assert_eq!(decoded.get("host"), &ValueAny::Null);
        assert_eq!(decoded.get("port"), &ValueAny::Null);
        assert_eq!(decoded.get("colors"), &ValueAny::List(vec![]));
        assert_eq!(decoded.get("description"), &ValueAny::Null);
    }

    #[test]
    fn every_variant_decodes_to_its_type() {
        for name in ["plain", "network", "builtin"] {
            let response = json!({ "schemas": [format!("urn:test:widget:{name}")] });
            let decoded =
                decode::<WidgetFamily>(&response, &Model::default(), Flavor::DataSource).unwrap();
            assert_eq!(decoded.get("type"), &string(name));
        }
    }

    #[test]
    fn expected_values_drive_empty_strings_and_secrets() {
        let expected = model(
            Flavor::Standalone,
            &[
                ("id", string("w")),
                ("description", string("")),
                ("token", string("secret")),
                ("last_updated", string("Monday, 02-Jan-06 15:04:05 UTC")),
            ],
        );
        let response = json!({
            "schemas": ["urn:test:widget:network"],
            "host": "localhost",
            "port": 8080,
        });
        let decoded = decode::<WidgetFamily>(&response, &expected, Flavor::Standalone).unwrap();

        assert_eq!(decoded.get("description"), &string(""));
        assert_eq!(decoded.get("token"), &string("secret"));
        assert_eq!(decoded.get("token_provider"), &ValueAny::Null);
        assert_eq!(decoded.get("port"), &ValueAny::Number(8080));
        assert_eq!(decoded.get("last_updated"), expected.get("last_updated"));
    }

    #[test]
    fn messages_are_copied() {
        let response = json!({
            "schemas": ["urn:test:widget:plain"],
            MESSAGES_URN: {
                "notifications": ["restart soon"],
                "requiredActions": [
                    {"property": "enabled", "type": "component-restart", "synopsis": "restart"},
                ],
            },
        });
        let decoded =
            decode::<WidgetFamily>(&response, &Model::default(), Flavor::Default).unwrap();
        assert_eq!(decoded.get(NOTIFICATIONS), &set_value(["restart soon"]));
        assert_eq!(
            decoded.get(REQUIRED_ACTIONS),
            &ValueAny::List(vec![ValueAny::Map(BTreeMap::from([
                ("property".to_owned(), string("enabled")),
                ("synopsis".to_owned(), string("restart")),
                ("type".to_owned(), string("component-restart")),
            ]))])
        );
    }

    #[test]
    fn unknown_schemas_are_errors() {
        let expected = Model::default();
        assert_eq!(
            decode::<WidgetFamily>(&json!({"schemas": ["urn:test:widget:nope"]}), &expected, Flavor::Default),
            Err(DecodeError::UnknownVariant("urn:test:widget:nope".into()))
        );
        assert!(matches!(
            decode::<WidgetFamily>(&json!({"id": "w"}), &expected, Flavor::Default),
            Err(DecodeError::MissingSchema { .. })
        ));
    }

    #[test]
    fn list_names() {
        let resources = [json!({"id": "b"}), json!({"widgetName": "a"}), json!({})];
        assert_eq!(names::<WidgetFamily>(&resources), set_value(["a", "b"]));
    }
}
