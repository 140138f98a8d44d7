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

use std::collections::HashMap;

use tf_provider::{
    map,
    schema::{Attribute, AttributeConstraint, AttributeType, Block, Description, Schema},
};

use super::{
    variant_names, AttrKind, AttrSpec, Family, Flavor, LAST_UPDATED, NOTIFICATIONS,
    REQUIRED_ACTIONS, TYPE,
};

fn attr_type(kind: AttrKind) -> AttributeType {
    match kind {
        AttrKind::String => AttributeType::String,
        AttrKind::Bool => AttributeType::Bool,
        AttrKind::Int64 => AttributeType::Number,
        AttrKind::StringSet => AttributeType::Set(Box::new(AttributeType::String)),
    }
}

/// Check if the attribute is required by every creatable variant
fn always_required<F: Family>(name: &str) -> bool {
    F::variants()
        .iter()
        .map(|variant| F::describe(*variant))
        .filter(|spec| spec.creatable)
        .all(|spec| spec.attribute(name).is_some_and(|attr| attr.required))
}

/// Names of the variants using the attribute
fn used_by<F: Family>(name: &str) -> Vec<&'static str> {
    F::variants()
        .iter()
        .map(|variant| F::describe(*variant))
        .filter(|spec| spec.contains(name))
        .map(|spec| spec.name)
        .collect()
}

fn description<F: Family>(attr: &AttrSpec) -> String {
    let mut description = attr.description.to_owned();
    let variants = used_by::<F>(attr.name);
    if variants.len() < F::variants().len() {
        description.push_str(&format!(
            " Supported in types: `{}`.",
            variants.join("`, `")
        ));
    }
    if let Some(values) = attr.enumeration {
        description.push_str(&format!(" Options are `{}`.", values.join("`, `")));
    }
    if let Some(since) = attr.since {
        description.push_str(&format!(" Supported since product version {since}."));
    }
    description
}

fn computed(attr_type: AttributeType, description: &str) -> Attribute {
    Attribute {
        attr_type,
        description: Description::plain(description),
        constraint: AttributeConstraint::Computed,
        ..Default::default()
    }
}

/// Terraform schema of a family
pub fn schema<F: Family>(flavor: Flavor) -> Schema {
    let mut attributes: HashMap<String, Attribute> = HashMap::new();

    attributes.insert(
        F::ID_ATTRIBUTE.to_owned(),
        Attribute {
            attr_type: AttributeType::String,
            description: Description::plain(format!("Name of this {}.", F::DISPLAY)),
            constraint: AttributeConstraint::Required,
            ..Default::default()
        },
    );

    let type_description = format!(
        "The type of {} resource. Options are `{}`.",
        F::DISPLAY,
        variant_names::<F>(flavor == Flavor::Standalone).join("`, `")
    );
    attributes.insert(
        TYPE.to_owned(),
        match flavor {
            Flavor::Standalone => Attribute {
                attr_type: AttributeType::String,
                description: Description::plain(type_description),
                constraint: AttributeConstraint::Required,
                ..Default::default()
            },
            Flavor::Default => Attribute {
                attr_type: AttributeType::String,
                description: Description::plain(type_description),
                constraint: AttributeConstraint::OptionalComputed,
                ..Default::default()
            },
            Flavor::DataSource => computed(AttributeType::String, &type_description),
        },
    );

    for attr in F::attributes() {
        let constraint = match flavor {
            Flavor::DataSource => AttributeConstraint::Computed,
            Flavor::Standalone if always_required::<F>(attr.name) => AttributeConstraint::Required,
            _ => AttributeConstraint::OptionalComputed,
        };
        attributes.insert(
            attr.name.to_owned(),
            Attribute {
                attr_type: attr_type(attr.kind),
                description: Description::plain(description::<F>(attr)),
                constraint,
                sensitive: attr.sensitive,
                ..Default::default()
            },
        );
    }

    if flavor.is_resource() {
        attributes.insert(
            LAST_UPDATED.to_owned(),
            computed(
                AttributeType::String,
                "Timestamp of the last Terraform update of this object.",
            ),
        );
    }
    attributes.insert(
        NOTIFICATIONS.to_owned(),
        computed(
            AttributeType::Set(Box::new(AttributeType::String)),
            "Notifications returned by the configuration API.",
        ),
    );
    attributes.insert(
        REQUIRED_ACTIONS.to_owned(),
        computed(
            AttributeType::Set(Box::new(AttributeType::Object(map! {
                "property" => AttributeType::String,
                "type" => AttributeType::String,
                "synopsis" => AttributeType::String
            }))),
            "Required actions returned by the configuration API.",
        ),
    );

    let description = match flavor {
        Flavor::Standalone => format!("Manages a {}.", F::DISPLAY),
        Flavor::Default => format!("Manages a {} that already exists on the server.", F::DISPLAY),
        Flavor::DataSource => format!("Describes a {}.", F::DISPLAY),
    };

    Schema {
        version: 1,
        block: Block {
            version: 1,
            attributes,
            description: Description::plain(description),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::WidgetFamily;
    use super::*;

    fn constraint(schema: &Schema, name: &str) -> AttributeConstraint {
        schema.block.attributes[name].constraint.clone()
    }

    #[test]
    fn standalone_schema() {
        let schema = schema::<WidgetFamily>(Flavor::Standalone);
        assert_eq!(constraint(&schema, "id"), AttributeConstraint::Required);
        assert_eq!(constraint(&schema, "type"), AttributeConstraint::Required);
        assert_eq!(constraint(&schema, "enabled"), AttributeConstraint::Required);
        assert_eq!(constraint(&schema, "host"), AttributeConstraint::OptionalComputed);
        assert_eq!(constraint(&schema, LAST_UPDATED), AttributeConstraint::Computed);
        assert!(schema.block.attributes["token"].sensitive);
        assert_eq!(
            schema.block.attributes["port"].attr_type,
            AttributeType::Number
        );
        assert!(schema.block.attributes["host"]
            .description
            .content
            .contains("`network`"));
    }

    #[test]
    fn default_and_data_source_schemas() {
        let default = schema::<WidgetFamily>(Flavor::Default);
        assert_eq!(constraint(&default, "type"), AttributeConstraint::OptionalComputed);
        assert_eq!(constraint(&default, "enabled"), AttributeConstraint::OptionalComputed);

        let data = schema::<WidgetFamily>(Flavor::DataSource);
        assert_eq!(constraint(&data, "id"), AttributeConstraint::Required);
        assert_eq!(constraint(&data, "enabled"), AttributeConstraint::Computed);
        assert!(!data.block.attributes.contains_key(LAST_UPDATED));
        assert_eq!(
            data.block.attributes.len(),
            super::super::attribute_names::<WidgetFamily>(Flavor::DataSource).len()
        );
    }
}
