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

//! Generic model of configuration objects
//!
//! A family of configuration objects (alert handlers, attribute syntaxes, ...) is
//! described by a static table: the attributes it may carry, and for each variant of
//! the family the subset of attributes it uses, which of them are required, and their
//! defaults. Schema, request encoding, response decoding, validation and diffing are
//! all driven by these tables.

use std::collections::BTreeMap;
use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use tf_provider::value::ValueAny;

use crate::version::ProductVersion;

mod decode;
mod diff;
mod encode;
mod error;
mod plan;
mod schema;
mod validate;

pub use decode::{decode, names};
pub use diff::create_operations;
pub use encode::{add_request, check_enumeration};
pub use error::{DecodeError, EnumError};
pub use plan::{plan_create, plan_update};
pub use schema::schema;
pub use validate::{check_type, check_version, validate};

pub const TYPE: &str = "type";
pub const LAST_UPDATED: &str = "last_updated";
pub const NOTIFICATIONS: &str = "notifications";
pub const REQUIRED_ACTIONS: &str = "required_actions";

/// Schema extension carrying the server messages of a response
pub const MESSAGES_URN: &str = "urn:pingidentity:schemas:configuration:messages:2.0";

/// How an object is exposed to Terraform
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Flavor {
    /// Resource creating and deleting the object
    Standalone,
    /// Resource adopting an object that always exists on the server
    Default,
    /// Read-only access
    DataSource,
}

impl Flavor {
    pub fn is_resource(self) -> bool {
        self != Flavor::DataSource
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum AttrKind {
    String,
    Bool,
    Int64,
    StringSet,
}

/// Attribute of a family
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct AttrSpec {
    /// Terraform name, in snake case
    pub name: &'static str,
    /// Configuration API name, in camel case
    pub json: &'static str,
    pub kind: AttrKind,
    pub description: &'static str,
    pub sensitive: bool,
    pub enumeration: Option<&'static [&'static str]>,
    /// First product version supporting the attribute
    pub since: Option<ProductVersion>,
}

impl AttrSpec {
    const fn new(
        name: &'static str,
        json: &'static str,
        kind: AttrKind,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            json,
            kind,
            description,
            sensitive: false,
            enumeration: None,
            since: None,
        }
    }

    pub const fn string(name: &'static str, json: &'static str, description: &'static str) -> Self {
        Self::new(name, json, AttrKind::String, description)
    }

    pub const fn bool(name: &'static str, json: &'static str, description: &'static str) -> Self {
        Self::new(name, json, AttrKind::Bool, description)
    }

    pub const fn int64(name: &'static str, json: &'static str, description: &'static str) -> Self {
        Self::new(name, json, AttrKind::Int64, description)
    }

    pub const fn string_set(
        name: &'static str,
        json: &'static str,
        description: &'static str,
    ) -> Self {
        Self::new(name, json, AttrKind::StringSet, description)
    }

    pub const fn sensitive(self) -> Self {
        Self {
            sensitive: true,
            ..self
        }
    }

    pub const fn one_of(self, values: &'static [&'static str]) -> Self {
        Self {
            enumeration: Some(values),
            ..self
        }
    }

    pub const fn since(self, version: ProductVersion) -> Self {
        Self {
            since: Some(version),
            ..self
        }
    }

    /// Path of the attribute in PATCH operations
    pub fn path(&self) -> String {
        self.name.replace('_', "-")
    }
}

/// Default value filled at plan time when the attribute is not configured
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DefaultValue {
    String(&'static str),
    Int64(i64),
    Bool(bool),
}

impl From<DefaultValue> for ValueAny {
    fn from(value: DefaultValue) -> Self {
        match value {
            DefaultValue::String(s) => ValueAny::String(s.to_owned()),
            DefaultValue::Int64(n) => ValueAny::Number(n),
            DefaultValue::Bool(b) => ValueAny::Bool(b),
        }
    }
}

/// Attribute used by a variant
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct VariantAttr {
    pub name: &'static str,
    pub required: bool,
    pub default: Option<DefaultValue>,
}

impl VariantAttr {
    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            default: None,
        }
    }

    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
            default: None,
        }
    }

    pub const fn with_default(self, default: DefaultValue) -> Self {
        Self {
            default: Some(default),
            ..self
        }
    }
}

/// Descriptor of a variant
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct VariantSpec {
    /// Value of the `type` attribute, and suffix of the schema URN
    pub name: &'static str,
    /// Variants that can only be adopted are not creatable
    pub creatable: bool,
    pub attributes: &'static [VariantAttr],
}

impl VariantSpec {
    pub fn attribute(&self, name: &str) -> Option<&'static VariantAttr> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }
}

/// Family of configuration objects sharing a REST collection
pub trait Family: Send + Sync + 'static {
    /// Terraform type name, without the provider prefix
    const NAME: &'static str;
    /// Human readable name
    const DISPLAY: &'static str;
    const COLLECTION: &'static str;
    const URN_PREFIX: &'static str;
    /// Terraform attribute holding the name of the object
    const ID_ATTRIBUTE: &'static str;
    /// Add request field holding the name of the object
    const NAME_FIELD: &'static str;
    /// Pairs of attributes that cannot be set together
    const CONFLICTS: &'static [(&'static str, &'static str)] = &[];

    type Variant: Copy + Eq + Debug + Send + Sync + 'static;

    fn attributes() -> &'static [AttrSpec];
    fn variants() -> &'static [Self::Variant];
    fn describe(variant: Self::Variant) -> &'static VariantSpec;

    fn attribute(name: &str) -> Option<&'static AttrSpec> {
        Self::attributes().iter().find(|attr| attr.name == name)
    }
}

/// Find the variant whose `type` is `name`
pub fn variant_from_name<F: Family>(name: &str) -> Option<F::Variant> {
    F::variants()
        .iter()
        .copied()
        .find(|variant| F::describe(*variant).name == name)
}

/// Find the variant identified by a schema URN
pub fn variant_from_urn<F: Family>(urn: &str) -> Option<F::Variant> {
    variant_from_name::<F>(urn.strip_prefix(F::URN_PREFIX)?)
}

/// Names of the variants, optionally restricted to the creatable ones
pub fn variant_names<F: Family>(creatable_only: bool) -> Vec<&'static str> {
    F::variants()
        .iter()
        .map(|variant| F::describe(*variant))
        .filter(|spec| spec.creatable || !creatable_only)
        .map(|spec| spec.name)
        .collect()
}

static NULL: ValueAny = ValueAny::Null;

/// Flat Terraform model of a configuration object
#[derive(Clone, PartialEq, Eq, Default, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Model(pub BTreeMap<String, ValueAny>);

impl Model {
    /// Model with every attribute of the schema set to null
    pub fn empty<F: Family>(flavor: Flavor) -> Self {
        Self(
            attribute_names::<F>(flavor)
                .into_iter()
                .map(|name| (name.to_owned(), ValueAny::Null))
                .collect(),
        )
    }

    /// Keep only the attributes of the schema, adding the missing ones as null
    pub fn normalize<F: Family>(&mut self, flavor: Flavor) {
        let mut normalized = Self::empty::<F>(flavor);
        for (name, value) in normalized.0.iter_mut() {
            if let Some(current) = self.0.remove(name) {
                *value = current;
            }
        }
        *self = normalized;
    }

    pub fn get(&self, name: &str) -> &ValueAny {
        self.0.get(name).unwrap_or(&NULL)
    }

    pub fn set<V: Into<ValueAny>>(&mut self, name: &str, value: V) {
        self.0.insert(name.to_owned(), value.into());
    }

    /// Known, non-empty string value
    pub fn string(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            ValueAny::String(s) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    /// Name of the object on the server
    pub fn id<F: Family>(&self) -> Option<&str> {
        self.string(F::ID_ATTRIBUTE)
    }

    /// Variant selected by the `type` attribute, if known and valid
    pub fn variant<F: Family>(&self) -> Option<F::Variant> {
        variant_from_name::<F>(self.string(TYPE)?)
    }
}

/// Names of every attribute present in the schema of a flavor
pub fn attribute_names<F: Family>(flavor: Flavor) -> Vec<&'static str> {
    let mut names = vec![F::ID_ATTRIBUTE, TYPE];
    names.extend(F::attributes().iter().map(|attr| attr.name));
    if flavor.is_resource() {
        names.push(LAST_UPDATED);
    }
    names.extend([NOTIFICATIONS, REQUIRED_ACTIONS]);
    names
}

#[cfg(test)]
pub(crate) mod testing {
    //! Small family used to exercise the generic model

    use super::*;
    use crate::version::V9_3;

    #[derive(Copy, Clone, PartialEq, Eq, Debug)]
    pub enum Widget {
        Plain,
        Network,
        Builtin,
    }

    pub struct WidgetFamily;

    const COLORS: &[&str] = &["red", "green"];

    const ATTRIBUTES: &[AttrSpec] = &[
        AttrSpec::string("description", "description", "Description"),
        AttrSpec::bool("enabled", "enabled", "Enabled"),
        AttrSpec::string("host", "host", "Host"),
        AttrSpec::int64("port", "port", "Port"),
        AttrSpec::string_set("colors", "colors", "Colors").one_of(COLORS),
        AttrSpec::string("token", "token", "Token").sensitive(),
        AttrSpec::string("token_provider", "tokenProvider", "Token provider"),
        AttrSpec::string("proxy", "proxy", "Proxy").since(V9_3),
    ];

    const PLAIN: VariantSpec = VariantSpec {
        name: "plain",
        creatable: true,
        attributes: &[
            VariantAttr::optional("description"),
            VariantAttr::required("enabled"),
            VariantAttr::optional("colors"),
        ],
    };

    const NETWORK: VariantSpec = VariantSpec {
        name: "network",
        creatable: true,
        attributes: &[
            VariantAttr::optional("description"),
            VariantAttr::required("enabled"),
            VariantAttr::required("host"),
            VariantAttr::optional("port").with_default(DefaultValue::Int64(8080)),
            VariantAttr::optional("colors"),
            VariantAttr::optional("token"),
            VariantAttr::optional("token_provider"),
            VariantAttr::optional("proxy"),
        ],
    };

    const BUILTIN: VariantSpec = VariantSpec {
        name: "builtin",
        creatable: false,
        attributes: &[
            VariantAttr::optional("description"),
            VariantAttr::optional("enabled"),
        ],
    };

    impl Family for WidgetFamily {
        const NAME: &'static str = "widget";
        const DISPLAY: &'static str = "Widget";
        const COLLECTION: &'static str = "widgets";
        const URN_PREFIX: &'static str = "urn:test:widget:";
        const ID_ATTRIBUTE: &'static str = "id";
        const NAME_FIELD: &'static str = "widgetName";
        const CONFLICTS: &'static [(&'static str, &'static str)] = &[("token", "token_provider")];

        type Variant = Widget;

        fn attributes() -> &'static [AttrSpec] {
            ATTRIBUTES
        }

        fn variants() -> &'static [Widget] {
            &[Widget::Plain, Widget::Network, Widget::Builtin]
        }

        fn describe(variant: Widget) -> &'static VariantSpec {
            match variant {
                Widget::Plain => &PLAIN,
                Widget::Network => &NETWORK,
                Widget::Builtin => &BUILTIN,
            }
        }
    }

    pub fn string(s: &str) -> ValueAny {
        ValueAny::String(s.to_owned())
    }

    pub fn model(flavor: Flavor, values: &[(&str, ValueAny)]) -> Model {
        let mut model = Model::empty::<WidgetFamily>(flavor);
        for (name, value) in values {
            model.set(name, value.clone());
        }
        model
    }
}
