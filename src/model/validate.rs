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

use tf_provider::{value::ValueAny, AttributePath, Diagnostics};

use crate::internaltypes::{is_defined, is_set};
use crate::version::ProductVersion;

use super::{encode::check_enumeration, variant_names, Family, Flavor, Model, TYPE};

/// Check a configuration against the family tables
///
/// Unknown values are only checked once they are known.
pub fn validate<F: Family>(config: &Model, flavor: Flavor, diags: &mut Diagnostics) {
    if let ValueAny::String(id) = config.get(F::ID_ATTRIBUTE) {
        if id.is_empty() {
            diags.error_short(
                format!("`{}` cannot be empty", F::ID_ATTRIBUTE),
                AttributePath::new(F::ID_ATTRIBUTE),
            );
        }
    }
    if flavor == Flavor::DataSource {
        return;
    }

    let spec = match config.get(TYPE) {
        ValueAny::String(name) => {
            let names = variant_names::<F>(flavor == Flavor::Standalone);
            if names.contains(&name.as_str()) {
                config.variant::<F>().map(F::describe)
            } else {
                diags.error(
                    format!("Invalid {} type `{}`", F::DISPLAY, name),
                    format!("`type` must be one of `{}`.", names.join("`, `")),
                    AttributePath::new(TYPE),
                );
                None
            }
        }
        _ => None,
    };

    for attr in F::attributes() {
        let value = config.get(attr.name);
        let attr_path = AttributePath::new(attr.name);

        if let Some(spec) = spec {
            match spec.attribute(attr.name) {
                None if is_defined(value) => diags.error(
                    format!("Attribute `{}` not supported", attr.name),
                    format!(
                        "`{}` cannot be set when `type` is `{}`.",
                        attr.name, spec.name
                    ),
                    attr_path.clone(),
                ),
                Some(variant_attr)
                    if variant_attr.required
                        && flavor == Flavor::Standalone
                        && value != &ValueAny::Unknown
                        && !is_set(value) =>
                {
                    diags.error(
                        format!("Missing required attribute `{}`", attr.name),
                        format!(
                            "`{}` must be set when `type` is `{}`.",
                            attr.name, spec.name
                        ),
                        attr_path.clone(),
                    )
                }
                _ => (),
            }
        }

        if let Some(enumeration) = attr.enumeration {
            if let Err(err) = check_enumeration(attr.name, enumeration, value) {
                diags.error("Invalid attribute value", err.to_string(), attr_path);
            }
        }
    }

    for (first, second) in F::CONFLICTS {
        if is_defined(config.get(first)) && is_defined(config.get(second)) {
            diags.error(
                "Conflicting attributes",
                format!("Only one of `{first}` and `{second}` can be set."),
                AttributePath::new(*second),
            );
        }
    }
}

/// Check that the configured type is the type of an existing object
///
/// The configuration API cannot change the type of an object. Returns `false` on mismatch.
pub fn check_type<F: Family>(existing: &Model, config: &Model, diags: &mut Diagnostics) -> bool {
    let (Some(expected), Some(actual)) = (config.string(TYPE), existing.string(TYPE)) else {
        return true;
    };
    if expected == actual {
        return true;
    }
    let id = existing.id::<F>().or(config.id::<F>()).unwrap_or_default();
    diags.error(
        format!("{} type mismatch", F::DISPLAY),
        format!("`{id}` is of type `{actual}`, but the configuration expects `{expected}`."),
        AttributePath::new(TYPE),
    );
    false
}

/// Check that configured attributes are supported by the product version
pub fn check_version<F: Family>(config: &Model, version: ProductVersion, diags: &mut Diagnostics) {
    for attr in F::attributes() {
        if version.supports(attr.since) || !is_defined(config.get(attr.name)) {
            continue;
        }
        if let Some(since) = attr.since {
            diags.error(
                format!("Attribute `{}` not supported by the product version", attr.name),
                format!(
                    "`{}` requires product version {since} or later, the provider is configured for {version}.",
                    attr.name
                ),
                AttributePath::new(attr.name),
            );
        }
    }
}
