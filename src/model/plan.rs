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

use tf_provider::{value::ValueAny, AttributePath};

use super::{
    create_operations, Family, Flavor, Model, LAST_UPDATED, NOTIFICATIONS, REQUIRED_ACTIONS, TYPE,
};

const COMPUTED: [&str; 3] = [LAST_UPDATED, NOTIFICATIONS, REQUIRED_ACTIONS];

/// Planned state of an object that does not exist yet in Terraform
///
/// Attributes missing from the configuration take the default of the variant (standalone
/// resources only), are null when the variant does not use them, and are left for the
/// server to decide otherwise.
pub fn plan_create<F: Family>(proposed: &Model, config: &Model, flavor: Flavor) -> Model {
    let mut plan = proposed.clone();
    plan.normalize::<F>(flavor);

    if config.get(TYPE) == &ValueAny::Null {
        plan.set(TYPE, ValueAny::Unknown);
    }
    let spec = plan.variant::<F>().map(F::describe);

    for attr in F::attributes() {
        if config.get(attr.name) != &ValueAny::Null {
            continue;
        }
        let value = match spec {
            Some(spec) => match spec.attribute(attr.name) {
                Some(variant_attr) => match variant_attr.default {
                    Some(default) if flavor == Flavor::Standalone => default.into(),
                    _ => ValueAny::Unknown,
                },
                None => ValueAny::Null,
            },
            None => ValueAny::Unknown,
        };
        plan.set(attr.name, value);
    }

    for name in COMPUTED {
        if flavor.is_resource() || name != LAST_UPDATED {
            plan.set(name, ValueAny::Unknown);
        }
    }
    plan
}

/// Planned state of an existing object, with the attributes requiring a replacement
///
/// Attributes missing from the configuration keep their prior value. Computed attributes
/// keep their prior value too, unless the plan triggers a PATCH.
pub fn plan_update<F: Family>(
    prior: &Model,
    proposed: &Model,
    config: &Model,
    flavor: Flavor,
) -> (Model, Vec<AttributePath>) {
    let mut replace = Vec::new();
    if proposed.get(F::ID_ATTRIBUTE) != prior.get(F::ID_ATTRIBUTE) {
        replace.push(AttributePath::new(F::ID_ATTRIBUTE));
    }
    if flavor == Flavor::Standalone && proposed.get(TYPE) != prior.get(TYPE) {
        replace.push(AttributePath::new(TYPE));
    }
    if !replace.is_empty() && flavor == Flavor::Standalone {
        return (plan_create::<F>(proposed, config, flavor), replace);
    }

    let mut plan = proposed.clone();
    plan.normalize::<F>(flavor);

    if config.get(TYPE) == &ValueAny::Null {
        plan.set(TYPE, prior.get(TYPE).clone());
    }
    for attr in F::attributes() {
        if config.get(attr.name) == &ValueAny::Null {
            plan.set(attr.name, prior.get(attr.name).clone());
        }
    }

    let changed = !create_operations::<F>(&plan, prior).is_empty();
    for name in COMPUTED {
        let value = if changed {
            ValueAny::Unknown
        } else {
            prior.get(name).clone()
        };
        plan.set(name, value);
    }

    (plan, replace)
}
