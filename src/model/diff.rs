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

use crate::operations::{
    add_bool_operation_if_necessary, add_int64_operation_if_necessary,
    add_string_operation_if_necessary, add_string_set_operations_if_necessary, Operation,
};

use super::{AttrKind, Family, Model};

/// Operations turning `state` into `plan`
///
/// Only the attributes of the planned variant are compared, in the order of the family
/// table. When the planned variant is not known, the variant of the state is used.
pub fn create_operations<F: Family>(plan: &Model, state: &Model) -> Vec<Operation> {
    let spec = plan
        .variant::<F>()
        .or_else(|| state.variant::<F>())
        .map(F::describe);

    let mut operations = Vec::new();
    for attr in F::attributes() {
        if spec.is_some_and(|spec| !spec.contains(attr.name)) {
            continue;
        }
        let (plan, state, path) = (plan.get(attr.name), state.get(attr.name), attr.path());
        match attr.kind {
            AttrKind::String => add_string_operation_if_necessary(&mut operations, plan, state, &path),
            AttrKind::Bool => add_bool_operation_if_necessary(&mut operations, plan, state, &path),
            AttrKind::Int64 => add_int64_operation_if_necessary(&mut operations, plan, state, &path),
            AttrKind::StringSet => {
                add_string_set_operations_if_necessary(&mut operations, plan, state, &path)
            }
        }
    }
    operations
}
