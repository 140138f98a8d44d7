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

use thiserror::Error;

/// Value outside the enumeration of an attribute
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value `{value}` for attribute `{attribute}`, expected one of: {}", .expected.join(", "))]
pub struct EnumError {
    pub attribute: &'static str,
    pub value: String,
    pub expected: &'static [&'static str],
}

impl EnumError {
    /// Check `value` against the enumeration
    pub fn check(
        attribute: &'static str,
        value: &str,
        expected: &'static [&'static str],
    ) -> Result<(), Self> {
        if expected.contains(&value) {
            Ok(())
        } else {
            Err(Self {
                attribute,
                value: value.to_owned(),
                expected,
            })
        }
    }
}

/// Response that cannot be mapped onto a variant of the family
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("response has no `{prefix}*` schema")]
    MissingSchema { prefix: &'static str },

    #[error("unsupported schema `{0}`")]
    UnknownVariant(String),
}
