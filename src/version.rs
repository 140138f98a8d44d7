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

//! Product versions of the directory server

use std::{fmt::Display, str::FromStr};

use anyhow::{anyhow, Result};

/// Version of the directory server the provider talks to
///
/// Versions are ordered, so capability checks are plain comparisons:
/// an attribute introduced in `9.3.0.0` is available on every version `>= V9_3`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ProductVersion {
    pub major: u16,
    pub minor: u16,
    pub patch: u16,
    pub build: u16,
}

impl ProductVersion {
    pub const fn new(major: u16, minor: u16, patch: u16, build: u16) -> Self {
        Self {
            major,
            minor,
            patch,
            build,
        }
    }

    /// Check if the attribute (or variant) introduced in `since` is available on this version
    pub fn supports(&self, since: Option<ProductVersion>) -> bool {
        since.map_or(true, |since| *self >= since)
    }
}

pub const V9_2: ProductVersion = ProductVersion::new(9, 2, 0, 0);
pub const V9_3: ProductVersion = ProductVersion::new(9, 3, 0, 0);
pub const V10_0: ProductVersion = ProductVersion::new(10, 0, 0, 0);
pub const V10_2: ProductVersion = ProductVersion::new(10, 2, 0, 0);

/// Versions accepted in the provider configuration, oldest first
pub const SUPPORTED_VERSIONS: [ProductVersion; 4] = [V9_2, V9_3, V10_0, V10_2];

impl Display for ProductVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.patch, self.build
        )
    }
}

impl FromStr for ProductVersion {
    type Err = anyhow::Error;

    /// Parse a version, padding missing components with zeros (`10.2` is `10.2.0.0`)
    ///
    /// Only versions listed in [`SUPPORTED_VERSIONS`] are accepted.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let mut parts = [0u16; 4];
        let mut count = 0;
        for part in s.split('.') {
            if count == parts.len() {
                return Err(anyhow!("`{}` has more than four components", s));
            }
            parts[count] = part
                .parse()
                .map_err(|_| anyhow!("`{}` is not a valid product version", s))?;
            count += 1;
        }
        let version = ProductVersion::new(parts[0], parts[1], parts[2], parts[3]);

        if SUPPORTED_VERSIONS.contains(&version) {
            Ok(version)
        } else {
            Err(anyhow!(
                "product version `{}` is not supported, supported versions are: {}",
                version,
                SUPPORTED_VERSIONS
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        }
    }
}
