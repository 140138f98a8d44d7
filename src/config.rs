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

//! Provider configuration
//!
//! Every attribute can also be given through a `PINGDIRECTORY_PROVIDER_*` environment
//! variable. Values from the Terraform configuration win over the environment.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tf_provider::{
    map,
    schema::{Attribute, AttributeConstraint, AttributeType, Block, Description, Schema},
    value::{Value, ValueBool, ValueString},
    AttributePath, Diagnostics,
};

use crate::client::ClientConfig;
use crate::utils::{WithSchema, WithValidate};
use crate::version::ProductVersion;

pub const ENV_HTTPS_HOST: &str = "PINGDIRECTORY_PROVIDER_HTTPS_HOST";
pub const ENV_USERNAME: &str = "PINGDIRECTORY_PROVIDER_USERNAME";
pub const ENV_PASSWORD: &str = "PINGDIRECTORY_PROVIDER_PASSWORD";
pub const ENV_INSECURE_TRUST_ALL_TLS: &str = "PINGDIRECTORY_PROVIDER_INSECURE_TRUST_ALL_TLS";
pub const ENV_PRODUCT_VERSION: &str = "PINGDIRECTORY_PROVIDER_PRODUCT_VERSION";

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig<'a> {
    #[serde(borrow = "'a")]
    pub https_host: ValueString<'a>,
    #[serde(borrow = "'a")]
    pub username: ValueString<'a>,
    #[serde(borrow = "'a")]
    pub password: ValueString<'a>,
    pub insecure_trust_all_tls: ValueBool,
    #[serde(borrow = "'a")]
    pub product_version: ValueString<'a>,
}

impl WithSchema for ProviderConfig<'_> {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                version: 1,
                attributes: map! {
                    "https_host" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(format!(
                            "URI for the directory server HTTPS port, e.g. `https://localhost:1443`. Defaults to `{ENV_HTTPS_HOST}`."
                        )),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "username" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(format!(
                            "Username for the configuration API. Defaults to `{ENV_USERNAME}`."
                        )),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "password" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(format!(
                            "Password for the configuration API. Defaults to `{ENV_PASSWORD}`."
                        )),
                        constraint: AttributeConstraint::Optional,
                        sensitive: true,
                        ..Default::default()
                    },
                    "insecure_trust_all_tls" => Attribute {
                        attr_type: AttributeType::Bool,
                        description: Description::plain(format!(
                            "Trust any certificate presented by the server. Defaults to `{ENV_INSECURE_TRUST_ALL_TLS}`, or false."
                        )),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "product_version" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(format!(
                            "Version of the directory server, e.g. `10.2.0.0`. Defaults to `{ENV_PRODUCT_VERSION}`."
                        )),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                },
                description: Description::plain("PingDirectory configuration API"),
                ..Default::default()
            },
        }
    }
}

impl WithValidate for ProviderConfig<'_> {
    fn validate(&self, diags: &mut Diagnostics, attr_path: AttributePath) {
        if let Value::Value(host) = &self.https_host {
            if !host.starts_with("https://") && !host.starts_with("http://") {
                diags.error(
                    "Invalid `https_host`",
                    format!("`{host}` is not an http(s) url."),
                    attr_path.clone().attribute("https_host"),
                );
            }
        }
        if let Value::Value(version) = &self.product_version {
            if let Err(err) = version.parse::<ProductVersion>() {
                diags.error(
                    "Invalid `product_version`",
                    err.to_string(),
                    attr_path.attribute("product_version"),
                );
            }
        }
    }
}

fn resolve_string(
    value: &ValueString<'_>,
    env: &impl Fn(&str) -> Option<String>,
    name: &str,
    var: &str,
) -> Result<String> {
    match value {
        Value::Value(value) if !value.is_empty() => Ok(value.to_string()),
        Value::Unknown => Err(anyhow!("`{name}` is not known during configuration")),
        _ => env(var)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| anyhow!("`{name}` must be set in the provider configuration or with `{var}`")),
    }
}

impl ProviderConfig<'_> {
    /// Merge the configuration with the environment
    pub fn resolve(&self, env: impl Fn(&str) -> Option<String>) -> Result<ClientConfig> {
        let https_host = resolve_string(&self.https_host, &env, "https_host", ENV_HTTPS_HOST)?;
        let username = resolve_string(&self.username, &env, "username", ENV_USERNAME)?;
        let password = resolve_string(&self.password, &env, "password", ENV_PASSWORD)?;
        let product_version = resolve_string(
            &self.product_version,
            &env,
            "product_version",
            ENV_PRODUCT_VERSION,
        )?
        .parse::<ProductVersion>()
        .context("invalid `product_version`")?;

        let insecure_trust_all_tls = match self.insecure_trust_all_tls {
            Value::Value(insecure) => insecure,
            Value::Unknown => {
                return Err(anyhow!(
                    "`insecure_trust_all_tls` is not known during configuration"
                ))
            }
            Value::Null => match env(ENV_INSECURE_TRUST_ALL_TLS).as_deref().map(str::trim) {
                None | Some("") => false,
                Some(value) => value.parse().with_context(|| {
                    format!("`{ENV_INSECURE_TRUST_ALL_TLS}` must be `true` or `false`")
                })?,
            },
        };

        Ok(ClientConfig {
            https_host,
            username,
            password,
            insecure_trust_all_tls,
            product_version,
        })
    }
}

/// Environment lookup used by the provider
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
