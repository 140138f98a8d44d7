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

use async_trait::async_trait;
use tf_provider::{
    map, schema::Schema, value::ValueEmpty, AttributePath, Diagnostics, DynamicDataSource,
    DynamicResource, Provider,
};
use tracing::info;

use crate::client::{ApiHandle, ConfigurationApi};
use crate::config::{process_env, ProviderConfig};
use crate::config_data_source::{ConfigDataSource, ConfigListDataSource};
use crate::config_resource::ConfigResource;
use crate::families::{AlertHandler, AttributeSyntax};
use crate::utils::{no_errors, WithSchema, WithValidate};

#[derive(Debug, Default, Clone)]
pub struct PingDirectoryProvider {
    api: ApiHandle,
}

impl PingDirectoryProvider {
    /// Provider sharing an existing client handle
    pub fn with_api(api: ApiHandle) -> Self {
        Self { api }
    }

    pub fn resources(&self) -> HashMap<String, Box<dyn DynamicResource>> {
        let api = &self.api;
        map! {
            "alert_handler" => ConfigResource::<AlertHandler>::standalone(api.clone()),
            "default_alert_handler" => ConfigResource::<AlertHandler>::adopting(api.clone()),
            "default_attribute_syntax" => ConfigResource::<AttributeSyntax>::adopting(api.clone()),
        }
    }

    pub fn data_sources(&self) -> HashMap<String, Box<dyn DynamicDataSource>> {
        let api = &self.api;
        map! {
            "alert_handler" => ConfigDataSource::<AlertHandler>::new(api.clone()),
            "alert_handlers" => ConfigListDataSource::<AlertHandler>::new(api.clone()),
            "attribute_syntax" => ConfigDataSource::<AttributeSyntax>::new(api.clone()),
            "attribute_syntaxes" => ConfigListDataSource::<AttributeSyntax>::new(api.clone()),
        }
    }
}

#[async_trait]
impl Provider for PingDirectoryProvider {
    type Config<'a> = ProviderConfig<'a>;
    type MetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(ProviderConfig::schema())
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::Config<'a>) -> Option<()> {
        config.validate(diags, AttributePath::root());
        no_errors(diags, ())
    }

    async fn configure<'a>(
        &self,
        diags: &mut Diagnostics,
        terraform_version: String,
        config: Self::Config<'a>,
    ) -> Option<()> {
        let client_config = match config.resolve(process_env) {
            Ok(client_config) => client_config,
            Err(err) => {
                diags.root_error("Invalid provider configuration", format!("{err:#}"));
                return None;
            }
        };

        let api = match ConfigurationApi::new(&client_config) {
            Ok(api) => api,
            Err(err) => {
                diags.root_error(
                    "Unable to create the configuration API client",
                    err.detail(),
                );
                return None;
            }
        };
        if let Err(err) = self.api.set(api) {
            diags.root_error_short(err.to_string());
            return None;
        }

        info!(
            %terraform_version,
            https_host = %client_config.https_host,
            product_version = %client_config.product_version,
            "provider configured"
        );
        Some(())
    }

    fn get_resources(
        &self,
        _diags: &mut Diagnostics,
    ) -> Option<HashMap<String, Box<dyn DynamicResource>>> {
        Some(self.resources())
    }

    fn get_data_sources(
        &self,
        _diags: &mut Diagnostics,
    ) -> Option<HashMap<String, Box<dyn DynamicDataSource>>> {
        Some(self.data_sources())
    }
}
