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

//! Helpers shared by the integration tests

#![allow(dead_code)]

use pingdirectory_provider::{
    client::{ApiHandle, ClientConfig, ConfigurationApi},
    model::{Family, Flavor, Model},
    version::ProductVersion,
};
use tf_provider::value::ValueAny;
use wiremock::MockServer;

pub const USERNAME: &str = "cn=admin";
pub const PASSWORD: &str = "password";

pub fn client_config(server: &MockServer, version: ProductVersion) -> ClientConfig {
    ClientConfig {
        https_host: server.uri(),
        username: USERNAME.to_owned(),
        password: PASSWORD.to_owned(),
        insecure_trust_all_tls: true,
        product_version: version,
    }
}

pub fn api(server: &MockServer, version: ProductVersion) -> ApiHandle {
    let api = ConfigurationApi::new(&client_config(server, version)).unwrap();
    ApiHandle::configured(api)
}

pub fn string(s: &str) -> ValueAny {
    ValueAny::String(s.to_owned())
}

/// Terraform configuration: every attribute of the schema, null unless given
pub fn config<F: Family>(flavor: Flavor, values: &[(&str, ValueAny)]) -> Model {
    let mut model = Model::empty::<F>(flavor);
    for (name, value) in values {
        model.set(name, value.clone());
    }
    model
}
