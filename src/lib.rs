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

//! Terraform provider for the PingDirectory configuration API
//!
//! Each family of configuration objects is described by a static table
//! (see [`model::Family`]). Resources and data sources are generic over these tables:
//! [`config_resource::ConfigResource`] manages objects, and
//! [`config_data_source::ConfigDataSource`] reads them.

pub mod client;
pub mod config;
pub mod config_data_source;
pub mod config_resource;
pub mod families;
pub mod internaltypes;
pub mod logging;
pub mod model;
pub mod operations;
pub mod provider;
pub mod version;

mod utils;

pub use provider::PingDirectoryProvider;
