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

//! Logging setup
//!
//! Logs are written to stderr: stdout is reserved for the plugin handshake.
//! When Terraform asks for a log file through `PLUGIN_LOG_FILE`, the plugin server
//! installs its own subscriber and nothing is done here.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const PLUGIN_LOG_FILE: &str = "PLUGIN_LOG_FILE";

/// Install the stderr subscriber, filtered by `RUST_LOG` (default `info`)
///
/// Does nothing if a global subscriber is already set.
pub fn init_logging() {
    if std::env::var_os(PLUGIN_LOG_FILE).is_some() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init();
}
