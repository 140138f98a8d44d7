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

mod common;

use pingdirectory_provider::{
    config_data_source::ConfigDataSource,
    config_resource::ConfigResource,
    families::AlertHandler,
    model::{Flavor, Model},
    version::{V10_2, V9_2},
};
use pretty_assertions::assert_eq;
use serde_json::json;
use tf_provider::{
    value::{ValueAny, ValueEmpty},
    DataSource, Diagnostics, Resource,
};
use wiremock::{
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

use common::{api, config, string};

const ERROR_LOG_URN: &str = "urn:pingidentity:schemas:configuration:2.0:alert-handler:error-log";
const SNMP_URN: &str = "urn:pingidentity:schemas:configuration:2.0:alert-handler:snmp";
const JMX_URN: &str = "urn:pingidentity:schemas:configuration:2.0:alert-handler:jmx";
const TWILIO_URN: &str = "urn:pingidentity:schemas:configuration:2.0:alert-handler:twilio";

fn error_log_config() -> Model {
    config::<AlertHandler>(
        Flavor::Standalone,
        &[
            ("id", string("errors")),
            ("type", string("error-log")),
            ("enabled", ValueAny::Bool(true)),
        ],
    )
}

fn error_log_response() -> serde_json::Value {
    json!({
        "schemas": [ERROR_LOG_URN],
        "id": "errors",
        "enabled": true,
        "asynchronous": false,
        "meta": {"resourceType": "error-log-alert-handler"},
    })
}

async fn create(
    resource: &ConfigResource<AlertHandler>,
    diags: &mut Diagnostics,
    config: &Model,
) -> Option<Model> {
    let (plan, private) = resource
        .plan_create(diags, config.clone(), config.clone(), ValueEmpty::default())
        .await?;
    let (state, _) = resource
        .create(diags, plan, config.clone(), private, ValueEmpty::default())
        .await?;
    Some(state)
}

async fn update(
    resource: &ConfigResource<AlertHandler>,
    diags: &mut Diagnostics,
    prior: &Model,
    config: &Model,
) -> Option<Model> {
    let (plan, private, replace) = resource
        .plan_update(
            diags,
            prior.clone(),
            config.clone(),
            config.clone(),
            ValueEmpty::default(),
            ValueEmpty::default(),
        )
        .await?;
    assert!(replace.is_empty());
    let (state, _) = resource
        .update(
            diags,
            prior.clone(),
            plan,
            config.clone(),
            private,
            ValueEmpty::default(),
        )
        .await?;
    Some(state)
}

#[tokio::test]
async fn error_log_lifecycle() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/config/v1/alert-handlers"))
        .and(body_json(json!({
            "schemas": [ERROR_LOG_URN],
            "handlerName": "errors",
            "enabled": true,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(error_log_response()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200).set_body_json(error_log_response()))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/config/v1/alert-handlers/errors"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let resource = ConfigResource::<AlertHandler>::standalone(api(&server, V10_2));
    let mut diags = Diagnostics::default();
    let config = error_log_config();

    let state = create(&resource, &mut diags, &config).await.unwrap();
    assert!(diags.errors.is_empty(), "{:?}", diags.errors);
    assert_eq!(state.get("id"), &string("errors"));
    assert_eq!(state.get("asynchronous"), &ValueAny::Bool(false));
    assert_eq!(state.get("server_port"), &ValueAny::Null);
    assert_eq!(state.get("notifications"), &ValueAny::List(vec![]));
    assert!(matches!(state.get("last_updated"), ValueAny::String(s) if s.ends_with("UTC")));

    // Unchanged configuration: no PATCH, same state
    let updated = update(&resource, &mut diags, &state, &config).await.unwrap();
    assert_eq!(updated, state);

    resource
        .destroy(&mut diags, state, ValueEmpty::default(), ValueEmpty::default())
        .await
        .unwrap();
    assert!(diags.errors.is_empty(), "{:?}", diags.errors);
}

#[tokio::test]
async fn snmp_defaults_and_update() {
    let server = MockServer::start().await;
    let response = |port: i64| {
        json!({
            "schemas": [SNMP_URN],
            "id": "traps",
            "enabled": true,
            "asynchronous": false,
            "serverHostName": "monitoring",
            "serverPort": port,
            "communityName": "public",
        })
    };
    Mock::given(method("POST"))
        .and(path("/config/v1/alert-handlers"))
        .and(body_json(json!({
            "schemas": [SNMP_URN],
            "handlerName": "traps",
            "enabled": true,
            "serverHostName": "monitoring",
            "serverPort": 162,
            "communityName": "public",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(response(162)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/config/v1/alert-handlers/traps"))
        .and(body_json(json!({
            "operations": [{"op": "replace", "path": "server-port", "value": "1162"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(response(1162)))
        .expect(1)
        .mount(&server)
        .await;

    let resource = ConfigResource::<AlertHandler>::standalone(api(&server, V10_2));
    let mut diags = Diagnostics::default();
    let mut config = config::<AlertHandler>(
        Flavor::Standalone,
        &[
            ("id", string("traps")),
            ("type", string("snmp")),
            ("enabled", ValueAny::Bool(true)),
            ("server_host_name", string("monitoring")),
        ],
    );

    let state = create(&resource, &mut diags, &config).await.unwrap();
    assert_eq!(state.get("server_port"), &ValueAny::Number(162));
    assert_eq!(state.get("community_name"), &string("public"));

    config.set("server_port", ValueAny::Number(1162));
    let updated = update(&resource, &mut diags, &state, &config).await.unwrap();
    assert!(diags.errors.is_empty(), "{:?}", diags.errors);
    assert_eq!(updated.get("server_port"), &ValueAny::Number(1162));
    assert_eq!(updated.get("community_name"), &string("public"));
}

#[tokio::test]
async fn read_removes_deleted_objects() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/config/v1/alert-handlers/errors"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let resource = ConfigResource::<AlertHandler>::standalone(api(&server, V10_2));
    let mut diags = Diagnostics::default();
    let state = resource
        .read(
            &mut diags,
            error_log_config(),
            ValueEmpty::default(),
            ValueEmpty::default(),
        )
        .await;

    assert!(state.is_none());
    assert!(diags.errors.is_empty());
    assert_eq!(diags.warnings.len(), 1);
}

#[tokio::test]
async fn read_refreshes_from_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/config/v1/alert-handlers/errors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "schemas": [ERROR_LOG_URN],
            "id": "errors",
            "enabled": false,
            "enabledAlertSeverity": ["fatal", "error"],
        })))
        .mount(&server)
        .await;

    let resource = ConfigResource::<AlertHandler>::standalone(api(&server, V10_2));
    let mut diags = Diagnostics::default();
    let mut prior = error_log_config();
    prior.set("last_updated", string("Monday, 02-Jan-06 15:04:05 UTC"));
    let (state, _) = resource
        .read(&mut diags, prior, ValueEmpty::default(), ValueEmpty::default())
        .await
        .unwrap();

    assert_eq!(state.get("enabled"), &ValueAny::Bool(false));
    assert_eq!(
        state.get("enabled_alert_severity"),
        &ValueAny::List(vec![string("error"), string("fatal")])
    );
    assert_eq!(state.get("last_updated"), &string("Monday, 02-Jan-06 15:04:05 UTC"));
}

#[tokio::test]
async fn default_handler_is_adopted() {
    let server = MockServer::start().await;
    let response = |enabled: bool| {
        json!({
            "schemas": [JMX_URN],
            "id": "jmx",
            "enabled": enabled,
            "asynchronous": false,
        })
    };
    Mock::given(method("GET"))
        .and(path("/config/v1/alert-handlers/jmx"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response(false)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/config/v1/alert-handlers/jmx"))
        .and(body_json(json!({
            "operations": [{"op": "replace", "path": "enabled", "value": "true"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(response(true)))
        .expect(1)
        .mount(&server)
        .await;

    let resource = ConfigResource::<AlertHandler>::adopting(api(&server, V10_2));
    let mut diags = Diagnostics::default();
    let config = config::<AlertHandler>(
        Flavor::Default,
        &[("id", string("jmx")), ("enabled", ValueAny::Bool(true))],
    );

    let (plan, private) = resource
        .plan_create(&mut diags, config.clone(), config.clone(), ValueEmpty::default())
        .await
        .unwrap();
    assert_eq!(plan.get("type"), &ValueAny::Unknown);

    let (state, _) = resource
        .create(&mut diags, plan, config, private, ValueEmpty::default())
        .await
        .unwrap();
    assert!(diags.errors.is_empty(), "{:?}", diags.errors);
    assert_eq!(state.get("type"), &string("jmx"));
    assert_eq!(state.get("enabled"), &ValueAny::Bool(true));

    // Default objects stay on the server
    resource
        .destroy(&mut diags, state, ValueEmpty::default(), ValueEmpty::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn default_handler_type_must_match() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/config/v1/alert-handlers/jmx"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "schemas": [JMX_URN],
            "id": "jmx",
            "enabled": true,
        })))
        .mount(&server)
        .await;

    let resource = ConfigResource::<AlertHandler>::adopting(api(&server, V10_2));
    let mut diags = Diagnostics::default();
    let config = config::<AlertHandler>(
        Flavor::Default,
        &[
            ("id", string("jmx")),
            ("type", string("error-log")),
            ("enabled", ValueAny::Bool(true)),
        ],
    );
    let (plan, private) = resource
        .plan_create(&mut diags, config.clone(), config.clone(), ValueEmpty::default())
        .await
        .unwrap();
    let state = resource
        .create(&mut diags, plan, config, private, ValueEmpty::default())
        .await;

    assert!(state.is_none());
    assert_eq!(diags.errors.len(), 1);
}

#[tokio::test]
async fn default_handler_receives_sensitive_values() {
    let server = MockServer::start().await;
    let response = json!({
        "schemas": [TWILIO_URN],
        "id": "sms",
        "enabled": true,
        "twilioAccountSID": "AC0123",
        "senderPhoneNumber": ["+15550100"],
        "recipientPhoneNumber": ["+15550101"],
        "longMessageBehavior": "truncate",
    });
    Mock::given(method("GET"))
        .and(path("/config/v1/alert-handlers/sms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/config/v1/alert-handlers/sms"))
        .and(body_json(json!({
            "operations": [{"op": "replace", "path": "twilio-auth-token", "value": "new-secret"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let resource = ConfigResource::<AlertHandler>::adopting(api(&server, V10_2));
    let mut diags = Diagnostics::default();
    let config = config::<AlertHandler>(
        Flavor::Default,
        &[("id", string("sms")), ("twilio_auth_token", string("new-secret"))],
    );

    let (plan, private) = resource
        .plan_create(&mut diags, config.clone(), config.clone(), ValueEmpty::default())
        .await
        .unwrap();
    let (state, _) = resource
        .create(&mut diags, plan, config, private, ValueEmpty::default())
        .await
        .unwrap();
    assert!(diags.errors.is_empty(), "{:?}", diags.errors);
    assert_eq!(state.get("type"), &string("twilio"));
    assert_eq!(state.get("twilio_auth_token"), &string("new-secret"));
}

#[tokio::test]
async fn default_handler_type_cannot_change() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let resource = ConfigResource::<AlertHandler>::adopting(api(&server, V10_2));
    let mut diags = Diagnostics::default();
    let prior = config::<AlertHandler>(
        Flavor::Default,
        &[
            ("id", string("jmx")),
            ("type", string("jmx")),
            ("enabled", ValueAny::Bool(true)),
            ("asynchronous", ValueAny::Bool(false)),
            ("last_updated", string("Monday, 02-Jan-06 15:04:05 UTC")),
        ],
    );
    let config = config::<AlertHandler>(
        Flavor::Default,
        &[
            ("id", string("jmx")),
            ("type", string("exec")),
            ("enabled", ValueAny::Bool(true)),
            ("command", string("/bin/alert")),
        ],
    );

    let plan = resource
        .plan_update(
            &mut diags,
            prior,
            config.clone(),
            config,
            ValueEmpty::default(),
            ValueEmpty::default(),
        )
        .await;
    assert!(plan.is_none());
    assert_eq!(diags.errors.len(), 1);
    assert_eq!(diags.errors[0].summary, "Alert Handler type mismatch");
}

#[tokio::test]
async fn validation_and_version_gating() {
    let server = MockServer::start().await;
    let resource = ConfigResource::<AlertHandler>::standalone(api(&server, V9_2));
    let mut diags = Diagnostics::default();

    let custom = config::<AlertHandler>(
        Flavor::Standalone,
        &[
            ("id", string("custom")),
            ("type", string("custom")),
            ("enabled", ValueAny::Bool(true)),
        ],
    );
    assert!(resource.validate(&mut diags, custom).await.is_none());

    let mut diags = Diagnostics::default();
    let twilio = config::<AlertHandler>(
        Flavor::Standalone,
        &[
            ("id", string("sms")),
            ("type", string("twilio")),
            ("enabled", ValueAny::Bool(true)),
            ("twilio_account_sid", string("AC0123")),
            ("twilio_auth_token", string("secret")),
            ("sender_phone_number", ValueAny::List(vec![string("+15550100")])),
            ("recipient_phone_number", ValueAny::List(vec![string("+15550101")])),
            ("http_proxy_external_server", string("proxy")),
        ],
    );
    assert!(resource.validate(&mut diags, twilio.clone()).await.is_some());
    assert!(resource
        .plan_create(&mut diags, twilio.clone(), twilio, ValueEmpty::default())
        .await
        .is_none());
    assert_eq!(diags.errors.len(), 1);
}

#[tokio::test]
async fn import_sets_the_name() {
    let server = MockServer::start().await;
    let resource = ConfigResource::<AlertHandler>::standalone(api(&server, V10_2));
    let mut diags = Diagnostics::default();
    let (state, _) = resource.import(&mut diags, "errors".to_owned()).await.unwrap();
    assert_eq!(state.get("id"), &string("errors"));
    assert_eq!(state.get("type"), &ValueAny::Null);
}

#[tokio::test]
async fn data_source_reads_by_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/config/v1/alert-handlers/errors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(error_log_response()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/config/v1/alert-handlers/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let data_source = ConfigDataSource::<AlertHandler>::new(api(&server, V10_2));
    let mut diags = Diagnostics::default();
    let errors = config::<AlertHandler>(Flavor::DataSource, &[("id", string("errors"))]);
    let state = data_source
        .read(&mut diags, errors, ValueEmpty::default())
        .await
        .unwrap();
    assert_eq!(state.get("type"), &string("error-log"));
    assert_eq!(state.get("enabled"), &ValueAny::Bool(true));
    assert!(!state.0.contains_key("last_updated"));

    let missing = config::<AlertHandler>(Flavor::DataSource, &[("id", string("missing"))]);
    let state = data_source
        .read(&mut diags, missing, ValueEmpty::default())
        .await;
    assert!(state.is_none());
    assert_eq!(diags.errors.len(), 1);
}
