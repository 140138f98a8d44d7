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

//! Alert handlers: how the server delivers administrative alerts

use crate::model::{AttrSpec, DefaultValue, Family, VariantAttr, VariantSpec};
use crate::version::V9_3;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum AlertHandlerType {
    ErrorLog,
    Snmp,
    Jmx,
    GroovyScripted,
    Smtp,
    Exec,
    Output,
    Email,
    SnmpSubAgent,
    Twilio,
    ThirdParty,
    Custom,
}

pub struct AlertHandler;

const SEVERITIES: &[&str] = &["error", "fatal", "info", "warning"];

const ATTRIBUTES: &[AttrSpec] = &[
    AttrSpec::string(
        "description",
        "description",
        "A description for this Alert Handler.",
    ),
    AttrSpec::bool(
        "enabled",
        "enabled",
        "Indicates whether the Alert Handler is enabled.",
    ),
    AttrSpec::bool(
        "asynchronous",
        "asynchronous",
        "Indicates whether the server should attempt to invoke this Alert Handler in a background thread so that any potentially-expensive processing will not interfere with other processing.",
    ),
    AttrSpec::string(
        "server_host_name",
        "serverHostName",
        "The address of the SNMP agent to which traps will be sent.",
    ),
    AttrSpec::int64(
        "server_port",
        "serverPort",
        "The port number on which the SNMP agent will listen for traps.",
    ),
    AttrSpec::string(
        "community_name",
        "communityName",
        "The name of the community to specify in the SNMP traps.",
    ),
    AttrSpec::string(
        "script_class",
        "scriptClass",
        "The fully-qualified name of the Groovy class providing the logic for the Groovy Scripted Alert Handler.",
    ),
    AttrSpec::string_set(
        "script_argument",
        "scriptArgument",
        "The set of arguments used to customize the behavior for the Scripted Alert Handler. Each configuration property should be given in the form 'name=value'.",
    ),
    AttrSpec::string(
        "command",
        "command",
        "Specifies the path of the command to execute, without any arguments.",
    ),
    AttrSpec::string(
        "output_location",
        "outputLocation",
        "The location to which alert messages will be written.",
    )
    .one_of(&["standard-output", "standard-error"]),
    AttrSpec::string(
        "output_format",
        "outputFormat",
        "The format to use when writing the alert messages.",
    )
    .one_of(&["json", "multi-line-json", "legacy-text"]),
    AttrSpec::string(
        "twilio_account_sid",
        "twilioAccountSID",
        "The unique identifier assigned to the Twilio account that will be used.",
    ),
    AttrSpec::string(
        "twilio_auth_token",
        "twilioAuthToken",
        "The auth token for the Twilio account that will be used.",
    )
    .sensitive(),
    AttrSpec::string(
        "twilio_auth_token_passphrase_provider",
        "twilioAuthTokenPassphraseProvider",
        "A passphrase provider that may be used to obtain the auth token for the Twilio account that will be used.",
    ),
    AttrSpec::string_set(
        "sender_phone_number",
        "senderPhoneNumber",
        "The outgoing phone number to use for the messages.",
    ),
    AttrSpec::string_set(
        "recipient_phone_number",
        "recipientPhoneNumber",
        "The phone number to which alert notifications should be delivered.",
    ),
    AttrSpec::string(
        "long_message_behavior",
        "longMessageBehavior",
        "The behavior to use for alert messages that are longer than the maximum size for a single SMS message.",
    )
    .one_of(&["truncate", "send-as-multiple-messages"]),
    AttrSpec::string(
        "http_proxy_external_server",
        "httpProxyExternalServer",
        "A reference to an HTTP proxy server that should be used for requests sent to the Twilio service.",
    )
    .since(V9_3),
    AttrSpec::string(
        "sender_address",
        "senderAddress",
        "The e-mail address to use as the sender for messages generated by this Alert Handler.",
    ),
    AttrSpec::string_set(
        "recipient_address",
        "recipientAddress",
        "An e-mail address to which alert notifications should be sent.",
    ),
    AttrSpec::string(
        "message_subject",
        "messageSubject",
        "The subject that should be used for e-mail messages generated by this Alert Handler.",
    ),
    AttrSpec::string(
        "message_body",
        "messageBody",
        "The body that should be used for e-mail messages generated by this Alert Handler.",
    ),
    AttrSpec::string(
        "include_monitor_data_filter",
        "includeMonitorDataFilter",
        "A filter that should be used to identify entries from the monitor backend that should be included in the alert message.",
    ),
    AttrSpec::string(
        "extension_class",
        "extensionClass",
        "The fully-qualified name of the Java class providing the logic for the Third Party Alert Handler.",
    ),
    AttrSpec::string_set(
        "extension_argument",
        "extensionArgument",
        "The set of arguments used to customize the behavior for the Third Party Alert Handler. Each configuration property should be given in the form 'name=value'.",
    ),
    AttrSpec::string_set(
        "enabled_alert_severity",
        "enabledAlertSeverity",
        "The alert severities for which this alert handler should be used. If no values are provided, then this alert handler will be enabled for alerts with any severity.",
    )
    .one_of(SEVERITIES),
    AttrSpec::string_set(
        "enabled_alert_type",
        "enabledAlertType",
        "The alert types for which this alert handler should be used. If no values are provided, then this alert handler will be enabled for all alert types.",
    ),
    AttrSpec::string_set(
        "disabled_alert_type",
        "disabledAlertType",
        "The alert types for which this alert handler should not be used.",
    ),
];

macro_rules! variant {
    ($name:literal, creatable: $creatable:literal, [$($extra:expr),* $(,)?]) => {
        VariantSpec {
            name: $name,
            creatable: $creatable,
            attributes: &[
                VariantAttr::optional("description"),
                VariantAttr::required("enabled"),
                VariantAttr::optional("asynchronous"),
                $($extra,)*
                VariantAttr::optional("enabled_alert_severity"),
                VariantAttr::optional("enabled_alert_type"),
                VariantAttr::optional("disabled_alert_type"),
            ],
        }
    };
    ($name:literal, [$($extra:expr),* $(,)?]) => {
        variant!($name, creatable: true, [$($extra),*])
    };
}

const ERROR_LOG: VariantSpec = variant!("error-log", []);
const SNMP: VariantSpec = variant!(
    "snmp",
    [
        VariantAttr::required("server_host_name"),
        VariantAttr::optional("server_port").with_default(DefaultValue::Int64(162)),
        VariantAttr::optional("community_name").with_default(DefaultValue::String("public")),
    ]
);
const JMX: VariantSpec = variant!("jmx", []);
const GROOVY_SCRIPTED: VariantSpec = variant!(
    "groovy-scripted",
    [
        VariantAttr::required("script_class"),
        VariantAttr::optional("script_argument"),
    ]
);
const SMTP: VariantSpec = variant!(
    "smtp",
    [
        VariantAttr::required("sender_address"),
        VariantAttr::required("recipient_address"),
        VariantAttr::required("message_subject"),
        VariantAttr::required("message_body"),
    ]
);
const EXEC: VariantSpec = variant!("exec", [VariantAttr::required("command")]);
const OUTPUT: VariantSpec = variant!(
    "output",
    [
        VariantAttr::optional("output_location")
            .with_default(DefaultValue::String("standard-error")),
        VariantAttr::optional("output_format").with_default(DefaultValue::String("json")),
    ]
);
const EMAIL: VariantSpec = variant!(
    "email",
    [
        VariantAttr::required("sender_address"),
        VariantAttr::required("recipient_address"),
        VariantAttr::required("message_subject"),
        VariantAttr::required("message_body"),
        VariantAttr::optional("include_monitor_data_filter"),
    ]
);
const SNMP_SUB_AGENT: VariantSpec = variant!("snmp-sub-agent", []);
const TWILIO: VariantSpec = variant!(
    "twilio",
    [
        VariantAttr::optional("http_proxy_external_server"),
        VariantAttr::required("twilio_account_sid"),
        VariantAttr::optional("twilio_auth_token"),
        VariantAttr::optional("twilio_auth_token_passphrase_provider"),
        VariantAttr::required("sender_phone_number"),
        VariantAttr::required("recipient_phone_number"),
        VariantAttr::optional("long_message_behavior")
            .with_default(DefaultValue::String("truncate")),
    ]
);
const THIRD_PARTY: VariantSpec = variant!(
    "third-party",
    [
        VariantAttr::required("extension_class"),
        VariantAttr::optional("extension_argument"),
    ]
);
const CUSTOM: VariantSpec = variant!("custom", creatable: false, []);

impl Family for AlertHandler {
    const NAME: &'static str = "alert_handler";
    const DISPLAY: &'static str = "Alert Handler";
    const COLLECTION: &'static str = "alert-handlers";
    const URN_PREFIX: &'static str = "urn:pingidentity:schemas:configuration:2.0:alert-handler:";
    const ID_ATTRIBUTE: &'static str = "id";
    const NAME_FIELD: &'static str = "handlerName";
    const CONFLICTS: &'static [(&'static str, &'static str)] =
        &[("twilio_auth_token", "twilio_auth_token_passphrase_provider")];

    type Variant = AlertHandlerType;

    fn attributes() -> &'static [AttrSpec] {
        ATTRIBUTES
    }

    fn variants() -> &'static [AlertHandlerType] {
        use AlertHandlerType::*;
        &[
            ErrorLog,
            Snmp,
            Jmx,
            GroovyScripted,
            Smtp,
            Exec,
            Output,
            Email,
            SnmpSubAgent,
            Twilio,
            ThirdParty,
            Custom,
        ]
    }

    fn describe(variant: AlertHandlerType) -> &'static VariantSpec {
        match variant {
            AlertHandlerType::ErrorLog => &ERROR_LOG,
            AlertHandlerType::Snmp => &SNMP,
            AlertHandlerType::Jmx => &JMX,
            AlertHandlerType::GroovyScripted => &GROOVY_SCRIPTED,
            AlertHandlerType::Smtp => &SMTP,
            AlertHandlerType::Exec => &EXEC,
            AlertHandlerType::Output => &OUTPUT,
            AlertHandlerType::Email => &EMAIL,
            AlertHandlerType::SnmpSubAgent => &SNMP_SUB_AGENT,
            AlertHandlerType::Twilio => &TWILIO,
            AlertHandlerType::ThirdParty => &THIRD_PARTY,
            AlertHandlerType::Custom => &CUSTOM,
        }
    }
}
