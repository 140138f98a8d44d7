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

//! Attribute syntaxes: validation and storage rules of LDAP attribute values
//!
//! Attribute syntaxes are built into the server. They can only be adopted and read.

use crate::model::{AttrSpec, Family, VariantAttr, VariantSpec};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum AttributeSyntaxType {
    AttributeTypeDescription,
    DirectoryString,
    TelephoneNumber,
    DistinguishedName,
    GeneralizedTime,
    Integer,
    Uuid,
    Generic,
    JsonObject,
    UserPassword,
    Boolean,
    HexString,
    BitString,
    LdapUrl,
    NameAndOptionalUid,
}

pub struct AttributeSyntax;

const ATTRIBUTES: &[AttrSpec] = &[
    AttrSpec::bool(
        "enabled",
        "enabled",
        "Indicates whether the Attribute Syntax is enabled.",
    ),
    AttrSpec::bool(
        "require_binary_transfer",
        "requireBinaryTransfer",
        "Indicates whether values of this attribute are required to have a \"binary\" transfer option as described in RFC 4522.",
    ),
    AttrSpec::bool(
        "strip_syntax_min_upper_bound",
        "stripSyntaxMinUpperBound",
        "Indicates whether the suggested minimum upper bound appended to an attribute's syntax OID in its schema definition Attribute Type Description should be stripped.",
    ),
    AttrSpec::bool(
        "allow_zero_length_values",
        "allowZeroLengthValues",
        "Indicates whether zero-length (that is, an empty string) values are allowed.",
    ),
    AttrSpec::bool(
        "strict_format",
        "strictFormat",
        "Indicates whether to require telephone number values to strictly comply with the standard telephone number syntax.",
    ),
    AttrSpec::bool(
        "enable_compaction",
        "enableCompaction",
        "Indicates whether values of attributes with this syntax should be compacted when stored in a local DB database.",
    ),
    AttrSpec::string_set(
        "include_attribute_in_compaction",
        "includeAttributeInCompaction",
        "Specifies the specific attributes (which should be associated with this syntax) whose values should be compacted. If one or more include attributes are specified, then only those attributes will have their values compacted.",
    ),
    AttrSpec::string_set(
        "exclude_attribute_from_compaction",
        "excludeAttributeFromCompaction",
        "Specifies the specific attributes (which should be associated with this syntax) whose values should not be compacted.",
    ),
];

macro_rules! variant {
    ($name:literal, [$($extra:literal),* $(,)?]) => {
        VariantSpec {
            name: $name,
            creatable: false,
            attributes: &[
                VariantAttr::optional("enabled"),
                VariantAttr::optional("require_binary_transfer"),
                $(VariantAttr::optional($extra),)*
            ],
        }
    };
    (compactable $name:literal) => {
        variant!(
            $name,
            [
                "enable_compaction",
                "include_attribute_in_compaction",
                "exclude_attribute_from_compaction",
            ]
        )
    };
}

const ATTRIBUTE_TYPE_DESCRIPTION: VariantSpec =
    variant!("attribute-type-description", ["strip_syntax_min_upper_bound"]);
const DIRECTORY_STRING: VariantSpec = variant!("directory-string", ["allow_zero_length_values"]);
const TELEPHONE_NUMBER: VariantSpec = variant!("telephone-number", ["strict_format"]);
const DISTINGUISHED_NAME: VariantSpec = variant!(compactable "distinguished-name");
const GENERALIZED_TIME: VariantSpec = variant!(compactable "generalized-time");
const INTEGER: VariantSpec = variant!(compactable "integer");
const UUID: VariantSpec = variant!(compactable "uuid");
const GENERIC: VariantSpec = variant!("generic", []);
const JSON_OBJECT: VariantSpec = variant!(compactable "json-object");
const USER_PASSWORD: VariantSpec = variant!("user-password", []);
const BOOLEAN: VariantSpec = variant!(compactable "boolean");
const HEX_STRING: VariantSpec = variant!("hex-string", []);
const BIT_STRING: VariantSpec = variant!(compactable "bit-string");
const LDAP_URL: VariantSpec = variant!("ldap-url", []);
const NAME_AND_OPTIONAL_UID: VariantSpec = variant!("name-and-optional-uid", []);

impl Family for AttributeSyntax {
    const NAME: &'static str = "attribute_syntax";
    const DISPLAY: &'static str = "Attribute Syntax";
    const COLLECTION: &'static str = "attribute-syntaxes";
    const URN_PREFIX: &'static str =
        "urn:pingidentity:schemas:configuration:2.0:attribute-syntax:";
    const ID_ATTRIBUTE: &'static str = "name";
    const NAME_FIELD: &'static str = "syntaxName";

    type Variant = AttributeSyntaxType;

    fn attributes() -> &'static [AttrSpec] {
        ATTRIBUTES
    }

    fn variants() -> &'static [AttributeSyntaxType] {
        use AttributeSyntaxType::*;
        &[
            AttributeTypeDescription,
            DirectoryString,
            TelephoneNumber,
            DistinguishedName,
            GeneralizedTime,
            Integer,
            Uuid,
            Generic,
            JsonObject,
            UserPassword,
            Boolean,
            HexString,
            BitString,
            LdapUrl,
            NameAndOptionalUid,
        ]
    }

    fn describe(variant: AttributeSyntaxType) -> &'static VariantSpec {
        match variant {
            AttributeSyntaxType::AttributeTypeDescription => &ATTRIBUTE_TYPE_DESCRIPTION,
            AttributeSyntaxType::DirectoryString => &DIRECTORY_STRING,
            AttributeSyntaxType::TelephoneNumber => &TELEPHONE_NUMBER,
            AttributeSyntaxType::DistinguishedName => &DISTINGUISHED_NAME,
            AttributeSyntaxType::GeneralizedTime => &GENERALIZED_TIME,
            AttributeSyntaxType::Integer => &INTEGER,
            AttributeSyntaxType::Uuid => &UUID,
            AttributeSyntaxType::Generic => &GENERIC,
            AttributeSyntaxType::JsonObject => &JSON_OBJECT,
            AttributeSyntaxType::UserPassword => &USER_PASSWORD,
            AttributeSyntaxType::Boolean => &BOOLEAN,
            AttributeSyntaxType::HexString => &HEX_STRING,
            AttributeSyntaxType::BitString => &BIT_STRING,
            AttributeSyntaxType::LdapUrl => &LDAP_URL,
            AttributeSyntaxType::NameAndOptionalUid => &NAME_AND_OPTIONAL_UID,
        }
    }
}
