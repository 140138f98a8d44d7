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

//! Read-only access to configuration objects

use std::marker::PhantomData;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tf_provider::{
    map,
    schema::{Attribute, AttributeConstraint, AttributeType, Block, Description, Schema},
    value::{Value, ValueAny, ValueEmpty, ValueString},
    AttributePath, DataSource, Diagnostics,
};
use tracing::debug;

use crate::client::ApiHandle;
use crate::model::{self, names, Family, Flavor, Model};
use crate::utils::no_errors;

/// Data source reading one object by name
pub struct ConfigDataSource<F: Family> {
    api: ApiHandle,
    family: PhantomData<F>,
}

impl<F: Family> ConfigDataSource<F> {
    pub fn new(api: ApiHandle) -> Self {
        Self {
            api,
            family: PhantomData,
        }
    }
}

#[async_trait]
impl<F: Family> DataSource for ConfigDataSource<F> {
    type State<'a> = Model;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(model::schema::<F>(Flavor::DataSource))
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::State<'a>) -> Option<()> {
        model::validate::<F>(&config, Flavor::DataSource, diags);
        no_errors(diags, ())
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        config: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::State<'a>> {
        let api = self.api.get(diags)?;
        let Some(id) = config.id::<F>() else {
            diags.error_short(
                format!("`{}` must be known", F::ID_ATTRIBUTE),
                AttributePath::new(F::ID_ATTRIBUTE),
            );
            return None;
        };

        let response = match api.get(F::COLLECTION, id).await {
            Ok(response) => response,
            Err(err) => {
                err.report(
                    diags,
                    format!("An error occurred while reading the {}", F::DISPLAY),
                    AttributePath::new(F::ID_ATTRIBUTE),
                );
                return None;
            }
        };

        match model::decode::<F>(&response, &config, Flavor::DataSource) {
            Ok(state) => Some(state),
            Err(err) => {
                diags.root_error(
                    format!("Unexpected {} returned by the configuration API", F::DISPLAY),
                    err.to_string(),
                );
                None
            }
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListState<'a> {
    #[serde(borrow = "'a")]
    pub filter: ValueString<'a>,
    pub ids: ValueAny,
}

/// Data source listing the names of every object of a family
pub struct ConfigListDataSource<F: Family> {
    api: ApiHandle,
    family: PhantomData<F>,
}

impl<F: Family> ConfigListDataSource<F> {
    pub fn new(api: ApiHandle) -> Self {
        Self {
            api,
            family: PhantomData,
        }
    }
}

#[async_trait]
impl<F: Family> DataSource for ConfigListDataSource<F> {
    type State<'a> = ListState<'a>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(Schema {
            version: 1,
            block: Block {
                version: 1,
                attributes: map! {
                    "filter" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(
                            "SCIM filter used when searching the configuration.",
                        ),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "ids" => Attribute {
                        attr_type: AttributeType::Set(Box::new(AttributeType::String)),
                        description: Description::plain(format!(
                            "Names of the {} objects found.",
                            F::DISPLAY
                        )),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                },
                description: Description::plain(format!("Lists {} objects.", F::DISPLAY)),
                ..Default::default()
            },
        })
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        config: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::State<'a>> {
        let api = self.api.get(diags)?;
        let filter = match &config.filter {
            Value::Value(filter) if !filter.is_empty() => Some(&**filter),
            _ => None,
        };

        match api.list(F::COLLECTION, filter).await {
            Ok(resources) => {
                debug!(collection = F::COLLECTION, count = resources.len(), "listed");
                Some(ListState {
                    ids: names::<F>(&resources),
                    ..config
                })
            }
            Err(err) => {
                err.report(
                    diags,
                    format!("An error occurred while listing the {} objects", F::DISPLAY),
                    AttributePath::root(),
                );
                None
            }
        }
    }
}
