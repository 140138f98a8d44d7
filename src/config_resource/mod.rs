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

//! Generic Terraform resource over a family of configuration objects

use std::marker::PhantomData;

use async_trait::async_trait;
use tf_provider::{
    schema::Schema,
    value::{ValueAny, ValueEmpty},
    AttributePath, Diagnostics, Resource,
};
use tracing::{debug, warn};

use crate::client::ApiHandle;
use crate::internaltypes::last_updated_now;
use crate::model::{self, Family, Flavor, Model, LAST_UPDATED, NOTIFICATIONS, REQUIRED_ACTIONS};
use crate::utils::no_errors;

mod crud;

use crud::{add, adopt, decode_response, patch};

pub struct ConfigResource<F: Family> {
    flavor: Flavor,
    api: ApiHandle,
    family: PhantomData<F>,
}

impl<F: Family> ConfigResource<F> {
    /// Resource creating and deleting objects
    pub fn standalone(api: ApiHandle) -> Self {
        Self {
            flavor: Flavor::Standalone,
            api,
            family: PhantomData,
        }
    }

    /// Resource adopting objects that always exist on the server
    pub fn adopting(api: ApiHandle) -> Self {
        Self {
            flavor: Flavor::Default,
            api,
            family: PhantomData,
        }
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    fn check_version(&self, diags: &mut Diagnostics, config: &Model) {
        if let Some(api) = self.api.try_get() {
            model::check_version::<F>(config, api.product_version(), diags);
        }
    }
}

fn id<F: Family>(diags: &mut Diagnostics, state: &Model) -> Option<String> {
    let id = state.id::<F>().map(str::to_owned);
    if id.is_none() {
        diags.error_short(
            format!("`{}` must be known", F::ID_ATTRIBUTE),
            AttributePath::new(F::ID_ATTRIBUTE),
        );
    }
    id
}

#[async_trait]
impl<F: Family> Resource for ConfigResource<F> {
    type State<'a> = Model;
    type PrivateState<'a> = ValueEmpty;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(model::schema::<F>(self.flavor))
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::State<'a>) -> Option<()> {
        model::validate::<F>(&config, self.flavor, diags);
        no_errors(diags, ())
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        state: Self::State<'a>,
        private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let api = self.api.get(diags)?;
        let id = id::<F>(diags, &state)?;

        match api.get(F::COLLECTION, &id).await {
            Ok(response) => {
                let state = decode_response::<F>(diags, &response, &state, self.flavor)?;
                Some((state, private_state))
            }
            Err(err) if err.is_not_found() => {
                warn!(resource = F::NAME, %id, "object not found, removing it from the state");
                diags.root_warning(
                    format!("{} not found", F::DISPLAY),
                    format!("{} `{id}` no longer exists on the server and is removed from the state.", F::DISPLAY),
                );
                None
            }
            Err(err) => {
                err.report(
                    diags,
                    format!("An error occurred while reading the {}", F::DISPLAY),
                    AttributePath::root(),
                );
                None
            }
        }
    }

    async fn plan_create<'a>(
        &self,
        diags: &mut Diagnostics,
        proposed_state: Self::State<'a>,
        config_state: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        self.check_version(diags, &config_state);
        let plan = model::plan_create::<F>(&proposed_state, &config_state, self.flavor);
        no_errors(diags, (plan, Default::default()))
    }

    async fn plan_update<'a>(
        &self,
        diags: &mut Diagnostics,
        prior_state: Self::State<'a>,
        proposed_state: Self::State<'a>,
        config_state: Self::State<'a>,
        prior_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(
        Self::State<'a>,
        Self::PrivateState<'a>,
        Vec<AttributePath>,
    )> {
        self.check_version(diags, &config_state);
        if self.flavor == Flavor::Default {
            model::check_type::<F>(&prior_state, &config_state, diags);
        }
        let (plan, replace) =
            model::plan_update::<F>(&prior_state, &proposed_state, &config_state, self.flavor);
        no_errors(diags, (plan, prior_private_state, replace))
    }

    async fn plan_destroy<'a>(
        &self,
        _diags: &mut Diagnostics,
        _prior_state: Self::State<'a>,
        prior_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::PrivateState<'a>> {
        Some(prior_private_state)
    }

    async fn create<'a>(
        &self,
        diags: &mut Diagnostics,
        planned_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        planned_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let api = self.api.get(diags)?;
        let id = id::<F>(diags, &planned_state)?;

        let mut state = match self.flavor {
            Flavor::Standalone => add::<F>(diags, api, &planned_state).await?,
            _ => adopt::<F>(diags, api, &planned_state, &id).await?,
        };
        state.set(LAST_UPDATED, ValueAny::String(last_updated_now()));

        debug!(resource = F::NAME, %id, "created");
        Some((state, planned_private_state))
    }

    async fn update<'a>(
        &self,
        diags: &mut Diagnostics,
        prior_state: Self::State<'a>,
        planned_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        planned_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let api = self.api.get(diags)?;

        let state = match patch::<F>(diags, api, &planned_state, &prior_state, self.flavor).await? {
            Some(mut state) => {
                state.set(LAST_UPDATED, ValueAny::String(last_updated_now()));
                state
            }
            None => {
                let mut state = planned_state;
                for name in [LAST_UPDATED, NOTIFICATIONS, REQUIRED_ACTIONS] {
                    state.set(name, prior_state.get(name).clone());
                }
                state
            }
        };
        Some((state, planned_private_state))
    }

    async fn destroy<'a>(
        &self,
        diags: &mut Diagnostics,
        prior_state: Self::State<'a>,
        _planned_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<()> {
        if self.flavor != Flavor::Standalone {
            debug!(
                resource = F::NAME,
                "default objects cannot be deleted, removing from the state only"
            );
            return Some(());
        }

        let api = self.api.get(diags)?;
        let id = id::<F>(diags, &prior_state)?;
        match api.delete(F::COLLECTION, &id).await {
            Ok(()) => Some(()),
            Err(err) if err.is_not_found() => {
                debug!(resource = F::NAME, %id, "already deleted");
                Some(())
            }
            Err(err) => {
                err.report(
                    diags,
                    format!("An error occurred while deleting the {}", F::DISPLAY),
                    AttributePath::root(),
                );
                None
            }
        }
    }

    async fn import<'a>(
        &self,
        _diags: &mut Diagnostics,
        id: String,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let mut state = Model::empty::<F>(self.flavor);
        state.set(F::ID_ATTRIBUTE, ValueAny::String(id));
        Some((state, Default::default()))
    }
}
