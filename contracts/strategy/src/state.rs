use serde::{Deserialize, Serialize};

use sdk::{
    cosmwasm_std::{Addr, Storage},
    cw_storage_plus::Item,
};

use crate::{api::ConfigResponse, error::ContractResult};

#[derive(Serialize, Deserialize)]
#[cfg_attr(test, derive(Debug, PartialEq, Eq))]
pub(crate) struct Config {
    pub registry: Addr,
    pub pool: Addr,
    pub share_token: Addr,
    pub asset: Addr,
    pub incentives: Addr,
    pub name: String,
}

impl Config {
    const STORAGE: Item<'static, Self> = Item::new("config");

    pub fn store(&self, storage: &mut dyn Storage) -> ContractResult<()> {
        Self::STORAGE.save(storage, self).map_err(Into::into)
    }

    pub fn load(storage: &dyn Storage) -> ContractResult<Self> {
        Self::STORAGE.load(storage).map_err(Into::into)
    }
}

impl From<Config> for ConfigResponse {
    fn from(config: Config) -> Self {
        Self {
            registry: config.registry,
            pool: config.pool,
            share_token: config.share_token,
            asset: config.asset,
            incentives: config.incentives,
            name: config.name,
        }
    }
}

pub(crate) struct FeeRecipient;

impl FeeRecipient {
    const STORAGE: Item<'static, Addr> = Item::new("performance_fee_recipient");

    pub fn store(storage: &mut dyn Storage, recipient: &Addr) -> ContractResult<()> {
        Self::STORAGE.save(storage, recipient).map_err(Into::into)
    }

    pub fn load(storage: &dyn Storage) -> ContractResult<Addr> {
        Self::STORAGE.load(storage).map_err(Into::into)
    }
}
