use std::mem;

use serde::{Deserialize, Serialize};

use platform::contract::Code;
use sdk::{
    cosmwasm_std::{Addr, Storage},
    cw_storage_plus::Item,
};

use crate::result::ContractResult;

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
#[cfg_attr(test, derive(Debug))]
pub(crate) struct Config {
    pub performance_fee_recipient: Addr,
    pub registry: Addr,
    pub strategy_code: Code,
}

impl Config {
    const STORAGE: Item<'static, Self> = Item::new("config");

    pub fn store(&self, storage: &mut dyn Storage) -> ContractResult<()> {
        Self::STORAGE.save(storage, self).map_err(Into::into)
    }

    pub fn load(storage: &dyn Storage) -> ContractResult<Self> {
        Self::STORAGE.load(storage).map_err(Into::into)
    }

    pub fn update_fee_recipient(storage: &mut dyn Storage, recipient: Addr) -> ContractResult<()> {
        Self::STORAGE
            .update(storage, |config| -> ContractResult<Config> {
                Ok(Self {
                    performance_fee_recipient: recipient,
                    ..config
                })
            })
            .map(mem::drop)
    }
}
