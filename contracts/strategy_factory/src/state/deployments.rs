use serde::{Deserialize, Serialize};

use sdk::{
    cosmwasm_std::{Addr, Order, Storage},
    cw_storage_plus::{Bound, Item, Map},
};

use crate::{error::ContractError, result::ContractResult};

/// The strategies deployed so far keyed by `(asset, collateral)`
///
/// A key is written once and never overwritten nor removed.
pub(crate) struct Deployments;

impl Deployments {
    const STORAGE: Map<'static, (&'static Addr, &'static Addr), Addr> = Map::new("deployments");

    pub const DEFAULT_PAGE: u32 = 10;
    pub const MAX_PAGE: u32 = 30;

    pub fn contains(storage: &dyn Storage, asset: &Addr, collateral: &Addr) -> bool {
        Self::STORAGE.has(storage, (asset, collateral))
    }

    pub fn load(
        storage: &dyn Storage,
        asset: &Addr,
        collateral: &Addr,
    ) -> ContractResult<Option<Addr>> {
        Self::STORAGE
            .may_load(storage, (asset, collateral))
            .map_err(Into::into)
    }

    pub fn save(
        storage: &mut dyn Storage,
        asset: &Addr,
        collateral: &Addr,
        strategy: &Addr,
    ) -> ContractResult<()> {
        if Self::contains(storage, asset, collateral) {
            Err(ContractError::AlreadyDeployed {
                asset: asset.to_string(),
                collateral: collateral.to_string(),
            })
        } else {
            Self::STORAGE
                .save(storage, (asset, collateral), strategy)
                .map_err(Into::into)
        }
    }

    /// Return `(asset, collateral, strategy)` triples following `start_after`
    pub fn page(
        storage: &dyn Storage,
        start_after: Option<(&Addr, &Addr)>,
        limit: Option<u32>,
    ) -> ContractResult<Vec<(Addr, Addr, Addr)>> {
        let limit = limit.unwrap_or(Self::DEFAULT_PAGE).min(Self::MAX_PAGE);

        Self::STORAGE
            .range(
                storage,
                start_after.map(Bound::exclusive),
                None,
                Order::Ascending,
            )
            .take(limit as usize)
            .map(|record| {
                record
                    .map(|((asset, collateral), strategy)| (asset, collateral, strategy))
                    .map_err(ContractError::from)
            })
            .collect()
    }
}

/// A deployment between the strategy instantiation and its configuration
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
#[cfg_attr(test, derive(Debug))]
pub(crate) struct PendingDeployment {
    pub management: Addr,
    pub asset: Addr,
    pub collateral: Addr,
    pub pool: Addr,
    pub share_token: Addr,
    pub incentives: Addr,
    pub name: String,
    pub strategy: Option<Addr>,
}

impl PendingDeployment {
    const STORAGE: Item<'static, Self> = Item::new("pending_deployment");

    pub fn in_progress(storage: &dyn Storage) -> bool {
        Self::STORAGE.exists(storage)
    }

    pub fn store(&self, storage: &mut dyn Storage) -> ContractResult<()> {
        Self::STORAGE.save(storage, self).map_err(Into::into)
    }

    pub fn load(storage: &dyn Storage) -> ContractResult<Self> {
        Self::STORAGE
            .may_load(storage)?
            .ok_or(ContractError::NoPendingDeployment())
    }

    pub fn take(storage: &mut dyn Storage) -> ContractResult<Self> {
        Self::load(storage).map(|pending| {
            Self::STORAGE.remove(storage);
            pending
        })
    }
}
