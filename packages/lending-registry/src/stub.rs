use sdk::cosmwasm_std::{Addr, QuerierWrapper, Uint128};

use crate::{
    error::Result,
    msg::{AssetStorageResponse, LiquidityResponse, PoolQueryMsg, PoolResponse, RegistryQueryMsg},
    LendingPool, LendingRegistry,
};

pub(crate) struct RegistryStub<'a, 'q> {
    registry: &'a Addr,
    querier: QuerierWrapper<'q>,
}

impl<'a, 'q> RegistryStub<'a, 'q> {
    pub(crate) fn new(registry: &'a Addr, querier: QuerierWrapper<'q>) -> Self {
        Self { registry, querier }
    }
}

impl<'a, 'q> LendingRegistry for RegistryStub<'a, 'q> {
    fn pool_of(&self, collateral: &Addr) -> Result<Option<Addr>> {
        self.querier
            .query_wasm_smart(
                self.registry,
                &RegistryQueryMsg::PoolOf {
                    collateral: collateral.clone(),
                },
            )
            .map(|PoolResponse { pool }| pool)
            .map_err(Into::into)
    }

    fn share_token(&self, pool: &Addr, asset: &Addr) -> Result<Option<Addr>> {
        PoolStub::new(pool, self.querier)
            .asset_storage(asset)
            .map(|storage| storage.share_token)
    }
}

pub(crate) struct PoolStub<'a, 'q> {
    pool: &'a Addr,
    querier: QuerierWrapper<'q>,
}

impl<'a, 'q> PoolStub<'a, 'q> {
    pub(crate) fn new(pool: &'a Addr, querier: QuerierWrapper<'q>) -> Self {
        Self { pool, querier }
    }

    fn asset_storage(&self, asset: &Addr) -> Result<AssetStorageResponse> {
        self.querier
            .query_wasm_smart(
                self.pool,
                &PoolQueryMsg::AssetStorage {
                    asset: asset.clone(),
                },
            )
            .map_err(Into::into)
    }
}

impl<'a, 'q> LendingPool for PoolStub<'a, 'q> {
    fn liquidity(&self, asset: &Addr) -> Result<Uint128> {
        self.querier
            .query_wasm_smart(
                self.pool,
                &PoolQueryMsg::Liquidity {
                    asset: asset.clone(),
                },
            )
            .map(|LiquidityResponse { amount }| amount)
            .map_err(Into::into)
    }
}
