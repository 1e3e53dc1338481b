use sdk::cosmwasm_std::{Addr, QuerierWrapper, Uint128};

use crate::{
    error::{Error, Result},
    msg::RegistryQueryMsg,
    stub::{PoolStub, RegistryStub},
};

pub mod error;
pub mod msg;
mod stub;

/// A directory of lending pools keyed by their collateral asset
pub trait LendingRegistry {
    /// The pool accepting `collateral`, if any
    fn pool_of(&self, collateral: &Addr) -> Result<Option<Addr>>;

    /// The receipt token `pool` issues for deposits of `asset`, if the pool
    /// supports it
    fn share_token(&self, pool: &Addr, asset: &Addr) -> Result<Option<Addr>>;
}

pub trait LendingPool {
    /// The amount of `asset` free for withdrawal
    fn liquidity(&self, asset: &Addr) -> Result<Uint128>;
}

/// Make sure `registry` is a live contract that identifies itself as a lending registry
pub fn check_registry(querier: QuerierWrapper<'_>, registry: &Addr) -> Result<()> {
    platform::contract::validate_addr(querier, registry)?;

    querier
        .query_wasm_smart(registry, &RegistryQueryMsg::IsLendingRegistry {})
        .map_err(Error::from)
        .and_then(|is_registry: bool| {
            if is_registry {
                Ok(())
            } else {
                Err(Error::NotARegistry(registry.to_string()))
            }
        })
}

pub fn new_stub<'a, 'q>(registry: &'a Addr, querier: QuerierWrapper<'q>) -> impl LendingRegistry + 'a
where
    'q: 'a,
{
    RegistryStub::new(registry, querier)
}

pub fn new_pool_stub<'a, 'q>(pool: &'a Addr, querier: QuerierWrapper<'q>) -> impl LendingPool + 'a
where
    'q: 'a,
{
    PoolStub::new(pool, querier)
}
