use serde::{Deserialize, Serialize};

use sdk::{
    cosmwasm_std::{Addr, Uint128},
    schemars::{self, JsonSchema},
};

/// The query message variants each lending registry must implement
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[cfg_attr(any(test, feature = "testing"), derive(Debug))]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum RegistryQueryMsg {
    /// Identity probe, responds with `true`
    IsLendingRegistry {},
    /// The pool managing `collateral`, responds with [`PoolResponse`]
    PoolOf { collateral: Addr },
}

/// The query message variants each lending pool must implement
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[cfg_attr(any(test, feature = "testing"), derive(Debug))]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum PoolQueryMsg {
    /// The position tokens of `asset` in the pool, responds with [`AssetStorageResponse`]
    AssetStorage { asset: Addr },
    /// The amount of `asset` available for withdrawal, responds with [`LiquidityResponse`]
    Liquidity { asset: Addr },
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[cfg_attr(any(test, feature = "testing"), derive(Debug))]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct PoolResponse {
    pub pool: Option<Addr>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[cfg_attr(any(test, feature = "testing"), derive(Debug))]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct AssetStorageResponse {
    /// The receipt token of the deposits of the asset, `None` if the asset is not supported
    pub share_token: Option<Addr>,
    pub debt_token: Option<Addr>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[cfg_attr(any(test, feature = "testing"), derive(Debug))]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct LiquidityResponse {
    pub amount: Uint128,
}
