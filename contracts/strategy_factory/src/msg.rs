use serde::{Deserialize, Serialize};

use platform::contract::CodeId;
use sdk::{
    cosmwasm_std::Addr,
    schemars::{self, JsonSchema},
};

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[cfg_attr(any(test, feature = "testing"), derive(Debug))]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct InstantiateMsg {
    /// The lending registry resolving collateral assets to pools
    pub registry: Addr,
    pub management: Addr,
    pub performance_fee_recipient: Addr,
    /// The code the strategies are instantiated from
    pub strategy_code: CodeId,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[cfg_attr(any(test, feature = "testing"), derive(Debug))]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Deploy a strategy supplying `asset` to the pool that accepts `collateral`
    ///
    /// `management` is proposed as the strategy management and takes over once
    /// it accepts. The transaction data is a [`DeployResponse`].
    Deploy {
        management: Addr,
        collateral: Addr,
        asset: Addr,
        incentives: Addr,
        name: String,
    },
    /// Replace the factory management right away
    SetManagement { management: Addr },
    /// Replace the recipient set on the strategies deployed from now on
    SetPerformanceFeeRecipient { recipient: Addr },
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[cfg_attr(any(test, feature = "testing"), derive(Debug))]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum QueryMsg {
    /// Return `bool`
    IsDeployedAsset { asset: Addr, collateral: Addr },
    /// Return [`ConfigResponse`]
    Config {},
    /// Return `Option<Addr>`
    Deployment { asset: Addr, collateral: Addr },
    /// Return [`DeploymentsResponse`] ordered by asset and then by collateral
    Deployments {
        start_after: Option<DeploymentKey>,
        limit: Option<u32>,
    },
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[cfg_attr(any(test, feature = "testing"), derive(Debug))]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct DeploymentKey {
    pub asset: Addr,
    pub collateral: Addr,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[cfg_attr(any(test, feature = "testing"), derive(Debug))]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct DeployResponse {
    pub strategy: Addr,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[cfg_attr(any(test, feature = "testing"), derive(Debug))]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct ConfigResponse {
    pub management: Addr,
    pub performance_fee_recipient: Addr,
    pub registry: Addr,
    pub strategy_code: CodeId,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[cfg_attr(any(test, feature = "testing"), derive(Debug))]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct Deployment {
    pub asset: Addr,
    pub collateral: Addr,
    pub strategy: Addr,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[cfg_attr(any(test, feature = "testing"), derive(Debug))]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct DeploymentsResponse {
    pub deployments: Vec<Deployment>,
}
