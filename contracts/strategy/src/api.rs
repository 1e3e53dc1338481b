use serde::{Deserialize, Serialize};

use sdk::{
    cosmwasm_std::{Addr, Uint128},
    schemars::{self, JsonSchema},
};

/// The immutable bindings of a strategy
///
/// The instantiating address becomes both the strategy management and
/// the performance fee recipient.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[cfg_attr(any(test, feature = "testing"), derive(Debug))]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct InstantiateMsg {
    pub registry: Addr,
    pub pool: Addr,
    pub share_token: Addr,
    /// The asset the strategy supplies to the pool
    pub asset: Addr,
    /// The rewards controller of the pool
    pub incentives: Addr,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[cfg_attr(any(test, feature = "testing"), derive(Debug))]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum ExecuteMsg {
    SetPerformanceFeeRecipient { recipient: Addr },
    /// Propose a new management. It takes over once it sends [`ExecuteMsg::AcceptManagement`].
    SetPendingManagement { management: Addr },
    AcceptManagement {},
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[cfg_attr(any(test, feature = "testing"), derive(Debug))]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub enum QueryMsg {
    /// Return [`ConfigResponse`]
    Config {},
    /// Return [`ManagementResponse`]
    Management {},
    /// Return [`WithdrawLimitResponse`]
    AvailableWithdrawLimit {},
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[cfg_attr(any(test, feature = "testing"), derive(Debug))]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct ConfigResponse {
    pub registry: Addr,
    pub pool: Addr,
    pub share_token: Addr,
    pub asset: Addr,
    pub incentives: Addr,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[cfg_attr(any(test, feature = "testing"), derive(Debug))]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct ManagementResponse {
    pub management: Addr,
    pub pending_management: Option<Addr>,
    pub performance_fee_recipient: Addr,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[cfg_attr(any(test, feature = "testing"), derive(Debug))]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct WithdrawLimitResponse {
    pub amount: Uint128,
}
