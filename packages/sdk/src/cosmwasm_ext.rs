//! Aliases fixing the custom message type used throughout the contracts.
//!
//! All contracts in this workspace talk plain CosmWasm, hence [`Empty`].

use cosmwasm_std::Empty;

pub type CosmosMsg = cosmwasm_std::CosmosMsg<Empty>;

pub type SubMsg = cosmwasm_std::SubMsg<Empty>;

pub type Response = cosmwasm_std::Response<Empty>;
