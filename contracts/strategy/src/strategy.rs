use access_control::{ManagementAccess, ManagementTransfer};
use lending_registry::LendingPool;
use platform::message::Response as MessageResponse;
use sdk::cosmwasm_std::{Addr, Api, Deps, Env, Storage};

use crate::{
    api::{InstantiateMsg, ManagementResponse, WithdrawLimitResponse},
    error::{ContractError, ContractResult},
    event,
    state::{Config, FeeRecipient},
};

pub(crate) fn validate_addr(api: &dyn Api, address: Addr) -> ContractResult<Addr> {
    api.addr_validate(address.as_str())
        .map_err(|cause| ContractError::InvalidAddress {
            address: address.into_string(),
            cause: cause.to_string(),
        })
}

impl Config {
    pub fn try_new(api: &dyn Api, msg: InstantiateMsg) -> ContractResult<Self> {
        if msg.name.is_empty() {
            return Err(ContractError::EmptyName());
        }

        Ok(Self {
            registry: validate_addr(api, msg.registry)?,
            pool: validate_addr(api, msg.pool)?,
            share_token: validate_addr(api, msg.share_token)?,
            asset: validate_addr(api, msg.asset)?,
            incentives: validate_addr(api, msg.incentives)?,
            name: msg.name,
        })
    }
}

pub(crate) fn try_setup(
    storage: &mut dyn Storage,
    api: &dyn Api,
    instantiator: &Addr,
    msg: InstantiateMsg,
) -> ContractResult<()> {
    Config::try_new(api, msg)
        .and_then(|config| config.store(storage))
        .and_then(|()| {
            ManagementAccess::new(&mut *storage)
                .grant_to(instantiator)
                .map_err(Into::into)
        })
        .and_then(|()| FeeRecipient::store(storage, instantiator))
}

pub(crate) fn try_set_fee_recipient(
    storage: &mut dyn Storage,
    api: &dyn Api,
    env: &Env,
    caller: &Addr,
    recipient: Addr,
) -> ContractResult<MessageResponse> {
    ManagementAccess::new(&*storage)
        .check(caller)
        .map_err(Into::into)
        .and_then(|()| validate_addr(api, recipient))
        .and_then(|recipient| {
            if recipient == env.contract.address {
                Err(ContractError::SelfFeeRecipient())
            } else {
                Ok(recipient)
            }
        })
        .and_then(|recipient| {
            FeeRecipient::store(storage, &recipient)
                .map(|()| event::fee_recipient_changed(env, &recipient).into())
        })
}

pub(crate) fn try_propose_management(
    storage: &mut dyn Storage,
    api: &dyn Api,
    env: &Env,
    caller: &Addr,
    candidate: Addr,
) -> ContractResult<MessageResponse> {
    ManagementAccess::new(&*storage)
        .check(caller)
        .map_err(Into::into)
        .and_then(|()| validate_addr(api, candidate))
        .and_then(|candidate| {
            ManagementTransfer::new(&mut *storage)
                .propose(&candidate)
                .map(|()| event::management_proposed(env, &candidate).into())
                .map_err(Into::into)
        })
}

pub(crate) fn try_accept_management(
    storage: &mut dyn Storage,
    env: &Env,
    caller: &Addr,
) -> ContractResult<MessageResponse> {
    ManagementTransfer::new(&mut *storage)
        .accept(caller)
        .map(|management| event::management_accepted(env, &management).into())
        .map_err(Into::into)
}

pub(crate) fn query_management(storage: &dyn Storage) -> ContractResult<ManagementResponse> {
    let management = ManagementAccess::new(storage).management()?;
    let pending_management = ManagementTransfer::new(storage).pending()?;

    FeeRecipient::load(storage).map(|performance_fee_recipient| ManagementResponse {
        management,
        pending_management,
        performance_fee_recipient,
    })
}

pub(crate) fn query_withdraw_limit<Pool>(
    pool: Pool,
    config: &Config,
) -> ContractResult<WithdrawLimitResponse>
where
    Pool: LendingPool,
{
    pool.liquidity(&config.asset)
        .map(|amount| WithdrawLimitResponse { amount })
        .map_err(Into::into)
}

pub(crate) fn query_withdraw_limit_of(deps: Deps<'_>) -> ContractResult<WithdrawLimitResponse> {
    Config::load(deps.storage).and_then(|config| {
        query_withdraw_limit(
            lending_registry::new_pool_stub(&config.pool, deps.querier),
            &config,
        )
    })
}
