use platform::{error as platform_error, response};
use sdk::{
    cosmwasm_ext::Response,
    cosmwasm_std::{entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo},
};

use crate::{
    api::{ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg},
    error::ContractResult,
    state::Config,
    strategy,
};

#[entry_point]
pub fn instantiate(
    deps: DepsMut<'_>,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> ContractResult<Response> {
    strategy::try_setup(deps.storage, deps.api, &info.sender, msg)
        .map(|()| response::empty_response())
        .inspect_err(platform_error::log(deps.api))
}

#[entry_point]
pub fn execute(
    deps: DepsMut<'_>,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> ContractResult<Response> {
    match msg {
        ExecuteMsg::SetPerformanceFeeRecipient { recipient } => strategy::try_set_fee_recipient(
            deps.storage,
            deps.api,
            &env,
            &info.sender,
            recipient,
        ),
        ExecuteMsg::SetPendingManagement { management } => strategy::try_propose_management(
            deps.storage,
            deps.api,
            &env,
            &info.sender,
            management,
        ),
        ExecuteMsg::AcceptManagement {} => {
            strategy::try_accept_management(deps.storage, &env, &info.sender)
        }
    }
    .map(response::response_only_messages)
    .inspect_err(platform_error::log(deps.api))
}

#[entry_point]
pub fn query(deps: Deps<'_>, _env: Env, msg: QueryMsg) -> ContractResult<Binary> {
    match msg {
        QueryMsg::Config {} => Config::load(deps.storage)
            .map(ConfigResponse::from)
            .and_then(|config| to_json_binary(&config).map_err(Into::into)),
        QueryMsg::Management {} => strategy::query_management(deps.storage)
            .and_then(|management| to_json_binary(&management).map_err(Into::into)),
        QueryMsg::AvailableWithdrawLimit {} => strategy::query_withdraw_limit_of(deps)
            .and_then(|limit| to_json_binary(&limit).map_err(Into::into)),
    }
    .inspect_err(platform_error::log(deps.api))
}
