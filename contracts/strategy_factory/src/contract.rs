use platform::{error as platform_error, reply, response};
use sdk::{
    cosmwasm_ext::Response,
    cosmwasm_std::{
        entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply,
    },
};

use crate::{
    error::ContractError,
    factory::{self, DeployRequest},
    msg::{DeployResponse, ExecuteMsg, InstantiateMsg, QueryMsg},
    result::ContractResult,
    state::{config::Config, deployments::Deployments},
};

#[entry_point]
pub fn instantiate(
    deps: DepsMut<'_>,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> ContractResult<Response> {
    factory::try_init(deps.storage, deps.api, deps.querier, msg)
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
        ExecuteMsg::Deploy {
            management,
            collateral,
            asset,
            incentives,
            name,
        } => Config::load(deps.storage).and_then(|config| {
            factory::try_deploy(
                deps.storage,
                deps.api,
                &info.sender,
                lending_registry::new_stub(&config.registry, deps.querier),
                &config,
                DeployRequest {
                    management,
                    collateral,
                    asset,
                    incentives,
                    name,
                },
            )
        }),
        ExecuteMsg::SetManagement { management } => {
            factory::try_set_management(deps.storage, deps.api, &env, &info.sender, management)
        }
        ExecuteMsg::SetPerformanceFeeRecipient { recipient } => {
            factory::try_set_fee_recipient(deps.storage, deps.api, &env, &info.sender, recipient)
        }
    }
    .map(response::response_only_messages)
    .inspect_err(platform_error::log(deps.api))
}

#[entry_point]
pub fn query(deps: Deps<'_>, _env: Env, msg: QueryMsg) -> ContractResult<Binary> {
    match msg {
        QueryMsg::IsDeployedAsset { asset, collateral } => {
            to_json_binary(&Deployments::contains(deps.storage, &asset, &collateral))
                .map_err(Into::into)
        }
        QueryMsg::Config {} => factory::query_config(deps.storage)
            .and_then(|config| to_json_binary(&config).map_err(Into::into)),
        QueryMsg::Deployment { asset, collateral } => {
            Deployments::load(deps.storage, &asset, &collateral)
                .and_then(|strategy| to_json_binary(&strategy).map_err(Into::into))
        }
        QueryMsg::Deployments { start_after, limit } => {
            factory::query_deployments(deps.storage, start_after, limit)
                .and_then(|deployments| to_json_binary(&deployments).map_err(Into::into))
        }
    }
    .inspect_err(platform_error::log(deps.api))
}

#[entry_point]
pub fn reply(deps: DepsMut<'_>, env: Env, msg: Reply) -> ContractResult<Response> {
    match msg.id {
        factory::INSTANTIATE_REPLY_ID => reply::from_instantiate_addr_only(deps.api, msg)
            .map_err(|err| ContractError::ParseError {
                err: err.to_string(),
            })
            .and_then(|strategy| factory::on_strategy_instantiated(deps.storage, strategy))
            .map(response::response_only_messages),
        factory::CONFIGURE_REPLY_ID => factory::on_strategy_configured(deps.storage, &env)
            .and_then(|(strategy, deployed)| {
                response::response_with_messages(DeployResponse { strategy }, deployed)
            }),
        id => Err(ContractError::UnexpectedReply(id)),
    }
    .inspect_err(platform_error::log(deps.api))
}
