use access_control::ManagementAccess;
use lending_registry::LendingRegistry;
use platform::{
    batch::{Batch, ReplyId},
    contract::{Code, CodeId},
    message::Response as MessageResponse,
};
use sdk::cosmwasm_std::{Addr, Api, Env, QuerierWrapper, Storage};
use strategy::api::{ExecuteMsg as StrategyExecuteMsg, InstantiateMsg as StrategyInstantiateMsg};

use crate::{
    error::ContractError,
    event,
    msg::{ConfigResponse, Deployment, DeploymentKey, DeploymentsResponse, InstantiateMsg},
    result::ContractResult,
    state::{
        config::Config,
        deployments::{Deployments, PendingDeployment},
    },
};

pub(crate) const INSTANTIATE_REPLY_ID: ReplyId = 1;
pub(crate) const CONFIGURE_REPLY_ID: ReplyId = 2;

pub(crate) struct DeployRequest {
    pub management: Addr,
    pub collateral: Addr,
    pub asset: Addr,
    pub incentives: Addr,
    pub name: String,
}

impl DeployRequest {
    fn validate(self, api: &dyn Api) -> ContractResult<Self> {
        if self.name.is_empty() {
            return Err(ContractError::EmptyName());
        }

        Ok(Self {
            management: validate_addr(api, self.management)?,
            collateral: validate_addr(api, self.collateral)?,
            asset: validate_addr(api, self.asset)?,
            incentives: validate_addr(api, self.incentives)?,
            name: self.name,
        })
    }
}

fn validate_addr(api: &dyn Api, address: Addr) -> ContractResult<Addr> {
    api.addr_validate(address.as_str())
        .map_err(|cause| ContractError::InvalidAddress {
            address: address.into_string(),
            cause: cause.to_string(),
        })
}

pub(crate) fn try_init(
    storage: &mut dyn Storage,
    api: &dyn Api,
    querier: QuerierWrapper<'_>,
    msg: InstantiateMsg,
) -> ContractResult<()> {
    lending_registry::check_registry(querier, &msg.registry)
        .map_err(|err| ContractError::InvalidRegistry(err.to_string()))?;
    let management = validate_addr(api, msg.management)?;
    let performance_fee_recipient = validate_addr(api, msg.performance_fee_recipient)?;
    let strategy_code = Code::try_new(msg.strategy_code, querier)?;

    ManagementAccess::new(&mut *storage).grant_to(&management)?;

    Config {
        performance_fee_recipient,
        registry: msg.registry,
        strategy_code,
    }
    .store(storage)
}

/// Start a new deployment
///
/// The strategy is instantiated by the returned messages. The deployment
/// completes in [`on_strategy_instantiated`] and [`on_strategy_configured`].
pub(crate) fn try_deploy<Registry>(
    storage: &mut dyn Storage,
    api: &dyn Api,
    caller: &Addr,
    registry: Registry,
    config: &Config,
    request: DeployRequest,
) -> ContractResult<MessageResponse>
where
    Registry: LendingRegistry,
{
    ManagementAccess::new(&*storage).check(caller)?;

    let request = request.validate(api)?;
    if Deployments::contains(storage, &request.asset, &request.collateral) {
        return Err(already_deployed(&request.asset, &request.collateral));
    }
    if PendingDeployment::in_progress(storage) {
        return Err(ContractError::DeploymentInProgress());
    }

    let pool = registry
        .pool_of(&request.collateral)?
        .ok_or_else(|| incompatible_pool(&request.asset, &request.collateral))?;
    let share_token = registry
        .share_token(&pool, &request.asset)?
        .ok_or_else(|| incompatible_pool(&request.asset, &request.collateral))?;

    let init_msg = StrategyInstantiateMsg {
        registry: config.registry.clone(),
        pool: pool.clone(),
        share_token: share_token.clone(),
        asset: request.asset.clone(),
        incentives: request.incentives.clone(),
        name: request.name.clone(),
    };

    PendingDeployment {
        management: request.management,
        asset: request.asset,
        collateral: request.collateral,
        pool,
        share_token,
        incentives: request.incentives,
        name: request.name,
        strategy: None,
    }
    .store(storage)?;

    Batch::default()
        .schedule_instantiate_wasm_reply_on_success(
            config.strategy_code,
            &init_msg,
            init_msg.name.clone(),
            None,
            INSTANTIATE_REPLY_ID,
        )
        .map(MessageResponse::messages_only)
        .map_err(Into::into)
}

/// Record the new strategy and configure it
///
/// The record is persisted before any message to the strategy gets dispatched.
pub(crate) fn on_strategy_instantiated(
    storage: &mut dyn Storage,
    strategy: Addr,
) -> ContractResult<MessageResponse> {
    let mut pending = PendingDeployment::load(storage)?;
    Deployments::save(storage, &pending.asset, &pending.collateral, &strategy)?;

    let fee_recipient = Config::load(storage)?.performance_fee_recipient;
    let management = pending.management.clone();
    pending.strategy = Some(strategy.clone());
    pending.store(storage)?;

    Batch::default()
        .schedule_execute_wasm_no_reply_no_funds(
            strategy.clone(),
            &StrategyExecuteMsg::SetPerformanceFeeRecipient {
                recipient: fee_recipient,
            },
        )
        .and_then(|batch| {
            batch.schedule_execute_wasm_reply_on_success_no_funds(
                strategy,
                &StrategyExecuteMsg::SetPendingManagement { management },
                CONFIGURE_REPLY_ID,
            )
        })
        .map(MessageResponse::messages_only)
        .map_err(Into::into)
}

/// Close the deployment and publish it
pub(crate) fn on_strategy_configured(
    storage: &mut dyn Storage,
    env: &Env,
) -> ContractResult<(Addr, MessageResponse)> {
    PendingDeployment::take(storage).and_then(|mut deployment| {
        deployment
            .strategy
            .take()
            .ok_or(ContractError::NoPendingDeployment())
            .map(|strategy| {
                let deployed = event::strategy_deployed(env, deployment, &strategy);
                (strategy, deployed.into())
            })
    })
}

pub(crate) fn try_set_management(
    storage: &mut dyn Storage,
    api: &dyn Api,
    env: &Env,
    caller: &Addr,
    management: Addr,
) -> ContractResult<MessageResponse> {
    let mut access = ManagementAccess::new(&mut *storage);
    access.check(caller)?;

    let management = validate_addr(api, management)?;
    access
        .grant_to(&management)
        .map(|()| event::management_changed(env, &management).into())
        .map_err(Into::into)
}

pub(crate) fn try_set_fee_recipient(
    storage: &mut dyn Storage,
    api: &dyn Api,
    env: &Env,
    caller: &Addr,
    recipient: Addr,
) -> ContractResult<MessageResponse> {
    ManagementAccess::new(&*storage).check(caller)?;

    let recipient = validate_addr(api, recipient)?;
    Config::update_fee_recipient(storage, recipient.clone())
        .map(|()| event::fee_recipient_changed(env, &recipient).into())
}

pub(crate) fn query_config(storage: &dyn Storage) -> ContractResult<ConfigResponse> {
    let management = ManagementAccess::new(storage).management()?;

    Config::load(storage).map(|config| ConfigResponse {
        management,
        performance_fee_recipient: config.performance_fee_recipient,
        registry: config.registry,
        strategy_code: CodeId::from(config.strategy_code),
    })
}

pub(crate) fn query_deployments(
    storage: &dyn Storage,
    start_after: Option<DeploymentKey>,
    limit: Option<u32>,
) -> ContractResult<DeploymentsResponse> {
    Deployments::page(
        storage,
        start_after
            .as_ref()
            .map(|key| (&key.asset, &key.collateral)),
        limit,
    )
    .map(|page| DeploymentsResponse {
        deployments: page
            .into_iter()
            .map(|(asset, collateral, strategy)| Deployment {
                asset,
                collateral,
                strategy,
            })
            .collect(),
    })
}

fn already_deployed(asset: &Addr, collateral: &Addr) -> ContractError {
    ContractError::AlreadyDeployed {
        asset: asset.to_string(),
        collateral: collateral.to_string(),
    }
}

fn incompatible_pool(asset: &Addr, collateral: &Addr) -> ContractError {
    ContractError::IncompatiblePool {
        asset: asset.to_string(),
        collateral: collateral.to_string(),
    }
}
