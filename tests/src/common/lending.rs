use serde::{Deserialize, Serialize};

use lending_registry::msg::{
    AssetStorageResponse, LiquidityResponse, PoolQueryMsg, PoolResponse, RegistryQueryMsg,
};
use sdk::{
    cosmwasm_std::{
        to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response,
        StdError, StdResult, Uint128,
    },
    cw_storage_plus::Item,
    testing::{App, ContractWrapper, Executor},
};

use super::{addr, share_token_of, USER};

/// A lending registry that knows a fixed set of `(collateral, pool)` pairs
#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct RegistryState {
    pub pools: Vec<(Addr, Addr)>,
    /// Whether to answer the registry identity probe positively
    pub identifies: bool,
}

/// A lending pool issuing share tokens for a fixed set of assets
#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct PoolState {
    pub assets: Vec<Addr>,
    pub liquidity: Uint128,
}

const REGISTRY_STATE: Item<'static, RegistryState> = Item::new("registry");
const POOL_STATE: Item<'static, PoolState> = Item::new("pool");

pub(crate) struct RegistryInstantiator;

impl RegistryInstantiator {
    #[track_caller]
    pub fn instantiate(app: &mut App, pools: &[(&str, &Addr)], identifies: bool) -> Addr {
        let code_id = app.store_code(Box::new(ContractWrapper::new(
            no_execute,
            instantiate_registry,
            query_registry,
        )));
        let state = RegistryState {
            pools: pools
                .iter()
                .map(|&(collateral, pool)| (addr(collateral), pool.clone()))
                .collect(),
            identifies,
        };

        app.instantiate_contract(code_id, addr(USER), &state, &[], "registry", None)
            .unwrap()
    }
}

pub(crate) struct PoolInstantiator;

impl PoolInstantiator {
    pub const LIQUIDITY: Uint128 = Uint128::new(250_000);

    #[track_caller]
    pub fn instantiate(app: &mut App, assets: &[&str]) -> Addr {
        let code_id = app.store_code(Box::new(ContractWrapper::new(
            no_execute,
            instantiate_pool,
            query_pool,
        )));
        let state = PoolState {
            assets: assets.iter().copied().map(addr).collect(),
            liquidity: Self::LIQUIDITY,
        };

        app.instantiate_contract(code_id, addr(USER), &state, &[], "pool", None)
            .unwrap()
    }
}

fn no_execute(
    _deps: DepsMut<'_>,
    _env: Env,
    _info: MessageInfo,
    _msg: Empty,
) -> StdResult<Response> {
    Err(StdError::generic_err("read-only contract"))
}

fn instantiate_registry(
    deps: DepsMut<'_>,
    _env: Env,
    _info: MessageInfo,
    state: RegistryState,
) -> StdResult<Response> {
    REGISTRY_STATE
        .save(deps.storage, &state)
        .map(|()| Response::default())
}

fn query_registry(deps: Deps<'_>, _env: Env, msg: RegistryQueryMsg) -> StdResult<Binary> {
    let state = REGISTRY_STATE.load(deps.storage)?;
    match msg {
        RegistryQueryMsg::IsLendingRegistry {} => to_json_binary(&state.identifies),
        RegistryQueryMsg::PoolOf { collateral } => to_json_binary(&PoolResponse {
            pool: state
                .pools
                .into_iter()
                .find_map(|(known, pool)| (known == collateral).then_some(pool)),
        }),
    }
}

fn instantiate_pool(
    deps: DepsMut<'_>,
    _env: Env,
    _info: MessageInfo,
    state: PoolState,
) -> StdResult<Response> {
    POOL_STATE.save(deps.storage, &state).map(|()| Response::default())
}

fn query_pool(deps: Deps<'_>, _env: Env, msg: PoolQueryMsg) -> StdResult<Binary> {
    let state = POOL_STATE.load(deps.storage)?;
    match msg {
        PoolQueryMsg::AssetStorage { asset } => to_json_binary(&AssetStorageResponse {
            share_token: state
                .assets
                .contains(&asset)
                .then(|| share_token_of(asset.as_str())),
            debt_token: None,
        }),
        PoolQueryMsg::Liquidity { asset } => {
            if state.assets.contains(&asset) {
                to_json_binary(&LiquidityResponse {
                    amount: state.liquidity,
                })
            } else {
                Err(StdError::generic_err(format!("unsupported asset {asset}")))
            }
        }
    }
}
