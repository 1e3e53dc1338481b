use serde::{de::DeserializeOwned, Serialize};

use sdk::{
    cosmwasm_std::{from_json, Addr},
    cw_multi_test::AppResponse,
    testing::{self, App, Executor},
};
use strategy_factory::msg::{DeployResponse, ExecuteMsg, QueryMsg};

use super::{
    addr,
    factory::FactoryInstantiator,
    lending::{PoolInstantiator, RegistryInstantiator},
    strategy::StrategyCode,
    ASSET, COLLATERAL, INCENTIVES, MANAGEMENT, OTHER_ASSET, STRATEGY_MANAGEMENT,
};

/// A lending registry with a single pool supplying [`ASSET`] and
/// [`OTHER_ASSET`] against [`COLLATERAL`], and a factory over it
pub(crate) struct TestCase {
    pub app: App,
    pub registry: Addr,
    pub pool: Addr,
    pub factory: Addr,
}

impl TestCase {
    pub fn new() -> Self {
        Self::with_strategy_code(StrategyCode::store)
    }

    pub fn with_failing_strategy() -> Self {
        Self::with_strategy_code(StrategyCode::store_failing)
    }

    fn with_strategy_code<StoreF>(store_strategy: StoreF) -> Self
    where
        StoreF: FnOnce(&mut App) -> u64,
    {
        let mut app = testing::new_app();
        let pool = PoolInstantiator::instantiate(&mut app, &[ASSET, OTHER_ASSET]);
        let registry = RegistryInstantiator::instantiate(&mut app, &[(COLLATERAL, &pool)], true);
        let strategy_code = store_strategy(&mut app);
        let factory = FactoryInstantiator::instantiate(&mut app, &registry, strategy_code);

        Self {
            app,
            registry,
            pool,
            factory,
        }
    }

    pub fn deploy(&mut self, asset: &str, collateral: &str) -> anyhow::Result<AppResponse> {
        self.deploy_by(MANAGEMENT, asset, collateral)
    }

    pub fn deploy_by(
        &mut self,
        sender: &str,
        asset: &str,
        collateral: &str,
    ) -> anyhow::Result<AppResponse> {
        self.execute_factory(
            sender,
            &ExecuteMsg::Deploy {
                management: addr(STRATEGY_MANAGEMENT),
                collateral: addr(collateral),
                asset: addr(asset),
                incentives: addr(INCENTIVES),
                name: format!("Silo {asset}/{collateral}"),
            },
        )
    }

    /// Deploy and return the address of the new strategy
    #[track_caller]
    pub fn deploy_strategy(&mut self, asset: &str, collateral: &str) -> Addr {
        let resp = self.deploy(asset, collateral).unwrap();
        from_json::<DeployResponse>(resp.data.unwrap())
            .unwrap()
            .strategy
    }

    pub fn is_deployed(&self, asset: &str, collateral: &str) -> bool {
        self.query_factory(&QueryMsg::IsDeployedAsset {
            asset: addr(asset),
            collateral: addr(collateral),
        })
    }

    pub fn execute_factory(
        &mut self,
        sender: &str,
        msg: &ExecuteMsg,
    ) -> anyhow::Result<AppResponse> {
        self.app
            .execute_contract(addr(sender), self.factory.clone(), msg, &[])
    }

    pub fn execute_strategy(
        &mut self,
        sender: &str,
        strategy: &Addr,
        msg: &strategy::api::ExecuteMsg,
    ) -> anyhow::Result<AppResponse> {
        self.app
            .execute_contract(addr(sender), strategy.clone(), msg, &[])
    }

    #[track_caller]
    pub fn query_factory<Resp>(&self, msg: &QueryMsg) -> Resp
    where
        Resp: DeserializeOwned,
    {
        self.query(&self.factory, msg)
    }

    #[track_caller]
    pub fn query<Msg, Resp>(&self, contract: &Addr, msg: &Msg) -> Resp
    where
        Msg: Serialize,
        Resp: DeserializeOwned,
    {
        self.app.wrap().query_wasm_smart(contract, msg).unwrap()
    }
}
