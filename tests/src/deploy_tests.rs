use sdk::cosmwasm_std::{from_json, Addr, Event};
use strategy::api::{
    ConfigResponse as StrategyConfigResponse, ManagementResponse,
    QueryMsg as StrategyQueryMsg,
};
use strategy_factory::{
    msg::{DeployResponse, Deployment, DeploymentsResponse, QueryMsg},
    ContractError,
};

use crate::common::{
    addr, share_token_of, test_case::TestCase, ASSET, COLLATERAL, FEE_RECIPIENT, INCENTIVES,
    OTHER_ASSET, STRATEGY_MANAGEMENT, USER,
};

const DEPLOYED_EVENT: &str = "wasm-strategy-deployed";

fn attr<'e>(event: &'e Event, key: &str) -> &'e str {
    event
        .attributes
        .iter()
        .find(|attr| attr.key == key)
        .map(|attr| attr.value.as_str())
        .unwrap_or_else(|| panic!("no attribute '{key}' in {event:?}"))
}

#[test]
fn deploy() {
    let mut test_case = TestCase::new();
    assert!(!test_case.is_deployed(ASSET, COLLATERAL));

    let resp = test_case.deploy(ASSET, COLLATERAL).unwrap();
    let strategy = from_json::<DeployResponse>(resp.data.clone().unwrap())
        .unwrap()
        .strategy;

    assert!(test_case.is_deployed(ASSET, COLLATERAL));
    assert_eq!(
        Some(strategy.clone()),
        test_case.query_factory::<Option<Addr>>(&QueryMsg::Deployment {
            asset: addr(ASSET),
            collateral: addr(COLLATERAL),
        })
    );

    let deployed: Vec<&Event> = resp
        .events
        .iter()
        .filter(|event| event.ty == DEPLOYED_EVENT)
        .collect();
    assert_eq!(1, deployed.len());
    let deployed = deployed[0];
    assert_eq!(strategy.as_str(), attr(deployed, "strategy"));
    assert_eq!(STRATEGY_MANAGEMENT, attr(deployed, "management"));
    assert_eq!(test_case.pool.as_str(), attr(deployed, "pool"));
    assert_eq!(share_token_of(ASSET).as_str(), attr(deployed, "share-token"));
    assert_eq!(ASSET, attr(deployed, "asset"));
    assert_eq!(COLLATERAL, attr(deployed, "collateral"));
    assert_eq!(INCENTIVES, attr(deployed, "incentives"));
    // the strategy is fully set up before the deployment gets published
    assert_eq!(Some(deployed), resp.events.last());

    let config: StrategyConfigResponse =
        test_case.query(&strategy, &StrategyQueryMsg::Config {});
    assert_eq!(
        StrategyConfigResponse {
            registry: test_case.registry.clone(),
            pool: test_case.pool.clone(),
            share_token: share_token_of(ASSET),
            asset: addr(ASSET),
            incentives: addr(INCENTIVES),
            name: format!("Silo {ASSET}/{COLLATERAL}"),
        },
        config
    );

    assert_eq!(
        ManagementResponse {
            management: test_case.factory.clone(),
            pending_management: Some(addr(STRATEGY_MANAGEMENT)),
            performance_fee_recipient: addr(FEE_RECIPIENT),
        },
        test_case.query(&strategy, &StrategyQueryMsg::Management {})
    );
}

#[test]
fn deploy_swapped_pair() {
    let mut test_case = TestCase::new();
    test_case.deploy_strategy(ASSET, COLLATERAL);

    let err = test_case.deploy(COLLATERAL, ASSET).unwrap_err();
    assert_eq!(
        Some(&ContractError::IncompatiblePool {
            asset: COLLATERAL.into(),
            collateral: ASSET.into(),
        }),
        err.downcast_ref::<ContractError>()
    );

    assert!(test_case.is_deployed(ASSET, COLLATERAL));
    assert!(!test_case.is_deployed(COLLATERAL, ASSET));
}

#[test]
fn deploy_unknown_collateral() {
    let mut test_case = TestCase::new();

    let err = test_case.deploy(ASSET, OTHER_ASSET).unwrap_err();
    assert_eq!(
        Some(&ContractError::IncompatiblePool {
            asset: ASSET.into(),
            collateral: OTHER_ASSET.into(),
        }),
        err.downcast_ref::<ContractError>()
    );
    assert!(!test_case.is_deployed(ASSET, OTHER_ASSET));
}

#[test]
fn deploy_twice() {
    let mut test_case = TestCase::new();
    let strategy = test_case.deploy_strategy(ASSET, COLLATERAL);

    let err = test_case.deploy(ASSET, COLLATERAL).unwrap_err();
    assert_eq!(
        Some(&ContractError::AlreadyDeployed {
            asset: ASSET.into(),
            collateral: COLLATERAL.into(),
        }),
        err.downcast_ref::<ContractError>()
    );
    assert_eq!(
        Some(strategy),
        test_case.query_factory::<Option<Addr>>(&QueryMsg::Deployment {
            asset: addr(ASSET),
            collateral: addr(COLLATERAL),
        })
    );
}

#[test]
fn deploy_unauthorized() {
    let mut test_case = TestCase::new();

    let err = test_case.deploy_by(USER, ASSET, COLLATERAL).unwrap_err();
    assert_eq!(
        Some(&ContractError::Unauthorized(
            access_control::error::Error::Unauthorized {}
        )),
        err.downcast_ref::<ContractError>()
    );
    assert!(!test_case.is_deployed(ASSET, COLLATERAL));
}

#[test]
fn failed_instantiation_reverts() {
    let mut test_case = TestCase::with_failing_strategy();

    assert!(test_case.deploy(ASSET, COLLATERAL).is_err());
    assert!(!test_case.is_deployed(ASSET, COLLATERAL));

    // nothing has been left pending
    let err = test_case.deploy(ASSET, COLLATERAL).unwrap_err();
    assert_ne!(
        Some(&ContractError::DeploymentInProgress()),
        err.downcast_ref::<ContractError>()
    );
    assert!(!test_case.is_deployed(ASSET, COLLATERAL));
}

#[test]
fn deployments() {
    let mut test_case = TestCase::new();
    let first = test_case.deploy_strategy(ASSET, COLLATERAL);
    let second = test_case.deploy_strategy(OTHER_ASSET, COLLATERAL);
    assert_ne!(first, second);

    let listed: DeploymentsResponse = test_case.query_factory(&QueryMsg::Deployments {
        start_after: None,
        limit: None,
    });
    assert_eq!(
        vec![
            Deployment {
                asset: addr(OTHER_ASSET),
                collateral: addr(COLLATERAL),
                strategy: second,
            },
            Deployment {
                asset: addr(ASSET),
                collateral: addr(COLLATERAL),
                strategy: first,
            },
        ],
        listed.deployments
    );
}
