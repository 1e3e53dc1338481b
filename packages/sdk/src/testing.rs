use cosmwasm_std::{
    testing::{MockApi, MockQuerier, MockStorage},
    Addr, Binary, ContractResult, OwnedDeps, QuerierResult, SystemError, SystemResult, WasmQuery,
};
pub use cw_multi_test::{App, ContractWrapper, Executor};

pub type MockDeps = OwnedDeps<MockStorage, MockApi, MockQuerier>;

const CONTRACT_INFO: &[u8] =
    br#"{"code_id":1,"creator":"creator","admin":null,"pinned":false,"ibc_port":null}"#;

/// An address of a user, i.e. not a smart contract.
///
/// Keep the names lowercase so that they pass `MockApi::addr_validate`.
pub fn user(addr: &str) -> Addr {
    Addr::unchecked(addr)
}

pub fn new_app() -> App {
    App::default()
}

/// Answer the `ContractInfo` queries for `contracts` and report any other
/// contract as missing.
pub fn contract_info_handler(contracts: &[&str], query: &WasmQuery) -> QuerierResult {
    match query {
        WasmQuery::ContractInfo { contract_addr } if contracts.contains(&contract_addr.as_str()) => {
            SystemResult::Ok(ContractResult::Ok(Binary::from(CONTRACT_INFO)))
        }
        WasmQuery::Smart { contract_addr, .. }
        | WasmQuery::Raw { contract_addr, .. }
        | WasmQuery::ContractInfo { contract_addr } => {
            SystemResult::Err(SystemError::NoSuchContract {
                addr: contract_addr.clone(),
            })
        }
        _ => SystemResult::Err(SystemError::UnsupportedRequest {
            kind: "wasm".into(),
        }),
    }
}
