use serde::{Deserialize, Serialize};

use sdk::{
    cosmwasm_std::{Addr, CodeInfoResponse, ContractInfoResponse, QuerierWrapper, WasmQuery},
    schemars::{self, JsonSchema},
};

use crate::error::{Error, Result};

pub type CodeId = u64;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(transparent)]
/// A valid Cosmwasm code that may be stored and transferred
/// Not indended to be used in external APIs since there is no way to integrate validation on deserialization!
/// Instead, use [CodeId] in APIs and [Code::try_new] to validate the input.
pub struct Code {
    id: CodeId,
}

impl Code {
    pub fn try_new(id: CodeId, querier: QuerierWrapper<'_>) -> Result<Self> {
        let raw = WasmQuery::CodeInfo { code_id: id }.into();
        querier
            .query(&raw)
            .map_err(Error::CosmWasmQueryCodeInfo)
            .map(|resp: CodeInfoResponse| Self { id: resp.code_id })
    }

    #[cfg(any(test, feature = "testing"))]
    pub const fn unchecked(id: CodeId) -> Self {
        Self { id }
    }
}

impl From<Code> for CodeId {
    fn from(value: Code) -> Self {
        value.id
    }
}

pub fn validate_addr(querier: QuerierWrapper<'_>, contract_address: &Addr) -> Result<()> {
    query_info(querier, contract_address).map(|_| ())
}

fn query_info(
    querier: QuerierWrapper<'_>,
    contract_address: &Addr,
) -> Result<ContractInfoResponse> {
    let raw = WasmQuery::ContractInfo {
        contract_addr: contract_address.into(),
    }
    .into();
    querier
        .query(&raw)
        .map_err(Error::CosmWasmQueryContractInfo)
}
