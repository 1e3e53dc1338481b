//! For Protobuf layouts refer to [this source](https://github.com/CosmWasm/wasmd/blob/main/proto/cosmwasm/wasm/v1/tx.proto).
//!
//! Here are defined wrappers for deserializing such structures.

use prost::Message;

use sdk::{
    cosmos_sdk_proto::cosmwasm::wasm::v1::MsgInstantiateContractResponse,
    cosmwasm_std::{Addr, Api, Reply},
};

use crate::error::{Error, Result};

pub fn from_instantiate_addr_only(api: &dyn Api, reply: Reply) -> Result<Addr> {
    decode::<MsgInstantiateContractResponse>(reply).and_then(
        |MsgInstantiateContractResponse { address, .. }| {
            api.addr_validate(&address)
                .map_err(|error| Error::CosmWasmAddressInvalid(address, error))
        },
    )
}

fn decode<M>(reply: Reply) -> Result<M>
where
    M: Message + Default,
{
    reply
        .result
        .into_result()
        .map_err(Error::ReplyResultError)
        .and_then(|response| response.data.ok_or(Error::EmptyReply()))
        .and_then(|data| M::decode(data.as_slice()).map_err(Into::into))
}

#[cfg(any(test, feature = "testing"))]
pub mod testing {
    use prost::Message;

    use sdk::{
        cosmos_sdk_proto::cosmwasm::wasm::v1::MsgInstantiateContractResponse,
        cosmwasm_std::{Binary, Reply, SubMsgResponse, SubMsgResult},
    };

    use crate::batch::ReplyId;

    /// A reply as delivered by the chain upon a successful instantiation
    pub fn instantiate_reply<A>(id: ReplyId, address: A) -> Reply
    where
        A: Into<String>,
    {
        let data = MsgInstantiateContractResponse {
            address: address.into(),
            data: vec![],
        }
        .encode_to_vec();

        Reply {
            id,
            result: SubMsgResult::Ok(SubMsgResponse {
                events: vec![],
                data: Some(Binary::from(data)),
            }),
        }
    }

    /// A reply of a successfully executed message with no data
    pub fn execute_reply(id: ReplyId) -> Reply {
        Reply {
            id,
            result: SubMsgResult::Ok(SubMsgResponse {
                events: vec![],
                data: None,
            }),
        }
    }
}
