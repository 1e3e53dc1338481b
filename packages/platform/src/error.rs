use std::fmt::Debug;

use prost::DecodeError;
use thiserror::Error;

use sdk::cosmwasm_std::{Api, StdError};

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("[Platform] [Std] An error occured while querying code info: {0}")]
    CosmWasmQueryCodeInfo(StdError),

    #[error("[Platform] [Std] An error occured while querying contract info: {0}")]
    CosmWasmQueryContractInfo(StdError),

    #[error("[Platform] [Std] The address {0} is invalid: {1}")]
    CosmWasmAddressInvalid(String, StdError),

    #[error("[Platform] [Std] An error occured on data serialization: {0}")]
    Serialization(StdError),

    #[error("[Platform] [ProtobufDecode] {0}")]
    ProtobufDecode(#[from] DecodeError),

    #[error("[Platform] Error returned in reply! Cause: {0}")]
    ReplyResultError(String),

    #[error("[Platform] Reply is empty!")]
    EmptyReply(),
}

pub type Result<T> = core::result::Result<T, Error>;

pub fn log<Err>(api: &dyn Api) -> impl FnOnce(&Err) + '_
where
    Err: Debug,
{
    |err| api.debug(&format!("{:?}", err))
}
