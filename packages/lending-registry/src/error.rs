use thiserror::Error;

use sdk::cosmwasm_std::StdError;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("[Lending Registry] [Std] {0}")]
    Std(#[from] StdError),

    #[error("[Lending Registry] {0}")]
    Platform(#[from] platform::error::Error),

    #[error("[Lending Registry] The contract {0} is not a lending registry")]
    NotARegistry(String),
}

pub type Result<T> = core::result::Result<T, Error>;
