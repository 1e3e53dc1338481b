use thiserror::Error;

use sdk::cosmwasm_std::StdError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("[Strategy] [Std] {0}")]
    Std(#[from] StdError),

    #[error("[Strategy] {0}")]
    Registry(#[from] lending_registry::error::Error),

    #[error("[Strategy] {0}")]
    Unauthorized(#[from] access_control::error::Error),

    #[error("[Strategy] Invalid address '{address}', cause: {cause}")]
    InvalidAddress { address: String, cause: String },

    #[error("[Strategy] The strategy name may not be empty")]
    EmptyName(),

    #[error("[Strategy] The strategy may not collect its own performance fees")]
    SelfFeeRecipient(),
}

pub type ContractResult<T> = Result<T, ContractError>;
