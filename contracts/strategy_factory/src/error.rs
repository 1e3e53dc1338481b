use thiserror::Error;

use platform::batch::ReplyId;
use sdk::cosmwasm_std::StdError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("[Strategy Factory] [Std] {0}")]
    Std(#[from] StdError),

    #[error("[Strategy Factory] {0}")]
    Platform(#[from] platform::error::Error),

    #[error("[Strategy Factory] {0}")]
    Registry(#[from] lending_registry::error::Error),

    #[error("[Strategy Factory] {0}")]
    Unauthorized(#[from] access_control::error::Error),

    #[error("[Strategy Factory] Invalid lending registry, cause: {0}")]
    InvalidRegistry(String),

    #[error("[Strategy Factory] Invalid address '{address}', cause: {cause}")]
    InvalidAddress { address: String, cause: String },

    #[error("[Strategy Factory] The strategy name may not be empty")]
    EmptyName(),

    #[error("[Strategy Factory] A strategy of '{asset}' against '{collateral}' is already deployed")]
    AlreadyDeployed { asset: String, collateral: String },

    #[error("[Strategy Factory] No lending pool supports '{asset}' against '{collateral}'")]
    IncompatiblePool { asset: String, collateral: String },

    #[error("[Strategy Factory] Another strategy deployment is in progress")]
    DeploymentInProgress(),

    #[error("[Strategy Factory] No strategy deployment is in progress")]
    NoPendingDeployment(),

    #[error("[Strategy Factory] Unexpected reply id {0}")]
    UnexpectedReply(ReplyId),

    #[error("[Strategy Factory] ParseError {err:?}")]
    ParseError { err: String },
}
