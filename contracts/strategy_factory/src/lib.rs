pub use self::{
    contract::{execute, instantiate, query, reply},
    error::ContractError,
};

mod contract;
pub mod error;
mod event;
mod factory;
pub mod msg;
pub mod result;
mod state;
