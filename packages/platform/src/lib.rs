pub mod batch;
pub mod contract;
mod emit;
pub mod error;
pub mod message;
pub mod reply;
pub mod response;
