#[cfg(feature = "cosmos_proto")]
pub use cosmos_sdk_proto;
#[cfg(feature = "schema")]
pub use cosmwasm_schema::{self, schemars};
pub use cosmwasm_std;
#[cfg(all(not(target_arch = "wasm32"), feature = "testing"))]
pub use cw_multi_test;
#[cfg(feature = "storage")]
pub use cw_storage_plus;

pub mod cosmwasm_ext;
#[cfg(all(not(target_arch = "wasm32"), feature = "testing"))]
pub mod testing;
