use std::vec;

use serde::Serialize;

use sdk::{
    cosmwasm_ext::SubMsg,
    cosmwasm_std::{to_json_binary, Addr, WasmMsg},
};

pub use crate::emit::{Emit, Emitter};
use crate::{
    contract::Code,
    error::{Error, Result},
};

pub type ReplyId = u64;

#[must_use]
#[derive(Default)]
#[cfg_attr(
    any(debug_assertions, test, feature = "testing"),
    derive(Debug, PartialEq, Eq)
)]
pub struct Batch {
    msgs: Vec<SubMsg>,
}

impl Batch {
    pub fn schedule_execute_wasm_no_reply_no_funds<M>(self, addr: Addr, msg: &M) -> Result<Self>
    where
        M: Serialize + ?Sized,
    {
        Self::wasm_exec_msg_no_funds(addr, msg)
            .map(|wasm_msg| self.schedule_msg(SubMsg::new(wasm_msg)))
    }

    pub fn schedule_execute_wasm_reply_on_success_no_funds<M>(
        self,
        addr: Addr,
        msg: &M,
        reply_id: ReplyId,
    ) -> Result<Self>
    where
        M: Serialize + ?Sized,
    {
        Self::wasm_exec_msg_no_funds(addr, msg)
            .map(|wasm_msg| self.schedule_msg(SubMsg::reply_on_success(wasm_msg, reply_id)))
    }

    /// Schedule a new instance of `code` without funds
    ///
    /// `admin` is the address allowed to migrate the instance. `None` makes
    /// the code of the instance immutable.
    pub fn schedule_instantiate_wasm_reply_on_success<M>(
        self,
        code: Code,
        msg: &M,
        label: String,
        admin: Option<Addr>,
        reply_id: ReplyId,
    ) -> Result<Self>
    where
        M: Serialize + ?Sized,
    {
        Self::wasm_init_msg(code, msg, label, admin)
            .map(|wasm_msg| self.schedule_msg(SubMsg::reply_on_success(wasm_msg, reply_id)))
    }

    fn wasm_exec_msg_no_funds<M>(addr: Addr, msg: &M) -> Result<WasmMsg>
    where
        M: Serialize + ?Sized,
    {
        to_json_binary(msg)
            .map_err(Error::Serialization)
            .map(|raw_msg| WasmMsg::Execute {
                contract_addr: addr.into_string(),
                funds: vec![],
                msg: raw_msg,
            })
    }

    fn wasm_init_msg<M>(code: Code, msg: &M, label: String, admin: Option<Addr>) -> Result<WasmMsg>
    where
        M: Serialize + ?Sized,
    {
        to_json_binary(msg)
            .map_err(Error::Serialization)
            .map(|msg| WasmMsg::Instantiate {
                admin: admin.map(Addr::into_string),
                code_id: code.into(),
                funds: vec![],
                label,
                msg,
            })
    }

    #[inline]
    fn schedule_msg(mut self, msg: SubMsg) -> Self {
        self.msgs.push(msg);
        self
    }
}

impl IntoIterator for Batch {
    type Item = SubMsg;

    type IntoIter = vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.msgs.into_iter()
    }
}
