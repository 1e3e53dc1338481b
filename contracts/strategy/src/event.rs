use platform::batch::{Emit, Emitter};
use sdk::cosmwasm_std::{Addr, Env};

pub(crate) fn fee_recipient_changed(env: &Env, recipient: &Addr) -> Emitter {
    Emitter::of_type("strategy-fee-recipient")
        .emit_tx_info(env)
        .emit("recipient", recipient)
}

pub(crate) fn management_proposed(env: &Env, candidate: &Addr) -> Emitter {
    Emitter::of_type("strategy-management-proposed")
        .emit_tx_info(env)
        .emit("pending-management", candidate)
}

pub(crate) fn management_accepted(env: &Env, management: &Addr) -> Emitter {
    Emitter::of_type("strategy-management-accepted")
        .emit_tx_info(env)
        .emit("management", management)
}
