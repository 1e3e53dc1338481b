use platform::batch::{Emit, Emitter};
use sdk::cosmwasm_std::{Addr, Env};

use crate::state::deployments::PendingDeployment;

pub(crate) fn strategy_deployed(env: &Env, deployment: PendingDeployment, strategy: &Addr) -> Emitter {
    Emitter::of_type("strategy-deployed")
        .emit_tx_info(env)
        .emit("management", deployment.management)
        .emit("strategy", strategy)
        .emit("pool", deployment.pool)
        .emit("share-token", deployment.share_token)
        .emit("asset", deployment.asset)
        .emit("collateral", deployment.collateral)
        .emit("incentives", deployment.incentives)
        .emit("name", deployment.name)
}

pub(crate) fn management_changed(env: &Env, management: &Addr) -> Emitter {
    Emitter::of_type("management-changed")
        .emit_tx_info(env)
        .emit("management", management)
}

pub(crate) fn fee_recipient_changed(env: &Env, recipient: &Addr) -> Emitter {
    Emitter::of_type("fee-recipient-changed")
        .emit_tx_info(env)
        .emit("recipient", recipient)
}
