use sdk::cosmwasm_std::Addr;

pub(crate) mod lending;
pub(crate) mod test_case;

pub(crate) const MANAGEMENT: &str = "management";
pub(crate) const FEE_RECIPIENT: &str = "treasury";
pub(crate) const STRATEGY_MANAGEMENT: &str = "governance";
pub(crate) const USER: &str = "user";

pub(crate) const ASSET: &str = "usdc";
pub(crate) const OTHER_ASSET: &str = "dai";
pub(crate) const COLLATERAL: &str = "weth";
pub(crate) const INCENTIVES: &str = "incentives";

pub(crate) fn addr(name: &str) -> Addr {
    sdk::testing::user(name)
}

pub(crate) fn share_token_of(asset: &str) -> Addr {
    addr(&format!("{asset}_share"))
}
