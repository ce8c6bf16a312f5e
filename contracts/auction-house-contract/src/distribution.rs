use crate::errors::AuctionError;
use soroban_sdk::{token, Address, Env};

// Funds accompanying a bid: bidder -> contract.
pub fn collect(env: &Env, token: &Address, from: &Address, amount: &i128) {
    token::Client::new(env, token).transfer(from, &env.current_contract_address(), amount);
}

// Fallible payout: contract -> recipient. Callers return the error so the
// host discards every storage write of the failed invocation.
pub fn payout(env: &Env, token: &Address, to: &Address, amount: &i128) -> Result<(), AuctionError> {
    match token::Client::new(env, token).try_transfer(&env.current_contract_address(), to, amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(AuctionError::TransferFailed),
    }
}
