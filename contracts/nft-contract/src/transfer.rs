use crate::{DataKey, NFTContractArgs, NFTContractClient, TokenError};
use soroban_sdk::{contractimpl, Address, Env};

#[contractimpl]
impl super::NFTContract {
    /// Grant `operator` the right to move this one token. The grant covers a
    /// single token id and is cleared by the next transfer.
    pub fn approve(
        env: Env,
        owner: Address,
        token_id: u32,
        operator: Address,
    ) -> Result<(), TokenError> {
        owner.require_auth();

        let current: Address = env
            .storage()
            .persistent()
            .get(&DataKey::Owner(token_id))
            .ok_or(TokenError::TokenNotFound)?;
        if current != owner {
            return Err(TokenError::Unauthorized);
        }

        env.storage()
            .persistent()
            .set(&DataKey::Approved(token_id), &operator);
        Ok(())
    }

    /// Move a token to `to`. The spender must be the current owner or the
    /// approved operator for this id; any outstanding approval is consumed.
    pub fn transfer(
        env: Env,
        spender: Address,
        token_id: u32,
        to: Address,
    ) -> Result<(), TokenError> {
        spender.require_auth();

        let owner: Address = env
            .storage()
            .persistent()
            .get(&DataKey::Owner(token_id))
            .ok_or(TokenError::TokenNotFound)?;

        let approved: Option<Address> =
            env.storage().persistent().get(&DataKey::Approved(token_id));
        if spender != owner && approved.as_ref() != Some(&spender) {
            return Err(TokenError::Unauthorized);
        }

        env.storage()
            .persistent()
            .remove(&DataKey::Approved(token_id));
        env.storage().persistent().set(&DataKey::Owner(token_id), &to);
        Ok(())
    }
}
