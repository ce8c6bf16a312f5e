use crate::{DataKey, NFTContractArgs, NFTContractClient, TokenError};
use soroban_sdk::{contractimpl, Address, Env};

#[contractimpl]
impl super::NFTContract {
    /// Issue a fresh token to `to`. Only the issuance authority may mint;
    /// ids start at 1 and are never reused.
    pub fn mint(env: Env, caller: Address, to: Address) -> Result<u32, TokenError> {
        caller.require_auth();

        let admin = Self::read_admin(&env)?;
        if caller != admin {
            return Err(TokenError::Unauthorized);
        }

        let token_id: u32 = env
            .storage()
            .instance()
            .get(&DataKey::Counter)
            .unwrap_or(0u32)
            + 1;
        env.storage().instance().set(&DataKey::Counter, &token_id);
        env.storage()
            .persistent()
            .set(&DataKey::Owner(token_id), &to);

        Ok(token_id)
    }
}
