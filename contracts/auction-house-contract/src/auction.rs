use crate::bid::record_bid;
use crate::distribution;
use crate::errors::{AuctionError, RegistryError};
use crate::event::{
    AuctionCreated, AuctionSettled, BidPlaced, RefundWithdrawn, BID, CREATE, REFUND, SETTLE,
};
use crate::traits::{AssetClient, AuctionHouseTrait};
use crate::types::{Auction, AuctionState, CreationEntry};
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

#[contract]
pub struct AuctionHouseContract;

/// Enum representing keys used to store contract data in Soroban storage.
/// Contract-wide config and the creation counter sit in instance storage;
/// per-auction records, registry rows and refund balances are persistent.
#[contracttype]
#[derive(Clone)]
enum DataKey {
    PayToken,              // Payment token every escrow custodies bids in
    TotalAuctions,         // Number of escrows created so far
    Auction(u32),          // Escrow record by auction id
    Refund(Address, u32),  // Withdrawable balance per bidder and auction
    Entry(u32),            // Append-only creation log, 1-based
}

#[contractimpl]
impl AuctionHouseTrait for AuctionHouseContract {
    fn initialize(env: Env, pay_token: Address) -> Result<(), RegistryError> {
        if env.storage().instance().has(&DataKey::PayToken) {
            return Err(RegistryError::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::PayToken, &pay_token);
        env.storage().instance().set(&DataKey::TotalAuctions, &0u32);
        Ok(())
    }

    fn create_auction(
        env: Env,
        seller: Address,
        nft_contract: Address,
        token_id: u32,
        duration: u64,
    ) -> Result<u32, RegistryError> {
        if duration == 0 {
            return Err(RegistryError::InvalidDuration);
        }
        let deadline = env
            .ledger()
            .timestamp()
            .checked_add(duration)
            .ok_or(RegistryError::InvalidDuration)?;

        Self::open_auction(&env, seller, nft_contract, token_id, deadline)
    }

    fn create_auction_at(
        env: Env,
        seller: Address,
        nft_contract: Address,
        token_id: u32,
        deadline: u64,
    ) -> Result<u32, RegistryError> {
        if deadline <= env.ledger().timestamp() {
            return Err(RegistryError::InvalidDuration);
        }

        Self::open_auction(&env, seller, nft_contract, token_id, deadline)
    }

    fn bid(env: Env, auction_id: u32, bidder: Address, amount: i128) -> Result<(), AuctionError> {
        bidder.require_auth();

        let pay_token = Self::read_pay_token(&env)?;
        let mut auction = Self::read_auction(&env, auction_id)?;
        let now = env.ledger().timestamp();

        let refund = record_bid(&env, &mut auction, &pay_token, bidder.clone(), amount, now)?;
        if let Some((prev_bidder, prev_amount)) = refund {
            Self::credit_refund(&env, &prev_bidder, auction_id, prev_amount);
        }

        Self::save_auction(&env, auction_id, &auction);

        env.events().publish(
            (BID, bidder.clone()),
            BidPlaced {
                auction_id,
                bidder,
                amount,
            },
        );

        Ok(())
    }

    fn withdraw(env: Env, auction_id: u32, caller: Address) -> Result<(), AuctionError> {
        caller.require_auth();

        let pay_token = Self::read_pay_token(&env)?;
        Self::read_auction(&env, auction_id)?;

        let key = DataKey::Refund(caller.clone(), auction_id);
        let owed: i128 = env.storage().persistent().get(&key).unwrap_or(0);
        if owed <= 0 {
            return Err(AuctionError::NothingToWithdraw);
        }

        // Zero the ledger entry before releasing funds; a failed payout
        // returns an error and the discarded footprint restores the entry.
        env.storage().persistent().remove(&key);
        distribution::payout(&env, &pay_token, &caller, &owed)?;

        env.events().publish(
            (REFUND, caller.clone()),
            RefundWithdrawn {
                auction_id,
                bidder: caller,
                amount: owed,
            },
        );

        Ok(())
    }

    fn end_auction(env: Env, auction_id: u32) -> Result<(), AuctionError> {
        let pay_token = Self::read_pay_token(&env)?;
        let mut auction = Self::read_auction(&env, auction_id)?;
        let now = env.ledger().timestamp();

        auction.check_can_end(now)?;

        // Flip the flag before any external move; an error from either move
        // unwinds the flip together with the rest of this invocation.
        auction.state = AuctionState::Ended;
        Self::save_auction(&env, auction_id, &auction);

        if let Some(winner) = auction.highest_bidder.clone() {
            let asset = AssetClient::new(&env, &auction.nft_contract);
            match asset.try_transfer(&env.current_contract_address(), &auction.token_id, &winner) {
                Ok(Ok(())) => (),
                _ => return Err(AuctionError::TransferFailed),
            }

            distribution::payout(&env, &pay_token, &auction.seller, &auction.highest_bid)?;
        }

        let final_price = auction.highest_bidder.as_ref().map(|_| auction.highest_bid);

        env.events().publish(
            (SETTLE, auction.seller.clone()),
            AuctionSettled {
                auction_id,
                winner: auction.highest_bidder,
                final_price,
                timestamp: now,
            },
        );

        Ok(())
    }

    fn get_auction(env: Env, auction_id: u32) -> Option<Auction> {
        env.storage().persistent().get(&DataKey::Auction(auction_id))
    }

    fn get_refund(env: Env, auction_id: u32, bidder: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::Refund(bidder, auction_id))
            .unwrap_or(0)
    }

    fn get_entry(env: Env, index: u32) -> Option<CreationEntry> {
        env.storage().persistent().get(&DataKey::Entry(index))
    }

    fn total_auctions(env: Env) -> u32 {
        Self::read_total(&env)
    }

    fn pay_token(env: Env) -> Result<Address, AuctionError> {
        Self::read_pay_token(&env)
    }
}

impl AuctionHouseContract {
    /// Shared tail of both creation entrypoints: verify the seller's claim
    /// to the asset, instantiate the escrow record and append it to the
    /// registry log. Custody authorization over the asset stays a separate,
    /// later step performed by the seller against the NFT contract.
    fn open_auction(
        env: &Env,
        seller: Address,
        nft_contract: Address,
        token_id: u32,
        deadline: u64,
    ) -> Result<u32, RegistryError> {
        seller.require_auth();

        if !env.storage().instance().has(&DataKey::PayToken) {
            return Err(RegistryError::NotInitialized);
        }

        let asset = AssetClient::new(env, &nft_contract);
        let owner = match asset.try_owner_of(&token_id) {
            Ok(Ok(owner)) => owner,
            _ => return Err(RegistryError::AssetNotFound),
        };
        if owner != seller {
            return Err(RegistryError::Unauthorized);
        }

        let auction_id = Self::read_total(env) + 1;
        let auction = Auction {
            id: auction_id,
            nft_contract,
            token_id,
            seller: seller.clone(),
            deadline,
            highest_bid: 0,
            highest_bidder: None,
            state: AuctionState::Open,
        };

        Self::save_auction(env, auction_id, &auction);
        env.storage().persistent().set(
            &DataKey::Entry(auction_id),
            &CreationEntry {
                auction_id,
                token_id,
                seller: seller.clone(),
            },
        );
        env.storage()
            .instance()
            .set(&DataKey::TotalAuctions, &auction_id);

        env.events().publish(
            (CREATE, seller.clone()),
            AuctionCreated {
                auction_id,
                token_id,
                seller,
                deadline,
            },
        );

        Ok(auction_id)
    }

    fn read_pay_token(env: &Env) -> Result<Address, AuctionError> {
        env.storage()
            .instance()
            .get(&DataKey::PayToken)
            .ok_or(AuctionError::NotInitialized)
    }

    fn read_auction(env: &Env, auction_id: u32) -> Result<Auction, AuctionError> {
        env.storage()
            .persistent()
            .get(&DataKey::Auction(auction_id))
            .ok_or(AuctionError::AuctionNotFound)
    }

    fn save_auction(env: &Env, auction_id: u32, auction: &Auction) {
        env.storage()
            .persistent()
            .set(&DataKey::Auction(auction_id), auction);
    }

    fn read_total(env: &Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::TotalAuctions)
            .unwrap_or(0)
    }

    /// Accumulate into the bidder's withdrawable balance. A bidder outbid
    /// more than once on the same auction keeps the sum of every superseded
    /// contribution.
    fn credit_refund(env: &Env, bidder: &Address, auction_id: u32, amount: i128) {
        let key = DataKey::Refund(bidder.clone(), auction_id);
        let owed: i128 = env.storage().persistent().get(&key).unwrap_or(0);
        env.storage().persistent().set(&key, &(owed + amount));
    }
}
