use crate::distribution;
use crate::errors::AuctionError;
use crate::types::Auction;
use soroban_sdk::{Address, Env};

/// Admit `amount` from `new_bidder` against `auction` and custody the funds.
///
/// Returns the ledger credit owed to the superseded leader, if any: their
/// full prior contribution becomes withdrawable the moment the leading
/// fields are overwritten, which keeps refunds + highest bid equal to the
/// contract's custodied balance at all times.
pub fn record_bid(
    env: &Env,
    auction: &mut Auction,
    pay_token: &Address,
    new_bidder: Address,
    amount: i128,
    now: u64,
) -> Result<Option<(Address, i128)>, AuctionError> {
    auction.check_can_bid(now, amount)?;

    // Custody the new bid before touching the leading fields.
    distribution::collect(env, pay_token, &new_bidder, &amount);

    let refund = auction
        .highest_bidder
        .clone()
        .map(|prev| (prev, auction.highest_bid));

    auction.highest_bidder = Some(new_bidder);
    auction.highest_bid = amount;

    Ok(refund)
}
