use crate::errors::AuctionError;
use crate::types::{Auction, AuctionState};

impl Auction {
    pub fn is_ended(&self) -> bool {
        self.state == AuctionState::Ended
    }

    /// A bid is admitted while the auction is open, strictly before the
    /// deadline, and only if it strictly outbids the current leader. The
    /// leading amount starts at zero, so the first bid just has to be
    /// positive.
    pub fn check_can_bid(&self, now: u64, amount: i128) -> Result<(), AuctionError> {
        if self.is_ended() {
            return Err(AuctionError::AuctionClosed);
        }
        if now >= self.deadline {
            return Err(AuctionError::DeadlinePassed);
        }
        if amount <= self.highest_bid {
            return Err(AuctionError::BidTooLow);
        }
        Ok(())
    }

    /// Settlement is open to anyone once the deadline is reached, exactly
    /// once.
    pub fn check_can_end(&self, now: u64) -> Result<(), AuctionError> {
        if self.is_ended() {
            return Err(AuctionError::AuctionClosed);
        }
        if now < self.deadline {
            return Err(AuctionError::TooEarly);
        }
        Ok(())
    }
}
