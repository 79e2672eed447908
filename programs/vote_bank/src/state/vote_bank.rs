use std::fmt;

use anchor_lang::prelude::*;

use crate::error::ErrorCode;

/// One of the two mutually exclusive ballot options.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteChoice {
    Gm,
    Gn,
}

impl fmt::Display for VoteChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteChoice::Gm => write!(f, "GM"),
            VoteChoice::Gn => write!(f, "GN"),
        }
    }
}

/// Lifecycle of an initialized vote bank. A bank that has not been
/// initialized simply has no account, so there is no variant for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteBankStatus {
    Open,
    Closed,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Gm,
    Gn,
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Gm => write!(f, "GM"),
            Outcome::Gn => write!(f, "GN"),
            Outcome::Tie => write!(f, "tie"),
        }
    }
}

/// A single ballot: open/closed flag plus one tally per choice.
///
/// The methods here are the whole state machine. They check every
/// precondition before touching a field, so a returned error always leaves
/// the record exactly as it was.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct VoteBank {
    /// The only key allowed to close this bank
    pub creator: Pubkey,
    /// Once false, never true again
    pub is_open: bool,
    pub gm_count: u64,
    pub gn_count: u64,
}

impl VoteBank {
    pub fn initialize(&mut self, creator: Pubkey) {
        self.creator = creator;
        self.is_open = true;
        self.gm_count = 0;
        self.gn_count = 0;
    }

    pub fn status(&self) -> VoteBankStatus {
        if self.is_open {
            VoteBankStatus::Open
        } else {
            VoteBankStatus::Closed
        }
    }

    /// Adds one vote for `choice` and returns that choice's new tally.
    ///
    /// Any signer may vote, and may vote more than once.
    pub fn give_vote(&mut self, choice: VoteChoice) -> Result<u64> {
        require!(self.is_open, ErrorCode::VotingClosed);

        let tally = match choice {
            VoteChoice::Gm => &mut self.gm_count,
            VoteChoice::Gn => &mut self.gn_count,
        };
        *tally = tally.checked_add(1).ok_or(ErrorCode::TallyOverflow)?;

        Ok(*tally)
    }

    /// Stops voting for good. Closing an already closed bank is accepted and
    /// changes nothing; the return value says whether this call did the flip.
    pub fn close_voting(&mut self, caller: &Pubkey) -> Result<bool> {
        require_keys_eq!(*caller, self.creator, ErrorCode::Unauthorized);

        let was_open = self.is_open;
        self.is_open = false;

        Ok(was_open)
    }

    pub fn total_votes(&self) -> u128 {
        u128::from(self.gm_count) + u128::from(self.gn_count)
    }

    pub fn outcome(&self) -> Outcome {
        match self.gm_count.cmp(&self.gn_count) {
            std::cmp::Ordering::Greater => Outcome::Gm,
            std::cmp::Ordering::Less => Outcome::Gn,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }

    /// Final outcome, only available once the tallies are frozen.
    pub fn final_outcome(&self) -> Result<Outcome> {
        require!(!self.is_open, ErrorCode::VotingStillOpen);
        Ok(self.outcome())
    }
}
