use anchor_lang::prelude::*;

use super::{Outcome, VoteChoice};

#[event]
pub struct VoteBankInitialized {
    pub vote_bank: Pubkey,
    pub creator: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct VoteCast {
    pub vote_bank: Pubkey,
    pub voter: Pubkey,
    pub choice: VoteChoice,
    /// Tallies after this vote was applied
    pub gm_count: u64,
    pub gn_count: u64,
    pub timestamp: i64,
}

#[event]
pub struct VoteBankClosed {
    pub vote_bank: Pubkey,
    pub creator: Pubkey,
    pub gm_count: u64,
    pub gn_count: u64,
    pub timestamp: i64,
}

#[event]
pub struct RevealResultEvent {
    pub vote_bank: Pubkey,
    pub gm_count: u64,
    pub gn_count: u64,
    /// The leading choice, or `Tie` when both tallies are equal
    pub outcome: Outcome,
}
