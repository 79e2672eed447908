use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Voting is currently closed")]
    VotingClosed,
    #[msg("Only the vote bank creator can perform this action")]
    Unauthorized,
    #[msg("Vote tally overflowed")]
    TallyOverflow,
    #[msg("Results can only be revealed once voting is closed")]
    VotingStillOpen,
}
