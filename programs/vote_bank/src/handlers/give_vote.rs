use anchor_lang::prelude::*;

use crate::{
    state::{VoteCast, VoteChoice},
    GiveVote,
};

/// Casts one vote for `choice`.
///
/// Fails with `VotingClosed` once the creator has closed the bank. Voters are
/// not tracked, so the same signer may vote again.
pub fn give_vote(ctx: Context<GiveVote>, choice: VoteChoice) -> Result<()> {
    let voter = ctx.accounts.voter.key();
    let vote_bank_key = ctx.accounts.vote_bank.key();
    let vote_bank = &mut ctx.accounts.vote_bank;

    vote_bank.give_vote(choice)?;

    msg!("Signer voted {}: {}", choice, voter);

    emit!(VoteCast {
        vote_bank: vote_bank_key,
        voter,
        choice,
        gm_count: vote_bank.gm_count,
        gn_count: vote_bank.gn_count,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
