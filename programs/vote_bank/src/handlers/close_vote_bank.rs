use anchor_lang::prelude::*;

use crate::{state::VoteBankClosed, CloseVoteBank};

/// Permanently stops voting on the bank. Creator only.
pub fn close_vote_bank(ctx: Context<CloseVoteBank>) -> Result<()> {
    let creator = ctx.accounts.creator.key();
    let vote_bank_key = ctx.accounts.vote_bank.key();
    let vote_bank = &mut ctx.accounts.vote_bank;

    if vote_bank.close_voting(&creator)? {
        msg!(
            "Vote bank {} closed with GM {} / GN {}",
            vote_bank_key,
            vote_bank.gm_count,
            vote_bank.gn_count
        );
    } else {
        msg!("Vote bank {} was already closed", vote_bank_key);
    }

    emit!(VoteBankClosed {
        vote_bank: vote_bank_key,
        creator,
        gm_count: vote_bank.gm_count,
        gn_count: vote_bank.gn_count,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
