use anchor_lang::prelude::*;

use crate::{state::RevealResultEvent, RevealResult};

/// Publishes the final tallies and the winning choice of a closed bank.
///
/// Anyone may call this; it never writes to the account.
pub fn reveal_result(ctx: Context<RevealResult>) -> Result<()> {
    let vote_bank = &ctx.accounts.vote_bank;
    let outcome = vote_bank.final_outcome()?;

    msg!("Revealing result for vote bank {}: {}", vote_bank.key(), outcome);

    emit!(RevealResultEvent {
        vote_bank: vote_bank.key(),
        gm_count: vote_bank.gm_count,
        gn_count: vote_bank.gn_count,
        outcome,
    });

    Ok(())
}
