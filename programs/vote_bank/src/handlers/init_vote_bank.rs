use anchor_lang::prelude::*;

use crate::{state::VoteBankInitialized, InitVoteBank};

/// Opens a new vote bank at a freshly allocated account.
///
/// The signer paying for the account becomes the creator, the only key that
/// can later close the bank. Both tallies start at zero.
pub fn init_vote_bank(ctx: Context<InitVoteBank>) -> Result<()> {
    let creator = ctx.accounts.creator.key();
    let vote_bank_key = ctx.accounts.vote_bank.key();

    ctx.accounts.vote_bank.initialize(creator);

    msg!("Vote bank {} opened by {}", vote_bank_key, creator);

    emit!(VoteBankInitialized {
        vote_bank: vote_bank_key,
        creator,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
