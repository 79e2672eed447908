// Stops Rust Analyzer complaining about missing configs
// See https://solana.stackexchange.com/questions/17777
#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod handlers;
pub mod state;

use constants::*;
pub use error::ErrorCode;
pub use state::{Outcome, VoteBank, VoteBankStatus, VoteChoice};

declare_id!("GDJSwaStkPtK5JoRsBDh8J61y9sxPYKci4orqK8CmeVb");

#[program]
pub mod vote_bank {
    use super::*;

    pub fn init_vote_bank(ctx: Context<InitVoteBank>) -> Result<()> {
        handlers::init_vote_bank::init_vote_bank(ctx)
    }

    pub fn give_vote(ctx: Context<GiveVote>, choice: VoteChoice) -> Result<()> {
        handlers::give_vote::give_vote(ctx, choice)
    }

    pub fn close_vote_bank(ctx: Context<CloseVoteBank>) -> Result<()> {
        handlers::close_vote_bank::close_vote_bank(ctx)
    }

    pub fn reveal_result(ctx: Context<RevealResult>) -> Result<()> {
        handlers::reveal_result::reveal_result(ctx)
    }
}

#[derive(Accounts)]
pub struct InitVoteBank<'info> {
    /// Fresh keypair account; `init` rejects an address that is already in use.
    #[account(
        init,
        payer = creator,
        space = ANCHOR_DISCRIMINATOR + VoteBank::INIT_SPACE,
    )]
    pub vote_bank: Account<'info, VoteBank>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct GiveVote<'info> {
    #[account(mut)]
    pub vote_bank: Account<'info, VoteBank>,

    pub voter: Signer<'info>,
}

#[derive(Accounts)]
pub struct CloseVoteBank<'info> {
    #[account(mut)]
    pub vote_bank: Account<'info, VoteBank>,

    /// Checked against `vote_bank.creator` by the handler
    pub creator: Signer<'info>,
}

#[derive(Accounts)]
pub struct RevealResult<'info> {
    pub vote_bank: Account<'info, VoteBank>,
}
