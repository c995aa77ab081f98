use anchor_lang::prelude::*;

use crate::state::{Raffle, RAFFLE_SEED};

/// Returns the player recorded at `index` in the current round's ledger.
pub fn get_player(ctx: Context<GetPlayer>, index: u64) -> Result<Pubkey> {
    ctx.accounts.raffle.player(index)
}

/// Accounts required for the get_player instruction
#[derive(Accounts)]
pub struct GetPlayer<'info> {
    /// The raffle to read, PDA ["raffle", authority]
    #[account(
        seeds = [
            RAFFLE_SEED,
            raffle.authority.as_ref(),
        ],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,
}
