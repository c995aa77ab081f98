use anchor_lang::prelude::*;

use crate::state::{Raffle, UpkeepStatus, RAFFLE_SEED};

/// Read-only trigger check for automation. Returns whether `perform_upkeep`
/// would currently succeed, together with the values it was decided on.
pub fn check_upkeep(ctx: Context<CheckUpkeep>) -> Result<UpkeepStatus> {
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx.accounts.raffle.check_upkeep(now))
}

/// Accounts required for the check_upkeep instruction
#[derive(Accounts)]
pub struct CheckUpkeep<'info> {
    /// The raffle to evaluate, PDA ["raffle", authority]
    #[account(
        seeds = [
            RAFFLE_SEED,
            raffle.authority.as_ref(),
        ],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,
}
