use anchor_lang::prelude::*;
use anchor_lang::AccountsExit;

use crate::{
    error::RaffleError,
    state::{Raffle, RAFFLE_SEED},
    vrf,
};

/// Event emitted when a settlement round starts
#[event]
pub struct SettlementRequested {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// Correlation id the coordinator will answer with
    pub request_id: [u8; 32],
}

/// Starts a settlement round by asking the coordinator for a random word.
///
/// Anyone may call this; it only succeeds when `check_upkeep` would report
/// `upkeep_needed`. The raffle is persisted in Calculating state before the
/// coordinator CPI, so the coordinator never sees an Open raffle with a
/// request in flight. Remaining accounts are forwarded to the coordinator.
///
/// Returns the correlation id the coordinator will answer with.
pub fn perform_upkeep<'info>(
    ctx: Context<'_, '_, '_, 'info, PerformUpkeep<'info>>,
) -> Result<[u8; 32]> {
    let now = Clock::get()?.unix_timestamp;
    let raffle_key = ctx.accounts.raffle.key();

    let request = ctx.accounts.raffle.request_randomness(&raffle_key, now)?;
    ctx.accounts.raffle.exit(&crate::ID)?;

    let authority = ctx.accounts.raffle.authority;
    let bump = [ctx.accounts.raffle.bump];
    let signer_seeds: &[&[u8]] = &[RAFFLE_SEED, authority.as_ref(), &bump];

    vrf::request_random_words(
        &ctx.accounts.vrf_coordinator.to_account_info(),
        &ctx.accounts.raffle.to_account_info(),
        ctx.remaining_accounts,
        &request,
        signer_seeds,
    )?;

    emit!(SettlementRequested {
        raffle: raffle_key,
        request_id: request.request_id,
    });

    Ok(request.request_id)
}

/// Accounts required for the perform_upkeep instruction.
/// Anything the coordinator needs beyond these is passed as remaining accounts
#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    /// The raffle to settle.
    /// Moves to Calculating, persisted before the coordinator is called
    #[account(
        mut,
        seeds = [
            RAFFLE_SEED,
            raffle.authority.as_ref(),
        ],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// VRF coordinator program
    /// CHECK: must be the coordinator program recorded at initialization.
    #[account(
        address = raffle.config.vrf_coordinator @ RaffleError::InvalidCoordinator,
        executable,
    )]
    pub vrf_coordinator: UncheckedAccount<'info>,
}
