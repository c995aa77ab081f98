use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::{
    error::RaffleError,
    state::{Raffle, Vault, RAFFLE_SEED, VAULT_SEED},
};

/// Event emitted when an entry is recorded
#[event]
pub struct EntrySubmitted {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// The entering player
    pub player: Pubkey,
    /// Amount paid in lamports
    pub amount: u64,
    /// Number of entries after this one
    pub players: u64,
}

/// Instruction to enter the current round
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `amount` - Lamports to contribute, at least the entrance fee
///
/// # Security Considerations
/// 1. Contribution and Open state are both checked before the ledger changes
/// 2. The ledger and pot are updated before the lamports move
/// 3. The vault balance is verified to have grown by exactly `amount`
pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
    let player = ctx.accounts.player.key();
    ctx.accounts.raffle.admit_entry(player, amount)?;

    let vault = ctx.accounts.vault.to_account_info();
    let pre_transfer_balance = vault.lamports();

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: vault.clone(),
            },
        ),
        amount,
    )?;

    let post_transfer_balance = vault.lamports();
    require!(
        post_transfer_balance
            == pre_transfer_balance
                .checked_add(amount)
                .ok_or(RaffleError::Overflow)?,
        RaffleError::TransferFailed
    );

    emit!(EntrySubmitted {
        raffle: ctx.accounts.raffle.key(),
        player,
        amount,
        players: ctx.accounts.raffle.number_of_players(),
    });

    Ok(())
}

/// Accounts required for the enter_raffle instruction
#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    /// The raffle being entered.
    /// Must be Open, checked by the handler
    #[account(
        mut,
        seeds = [
            RAFFLE_SEED,
            raffle.authority.as_ref(),
        ],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Vault receiving the contribution.
    /// PDA with seeds ["vault", raffle_key], bound to this raffle
    #[account(
        mut,
        seeds = [
            VAULT_SEED,
            raffle.key().as_ref(),
        ],
        bump = vault.bump,
        has_one = raffle @ RaffleError::InvalidVault,
    )]
    pub vault: Account<'info, Vault>,

    /// The entering player, pays the contribution
    #[account(mut)]
    pub player: Signer<'info>,

    /// System program for the lamport transfer
    pub system_program: Program<'info, System>,
}
