use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{Raffle, Vault, RAFFLE_SEED, VAULT_SEED},
};

/// Event emitted when a round is settled
#[event]
pub struct WinnerSelected {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// The winner's address
    pub winner: Pubkey,
    /// Lamports paid out
    pub prize: u64,
    /// Request the randomness answered
    pub request_id: [u8; 32],
}

/// Coordinator callback delivering the random words for a pending request.
///
/// Execution requirements:
/// 1. Signed by the coordinator's authority PDA
/// 2. `request_id` is the raffle's single outstanding request
/// 3. The winner's account is among the remaining accounts, writable,
///    not executable and rent exempt once paid
///
/// After execution:
/// - The winner is recorded, the ledger is cleared and the clock restarted
/// - The raffle is Open again
/// - The whole pot has moved from the vault to the winner
///
/// # Errors
/// - `OnlyCoordinatorCanFulfill` if the signer is not the coordinator authority
/// - `UnknownRequest` if no request with this id is pending
/// - `NoRandomWords` if `random_words` is empty
/// - `TransferFailed` if the winner cannot receive the pot; nothing is settled
pub fn fulfill_random_words<'info>(
    ctx: Context<'_, '_, '_, 'info, FulfillRandomWords<'info>>,
    request_id: [u8; 32],
    random_words: Vec<[u8; 32]>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let rent = Rent::get()?;
    let raffle_key = ctx.accounts.raffle.key();
    let vault = ctx.accounts.vault.to_account_info();
    let recipients = ctx.remaining_accounts;

    let settlement = ctx
        .accounts
        .raffle
        .settle(request_id, &random_words, now, |_, winner, prize| {
            pay_winner(&vault, recipients, winner, prize, &rent)
        })?;

    msg!(
        "Winner {} drawn at index {}, paid {} lamports",
        settlement.winner,
        settlement.winner_index,
        settlement.prize
    );

    emit!(WinnerSelected {
        raffle: raffle_key,
        winner: settlement.winner,
        prize: settlement.prize,
        request_id: settlement.request_id,
    });

    Ok(())
}

/// Moves `prize` lamports from the vault to the winner's account.
///
/// Fails with `TransferFailed` when the winner's account was not supplied
/// or could not hold the funds (read-only, executable, or left below rent
/// exemption), so the runtime would reject the credit anyway.
pub fn pay_winner(
    vault: &AccountInfo,
    recipients: &[AccountInfo],
    winner: &Pubkey,
    prize: u64,
    rent: &Rent,
) -> Result<()> {
    let recipient = recipients
        .iter()
        .find(|info| info.key == winner)
        .ok_or(RaffleError::TransferFailed)?;
    require!(
        recipient.is_writable && !recipient.executable,
        RaffleError::TransferFailed
    );

    let balance_after = recipient
        .lamports()
        .checked_add(prize)
        .ok_or(RaffleError::Overflow)?;
    require!(
        rent.is_exempt(balance_after, recipient.data_len()),
        RaffleError::TransferFailed
    );

    // The vault is a PDA owned by this program, so lamports move directly
    vault.sub_lamports(prize)?;
    recipient.add_lamports(prize)?;

    Ok(())
}

/// Accounts required for the fulfill_random_words instruction.
/// The winner's account travels in the remaining accounts
#[derive(Accounts)]
pub struct FulfillRandomWords<'info> {
    /// The raffle being settled
    #[account(
        mut,
        seeds = [
            RAFFLE_SEED,
            raffle.authority.as_ref(),
        ],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Vault paying out the pot
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

    /// Coordinator PDA ["vrf-authority"] under the configured coordinator program
    #[account(
        constraint = coordinator_authority.key() == raffle.coordinator_authority()
            @ RaffleError::OnlyCoordinatorCanFulfill,
    )]
    pub coordinator_authority: Signer<'info>,
}
