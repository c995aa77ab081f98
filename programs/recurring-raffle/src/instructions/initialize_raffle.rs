use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{
        Raffle, RaffleConfig, Vault, RAFFLE_ACCOUNT_SIZE, RAFFLE_SEED, VAULT_ACCOUNT_SIZE,
        VAULT_SEED,
    },
};

/// Creation parameters supplied by the deployer. The coordinator program id
/// is taken from the `vrf_coordinator` account.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RaffleConfigParams {
    pub entrance_fee: u64,
    pub interval: u64,
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_compute_limit: u32,
}

/// Event emitted when a raffle is created
#[event]
pub struct RaffleInitialized {
    /// The pubkey of the created raffle
    pub raffle: Pubkey,
    /// Minimum contribution per entry in lamports
    pub entrance_fee: u64,
    /// Seconds between settlements
    pub interval: u64,
    /// Coordinator program answering randomness requests
    pub vrf_coordinator: Pubkey,
    /// When the first round opened
    pub opened_at: i64,
}

/// Instruction to create a raffle and its vault
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `params` - Entrance fee, interval and coordinator request parameters
///
/// # Security Considerations
/// 1. Entrance fee must be greater than 0, otherwise the pot could never fund an upkeep
/// 2. The coordinator must be an executable program
/// 3. Raffle and vault are PDAs, one raffle per authority
///
/// # Implementation Notes
/// - Initializes the raffle in Open state with an empty ledger
/// - The first round's clock starts at the current timestamp
/// - The configuration is never updated afterwards
pub fn initialize_raffle(ctx: Context<InitializeRaffle>, params: RaffleConfigParams) -> Result<()> {
    require!(params.entrance_fee > 0, RaffleError::InvalidEntranceFee);

    let now = Clock::get()?.unix_timestamp;
    let config = RaffleConfig {
        entrance_fee: params.entrance_fee,
        interval: params.interval,
        vrf_coordinator: ctx.accounts.vrf_coordinator.key(),
        key_hash: params.key_hash,
        subscription_id: params.subscription_id,
        request_confirmations: params.request_confirmations,
        callback_compute_limit: params.callback_compute_limit,
    };

    ctx.accounts.raffle.set_inner(Raffle::new(
        ctx.accounts.authority.key(),
        config,
        ctx.bumps.raffle,
        now,
    ));
    ctx.accounts.vault.raffle = ctx.accounts.raffle.key();
    ctx.accounts.vault.bump = ctx.bumps.vault;

    emit!(RaffleInitialized {
        raffle: ctx.accounts.raffle.key(),
        entrance_fee: config.entrance_fee,
        interval: config.interval,
        vrf_coordinator: config.vrf_coordinator,
        opened_at: now,
    });

    Ok(())
}

/// Accounts required for the initialize_raffle instruction
#[derive(Accounts)]
pub struct InitializeRaffle<'info> {
    /// The raffle being created, PDA ["raffle", authority]
    #[account(
        init,
        payer = authority,
        space = RAFFLE_ACCOUNT_SIZE,
        seeds = [
            RAFFLE_SEED,
            authority.key().as_ref(),
        ],
        bump
    )]
    pub raffle: Account<'info, Raffle>,

    /// Vault PDA holding the pot, seeds ["vault", raffle_key]
    #[account(
        init,
        payer = authority,
        space = VAULT_ACCOUNT_SIZE,
        seeds = [
            VAULT_SEED,
            raffle.key().as_ref(),
        ],
        bump,
    )]
    pub vault: Account<'info, Vault>,

    /// Deployer, pays for both accounts
    #[account(mut)]
    pub authority: Signer<'info>,

    /// CHECK: only the key is recorded; it must be an executable program.
    #[account(constraint = vrf_coordinator.executable @ RaffleError::InvalidCoordinator)]
    pub vrf_coordinator: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
