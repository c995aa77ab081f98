use anchor_lang::prelude::*;

// 8 entrance_fee + 8 interval + 32 vrf_coordinator + 32 key_hash + 8 subscription_id
// + 2 request_confirmations + 4 callback_compute_limit
pub const RAFFLE_CONFIG_SIZE: usize = 8 + 8 + 32 + 32 + 8 + 2 + 4;

/// Creation parameters of a raffle. Written once by `initialize_raffle`,
/// never updated afterwards.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RaffleConfig {
    /// Minimum contribution per entry, in lamports
    pub entrance_fee: u64,
    /// Minimum number of seconds between two settlements
    pub interval: u64,
    /// Program id of the VRF coordinator
    pub vrf_coordinator: Pubkey,
    /// Coordinator key identifying the randomness lane to use
    pub key_hash: [u8; 32],
    /// Coordinator subscription paying for requests
    pub subscription_id: u64,
    /// Confirmations the coordinator waits for before answering
    pub request_confirmations: u16,
    /// Compute units the coordinator budgets for the callback
    pub callback_compute_limit: u32,
}
