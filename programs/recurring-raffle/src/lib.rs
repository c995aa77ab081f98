use anchor_lang::prelude::*;
use instructions::*;
use state::UpkeepStatus;

pub mod error;
pub mod instructions;
pub mod state;
pub mod vrf;

declare_id!("B2reoB7F3jvnK1JiRUvSzR4Zh2WT5KVbejKF1mYKaMdm");

#[program]
pub mod recurring_raffle {
    use super::*;

    pub fn initialize_raffle(ctx: Context<InitializeRaffle>, params: RaffleConfigParams) -> Result<()> {
        instructions::initialize_raffle::initialize_raffle(ctx, params)
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
        instructions::enter_raffle::enter_raffle(ctx, amount)
    }

    pub fn check_upkeep(ctx: Context<CheckUpkeep>) -> Result<UpkeepStatus> {
        instructions::check_upkeep::check_upkeep(ctx)
    }

    pub fn perform_upkeep<'info>(
        ctx: Context<'_, '_, '_, 'info, PerformUpkeep<'info>>,
    ) -> Result<[u8; 32]> {
        instructions::perform_upkeep::perform_upkeep(ctx)
    }

    pub fn fulfill_random_words<'info>(
        ctx: Context<'_, '_, '_, 'info, FulfillRandomWords<'info>>,
        request_id: [u8; 32],
        random_words: Vec<[u8; 32]>,
    ) -> Result<()> {
        instructions::fulfill_random_words::fulfill_random_words(ctx, request_id, random_words)
    }

    pub fn get_player(ctx: Context<GetPlayer>, index: u64) -> Result<Pubkey> {
        instructions::get_player::get_player(ctx, index)
    }
}
