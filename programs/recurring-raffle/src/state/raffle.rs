use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::config::{RaffleConfig, RAFFLE_CONFIG_SIZE},
    vrf::{self, RandomnessRequest, NUM_WORDS},
};

pub const RAFFLE_SEED: &[u8] = b"raffle";

/// Upper bound on entries per round, fixed by the account size
pub const MAX_PLAYERS: usize = 200;

// Space calculation:
// 8 (discriminator) +
// 32 (authority) +
// RAFFLE_CONFIG_SIZE (config) +
// 1 (raffle_state) +
// 4 + 32 * MAX_PLAYERS (players) +
// 8 (pot) +
// 8 (last_timestamp) +
// 33 (recent_winner: Option<Pubkey>) +
// 33 (pending_request: Option<[u8; 32]>) +
// 8 (request_nonce) +
// 1 (bump)
pub const RAFFLE_ACCOUNT_SIZE: usize =
    8 + 32 + RAFFLE_CONFIG_SIZE + 1 + 4 + 32 * MAX_PLAYERS + 8 + 8 + 33 + 33 + 8 + 1;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RaffleState {
    Open = 0,
    Calculating = 1,
}

/// Snapshot returned by `check_upkeep`, also logged when upkeep is refused.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpkeepStatus {
    pub upkeep_needed: bool,
    pub balance: u64,
    pub players: u64,
    pub state: RaffleState,
}

/// Outcome of a successful settlement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub request_id: [u8; 32],
    pub winner: Pubkey,
    pub winner_index: u64,
    pub prize: u64,
}

/// True once at least `interval` seconds separate `last` from `now`.
/// A clock that went backwards never counts as elapsed.
pub fn interval_elapsed(now: i64, last: i64, interval: u64) -> bool {
    now.checked_sub(last)
        .and_then(|elapsed| u64::try_from(elapsed).ok())
        .map_or(false, |elapsed| elapsed >= interval)
}

#[account]
pub struct Raffle {
    pub authority: Pubkey,
    pub config: RaffleConfig,
    pub raffle_state: RaffleState,
    pub players: Vec<Pubkey>,
    /// Lamports collected since the last settlement
    pub pot: u64,
    pub last_timestamp: i64,
    pub recent_winner: Option<Pubkey>,
    /// Set exactly while `raffle_state` is `Calculating`
    pub pending_request: Option<[u8; 32]>,
    pub request_nonce: u64,
    pub bump: u8,
}

impl Raffle {
    pub fn new(authority: Pubkey, config: RaffleConfig, bump: u8, now: i64) -> Self {
        Self {
            authority,
            config,
            raffle_state: RaffleState::Open,
            players: Vec::new(),
            pot: 0,
            last_timestamp: now,
            recent_winner: None,
            pending_request: None,
            request_nonce: 0,
            bump,
        }
    }

    /// Records one entry for `player`. Both checks run before anything is
    /// mutated, so a rejected entry leaves the raffle untouched.
    pub fn admit_entry(&mut self, player: Pubkey, amount: u64) -> Result<()> {
        require!(
            amount >= self.config.entrance_fee,
            RaffleError::InsufficientContribution
        );
        require!(
            self.raffle_state == RaffleState::Open,
            RaffleError::NotOpen
        );
        require!(self.players.len() < MAX_PLAYERS, RaffleError::LedgerFull);

        let pot = self.pot.checked_add(amount).ok_or(RaffleError::Overflow)?;

        self.players.push(player);
        self.pot = pot;

        Ok(())
    }

    pub fn check_upkeep(&self, now: i64) -> UpkeepStatus {
        let time_passed = interval_elapsed(now, self.last_timestamp, self.config.interval);
        let is_open = self.raffle_state == RaffleState::Open;
        let has_balance = self.pot > 0;
        let has_players = !self.players.is_empty();

        UpkeepStatus {
            upkeep_needed: time_passed && is_open && has_balance && has_players,
            balance: self.pot,
            players: self.players.len() as u64,
            state: self.raffle_state,
        }
    }

    /// Moves the raffle to `Calculating` and returns the request to hand to
    /// the coordinator. `consumer` is the raffle's own address.
    pub fn request_randomness(&mut self, consumer: &Pubkey, now: i64) -> Result<RandomnessRequest> {
        let status = self.check_upkeep(now);
        if !status.upkeep_needed {
            msg!(
                "Upkeep not needed: balance={}, players={}, state={:?}",
                status.balance,
                status.players,
                status.state
            );
            return err!(RaffleError::UpkeepNotNeeded);
        }

        let request_id = vrf::request_id(
            &self.config.key_hash,
            consumer,
            self.config.subscription_id,
            self.request_nonce,
        );
        let next_nonce = self
            .request_nonce
            .checked_add(1)
            .ok_or(RaffleError::Overflow)?;

        self.request_nonce = next_nonce;
        self.raffle_state = RaffleState::Calculating;
        self.pending_request = Some(request_id);

        Ok(RandomnessRequest {
            request_id,
            key_hash: self.config.key_hash,
            subscription_id: self.config.subscription_id,
            request_confirmations: self.config.request_confirmations,
            callback_compute_limit: self.config.callback_compute_limit,
            num_words: NUM_WORDS,
        })
    }

    /// Picks the winner for the pending request and reopens the raffle.
    ///
    /// All bookkeeping (winner, ledger, clock, state) is committed before
    /// `payout` runs, so anything `payout` observes is the settled raffle.
    /// If `payout` fails every field is restored and the raffle stays in
    /// `Calculating` with its ledger intact.
    pub fn settle<F>(
        &mut self,
        request_id: [u8; 32],
        random_words: &[[u8; 32]],
        now: i64,
        payout: F,
    ) -> Result<Settlement>
    where
        F: FnOnce(&Raffle, &Pubkey, u64) -> Result<()>,
    {
        require!(
            self.raffle_state == RaffleState::Calculating
                && self.pending_request == Some(request_id),
            RaffleError::UnknownRequest
        );
        let word = random_words.first().ok_or(RaffleError::NoRandomWords)?;
        let winner_index =
            vrf::word_mod(word, self.players.len() as u64).ok_or(RaffleError::EmptyLedger)?;

        let snapshot = self.clone();

        let winner = self.players[winner_index as usize];
        let prize = self.pot;

        self.recent_winner = Some(winner);
        self.players.clear();
        self.pot = 0;
        self.last_timestamp = now;
        self.raffle_state = RaffleState::Open;
        self.pending_request = None;

        if let Err(err) = payout(&*self, &winner, prize) {
            *self = snapshot;
            return Err(err);
        }

        Ok(Settlement {
            request_id,
            winner,
            winner_index,
            prize,
        })
    }

    pub fn player(&self, index: u64) -> Result<Pubkey> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.players.get(index))
            .copied()
            .ok_or_else(|| error!(RaffleError::IndexOutOfRange))
    }

    pub fn number_of_players(&self) -> u64 {
        self.players.len() as u64
    }

    pub fn raffle_state(&self) -> RaffleState {
        self.raffle_state
    }

    /// Time the current round opened, i.e. the last settlement.
    pub fn last_timestamp(&self) -> i64 {
        self.last_timestamp
    }

    pub fn recent_winner(&self) -> Option<Pubkey> {
        self.recent_winner
    }

    pub fn entrance_fee(&self) -> u64 {
        self.config.entrance_fee
    }

    pub fn interval(&self) -> u64 {
        self.config.interval
    }

    pub fn request_confirmations(&self) -> u16 {
        self.config.request_confirmations
    }

    pub fn num_words(&self) -> u32 {
        NUM_WORDS
    }

    pub fn coordinator_authority(&self) -> Pubkey {
        vrf::coordinator_authority(&self.config.vrf_coordinator)
    }
}
