// VRF coordinator integration: outbound requests and callback helpers
use anchor_lang::prelude::*;
use anchor_lang::error::ErrorCode;
use anchor_lang::solana_program::{
    hash::{hash, hashv},
    instruction::{AccountMeta, Instruction},
    program::invoke_signed,
};

/// Number of random words asked for on every request
pub const NUM_WORDS: u32 = 1;

/// Seed of the coordinator PDA that signs `fulfill_random_words`
pub const VRF_AUTHORITY_SEED: &[u8] = b"vrf-authority";

const REQUEST_RANDOM_WORDS_SIGHASH: &[u8] = b"global:request_random_words";

/// Payload sent to the coordinator's `request_random_words` instruction.
/// The coordinator echoes `request_id` back when it fulfills.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RandomnessRequest {
    pub request_id: [u8; 32],
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_compute_limit: u32,
    pub num_words: u32,
}

/// Derives the correlation id of a request from the consumer and its request nonce.
pub fn request_id(key_hash: &[u8; 32], consumer: &Pubkey, subscription_id: u64, nonce: u64) -> [u8; 32] {
    hashv(&[
        key_hash.as_ref(),
        consumer.as_ref(),
        &subscription_id.to_le_bytes()[..],
        &nonce.to_le_bytes()[..],
    ])
    .to_bytes()
}

/// The PDA a coordinator program signs callbacks with.
pub fn coordinator_authority(coordinator: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[VRF_AUTHORITY_SEED], coordinator).0
}

/// Reduces a 256-bit big-endian random word modulo `modulus`.
/// Returns `None` for a zero modulus.
pub fn word_mod(word: &[u8; 32], modulus: u64) -> Option<u64> {
    if modulus == 0 {
        return None;
    }

    let modulus = modulus as u128;
    let remainder = word
        .iter()
        .fold(0u128, |acc, byte| ((acc << 8) | *byte as u128) % modulus);

    Some(remainder as u64)
}

fn request_random_words_discriminator() -> [u8; 8] {
    let digest = hash(REQUEST_RANDOM_WORDS_SIGHASH).to_bytes();
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&digest[..8]);
    discriminator
}

/// Builds the coordinator instruction. The consumer signs; any extra accounts the
/// coordinator needs (subscription, fee escrow...) are forwarded untouched.
pub fn request_random_words_ix(
    coordinator: &Pubkey,
    consumer: &Pubkey,
    request: &RandomnessRequest,
    forwarded: &[AccountInfo],
) -> Result<Instruction> {
    let mut data = request_random_words_discriminator().to_vec();
    request
        .serialize(&mut data)
        .map_err(|_| ErrorCode::InstructionDidNotSerialize)?;

    let mut accounts = vec![AccountMeta::new_readonly(*consumer, true)];
    accounts.extend(forwarded.iter().map(|acc| AccountMeta {
        pubkey: *acc.key,
        is_signer: acc.is_signer,
        is_writable: acc.is_writable,
    }));

    Ok(Instruction {
        program_id: *coordinator,
        accounts,
        data,
    })
}

/// Sends the request to the coordinator, signing as the raffle PDA.
pub fn request_random_words<'info>(
    coordinator_program: &AccountInfo<'info>,
    consumer: &AccountInfo<'info>,
    forwarded: &[AccountInfo<'info>],
    request: &RandomnessRequest,
    signer_seeds: &[&[u8]],
) -> Result<()> {
    let ix = request_random_words_ix(coordinator_program.key, consumer.key, request, forwarded)?;

    let mut infos = Vec::with_capacity(forwarded.len() + 2);
    infos.push(consumer.clone());
    infos.extend_from_slice(forwarded);
    infos.push(coordinator_program.clone());

    invoke_signed(&ix, &infos, &[signer_seeds])?;

    msg!("Randomness requested from coordinator {}", coordinator_program.key);
    Ok(())
}
