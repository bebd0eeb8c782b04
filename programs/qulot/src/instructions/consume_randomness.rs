use anchor_lang::prelude::*;
use crate::{
    constants::*,
    errors::ErrorCode,
    events::RandomnessFulfilled,
    state::{Lottery, RoundRandomness},
};

/// MagicBlock VRF program identity PDA. Only the VRF program can sign as this address.
const VRF_PROGRAM_IDENTITY_BYTES: [u8; 32] =
    ephemeral_vrf_sdk::consts::VRF_PROGRAM_IDENTITY.to_bytes();
pub static VRF_PROGRAM_IDENTITY: Pubkey = Pubkey::new_from_array(VRF_PROGRAM_IDENTITY_BYTES);

#[derive(Accounts)]
pub struct ConsumeRandomness<'info> {
    #[account(address = VRF_PROGRAM_IDENTITY)]
    pub vrf_program_identity: Signer<'info>,

    #[account(
        seeds = [SEED_LOTTERY, lottery.id.as_bytes()],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    /// Round id is not among the callback args, so the PDA is checked in the handler.
    #[account(mut)]
    pub round_randomness: Account<'info, RoundRandomness>,
}

pub fn handler(ctx: Context<ConsumeRandomness>, randomness: [u8; 32]) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let lottery = &ctx.accounts.lottery;
    let randomness_key = ctx.accounts.round_randomness.key();
    let result = &mut ctx.accounts.round_randomness;

    let expected_key = Pubkey::create_program_address(
        &[SEED_RANDOM, &result.round_id.to_le_bytes(), &[result.bump]],
        &crate::ID,
    )
    .map_err(|_| ErrorCode::InvalidRandomness)?;
    require_keys_eq!(randomness_key, expected_key, ErrorCode::InvalidRandomness);
    require_keys_eq!(result.lottery, lottery.key(), ErrorCode::InvalidRandomness);

    let numbers = result.fulfil(randomness, lottery, now)?.to_vec();

    msg!("round {} lucky numbers {:?}", result.round_id, numbers);

    emit!(RandomnessFulfilled {
        round_id: result.round_id,
        numbers,
    });

    Ok(())
}
