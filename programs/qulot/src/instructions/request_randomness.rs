use anchor_lang::prelude::*;
use anchor_lang::Discriminator;
use ephemeral_vrf_sdk::instructions::{create_request_randomness_ix, RequestRandomnessParams};
use ephemeral_vrf_sdk::types::SerializableAccountMeta;

use crate::{
    constants::*,
    errors::ErrorCode,
    events::RandomnessRequested,
    state::{Config, Lottery, Round, RoundRandomness},
};

/// Convert an anchor Pubkey to the SDK's Pubkey (same 32 bytes, different crate).
fn to_sdk_pubkey(p: &Pubkey) -> ephemeral_vrf_sdk::Pubkey {
    ephemeral_vrf_sdk::Pubkey::new_from_array(p.to_bytes())
}

const VRF_PROGRAM_ID_BYTES: [u8; 32] = ephemeral_vrf_sdk::consts::VRF_PROGRAM_ID.to_bytes();
const DEFAULT_QUEUE_BYTES: [u8; 32] = ephemeral_vrf_sdk::consts::DEFAULT_QUEUE.to_bytes();

pub static VRF_PROGRAM_ID: Pubkey = Pubkey::new_from_array(VRF_PROGRAM_ID_BYTES);
pub static DEFAULT_QUEUE: Pubkey = Pubkey::new_from_array(DEFAULT_QUEUE_BYTES);

#[derive(Accounts)]
#[instruction(lottery_id: String)]
pub struct RequestRandomness<'info> {
    #[account(mut)]
    pub caller: Signer<'info>,

    #[account(
        seeds = [SEED_CFG],
        bump = config.bump,
        constraint = config.is_trigger_or_operator(&caller.key()) @ ErrorCode::OnlyTriggerOrOperator,
    )]
    pub config: Account<'info, Config>,

    #[account(
        seeds = [SEED_LOTTERY, lottery.id.as_bytes()],
        bump = lottery.bump,
        constraint = lottery.id == lottery_id @ ErrorCode::InvalidLotteryId,
    )]
    pub lottery: Account<'info, Lottery>,

    #[account(
        seeds = [SEED_ROUND, &lottery.current_round_id.to_le_bytes()],
        bump,
    )]
    pub round: Option<Account<'info, Round>>,

    #[account(
        init_if_needed,
        payer = caller,
        space = RoundRandomness::SPACE,
        seeds = [SEED_RANDOM, &lottery.current_round_id.to_le_bytes()],
        bump
    )]
    pub round_randomness: Account<'info, RoundRandomness>,

    /// CHECK: Our program's identity PDA, used to sign the VRF CPI.
    #[account(seeds = [SEED_IDENTITY], bump)]
    pub program_identity: AccountInfo<'info>,

    /// CHECK: Oracle queue account
    #[account(mut, address = DEFAULT_QUEUE)]
    pub oracle_queue: AccountInfo<'info>,

    /// CHECK: MagicBlock VRF program
    #[account(address = VRF_PROGRAM_ID)]
    pub vrf_program: AccountInfo<'info>,

    /// CHECK: SlotHashes sysvar
    #[account(address = anchor_lang::solana_program::sysvar::slot_hashes::ID)]
    pub slot_hashes: AccountInfo<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<RequestRandomness>, _lottery_id: String) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let round = ctx.accounts.round.as_ref().ok_or(ErrorCode::NotTimeToDraw)?;
    let round_id = round.id;

    let randomness = &mut ctx.accounts.round_randomness;
    randomness.begin_request(round, now)?;
    randomness.bump = ctx.bumps.round_randomness;

    let lottery_key = ctx.accounts.lottery.key();
    let randomness_key = ctx.accounts.round_randomness.key();

    // The round id makes the caller seed unique per request
    let mut caller_seed = [0u8; 32];
    caller_seed[..8].copy_from_slice(&round_id.to_le_bytes());

    let sdk_ix = create_request_randomness_ix(RequestRandomnessParams {
        payer: to_sdk_pubkey(&ctx.accounts.caller.key()),
        oracle_queue: to_sdk_pubkey(&ctx.accounts.oracle_queue.key()),
        callback_program_id: to_sdk_pubkey(&crate::ID),
        callback_discriminator: crate::instruction::ConsumeRandomness::DISCRIMINATOR.to_vec(),
        caller_seed,
        accounts_metas: Some(vec![
            SerializableAccountMeta {
                pubkey: to_sdk_pubkey(&lottery_key),
                is_signer: false,
                is_writable: false,
            },
            SerializableAccountMeta {
                pubkey: to_sdk_pubkey(&randomness_key),
                is_signer: false,
                is_writable: true,
            },
        ]),
        ..Default::default()
    });

    // Convert the SDK instruction to anchor's solana_program types.
    let ix = {
        let program_id = Pubkey::new_from_array(sdk_ix.program_id.to_bytes());
        let accounts: Vec<anchor_lang::solana_program::instruction::AccountMeta> = sdk_ix
            .accounts
            .iter()
            .map(|a| {
                let pubkey = Pubkey::new_from_array(a.pubkey.to_bytes());
                if a.is_writable {
                    anchor_lang::solana_program::instruction::AccountMeta::new(pubkey, a.is_signer)
                } else {
                    anchor_lang::solana_program::instruction::AccountMeta::new_readonly(
                        pubkey, a.is_signer,
                    )
                }
            })
            .collect();
        anchor_lang::solana_program::instruction::Instruction {
            program_id,
            accounts,
            data: sdk_ix.data,
        }
    };

    let identity_bump = ctx.bumps.program_identity;

    anchor_lang::solana_program::program::invoke_signed(
        &ix,
        &[
            ctx.accounts.caller.to_account_info(),
            ctx.accounts.program_identity.to_account_info(),
            ctx.accounts.oracle_queue.to_account_info(),
            ctx.accounts.slot_hashes.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
        ],
        &[&[SEED_IDENTITY, &[identity_bump]]],
    )?;

    msg!("randomness requested for round {}", round_id);

    emit!(RandomnessRequested {
        lottery_id: ctx.accounts.lottery.id.clone(),
        round_id,
    });

    Ok(())
}
