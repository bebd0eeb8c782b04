use anchor_lang::prelude::*;
use crate::{
    constants::*,
    errors::ErrorCode,
    events::RandomnessFulfilled,
    state::{Config, Round, RoundRandomness},
};

#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct MockSetRandomResult<'info> {
    /// Operator-only: stands in for the oracle on test clusters.
    #[account(mut)]
    pub operator: Signer<'info>,

    #[account(
        seeds = [SEED_CFG],
        bump = config.bump,
        constraint = config.is_operator(&operator.key()) @ ErrorCode::OnlyOperator,
    )]
    pub config: Account<'info, Config>,

    #[account(
        seeds = [SEED_ROUND, &round_id.to_le_bytes()],
        bump = round.bump,
    )]
    pub round: Account<'info, Round>,

    #[account(
        init_if_needed,
        payer = operator,
        space = RoundRandomness::SPACE,
        seeds = [SEED_RANDOM, &round_id.to_le_bytes()],
        bump
    )]
    pub round_randomness: Account<'info, RoundRandomness>,

    pub system_program: Program<'info, System>,
}

/// Numbers are stored unvalidated so malformed oracle output can be exercised.
pub fn handler(ctx: Context<MockSetRandomResult>, round_id: u64, numbers: Vec<u8>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let result = &mut ctx.accounts.round_randomness;

    result.round_id = round_id;
    result.lottery = ctx.accounts.round.lottery;
    result.bump = ctx.bumps.round_randomness;
    result.requested_at = now;
    result.set_result(numbers, now)?;

    emit!(RandomnessFulfilled {
        round_id,
        numbers: result.numbers.clone(),
    });

    Ok(())
}
